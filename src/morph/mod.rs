//! Морфологический анализ
//!
//! Включает:
//! - Узкий интерфейс анализатора (часть речи + нормальная форма)
//! - Встроенный словарно-суффиксный анализатор русского языка

mod analyzer;
mod dictionary;

pub use analyzer::MorphAnalyzer;
pub use dictionary::RuMorphAnalyzer;
