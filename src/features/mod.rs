//! Извлечение стилометрических признаков
//!
//! Включает:
//! - Классификацию знаков препинания по категориям
//! - Лексические статистики (длины, иноязычные слова, богатство словаря)
//! - Распределение частей речи
//! - Агрегацию признаков в матрицу с fit/transform жизненным циклом

mod error;
mod extractor;
mod lexical;
mod pos;
mod punctuation;

pub use error::{ExtractorError, ExtractorResult};
pub use extractor::FeaturesExtractor;
pub use lexical::{avg_length, foreign_words_ratio, vocabulary_richness};
pub use pos::pos_distribution;
pub use punctuation::{punctuations_distribution, PunctuationDistribution};
