//! Модели данных
//!
//! Общие типы: текст с токенами и предложениями, части речи,
//! результат морфологического разбора, матрица признаков.

mod types;

pub use types::{FeatureMatrix, Morph, PosTag, TextUnit};
