//! # Стилометрия для атрибуции авторства
//!
//! Библиотека вычисляет числовой вектор признаков, описывающий стиль
//! текста, для последующей классификации по авторам.
//!
//! ## Модули
//!
//! - `models` - Модели данных
//! - `morph` - Морфологический анализ
//! - `features` - Извлечение признаков

pub mod features;
pub mod models;
pub mod morph;

pub use features::{FeaturesExtractor, ExtractorError};
pub use models::{FeatureMatrix, Morph, PosTag, TextUnit};
pub use morph::{MorphAnalyzer, RuMorphAnalyzer};
