//! Ошибки извлечения признаков

use crate::models::PosTag;
use thiserror::Error;

/// Ошибки конвейера извлечения признаков
///
/// Вырожденные входы (пустой текст, пустой список токенов) ошибками
/// не считаются: для них признаки принимают значение NaN или 0.
/// Сюда попадают только нарушения контракта.
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("extractor is not fitted, call fit() before transform()")]
    NotFitted,

    #[error("morphological analyzer returned POS tag {0} outside the frozen schema")]
    UnknownPos(PosTag),
}

/// Результат операций извлечения признаков
pub type ExtractorResult<T> = Result<T, ExtractorError>;
