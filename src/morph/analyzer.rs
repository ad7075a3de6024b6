//! Интерфейс морфологического анализатора

use crate::models::{Morph, PosTag};

/// Трейт морфологического анализатора
///
/// Анализатор не хранит состояния между вызовами и безопасен для
/// одновременного использования из нескольких потоков. Результаты
/// разбора детерминированы: один и тот же токен всегда даёт один и
/// тот же разбор.
pub trait MorphAnalyzer: Send + Sync {
    /// Разобрать токен: определить часть речи и нормальную форму
    fn resolve(&self, token: &str) -> Morph;

    /// Полный упорядоченный набор частей речи анализатора
    ///
    /// Запрашивается один раз при обучении конвейера и фиксирует
    /// порядок колонок распределения частей речи.
    fn pos_tags(&self) -> &[PosTag];
}
