//! Распределение частей речи
//!
//! Строит матрицу: одна строка на текст, одна колонка на часть речи
//! из замороженной схемы.

use crate::features::error::{ExtractorError, ExtractorResult};
use crate::models::PosTag;
use crate::morph::MorphAnalyzer;
use std::collections::HashMap;

/// Распределение частей речи по текстам
///
/// Ячейка — доля токенов с данной частью речи среди токенов текста,
/// у которых часть речи вообще определилась. Неразбираемые токены
/// (пунктуация, числа) не входят ни в числитель, ни в знаменатель.
///
/// Порядок колонок задаёт `schema` — список, зафиксированный при
/// обучении конвейера; он не выводится заново из обрабатываемой
/// партии. Если анализатор вернул часть речи вне схемы, это ошибка
/// контракта: схема устарела либо анализатор подменён.
///
/// Текст без единого разбираемого токена получает строку из NaN:
/// распределение для него не определено.
pub fn pos_distribution(
    texts: &[Vec<String>],
    schema: &[PosTag],
    morph: &dyn MorphAnalyzer,
) -> ExtractorResult<Vec<Vec<f64>>> {
    let mut result = Vec::with_capacity(texts.len());

    for tokens in texts {
        let mut counts: HashMap<PosTag, usize> = HashMap::new();

        for token in tokens {
            if let Some(pos) = morph.resolve(token).pos {
                if !schema.contains(&pos) {
                    return Err(ExtractorError::UnknownPos(pos));
                }
                *counts.entry(pos).or_insert(0) += 1;
            }
        }

        let resolvable: usize = counts.values().sum();
        if resolvable == 0 {
            result.push(vec![f64::NAN; schema.len()]);
            continue;
        }

        let row = schema
            .iter()
            .map(|pos| *counts.get(pos).unwrap_or(&0) as f64 / resolvable as f64)
            .collect();
        result.push(row);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Morph;
    use crate::morph::RuMorphAnalyzer;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let morph = RuMorphAnalyzer::new();
        let texts = vec![tokens(&["кот", "видит", "красивый", "дом"])];

        let rows = pos_distribution(&texts, &PosTag::ALL, &morph).unwrap();

        let sum: f64 = rows[0].iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unresolvable_tokens_are_excluded() {
        let morph = RuMorphAnalyzer::new();
        // Пунктуация и число не входят в знаменатель
        let texts = vec![tokens(&["кот", ",", "123", "дом"])];

        let rows = pos_distribution(&texts, &PosTag::ALL, &morph).unwrap();

        let noun_idx = PosTag::ALL.iter().position(|p| *p == PosTag::Noun).unwrap();
        assert_eq!(rows[0][noun_idx], 1.0);
    }

    #[test]
    fn test_text_without_resolvable_tokens_gets_nan_row() {
        let morph = RuMorphAnalyzer::new();
        let texts = vec![
            tokens(&[",", "!!!", "..."]),
            tokens(&["кот", "и", "пёс"]),
        ];

        let rows = pos_distribution(&texts, &PosTag::ALL, &morph).unwrap();

        assert!(rows[0].iter().all(|v| v.is_nan()));

        let sum: f64 = rows[1].iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_row_shape_matches_schema() {
        let morph = RuMorphAnalyzer::new();
        let texts = vec![tokens(&["кот"]), tokens(&["дом", "стена"])];

        let rows = pos_distribution(&texts, &PosTag::ALL, &morph).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == PosTag::ALL.len()));
    }

    /// Анализатор, у которого схема объявляет меньше, чем он возвращает
    struct NarrowAnalyzer;

    impl MorphAnalyzer for NarrowAnalyzer {
        fn resolve(&self, token: &str) -> Morph {
            Morph {
                pos: Some(PosTag::Verb),
                normal_form: token.to_lowercase(),
            }
        }

        fn pos_tags(&self) -> &[PosTag] {
            &[PosTag::Noun]
        }
    }

    #[test]
    fn test_pos_outside_schema_is_an_error() {
        let morph = NarrowAnalyzer;
        let schema = morph.pos_tags().to_vec();
        let texts = vec![tokens(&["бежит"])];

        let err = pos_distribution(&texts, &schema, &morph).unwrap_err();
        assert!(matches!(err, ExtractorError::UnknownPos(PosTag::Verb)));
    }
}
