//! Лексические статистики
//!
//! Скалярные признаки текста: средняя длина элементов, доля
//! иноязычных слов, богатство словаря.

use crate::morph::MorphAnalyzer;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Иноязычное слово: буквенная последовательность без цифр,
/// подчёркиваний и букв кириллицы (включая ё/Ё)
static FOREIGN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b[^\s\d\Wа-яА-ЯёЁ_]+\b").unwrap());

/// Средняя длина элементов каждой последовательности
///
/// На входе — по одной последовательности токенов или предложений
/// на текст, на выходе — по одному значению на текст. Длина считается
/// в символах. Для пустой последовательности средняя длина не
/// определена и возвращается NaN, а не ноль: пустой список — это не
/// список элементов нулевой длины.
pub fn avg_length(items: &[Vec<String>]) -> Vec<f64> {
    items
        .iter()
        .map(|seq| {
            if seq.is_empty() {
                f64::NAN
            } else {
                let total: usize = seq.iter().map(|s| s.chars().count()).sum();
                total as f64 / seq.len() as f64
            }
        })
        .collect()
}

/// Доля иноязычных слов среди всех токенов
///
/// Токен считается иноязычным, если содержит буквенную
/// последовательность вне кириллицы. Для пустого списка токенов
/// возвращается NaN.
pub fn foreign_words_ratio(tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return f64::NAN;
    }

    let foreign = tokens.iter().filter(|t| FOREIGN_WORD.is_match(t)).count();
    foreign as f64 / tokens.len() as f64
}

/// Богатство словаря: доля различных нормальных форм
///
/// Каждый токен приводится к нормальной форме, результат — отношение
/// числа различных форм к общему числу токенов. Токены не
/// фильтруются: пунктуация и повторы учитываются как есть, отсев —
/// забота вызывающего. Для пустого списка возвращается NaN.
pub fn vocabulary_richness(tokens: &[String], morph: &dyn MorphAnalyzer) -> f64 {
    if tokens.is_empty() {
        return f64::NAN;
    }

    let normal_forms: HashSet<String> = tokens
        .iter()
        .map(|token| morph.resolve(token).normal_form)
        .collect();

    normal_forms.len() as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::RuMorphAnalyzer;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_avg_length_empty_sequence_is_nan() {
        let result = avg_length(&[vec![]]);

        assert_eq!(result.len(), 1);
        assert!(result[0].is_nan());
    }

    #[test]
    fn test_avg_length_basic() {
        let result = avg_length(&[tokens(&["a", "bb"])]);
        assert_eq!(result, vec![1.5]);
    }

    #[test]
    fn test_avg_length_counts_chars_not_bytes() {
        // Кириллица: длина в символах, не в байтах
        let result = avg_length(&[tokens(&["мир"])]);
        assert_eq!(result, vec![3.0]);
    }

    #[test]
    fn test_avg_length_one_value_per_text() {
        let result = avg_length(&[tokens(&["ab"]), vec![], tokens(&["a", "b", "c"])]);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], 2.0);
        assert!(result[1].is_nan());
        assert_eq!(result[2], 1.0);
    }

    #[test]
    fn test_foreign_words_ratio_empty_is_nan() {
        assert!(foreign_words_ratio(&[]).is_nan());
    }

    #[test]
    fn test_foreign_words_ratio_half() {
        let ratio = foreign_words_ratio(&tokens(&["hello", "мир"]));
        assert_eq!(ratio, 0.5);
    }

    #[test]
    fn test_foreign_words_ratio_russian_only() {
        let ratio = foreign_words_ratio(&tokens(&["привет", "мир", "ёлка"]));
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn test_foreign_words_ratio_is_bounded() {
        let ratio = foreign_words_ratio(&tokens(&["api", "сервер", "rest", "и", "json"]));
        assert!((0.0..=1.0).contains(&ratio));
        assert_eq!(ratio, 0.6);
    }

    #[test]
    fn test_vocabulary_richness_empty_is_nan() {
        let morph = RuMorphAnalyzer::new();
        assert!(vocabulary_richness(&[], &morph).is_nan());
    }

    #[test]
    fn test_vocabulary_richness_all_distinct() {
        let morph = RuMorphAnalyzer::new();
        let richness = vocabulary_richness(&tokens(&["кот", "кошка"]), &morph);
        assert_eq!(richness, 1.0);
    }

    #[test]
    fn test_vocabulary_richness_repeats() {
        let morph = RuMorphAnalyzer::new();
        let richness = vocabulary_richness(&tokens(&["кот", "кот"]), &morph);
        assert_eq!(richness, 0.5);
    }

    #[test]
    fn test_vocabulary_richness_merges_word_forms() {
        let morph = RuMorphAnalyzer::new();

        // "читает" и "читала" — формы одного глагола
        let richness = vocabulary_richness(&tokens(&["читает", "читала"]), &morph);
        assert_eq!(richness, 0.5);
    }

    #[test]
    fn test_vocabulary_richness_in_unit_interval() {
        let morph = RuMorphAnalyzer::new();
        let richness =
            vocabulary_richness(&tokens(&["мама", "мыла", "раму", ",", "мама"]), &morph);
        assert!(richness > 0.0 && richness <= 1.0);
    }
}
