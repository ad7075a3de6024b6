//! Классификация знаков препинания
//!
//! Разбивает пунктуацию текста на пять категорий: завершающие,
//! разделяющие, выделяющие знаки, смайлики и символьные знаки.

use regex::Regex;
use std::sync::LazyLock;

/// Мастер-паттерн пунктуации
///
/// Один проход слева направо, совпадения не пересекаются. Альтернативы
/// упорядочены от самых специфичных (многосимвольных) к односимвольным,
/// поэтому каждое совпадение относится ровно к одной категории, а серия
/// вроде `?!!` или `...` считается одним знаком, не посимвольно.
static PUNCT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?x)
        (?P<smiles>[:;=8][-~^]?[)(\[\]DPp*]+|\){2,}|\({2,})
        |(?P<definitive>[?!]+\.{2,3}|[?!]{2,}|\.{2,3}|[….?!])
        |(?P<dividing>[,;:‑–—−-])
        |(?P<highlight>[)(\[\]{}«»„“”‘’‚'"])
        |(?P<digits>[+$/*%^])
        "#,
    )
    .unwrap()
});

/// Распределение знаков препинания по категориям
///
/// Доли считаются от общего числа распознанных знаков.
/// В тексте без пунктуации все доли равны нулю.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PunctuationDistribution {
    /// Завершающие знаки: `.`, `?`, `!`, `…` и их серии
    pub definitive: f64,
    /// Разделяющие знаки: запятая, точка с запятой, двоеточие, тире
    pub dividing: f64,
    /// Выделяющие знаки: скобки и кавычки
    pub highlight: f64,
    /// Смайлики
    pub smiles: f64,
    /// Символьные знаки: `+ $ / * % ^`
    pub digits: f64,
}

impl PunctuationDistribution {
    /// Названия колонок в порядке значений [`Self::to_row`]
    pub const COLUMNS: [&'static str; 5] = [
        "definitive_puncts",
        "dividing_puncts",
        "highlight_puncts",
        "smiles_puncts",
        "digits_puncts",
    ];

    /// Значения в порядке [`Self::COLUMNS`]
    pub fn to_row(&self) -> [f64; 5] {
        [
            self.definitive,
            self.dividing,
            self.highlight,
            self.smiles,
            self.digits,
        ]
    }
}

/// Распределение пунктуации текста по категориям
///
/// Каждый распознанный знак попадает ровно в одну категорию,
/// знаменатель общий. Пустой текст сразу даёт нулевое распределение.
pub fn punctuations_distribution(text: &str) -> PunctuationDistribution {
    if text.is_empty() {
        return PunctuationDistribution::default();
    }

    let mut definitive = 0usize;
    let mut dividing = 0usize;
    let mut highlight = 0usize;
    let mut smiles = 0usize;
    let mut digits = 0usize;
    let mut total = 0usize;

    for caps in PUNCT_PATTERN.captures_iter(text) {
        total += 1;
        if caps.name("smiles").is_some() {
            smiles += 1;
        } else if caps.name("definitive").is_some() {
            definitive += 1;
        } else if caps.name("dividing").is_some() {
            dividing += 1;
        } else if caps.name("highlight").is_some() {
            highlight += 1;
        } else if caps.name("digits").is_some() {
            digits += 1;
        }
    }

    if total == 0 {
        return PunctuationDistribution::default();
    }

    let total = total as f64;
    PunctuationDistribution {
        definitive: definitive as f64 / total,
        dividing: dividing as f64 / total,
        highlight: highlight as f64 / total,
        smiles: smiles as f64 / total,
        digits: digits as f64 / total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let dist = punctuations_distribution("");
        assert_eq!(dist, PunctuationDistribution::default());
    }

    #[test]
    fn test_text_without_punctuation() {
        let dist = punctuations_distribution("Привет мир");

        assert_eq!(dist.definitive, 0.0);
        assert_eq!(dist.dividing, 0.0);
        assert_eq!(dist.highlight, 0.0);
        assert_eq!(dist.smiles, 0.0);
        assert_eq!(dist.digits, 0.0);
    }

    #[test]
    fn test_exclamation_run_counts_once() {
        // Запятая и серия "!!!" — всего два знака
        let dist = punctuations_distribution("Привет, мир!!!");

        assert_eq!(dist.definitive, 0.5);
        assert_eq!(dist.dividing, 0.5);
        assert_eq!(dist.highlight, 0.0);
        assert_eq!(dist.smiles, 0.0);
        assert_eq!(dist.digits, 0.0);
    }

    #[test]
    fn test_mixed_definitive_runs() {
        // "?!" и "!.." — по одному завершающему знаку каждая серия
        let dist = punctuations_distribution("Как?! Да!..");

        assert_eq!(dist.definitive, 1.0);
        assert_eq!(dist.dividing, 0.0);
    }

    #[test]
    fn test_ellipsis_counts_once() {
        let dist = punctuations_distribution("Ну... ладно");
        assert_eq!(dist.definitive, 1.0);
    }

    #[test]
    fn test_smiles_take_precedence() {
        // ":-)" — смайлик, а не двоеточие с тире и скобкой
        let dist = punctuations_distribution("Ура :-)");

        assert_eq!(dist.smiles, 1.0);
        assert_eq!(dist.dividing, 0.0);
        assert_eq!(dist.highlight, 0.0);
    }

    #[test]
    fn test_highlight_and_dividing() {
        let dist = punctuations_distribution("Он сказал: «да», и ушёл");

        // «, », запятая и двоеточие — всего четыре знака
        assert_eq!(dist.highlight, 0.5);
        assert_eq!(dist.dividing, 0.5);
    }

    #[test]
    fn test_symbolic_marks() {
        let dist = punctuations_distribution("Скидка 50% + бонус");

        assert_eq!(dist.digits, 1.0);
        assert_eq!(dist.definitive, 0.0);
    }

    #[test]
    fn test_every_match_has_exactly_one_category() {
        let text = "Он спросил: «Когда?!» — и, не дождавшись, ушёл... Вот так :-) 100%";

        for caps in PUNCT_PATTERN.captures_iter(text) {
            let hits = ["smiles", "definitive", "dividing", "highlight", "digits"]
                .into_iter()
                .filter(|name| caps.name(name).is_some())
                .count();
            assert_eq!(hits, 1, "match {:?} fell into {} categories", &caps[0], hits);
        }
    }

    #[test]
    fn test_ratios_are_bounded() {
        let dist = punctuations_distribution("А, б; в: г — д (е) «ж» и... к?!");

        for ratio in dist.to_row() {
            assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
