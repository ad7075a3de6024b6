//! Типы данных для стилометрического анализа

use serde::{Deserialize, Serialize};

/// Один текст под анализом
///
/// Создаётся внешним сегментатором и далее нигде не изменяется:
/// все функции извлечения признаков читают его только по ссылке.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextUnit {
    /// Исходная строка текста
    pub text: String,
    /// Токены в порядке появления (слова, числа, знаки препинания)
    pub tokens: Vec<String>,
    /// Предложения в порядке появления
    pub sentences: Vec<String>,
    /// Автор текста (есть только у обучающих данных)
    #[serde(default)]
    pub author: Option<String>,
}

impl TextUnit {
    /// Создать текст без метки автора
    pub fn new(text: &str, tokens: Vec<String>, sentences: Vec<String>) -> Self {
        Self {
            text: text.to_string(),
            tokens,
            sentences,
            author: None,
        }
    }

    /// Создать текст с меткой автора
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }
}

/// Часть речи
///
/// Фиксированный набор категорий морфологического движка.
/// Порядок в [`PosTag::ALL`] определяет порядок колонок распределения
/// частей речи и не меняется между запусками.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    /// Существительное
    Noun,
    /// Прилагательное (полное)
    Adjf,
    /// Прилагательное (краткое)
    Adjs,
    /// Компаратив
    Comp,
    /// Глагол (личная форма)
    Verb,
    /// Глагол (инфинитив)
    Infn,
    /// Причастие (полное)
    Prtf,
    /// Причастие (краткое)
    Prts,
    /// Деепричастие
    Grnd,
    /// Числительное
    Numr,
    /// Наречие
    Advb,
    /// Местоимение
    Npro,
    /// Предикатив
    Pred,
    /// Предлог
    Prep,
    /// Союз
    Conj,
    /// Частица
    Prcl,
    /// Междометие
    Intj,
}

impl PosTag {
    /// Все части речи в каноническом порядке
    pub const ALL: [PosTag; 17] = [
        PosTag::Noun,
        PosTag::Adjf,
        PosTag::Adjs,
        PosTag::Comp,
        PosTag::Verb,
        PosTag::Infn,
        PosTag::Prtf,
        PosTag::Prts,
        PosTag::Grnd,
        PosTag::Numr,
        PosTag::Advb,
        PosTag::Npro,
        PosTag::Pred,
        PosTag::Prep,
        PosTag::Conj,
        PosTag::Prcl,
        PosTag::Intj,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Adjf => "ADJF",
            PosTag::Adjs => "ADJS",
            PosTag::Comp => "COMP",
            PosTag::Verb => "VERB",
            PosTag::Infn => "INFN",
            PosTag::Prtf => "PRTF",
            PosTag::Prts => "PRTS",
            PosTag::Grnd => "GRND",
            PosTag::Numr => "NUMR",
            PosTag::Advb => "ADVB",
            PosTag::Npro => "NPRO",
            PosTag::Pred => "PRED",
            PosTag::Prep => "PREP",
            PosTag::Conj => "CONJ",
            PosTag::Prcl => "PRCL",
            PosTag::Intj => "INTJ",
        }
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Результат морфологического разбора одного токена
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morph {
    /// Часть речи; `None`, если токен не разбирается
    /// (пунктуация, числа, иноязычные слова)
    pub pos: Option<PosTag>,
    /// Нормальная (словарная) форма токена
    pub normal_form: String,
}

/// Матрица признаков
///
/// Одна строка на текст, фиксированный порядок колонок.
/// Порядок колонок задаётся при обучении экстрактора и одинаков
/// для обучающей и предсказательной выборок.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureMatrix {
    /// Названия колонок
    pub columns: Vec<String>,
    /// Матрица значений [тексты x признаки]
    pub matrix: Vec<Vec<f64>>,
    /// Метки авторов, параллельные строкам матрицы
    pub labels: Vec<Option<String>>,
}

impl FeatureMatrix {
    /// Количество текстов
    pub fn n_texts(&self) -> usize {
        self.matrix.len()
    }

    /// Количество признаков
    pub fn n_features(&self) -> usize {
        self.columns.len()
    }

    /// Получить вектор признаков текста
    pub fn get_row(&self, idx: usize) -> Option<&Vec<f64>> {
        self.matrix.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_order_is_stable() {
        assert_eq!(PosTag::ALL.len(), 17);
        assert_eq!(PosTag::ALL[0], PosTag::Noun);
        assert_eq!(PosTag::ALL[16], PosTag::Intj);
    }

    #[test]
    fn test_text_unit_json_roundtrip() {
        let unit = TextUnit::new(
            "Привет, мир!",
            vec!["Привет".to_string(), ",".to_string(), "мир".to_string(), "!".to_string()],
            vec!["Привет, мир!".to_string()],
        )
        .with_author("ivanov");

        let json = serde_json::to_string(&unit).unwrap();
        let parsed: TextUnit = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.text, unit.text);
        assert_eq!(parsed.tokens, unit.tokens);
        assert_eq!(parsed.author, Some("ivanov".to_string()));
    }

    #[test]
    fn test_text_unit_author_is_optional_in_json() {
        let json = r#"{"text":"мир","tokens":["мир"],"sentences":["мир"]}"#;
        let parsed: TextUnit = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.author, None);
    }
}
