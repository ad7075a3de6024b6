//! Агрегация признаков
//!
//! Собирает все стилометрические признаки партии текстов в одну
//! матрицу с фиксированным порядком колонок.

use crate::features::error::{ExtractorError, ExtractorResult};
use crate::features::lexical::{avg_length, foreign_words_ratio, vocabulary_richness};
use crate::features::pos::pos_distribution;
use crate::features::punctuation::{punctuations_distribution, PunctuationDistribution};
use crate::models::{FeatureMatrix, PosTag, TextUnit};
use crate::morph::{MorphAnalyzer, RuMorphAnalyzer};
use tracing::{debug, info};

/// Экстрактор признаков с жизненным циклом fit/transform
///
/// `fit` фиксирует схему: упорядоченный список частей речи (берётся
/// у анализатора один раз) и полный список колонок. `transform`
/// использует только замороженную схему, ничего не выводя заново из
/// новой партии, поэтому матрицы обучающей и предсказательной выборок
/// всегда совпадают по набору и порядку колонок.
pub struct FeaturesExtractor {
    /// Морфологический анализатор
    morph: Box<dyn MorphAnalyzer>,
    /// Замороженный порядок частей речи
    pos_schema: Vec<PosTag>,
    /// Замороженные названия колонок
    columns: Vec<String>,
    /// Метки авторов обучающей партии
    labels: Vec<Option<String>>,
    /// Обучён ли экстрактор
    fitted: bool,
}

impl FeaturesExtractor {
    /// Создать экстрактор со встроенным анализатором
    pub fn new() -> Self {
        Self::with_analyzer(Box::new(RuMorphAnalyzer::new()))
    }

    /// Создать экстрактор с заданным анализатором
    pub fn with_analyzer(morph: Box<dyn MorphAnalyzer>) -> Self {
        Self {
            morph,
            pos_schema: Vec::new(),
            columns: Vec::new(),
            labels: Vec::new(),
            fitted: false,
        }
    }

    /// Зафиксировать схему признаков по обучающей партии
    ///
    /// Набор частей речи запрашивается у анализатора ровно здесь
    /// и далее не пересматривается.
    pub fn fit(&mut self, texts: &[TextUnit]) {
        self.pos_schema = self.morph.pos_tags().to_vec();
        self.columns = Self::build_columns(&self.pos_schema);
        self.labels = texts.iter().map(|t| t.author.clone()).collect();
        self.fitted = true;

        info!(
            texts = texts.len(),
            features = self.columns.len(),
            "features extractor fitted"
        );
    }

    /// Построить матрицу признаков по замороженной схеме
    pub fn transform(&self, texts: &[TextUnit]) -> ExtractorResult<FeatureMatrix> {
        if !self.fitted {
            return Err(ExtractorError::NotFitted);
        }

        let token_lists: Vec<Vec<String>> = texts.iter().map(|t| t.tokens.clone()).collect();
        let sentence_lists: Vec<Vec<String>> =
            texts.iter().map(|t| t.sentences.clone()).collect();

        let avg_tokens = avg_length(&token_lists);
        let avg_sentences = avg_length(&sentence_lists);
        let pos_rows = pos_distribution(&token_lists, &self.pos_schema, self.morph.as_ref())?;

        let mut matrix = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            let mut row = Vec::with_capacity(self.columns.len());
            row.push(avg_tokens[i]);
            row.push(avg_sentences[i]);
            row.push(foreign_words_ratio(&text.tokens));
            row.push(vocabulary_richness(&text.tokens, self.morph.as_ref()));
            row.extend_from_slice(&pos_rows[i]);
            row.extend_from_slice(&punctuations_distribution(&text.text).to_row());
            matrix.push(row);
        }

        debug!(rows = matrix.len(), "feature matrix assembled");

        Ok(FeatureMatrix {
            columns: self.columns.clone(),
            matrix,
            labels: texts.iter().map(|t| t.author.clone()).collect(),
        })
    }

    /// Обучить и сразу преобразовать партию
    pub fn fit_transform(&mut self, texts: &[TextUnit]) -> ExtractorResult<FeatureMatrix> {
        self.fit(texts);
        self.transform(texts)
    }

    /// Названия колонок (пусто до обучения)
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Замороженный порядок частей речи (пусто до обучения)
    pub fn pos_schema(&self) -> &[PosTag] {
        &self.pos_schema
    }

    /// Метки авторов обучающей партии
    pub fn labels(&self) -> &[Option<String>] {
        &self.labels
    }

    /// Обучён ли экстрактор
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    fn build_columns(schema: &[PosTag]) -> Vec<String> {
        let mut columns = vec![
            "avg_token_length".to_string(),
            "avg_sentence_length".to_string(),
            "foreign_words_ratio".to_string(),
            "vocabulary_richness".to_string(),
        ];
        columns.extend(
            schema
                .iter()
                .map(|pos| format!("pos_{}", pos.as_str().to_lowercase())),
        );
        columns.extend(
            PunctuationDistribution::COLUMNS
                .iter()
                .map(|c| c.to_string()),
        );
        columns
    }
}

impl Default for FeaturesExtractor {
    fn default() -> Self {
        Self::new()
    }
}
