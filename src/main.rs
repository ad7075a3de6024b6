//! CLI для извлечения стилометрических признаков
//!
//! Использование:
//! ```bash
//! cargo run -- --help
//! cargo run -- features --input corpus.jsonl
//! cargo run -- demo
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_stylometry::{
    features::{avg_length, foreign_words_ratio, punctuations_distribution, vocabulary_richness},
    FeaturesExtractor, MorphAnalyzer, RuMorphAnalyzer, TextUnit,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "stylometry")]
#[command(version = "0.1.0")]
#[command(about = "Stylometric feature extraction for authorship attribution", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Уровень логирования
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Извлечь матрицу признаков из сегментированного корпуса
    Features {
        /// Файл корпуса в формате JSON Lines (по одному тексту на строку)
        #[arg(short, long)]
        input: String,

        /// Записать матрицу в JSON-файл вместо вывода таблицы
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Демонстрация конвейера на встроенном примере
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Настройка логирования
    let log_level = match cli.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Features { input, output } => {
            run_features(&input, output.as_deref())?;
        }
        Commands::Demo => {
            run_demo()?;
        }
    }

    Ok(())
}

/// Прочитать корпус из JSON Lines файла
fn read_corpus(path: &str) -> Result<Vec<TextUnit>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus file {}", path))?;

    let mut texts = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let unit: TextUnit = serde_json::from_str(line)
            .with_context(|| format!("invalid text record at line {}", number + 1))?;
        texts.push(unit);
    }

    Ok(texts)
}

fn run_features(input: &str, output: Option<&str>) -> Result<()> {
    let texts = read_corpus(input)?;
    info!(texts = texts.len(), "corpus loaded");

    let mut extractor = FeaturesExtractor::new();
    let matrix = extractor.fit_transform(&texts)?;

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&matrix)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write feature matrix to {}", path))?;
        info!(path = path, "feature matrix written");
        return Ok(());
    }

    println!("\nFEATURES ({} texts x {} columns):\n", matrix.n_texts(), matrix.n_features());
    println!("{}", matrix.columns.join("\t"));
    for (row, label) in matrix.matrix.iter().zip(matrix.labels.iter()) {
        let values: Vec<String> = row.iter().map(|v| format!("{:.4}", v)).collect();
        match label {
            Some(author) => println!("{}\t[{}]", values.join("\t"), author),
            None => println!("{}", values.join("\t")),
        }
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    println!("\n🔬 Stylometry Pipeline Demo\n");

    let text = TextUnit::new(
        "Привет, мир!!! Кот читает книгу :-)",
        ["Привет", ",", "мир", "!!!", "Кот", "читает", "книгу", ":-)"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vec![
            "Привет, мир!!!".to_string(),
            "Кот читает книгу :-)".to_string(),
        ],
    )
    .with_author("ivanov");

    println!("Input text: \"{}\"\n", text.text);

    // 1. Морфологический разбор
    println!("1️⃣  MORPHOLOGY");
    println!("──────────────");
    let morph = RuMorphAnalyzer::new();
    for token in &text.tokens {
        let parsed = morph.resolve(token);
        let pos = parsed
            .pos
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| "-".to_string());
        println!("   {:10} -> {:10} [{}]", token, parsed.normal_form, pos);
    }

    // 2. Лексические статистики
    println!("\n2️⃣  LEXICAL STATISTICS");
    println!("──────────────────────");
    let avg_tokens = avg_length(&[text.tokens.clone()]);
    let avg_sentences = avg_length(&[text.sentences.clone()]);
    println!("   Avg token length:    {:.3}", avg_tokens[0]);
    println!("   Avg sentence length: {:.3}", avg_sentences[0]);
    println!(
        "   Foreign words ratio: {:.3}",
        foreign_words_ratio(&text.tokens)
    );
    println!(
        "   Vocabulary richness: {:.3}",
        vocabulary_richness(&text.tokens, &morph)
    );

    // 3. Пунктуация
    println!("\n3️⃣  PUNCTUATION");
    println!("───────────────");
    let punct = punctuations_distribution(&text.text);
    println!("   Definitive: {:.3}", punct.definitive);
    println!("   Dividing:   {:.3}", punct.dividing);
    println!("   Highlight:  {:.3}", punct.highlight);
    println!("   Smiles:     {:.3}", punct.smiles);
    println!("   Digits:     {:.3}", punct.digits);

    // 4. Полная матрица
    println!("\n4️⃣  FEATURE MATRIX");
    println!("──────────────────");
    let mut extractor = FeaturesExtractor::new();
    let matrix = extractor.fit_transform(&[text])?;
    println!("   Texts:    {}", matrix.n_texts());
    println!("   Features: {}", matrix.n_features());
    for (column, value) in matrix.columns.iter().zip(matrix.matrix[0].iter()) {
        if *value != 0.0 {
            println!("   {:22} {:.4}", column, value);
        }
    }

    println!("\n✅ Demo complete!\n");

    Ok(())
}
