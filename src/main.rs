use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use log::info;
use related_items::{
    related, Document, Error, RawFields, Result, SectionWeights, TFIDFVectorizer, TermScores,
};

/// Rank related content items by section-weighted TF-IDF cosine similarity
#[derive(Parser)]
#[command(name = "related-items")]
#[command(version)]
struct Cli {
    /// JSON array of items with `title`, `shortDescription` and `tags`
    input: PathBuf,

    /// Number of related items listed per item
    #[arg(short, long, default_value = "3")]
    top: usize,

    /// JSON file overriding the section weights
    #[arg(short, long)]
    weights: Option<PathBuf>,

    /// Only report the item at this index
    #[arg(short, long)]
    item: Option<usize>,

    /// Also print the highest scoring terms of each item
    #[arg(long)]
    vectors: bool,
}

fn load_items(path: &Path) -> Result<Vec<RawFields>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn load_weights(path: Option<&Path>) -> Result<SectionWeights> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(SectionWeights::default()),
    }
}

fn title(item: &RawFields) -> &str {
    item.title.as_deref().unwrap_or_default()
}

fn print_item(index: usize, items: &[RawFields], vectors: &[TermScores<f64>], cli: &Cli) -> Result<()> {
    println!("[{}] {}", index, title(&items[index]));
    if cli.vectors {
        for (term, score) in vectors[index].top_terms(10) {
            println!("      {term}: {score:.6}");
        }
    }
    let hits = related(vectors, index, cli.top)?;
    for (rank, hit) in hits.list.iter().enumerate() {
        println!("  {:>3}. [{}] {} ({:.6})", rank + 1, hit.key, title(&items[hit.key]), hit.score);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let start = Instant::now();
    let items = load_items(&cli.input)?;
    let weights = load_weights(cli.weights.as_deref())?;

    let documents = items
        .iter()
        .map(RawFields::tokenize)
        .collect::<Result<Vec<Document>>>()?;
    info!("tokenized {} items in {:?}", documents.len(), start.elapsed());

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::with_weights(&documents, weights)?;
    let vectors = vectorizer.compute_vectors(&documents);
    info!(
        "vectorized {} items, {} terms, in {:?}",
        vectors.len(),
        vectorizer.vocab_size(),
        start.elapsed()
    );

    match cli.item {
        Some(index) => {
            if index >= items.len() {
                return Err(Error::IndexOutOfRange { index, len: items.len() });
            }
            print_item(index, &items, &vectors, cli)?;
        }
        None => {
            for index in 0..items.len() {
                print_item(index, &items, &vectors, cli)?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
