/// This crate turns the free-text fields of content items into
/// section-weighted TF-IDF vectors for ranking related items.
pub mod error;
pub mod tokenizer;
pub mod vectorizer;

use std::ops::Deref;

/// Error type of this crate
/// A single invalid-argument class covers absent inputs; the remaining
/// variants belong to related-item lookup and to the CLI input layer.
pub use error::{Error, Result};

/// Tokenizer
/// Converts the title, short description and tags of an item into one
/// normalized token stream with section marker remnants (`title`, `short`
/// `description`, `tags`) in front of each field.
///
/// `RawFields` is the deserializable input record; `Document` is the
/// immutable token sequence it produces.
pub use tokenizer::{tokenize, Document, RawFields};

/// Section markers injected by the tokenizer
pub use tokenizer::section::SectionMarker;

/// TF-IDF Vectorizer
/// Built once from a full corpus snapshot. Construction computes the
/// document frequency of every term and derives `idf = ln(N / df)`; the IDF
/// table is immutable afterwards.
///
/// `TFIDFVectorizer<N, E>` has the following generic parameters:
/// - `N`: score type (`f32` or `f64`, default `f64`)
/// - `E`: TF-IDF calculation engine (default `DefaultTFIDFEngine`)
///
/// # Thread Safety
/// The vectorizer holds no mutable state, so it can be shared across threads
/// and score different target documents concurrently.
pub use vectorizer::TFIDFVectorizer;

/// Corpus statistics and the IDF table derived from them
pub use vectorizer::{corpus::Corpus, idf::IDFTable};

/// Per-document token statistics used for TF
pub use vectorizer::token::{TokenFrequency, TokenStat};

/// TF IDF Calculation Engine Trait
/// Plug a different formula into `TFIDFVectorizer<N, E>` by implementing this
/// trait. `DefaultTFIDFEngine` computes `count / len * ln(N / df) * weight`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Section weighting
/// Title terms are boosted 3.0, short description terms 2.0 and tag terms
/// 1.5; everything else, marker remnants included, gets 1.0.
pub use vectorizer::weight::{SectionBounds, SectionWeights};

/// Sparse TF-IDF vector with cosine similarity
pub use vectorizer::scores::TermScores;

/// Related item ranking
/// - `Hits`: ranked result list
/// - `HitEntry`: one result, item index and cosine similarity
/// - `related`: rank all other items of a corpus against one of them
pub use vectorizer::evaluate::scoring::{related, HitEntry, Hits};

/// Build a vectorizer over a corpus of tokenized documents
pub fn build_vectorizer<D, T>(documents: &[D]) -> TFIDFVectorizer
where
    D: Deref<Target = [T]>,
    T: AsRef<str>,
{
    TFIDFVectorizer::new(documents)
}

/// TF-IDF vector of `target` under `handle`
///
/// # Errors
/// `Error::InvalidArgument` if `target` is absent.
pub fn compute_vector<T>(handle: &TFIDFVectorizer, target: Option<&[T]>) -> Result<TermScores<f64>>
where
    T: AsRef<str>,
{
    let target = target.ok_or(Error::InvalidArgument("target document must not be null"))?;
    Ok(handle.compute_vector(target))
}
