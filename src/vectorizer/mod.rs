pub mod corpus;
pub mod evaluate;
pub mod idf;
pub mod scores;
pub mod tfidf;
pub mod token;
pub mod weight;

use std::ops::Deref;

use log::{debug, trace};
use num::Num;
use rayon::prelude::*;

use crate::error::Result;
use crate::vectorizer::{
    corpus::Corpus,
    idf::IDFTable,
    scores::TermScores,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::TokenFrequency,
    weight::{SectionBounds, SectionWeights},
};

/// Section-weighted TF-IDF vectorizer
///
/// Holds the IDF table of one corpus snapshot plus the section weights.
/// Both are fixed at construction, so a shared reference can score documents
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    idf_table: IDFTable<N>,
    weights: SectionWeights,
    _marker: std::marker::PhantomData<E>,
}

impl<N, E> TFIDFVectorizer<N, E>
where
    N: Num + Copy + Into<f64> + Send + Sync,
    E: TFIDFEngine<N> + Send + Sync,
{
    /// Build the vectorizer over a full corpus with the default section weights
    pub fn new<D, T>(documents: &[D]) -> Self
    where
        D: Deref<Target = [T]>,
        T: AsRef<str>,
    {
        Self::build(documents, SectionWeights::default())
    }

    /// Build the vectorizer over a full corpus with custom section weights
    ///
    /// # Errors
    /// `Error::InvalidArgument` if a weight is negative or not finite.
    pub fn with_weights<D, T>(documents: &[D], weights: SectionWeights) -> Result<Self>
    where
        D: Deref<Target = [T]>,
        T: AsRef<str>,
    {
        weights.validate()?;
        Ok(Self::build(documents, weights))
    }

    fn build<D, T>(documents: &[D], weights: SectionWeights) -> Self
    where
        D: Deref<Target = [T]>,
        T: AsRef<str>,
    {
        let corpus = Corpus::from_documents(documents);
        let idf = IDFTable::from_corpus::<E>(&corpus);
        debug!(
            "idf table built: {} documents, {} terms",
            idf.doc_num(),
            idf.len()
        );
        Self {
            idf_table: idf,
            weights,
            _marker: std::marker::PhantomData,
        }
    }

    /// TF-IDF vector of `target`
    ///
    /// `score(t) = count(t) / |target| * idf(t) * weight(t)`, where the
    /// weight comes from the section of the first occurrence of `t`.
    /// Terms scoring zero are left out; an empty target gives an empty vector.
    pub fn compute_vector<T>(&self, target: &[T]) -> TermScores<N>
    where
        T: AsRef<str>,
    {
        let freq = TokenFrequency::from_tokens(target);
        let doc_len = freq.token_sum();
        let bounds = SectionBounds::locate(target);

        let mut scores = TermScores::with_capacity(freq.token_num());
        for (term, stat) in freq.iter() {
            let tf = E::tf(stat.count, doc_len);
            let idf = self.idf_table.get(term);
            let weight = self.weights.weight_at(bounds.as_ref(), stat.first_position);
            scores.insert(term, E::tf_idf(tf, idf, weight));
        }
        trace!(
            "vector computed: {} tokens, {} distinct, {} scored",
            doc_len,
            freq.token_num(),
            scores.len()
        );
        scores
    }

    /// TF-IDF vectors of every document, in input order
    pub fn compute_vectors<D, T>(&self, documents: &[D]) -> Vec<TermScores<N>>
    where
        D: Deref<Target = [T]> + Sync,
        T: AsRef<str> + Sync,
    {
        documents
            .par_iter()
            .map(|doc| self.compute_vector(&**doc))
            .collect()
    }

    /// IDF of `term`, zero when the corpus never saw it
    #[inline]
    pub fn idf(&self, term: &str) -> N {
        self.idf_table.get(term)
    }

    /// Number of documents the IDF table was built from
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.idf_table.doc_num()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.idf_table.len()
    }

    /// Read-only view of the IDF table
    #[inline]
    pub fn idf_table(&self) -> &IDFTable<N> {
        &self.idf_table
    }

    #[inline]
    pub fn weights(&self) -> &SectionWeights {
        &self.weights
    }
}
