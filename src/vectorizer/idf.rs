use indexmap::IndexMap;
use num::Num;

use crate::vectorizer::{corpus::Corpus, tfidf::TFIDFEngine};

/// IDF of every term of a corpus
/// Computed once from a [`Corpus`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct IDFTable<N>
where
    N: Num + Copy,
{
    idf: IndexMap<Box<str>, N>,
    /// document count the table was computed from
    doc_num: u64,
}

impl<N> IDFTable<N>
where
    N: Num + Copy,
{
    pub fn from_corpus<E>(corpus: &Corpus) -> Self
    where
        E: TFIDFEngine<N>,
    {
        let doc_num = corpus.get_doc_num();
        let idf = corpus
            .iter()
            .map(|(term, doc_freq)| (Box::<str>::from(term), E::idf(doc_num, doc_freq)))
            .collect();
        Self { idf, doc_num }
    }

    /// IDF of `term`; a term the corpus never saw is not discriminating and gets zero
    #[inline]
    pub fn get(&self, term: &str) -> N {
        self.idf.get(term).copied().unwrap_or_else(N::zero)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.idf.iter().map(|(term, idf)| (&**term, *idf))
    }
}
