use std::ops::Deref;

use indexmap::{IndexMap, IndexSet};

/// Document count and per-term document frequency of one comparison set.
///
/// Built in one pass over a full snapshot; there is no way to remove a
/// document, a changed set means a new corpus.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// number of documents each term appears in
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Count every document of `documents`
    pub fn from_documents<D, T>(documents: &[D]) -> Self
    where
        D: Deref<Target = [T]>,
        T: AsRef<str>,
    {
        let mut corpus = Self::new();
        for doc in documents {
            corpus.add_doc(&**doc);
        }
        corpus
    }

    /// Add one document
    /// A term repeated inside the document is counted once.
    pub fn add_doc<T>(&mut self, tokens: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let distinct: IndexSet<&str> = tokens.iter().map(AsRef::<str>::as_ref).collect();
        for term in distinct {
            match self.term_counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.into(), 1);
                }
            }
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Terms with their document frequency, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, count)| (&**term, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_documents_not_occurrences() {
        let docs = vec![
            vec!["rust", "rust", "fast"],
            vec!["rust", "safe"],
            vec!["go"],
        ];
        let corpus = Corpus::from_documents(&docs);
        assert_eq!(corpus.get_doc_num(), 3);
        assert_eq!(corpus.get_term_count("rust"), 2);
        assert_eq!(corpus.get_term_count("fast"), 1);
        assert_eq!(corpus.get_term_count("missing"), 0);
        assert_eq!(corpus.vocab_size(), 4);
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&["b", "a", "b"]);
        corpus.add_doc(&["c", "a"]);
        let terms: Vec<(&str, u64)> = corpus.iter().collect();
        assert_eq!(terms, vec![("b", 1), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn empty_documents_still_count() {
        let mut corpus = Corpus::new();
        corpus.add_doc::<&str>(&[]);
        assert_eq!(corpus.get_doc_num(), 1);
        assert_eq!(corpus.vocab_size(), 0);
    }
}
