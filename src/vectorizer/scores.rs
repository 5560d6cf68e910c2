use indexmap::IndexMap;
use num::Num;
use serde::{Deserialize, Serialize};

/// Sparse TF-IDF vector of one document
///
/// Only terms with a non-zero score are stored; every other term reads as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermScores<N>
where
    N: Num + Copy,
{
    scores: IndexMap<String, N>,
}

impl<N> Default for TermScores<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> TermScores<N>
where
    N: Num + Copy,
{
    pub fn new() -> Self {
        Self {
            scores: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scores: IndexMap::with_capacity(capacity),
        }
    }

    /// Store a score; zero scores are dropped to keep the vector sparse
    #[inline]
    pub(crate) fn insert(&mut self, term: &str, score: N) {
        if !score.is_zero() {
            self.scores.insert(term.to_string(), score);
        }
    }

    /// Score of `term`, zero when absent
    #[inline]
    pub fn score(&self, term: &str) -> N {
        self.scores.get(term).copied().unwrap_or_else(N::zero)
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.scores.get(term).copied()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.scores.contains_key(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> {
        self.scores.iter().map(|(term, score)| (term.as_str(), *score))
    }

    pub fn into_map(self) -> IndexMap<String, N> {
        self.scores
    }
}

/// Vector arithmetic used to compare two documents
impl<N> TermScores<N>
where
    N: Num + Copy + Into<f64>,
{
    /// Euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    pub fn norm(&self) -> f64 {
        self.scores
            .values()
            .map(|v| {
                let v: f64 = (*v).into();
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }

    /// d(a, b) = Σ(a_i * b_i)
    pub fn dot(&self, other: &TermScores<N>) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .scores
            .iter()
            .filter_map(|(term, a)| {
                large
                    .scores
                    .get(term.as_str())
                    .map(|b| {
                        let (a, b): (f64, f64) = ((*a).into(), (*b).into());
                        a * b
                    })
            })
            .sum()
    }

    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// Zero when either vector is empty or all zero.
    pub fn cosine_similarity(&self, other: &TermScores<N>) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }

    /// The `n` highest scoring terms, ties in first-seen order
    pub fn top_terms(&self, n: usize) -> Vec<(&str, f64)> {
        let mut terms: Vec<(&str, f64)> = self
            .scores
            .iter()
            .map(|(term, score)| {
                let score: f64 = (*score).into();
                (term.as_str(), score)
            })
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms.truncate(n);
        terms
    }
}

impl<N> FromIterator<(String, N)> for TermScores<N>
where
    N: Num + Copy,
{
    fn from_iter<I: IntoIterator<Item = (String, N)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (term, score) in iter {
            scores.insert(&term, score);
        }
        scores
    }
}
