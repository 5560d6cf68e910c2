use std::fmt::{self, Debug, Display};

use num::Num;
use rayon::prelude::*;

use crate::{error::{Error, Result}, vectorizer::scores::TermScores};

/// One ranked item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
}

/// Structure to store ranking results
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score
    /// NaN scores are dropped, equal scores keep their input order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep the first `n` results
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|hit| &hit.key)
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?}: {:.6}", hit.key, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.6})", rank + 1, hit.key, hit.score)?;
        }
        Ok(())
    }
}

/// Rank every other vector by cosine similarity to `vectors[target]`
///
/// Keys of the returned hits are indices into `vectors`; the target itself is
/// never part of the result. At most `top_n` hits are returned.
///
/// # Errors
/// `Error::IndexOutOfRange` if `target` does not address a vector.
pub fn related<N>(vectors: &[TermScores<N>], target: usize, top_n: usize) -> Result<Hits<usize>>
where
    N: Num + Copy + Into<f64> + Send + Sync,
{
    let target_vec = vectors.get(target).ok_or(Error::IndexOutOfRange {
        index: target,
        len: vectors.len(),
    })?;

    let list: Vec<HitEntry<usize>> = vectors
        .par_iter()
        .enumerate()
        .filter(|(idx, _)| *idx != target)
        .map(|(idx, vector)| HitEntry {
            key: idx,
            score: target_vec.cosine_similarity(vector),
        })
        .collect();

    let mut hits = Hits::new(list);
    hits.sort_by_score().truncate(top_n);
    Ok(hits)
}
