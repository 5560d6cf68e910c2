use num::Num;

/// TF-IDF formula seam
///
/// The vectorizer asks the engine for every numeric step so that the
/// formulas and the output precision can be swapped together.
pub trait TFIDFEngine<N>
where
    N: Num + Copy,
{
    /// IDF of a term found in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> N;
    /// TF of a term seen `count` times in a document of `doc_len` tokens
    fn tf(count: u64, doc_len: u64) -> N;
    /// Final score of one term
    fn tf_idf(tf: N, idf: N, weight: f64) -> N;
}

/// Default TF-IDF engine
/// `tf = count / len`, `idf = ln(N / df)`, `score = tf * idf * weight`
/// Implemented for `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    pub fn new() -> Self {
        DefaultTFIDFEngine
    }
}

impl TFIDFEngine<f64> for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        if doc_num == 0 || doc_freq == 0 {
            return 0.0;
        }
        (doc_num as f64 / doc_freq as f64).ln()
    }

    #[inline]
    fn tf(count: u64, doc_len: u64) -> f64 {
        if doc_len == 0 {
            return 0.0;
        }
        count as f64 / doc_len as f64
    }

    #[inline]
    fn tf_idf(tf: f64, idf: f64, weight: f64) -> f64 {
        tf * idf * weight
    }
}

impl TFIDFEngine<f32> for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f32 {
        <Self as TFIDFEngine<f64>>::idf(doc_num, doc_freq) as f32
    }

    #[inline]
    fn tf(count: u64, doc_len: u64) -> f32 {
        <Self as TFIDFEngine<f64>>::tf(count, doc_len) as f32
    }

    #[inline]
    fn tf_idf(tf: f32, idf: f32, weight: f64) -> f32 {
        (tf as f64 * idf as f64 * weight) as f32
    }
}
