/// Weighting strategy used by the vocabulary and vectorizer.
///
/// `idf` is evaluated once per term when a vocabulary is fitted; `tf` is
/// evaluated per term of every transformed text. The final weight of a term in
/// a vector is `tf * idf`.
pub trait TFIDFEngine {
    /// Inverse document frequency of a term seen in `doc_freq` of `doc_num` documents
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
    /// Term weight of a term occurring `count` times in a text of `token_sum` tokens
    fn tf(count: u32, token_sum: u64) -> f64;
}

/// Default TF-IDF engine.
///
/// - tf: raw occurrence count
/// - idf: smoothed `ln((1 + N) / (1 + df)) + 1`
///
/// The smoothing keeps the ratio finite for any `df` and the `+ 1` keeps
/// every idf strictly positive, so a term present in all documents still
/// carries weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }

    #[inline]
    fn tf(count: u32, _token_sum: u64) -> f64 {
        count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idf_matches_smoothed_formula() {
        let idf = DefaultTFIDFEngine::idf(3, 1);
        assert!((idf - (2.0_f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn idf_is_one_for_term_in_every_document() {
        assert_eq!(DefaultTFIDFEngine::idf(5, 5), 1.0);
    }

    #[test]
    fn rarer_terms_weigh_more() {
        assert!(DefaultTFIDFEngine::idf(100, 1) > DefaultTFIDFEngine::idf(100, 50));
    }

    #[test]
    fn tf_is_raw_count() {
        assert_eq!(DefaultTFIDFEngine::tf(3, 10), 3.0);
        assert_eq!(DefaultTFIDFEngine::tf(0, 10), 0.0);
    }
}
