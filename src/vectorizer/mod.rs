pub mod analyzer;
pub mod corpus;
pub mod evaluate;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use rayon::prelude::*;

use crate::error::Result;
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{
    corpus::Corpus,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::TokenFrequency,
    vocabulary::Vocabulary,
};

/// TF-IDF weighted vector in the coordinate space of one [`Vocabulary`].
///
/// Stored sparsely; `len()` is always the size of the vocabulary that built
/// it. The vector remembers that vocabulary's id so it can never be scored
/// against a vector of another fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    vocab_id: u64,
    weights: ZeroSpVec<f64>,
}

impl FeatureVector {
    /// Id of the vocabulary this vector was produced by
    #[inline]
    pub fn vocab_id(&self) -> u64 {
        self.vocab_id
    }

    /// Dimension, equal to the vocabulary size
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight at `index`, 0 for terms absent from the text
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.weights.get(index)
    }

    #[inline]
    pub fn as_sparse(&self) -> &ZeroSpVec<f64> {
        &self.weights
    }

    /// Euclidean magnitude
    pub fn norm(&self) -> f64 {
        self.weights.norm_sq::<f64>().sqrt()
    }

    /// True when no in-vocabulary term was found in the text
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.weights.nnz() == 0
    }
}

/// TF-IDF Vectorizer
///
/// Holds a fitted [`Vocabulary`] and the cached feature vector of every
/// corpus document, in corpus order. Built once by [`TFIDFVectorizer::fit`]
/// and read-only afterwards; query vectors are produced on demand by
/// [`TFIDFVectorizer::transform`] and never stored.
///
/// `E` selects the weighting strategy, [`DefaultTFIDFEngine`] by default.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    vocabulary: Vocabulary,
    documents: Vec<FeatureVector>,
    _marker: std::marker::PhantomData<E>,
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    /// Fit a vocabulary over `texts` and vectorize every text with it.
    ///
    /// With `parallel` the per-document work runs on the rayon pool; the
    /// resulting vectors are identical and keep the order of `texts`.
    pub fn fit<T>(texts: &[T], parallel: bool) -> Result<Self>
    where
        T: AsRef<str> + Sync,
    {
        let freqs: Vec<TokenFrequency> = if parallel {
            texts
                .par_iter()
                .map(|text| TokenFrequency::from_text(text.as_ref()))
                .collect()
        } else {
            texts
                .iter()
                .map(|text| TokenFrequency::from_text(text.as_ref()))
                .collect()
        };

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }
        let vocabulary = Vocabulary::from_corpus::<E>(&corpus)?;

        let documents: Vec<FeatureVector> = if parallel {
            freqs
                .par_iter()
                .map(|freq| Self::vectorize(&vocabulary, freq))
                .collect()
        } else {
            freqs
                .iter()
                .map(|freq| Self::vectorize(&vocabulary, freq))
                .collect()
        };

        Ok(Self {
            vocabulary,
            documents,
            _marker: std::marker::PhantomData,
        })
    }

    /// Vectorize arbitrary text (typically a query) against the fitted vocabulary
    #[inline]
    pub fn transform(&self, text: &str) -> FeatureVector {
        Self::transform_with(&self.vocabulary, text)
    }

    /// Vectorize `text` against any vocabulary.
    /// Tokens the vocabulary does not know contribute nothing.
    pub fn transform_with(vocabulary: &Vocabulary, text: &str) -> FeatureVector {
        Self::vectorize(vocabulary, &TokenFrequency::from_text(text))
    }

    fn vectorize(vocabulary: &Vocabulary, freq: &TokenFrequency) -> FeatureVector {
        let token_sum = freq.token_sum();
        let entries = freq.iter().filter_map(|(token, count)| {
            vocabulary
                .lookup(token)
                .map(|(idx, stat)| (idx, E::tf(count, token_sum) * stat.idf))
        });
        FeatureVector {
            vocab_id: vocabulary.id(),
            weights: ZeroSpVec::from_entries(vocabulary.size(), entries),
        }
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Cached corpus vectors, in corpus order
    #[inline]
    pub fn documents(&self) -> &[FeatureVector] {
        &self.documents
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXTS: [&str; 3] = [
        "alice delhi dps physics gradea",
        "bob mumbai xyz history gradec",
        "carol delhi dps biology gradeb",
    ];

    fn fitted(parallel: bool) -> TFIDFVectorizer {
        TFIDFVectorizer::fit(&TEXTS, parallel).unwrap()
    }

    #[test]
    fn every_corpus_vector_has_vocabulary_length() {
        let v = fitted(false);
        assert_eq!(v.doc_num(), 3);
        for doc in v.documents() {
            assert_eq!(doc.len(), v.vocabulary().size());
            assert_eq!(doc.vocab_id(), v.vocabulary().id());
        }
    }

    #[test]
    fn weight_is_count_times_idf() {
        let v = fitted(false);
        let q = v.transform("delhi delhi physics");
        let delhi = v.vocabulary().index_of("delhi").unwrap();
        let physics = v.vocabulary().index_of("physics").unwrap();
        let expected_delhi = 2.0 * v.vocabulary().idf("delhi").unwrap();
        assert!((q.get(delhi) - expected_delhi).abs() < 1e-12);
        assert!((q.get(physics) - v.vocabulary().idf("physics").unwrap()).abs() < 1e-12);
        assert_eq!(q.as_sparse().nnz(), 2);
    }

    #[test]
    fn out_of_vocabulary_tokens_are_ignored() {
        let v = fitted(false);
        let q = v.transform("chemistry london");
        assert!(q.is_zero());
        assert_eq!(q.norm(), 0.0);
        assert_eq!(q.len(), v.vocabulary().size());
    }

    #[test]
    fn transform_lowercases_query_text() {
        let v = fitted(false);
        assert_eq!(v.transform("DELHI Physics"), v.transform("delhi physics"));
    }

    #[test]
    fn parallel_fit_matches_sequential_fit() {
        let seq = fitted(false);
        let par = fitted(true);
        for (a, b) in seq.documents().iter().zip(par.documents()) {
            assert_eq!(a.as_sparse(), b.as_sparse());
        }
    }

    #[test]
    fn transform_with_matches_corpus_vector() {
        let v = fitted(false);
        let again = TFIDFVectorizer::<DefaultTFIDFEngine>::transform_with(v.vocabulary(), TEXTS[1]);
        assert_eq!(&again, &v.documents()[1]);
    }
}
