use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::error::{Result, SearchError};
use crate::vectorizer::{corpus::Corpus, tfidf::TFIDFEngine, token::TokenFrequency};

/// Source of fit identities. Every fitted vocabulary gets a fresh one.
static NEXT_VOCAB_ID: AtomicU64 = AtomicU64::new(1);

/// Per-term statistics stored in a [`Vocabulary`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermStat {
    /// documents containing the term
    pub doc_freq: u64,
    /// inverse document frequency weight, always > 0
    pub idf: f64,
}

/// Fitted term dictionary.
///
/// Maps every distinct corpus term to an index in `[0, size)` and an IDF
/// weight. Indices follow the lexicographic order of the terms, so fitting
/// the same corpus twice yields the same assignment no matter in which order
/// documents or terms were seen.
///
/// Each fit carries a process-unique `id`; feature vectors record the id of
/// the vocabulary that produced them and are only comparable within it.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    id: u64,
    doc_num: u64,
    terms: IndexMap<Box<str>, TermStat>,
}

impl Vocabulary {
    /// Fit over raw corpus texts
    pub fn fit<E, T>(texts: &[T]) -> Result<Self>
    where
        E: TFIDFEngine,
        T: AsRef<str>,
    {
        let mut corpus = Corpus::new();
        for text in texts {
            corpus.add_doc(&TokenFrequency::from_text(text.as_ref()));
        }
        Self::from_corpus::<E>(&corpus)
    }

    /// Fit from already collected document frequencies
    pub fn from_corpus<E>(corpus: &Corpus) -> Result<Self>
    where
        E: TFIDFEngine,
    {
        let doc_num = corpus.get_doc_num();
        if doc_num == 0 {
            return Err(SearchError::EmptyCorpus);
        }

        let mut sorted: Vec<(&str, u64)> = corpus.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let terms = sorted
            .into_iter()
            .map(|(term, doc_freq)| {
                let stat = TermStat {
                    doc_freq,
                    idf: E::idf(doc_num, doc_freq),
                };
                (Box::from(term), stat)
            })
            .collect();

        Ok(Self {
            id: NEXT_VOCAB_ID.fetch_add(1, Ordering::Relaxed),
            doc_num,
            terms,
        })
    }

    /// Identity of this fit
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of terms, which is also the length of every vector of this fit
    #[inline]
    pub fn size(&self) -> usize {
        self.terms.len()
    }

    /// Number of documents the vocabulary was fitted on
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn stat(&self, term: &str) -> Option<&TermStat> {
        self.terms.get(term)
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.stat(term).map(|s| s.idf)
    }

    /// Term stored at `index`
    pub fn term_at(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|(term, _)| term.as_ref())
    }

    /// Index, term and stats of a term, if it is in the vocabulary
    #[inline]
    pub fn lookup(&self, term: &str) -> Option<(usize, &TermStat)> {
        self.terms.get_full(term).map(|(idx, _, stat)| (idx, stat))
    }

    /// Terms in index order
    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermStat)> + '_ {
        self.terms.iter().map(|(term, stat)| (term.as_ref(), stat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::tfidf::DefaultTFIDFEngine;

    const TEXTS: [&str; 3] = [
        "alice delhi dps physics gradea",
        "bob mumbai xyz history gradec",
        "carol delhi dps biology gradeb",
    ];

    #[test]
    fn indices_follow_lexicographic_term_order() {
        let vocab = Vocabulary::fit::<DefaultTFIDFEngine, _>(&TEXTS).unwrap();
        let terms: Vec<&str> = vocab.terms().map(|(t, _)| t).collect();
        let mut sorted = terms.clone();
        sorted.sort();
        assert_eq!(terms, sorted);
        assert_eq!(vocab.index_of("alice"), Some(0));
        assert_eq!(vocab.term_at(0), Some("alice"));
        assert_eq!(vocab.size(), 13);
    }

    #[test]
    fn fit_is_independent_of_document_order() {
        let a = Vocabulary::fit::<DefaultTFIDFEngine, _>(&TEXTS).unwrap();
        let reversed: Vec<&str> = TEXTS.iter().rev().copied().collect();
        let b = Vocabulary::fit::<DefaultTFIDFEngine, _>(&reversed).unwrap();
        let ta: Vec<(&str, TermStat)> = a.terms().map(|(t, s)| (t, *s)).collect();
        let tb: Vec<(&str, TermStat)> = b.terms().map(|(t, s)| (t, *s)).collect();
        assert_eq!(ta, tb);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn document_frequency_and_idf() {
        let vocab = Vocabulary::fit::<DefaultTFIDFEngine, _>(&TEXTS).unwrap();
        assert_eq!(vocab.doc_num(), 3);

        let delhi = vocab.stat("delhi").unwrap();
        assert_eq!(delhi.doc_freq, 2);
        assert!((delhi.idf - ((4.0_f64 / 3.0).ln() + 1.0)).abs() < 1e-12);

        let physics = vocab.stat("physics").unwrap();
        assert_eq!(physics.doc_freq, 1);
        assert!(physics.idf > delhi.idf);

        assert!(vocab.terms().all(|(_, s)| s.idf > 0.0));
    }

    #[test]
    fn unknown_term_is_absent() {
        let vocab = Vocabulary::fit::<DefaultTFIDFEngine, _>(&TEXTS).unwrap();
        assert_eq!(vocab.index_of("chemistry"), None);
        assert_eq!(vocab.idf("chemistry"), None);
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let texts: [&str; 0] = [];
        let err = Vocabulary::fit::<DefaultTFIDFEngine, _>(&texts).unwrap_err();
        assert!(matches!(err, SearchError::EmptyCorpus));
    }

    #[test]
    fn corpus_of_blank_documents_fits_an_empty_vocabulary() {
        let vocab = Vocabulary::fit::<DefaultTFIDFEngine, _>(&["", "  "]).unwrap();
        assert_eq!(vocab.size(), 0);
        assert_eq!(vocab.doc_num(), 2);
    }
}
