use indexmap::IndexMap;

use crate::vectorizer::token::TokenFrequency;

/// Document-frequency statistics of a corpus.
///
/// It does not store document text; it only keeps
/// - the number of documents added
/// - for each term, the number of documents containing it at least once
///
/// Base data for IDF calculation.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    term_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add one document given its distinct terms.
    /// Each term is counted once for this document even if repeated in `terms`.
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        let mut seen: Vec<&str> = Vec::with_capacity(terms.len());
        for term in terms {
            let term = term.as_ref();
            if seen.contains(&term) {
                continue;
            }
            seen.push(term);
            *self.term_counts.entry(Box::from(term)).or_insert(0) += 1;
        }
    }

    /// Add one document from its token counts
    pub fn add_doc(&mut self, doc: &TokenFrequency) {
        self.add_set(&doc.token_set_ref_str());
    }

    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// `(term, document frequency)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.term_counts.iter().map(|(term, &count)| (term.as_ref(), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_counted_once_per_document() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TokenFrequency::from_text("delhi delhi physics"));
        corpus.add_doc(&TokenFrequency::from_text("delhi biology"));
        assert_eq!(corpus.get_doc_num(), 2);
        assert_eq!(corpus.get_term_count("delhi"), 2);
        assert_eq!(corpus.get_term_count("physics"), 1);
        assert_eq!(corpus.get_term_count("history"), 0);
        assert_eq!(corpus.vocab_size(), 3);
    }

    #[test]
    fn add_set_ignores_repeated_terms_in_one_call() {
        let mut corpus = Corpus::new();
        corpus.add_set(&["a", "a", "b"]);
        assert_eq!(corpus.get_term_count("a"), 1);
        assert_eq!(corpus.get_doc_num(), 1);
    }

    #[test]
    fn empty_document_still_counts_as_a_document() {
        let mut corpus = Corpus::new();
        corpus.add_doc(&TokenFrequency::new());
        assert_eq!(corpus.get_doc_num(), 1);
        assert_eq!(corpus.vocab_size(), 0);
    }
}
