use std::fmt::{self, Debug};

use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::vectorizer::{tfidf::TFIDFEngine, FeatureVector, TFIDFVectorizer};

/// Cosine similarity of two feature vectors.
/// cosθ = A・B / (|A||B|)
///
/// Returns exactly `0.0` when either vector has zero magnitude, so a text
/// without any known term ranks last instead of producing NaN.
///
/// # Errors
/// [`SearchError::VocabularyMismatch`] if the vectors come from different
/// vocabularies or differ in length.
pub fn cosine_similarity(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    if a.vocab_id() != b.vocab_id() || a.len() != b.len() {
        return Err(SearchError::VocabularyMismatch {
            left: a.vocab_id(),
            left_len: a.len(),
            right: b.vocab_id(),
            right_len: b.len(),
        });
    }
    if a.is_zero() || b.is_zero() {
        return Ok(0.0);
    }

    let dot: f64 = a.as_sparse().dot(b.as_sparse());
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    // weights are non-negative; rounding can still overshoot 1 for parallel vectors
    Ok((dot / (norm_a * norm_b)).clamp(0.0, 1.0))
}

/// One ranked document
#[derive(Debug, Clone, PartialEq)]
pub struct HitEntry<K> {
    /// Caller-supplied document key, used to break score ties
    pub key: K,
    /// Position of the document in the corpus
    pub doc_idx: usize,
    pub score: f64,
}

/// Ranked search results
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K>
where
    K: Ord,
{
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort by descending score; equal scores by ascending key.
    /// NaN scores are dropped.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list
            .sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
        self
    }

    /// Keep at most `top_k` entries
    pub fn truncate(&mut self, top_k: usize) -> &mut Self {
        self.list.truncate(top_k);
        self
    }
}

impl<K> Hits<K> {
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<K>> {
        self.list.iter()
    }
}

impl<K> IntoIterator for Hits<K> {
    type Item = HitEntry<K>;
    type IntoIter = std::vec::IntoIter<HitEntry<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
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
                writeln!(f, "    {:?}: {:.6} (doc: {})", hit.key, hit.score, hit.doc_idx)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<E> TFIDFVectorizer<E>
where
    E: TFIDFEngine,
{
    /// Score `query` against every cached corpus vector and return the best `top_k`.
    ///
    /// `keys[i]` is the key of document `i`; ties in score are broken by
    /// ascending key, so keys should be unique for a total order. A `top_k`
    /// larger than the corpus returns every document.
    ///
    /// # Errors
    /// [`SearchError::KeyCountMismatch`] if `keys` and the corpus differ in
    /// length, [`SearchError::VocabularyMismatch`] if `query` comes from
    /// another fit.
    pub fn rank<K>(&self, query: &FeatureVector, keys: &[K], top_k: usize) -> Result<Hits<K>>
    where
        K: Ord + Clone + Send + Sync,
    {
        if keys.len() != self.documents().len() {
            return Err(SearchError::KeyCountMismatch {
                keys: keys.len(),
                documents: self.documents().len(),
            });
        }

        let list = self
            .documents()
            .par_iter()
            .zip(keys.par_iter())
            .enumerate()
            .map(|(doc_idx, (doc, key))| -> Result<HitEntry<K>> {
                Ok(HitEntry {
                    key: key.clone(),
                    doc_idx,
                    score: cosine_similarity(query, doc)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut hits = Hits::new(list);
        hits.sort_by_score_desc().truncate(top_k);
        Ok(hits)
    }
}
