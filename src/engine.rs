use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::record::{ensure_unique_ids, Record};
use crate::vectorizer::{
    analyzer::canonicalize,
    evaluate::query::SearchFilter,
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    vocabulary::Vocabulary,
    FeatureVector, TFIDFVectorizer,
};

/// A record with its similarity to a query, in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<'a> {
    pub record: &'a Record,
    pub score: f64,
}

/// Everything produced by one successful `initialize`.
/// Replaced as a whole, so records, ids and vectors always belong to the same fit.
#[derive(Debug)]
struct FittedIndex<E>
where
    E: TFIDFEngine,
{
    records: Vec<Record>,
    ids: Vec<u32>,
    vectorizer: TFIDFVectorizer<E>,
}

impl<E> FittedIndex<E>
where
    E: TFIDFEngine,
{
    fn build(records: Vec<Record>, config: &SearchConfig) -> Result<Self> {
        if records.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        ensure_unique_ids(&records)?;

        let texts: Vec<String> = records.iter().map(canonicalize).collect();
        let parallel = records.len() >= config.parallel_threshold;
        let vectorizer = TFIDFVectorizer::fit(&texts, parallel)?;
        let ids = records.iter().map(|r| r.id).collect();

        Ok(Self {
            records,
            ids,
            vectorizer,
        })
    }
}

/// Search context over one record collection.
///
/// Created empty, then [`initialize`](SearchEngine::initialize)d with a
/// collection. After that every search takes `&self`, so one engine can be
/// shared between threads (e.g. behind an `Arc`) without locking.
///
/// Searching an engine that was never initialized, or whose last
/// initialization failed, returns [`SearchError::Uninitialized`].
#[derive(Debug)]
pub struct SearchEngine<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    config: SearchConfig,
    index: Option<FittedIndex<E>>,
}

impl SearchEngine<DefaultTFIDFEngine> {
    /// Uninitialized engine with the default config
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            index: None,
        }
    }

    /// Uninitialized engine with `config`, rejected if it does not validate
    pub fn with_config(config: SearchConfig) -> Result<Self> {
        Self::with_engine(config)
    }

    /// Initialized engine over `records`, default config
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let mut engine = Self::new();
        engine.initialize(records)?;
        Ok(engine)
    }
}

impl Default for SearchEngine<DefaultTFIDFEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> SearchEngine<E>
where
    E: TFIDFEngine,
{
    /// Uninitialized engine using weighting strategy `E`
    pub fn with_engine(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            index: None,
        })
    }

    /// Fit the vocabulary over `records` and cache one vector per record.
    ///
    /// On failure the engine is left uninitialized, even if it was
    /// initialized before; a previous collection is never mixed with a new one.
    pub fn initialize(&mut self, records: Vec<Record>) -> Result<()> {
        let started = Instant::now();
        let count = records.len();
        match FittedIndex::build(records, &self.config) {
            Ok(index) => {
                info!(
                    records = count,
                    vocabulary = index.vectorizer.vocabulary().size(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "search engine initialized"
                );
                self.index = Some(index);
                Ok(())
            }
            Err(err) => {
                warn!(records = count, error = %err, "search engine initialization failed");
                self.index = None;
                Err(err)
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.index.is_some()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn index(&self) -> Result<&FittedIndex<E>> {
        self.index.as_ref().ok_or_else(|| {
            warn!("search issued before initialization");
            SearchError::Uninitialized
        })
    }

    /// Records ranked by cosine similarity to `query`, best first.
    ///
    /// At most `top_k` results; equal scores are ordered by ascending id.
    pub fn semantic_search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult<'_>>> {
        let index = self.index()?;
        let results = Self::ranked(index, query, top_k)?;
        debug!(query, top_k, results = results.len(), "semantic search");
        Ok(results)
    }

    fn ranked<'a>(
        index: &'a FittedIndex<E>,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<SearchResult<'a>>> {
        let query_vec = index.vectorizer.transform(query);
        let hits = index.vectorizer.rank(&query_vec, &index.ids, top_k)?;
        Ok(hits
            .into_iter()
            .map(|hit| SearchResult {
                record: &index.records[hit.doc_idx],
                score: hit.score,
            })
            .collect())
    }

    /// Ranked search narrowed by grade and subject predicates.
    ///
    /// A blank query skips ranking and filters the whole collection in
    /// storage order. Otherwise `max_results * oversample_factor` ranked
    /// candidates are filtered; the width is fixed, so selective filters can
    /// return fewer than `max_results` records even when more matches exist
    /// further down the ranking.
    pub fn search_with_filters(
        &self,
        query: &str,
        passed: Option<bool>,
        science: Option<bool>,
        max_results: usize,
    ) -> Result<Vec<&Record>> {
        self.search_filtered(query, SearchFilter::new(passed, science), max_results)
    }

    /// [`search_with_filters`](Self::search_with_filters) taking a prepared filter
    pub fn search_filtered(
        &self,
        query: &str,
        filter: SearchFilter,
        max_results: usize,
    ) -> Result<Vec<&Record>> {
        let index = self.index()?;

        let candidates: Vec<&Record> = if query.trim().is_empty() {
            index.records.iter().collect()
        } else {
            let width = max_results
                .saturating_mul(self.config.oversample_factor)
                .min(index.records.len());
            Self::ranked(index, query, width)?
                .into_iter()
                .map(|result| result.record)
                .collect()
        };
        let pool = candidates.len();

        let mut results = filter.apply(candidates);
        results.truncate(max_results);
        debug!(
            query,
            ?filter,
            max_results,
            candidates = pool,
            results = results.len(),
            "filtered search"
        );
        Ok(results)
    }

    fn scan<F>(&self, max_results: usize, predicate: F) -> Result<Vec<&Record>>
    where
        F: Fn(&Record) -> bool,
    {
        let index = self.index()?;
        Ok(index
            .records
            .iter()
            .filter(|&r| predicate(r))
            .take(max_results)
            .collect())
    }

    /// First `max_results` records with grade A or B, storage order
    pub fn search_passed(&self, max_results: usize) -> Result<Vec<&Record>> {
        self.scan(max_results, Record::is_passed)
    }

    /// First `max_results` records with grade C, D or F, storage order
    pub fn search_failed(&self, max_results: usize) -> Result<Vec<&Record>> {
        self.scan(max_results, |r| !r.is_passed())
    }

    /// First `max_results` records with a science subject, storage order
    pub fn search_by_category(&self, max_results: usize) -> Result<Vec<&Record>> {
        self.scan(max_results, Record::has_science)
    }

    /// Number of records in the collection; 0 before initialization
    pub fn record_count(&self) -> usize {
        self.index.as_ref().map_or(0, |index| index.records.len())
    }

    /// The whole collection in storage order; empty before initialization
    pub fn records(&self) -> &[Record] {
        match &self.index {
            Some(index) => &index.records,
            None => &[],
        }
    }

    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.index.as_ref().map(|index| index.vectorizer.vocabulary())
    }

    /// Cached corpus vectors, aligned with [`records`](Self::records)
    pub fn corpus_vectors(&self) -> Option<&[FeatureVector]> {
        self.index.as_ref().map(|index| index.vectorizer.documents())
    }
}
