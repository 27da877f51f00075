//! This crate is a record search engine built on a TF-IDF vectorizer.

pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod sample;
pub mod utils;
pub mod vectorizer;

/// Search Engine
/// The top-level struct of this crate.
/// It fits a TF-IDF vocabulary over a record collection, caches one feature
/// vector per record and answers ranked and filtered searches over it.
///
/// Internally, it holds:
/// - The record collection, in storage order
/// - The fitted vocabulary
/// - One cached feature vector per record
///
/// `SearchEngine<E>` has one generic parameter:
/// - `E`: TF-IDF weighting engine (e.g., DefaultTFIDFEngine)
///
/// # Thread Safety
/// Searches take `&self` and the fitted state is never mutated, so an
/// initialized engine can be shared across threads.
pub use engine::{SearchEngine, SearchResult};

/// Search Configuration
/// Oversampling factor, default result counts and the parallel fit threshold.
/// Loadable from TOML.
pub use config::SearchConfig;

/// Error type of every fallible operation in this crate.
pub use error::{Result, SearchError};

/// Record entity
/// A searchable entry (name, address, school, subject, grade) and its
/// grade/subject predicates.
pub use record::{Grade, Record, SCIENCE_KEYWORDS};

/// TF-IDF Vectorizer
/// Fits a vocabulary over a corpus of texts and keeps the feature vector of
/// every document. Transforms query text into the same vector space and ranks
/// the corpus by cosine similarity.
pub use vectorizer::{FeatureVector, TFIDFVectorizer};

/// Vocabulary
/// The fitted term dictionary: a stable, lexicographically ordered index per
/// term plus its document frequency and IDF weight.
pub use vectorizer::vocabulary::{TermStat, Vocabulary};

/// Corpus
/// Document-frequency statistics that a vocabulary is fitted from.
pub use vectorizer::corpus::Corpus;

/// Token Frequency structure
/// Token occurrence counts of one document, plus the tokenizer shared by
/// fit-time and query-time text.
pub use vectorizer::token::{tokenize, TokenFrequency};

/// TF IDF Calculation Engine Trait
/// Pluggable weighting strategy. `DefaultTFIDFEngine` uses raw counts for tf
/// and the smoothed `ln((1 + N) / (1 + df)) + 1` for idf.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Text canonicalization of a record into its search text.
pub use vectorizer::analyzer::canonicalize;

/// Cosine similarity, ranked hits and categorical filters.
pub use vectorizer::evaluate::query::SearchFilter;
pub use vectorizer::evaluate::scoring::{cosine_similarity, HitEntry, Hits};
