use thiserror::Error;

/// Errors raised by the search engine and its record/config collaborators.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A vocabulary cannot be fitted without at least one document.
    #[error("cannot fit a vocabulary over an empty corpus")]
    EmptyCorpus,

    /// A search was issued before `initialize` succeeded.
    #[error("search engine is not initialized")]
    Uninitialized,

    /// Two feature vectors from different fits (or of different length) were compared.
    #[error("feature vectors belong to different vocabularies (vocab {left} len {left_len}, vocab {right} len {right_len})")]
    VocabularyMismatch {
        left: u64,
        left_len: usize,
        right: u64,
        right_len: usize,
    },

    /// Ranking needs exactly one key per corpus document.
    #[error("{keys} ranking keys given for {documents} documents")]
    KeyCountMismatch { keys: usize, documents: usize },

    #[error("invalid grade '{0}', expected one of A, B, C, D, F")]
    InvalidGrade(char),

    /// Record identity must be unique for ranking ties to resolve totally.
    #[error("duplicate record id {0}")]
    DuplicateId(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
