//! Error types for engine construction and corpus loading.

use std::path::PathBuf;

/// Errors raised while building an engine or loading a corpus.
///
/// Lookups and searches never fail; only setup does.
#[derive(Debug, thiserror::Error)]
pub enum HengineError {
    #[error("cannot build a search engine from an empty corpus")]
    EmptyCorpus,

    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON corpus: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HengineResult<T> = Result<T, HengineError>;
