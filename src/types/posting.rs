//! Postings, per-document term statistics and scored search hits.

use serde::{Deserialize, Serialize};

/// Position of a document in the ingestion-ordered corpus.
pub type DocumentId = usize;

/// A (document, term frequency) pair attached to one indexed term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub document_id: DocumentId,
    pub term_frequency: f64,
}

/// Occurrence statistics of one distinct term within one document.
#[derive(Debug, Clone, PartialEq)]
pub struct TermStat {
    pub term: String,
    pub occurrences: u32,
    /// `occurrences` divided by the number of distinct terms in the document.
    pub term_frequency: f64,
}

/// A single scored posting returned by a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub document_id: DocumentId,
    pub tf: f64,
    pub idf: f64,
    pub tf_idf: f64,
}
