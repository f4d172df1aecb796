//! Turning search hits into what a results panel shows.
//!
//! An empty hit list means no query term matched, and the panel falls back
//! to the whole corpus in its original order. Otherwise only matched
//! documents are shown, highest score first.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{DocumentId, SearchHit};

/// A document chosen for display, with the score it is ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDocument<'a> {
    pub document_id: DocumentId,
    pub score: f64,
    pub text: &'a str,
}

/// Display limits applied after ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayOptions {
    /// Show at most this many documents.
    pub limit: Option<usize>,
    /// Hide matched documents scoring below this. Never applied to the
    /// whole-corpus fallback.
    pub min_score: Option<f64>,
}

/// Select and order documents for display.
///
/// With no hits every document is returned with score 0. With hits, each
/// matched document appears once and takes the score of the last hit naming
/// it. `hits` normally arrives sorted by descending score, so that is the
/// document's lowest-scoring hit. Documents are sorted by descending score;
/// ties keep corpus order. Hits naming an id outside `documents` are
/// ignored.
pub fn rank_documents<'a, S>(documents: &'a [S], hits: &[SearchHit]) -> Vec<RankedDocument<'a>>
where
    S: AsRef<str>,
{
    if hits.is_empty() {
        return documents
            .iter()
            .enumerate()
            .map(|(document_id, text)| RankedDocument {
                document_id,
                score: 0.0,
                text: text.as_ref(),
            })
            .collect();
    }

    // Later hits overwrite earlier ones.
    let scores: HashMap<DocumentId, f64> = hits
        .iter()
        .map(|hit| (hit.document_id, hit.tf_idf))
        .collect();

    let mut ranked: Vec<RankedDocument<'a>> = documents
        .iter()
        .enumerate()
        .filter_map(|(document_id, text)| {
            scores.get(&document_id).map(|&score| RankedDocument {
                document_id,
                score,
                text: text.as_ref(),
            })
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}

/// [`rank_documents`], then the score floor and document limit of
/// `options`.
///
/// The floor only filters matched documents: when hits exist but all fall
/// below it, nothing is shown rather than the whole corpus.
pub fn select_documents<'a, S>(
    documents: &'a [S],
    hits: &[SearchHit],
    options: &DisplayOptions,
) -> Vec<RankedDocument<'a>>
where
    S: AsRef<str>,
{
    let mut ranked = rank_documents(documents, hits);
    if !hits.is_empty() {
        if let Some(min_score) = options.min_score {
            ranked.retain(|doc| doc.score >= min_score);
        }
    }
    if let Some(limit) = options.limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Heading shown above a ranked document.
pub fn relevance_label(score: f64) -> String {
    format!("Relevance: {:.2}%", score * 100.0)
}

/// One-line summary of a result set.
pub fn summary_line(hits: &[SearchHit]) -> String {
    format!("{} documents found.", hits.len())
}
