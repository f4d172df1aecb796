//! TF-IDF search over a trie-backed inverted index.
//!
//! An engine is built once from the whole corpus and is read-only after
//! that. [`EngineBuilder`] is the building state: it accepts documents and
//! owns the mutable index. [`EngineBuilder::finish`] moves the index into a
//! [`SearchEngine`], which only answers queries.

use std::time::Instant;

use log::{debug, info, trace};

use crate::engine::tokenizer::Tokenizer;
use crate::index::IndexTrie;
use crate::types::{DocumentId, HengineError, HengineResult, Posting, SearchHit};

/// Parameters for [`SearchEngine::search_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// Query string, split on single spaces.
    pub query: String,
    /// Keep at most this many hits. `None` keeps all.
    pub max_results: Option<usize>,
    /// Drop hits scoring below this. `None` keeps all.
    pub min_score: Option<f64>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: None,
            min_score: None,
        }
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }
}

/// Accepts documents in corpus order and builds the index.
pub struct EngineBuilder {
    tokenizer: Tokenizer,
    index: IndexTrie<Posting>,
    total_docs: usize,
    started: Instant,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            index: IndexTrie::new(),
            total_docs: 0,
            started: Instant::now(),
        }
    }

    /// Index one document and return the id it was assigned.
    pub fn add_document(&mut self, text: &str) -> DocumentId {
        let document_id = self.total_docs;
        for stat in self.tokenizer.term_frequencies(text) {
            let term_frequency = stat.term_frequency;
            self.index.insert(&stat.term, || Posting {
                document_id,
                term_frequency,
            });
        }
        self.total_docs += 1;
        document_id
    }

    /// Number of documents added so far.
    pub fn len(&self) -> usize {
        self.total_docs
    }

    pub fn is_empty(&self) -> bool {
        self.total_docs == 0
    }

    /// Freeze the index. Fails on an empty corpus, where IDF is undefined.
    pub fn finish(self) -> HengineResult<SearchEngine> {
        if self.total_docs == 0 {
            return Err(HengineError::EmptyCorpus);
        }

        info!(
            "search engine ready: {} documents, {} terms in {:?}",
            self.total_docs,
            self.index.len(),
            self.started.elapsed()
        );

        Ok(SearchEngine {
            index: self.index,
            total_docs: self.total_docs,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built, immutable search engine.
pub struct SearchEngine {
    index: IndexTrie<Posting>,
    total_docs: usize,
}

impl SearchEngine {
    /// Build an engine from `documents`; a document's id is its position.
    pub fn build<I, S>(documents: I) -> HengineResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        let mut builder = EngineBuilder::new();
        for document in documents {
            builder.add_document(document.as_ref());
        }
        debug!(
            "[build index] {} documents in {:?}",
            builder.len(),
            started.elapsed()
        );
        builder.finish()
    }

    /// Corpus size at build time.
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// The built inverted index.
    pub fn index(&self) -> &IndexTrie<Posting> {
        &self.index
    }

    /// Score every posting of a single term.
    ///
    /// `idf = ln(total_docs / matches)`. A term with no postings yields
    /// nothing and no division is performed.
    pub fn tf_idf(&self, term: &str) -> Vec<SearchHit> {
        let Some(postings) = self.index.lookup(term) else {
            trace!("term {term:?} not indexed");
            return Vec::new();
        };
        if postings.is_empty() {
            return Vec::new();
        }

        let idf = (self.total_docs as f64 / postings.len() as f64).ln();
        postings
            .iter()
            .map(|posting| SearchHit {
                document_id: posting.document_id,
                tf: posting.term_frequency,
                idf,
                tf_idf: posting.term_frequency * idf,
            })
            .collect()
    }

    /// Run a free-text query.
    ///
    /// The query is split on the space character only, empty pieces
    /// included. Hits from every term are concatenated and stably sorted by
    /// descending `tf_idf`, so equal scores keep their production order.
    /// An empty result means no query term matched anything.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let started = Instant::now();

        let mut hits: Vec<SearchHit> = query
            .split(' ')
            .flat_map(|term| self.tf_idf(term))
            .collect();
        hits.sort_by(|a, b| {
            b.tf_idf
                .partial_cmp(&a.tf_idf)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "[search] {query:?}: {} hits in {:?}",
            hits.len(),
            started.elapsed()
        );
        hits
    }

    /// [`SearchEngine::search`] followed by the optional score floor and
    /// result cap in `params`.
    pub fn search_with(&self, params: &SearchParams) -> Vec<SearchHit> {
        let mut hits = self.search(&params.query);
        if let Some(min_score) = params.min_score {
            hits.retain(|hit| hit.tf_idf >= min_score);
        }
        if let Some(max_results) = params.max_results {
            hits.truncate(max_results);
        }
        hits
    }
}
