//! In-memory text search: a hand-rolled tokenizer, a trie-backed inverted
//! index, and TF-IDF ranking.
//!
//! ```
//! use hengine::SearchEngine;
//!
//! let engine = SearchEngine::build(["the cat sat", "the dog sat", "the cat ran"]).unwrap();
//! let hits = engine.search("cat");
//! assert_eq!(hits.len(), 2);
//! ```

pub mod corpus;
pub mod engine;
pub mod events;
pub mod index;
pub mod results;
pub mod types;

pub use corpus::{load_corpus, parse_corpus, CorpusFormat, CorpusOptions};
pub use engine::{
    count_terms, tokenize, EngineBuilder, SearchEngine, SearchParams, TokenStream, Tokenizer,
};
pub use events::PubSub;
pub use index::{Entries, IndexTrie};
pub use results::{
    rank_documents, relevance_label, select_documents, summary_line, DisplayOptions,
    RankedDocument,
};
pub use types::{
    DocumentId, HengineError, HengineResult, Posting, SearchHit, TermStat, Token, TokenKind,
};
