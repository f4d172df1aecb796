//! Tokenization, term counting and TF-IDF search.

pub mod search;
pub mod term_frequency;
pub mod tokenizer;

pub use search::{EngineBuilder, SearchEngine, SearchParams};
pub use term_frequency::count_terms;
pub use tokenizer::{tokenize, TokenStream, Tokenizer};
