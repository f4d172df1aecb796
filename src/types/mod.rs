//! Shared data types: tokens, postings, scored hits and the crate error.

pub mod error;
pub mod posting;
pub mod token;

pub use error::{HengineError, HengineResult};
pub use posting::{DocumentId, Posting, SearchHit, TermStat};
pub use token::{Token, TokenKind};
