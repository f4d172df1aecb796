//! Index structures. The inverted index is a trie built once per engine.

pub mod trie;

pub use trie::{Entries, IndexTrie};
