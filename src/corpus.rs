//! Loading an ordered corpus of documents from disk.
//!
//! Two layouts are understood: plain text with one document per non-blank
//! line, and a JSON array whose items are either strings or records with a
//! `text` field (the shape produced by the comment scraper). Document order
//! in the file is the id order in the engine.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::types::{HengineError, HengineResult};

/// On-disk layout of a corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorpusFormat {
    /// Pick by extension: `.json` is [`CorpusFormat::Json`], anything else
    /// is [`CorpusFormat::Lines`].
    #[default]
    Auto,
    Lines,
    Json,
}

impl CorpusFormat {
    /// Resolve `Auto` against a file path.
    pub fn resolve(self, path: &Path) -> CorpusFormat {
        match self {
            CorpusFormat::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    CorpusFormat::Json
                } else {
                    CorpusFormat::Lines
                }
            }
            explicit => explicit,
        }
    }
}

/// How to read a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    pub format: CorpusFormat,
    /// Lowercase every document before it reaches the engine. The engine
    /// itself is case-sensitive.
    pub lowercase: bool,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            format: CorpusFormat::Auto,
            lowercase: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Text(String),
    Record { text: String },
}

impl JsonDocument {
    fn into_text(self) -> String {
        match self {
            JsonDocument::Text(text) | JsonDocument::Record { text } => text,
        }
    }
}

/// Read a corpus file.
pub fn load_corpus(path: &Path, options: &CorpusOptions) -> HengineResult<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|source| HengineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = options.format.resolve(path);
    let documents = parse_corpus(&raw, format, options.lowercase)?;
    debug!(
        "loaded {} documents from {} as {:?}",
        documents.len(),
        path.display(),
        format
    );
    Ok(documents)
}

/// Parse corpus text already in memory. `Auto` is treated as `Lines`.
pub fn parse_corpus(
    raw: &str,
    format: CorpusFormat,
    lowercase: bool,
) -> HengineResult<Vec<String>> {
    let documents: Vec<String> = match format {
        CorpusFormat::Json => serde_json::from_str::<Vec<JsonDocument>>(raw)?
            .into_iter()
            .map(JsonDocument::into_text)
            .collect(),
        CorpusFormat::Lines | CorpusFormat::Auto => raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect(),
    };

    if lowercase {
        Ok(documents.into_iter().map(|doc| doc.to_lowercase()).collect())
    } else {
        Ok(documents)
    }
}
