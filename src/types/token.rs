//! Lexical tokens produced by the tokenizer.

use std::fmt;

/// The class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    Whitespace,
    Punctuation,
    Unknown,
}

/// A single token. Text is kept exactly as it appeared in the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A run of ASCII letters.
    Word(String),
    /// A run of ASCII digits with at most one `.`, parsed as a float.
    Number(f64),
    Whitespace(String),
    Punctuation(String),
    /// Any character outside the other classes, one per token.
    Unknown(char),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Word,
            Token::Number(_) => TokenKind::Number,
            Token::Whitespace(_) => TokenKind::Whitespace,
            Token::Punctuation(_) => TokenKind::Punctuation,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    /// The word text, if this is a word token.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn into_word(self) -> Option<String> {
        match self {
            Token::Word(word) => Some(word),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(text) | Token::Whitespace(text) | Token::Punctuation(text) => {
                f.write_str(text)
            }
            Token::Number(value) => write!(f, "{value}"),
            Token::Unknown(ch) => write!(f, "{ch}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Token::Word("cat".into()).kind(), TokenKind::Word);
        assert_eq!(Token::Number(1.5).kind(), TokenKind::Number);
        assert_eq!(Token::Whitespace(" ".into()).kind(), TokenKind::Whitespace);
        assert_eq!(Token::Punctuation(",".into()).kind(), TokenKind::Punctuation);
        assert_eq!(Token::Unknown('é').kind(), TokenKind::Unknown);
    }

    #[test]
    fn test_as_word_only_for_words() {
        assert_eq!(Token::Word("dog".into()).as_word(), Some("dog"));
        assert_eq!(Token::Punctuation(".".into()).as_word(), None);
        assert_eq!(Token::Number(3.0).into_word(), None);
    }
}
