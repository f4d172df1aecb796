//! Hand-rolled lexer splitting raw text into typed tokens.
//!
//! Character classes are tested in a fixed order, first match wins:
//! ASCII letter, ASCII digit, whitespace, punctuation, anything else.
//! Each class is read greedily except unknown characters, which produce
//! one token per character. Case is never changed.

use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

use crate::engine::term_frequency::count_terms;
use crate::types::{TermStat, Token};

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Unicode whitespace plus the byte-order mark, minus NEL (U+0085), which
/// falls through to an unknown token.
fn is_space(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// General Punctuation (U+2000..U+206F), Supplemental Punctuation
/// (U+2E00..U+2E7F) and all ASCII punctuation.
fn is_punct(ch: char) -> bool {
    matches!(ch, '\u{2000}'..='\u{206f}' | '\u{2e00}'..='\u{2e7f}') || ch.is_ascii_punctuation()
}

/// Character source with single-character lookahead.
struct CharStream<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> CharStream<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Pull-based token sequence over one input string.
///
/// Supports a lookahead of one token: [`TokenStream::peek`] reads the next
/// token without consuming it, and the following [`Iterator::next`] hands
/// back that same token. End of input is `None`.
pub struct TokenStream<'a> {
    input: CharStream<'a>,
    lookahead: Option<Token>,
}

impl<'a> TokenStream<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: CharStream::new(input),
            lookahead: None,
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Token> {
        if self.lookahead.is_none() {
            self.lookahead = self.read_next();
        }
        self.lookahead.as_ref()
    }

    /// True once every character has been consumed.
    pub fn is_eof(&mut self) -> bool {
        self.peek().is_none()
    }

    fn read_while<P>(&mut self, mut predicate: P) -> String
    where
        P: FnMut(char) -> bool,
    {
        let mut out = String::new();
        while let Some(ch) = self.input.peek() {
            if !predicate(ch) {
                break;
            }
            out.push(ch);
            self.input.advance();
        }
        out
    }

    fn read_number(&mut self) -> Token {
        let mut seen_dot = false;
        let text = self.read_while(|ch| {
            if ch == '.' {
                // A second dot ends the number and is left for the next token.
                if seen_dot {
                    return false;
                }
                seen_dot = true;
                true
            } else {
                is_digit(ch)
            }
        });
        // Always starts with a digit, so the text is a valid float literal.
        Token::Number(text.parse().unwrap_or_default())
    }

    fn read_next(&mut self) -> Option<Token> {
        let ch = self.input.peek()?;
        let token = if is_letter(ch) {
            Token::Word(self.read_while(is_letter))
        } else if is_digit(ch) {
            self.read_number()
        } else if is_space(ch) {
            Token::Whitespace(self.read_while(is_space))
        } else if is_punct(ch) {
            Token::Punctuation(self.read_while(is_punct))
        } else {
            self.input.advance();
            Token::Unknown(ch)
        };
        Some(token)
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.lookahead.take().or_else(|| self.read_next())
    }
}

impl FusedIterator for TokenStream<'_> {}

/// Tokenize the whole input eagerly.
pub fn tokenize(text: &str) -> Vec<Token> {
    TokenStream::new(text).collect()
}

/// Stateless tokenizer front end used by the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Lazy token stream over `text`.
    pub fn stream<'a>(&self, text: &'a str) -> TokenStream<'a> {
        TokenStream::new(text)
    }

    /// All tokens of `text`, in order.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text)
    }

    /// Only the word tokens of `text`, as strings, case preserved.
    pub fn words(&self, text: &str) -> Vec<String> {
        self.stream(text).filter_map(Token::into_word).collect()
    }

    /// Tokenize and return per-term statistics for the words of `text`.
    pub fn term_frequencies(&self, text: &str) -> Vec<TermStat> {
        let words = self.words(text);
        count_terms(words.iter().map(String::as_str))
    }
}
