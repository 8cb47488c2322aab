//! Query lexer (tokenizer).
//!
//! Splits a query string into words, quote marks and whitespace runs. The
//! lexer never fails: every input is covered by some token, and the parser
//! decides which token sequences are valid.

use std::{iter::Peekable, ops::Range, str::Chars};

/// The phrase delimiter.
pub const QUOTE: char = '"';

/// The kind of a lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of characters that are neither whitespace nor quotes.
    Word(String),

    /// A double quote.
    Quote,

    /// A run of whitespace.
    Space,
}

/// A token with its byte span in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was recognized.
    pub kind: TokenKind,
    /// Byte range covered in the input.
    pub span: Range<usize>,
}

/// Returns true for characters that separate clauses and phrase words.
///
/// ASCII whitespace only, including vertical tab. Unicode spaces such as
/// U+00A0 belong to the surrounding word.
fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0B'
}

/// Tokenizes a query string.
struct Lexer<'a> {
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    /// Tokenizes the entire input.
    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token() {
            tokens.push(token);
        }

        tokens
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Option<Token> {
        let &ch = self.chars.peek()?;
        let start = self.position;

        let kind = if ch == QUOTE {
            self.advance();
            TokenKind::Quote
        } else if is_space(ch) {
            self.skip_whitespace();
            TokenKind::Space
        } else {
            TokenKind::Word(self.read_word())
        };

        Some(Token {
            kind,
            span: start..self.position,
        })
    }

    /// Reads a word up to the next whitespace or quote.
    fn read_word(&mut self) -> String {
        let mut word = String::new();

        while let Some(&ch) = self.chars.peek() {
            if is_space(ch) || ch == QUOTE {
                break;
            }
            word.push(ch);
            self.advance();
        }

        word
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !is_space(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.position += ch.len_utf8();
        }
    }
}

/// Convenience function to tokenize a query string.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}
