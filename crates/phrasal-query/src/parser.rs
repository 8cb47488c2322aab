//! Query parser.
//!
//! Parses a token stream into a flat parse tree using recursive descent.
//!
//! # Grammar
//!
//! ```text
//! query    → (clause SPACE?)*
//! clause   → OPERATOR? (phrase | term)
//! operator → "+" | "-"
//! phrase   → QUOTE (WORD SPACE?)* QUOTE
//! term     → WORD
//! ```
//!
//! An operator must touch its term or phrase: `+rust` and `-"old api"` are
//! clauses, `+ rust` is an error. Likewise a phrase's first word must touch
//! the opening quote: `" rust"` is an error, `"rust "` is not. Inside a
//! term, `+` and `-` are literal (`c++`, `a-b`).

use log::{debug, trace};

use crate::{
    error::QueryError,
    lexer::{Token, TokenKind, tokenize},
    tree::{ClauseBody, ClauseNode, ParseTree},
};

/// Returns true for characters that act as clause operators.
fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-')
}

/// Recursive descent parser for query clauses.
struct Parser<'a> {
    /// The original input, kept for error context.
    input: &'a str,
    /// Token stream to parse.
    tokens: Vec<Token>,
    /// Current position in token stream.
    position: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `input`.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            tokens: tokenize(input),
            position: 0,
        }
    }

    /// Parses: query → (clause SPACE?)*
    fn parse(mut self) -> Result<ParseTree, QueryError> {
        let mut clauses = Vec::new();

        loop {
            self.skip_space();
            if self.peek().is_none() {
                break;
            }
            clauses.push(self.parse_clause()?);
        }

        Ok(ParseTree { clauses })
    }

    /// Parses: clause → OPERATOR? (phrase | term)
    fn parse_clause(&mut self) -> Result<ClauseNode, QueryError> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.error_at("unexpected end of query", self.input.len()));
        };

        match token.kind {
            TokenKind::Quote => {
                let (words, end) = self.parse_phrase()?;
                Ok(ClauseNode {
                    operator: None,
                    body: ClauseBody::Phrase(words),
                    span: token.span.start..end,
                })
            }
            TokenKind::Word(word) => {
                self.advance();
                self.parse_word_clause(word, token.span.start, token.span.end)
            }
            TokenKind::Space => Err(self.error_at("expected term or phrase", token.span.start)),
        }
    }

    /// Parses a clause that starts with a word, splitting off a leading operator.
    fn parse_word_clause(
        &mut self,
        word: String,
        start: usize,
        end: usize,
    ) -> Result<ClauseNode, QueryError> {
        let mut chars = word.chars();
        let Some(op) = chars.next().filter(|&ch| is_operator(ch)) else {
            return Ok(ClauseNode {
                operator: None,
                body: ClauseBody::Term(word),
                span: start..end,
            });
        };

        let rest = chars.as_str();
        if rest.starts_with(is_operator) {
            return Err(self.error_at("consecutive operators", start + op.len_utf8()));
        }

        if !rest.is_empty() {
            return Ok(ClauseNode {
                operator: Some(op),
                body: ClauseBody::Term(rest.to_string()),
                span: start..end,
            });
        }

        // A lone operator only binds to a phrase that opens right after it.
        if matches!(self.peek_kind(), Some(TokenKind::Quote)) {
            let (words, phrase_end) = self.parse_phrase()?;
            return Ok(ClauseNode {
                operator: Some(op),
                body: ClauseBody::Phrase(words),
                span: start..phrase_end,
            });
        }

        Err(self.error_at(format!("dangling operator '{op}'"), start))
    }

    /// Parses: phrase → QUOTE (WORD SPACE?)* QUOTE
    ///
    /// Returns the phrase words and the byte offset just past the closing quote.
    fn parse_phrase(&mut self) -> Result<(Vec<String>, usize), QueryError> {
        let open = self.peek().map_or(self.input.len(), |t| t.span.start);
        self.advance(); // consume opening quote

        let mut words = Vec::new();

        loop {
            let Some(token) = self.peek().cloned() else {
                return Err(self.error_at("unclosed quote", open));
            };
            self.advance();

            match token.kind {
                TokenKind::Quote => return Ok((words, token.span.end)),
                TokenKind::Word(word) => words.push(word),
                // Whitespace may only follow a word.
                TokenKind::Space if words.is_empty() => {
                    return Err(
                        self.error_at("unexpected whitespace after opening quote", token.span.start)
                    );
                }
                TokenKind::Space => {}
            }
        }
    }

    /// Creates an error at a byte position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> QueryError {
        QueryError::parse(message, position, self.input)
    }

    /// Skips a whitespace token, if present.
    fn skip_space(&mut self) {
        if matches!(self.peek_kind(), Some(TokenKind::Space)) {
            self.advance();
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Returns the kind of the current token.
    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Parses query text into a parse tree.
///
/// Empty and whitespace-only input yield an empty tree. Unclosed quotes and
/// operators that are not attached to a term or phrase are errors.
pub fn parse_tree(input: &str) -> Result<ParseTree, QueryError> {
    trace!("parsing query {input:?}");
    let tree = Parser::new(input).parse()?;
    debug!("parsed {} clause(s) from {input:?}", tree.len());
    Ok(tree)
}
