//! Error types for query parsing and clause resolution.
//!
//! Parse errors carry a byte position into the original query so callers can
//! point at the offending text. Operator resolution failures indicate a defect
//! in the parser rather than bad user input.

use std::{error::Error as StdError, fmt};

use thiserror::Error;

/// The specific kind of query error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryErrorKind {
    /// The query text does not match the grammar.
    #[error("{message}")]
    Parse {
        /// Error message.
        message: String,
        /// Byte position in the query where the error was detected.
        position: usize,
    },

    /// A clause carried an operator symbol other than `+` or `-`.
    #[error("unknown operator: {symbol:?}")]
    UnknownOperator {
        /// The unrecognized operator symbol.
        symbol: char,
    },
}

/// A query error with optional context.
///
/// The `Display` implementation renders a diagnostic: the message, the query
/// with a caret under the error position, and a hint for common mistakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: QueryErrorKind,
    /// The original query string (if available).
    pub query: Option<String>,
}

impl QueryError {
    /// Creates a parse error at a byte position in `query`.
    pub fn parse(message: impl Into<String>, position: usize, query: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Parse {
                message: message.into(),
                position,
            },
            query: Some(query.into()),
        }
    }

    /// Creates an unknown-operator error.
    pub fn unknown_operator(symbol: char) -> Self {
        Self {
            kind: QueryErrorKind::UnknownOperator { symbol },
            query: None,
        }
    }

    /// Sets the query string for this error.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns the error message without context.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Returns the byte position of a parse error.
    pub fn position(&self) -> Option<usize> {
        match &self.kind {
            QueryErrorKind::Parse { position, .. } => Some(*position),
            QueryErrorKind::UnknownOperator { .. } => None,
        }
    }

    /// Returns true if this error was caused by malformed query text.
    pub fn is_parse(&self) -> bool {
        matches!(self.kind, QueryErrorKind::Parse { .. })
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        match &self.kind {
            QueryErrorKind::Parse { message, .. } if message.contains("unclosed quote") => {
                Some("Add a closing quote (\") to complete the phrase")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("dangling operator") => {
                Some("Attach + or - directly to a term or phrase, e.g. '+rust' or '-\"old api\"'")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("consecutive operators") => {
                Some("Use a single + or - per clause")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("after opening quote") => {
                Some("Start the phrase right after the quote, e.g. '\"old api\"'")
            }
            _ => None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match &self.kind {
            QueryErrorKind::Parse { .. } => "query syntax error",
            QueryErrorKind::UnknownOperator { .. } => "query error",
        };

        writeln!(f, "{prefix}: {}", self.kind)?;

        if let Some(query) = &self.query {
            writeln!(f, "  {query}")?;
            if let Some(pos) = self.position() {
                // Caret column counts characters, not bytes.
                let column = query
                    .get(..pos.min(query.len()))
                    .map_or(0, |prefix| prefix.chars().count());
                writeln!(f, "  {}^", " ".repeat(column))?;
            }
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "hint: {suggestion}")?;
        }

        Ok(())
    }
}

impl StdError for QueryError {}
