//! Search query parsing and clause grouping.
//!
//! The query language is deliberately small:
//!
//! - **Terms**: `rust` - optional words that improve a match
//! - **Phrases**: `"error handling"` - exact word sequences
//! - **Required**: `+async` or `+"error handling"` - must match
//! - **Excluded**: `-deprecated` or `-"old api"` - must not match
//!
//! Parsing runs in three steps: the grammar produces a flat [`ParseTree`], the
//! transformer turns it into typed [`Clause`]s, and [`Query`] groups the
//! clauses by [`Operator`] while keeping their source order. A query converts to
//! a [`BackendQuery`] for handing to a search engine.
//!
//! # Example
//!
//! ```
//! use phrasal_query::{Operator, parse};
//!
//! let query = parse("+urgent \"quarterly report\" -draft").unwrap();
//! assert_eq!(query.clauses(Operator::Required)[0].text(), "urgent");
//!
//! let backend = serde_json::to_string(&query.to_backend_query()).unwrap();
//! assert_eq!(
//!     backend,
//!     r#"{"optional":[{"match_phrase":"quarterly report"}],"required":[{"match":"urgent"}],"excluded":[{"match":"draft"}]}"#
//! );
//! ```

#![warn(missing_docs)]

mod backend;
mod clause;
mod error;
mod lexer;
mod parser;
mod query;
mod transform;
mod tree;

pub use backend::{BackendQuery, Dialect, Leaf};
pub use clause::{Clause, Operator};
pub use error::{QueryError, QueryErrorKind};
pub use lexer::{QUOTE, Token, TokenKind, tokenize};
pub use parser::parse_tree;
pub use query::{Iter, Query, parse};
pub use transform::{transform, transform_node};
pub use tree::{ClauseBody, ClauseNode, ParseTree};
