//! Parse tree produced by the grammar.
//!
//! The tree is flat: a query is an ordered list of clause nodes, each holding
//! the raw operator symbol (if any) and either a term or the words of a phrase.
//! Operator symbols are resolved to roles later, by the transformer.

use std::{fmt, ops::Range, slice, vec};

/// The body of a parsed clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseBody {
    /// A bare term.
    Term(String),

    /// The words of a quoted phrase, in source order.
    Phrase(Vec<String>),
}

/// One clause as recognized by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseNode {
    /// The operator symbol written before the clause, if any.
    pub operator: Option<char>,
    /// The term or phrase.
    pub body: ClauseBody,
    /// Byte range of the clause in the input, operator included.
    pub span: Range<usize>,
}

/// An ordered sequence of parsed clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseTree {
    /// Clauses in source order.
    pub clauses: Vec<ClauseNode>,
}

impl ParseTree {
    /// Returns the number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if the query contained no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Iterates over clauses in source order.
    pub fn iter(&self) -> slice::Iter<'_, ClauseNode> {
        self.clauses.iter()
    }
}

impl IntoIterator for ParseTree {
    type Item = ClauseNode;
    type IntoIter = vec::IntoIter<ClauseNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseTree {
    type Item = &'a ClauseNode;
    type IntoIter = slice::Iter<'a, ClauseNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Query")?;
        for node in &self.clauses {
            let op = node.operator.map(String::from).unwrap_or_default();
            write!(f, "  Clause({op:?}, {}..{}) ", node.span.start, node.span.end)?;
            match &node.body {
                ClauseBody::Term(term) => writeln!(f, "Term({term:?})")?,
                ClauseBody::Phrase(words) => writeln!(f, "Phrase({words:?})")?,
            }
        }
        Ok(())
    }
}
