//! Parse tree to clause conversion.

use log::trace;

use crate::{
    clause::{Clause, Operator},
    error::QueryError,
    tree::{ClauseBody, ClauseNode, ParseTree},
};

/// Converts a single parse tree node into a typed clause.
///
/// Phrase words are joined with single spaces, so whitespace inside quotes is
/// normalized.
pub fn transform_node(node: ClauseNode) -> Result<Clause, QueryError> {
    let operator = Operator::from_symbol(node.operator)?;
    Ok(match node.body {
        ClauseBody::Term(term) => Clause::Term { operator, term },
        ClauseBody::Phrase(words) => Clause::Phrase {
            operator,
            phrase: words.join(" "),
        },
    })
}

/// Converts a parse tree into typed clauses, preserving source order.
pub fn transform(tree: ParseTree) -> Result<Vec<Clause>, QueryError> {
    let clauses = tree
        .into_iter()
        .map(transform_node)
        .collect::<Result<Vec<_>, _>>()?;
    trace!("transformed {} clause(s)", clauses.len());
    Ok(clauses)
}
