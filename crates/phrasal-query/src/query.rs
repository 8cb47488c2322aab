//! Clause aggregation.
//!
//! A [`Query`] groups clauses into three buckets by operator. The grouping is
//! a single pass that appends each clause to its bucket, so clauses keep their
//! source order within a bucket even when operators are interleaved.

use std::{
    fmt,
    iter::{Chain, FusedIterator},
    slice,
    str::FromStr,
};

use log::debug;

use crate::{
    backend::{BackendQuery, Leaf},
    clause::{Clause, Operator},
    error::QueryError,
    parser::parse_tree,
    transform::transform,
};

/// A parsed query with clauses grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Clauses without an operator.
    optional_clauses: Vec<Clause>,
    /// Clauses prefixed with `+`.
    required_clauses: Vec<Clause>,
    /// Clauses prefixed with `-`.
    excluded_clauses: Vec<Clause>,
}

impl Query {
    /// Groups an ordered clause sequence by operator.
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut query = Self::default();
        for clause in clauses {
            query.bucket_mut(clause.operator()).push(clause);
        }
        debug!(
            "aggregated query: {} optional, {} required, {} excluded",
            query.optional_clauses.len(),
            query.required_clauses.len(),
            query.excluded_clauses.len()
        );
        query
    }

    /// Returns the mutable bucket for an operator.
    fn bucket_mut(&mut self, operator: Operator) -> &mut Vec<Clause> {
        match operator {
            Operator::Optional => &mut self.optional_clauses,
            Operator::Required => &mut self.required_clauses,
            Operator::Excluded => &mut self.excluded_clauses,
        }
    }

    /// Returns the clauses for an operator, in source order.
    pub fn clauses(&self, operator: Operator) -> &[Clause] {
        match operator {
            Operator::Optional => &self.optional_clauses,
            Operator::Required => &self.required_clauses,
            Operator::Excluded => &self.excluded_clauses,
        }
    }

    /// Clauses without an operator.
    pub fn optional_clauses(&self) -> &[Clause] {
        &self.optional_clauses
    }

    /// Clauses that must match.
    pub fn required_clauses(&self) -> &[Clause] {
        &self.required_clauses
    }

    /// Clauses that must not match.
    pub fn excluded_clauses(&self) -> &[Clause] {
        &self.excluded_clauses
    }

    /// Total number of clauses across all buckets.
    pub fn len(&self) -> usize {
        self.optional_clauses.len() + self.required_clauses.len() + self.excluded_clauses.len()
    }

    /// Returns true if the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over all clauses in bucket order: optional, required, excluded.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self
                .optional_clauses
                .iter()
                .chain(self.required_clauses.iter())
                .chain(self.excluded_clauses.iter()),
        }
    }

    /// Converts the query into a backend-neutral role mapping.
    ///
    /// Terms become match leaves and phrases become match-phrase leaves. Empty
    /// buckets are left out.
    pub fn to_backend_query(&self) -> BackendQuery {
        let mut backend = BackendQuery::default();
        for operator in Operator::ALL {
            let leaves = self.clauses(operator).iter().map(Leaf::from).collect();
            backend.set(operator, leaves);
        }
        backend
    }

    /// Formats the query as normalized query text.
    ///
    /// Clauses are written in bucket order with single spaces, so parsing the
    /// result yields an equal query.
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(Clause::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<Clause> for Query {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self::from_clauses(iter)
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = &'a Clause;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a query's clauses in bucket order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// The chained bucket iterators.
    inner: Chain<Chain<slice::Iter<'a, Clause>, slice::Iter<'a, Clause>>, slice::Iter<'a, Clause>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Clause;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Iter<'_> {}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Query (empty)");
        }

        writeln!(f, "Query")?;
        for operator in Operator::ALL {
            let clauses = self.clauses(operator);
            if clauses.is_empty() {
                continue;
            }
            writeln!(f, "  {operator}")?;
            for clause in clauses {
                match clause {
                    Clause::Term { term, .. } => writeln!(f, "    Term({term:?})")?,
                    Clause::Phrase { phrase, .. } => writeln!(f, "    Phrase({phrase:?})")?,
                }
            }
        }
        Ok(())
    }
}

/// Parses query text into a grouped query.
///
/// Runs the full pipeline: grammar, clause transformation, and aggregation.
/// Empty input yields an empty query.
pub fn parse(input: &str) -> Result<Query, QueryError> {
    let tree = parse_tree(input)?;
    let clauses = transform(tree).map_err(|e| e.with_query(input))?;
    Ok(Query::from_clauses(clauses))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(op: Operator, s: &str) -> Clause {
        Clause::term(op, s)
    }

    fn texts(clauses: &[Clause]) -> Vec<&str> {
        clauses.iter().map(Clause::text).collect()
    }

    #[test]
    fn bare_terms_are_optional() {
        let query = parse("hello world").unwrap();
        assert_eq!(
            query.optional_clauses(),
            &[
                term(Operator::Optional, "hello"),
                term(Operator::Optional, "world")
            ]
        );
        assert!(query.required_clauses().is_empty());
        assert!(query.excluded_clauses().is_empty());
    }

    #[test]
    fn mixed_operators() {
        let query = parse("+urgent \"quarterly report\" -draft").unwrap();
        assert_eq!(query.required_clauses(), &[term(Operator::Required, "urgent")]);
        assert_eq!(
            query.optional_clauses(),
            &[Clause::phrase(Operator::Optional, "quarterly report")]
        );
        assert_eq!(query.excluded_clauses(), &[term(Operator::Excluded, "draft")]);
    }

    #[test]
    fn interleaved_operators_keep_every_clause() {
        let query = parse("+foo qux -bar +baz").unwrap();
        assert_eq!(texts(query.required_clauses()), vec!["foo", "baz"]);
        assert_eq!(texts(query.optional_clauses()), vec!["qux"]);
        assert_eq!(texts(query.excluded_clauses()), vec!["bar"]);
    }

    #[test]
    fn separated_runs_are_merged_in_order() {
        // optional, required, optional: the first optional run must survive.
        let query = parse("a b +c d e -f g").unwrap();
        assert_eq!(texts(query.optional_clauses()), vec!["a", "b", "d", "e", "g"]);
        assert_eq!(texts(query.required_clauses()), vec!["c"]);
        assert_eq!(texts(query.excluded_clauses()), vec!["f"]);
    }

    #[test]
    fn partition_counts_match() {
        let inputs = [
            "",
            "a",
            "+a -b c",
            "-a -b -c +d \"e f\" g -\"h i\"",
            "x +y x +y x",
        ];
        for input in inputs {
            let clauses = transform(parse_tree(input).unwrap()).unwrap();
            let query = Query::from_clauses(clauses.clone());
            assert_eq!(query.len(), clauses.len(), "{input}");
            for clause in &clauses {
                let bucket = query.clauses(clause.operator());
                let expected = clauses.iter().filter(|c| *c == clause).count();
                let found = bucket.iter().filter(|c| *c == clause).count();
                assert_eq!(found, expected, "{input}: {clause}");
            }
        }
    }

    #[test]
    fn order_preserved_per_bucket() {
        let input = "-e1 o1 +r1 o2 -e2 +r2 o3 +r3 -e3";
        let clauses = transform(parse_tree(input).unwrap()).unwrap();
        let query = Query::from_clauses(clauses.clone());
        for operator in Operator::ALL {
            let expected: Vec<_> = clauses
                .iter()
                .filter(|c| c.operator() == operator)
                .cloned()
                .collect();
            assert_eq!(query.clauses(operator), expected.as_slice());
        }
    }

    #[test]
    fn empty_query() {
        let query = parse("").unwrap();
        assert!(query.is_empty());
        assert_eq!(query.len(), 0);
        assert!(query.to_backend_query().is_empty());
    }

    #[test]
    fn parse_is_deterministic() {
        let input = "+a \"b  c\" -d e +f";
        assert_eq!(parse(input).unwrap(), parse(input).unwrap());
    }

    #[test]
    fn parse_error_is_reported() {
        let err = parse("\"unterminated").unwrap_err();
        assert!(err.is_parse());
        assert!(err.message().contains("unclosed quote"));
    }

    #[test]
    fn non_breaking_space_does_not_split_terms() {
        let query = parse("foo\u{A0}bar").unwrap();
        assert_eq!(query.len(), 1);
        assert_eq!(texts(query.optional_clauses()), vec!["foo\u{A0}bar"]);
    }

    #[test]
    fn leading_phrase_whitespace_is_rejected() {
        for input in ["\" a b\"", "\"   \""] {
            assert!(parse(input).unwrap_err().is_parse(), "{input}");
        }
    }

    #[test]
    fn from_str() {
        let query: Query = "+a b".parse().unwrap();
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn collect_into_query() {
        let query: Query = vec![
            term(Operator::Excluded, "x"),
            term(Operator::Optional, "y"),
        ]
        .into_iter()
        .collect();
        assert_eq!(texts(query.excluded_clauses()), vec!["x"]);
        assert_eq!(texts(query.optional_clauses()), vec!["y"]);
    }

    #[test]
    fn iter_in_bucket_order() {
        let query = parse("-a b +c d").unwrap();
        let all: Vec<_> = query.iter().map(Clause::text).collect();
        assert_eq!(all, vec!["b", "d", "c", "a"]);
        assert_eq!(query.iter().size_hint(), (4, Some(4)));
    }

    #[test]
    fn query_string_is_normalized() {
        let query = parse("  -draft   \"quarterly    report\" +urgent ").unwrap();
        assert_eq!(
            query.to_query_string(),
            "\"quarterly report\" +urgent -draft"
        );
    }

    #[test]
    fn query_string_reparses_to_equal_query() {
        for input in ["+foo qux -bar +baz", "a \"b c\" -\"d e\" +f", ""] {
            let query = parse(input).unwrap();
            let reparsed = parse(&query.to_query_string()).unwrap();
            assert_eq!(reparsed, query, "{input}");
        }
    }

    #[test]
    fn display_tree() {
        let query = parse("+urgent \"quarterly report\" -draft").unwrap();
        let display = query.to_string();
        assert_eq!(
            display,
            "Query\n  optional\n    Phrase(\"quarterly report\")\n  required\n    Term(\"urgent\")\n  excluded\n    Term(\"draft\")\n"
        );
        assert_eq!(Query::default().to_string(), "Query (empty)\n");
    }
}
