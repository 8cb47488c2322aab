//! Typed clauses and their operators.

use std::fmt;

use crate::error::QueryError;

/// The role a clause plays in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No prefix: matching improves the score but is not required.
    Optional,
    /// `+` prefix: results must match.
    Required,
    /// `-` prefix: results must not match.
    Excluded,
}

impl Operator {
    /// All operators, in bucket order.
    pub const ALL: [Self; 3] = [Self::Optional, Self::Required, Self::Excluded];

    /// Resolves an operator symbol. A missing symbol means optional.
    pub fn from_symbol(symbol: Option<char>) -> Result<Self, QueryError> {
        match symbol {
            None => Ok(Self::Optional),
            Some('+') => Ok(Self::Required),
            Some('-') => Ok(Self::Excluded),
            Some(other) => Err(QueryError::unknown_operator(other)),
        }
    }

    /// The prefix written before a clause with this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Optional => "",
            Self::Required => "+",
            Self::Excluded => "-",
        }
    }

    /// The role name used in backend queries.
    pub fn name(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Required => "required",
            Self::Excluded => "excluded",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One parsed unit of a query: a term or a phrase with its operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Clause {
    /// A single unquoted token.
    Term {
        /// The clause's role.
        operator: Operator,
        /// The token text.
        term: String,
    },

    /// A quoted sequence of words, matched as a unit.
    Phrase {
        /// The clause's role.
        operator: Operator,
        /// The words joined by single spaces.
        phrase: String,
    },
}

impl Clause {
    /// Creates a term clause.
    pub fn term(operator: Operator, term: impl Into<String>) -> Self {
        Self::Term {
            operator,
            term: term.into(),
        }
    }

    /// Creates a phrase clause.
    pub fn phrase(operator: Operator, phrase: impl Into<String>) -> Self {
        Self::Phrase {
            operator,
            phrase: phrase.into(),
        }
    }

    /// Returns the clause's operator.
    pub fn operator(&self) -> Operator {
        match self {
            Self::Term { operator, .. } | Self::Phrase { operator, .. } => *operator,
        }
    }

    /// Returns the term or phrase text.
    pub fn text(&self) -> &str {
        match self {
            Self::Term { term, .. } => term,
            Self::Phrase { phrase, .. } => phrase,
        }
    }

    /// Returns true for phrase clauses.
    pub fn is_phrase(&self) -> bool {
        matches!(self, Self::Phrase { .. })
    }
}

/// Renders the clause as query syntax, e.g. `+urgent` or `-"old api"`.
impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.operator().symbol();
        match self {
            Self::Term { term, .. } => write!(f, "{symbol}{term}"),
            Self::Phrase { phrase, .. } => write!(f, "{symbol}\"{phrase}\""),
        }
    }
}
