//! Backend query structures.
//!
//! A [`BackendQuery`] maps each non-empty role to a list of match leaves. It
//! serializes to the neutral form
//! `{"optional": [{"match": "hello"}], "excluded": [{"match_phrase": "a b"}]}`
//! and can be rendered for a specific search backend through a [`Dialect`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clause::{Clause, Operator};

/// A single backend sub-query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaf {
    /// Match documents containing this term.
    Match(String),
    /// Match documents containing this exact phrase.
    MatchPhrase(String),
}

impl Leaf {
    /// The backend name of the leaf kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Match(_) => "match",
            Self::MatchPhrase(_) => "match_phrase",
        }
    }

    /// The term or phrase text.
    pub fn text(&self) -> &str {
        match self {
            Self::Match(text) | Self::MatchPhrase(text) => text,
        }
    }

    /// Renders the leaf as JSON for a dialect.
    fn to_json(&self, dialect: Dialect, field: &str) -> Value {
        let text = Value::String(self.text().to_string());
        let body = match dialect {
            Dialect::Neutral => text,
            Dialect::Elasticsearch => {
                let mut scoped = Map::new();
                scoped.insert(field.to_string(), text);
                Value::Object(scoped)
            }
        };
        let mut leaf = Map::new();
        leaf.insert(self.kind().to_string(), body);
        Value::Object(leaf)
    }
}

impl From<&Clause> for Leaf {
    fn from(clause: &Clause) -> Self {
        match clause {
            Clause::Term { term, .. } => Self::Match(term.clone()),
            Clause::Phrase { phrase, .. } => Self::MatchPhrase(phrase.clone()),
        }
    }
}

/// Role names and leaf layout expected by a search backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `optional` / `required` / `excluded` keys with bare leaf values.
    #[default]
    Neutral,
    /// An Elasticsearch `bool` query: `should` / `must` / `must_not` keys and
    /// field-scoped leaves.
    Elasticsearch,
}

impl Dialect {
    /// All dialects.
    pub const ALL: [Self; 2] = [Self::Neutral, Self::Elasticsearch];

    /// The dialect's name as used in configuration and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Elasticsearch => "elasticsearch",
        }
    }

    /// The key a role is emitted under.
    pub fn role_key(self, operator: Operator) -> &'static str {
        match (self, operator) {
            (Self::Neutral, _) => operator.name(),
            (Self::Elasticsearch, Operator::Optional) => "should",
            (Self::Elasticsearch, Operator::Required) => "must",
            (Self::Elasticsearch, Operator::Excluded) => "must_not",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "neutral" => Ok(Self::Neutral),
            "elasticsearch" | "es" => Ok(Self::Elasticsearch),
            _ => Err(format!(
                "unknown dialect '{s}' (expected one of: neutral, elasticsearch)"
            )),
        }
    }
}

/// A role-keyed mapping of backend leaves.
///
/// Only non-empty roles are present, and roles are always emitted in the order
/// optional, required, excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BackendQuery {
    /// Leaves for optional clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    optional: Option<Vec<Leaf>>,
    /// Leaves for required clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<Leaf>>,
    /// Leaves for excluded clauses.
    #[serde(skip_serializing_if = "Option::is_none")]
    excluded: Option<Vec<Leaf>>,
}

impl BackendQuery {
    /// Stores the leaves for a role. An empty list clears the role.
    pub(crate) fn set(&mut self, operator: Operator, leaves: Vec<Leaf>) {
        let slot = match operator {
            Operator::Optional => &mut self.optional,
            Operator::Required => &mut self.required,
            Operator::Excluded => &mut self.excluded,
        };
        *slot = (!leaves.is_empty()).then_some(leaves);
    }

    /// Returns the leaves for a role, or None if the role has no clauses.
    pub fn get(&self, operator: Operator) -> Option<&[Leaf]> {
        match operator {
            Operator::Optional => self.optional.as_deref(),
            Operator::Required => self.required.as_deref(),
            Operator::Excluded => self.excluded.as_deref(),
        }
    }

    /// Iterates over the present roles in emission order.
    pub fn roles(&self) -> impl Iterator<Item = (Operator, &[Leaf])> + '_ {
        Operator::ALL
            .into_iter()
            .filter_map(|operator| self.get(operator).map(|leaves| (operator, leaves)))
    }

    /// Returns true if no role is present.
    pub fn is_empty(&self) -> bool {
        self.roles().next().is_none()
    }

    /// Renders the mapping as JSON for a dialect.
    ///
    /// `field` names the document field that Elasticsearch leaves match
    /// against; the neutral dialect ignores it.
    pub fn to_json(&self, dialect: Dialect, field: &str) -> Value {
        let mut roles = Map::new();
        for (operator, leaves) in self.roles() {
            let rendered = leaves
                .iter()
                .map(|leaf| leaf.to_json(dialect, field))
                .collect();
            roles.insert(
                dialect.role_key(operator).to_string(),
                Value::Array(rendered),
            );
        }

        match dialect {
            Dialect::Neutral => Value::Object(roles),
            Dialect::Elasticsearch => {
                let mut query = Map::new();
                query.insert("bool".to_string(), Value::Object(roles));
                Value::Object(query)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::query::parse;

    fn neutral(input: &str) -> Value {
        serde_json::to_value(parse(input).unwrap().to_backend_query()).unwrap()
    }

    #[test]
    fn terms_become_match_leaves() {
        assert_eq!(
            neutral("hello world"),
            json!({ "optional": [{ "match": "hello" }, { "match": "world" }] })
        );
    }

    #[test]
    fn all_three_roles() {
        let value = neutral("+urgent \"quarterly report\" -draft");
        assert_eq!(
            value,
            json!({
                "optional": [{ "match_phrase": "quarterly report" }],
                "required": [{ "match": "urgent" }],
                "excluded": [{ "match": "draft" }],
            })
        );
    }

    #[test]
    fn empty_roles_are_omitted() {
        let backend = parse("-a -b").unwrap().to_backend_query();
        assert!(backend.get(Operator::Optional).is_none());
        assert!(backend.get(Operator::Required).is_none());
        assert_eq!(backend.get(Operator::Excluded).map(<[Leaf]>::len), Some(2));
        assert_eq!(
            serde_json::to_string(&backend).unwrap(),
            r#"{"excluded":[{"match":"a"},{"match":"b"}]}"#
        );
    }

    #[test]
    fn empty_query_is_empty_mapping() {
        let backend = parse("").unwrap().to_backend_query();
        assert!(backend.is_empty());
        assert_eq!(serde_json::to_string(&backend).unwrap(), "{}");
        assert_eq!(backend.to_json(Dialect::Neutral, "content"), json!({}));
    }

    #[test]
    fn role_order_is_fixed() {
        // Excluded first, optional last in the input; output order never changes.
        let backend = parse("-x +y z").unwrap().to_backend_query();
        let serialized = serde_json::to_string(&backend).unwrap();
        assert_eq!(
            serialized,
            r#"{"optional":[{"match":"z"}],"required":[{"match":"y"}],"excluded":[{"match":"x"}]}"#
        );

        let rendered = backend.to_json(Dialect::Elasticsearch, "body");
        let keys: Vec<_> = rendered["bool"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["should", "must", "must_not"]);
    }

    #[test]
    fn neutral_json_matches_serde_output() {
        let backend = parse("a +\"b c\" -d").unwrap().to_backend_query();
        assert_eq!(
            backend.to_json(Dialect::Neutral, "ignored"),
            serde_json::to_value(&backend).unwrap()
        );
    }

    #[test]
    fn elasticsearch_dialect() {
        let backend = parse("+urgent \"quarterly report\" -draft").unwrap().to_backend_query();
        assert_eq!(
            backend.to_json(Dialect::Elasticsearch, "content"),
            json!({
                "bool": {
                    "should": [{ "match_phrase": { "content": "quarterly report" } }],
                    "must": [{ "match": { "content": "urgent" } }],
                    "must_not": [{ "match": { "content": "draft" } }],
                }
            })
        );
    }

    #[test]
    fn dialect_from_str() {
        assert_eq!("neutral".parse::<Dialect>().unwrap(), Dialect::Neutral);
        assert_eq!("ES".parse::<Dialect>().unwrap(), Dialect::Elasticsearch);
        let err = "solr".parse::<Dialect>().unwrap_err();
        assert!(err.contains("unknown dialect"));
    }

    #[test]
    fn dialect_names_round_trip() {
        for dialect in Dialect::ALL {
            assert_eq!(dialect.name().parse::<Dialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn roles_iterates_present_roles() {
        let backend = parse("+a b").unwrap().to_backend_query();
        let roles: Vec<_> = backend.roles().map(|(op, leaves)| (op, leaves.len())).collect();
        assert_eq!(roles, vec![(Operator::Optional, 1), (Operator::Required, 1)]);
    }

    #[test]
    fn leaf_accessors() {
        let leaf = Leaf::from(&Clause::phrase(Operator::Required, "a b"));
        assert_eq!(leaf, Leaf::MatchPhrase("a b".into()));
        assert_eq!(leaf.kind(), "match_phrase");
        assert_eq!(leaf.text(), "a b");
    }
}
