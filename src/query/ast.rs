use serde::{Serialize, Deserialize};

/// Parsed search query.
///
/// A closed set of filter predicates and boolean combinators; every
/// consumer (matcher, printer) is an exhaustive match over these variants.
/// The tree is built once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Query {
    /// Free-text term match against the entry's text.
    Term(TermQuery),
    /// Exact phrase match against the entry's text.
    Phrase(PhraseQuery),
    /// Structured metadata filter (`key:value`).
    Field(FieldQuery),
    Not(Box<Query>),
    And(Box<Query>, Box<Query>),
    Or(Box<Query>, Box<Query>),
    /// Sentinel for a blank query: matches every entry ("no filter").
    MatchAll,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermQuery {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseQuery {
    pub phrase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldQuery {
    pub key: String,
    pub value: String,
}

impl Query {
    pub fn term(value: impl Into<String>) -> Self {
        Query::Term(TermQuery { value: value.into() })
    }

    pub fn phrase(phrase: impl Into<String>) -> Self {
        Query::Phrase(PhraseQuery { phrase: phrase.into() })
    }

    pub fn field(key: impl Into<String>, value: impl Into<String>) -> Self {
        Query::Field(FieldQuery { key: key.into(), value: value.into() })
    }

    pub fn not(child: Query) -> Self {
        Query::Not(Box::new(child))
    }

    pub fn and(left: Query, right: Query) -> Self {
        Query::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Query, right: Query) -> Self {
        Query::Or(Box::new(left), Box::new(right))
    }
}
