use crate::core::types::Entry;
use crate::query::ast::{FieldQuery, PhraseQuery, Query, TermQuery};

/// Entry matcher - evaluates a parsed query against journal entries.
///
/// Matching is a pure structural recursion over the AST: terms and phrases
/// are case-insensitive substring tests against the entry text, field
/// filters test the entry's metadata values, and the boolean combinators
/// short-circuit (the right side of an AND/OR is skipped when the left
/// side already decides the outcome, which is safe because no predicate
/// has side effects).
pub struct EntryMatcher;

impl EntryMatcher {
    pub fn new() -> Self {
        EntryMatcher
    }

    /// Check if an entry matches the query.
    pub fn matches(&self, entry: &Entry, query: &Query) -> bool {
        match query {
            Query::MatchAll => true,
            Query::Term(term) => self.matches_term(entry, term),
            Query::Phrase(phrase) => self.matches_phrase(entry, phrase),
            Query::Field(field) => self.matches_field(entry, field),
            Query::Not(child) => !self.matches(entry, child),
            Query::And(left, right) => {
                self.matches(entry, left) && self.matches(entry, right)
            }
            Query::Or(left, right) => {
                self.matches(entry, left) || self.matches(entry, right)
            }
        }
    }

    /// Collect the entries matching a query, in input order.
    pub fn filter<'a, I>(&self, entries: I, query: &Query) -> Vec<&'a Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry, query))
            .collect()
    }

    fn matches_term(&self, entry: &Entry, term: &TermQuery) -> bool {
        entry.text.to_lowercase().contains(&term.value.to_lowercase())
    }

    /// Exact phrase: the quoted text must appear verbatim in the entry
    /// text (case-insensitive).
    fn matches_phrase(&self, entry: &Entry, phrase: &PhraseQuery) -> bool {
        entry.text.to_lowercase().contains(&phrase.phrase.to_lowercase())
    }

    /// Field filter: any stored value of the field contains the query
    /// value (case-insensitive). An absent field never matches.
    fn matches_field(&self, entry: &Entry, field: &FieldQuery) -> bool {
        let needle = field.value.to_lowercase();
        entry
            .get_field(&field.key)
            .is_some_and(|values| {
                values.iter().any(|v| v.to_lowercase().contains(&needle))
            })
    }
}

impl Default for EntryMatcher {
    fn default() -> Self {
        Self::new()
    }
}
