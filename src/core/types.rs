use serde::{Serialize, Deserialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

impl EntryId {
    pub fn new(id: u64) -> Self {
        EntryId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        EntryId(id)
    }
}

/// A journal entry (map pin) as seen by the query matcher.
///
/// `text` is the free-text body the entry is searched by (title and notes,
/// concatenated by the caller); `fields` holds structured metadata such as
/// tags or the place name. Fields are multi-valued because an entry can
/// carry several tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub text: String,
    pub fields: HashMap<String, Vec<String>>,
}

impl Entry {
    pub fn new(id: EntryId, text: impl Into<String>) -> Self {
        Entry {
            id,
            text: text.into(),
            fields: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.entry(name.into()).or_default().push(value.into());
    }

    pub fn get_field(&self, name: &str) -> Option<&[String]> {
        self.fields.get(name).map(|values| values.as_slice())
    }
}
