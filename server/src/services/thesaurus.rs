//! The subject thesaurus.
//!
//! Keywords are stored on records as term URIs and edited/displayed as
//! labels. The term list ships with the binary as pre-flattened JSON: each
//! term carries its URI, its short label, a long label qualified by its
//! ancestors (`Geology < Earth sciences < Science`), and the ancestor URIs,
//! domain first. Lookup is in-memory and read-only.

use std::collections::HashMap;

use serde::Deserialize;

const THESAURUS_DATA: &str = include_str!("../../data/thesaurus.json");

/// One subject term.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Term {
    pub uri: String,
    pub label: String,
    pub long_label: String,
    #[serde(default)]
    pub ancestry: Vec<String>,
}

/// The loaded thesaurus with lookup indexes.
#[derive(Debug)]
pub struct Thesaurus {
    terms: Vec<Term>,
    by_uri: HashMap<String, usize>,
    by_label: HashMap<String, usize>,
    by_long_label: HashMap<String, usize>,
}

impl Thesaurus {
    /// Load the bundled term list.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error if the bundled data is malformed.
    pub fn load_default() -> Result<Self, serde_json::Error> {
        Self::from_json(THESAURUS_DATA)
    }

    /// Load a term list from JSON.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let terms: Vec<Term> = serde_json::from_str(raw)?;
        let mut by_uri = HashMap::with_capacity(terms.len());
        let mut by_label = HashMap::with_capacity(terms.len());
        let mut by_long_label = HashMap::with_capacity(terms.len());
        for (index, term) in terms.iter().enumerate() {
            by_uri.insert(term.uri.clone(), index);
            by_label.entry(term.label.clone()).or_insert(index);
            by_long_label.insert(term.long_label.clone(), index);
        }
        Ok(Self { terms, by_uri, by_label, by_long_label })
    }

    /// Short label for a term URI.
    #[must_use]
    pub fn label(&self, uri: &str) -> Option<&str> {
        self.by_uri.get(uri).map(|&i| self.terms[i].label.as_str())
    }

    /// Long (ancestry-qualified) label for a term URI.
    #[must_use]
    pub fn long_label(&self, uri: &str) -> Option<&str> {
        self.by_uri.get(uri).map(|&i| self.terms[i].long_label.as_str())
    }

    /// Translate a short or long label into a term URI. Long labels are
    /// recognized by the `<` qualifier they carry.
    #[must_use]
    pub fn uri_for(&self, label: &str) -> Option<&str> {
        let index = if label.contains('<') { self.by_long_label.get(label) } else { self.by_label.get(label) };
        index.map(|&i| self.terms[i].uri.as_str())
    }

    /// All long labels, in thesaurus order, for form autocompletion.
    #[must_use]
    pub fn choices(&self) -> Vec<String> {
        self.terms.iter().map(|t| t.long_label.clone()).collect()
    }
}

#[cfg(test)]
#[path = "thesaurus_test.rs"]
mod tests;
