//! Record documents.
//!
//! Records are heterogeneous: every field is optional and different series
//! use different subsets. [`RecordFields`] mirrors the stored JSON document
//! one-to-one (the storage layer keeps records as `jsonb`), so unknown keys
//! survive a load/save round trip via the flattened `extra` map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::mscid::{MscId, Series};

/// A link to material about the record (`{"url": ..., "type": ...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

/// An XML-style namespace declared by a scheme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefix: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,
}

/// An identifier for the record in some external scheme (DOI, handle, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub scheme: String,
}

/// A sample record conforming to a scheme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// A person credited with creating a mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    #[serde(rename = "fullName", default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    #[serde(rename = "givenName", default, skip_serializing_if = "String::is_empty")]
    pub given_name: String,
    #[serde(rename = "familyName", default, skip_serializing_if = "String::is_empty")]
    pub family_name: String,
}

impl Creator {
    /// Preferred display form: the full name, else "Given Family".
    #[must_use]
    pub fn display_name(&self) -> String {
        if !self.full_name.is_empty() {
            return self.full_name.clone();
        }
        let joined = format!("{} {}", self.given_name, self.family_name);
        joined.trim().to_owned()
    }
}

/// One entry in a record's version history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub number: String,
    /// Date published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,
    /// Date released as a draft or proposal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,
    /// Date the version became the current one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    /// Date the version was superseded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<Namespace>,
}

/// The superset of stored record fields across all five series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sanitized HTML, produced upstream; rendered as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Bibliographic citation (endorsements).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Subject keywords, stored as thesaurus term URIs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    /// MSC IDs of data-type vocabulary terms.
    #[serde(rename = "dataTypes", default, skip_serializing_if = "Vec::is_empty")]
    pub data_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<Namespace>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Sample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creators: Vec<Creator>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<Version>,
    /// Endorsement issue date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<String>,
    /// Keys this model does not interpret, preserved round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A materialized catalog record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub series: Series,
    pub number: i32,
    pub fields: RecordFields,
}

impl Record {
    /// A blank record of the given series (number 0 = not yet saved).
    #[must_use]
    pub fn blank(series: Series) -> Self {
        Self { series, number: 0, fields: RecordFields::default() }
    }

    #[must_use]
    pub fn mscid(&self) -> MscId {
        MscId::new(self.series, self.number)
    }

    /// Display name. Schemes, tools and endorsements are titled; organizations
    /// and mappings are named. Falls back to a generic label so listings never
    /// show an empty link.
    #[must_use]
    pub fn name(&self) -> String {
        let preferred = match self.series {
            Series::Scheme | Series::Tool | Series::Endorsement => self.fields.title.as_deref(),
            Series::Organization | Series::Crosswalk => self.fields.name.as_deref(),
        };
        if let Some(name) = preferred.filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        if self.series == Series::Endorsement {
            if let Some(citation) = self.fields.citation.as_deref().filter(|c| !c.is_empty()) {
                return citation.to_owned();
            }
        }
        match self.series {
            Series::Scheme => "Untitled".to_owned(),
            _ => format!("{} {}", capitalized_noun(self.series), self.mscid()),
        }
    }

    /// URL-safe slug: the stored one, else derived from the display name.
    #[must_use]
    pub fn slug(&self) -> Option<String> {
        if let Some(slug) = self.fields.slug.as_deref().filter(|s| !s.is_empty()) {
            return Some(slug.to_owned());
        }
        let name = self.name();
        if name.is_empty() { None } else { Some(to_file_slug(&name)) }
    }
}

fn capitalized_noun(series: Series) -> String {
    let noun = series.noun();
    let mut chars = noun.chars();
    chars
        .next()
        .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default()
}

/// Lowercase a display name into a hyphenated file slug.
#[must_use]
pub fn to_file_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_hyphen = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// A data-type vocabulary term.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datatype {
    pub number: i32,
    /// URL identifying this type of data, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Descriptor shown in scheme displays and form choices.
    pub label: String,
}

impl Datatype {
    #[must_use]
    pub fn mscid(&self) -> crate::mscid::DatatypeId {
        crate::mscid::DatatypeId(self.number)
    }
}

/// Recursively remove empty values from a record document before saving:
/// empty strings, empty arrays, objects whose values are all empty, and
/// nulls. Zeros survive. Form bookkeeping keys are stripped as well.
#[must_use]
pub fn cleanup(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (key, val) in map {
                if key == "csrf_token" || key == "old_relations" {
                    continue;
                }
                let cleaned = cleanup(val);
                if !is_empty_value(&cleaned) {
                    out.insert(key, cleaned);
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            let cleaned: Vec<Value> = items.into_iter().map(cleanup).filter(|v| !is_empty_value(v)).collect();
            Value::Array(cleaned)
        }
        other => other,
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
