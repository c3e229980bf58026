//! Catalog identifiers.
//!
//! Every record is addressed by an MSC ID of the form `msc:<series><number>`,
//! e.g. `msc:m13` for metadata scheme 13. The one-letter series code doubles
//! as the storage table name. Controlled vocabulary terms for data types use
//! the longer `msc:datatype<number>` form and are kept out of [`MscId`] so
//! the main series stays a closed enum.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix shared by every catalog identifier.
pub const MSCID_PREFIX: &str = "msc:";

/// Error returned when parsing series codes or MSC IDs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The string does not start with `msc:`.
    #[error("identifier does not start with `{MSCID_PREFIX}`: {0}")]
    MissingPrefix(String),
    /// The series code is not one of the known tables.
    #[error("unknown record series: {0}")]
    UnknownSeries(String),
    /// The part after the series code is not a positive number.
    #[error("invalid record number: {0}")]
    InvalidNumber(String),
}

/// The five record series and their one-letter table codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Scheme,
    Organization,
    Tool,
    Crosswalk,
    Endorsement,
}

impl Series {
    pub const ALL: [Self; 5] = [Self::Scheme, Self::Organization, Self::Tool, Self::Crosswalk, Self::Endorsement];

    /// One-letter table code (`m`, `g`, `t`, `c`, `e`).
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Scheme => 'm',
            Self::Organization => 'g',
            Self::Tool => 't',
            Self::Crosswalk => 'c',
            Self::Endorsement => 'e',
        }
    }

    /// Parse a one-letter table code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'm' => Some(Self::Scheme),
            'g' => Some(Self::Organization),
            't' => Some(Self::Tool),
            'c' => Some(Self::Crosswalk),
            'e' => Some(Self::Endorsement),
            _ => None,
        }
    }

    /// Lowercase noun used in template names and prose ("scheme", "mapping", ...).
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Organization => "organization",
            Self::Tool => "tool",
            Self::Crosswalk => "mapping",
            Self::Endorsement => "endorsement",
        }
    }

    /// Human heading for listings ("Metadata schemes", ...).
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::Scheme => "Metadata schemes",
            Self::Organization => "Organizations",
            Self::Tool => "Tools",
            Self::Crosswalk => "Mappings",
            Self::Endorsement => "Endorsements",
        }
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Series {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_code(c).ok_or_else(|| IdError::UnknownSeries(s.to_owned())),
            _ => Err(IdError::UnknownSeries(s.to_owned())),
        }
    }
}

/// Identifier of a main-series record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MscId {
    pub series: Series,
    pub number: i32,
}

impl MscId {
    #[must_use]
    pub fn new(series: Series, number: i32) -> Self {
        Self { series, number }
    }

    /// Parse `msc:<series><number>`, tolerating a trailing `#v<version>`
    /// fragment (the fragment identifies a version of the same record).
    ///
    /// # Errors
    ///
    /// Returns [`IdError`] when the prefix, series code, or number is wrong.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let rest = s
            .strip_prefix(MSCID_PREFIX)
            .ok_or_else(|| IdError::MissingPrefix(s.to_owned()))?;
        let rest = rest.split('#').next().unwrap_or(rest);
        Self::parse_bare(rest)
    }

    /// Parse the prefix-free `<series><number>` form used in URL paths.
    ///
    /// # Errors
    ///
    /// Returns [`IdError`] when the series code or number is wrong.
    pub fn parse_bare(s: &str) -> Result<Self, IdError> {
        let mut chars = s.chars();
        let code = chars.next().ok_or_else(|| IdError::UnknownSeries(s.to_owned()))?;
        let series = Series::from_code(code).ok_or_else(|| IdError::UnknownSeries(code.to_string()))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidNumber(digits.to_owned()));
        }
        let number: i32 = digits.parse().map_err(|_| IdError::InvalidNumber(digits.to_owned()))?;
        Ok(Self { series, number })
    }
}

impl fmt::Display for MscId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MSCID_PREFIX}{}{}", self.series, self.number)
    }
}

impl FromStr for MscId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// On the wire an MSC ID is always its string form.
impl Serialize for MscId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MscId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// MSC IDs sort by series letter, then numerically: msc:m2 before msc:m13.
// (The original storage layer zero-padded the number for the same effect.)
impl Ord for MscId {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.series.code(), self.number).cmp(&(other.series.code(), other.number))
    }
}

impl PartialOrd for MscId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort a list of MSC ID strings in catalog order, ignoring malformed entries'
/// relative position (they sort last, lexically).
pub fn sort_mscids(ids: &mut [String]) {
    ids.sort_by(|a, b| match (MscId::parse(a), MscId::parse(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    });
}

/// Identifier of a data-type vocabulary term, rendered as `msc:datatype<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatatypeId(pub i32);

impl DatatypeId {
    /// Parse `msc:datatype<number>`.
    ///
    /// # Errors
    ///
    /// Returns [`IdError`] when the prefix, table name, or number is wrong.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let rest = s
            .strip_prefix(MSCID_PREFIX)
            .ok_or_else(|| IdError::MissingPrefix(s.to_owned()))?;
        let digits = rest
            .strip_prefix("datatype")
            .ok_or_else(|| IdError::UnknownSeries(rest.to_owned()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdError::InvalidNumber(digits.to_owned()));
        }
        let number: i32 = digits.parse().map_err(|_| IdError::InvalidNumber(digits.to_owned()))?;
        Ok(Self(number))
    }
}

impl fmt::Display for DatatypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MSCID_PREFIX}datatype{}", self.0)
    }
}

#[cfg(test)]
#[path = "mscid_test.rs"]
mod tests;
