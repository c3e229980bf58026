//! Version history display annotation.
//!
//! Stored versions carry up to four dates (issued, available, valid_from,
//! valid_to). Displays want one date and one status per entry, newest first,
//! with exactly one entry marked current.

use serde::Serialize;

use crate::model::Version;

/// Lifecycle status derived from a version's dates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionStatus {
    Current,
    /// Released as a draft or proposal only.
    Proposed,
    /// Superseded on the given date.
    Deprecated { until: String },
    Unknown,
}

impl VersionStatus {
    /// Short text shown next to the version number; empty for unknown.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Current => "current".to_owned(),
            Self::Proposed => "proposed".to_owned(),
            Self::Deprecated { until } => format!("deprecated on {until}"),
            Self::Unknown => String::new(),
        }
    }
}

/// A version entry prepared for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnnotatedVersion {
    #[serde(flatten)]
    pub version: Version,
    /// The single date shown for this entry, if any was recorded.
    pub date: Option<String>,
    pub status: VersionStatus,
}

/// Prepare version entries for display: drop unnumbered entries, derive a
/// display date and status for each, sort newest first, and promote the
/// newest undated-status entry to current.
#[must_use]
pub fn annotate_versions(versions: &[Version]) -> Vec<AnnotatedVersion> {
    let mut annotated: Vec<AnnotatedVersion> = versions
        .iter()
        .filter(|v| !v.number.is_empty())
        .map(|v| {
            let date = v
                .issued
                .clone()
                .or_else(|| v.valid_from.clone())
                .or_else(|| v.available.clone());
            let status = match (&v.valid_to, &v.issued, &v.valid_from, &v.available) {
                (Some(until), _, _, _) => VersionStatus::Deprecated { until: until.clone() },
                (None, None, None, Some(_)) => VersionStatus::Proposed,
                _ => VersionStatus::Unknown,
            };
            AnnotatedVersion { version: v.clone(), date, status }
        })
        .collect();

    // Newest first; entries without a date sort after dated ones, by number.
    annotated.sort_by(|a, b| match (&a.date, &b.date) {
        (Some(da), Some(db)) => db.cmp(da),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.version.number.cmp(&a.version.number),
    });

    for entry in &mut annotated {
        match entry.status {
            VersionStatus::Current => break,
            VersionStatus::Proposed | VersionStatus::Deprecated { .. } => {}
            VersionStatus::Unknown => {
                entry.status = VersionStatus::Current;
                break;
            }
        }
    }

    annotated
}

#[cfg(test)]
#[path = "versions_test.rs"]
mod tests;
