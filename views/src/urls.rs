//! Canonical paths.
//!
//! The one place that knows how catalog URLs are shaped; templates and
//! handlers both call through here.

use records::mscid::{MscId, Series};

/// Display page for a record: `/msc/m13`.
#[must_use]
pub fn record_url(id: MscId) -> String {
    format!("/msc/{}{}", id.series, id.number)
}

/// Edit page for a record; number 0 is a new record.
#[must_use]
pub fn edit_url(series: Series, number: i32) -> String {
    format!("/edit/{series}{number}")
}

/// Edit page for a data-type vocabulary term.
#[must_use]
pub fn edit_datatype_url(number: i32) -> String {
    format!("/edit/datatype{number}")
}

#[must_use]
pub fn login_url() -> &'static str {
    "/auth/github"
}

#[must_use]
pub fn logout_url() -> &'static str {
    "/auth/logout"
}
