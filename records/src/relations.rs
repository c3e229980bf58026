//! Cross-reference descriptors.
//!
//! Relations between records are stored as (subject, predicate, object)
//! triples over MSC IDs. Which relationships a record participates in, and
//! under which name they surface in displays, edit forms, and the JSON API,
//! is driven by this static descriptor table rather than scattered through
//! the templates. A "forward" field reads triples whose subject is the
//! record at hand; an "inverse" field reads triples pointing at it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mscid::{MscId, Series};

/// One named relationship as it appears on a record of a given series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelationField {
    /// Key used in relations maps, form controls, and the API.
    pub name: &'static str,
    /// Stored predicate.
    pub predicate: &'static str,
    /// True when this record is the object of the stored triple.
    pub inverse: bool,
    /// Series of the records on the other end.
    pub target: Series,
    /// Control label on edit forms.
    pub label: &'static str,
    /// Section heading on display pages.
    pub heading: &'static str,
}

const fn field(
    name: &'static str,
    predicate: &'static str,
    inverse: bool,
    target: Series,
    label: &'static str,
    heading: &'static str,
) -> RelationField {
    RelationField { name, predicate, inverse, target, label, heading }
}

static SCHEME_FIELDS: [RelationField; 9] = [
    field(
        "parent_schemes",
        "parent scheme",
        false,
        Series::Scheme,
        "Parent metadata schemes",
        "Parent schemes",
    ),
    field(
        "child_schemes",
        "parent scheme",
        true,
        Series::Scheme,
        "Profiles of this scheme",
        "Profiles of this scheme",
    ),
    field(
        "input_to_mappings",
        "input scheme",
        true,
        Series::Crosswalk,
        "Mappings that take this scheme as input",
        "Mappings from this scheme",
    ),
    field(
        "output_from_mappings",
        "output scheme",
        true,
        Series::Crosswalk,
        "Mappings that give this scheme as output",
        "Mappings to this scheme",
    ),
    field(
        "maintainers",
        "maintainer",
        false,
        Series::Organization,
        "Organizations that maintain this scheme",
        "Maintained by",
    ),
    field("funders", "funder", false, Series::Organization, "Organizations that funded this scheme", "Funded by"),
    field("users", "user", false, Series::Organization, "Organizations that use this scheme", "Used by"),
    field("tools", "supported scheme", true, Series::Tool, "Tools that support this scheme", "Tools"),
    field(
        "endorsements",
        "endorsed scheme",
        true,
        Series::Endorsement,
        "Endorsements of this scheme",
        "Endorsements",
    ),
];

static ORGANIZATION_FIELDS: [RelationField; 6] = [
    field(
        "maintained_schemes",
        "maintainer",
        true,
        Series::Scheme,
        "Metadata schemes this organization maintains",
        "Maintains these schemes",
    ),
    field(
        "funded_schemes",
        "funder",
        true,
        Series::Scheme,
        "Metadata schemes this organization funded",
        "Funded these schemes",
    ),
    field(
        "used_schemes",
        "user",
        true,
        Series::Scheme,
        "Metadata schemes this organization uses",
        "Uses these schemes",
    ),
    field(
        "maintained_tools",
        "maintainer",
        true,
        Series::Tool,
        "Tools this organization maintains",
        "Maintains these tools",
    ),
    field("funded_tools", "funder", true, Series::Tool, "Tools this organization funded", "Funded these tools"),
    field(
        "endorsements",
        "originator",
        true,
        Series::Endorsement,
        "Endorsements made by this organization",
        "Endorsements given",
    ),
];

static TOOL_FIELDS: [RelationField; 3] = [
    field(
        "supported_schemes",
        "supported scheme",
        false,
        Series::Scheme,
        "Metadata schemes this tool supports",
        "Supported schemes",
    ),
    field(
        "maintainers",
        "maintainer",
        false,
        Series::Organization,
        "Organizations that maintain this tool",
        "Maintained by",
    ),
    field("funders", "funder", false, Series::Organization, "Organizations that funded this tool", "Funded by"),
];

static CROSSWALK_FIELDS: [RelationField; 4] = [
    field("input_schemes", "input scheme", false, Series::Scheme, "Input metadata schemes", "Input schemes"),
    field("output_schemes", "output scheme", false, Series::Scheme, "Output metadata schemes", "Output schemes"),
    field(
        "maintainers",
        "maintainer",
        false,
        Series::Organization,
        "Organizations that maintain this mapping",
        "Maintained by",
    ),
    field(
        "funders",
        "funder",
        false,
        Series::Organization,
        "Organizations that funded this mapping",
        "Funded by",
    ),
];

static ENDORSEMENT_FIELDS: [RelationField; 2] = [
    field("endorsed_schemes", "endorsed scheme", false, Series::Scheme, "Endorsed metadata schemes", "Endorses"),
    field(
        "originators",
        "originator",
        false,
        Series::Organization,
        "Endorsing organizations",
        "Endorsed by",
    ),
];

/// The relationship fields shown on records of the given series, in
/// display order.
#[must_use]
pub fn relation_fields(series: Series) -> &'static [RelationField] {
    match series {
        Series::Scheme => &SCHEME_FIELDS,
        Series::Organization => &ORGANIZATION_FIELDS,
        Series::Tool => &TOOL_FIELDS,
        Series::Crosswalk => &CROSSWALK_FIELDS,
        Series::Endorsement => &ENDORSEMENT_FIELDS,
    }
}

/// Look up one descriptor by series and field name.
#[must_use]
pub fn relation_field(series: Series, name: &str) -> Option<&'static RelationField> {
    relation_fields(series).iter().find(|f| f.name == name)
}

/// Field names that relate a scheme to other schemes (directly or through a
/// mapping); grouped under one heading on scheme display pages.
pub const SCHEME_TO_SCHEME_FIELDS: [&str; 4] =
    ["parent_schemes", "child_schemes", "input_to_mappings", "output_from_mappings"];

/// A related record as needed by displays and pickers: its id and a name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RelatedRecord {
    pub id: MscId,
    pub name: String,
}

/// Relations of one record, keyed by descriptor name. Only non-empty lists
/// are present, so templates can toggle whole sections on key presence.
pub type RelationMap = BTreeMap<String, Vec<RelatedRecord>>;

/// True when a scheme's relations include at least one scheme-to-scheme
/// entry, i.e. the grouped "Related schemes" section should render.
#[must_use]
pub fn has_related_schemes(relations: &RelationMap) -> bool {
    SCHEME_TO_SCHEME_FIELDS
        .iter()
        .any(|name| relations.get(*name).is_some_and(|list| !list.is_empty()))
}

#[cfg(test)]
#[path = "relations_test.rs"]
mod tests;
