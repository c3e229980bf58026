//! Page templates.
//!
//! One display page per record series, one edit page per series plus the
//! data-type vocabulary, and the home listing. Pages render the content
//! area only; the server wraps them in [`crate::layout::Shell`].

pub mod edit_datatype;
pub mod edit_endorsement;
pub mod edit_mapping;
pub mod edit_organization;
pub mod edit_scheme;
pub mod edit_tool;
pub mod endorsement;
pub mod home;
pub mod mapping;
pub mod organization;
pub mod scheme;
pub mod tool;

use leptos::prelude::*;

use records::mscid::{MscId, Series};
use records::relations::{RelationMap, relation_fields};

use crate::components::display::RelationSection;
use crate::urls;

/// Render the non-empty relation sections of a record in descriptor order,
/// skipping the named fields (used by scheme pages, which group the
/// scheme-to-scheme fields separately).
pub(crate) fn relation_sections(
    series: Series,
    relations: &RelationMap,
    skip: &'static [&'static str],
) -> impl IntoView + use<> {
    relation_fields(series)
        .iter()
        .filter(|field| !skip.contains(&field.name))
        .filter_map(|field| {
            relations
                .get(field.name)
                .filter(|entries| !entries.is_empty())
                .map(|entries| view! { <RelationSection heading=field.heading entries=entries.clone()/> })
        })
        .collect_view()
}

/// The scheme-to-scheme sections only, for the grouped heading on scheme
/// pages.
pub(crate) fn scheme_group_sections(relations: &RelationMap) -> impl IntoView + use<> {
    relation_fields(Series::Scheme)
        .iter()
        .filter(|field| records::relations::SCHEME_TO_SCHEME_FIELDS.contains(&field.name))
        .filter_map(|field| {
            relations
                .get(field.name)
                .filter(|entries| !entries.is_empty())
                .map(|entries| view! { <RelationSection heading=field.heading entries=entries.clone()/> })
        })
        .collect_view()
}

/// The edit affordance shown under a record to signed-in users.
pub(crate) fn edit_affordance(id: MscId, can_edit: bool) -> impl IntoView {
    can_edit.then(|| {
        view! {
            <p class="record__actions">
                <a class="btn" href=urls::edit_url(id.series, id.number)>
                    "Edit this record"
                </a>
            </p>
        }
    })
}
