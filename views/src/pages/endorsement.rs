//! Endorsement display page.
//!
//! Endorsements are citations rather than described resources: a citation
//! line, an issue date and validity window, the endorsed schemes, and the
//! endorsing organizations.

use leptos::prelude::*;

use records::model::Record;
use records::relations::RelationMap;

use crate::components::display::*;
use crate::pages::{edit_affordance, relation_sections};

#[component]
pub fn EndorsementPage(record: Record, relations: RelationMap, can_edit: bool) -> impl IntoView {
    let id = record.mscid();
    let name = record.name();
    let fields = record.fields;

    let validity = match (&fields.valid_from, &fields.valid_to) {
        (Some(from), Some(to)) => Some(format!("Valid from {from} until {to}.")),
        (Some(from), None) => Some(format!("Valid from {from}.")),
        _ => None,
    };

    view! {
        <article class="record record--endorsement">
            <header class="record__header">
                <h1 class="record__title">{name}</h1>
                <p class="record__id">{id.to_string()}</p>
            </header>
            {fields
                .citation
                .map(|citation| view! { <blockquote class="record__citation">{citation}</blockquote> })}
            {fields
                .issued
                .map(|issued| view! { <p class="record__issued">{format!("Issued {issued}.")}</p> })}
            {validity.map(|text| view! { <p class="record__validity">{text}</p> })}
            {(!fields.locations.is_empty())
                .then(|| {
                    let locations = fields.locations.clone();
                    view! {
                        <section class="record-section record-section--locations">
                            <h2>"Source documents"</h2>
                            <LocationList locations=locations/>
                        </section>
                    }
                })}
            {(!fields.identifiers.is_empty())
                .then(|| {
                    let identifiers = fields.identifiers.clone();
                    view! {
                        <section class="record-section record-section--identifiers">
                            <h2>"Identifiers"</h2>
                            <IdentifierList identifiers=identifiers/>
                        </section>
                    }
                })}
            {relation_sections(id.series, &relations, &[])}
            {edit_affordance(id, can_edit)}
        </article>
    }
}

#[cfg(test)]
#[path = "endorsement_test.rs"]
mod tests;
