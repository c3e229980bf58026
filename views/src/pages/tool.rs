//! Tool display page.

use leptos::prelude::*;

use records::model::Record;
use records::relations::RelationMap;
use records::versions::AnnotatedVersion;

use crate::components::display::*;
use crate::pages::{edit_affordance, relation_sections};

#[component]
pub fn ToolPage(
    record: Record,
    versions: Vec<AnnotatedVersion>,
    relations: RelationMap,
    can_edit: bool,
) -> impl IntoView {
    let id = record.mscid();
    let name = record.name();
    let fields = record.fields;

    view! {
        <article class="record record--tool">
            <header class="record__header">
                <h1 class="record__title">{name}</h1>
                <p class="record__id">{id.to_string()}</p>
            </header>
            {fields
                .description
                .map(|description| view! { <div class="record__description" inner_html=description></div> })}
            {(!fields.locations.is_empty())
                .then(|| {
                    let locations = fields.locations.clone();
                    view! {
                        <section class="record-section record-section--locations">
                            <h2>"Relevant links"</h2>
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
            {(!versions.is_empty())
                .then(|| {
                    view! {
                        <section class="record-section record-section--versions">
                            <h2>"Version history"</h2>
                            <VersionHistory versions=versions/>
                        </section>
                    }
                })}
            {relation_sections(id.series, &relations, &[])}
            {edit_affordance(id, can_edit)}
        </article>
    }
}

#[cfg(test)]
#[path = "tool_test.rs"]
mod tests;
