//! Metadata scheme display page.
//!
//! The busiest display template: schemes carry every optional section, and
//! their scheme-to-scheme relations are grouped under one heading.

use leptos::prelude::*;

use records::model::Record;
use records::relations::{RelationMap, SCHEME_TO_SCHEME_FIELDS, has_related_schemes};
use records::versions::AnnotatedVersion;

use crate::components::display::*;
use crate::pages::{edit_affordance, relation_sections, scheme_group_sections};

/// Display a metadata scheme. `record.fields.keywords` must already be
/// translated from term URIs to labels, and `data_type_labels` resolved
/// from the data-type vocabulary.
#[component]
pub fn SchemePage(
    record: Record,
    versions: Vec<AnnotatedVersion>,
    relations: RelationMap,
    data_type_labels: Vec<String>,
    can_edit: bool,
) -> impl IntoView {
    let id = record.mscid();
    let name = record.name();
    let fields = record.fields;
    let grouped = has_related_schemes(&relations);

    view! {
        <article class="record record--scheme">
            <header class="record__header">
                <h1 class="record__title">{name}</h1>
                <p class="record__id">{id.to_string()}</p>
            </header>
            {fields
                .description
                .map(|description| view! { <div class="record__description" inner_html=description></div> })}
            {(!fields.keywords.is_empty())
                .then(|| {
                    let keywords = fields.keywords.clone();
                    view! {
                        <section class="record-section record-section--keywords">
                            <h2>"Subject areas"</h2>
                            <KeywordList keywords=keywords/>
                        </section>
                    }
                })}
            {(!data_type_labels.is_empty())
                .then(|| {
                    view! {
                        <section class="record-section record-section--datatypes">
                            <h2>"Types of data described"</h2>
                            <KeywordList keywords=data_type_labels/>
                        </section>
                    }
                })}
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
            {(!fields.namespaces.is_empty())
                .then(|| {
                    let namespaces = fields.namespaces.clone();
                    view! {
                        <section class="record-section record-section--namespaces">
                            <h2>"Namespaces"</h2>
                            <NamespaceList namespaces=namespaces/>
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
            {(!fields.samples.is_empty())
                .then(|| {
                    let samples = fields.samples.clone();
                    view! {
                        <section class="record-section record-section--samples">
                            <h2>"Sample records"</h2>
                            <SampleList samples=samples/>
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
            {grouped
                .then(|| {
                    view! {
                        <section class="record-section record-section--related-schemes">
                            <h2>"Related metadata schemes"</h2>
                            {scheme_group_sections(&relations)}
                        </section>
                    }
                })}
            {relation_sections(id.series, &relations, &SCHEME_TO_SCHEME_FIELDS)}
            {edit_affordance(id, can_edit)}
        </article>
    }
}

#[cfg(test)]
#[path = "scheme_test.rs"]
mod tests;
