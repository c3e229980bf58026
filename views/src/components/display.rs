//! Shared display fragments.
//!
//! The repeated pieces of the record display pages: typed link lists,
//! identifier tables, version history, and relationship sections. Each
//! component renders nothing visible when handed an empty list, but callers
//! normally gate on presence so the surrounding heading is omitted too.

use leptos::prelude::*;

use records::model::{Creator, Identifier, Location, Namespace, Sample};
use records::relations::RelatedRecord;
use records::versions::{AnnotatedVersion, VersionStatus};

use crate::urls;

/// Links to material about a record, labelled with their type.
#[component]
pub fn LocationList(locations: Vec<Location>) -> impl IntoView {
    view! {
        <ul class="location-list">
            {locations
                .into_iter()
                .map(|location| {
                    let label = if location.kind.is_empty() {
                        location.url.clone()
                    } else {
                        location.kind.clone()
                    };
                    view! {
                        <li class="location-list__item">
                            <a href=location.url.clone()>{label}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn NamespaceList(namespaces: Vec<Namespace>) -> impl IntoView {
    view! {
        <dl class="namespace-list">
            {namespaces
                .into_iter()
                .map(|ns| {
                    view! {
                        <dt class="namespace-list__prefix">{ns.prefix}</dt>
                        <dd class="namespace-list__uri">
                            <code>{ns.uri}</code>
                        </dd>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[component]
pub fn IdentifierList(identifiers: Vec<Identifier>) -> impl IntoView {
    view! {
        <ul class="identifier-list">
            {identifiers
                .into_iter()
                .map(|identifier| {
                    view! {
                        <li class="identifier-list__item">
                            {(!identifier.scheme.is_empty())
                                .then(|| {
                                    view! {
                                        <span class="identifier-list__scheme">
                                            {format!("{}: ", identifier.scheme)}
                                        </span>
                                    }
                                })}
                            <span class="identifier-list__id">{identifier.id}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn SampleList(samples: Vec<Sample>) -> impl IntoView {
    view! {
        <ul class="sample-list">
            {samples
                .into_iter()
                .map(|sample| {
                    let label = if sample.title.is_empty() { sample.url.clone() } else { sample.title.clone() };
                    view! {
                        <li class="sample-list__item">
                            <a href=sample.url.clone()>{label}</a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Subject keywords, already translated from term URIs to labels.
#[component]
pub fn KeywordList(keywords: Vec<String>) -> impl IntoView {
    view! {
        <ul class="keyword-list">
            {keywords
                .into_iter()
                .map(|keyword| view! { <li class="keyword-list__item">{keyword}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn CreatorList(creators: Vec<Creator>) -> impl IntoView {
    view! {
        <ul class="creator-list">
            {creators
                .into_iter()
                .map(|creator| view! { <li class="creator-list__item">{creator.display_name()}</li> })
                .collect_view()}
        </ul>
    }
}

/// The version history of a scheme or tool, newest first.
#[component]
pub fn VersionHistory(versions: Vec<AnnotatedVersion>) -> impl IntoView {
    view! {
        <ol class="version-history">
            {versions
                .into_iter()
                .map(|entry| {
                    let status = entry.status.clone();
                    let status_view = (status != VersionStatus::Unknown).then(|| {
                        view! { <span class="version__status">{format!(" ({})", status.display())}</span> }
                    });
                    let v = entry.version;
                    view! {
                        <li class="version">
                            <span class="version__number">{format!("Version {}", v.number)}</span>
                            {entry.date.map(|date| view! { <span class="version__date">{format!(", {date}")}</span> })}
                            {status_view}
                            {v.note.map(|note| view! { <p class="version__note">{note}</p> })}
                            {(!v.locations.is_empty())
                                .then(|| view! { <LocationList locations=v.locations/> })}
                            {(!v.identifiers.is_empty())
                                .then(|| view! { <IdentifierList identifiers=v.identifiers/> })}
                            {(!v.samples.is_empty()).then(|| view! { <SampleList samples=v.samples/> })}
                            {(!v.namespaces.is_empty())
                                .then(|| view! { <NamespaceList namespaces=v.namespaces/> })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

/// One titled list of related records, linking to their display pages.
#[component]
pub fn RelationSection(heading: &'static str, entries: Vec<RelatedRecord>) -> impl IntoView {
    view! {
        <section class="relation-section">
            <h3 class="relation-section__heading">{heading}</h3>
            <ul class="relation-section__list">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class="relation-section__item">
                                <a href=urls::record_url(entry.id)>{entry.name}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;
