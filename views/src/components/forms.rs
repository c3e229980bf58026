//! Shared form widgets.
//!
//! Everything the edit templates have in common: the form-state CSS class
//! computed from validation errors, the error list rendered under a control,
//! and the standard labelled inputs. Subform controls use indexed wire names
//! (`locations-0-url`) built with [`indexed_name`].

use leptos::prelude::*;

use records::forms::{Field, MultiSelect};

/// CSS class for a form group, with the error modifier when any of the
/// group's fields failed validation.
#[must_use]
pub fn control_class(has_errors: bool) -> &'static str {
    if has_errors { "form-group form-group--error" } else { "form-group" }
}

/// Wire name for a field of the `index`-th entry of a list section.
#[must_use]
pub fn indexed_name(prefix: &str, index: usize, sub: &str) -> String {
    if sub.is_empty() { format!("{prefix}-{index}") } else { format!("{prefix}-{index}-{sub}") }
}

/// Validation messages for one control.
#[component]
pub fn ErrorList(errors: Vec<String>) -> impl IntoView {
    (!errors.is_empty()).then(|| {
        view! {
            <ul class="form-errors">
                {errors
                    .into_iter()
                    .map(|message| view! { <li class="form-errors__item">{message}</li> })
                    .collect_view()}
            </ul>
        }
    })
}

/// A labelled single-line text input.
#[component]
pub fn TextInput(
    label: &'static str,
    name: String,
    field: Field,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let has_errors = field.has_errors();
    view! {
        <div class=control_class(has_errors)>
            <label>
                <span class="form-label">{label}</span>
                <input class="form-control" type=input_type name=name value=field.value/>
            </label>
            <ErrorList errors=field.errors/>
        </div>
    }
}

/// A labelled date input (native browser picker, W3C value format).
#[component]
pub fn DateInput(label: &'static str, name: String, field: Field) -> impl IntoView {
    view! { <TextInput label=label name=name field=field input_type="date"/> }
}

/// A labelled multi-line text control.
#[component]
pub fn TextArea(label: &'static str, name: String, field: Field) -> impl IntoView {
    let has_errors = field.has_errors();
    view! {
        <div class=control_class(has_errors)>
            <label>
                <span class="form-label">{label}</span>
                <textarea class="form-control form-control--textarea" name=name rows="8">
                    {field.value}
                </textarea>
            </label>
            <ErrorList errors=field.errors/>
        </div>
    }
}

/// A labelled multi-select backed by a choice list.
#[component]
pub fn MultiSelectInput(label: &'static str, name: String, select: MultiSelect) -> impl IntoView {
    let options = select
        .choices
        .iter()
        .map(|choice| {
            let selected = select.is_selected(&choice.value);
            view! {
                <option value=choice.value.clone() selected=selected>
                    {choice.label.clone()}
                </option>
            }
        })
        .collect_view();
    let has_errors = !select.errors.is_empty();
    view! {
        <div class=control_class(has_errors)>
            <label>
                <span class="form-label">{label}</span>
                <select class="form-control form-control--multiple" name=name multiple="multiple">
                    {options}
                </select>
            </label>
            <ErrorList errors=select.errors/>
        </div>
    }
}

/// Keyword inputs backed by a shared datalist of thesaurus labels.
#[component]
pub fn KeywordInputs(fields: Vec<Field>, choices: Vec<String>) -> impl IntoView {
    let has_errors = fields.iter().any(Field::has_errors);
    view! {
        <fieldset class=control_class(has_errors)>
            <legend class="form-label">"Subject areas"</legend>
            {fields
                .into_iter()
                .enumerate()
                .map(|(index, field)| {
                    view! {
                        <div class="form-list-entry">
                            <input
                                class="form-control"
                                type="text"
                                name=indexed_name("keywords", index, "")
                                value=field.value
                                list="subject-terms"
                            />
                            <ErrorList errors=field.errors/>
                        </div>
                    }
                })
                .collect_view()}
            <datalist id="subject-terms">
                {choices
                    .into_iter()
                    .map(|label| view! { <option value=label></option> })
                    .collect_view()}
            </datalist>
        </fieldset>
    }
}

// =============================================================================
// REPEATED SUBFORM BLOCKS
// =============================================================================

fn kind_select(
    name: String,
    field: Field,
    kinds: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let current = field.value.clone();
    let has_errors = field.has_errors();
    view! {
        <div class=control_class(has_errors)>
            <label>
                <span class="form-label">"Type"</span>
                <select class="form-control" name=name>
                    <option value="" selected=current.is_empty()></option>
                    {kinds
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=*value selected=(current == *value)>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <ErrorList errors=field.errors/>
        </div>
    }
}

/// Repeated URL + type rows. When `kinds` is empty (endorsements) only the
/// URL control renders; the type is fixed upstream.
pub fn location_fieldset(
    legend: &'static str,
    locations: Vec<records::forms::LocationForm>,
    kinds: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
        <fieldset class="form-section form-section--locations">
            <legend class="form-label">{legend}</legend>
            {locations
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="form-list-entry">
                            <TextInput
                                label="URL"
                                name=indexed_name("locations", index, "url")
                                field=entry.url
                            />
                            {(!kinds.is_empty())
                                .then(|| kind_select(indexed_name("locations", index, "type"), entry.kind, kinds))}
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

pub fn sample_fieldset(samples: Vec<records::forms::SampleForm>) -> impl IntoView {
    view! {
        <fieldset class="form-section form-section--samples">
            <legend class="form-label">"Sample records conforming to this scheme"</legend>
            {samples
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="form-list-entry">
                            <TextInput label="Title" name=indexed_name("samples", index, "title") field=entry.title/>
                            <TextInput label="URL" name=indexed_name("samples", index, "url") field=entry.url/>
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

pub fn identifier_fieldset(
    legend: &'static str,
    identifiers: Vec<records::forms::IdentifierForm>,
) -> impl IntoView {
    view! {
        <fieldset class="form-section form-section--identifiers">
            <legend class="form-label">{legend}</legend>
            {identifiers
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="form-list-entry">
                            <TextInput label="ID" name=indexed_name("identifiers", index, "id") field=entry.id/>
                            <TextInput
                                label="ID scheme"
                                name=indexed_name("identifiers", index, "scheme")
                                field=entry.scheme
                            />
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

pub fn namespace_fieldset(namespaces: Vec<records::forms::NamespaceForm>) -> impl IntoView {
    view! {
        <fieldset class="form-section form-section--namespaces">
            <legend class="form-label">"Namespaces used by this scheme"</legend>
            {namespaces
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="form-list-entry">
                            <TextInput
                                label="Prefix"
                                name=indexed_name("namespaces", index, "prefix")
                                field=entry.prefix
                            />
                            <TextInput label="URI" name=indexed_name("namespaces", index, "uri") field=entry.uri/>
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

pub fn creator_fieldset(creators: Vec<records::forms::CreatorForm>) -> impl IntoView {
    view! {
        <fieldset class="form-section form-section--creators">
            <legend class="form-label">"People who created this mapping"</legend>
            {creators
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="form-list-entry">
                            <TextInput
                                label="Full name"
                                name=indexed_name("creators", index, "fullName")
                                field=entry.full_name
                            />
                            <TextInput
                                label="Given name(s)"
                                name=indexed_name("creators", index, "givenName")
                                field=entry.given_name
                            />
                            <TextInput
                                label="Family name"
                                name=indexed_name("creators", index, "familyName")
                                field=entry.family_name
                            />
                        </div>
                    }
                })
                .collect_view()}
        </fieldset>
    }
}

/// One multi-select per relation descriptor, labelled from the descriptor.
pub fn relation_pickers(relations: Vec<records::forms::RelationEntry>) -> impl IntoView {
    relations
        .into_iter()
        .map(|entry| {
            view! {
                <MultiSelectInput
                    label=entry.field.label
                    name=entry.field.name.to_owned()
                    select=entry.select
                />
            }
        })
        .collect_view()
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
