//! Metadata scheme edit form.

use leptos::prelude::*;

use records::forms::{RecordForm, location_kinds};
use records::mscid::Series;

use crate::components::forms::*;
use crate::urls;

#[component]
pub fn EditSchemePage(form: RecordForm, number: i32) -> impl IntoView {
    let heading = if number == 0 { "Add new metadata scheme" } else { "Edit metadata scheme" };
    view! {
        <form class="edit-form edit-form--scheme" method="post" action=urls::edit_url(Series::Scheme, number)>
            <h1 class="edit-form__heading">{heading}</h1>
            <TextInput label="Name of metadata scheme" name="title".to_owned() field=form.title/>
            <TextArea label="Description" name="description".to_owned() field=form.description/>
            <KeywordInputs fields=form.keywords choices=form.keyword_choices/>
            <MultiSelectInput
                label="Types of data described by this scheme"
                name="dataTypes".to_owned()
                select=form.data_types
            />
            {location_fieldset("Relevant links", form.locations, location_kinds(Series::Scheme))}
            {sample_fieldset(form.samples)}
            {identifier_fieldset("Identifiers for this scheme", form.identifiers)}
            {namespace_fieldset(form.namespaces)}
            {relation_pickers(form.relations)}
            <input type="hidden" name="old_relations" value=form.old_relations/>
            <button class="btn btn--primary" type="submit">"Save changes"</button>
        </form>
    }
}

#[cfg(test)]
#[path = "edit_scheme_test.rs"]
mod tests;
