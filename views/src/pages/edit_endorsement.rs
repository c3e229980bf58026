//! Endorsement edit form.
//!
//! Endorsement locations are plain URLs; the `document` type is applied
//! when the form is saved, so no type selector renders here.

use leptos::prelude::*;

use records::forms::{RecordForm, location_kinds};
use records::mscid::Series;

use crate::components::forms::*;
use crate::urls;

#[component]
pub fn EditEndorsementPage(form: RecordForm, number: i32) -> impl IntoView {
    let heading = if number == 0 { "Add new endorsement" } else { "Edit endorsement" };
    view! {
        <form
            class="edit-form edit-form--endorsement"
            method="post"
            action=urls::edit_url(Series::Endorsement, number)
        >
            <h1 class="edit-form__heading">{heading}</h1>
            <TextInput label="Title of endorsement" name="title".to_owned() field=form.title/>
            <TextArea label="Citation" name="citation".to_owned() field=form.citation/>
            <DateInput label="Date issued" name="issued".to_owned() field=form.issued/>
            <DateInput label="Date considered current" name="valid_from".to_owned() field=form.valid_from/>
            <DateInput label="until" name="valid_to".to_owned() field=form.valid_to/>
            {location_fieldset("Endorsement documents", form.locations, location_kinds(Series::Endorsement))}
            {identifier_fieldset("Identifiers for this endorsement", form.identifiers)}
            {relation_pickers(form.relations)}
            <input type="hidden" name="old_relations" value=form.old_relations/>
            <button class="btn btn--primary" type="submit">"Save changes"</button>
        </form>
    }
}
