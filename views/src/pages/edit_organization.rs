//! Organization edit form.

use leptos::prelude::*;

use records::forms::{RecordForm, location_kinds};
use records::mscid::Series;

use crate::components::forms::*;
use crate::urls;

#[component]
pub fn EditOrganizationPage(form: RecordForm, number: i32) -> impl IntoView {
    let heading = if number == 0 { "Add new organization" } else { "Edit organization" };
    view! {
        <form
            class="edit-form edit-form--organization"
            method="post"
            action=urls::edit_url(Series::Organization, number)
        >
            <h1 class="edit-form__heading">{heading}</h1>
            <TextInput label="Name of organization" name="name".to_owned() field=form.name/>
            <TextArea label="Description" name="description".to_owned() field=form.description/>
            {location_fieldset("Contact links", form.locations, location_kinds(Series::Organization))}
            {identifier_fieldset("Identifiers for this organization", form.identifiers)}
            {relation_pickers(form.relations)}
            <input type="hidden" name="old_relations" value=form.old_relations/>
            <button class="btn btn--primary" type="submit">"Save changes"</button>
        </form>
    }
}
