//! Mapping (crosswalk) edit form.

use leptos::prelude::*;

use records::forms::{RecordForm, location_kinds};
use records::mscid::Series;

use crate::components::forms::*;
use crate::urls;

#[component]
pub fn EditMappingPage(form: RecordForm, number: i32) -> impl IntoView {
    let heading = if number == 0 { "Add new mapping" } else { "Edit mapping" };
    view! {
        <form class="edit-form edit-form--mapping" method="post" action=urls::edit_url(Series::Crosswalk, number)>
            <h1 class="edit-form__heading">{heading}</h1>
            <TextInput label="Name of mapping" name="name".to_owned() field=form.name/>
            <TextArea label="Description" name="description".to_owned() field=form.description/>
            {creator_fieldset(form.creators)}
            {location_fieldset("Relevant links", form.locations, location_kinds(Series::Crosswalk))}
            {identifier_fieldset("Identifiers for this mapping", form.identifiers)}
            {relation_pickers(form.relations)}
            <input type="hidden" name="old_relations" value=form.old_relations/>
            <button class="btn btn--primary" type="submit">"Save changes"</button>
        </form>
    }
}
