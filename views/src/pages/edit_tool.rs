//! Tool edit form.

use leptos::prelude::*;

use records::forms::{RecordForm, location_kinds};
use records::mscid::Series;

use crate::components::forms::*;
use crate::urls;

#[component]
pub fn EditToolPage(form: RecordForm, number: i32) -> impl IntoView {
    let heading = if number == 0 { "Add new tool" } else { "Edit tool" };
    view! {
        <form class="edit-form edit-form--tool" method="post" action=urls::edit_url(Series::Tool, number)>
            <h1 class="edit-form__heading">{heading}</h1>
            <TextInput label="Name of tool" name="title".to_owned() field=form.title/>
            <TextArea label="Description" name="description".to_owned() field=form.description/>
            {location_fieldset("Relevant links", form.locations, location_kinds(Series::Tool))}
            {identifier_fieldset("Identifiers for this tool", form.identifiers)}
            {relation_pickers(form.relations)}
            <input type="hidden" name="old_relations" value=form.old_relations/>
            <button class="btn btn--primary" type="submit">"Save changes"</button>
        </form>
    }
}
