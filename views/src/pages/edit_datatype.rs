//! Data-type vocabulary term edit form.

use leptos::prelude::*;

use records::forms::DatatypeForm;

use crate::components::forms::*;
use crate::urls;

#[component]
pub fn EditDatatypePage(form: DatatypeForm, number: i32) -> impl IntoView {
    let heading = if number == 0 { "Add new data type" } else { "Edit data type" };
    view! {
        <form class="edit-form edit-form--datatype" method="post" action=urls::edit_datatype_url(number)>
            <h1 class="edit-form__heading">{heading}</h1>
            <TextInput label="URL identifying this type of data" name="id".to_owned() field=form.id/>
            <TextInput label="Descriptor for this type of data" name="label".to_owned() field=form.label/>
            <button class="btn btn--primary" type="submit">"Save changes"</button>
        </form>
    }
}
