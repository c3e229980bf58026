use std::collections::BTreeMap;

use leptos::prelude::*;

use records::forms::{Choice, FormChoices, RecordForm};
use records::model::Record;
use records::mscid::Series;

use super::*;

fn choices() -> FormChoices {
    let mut choices = FormChoices {
        keywords: vec!["Science".to_owned()],
        data_types: vec![Choice::new("msc:datatype1", "Dataset")],
        relations: BTreeMap::new(),
    };
    choices.relations.insert("maintainers", vec![Choice::new("msc:g1", "DCMI")]);
    choices
}

#[test]
fn new_record_form_posts_to_number_zero() {
    let form = RecordForm::blank(Series::Scheme, &choices());
    let html = view! { <EditSchemePage form=form number=0/> }.to_html();
    assert!(html.contains("Add new metadata scheme"));
    assert!(html.contains("action=\"/edit/m0\""));
    assert!(html.contains("method=\"post\"") || html.contains("method=\"POST\""));
}

#[test]
fn existing_record_form_carries_values() {
    let mut record = Record::blank(Series::Scheme);
    record.number = 13;
    record.fields.title = Some("DataCite".to_owned());
    let form = RecordForm::from_record(&record, Vec::new(), &BTreeMap::new(), &choices());
    let html = view! { <EditSchemePage form=form number=13/> }.to_html();
    assert!(html.contains("Edit metadata scheme"));
    assert!(html.contains("action=\"/edit/m13\""));
    assert!(html.contains("value=\"DataCite\""));
}

#[test]
fn all_scheme_sections_render_controls() {
    let form = RecordForm::blank(Series::Scheme, &choices());
    let html = view! { <EditSchemePage form=form number=0/> }.to_html();
    assert!(html.contains("name=\"title\""));
    assert!(html.contains("name=\"description\""));
    assert!(html.contains("name=\"keywords-0\""));
    assert!(html.contains("name=\"dataTypes\""));
    assert!(html.contains("name=\"locations-0-url\""));
    assert!(html.contains("name=\"locations-0-type\""));
    assert!(html.contains("name=\"samples-0-title\""));
    assert!(html.contains("name=\"identifiers-0-id\""));
    assert!(html.contains("name=\"namespaces-0-prefix\""));
    assert!(html.contains("name=\"maintainers\""));
    assert!(html.contains("name=\"old_relations\""));
}

#[test]
fn scheme_location_types_offered() {
    let form = RecordForm::blank(Series::Scheme, &choices());
    let html = view! { <EditSchemePage form=form number=0/> }.to_html();
    assert!(html.contains("RDA MIG Schema"));
    assert!(html.contains("XML Schema"));
}

#[test]
fn validation_errors_render_in_place() {
    let body = vec![
        ("locations-0-url".to_owned(), "not-a-url".to_owned()),
        ("locations-0-type".to_owned(), "website".to_owned()),
    ];
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &choices(), None);
    form.validate();
    let html = view! { <EditSchemePage form=form number=0/> }.to_html();
    assert!(html.contains("form-group form-group--error"));
    assert!(html.contains("Please provide the protocol"));
}

#[test]
fn old_relations_snapshot_round_trips() {
    let mut record = Record::blank(Series::Scheme);
    record.number = 13;
    let mut selections = BTreeMap::new();
    selections.insert("maintainers".to_owned(), vec!["msc:g1".to_owned()]);
    let form = RecordForm::from_record(&record, Vec::new(), &selections, &choices());
    let html = view! { <EditSchemePage form=form number=13/> }.to_html();
    assert!(html.contains("old_relations"));
    assert!(html.contains("msc:g1"));
}
