use serde_json::json;

use super::*;
use crate::model::{Location, Record};

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

fn scheme_choices() -> FormChoices {
    let mut choices = FormChoices {
        keywords: vec!["Science".to_owned(), "Earth sciences < Science".to_owned()],
        data_types: vec![Choice::new("msc:datatype1", "Dataset")],
        relations: std::collections::BTreeMap::new(),
    };
    choices.relations.insert(
        "maintainers",
        vec![Choice::new("msc:g1", "DCMI"), Choice::new("msc:g2", "DDI Alliance")],
    );
    choices
        .relations
        .insert("parent_schemes", vec![Choice::new("msc:m1", "Dublin Core"), Choice::new("msc:m2", "DDI")]);
    choices
}

#[test]
fn blank_form_presents_one_entry_per_list_section() {
    let form = RecordForm::blank(Series::Scheme, &scheme_choices());
    assert_eq!(form.keywords.len(), 1);
    assert_eq!(form.locations.len(), 1);
    assert_eq!(form.samples.len(), 1);
    assert_eq!(form.identifiers.len(), 1);
    assert_eq!(form.namespaces.len(), 1);
    assert!(form.creators.is_empty(), "schemes have no creators section");
}

#[test]
fn blank_form_activates_series_sections() {
    let form = RecordForm::blank(Series::Crosswalk, &FormChoices::default());
    assert_eq!(form.creators.len(), 1);
    assert!(form.samples.is_empty());
    assert!(form.namespaces.is_empty());
}

#[test]
fn from_record_appends_trailing_blank_entry() {
    let mut record = Record::blank(Series::Scheme);
    record.number = 13;
    record.fields.title = Some("DataCite".to_owned());
    record.fields.locations = vec![Location { url: "https://datacite.org".to_owned(), kind: "website".to_owned() }];

    let form = RecordForm::from_record(&record, Vec::new(), &std::collections::BTreeMap::new(), &scheme_choices());
    assert_eq!(form.title.value, "DataCite");
    assert_eq!(form.locations.len(), 2);
    assert_eq!(form.locations[0].url.value, "https://datacite.org");
    assert!(form.locations[1].url.is_empty());
}

#[test]
fn from_record_excludes_self_from_relation_choices() {
    let mut record = Record::blank(Series::Scheme);
    record.number = 1;
    let form = RecordForm::from_record(&record, Vec::new(), &std::collections::BTreeMap::new(), &scheme_choices());
    let parents = form.relations.iter().find(|e| e.field.name == "parent_schemes").unwrap();
    assert!(parents.select.choices.iter().all(|c| c.value != "msc:m1"));
    assert!(parents.select.choices.iter().any(|c| c.value == "msc:m2"));
}

#[test]
fn from_record_snapshots_selections() {
    let mut record = Record::blank(Series::Scheme);
    record.number = 13;
    let mut selections = std::collections::BTreeMap::new();
    selections.insert("maintainers".to_owned(), vec!["msc:g1".to_owned()]);
    let form = RecordForm::from_record(&record, Vec::new(), &selections, &scheme_choices());

    let maintainers = form.relations.iter().find(|e| e.field.name == "maintainers").unwrap();
    assert_eq!(maintainers.select.selected, vec!["msc:g1"]);
    assert_eq!(form.old_relation_selections().unwrap(), selections);
}

#[test]
fn from_pairs_reads_indexed_subforms() {
    let body = pairs(&[
        ("title", "DataCite"),
        ("locations-0-url", "https://datacite.org"),
        ("locations-0-type", "website"),
        ("locations-1-url", ""),
        ("locations-1-type", ""),
        ("keywords-0", "Science"),
        ("dataTypes", "msc:datatype1"),
        ("maintainers", "msc:g1"),
        ("maintainers", "msc:g2"),
        ("old_relations", "{}"),
    ]);
    let form = RecordForm::from_pairs(Series::Scheme, &body, &scheme_choices(), None);
    assert_eq!(form.title.value, "DataCite");
    assert_eq!(form.locations[0].kind.value, "website");
    assert_eq!(form.keywords[0].value, "Science");
    assert_eq!(form.data_types.selected, vec!["msc:datatype1"]);
    let maintainers = form.relations.iter().find(|e| e.field.name == "maintainers").unwrap();
    assert_eq!(maintainers.select.selected, vec!["msc:g1", "msc:g2"]);
}

#[test]
fn from_pairs_orders_indexes_numerically() {
    let body = pairs(&[("keywords-10", "J"), ("keywords-2", "B"), ("keywords-0", "A")]);
    let form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    let values: Vec<&str> = form.keywords.iter().map(|f| f.value.as_str()).filter(|v| !v.is_empty()).collect();
    assert_eq!(values, vec!["A", "B", "J"]);
}

#[test]
fn validate_flags_unknown_keyword() {
    let body = pairs(&[("keywords-0", "Alchemy")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &scheme_choices(), None);
    form.validate();
    assert_eq!(form.keywords[0].errors, vec![validate::MSG_NOT_IN_THESAURUS]);
    assert_eq!(form.error_count(), 1);
}

#[test]
fn validate_requires_location_pairing() {
    let body = pairs(&[("locations-0-url", ""), ("locations-0-type", "website")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    form.validate();
    assert_eq!(form.locations[0].url.errors, vec![validate::MSG_REQUIRED]);

    let body = pairs(&[("locations-0-url", "https://example.com")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    form.validate();
    assert_eq!(form.locations[0].kind.errors, vec![validate::MSG_REQUIRED]);
}

#[test]
fn validate_accepts_complete_location() {
    let body = pairs(&[("locations-0-url", "https://example.com"), ("locations-0-type", "website")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    form.validate();
    assert_eq!(form.error_count(), 0);
}

#[test]
fn validate_checks_location_url_shape() {
    let body = pairs(&[("locations-0-url", "example.com"), ("locations-0-type", "website")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    form.validate();
    assert_eq!(form.locations[0].url.errors, vec![validate::MSG_NO_PROTOCOL]);
}

#[test]
fn validate_checks_sample_pairing() {
    let body = pairs(&[("samples-0-title", "Example record")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    form.validate();
    assert_eq!(form.samples[0].url.errors, vec![validate::MSG_REQUIRED]);
}

#[test]
fn validate_checks_endorsement_dates() {
    let body = pairs(&[("issued", "not-a-date"), ("valid_from", "2020-01-01")]);
    let mut form = RecordForm::from_pairs(Series::Endorsement, &body, &FormChoices::default(), None);
    form.validate();
    assert_eq!(form.issued.errors, vec![validate::MSG_BAD_DATE]);
    assert!(form.valid_from.errors.is_empty());
    assert_eq!(form.error_count(), 1);
}

#[test]
fn validate_rejects_selection_outside_choices() {
    let body = pairs(&[("maintainers", "msc:g99")]);
    let mut form = RecordForm::from_pairs(Series::Scheme, &body, &scheme_choices(), None);
    form.validate();
    let maintainers = form.relations.iter().find(|e| e.field.name == "maintainers").unwrap();
    assert_eq!(maintainers.select.errors, vec![validate::MSG_BAD_CHOICE]);
}

#[test]
fn endorsement_locations_get_fixed_document_type() {
    let body = pairs(&[("citation", "RDA (2020)"), ("locations-0-url", "https://example.com/endorsement")]);
    let form = RecordForm::from_pairs(Series::Endorsement, &body, &FormChoices::default(), None);
    let doc = form.to_document();
    assert_eq!(
        doc.get("locations").unwrap(),
        &json!([{"url": "https://example.com/endorsement", "type": "document"}])
    );
}

#[test]
fn to_document_skips_blank_list_entries() {
    let body = pairs(&[
        ("title", "DataCite"),
        ("locations-0-url", "https://datacite.org"),
        ("locations-0-type", "website"),
    ]);
    let form = RecordForm::from_pairs(Series::Scheme, &body, &FormChoices::default(), None);
    let doc = form.to_document();
    assert_eq!(doc.get("locations").unwrap().as_array().unwrap().len(), 1);
    // Blank scalar fields are left for cleanup() to strip.
    assert_eq!(doc.get("description").unwrap(), &json!(""));
}

#[test]
fn relation_selections_round_trip() {
    let body = pairs(&[("maintainers", "msc:g1"), ("maintainers", "")]);
    let form = RecordForm::from_pairs(Series::Scheme, &body, &scheme_choices(), None);
    let selections = form.relation_selections();
    assert_eq!(selections.get("maintainers").unwrap(), &vec!["msc:g1".to_owned()]);
    assert!(selections.get("funders").unwrap().is_empty());
}

#[test]
fn datatype_form_requires_label() {
    let mut form = DatatypeForm::from_pairs(&pairs(&[("id", ""), ("label", "")]));
    form.validate();
    assert_eq!(form.label.errors, vec![validate::MSG_REQUIRED]);
    assert_eq!(form.error_count(), 1);
}

#[test]
fn datatype_form_rejects_duplicate_label() {
    let mut form = DatatypeForm::from_pairs(&pairs(&[("label", "Dataset")]));
    form.used_labels = vec!["Dataset".to_owned()];
    form.validate();
    assert!(form.label.errors[0].contains("already in use"));
}

#[test]
fn location_kinds_cover_series() {
    assert!(location_kinds(Series::Scheme).iter().any(|(v, _)| *v == "XSD"));
    assert!(location_kinds(Series::Endorsement).is_empty());
}
