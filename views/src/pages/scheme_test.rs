use std::collections::BTreeMap;

use leptos::prelude::*;

use records::model::{Location, Record, Sample, Version};
use records::mscid::{MscId, Series};
use records::relations::{RelatedRecord, RelationMap};
use records::versions::annotate_versions;

use super::*;

fn fixture() -> Record {
    let mut record = Record::blank(Series::Scheme);
    record.number = 13;
    record.fields.title = Some("DataCite Metadata Schema".to_owned());
    record.fields.description = Some("<p>Metadata for <em>datasets</em>.</p>".to_owned());
    record.fields.keywords = vec!["Earth sciences".to_owned()];
    record.fields.locations =
        vec![Location { url: "https://schema.datacite.org".to_owned(), kind: "website".to_owned() }];
    record.fields.samples =
        vec![Sample { title: "Example".to_owned(), url: "https://example.com/sample.xml".to_owned() }];
    record
}

fn render(record: Record, versions: Vec<Version>, relations: RelationMap, can_edit: bool) -> String {
    let versions = annotate_versions(&versions);
    view! {
        <SchemePage
            record=record
            versions=versions
            relations=relations
            data_type_labels=Vec::new()
            can_edit=can_edit
        />
    }
    .to_html()
}

#[test]
fn renders_title_mscid_and_description_html() {
    let html = render(fixture(), Vec::new(), BTreeMap::new(), false);
    assert!(html.contains("DataCite Metadata Schema"));
    assert!(html.contains("msc:m13"));
    // Description is pre-sanitized upstream and rendered as markup.
    assert!(html.contains("<p>Metadata for <em>datasets</em>.</p>"));
}

#[test]
fn optional_sections_toggle_on_presence() {
    let html = render(fixture(), Vec::new(), BTreeMap::new(), false);
    assert!(html.contains("Subject areas"));
    assert!(html.contains("Relevant links"));
    assert!(html.contains("Sample records"));
    assert!(!html.contains("Namespaces"));
    assert!(!html.contains("Version history"));

    let mut bare = Record::blank(Series::Scheme);
    bare.number = 1;
    bare.fields.title = Some("Bare".to_owned());
    let html = render(bare, Vec::new(), BTreeMap::new(), false);
    assert!(!html.contains("Subject areas"));
    assert!(!html.contains("Relevant links"));
}

#[test]
fn version_history_section_appears_with_versions() {
    let versions = vec![Version {
        number: "4.4".to_owned(),
        issued: Some("2021-03-30".to_owned()),
        ..Version::default()
    }];
    let html = render(fixture(), versions, BTreeMap::new(), false);
    assert!(html.contains("Version history"));
    assert!(html.contains("Version 4.4"));
}

#[test]
fn related_schemes_group_only_when_scheme_relations_exist() {
    let mut relations: RelationMap = BTreeMap::new();
    relations.insert(
        "maintainers".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Organization, 2), name: "DataCite e.V.".to_owned() }],
    );
    let html = render(fixture(), Vec::new(), relations.clone(), false);
    assert!(!html.contains("Related metadata schemes"));
    assert!(html.contains("Maintained by"));
    assert!(html.contains("href=\"/msc/g2\""));

    relations.insert(
        "parent_schemes".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Scheme, 1), name: "Dublin Core".to_owned() }],
    );
    let html = render(fixture(), Vec::new(), relations, false);
    assert!(html.contains("Related metadata schemes"));
    assert!(html.contains("Parent schemes"));
    assert!(html.contains("href=\"/msc/m1\""));
}

#[test]
fn scheme_sections_are_not_duplicated_outside_the_group() {
    let mut relations: RelationMap = BTreeMap::new();
    relations.insert(
        "parent_schemes".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Scheme, 1), name: "Dublin Core".to_owned() }],
    );
    let html = render(fixture(), Vec::new(), relations, false);
    assert_eq!(html.matches("Parent schemes").count(), 1);
}

#[test]
fn edit_affordance_gated_on_authentication() {
    let html = render(fixture(), Vec::new(), BTreeMap::new(), false);
    assert!(!html.contains("Edit this record"));

    let html = render(fixture(), Vec::new(), BTreeMap::new(), true);
    assert!(html.contains("Edit this record"));
    assert!(html.contains("href=\"/edit/m13\""));
}

#[test]
fn data_type_labels_render_when_provided() {
    let html = view! {
        <SchemePage
            record=fixture()
            versions=Vec::new()
            relations=BTreeMap::new()
            data_type_labels=vec!["Dataset".to_owned()]
            can_edit=false
        />
    }
    .to_html();
    assert!(html.contains("Types of data described"));
    assert!(html.contains("Dataset"));
}
