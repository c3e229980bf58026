use std::collections::BTreeMap;

use leptos::prelude::*;

use records::model::{Record, Version};
use records::mscid::{MscId, Series};
use records::relations::{RelatedRecord, RelationMap};
use records::versions::annotate_versions;

use super::*;

fn fixture() -> Record {
    let mut record = Record::blank(Series::Tool);
    record.number = 5;
    record.fields.title = Some("XSLT Converter".to_owned());
    record.fields.description = Some("<p>Converts between schemes.</p>".to_owned());
    record
}

#[test]
fn renders_title_description_and_versions() {
    let versions = annotate_versions(&[Version {
        number: "2.1".to_owned(),
        issued: Some("2019-07-01".to_owned()),
        ..Version::default()
    }]);
    let html = view! {
        <ToolPage record=fixture() versions=versions relations=BTreeMap::new() can_edit=false/>
    }
    .to_html();
    assert!(html.contains("XSLT Converter"));
    assert!(html.contains("msc:t5"));
    assert!(html.contains("Version 2.1"));
}

#[test]
fn supported_schemes_section_links_records() {
    let mut relations: RelationMap = BTreeMap::new();
    relations.insert(
        "supported_schemes".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Scheme, 1), name: "Dublin Core".to_owned() }],
    );
    let html = view! {
        <ToolPage record=fixture() versions=Vec::new() relations=relations can_edit=false/>
    }
    .to_html();
    assert!(html.contains("Supported schemes"));
    assert!(html.contains("href=\"/msc/m1\""));
}

#[test]
fn version_section_absent_without_versions() {
    let html = view! {
        <ToolPage record=fixture() versions=Vec::new() relations=BTreeMap::new() can_edit=false/>
    }
    .to_html();
    assert!(!html.contains("Version history"));
}
