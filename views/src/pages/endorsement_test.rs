use std::collections::BTreeMap;

use leptos::prelude::*;

use records::model::{Location, Record};
use records::mscid::{MscId, Series};
use records::relations::{RelatedRecord, RelationMap};

use super::*;

fn fixture() -> Record {
    let mut record = Record::blank(Series::Endorsement);
    record.number = 4;
    record.fields.citation = Some("RDA Recommendation (2020)".to_owned());
    record.fields.issued = Some("2020-06-01".to_owned());
    record.fields.valid_from = Some("2020-06-01".to_owned());
    record.fields.locations =
        vec![Location { url: "https://example.com/endorsement.pdf".to_owned(), kind: "document".to_owned() }];
    record
}

#[test]
fn renders_citation_and_dates() {
    let html = view! {
        <EndorsementPage record=fixture() relations=BTreeMap::new() can_edit=false/>
    }
    .to_html();
    assert!(html.contains("RDA Recommendation (2020)"));
    assert!(html.contains("Issued 2020-06-01."));
    assert!(html.contains("Valid from 2020-06-01."));
    assert!(html.contains("Source documents"));
}

#[test]
fn validity_window_includes_end_date() {
    let mut record = fixture();
    record.fields.valid_to = Some("2023-01-01".to_owned());
    let html = view! {
        <EndorsementPage record=record relations=BTreeMap::new() can_edit=false/>
    }
    .to_html();
    assert!(html.contains("Valid from 2020-06-01 until 2023-01-01."));
}

#[test]
fn endorsed_schemes_and_originators_render() {
    let mut relations: RelationMap = BTreeMap::new();
    relations.insert(
        "endorsed_schemes".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Scheme, 13), name: "DataCite".to_owned() }],
    );
    relations.insert(
        "originators".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Organization, 2), name: "RDA".to_owned() }],
    );
    let html = view! {
        <EndorsementPage record=fixture() relations=relations can_edit=false/>
    }
    .to_html();
    assert!(html.contains("Endorses"));
    assert!(html.contains("href=\"/msc/m13\""));
    assert!(html.contains("Endorsed by"));
    assert!(html.contains("href=\"/msc/g2\""));
}

#[test]
fn dates_absent_when_not_recorded() {
    let mut record = Record::blank(Series::Endorsement);
    record.number = 7;
    let html = view! {
        <EndorsementPage record=record relations=BTreeMap::new() can_edit=false/>
    }
    .to_html();
    assert!(!html.contains("Issued"));
    assert!(!html.contains("Valid from"));
}
