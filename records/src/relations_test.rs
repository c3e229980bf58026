use std::collections::BTreeMap;

use super::*;

#[test]
fn every_series_has_descriptors() {
    for series in Series::ALL {
        assert!(!relation_fields(series).is_empty(), "no descriptors for {series:?}");
    }
}

#[test]
fn descriptor_names_are_unique_per_series() {
    for series in Series::ALL {
        let fields = relation_fields(series);
        for (i, a) in fields.iter().enumerate() {
            for b in &fields[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate field name in {series:?}");
            }
        }
    }
}

#[test]
fn scheme_fields_match_form_contract() {
    let names: Vec<&str> = relation_fields(Series::Scheme).iter().map(|f| f.name).collect();
    assert_eq!(
        names,
        vec![
            "parent_schemes",
            "child_schemes",
            "input_to_mappings",
            "output_from_mappings",
            "maintainers",
            "funders",
            "users",
            "tools",
            "endorsements",
        ]
    );
}

#[test]
fn inverse_pairs_share_predicates() {
    // A scheme's maintainers (forward) and an organization's maintained
    // schemes (inverse) must read the same triples.
    let forward = relation_field(Series::Scheme, "maintainers").unwrap();
    let inverse = relation_field(Series::Organization, "maintained_schemes").unwrap();
    assert_eq!(forward.predicate, inverse.predicate);
    assert!(!forward.inverse);
    assert!(inverse.inverse);

    let forward = relation_field(Series::Tool, "supported_schemes").unwrap();
    let inverse = relation_field(Series::Scheme, "tools").unwrap();
    assert_eq!(forward.predicate, inverse.predicate);
}

#[test]
fn relation_field_lookup_misses_cleanly() {
    assert!(relation_field(Series::Endorsement, "maintainers").is_none());
}

#[test]
fn scheme_to_scheme_fields_exist_on_schemes() {
    for name in SCHEME_TO_SCHEME_FIELDS {
        assert!(relation_field(Series::Scheme, name).is_some(), "{name} missing");
    }
}

#[test]
fn has_related_schemes_ignores_other_relations() {
    let mut relations: RelationMap = BTreeMap::new();
    relations.insert(
        "maintainers".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Organization, 1), name: "DCMI".to_owned() }],
    );
    assert!(!has_related_schemes(&relations));

    relations.insert(
        "parent_schemes".to_owned(),
        vec![RelatedRecord { id: MscId::new(Series::Scheme, 2), name: "DC".to_owned() }],
    );
    assert!(has_related_schemes(&relations));
}

#[test]
fn has_related_schemes_skips_empty_lists() {
    let mut relations: RelationMap = BTreeMap::new();
    relations.insert("child_schemes".to_owned(), Vec::new());
    assert!(!has_related_schemes(&relations));
}

#[test]
fn related_record_serializes_id_as_string() {
    let record = RelatedRecord { id: MscId::new(Series::Tool, 7), name: "Converter".to_owned() };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({"id": "msc:t7", "name": "Converter"}));
}
