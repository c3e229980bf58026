use super::*;

fn thesaurus() -> Thesaurus {
    Thesaurus::load_default().expect("bundled data loads")
}

#[test]
fn bundled_data_loads() {
    let th = thesaurus();
    assert!(!th.choices().is_empty());
}

#[test]
fn label_lookup_by_uri() {
    let th = thesaurus();
    assert_eq!(th.label("http://vocabularies.unesco.org/thesaurus/concept160"), Some("Earth sciences"));
    assert_eq!(th.label("http://example.com/nope"), None);
}

#[test]
fn long_label_carries_ancestry() {
    let th = thesaurus();
    assert_eq!(
        th.long_label("http://vocabularies.unesco.org/thesaurus/concept161"),
        Some("Geology < Earth sciences < Science")
    );
}

#[test]
fn uri_for_accepts_short_and_long_labels() {
    let th = thesaurus();
    let expected = Some("http://vocabularies.unesco.org/thesaurus/concept161");
    assert_eq!(th.uri_for("Geology"), expected);
    assert_eq!(th.uri_for("Geology < Earth sciences < Science"), expected);
    assert_eq!(th.uri_for("Alchemy"), None);
}

#[test]
fn choices_are_long_labels() {
    let th = thesaurus();
    assert!(th.choices().contains(&"Earth sciences < Science".to_owned()));
}

#[test]
fn from_json_rejects_malformed_data() {
    assert!(Thesaurus::from_json("{not json").is_err());
}
