use super::*;

fn version(number: &str) -> Version {
    Version { number: number.to_owned(), ..Version::default() }
}

fn issued(number: &str, date: &str) -> Version {
    Version { number: number.to_owned(), issued: Some(date.to_owned()), ..Version::default() }
}

#[test]
fn unnumbered_entries_are_dropped() {
    let versions = vec![Version::default(), issued("1.0", "2019-01-01")];
    let annotated = annotate_versions(&versions);
    assert_eq!(annotated.len(), 1);
    assert_eq!(annotated[0].version.number, "1.0");
}

#[test]
fn date_prefers_issued_then_valid_from_then_available() {
    let v = Version {
        number: "2".to_owned(),
        issued: Some("2020-05-01".to_owned()),
        valid_from: Some("2020-06-01".to_owned()),
        available: Some("2019-12-01".to_owned()),
        ..Version::default()
    };
    assert_eq!(annotate_versions(&[v])[0].date.as_deref(), Some("2020-05-01"));

    let v = Version {
        number: "2".to_owned(),
        valid_from: Some("2020-06-01".to_owned()),
        available: Some("2019-12-01".to_owned()),
        ..Version::default()
    };
    assert_eq!(annotate_versions(&[v])[0].date.as_deref(), Some("2020-06-01"));

    let v = Version { number: "2".to_owned(), available: Some("2019-12-01".to_owned()), ..Version::default() };
    assert_eq!(annotate_versions(&[v])[0].date.as_deref(), Some("2019-12-01"));
}

#[test]
fn newest_dated_version_comes_first_and_is_current() {
    let versions = vec![issued("1.0", "2015-01-01"), issued("2.0", "2020-01-01")];
    let annotated = annotate_versions(&versions);
    assert_eq!(annotated[0].version.number, "2.0");
    assert_eq!(annotated[0].status, VersionStatus::Current);
    assert_eq!(annotated[1].status, VersionStatus::Unknown);
}

#[test]
fn draft_only_versions_are_proposed_not_current() {
    let draft = Version {
        number: "3.0".to_owned(),
        available: Some("2021-03-01".to_owned()),
        ..Version::default()
    };
    let versions = vec![issued("2.0", "2020-01-01"), draft];
    let annotated = annotate_versions(&versions);
    assert_eq!(annotated[0].version.number, "3.0");
    assert_eq!(annotated[0].status, VersionStatus::Proposed);
    assert_eq!(annotated[1].status, VersionStatus::Current);
}

#[test]
fn superseded_versions_are_deprecated() {
    let old = Version {
        number: "1.0".to_owned(),
        issued: Some("2015-01-01".to_owned()),
        valid_to: Some("2020-01-01".to_owned()),
        ..Version::default()
    };
    let versions = vec![old, issued("2.0", "2020-01-01")];
    let annotated = annotate_versions(&versions);
    assert_eq!(annotated[0].status, VersionStatus::Current);
    assert_eq!(annotated[1].status, VersionStatus::Deprecated { until: "2020-01-01".to_owned() });
    assert_eq!(annotated[1].status.display(), "deprecated on 2020-01-01");
}

#[test]
fn undated_versions_sort_by_number_after_dated() {
    let versions = vec![version("0.9"), version("1.1"), issued("1.0", "2018-01-01")];
    let annotated = annotate_versions(&versions);
    let numbers: Vec<&str> = annotated.iter().map(|v| v.version.number.as_str()).collect();
    assert_eq!(numbers, vec!["1.0", "1.1", "0.9"]);
}

#[test]
fn only_one_current_version() {
    let versions = vec![issued("1.0", "2015-01-01"), issued("2.0", "2020-01-01")];
    let annotated = annotate_versions(&versions);
    let current = annotated
        .iter()
        .filter(|v| v.status == VersionStatus::Current)
        .count();
    assert_eq!(current, 1);
}

#[test]
fn empty_history_yields_no_entries() {
    assert!(annotate_versions(&[]).is_empty());
}
