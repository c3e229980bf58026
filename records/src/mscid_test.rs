use super::*;

#[test]
fn series_codes_round_trip() {
    for series in Series::ALL {
        assert_eq!(Series::from_code(series.code()), Some(series));
    }
}

#[test]
fn series_rejects_unknown_code() {
    assert_eq!(Series::from_code('x'), None);
    assert!("mg".parse::<Series>().is_err());
    assert!("".parse::<Series>().is_err());
}

#[test]
fn mscid_displays_with_prefix() {
    let id = MscId::new(Series::Scheme, 13);
    assert_eq!(id.to_string(), "msc:m13");
}

#[test]
fn mscid_parses_all_series() {
    assert_eq!(MscId::parse("msc:m1").unwrap(), MscId::new(Series::Scheme, 1));
    assert_eq!(MscId::parse("msc:g5").unwrap(), MscId::new(Series::Organization, 5));
    assert_eq!(MscId::parse("msc:t2").unwrap(), MscId::new(Series::Tool, 2));
    assert_eq!(MscId::parse("msc:c7").unwrap(), MscId::new(Series::Crosswalk, 7));
    assert_eq!(MscId::parse("msc:e3").unwrap(), MscId::new(Series::Endorsement, 3));
}

#[test]
fn mscid_ignores_version_fragment() {
    let id = MscId::parse("msc:m13#v1.1").unwrap();
    assert_eq!(id, MscId::new(Series::Scheme, 13));
}

#[test]
fn mscid_rejects_missing_prefix() {
    assert!(matches!(MscId::parse("m13"), Err(IdError::MissingPrefix(_))));
}

#[test]
fn mscid_rejects_bad_series_and_number() {
    assert!(matches!(MscId::parse("msc:x13"), Err(IdError::UnknownSeries(_))));
    assert!(matches!(MscId::parse("msc:m"), Err(IdError::InvalidNumber(_))));
    assert!(matches!(MscId::parse("msc:m13b"), Err(IdError::InvalidNumber(_))));
    assert!(matches!(MscId::parse("msc:"), Err(IdError::UnknownSeries(_))));
}

#[test]
fn bare_form_parses_url_segments() {
    assert_eq!(MscId::parse_bare("g12").unwrap(), MscId::new(Series::Organization, 12));
    assert!(MscId::parse_bare("datatype3").is_err());
}

#[test]
fn ordering_is_numeric_within_series() {
    let a = MscId::new(Series::Scheme, 2);
    let b = MscId::new(Series::Scheme, 13);
    assert!(a < b);
}

#[test]
fn ordering_groups_by_series_letter() {
    // Alphabetical by table code: c < e < g < m < t.
    let c = MscId::new(Series::Crosswalk, 99);
    let e = MscId::new(Series::Endorsement, 1);
    let m = MscId::new(Series::Scheme, 1);
    assert!(c < e);
    assert!(e < m);
}

#[test]
fn sort_mscids_orders_numerically() {
    let mut ids = vec!["msc:m13".to_owned(), "msc:m2".to_owned(), "msc:c1".to_owned()];
    sort_mscids(&mut ids);
    assert_eq!(ids, vec!["msc:c1", "msc:m2", "msc:m13"]);
}

#[test]
fn datatype_id_round_trip() {
    let id = DatatypeId::parse("msc:datatype4").unwrap();
    assert_eq!(id, DatatypeId(4));
    assert_eq!(id.to_string(), "msc:datatype4");
}

#[test]
fn datatype_id_rejects_main_series() {
    assert!(DatatypeId::parse("msc:m4").is_err());
}
