use super::*;

#[test]
fn hex_round_trips_json_payloads() {
    let raw = r#"[["error","Could not save, \"quotes\" included."]]"#;
    assert_eq!(hex_decode(&hex_encode(raw)).as_deref(), Some(raw));
}

#[test]
fn hex_decode_rejects_junk() {
    assert_eq!(hex_decode("zz"), None);
    assert_eq!(hex_decode("abc"), None);
}

#[test]
fn push_then_take_round_trips_messages() {
    let jar = CookieJar::new();
    let jar = push(jar, "success", "Successfully added record.");
    let jar = push(jar, "error", "Something else.");
    let (_, flashes) = take(jar);
    assert_eq!(flashes.len(), 2);
    assert_eq!(flashes[0].category, "success");
    assert_eq!(flashes[0].message, "Successfully added record.");
    assert_eq!(flashes[1].category, "error");
}

#[test]
fn take_clears_the_cookie() {
    let jar = push(CookieJar::new(), "success", "one");
    let (jar, _) = take(jar);
    // The replacement cookie is emptied and expired.
    let cookie = jar.get("msc_flash").expect("clearing cookie present");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
}

#[test]
fn take_on_empty_jar_yields_nothing() {
    let (_, flashes) = take(CookieJar::new());
    assert!(flashes.is_empty());
}

#[test]
fn decode_tolerates_corrupted_values() {
    assert!(decode("nothex!").is_empty());
    assert!(decode(&hex_encode("{not a list}")).is_empty());
}
