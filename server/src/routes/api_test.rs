use super::*;

// =============================================================================
// parse_api_key
// =============================================================================

#[test]
fn api_key_parses_lists_and_items() {
    assert_eq!(parse_api_key("m"), Some(ApiKey::List(ApiTable::Series(Series::Scheme))));
    assert_eq!(parse_api_key("g12"), Some(ApiKey::Item(ApiTable::Series(Series::Organization), 12)));
    assert_eq!(parse_api_key("datatype"), Some(ApiKey::List(ApiTable::Datatype)));
    assert_eq!(parse_api_key("datatype3"), Some(ApiKey::Item(ApiTable::Datatype, 3)));
}

#[test]
fn api_key_rejects_unknown_tables() {
    assert_eq!(parse_api_key("x"), None);
    assert_eq!(parse_api_key("13"), None);
    assert_eq!(parse_api_key("m13b"), None);
    assert_eq!(parse_api_key(""), None);
}

// =============================================================================
// paginate
// =============================================================================

#[test]
fn default_window_is_first_page() {
    let window = paginate(25, 10, None, None, "http://x/api2/m").unwrap();
    assert_eq!(window.start_index, 1);
    assert_eq!(window.page_index, 1);
    assert_eq!(window.total_pages, 3);
    assert_eq!(window.next_link.as_deref(), Some("http://x/api2/m?start=11&pageSize=10"));
    assert_eq!(window.previous_link, None);
}

#[test]
fn page_addressing_produces_page_links() {
    let window = paginate(25, 10, None, Some(2), "http://x/api2/m").unwrap();
    assert_eq!(window.start_index, 11);
    assert_eq!(window.page_index, 2);
    assert_eq!(window.next_link.as_deref(), Some("http://x/api2/m?page=3&pageSize=10"));
    assert_eq!(window.previous_link.as_deref(), Some("http://x/api2/m?page=1&pageSize=10"));
}

#[test]
fn last_page_has_no_next_link() {
    let window = paginate(25, 10, None, Some(3), "http://x/api2/m").unwrap();
    assert_eq!(window.start_index, 21);
    assert_eq!(window.next_link, None);
}

#[test]
fn out_of_range_requests_are_rejected() {
    assert!(paginate(25, 10, None, Some(4), "l").is_none());
    assert!(paginate(25, 10, None, Some(0), "l").is_none());
    assert!(paginate(25, 10, Some(26), None, "l").is_none());
    assert!(paginate(25, 10, Some(0), None, "l").is_none());
}

#[test]
fn off_grid_start_adds_a_page_and_clamps_previous() {
    let window = paginate(25, 10, Some(5), None, "http://x/api2/m").unwrap();
    // Items 5..14 shown; the tail would not fit in 3 aligned pages.
    assert_eq!(window.total_pages, 4);
    assert_eq!(window.next_link.as_deref(), Some("http://x/api2/m?start=15&pageSize=10"));
    // Going back from item 5 means a short first page of 4 items.
    assert_eq!(window.previous_link.as_deref(), Some("http://x/api2/m?start=1&pageSize=4"));
}

#[test]
fn aligned_start_pages_link_backwards_symmetrically() {
    let window = paginate(25, 10, Some(11), None, "http://x/api2/m").unwrap();
    assert_eq!(window.previous_link.as_deref(), Some("http://x/api2/m?start=1&pageSize=10"));
}

#[test]
fn empty_collection_paginates_to_empty_first_page() {
    let window = paginate(0, 10, None, None, "l").unwrap();
    assert_eq!(window.start_index, 1);
    assert_eq!(window.total_pages, 0);
    assert_eq!(window.next_link, None);
    assert_eq!(window.previous_link, None);
}

// =============================================================================
// response envelopes
// =============================================================================

#[test]
fn page_response_carries_envelope_fields() {
    let window = paginate(3, 2, None, None, "http://x/api2/m").unwrap();
    let body = page_response(vec![json!({"a": 1}), json!({"a": 2})], 3, 2, &window);
    assert_eq!(body["apiVersion"], API_VERSION);
    assert_eq!(body["data"]["totalItems"], 3);
    assert_eq!(body["data"]["currentItemCount"], 2);
    assert_eq!(body["data"]["totalPages"], 2);
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
    assert!(body["data"]["nextLink"].is_string());
    assert!(body["data"].get("previousLink").is_none());
}

#[test]
fn item_response_wraps_data() {
    let body = item_response(json!({"title": "X"}));
    assert_eq!(body["apiVersion"], API_VERSION);
    assert_eq!(body["data"]["title"], "X");
}

#[test]
fn relation_doc_carries_id_predicates_and_uri() {
    let mut properties = std::collections::BTreeMap::new();
    properties.insert("maintainer".to_owned(), vec!["msc:g1".to_owned()]);
    let doc = relation_doc("msc:m13", &properties);
    assert_eq!(doc["@id"], "msc:m13");
    assert_eq!(doc["maintainer"], json!(["msc:g1"]));
    assert!(doc["uri"].as_str().unwrap().ends_with("/api2/rel/m13"));
}

#[test]
fn datatype_doc_omits_missing_id() {
    let term = Datatype { number: 3, id: None, label: "Image".to_owned() };
    let doc = datatype_doc(&term);
    assert!(doc.get("id").is_none());
    assert_eq!(doc["label"], "Image");
    assert_eq!(doc["mscid"], "msc:datatype3");
}
