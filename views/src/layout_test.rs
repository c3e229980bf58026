use leptos::prelude::*;

use super::*;

fn render(view: impl RenderHtml) -> String {
    view.to_html()
}

#[test]
fn shell_titles_the_document() {
    let html = render(view! {
        <Shell title="DataCite".to_owned()>
            <p>"body"</p>
        </Shell>
    });
    assert!(html.contains("DataCite — Metadata Standards Catalog"));
    assert!(html.contains("<p>body</p>"));
}

#[test]
fn anonymous_shell_offers_sign_in_only() {
    let html = render(view! {
        <Shell title="Home".to_owned()>
            <p>"body"</p>
        </Shell>
    });
    assert!(html.contains("Sign in"));
    assert!(!html.contains("Sign out"));
    assert!(!html.contains("Add scheme"));
}

#[test]
fn signed_in_shell_offers_add_links_per_series() {
    let html = render(view! {
        <Shell title="Home".to_owned() user=Some("alice".to_owned())>
            <p>"body"</p>
        </Shell>
    });
    assert!(html.contains("alice"));
    assert!(html.contains("href=\"/edit/m0\""));
    assert!(html.contains("href=\"/edit/e0\""));
    assert!(html.contains("href=\"/edit/datatype0\""));
    assert!(html.contains("Sign out"));
}

#[test]
fn flashes_render_with_category_classes() {
    let flashes = vec![
        Flash::new("success", "Successfully updated record."),
        Flash::new("error", "Could not save changes."),
    ];
    let html = render(view! {
        <Shell title="Edit".to_owned() flashes=flashes>
            <p>"body"</p>
        </Shell>
    });
    assert!(html.contains("flash flash--success"));
    assert!(html.contains("flash flash--error"));
    assert!(html.contains("Successfully updated record."));
}

#[test]
fn no_flash_list_when_empty() {
    let html = render(view! {
        <Shell title="Home".to_owned()>
            <p>"body"</p>
        </Shell>
    });
    assert!(!html.contains("class=\"flashes\""));
}
