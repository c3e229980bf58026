//! Server-rendered HTML for the metadata standards catalog.
//!
//! Every page is a pure leptos component over already-materialized inputs
//! (records, annotated versions, relations maps, form objects); rendering a
//! page is a plain function call ending in [`document`]. There is no
//! hydration and no client-side state: edit pages are ordinary HTML forms
//! posted back to the server.

pub mod components;
pub mod layout;
pub mod pages;
pub mod urls;

use leptos::prelude::RenderHtml;

/// Render a view into a complete HTML document.
pub fn document<V: RenderHtml>(view: V) -> String {
    format!("<!DOCTYPE html>\n{}", view.to_html())
}
