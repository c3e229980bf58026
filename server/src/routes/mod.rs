//! Router assembly.
//!
//! HTML pages, the OAuth flow, the JSON API, and static assets under a
//! single Axum router. Path segments like `m13` carry both the series code
//! and the record number; the handlers split them.

pub mod api;
pub mod auth;
pub mod flash;
pub mod pages;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Resolve the directory holding the stylesheet and other static assets.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"))
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/msc/{id}", get(pages::display))
        .route("/edit/{id}", get(pages::edit_form).post(pages::edit_submit))
        .route("/auth/github", get(auth::github_redirect))
        .route("/auth/github/callback", get(auth::github_callback))
        .route("/auth/logout", get(auth::logout))
        .route("/api2/rel", get(api::list_relations))
        .route("/api2/rel/{id}", get(api::get_relation))
        .route("/api2/{table}", get(api::get_table))
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
