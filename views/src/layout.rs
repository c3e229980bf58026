//! Base page layout.
//!
//! The shell every page renders inside: site header with auth-gated
//! navigation, flash messages, content slot, footer. CSS class names here
//! are a contract with the stylesheet.

use leptos::prelude::*;

use records::mscid::Series;

use crate::urls;

/// A one-shot notice carried over a redirect. `category` is one of
/// `success`, `error`, or `warning` and becomes a class modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flash {
    pub category: String,
    pub message: String,
}

impl Flash {
    #[must_use]
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self { category: category.into(), message: message.into() }
    }
}

/// Base layout. `user` is the signed-in display name, if any; it gates the
/// add-record and sign-out affordances.
#[component]
pub fn Shell(
    title: String,
    #[prop(optional_no_strip)] user: Option<String>,
    #[prop(default = Vec::new())] flashes: Vec<Flash>,
    children: Children,
) -> impl IntoView {
    let page_title = format!("{title} — Metadata Standards Catalog");
    let nav = match user {
        Some(name) => view! {
            <nav class="site-nav">
                <span class="site-nav__user">{name}</span>
                {Series::ALL
                    .into_iter()
                    .map(|series| {
                        view! {
                            <a class="site-nav__link" href=urls::edit_url(series, 0)>
                                {format!("Add {}", series.noun())}
                            </a>
                        }
                    })
                    .collect_view()}
                <a class="site-nav__link" href=urls::edit_datatype_url(0)>"Add data type"</a>
                <a class="site-nav__link site-nav__link--signout" href=urls::logout_url()>"Sign out"</a>
            </nav>
        }
        .into_any(),
        None => view! {
            <nav class="site-nav">
                <a class="site-nav__link" href=urls::login_url()>"Sign in"</a>
            </nav>
        }
        .into_any(),
    };

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{page_title}</title>
                <link rel="stylesheet" href="/static/catalog.css"/>
            </head>
            <body>
                <header class="site-header">
                    <a class="site-header__brand" href="/">"Metadata Standards Catalog"</a>
                    {nav}
                </header>
                {(!flashes.is_empty()).then(|| {
                    view! {
                        <ul class="flashes">
                            {flashes
                                .into_iter()
                                .map(|flash| {
                                    view! {
                                        <li class=format!("flash flash--{}", flash.category)>{flash.message}</li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                })}
                <main class="content">{children()}</main>
                <footer class="site-footer">
                    <p>"A catalog of metadata standards for research data."</p>
                </footer>
            </body>
        </html>
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
