//! Home page: the catalog contents by series.

use leptos::prelude::*;

use records::mscid::Series;
use records::relations::RelatedRecord;

use crate::urls;

/// One series worth of listing data, prepared by the server.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesListing {
    pub series: Series,
    pub entries: Vec<RelatedRecord>,
}

#[component]
pub fn HomePage(listings: Vec<SeriesListing>) -> impl IntoView {
    view! {
        <div class="home">
            <h1 class="home__title">"Metadata Standards Catalog"</h1>
            <p class="home__intro">
                "A directory of metadata schemes for research data, with the organizations, \
                 tools, mappings, and endorsements connected to them."
            </p>
            {listings
                .into_iter()
                .map(|listing| {
                    let count = listing.entries.len();
                    view! {
                        <section class="home-series">
                            <h2 class="home-series__heading">
                                {listing.series.heading()}
                                <span class="home-series__count">{format!(" ({count})")}</span>
                            </h2>
                            {if listing.entries.is_empty() {
                                view! { <p class="home-series__empty">"No records yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="home-series__list">
                                        {listing
                                            .entries
                                            .into_iter()
                                            .map(|entry| {
                                                view! {
                                                    <li class="home-series__item">
                                                        <a href=urls::record_url(entry.id)>{entry.name}</a>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                }
                                .into_any()
                            }}
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
