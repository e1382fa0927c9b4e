//! Scoreboard View Component
//!
//! Read-only scoreboard for the public page.

use leptos::prelude::*;

use crate::store::{use_scoreboard_store, ScoreboardStateStoreFields};

#[component]
pub fn ScoreboardView() -> impl IntoView {
    let store = use_scoreboard_store();

    view! {
        <div class="scoreboard">
            <h1 id="scoreboard-name">{move || store.title().get()}</h1>
            <ul id="listings" class="listings">
                <For
                    each=move || store.listings().get()
                    key=|listing| listing.listing_id.clone()
                    children=move |listing| {
                        let id = listing.listing_id.clone();
                        view! {
                            <li id=format!("listing-{}", id) class="listing">
                                <div class="listing-data">
                                    <span class="listing-name">{listing.name}</span>
                                    <span class="listing-score">"Score - " {listing.total}</span>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
