//! Listing List Component

use leptos::prelude::*;

use crate::components::ListingRow;
use crate::store::{use_scoreboard_store, ScoreboardStateStoreFields};

/// All listings, in insertion order
#[component]
pub fn ListingList() -> impl IntoView {
    let store = use_scoreboard_store();

    view! {
        <ul id="listings" class="listings">
            <For
                each=move || store.listings().get()
                key=|listing| listing.listing_id.clone()
                children=move |listing| view! { <ListingRow listing=listing /> }
            />
        </ul>
    }
}
