//! Add Listing Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::models::Listing;
use crate::store::{store_add_listing, use_scoreboard_store};

/// Creates a listing on the server, then appends it already in entry mode
#[component]
pub fn AddListingButton() -> impl IntoView {
    let store = use_scoreboard_store();

    let add = move |_| {
        spawn_local(async move {
            match commands::add_listing().await {
                Ok(created) => {
                    web_sys::console::log_1(&"[LISTING] Successfully added new listing.".into());
                    if !store_add_listing(&store, Listing::created(created)) {
                        web_sys::console::warn_1(&"[LISTING] Server returned an id already on the page".into());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LISTING] Add failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <button id="action-add" class="add-button" on:click=add>
            <i class="fas fa-plus"></i>
            " Add"
        </button>
    }
}
