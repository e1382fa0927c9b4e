//! Listing Row Component
//!
//! One scoreboard listing with its read-only and inline-edit blocks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::editing::{apply_listing_edit, diff_listing, revert_listing_edit};
use crate::models::{EditMode, Listing};
use crate::store::{store_get_listing, store_update_listing, use_scoreboard_store, ScoreboardStateStoreFields};

/// A single listing row
#[component]
pub fn ListingRow(listing: Listing) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_scoreboard_store();

    let id = listing.listing_id.clone();
    let (mode, set_mode) = signal(listing.initial_mode);
    let (name_input, set_name_input) = signal(listing.name.clone());
    let (total_input, set_total_input) = signal(listing.total.clone());

    // Displayed values follow the store so optimistic updates and reverts show up
    let shown = {
        let id = id.clone();
        Memo::new(move |_| {
            store
                .listings()
                .read()
                .iter()
                .find(|l| l.listing_id == id)
                .map(|l| (l.name.clone(), l.total.clone()))
                .unwrap_or_default()
        })
    };

    let enter_edit = move |_| set_mode.set(EditMode::Entry);

    let commit_edit = {
        let id = id.clone();
        move |_| {
            set_mode.set(EditMode::Display);
            let Some(current) = store_get_listing(&store, &id) else { return };

            let payload = diff_listing(&current, &name_input.get_untracked(), &total_input.get_untracked());
            let previous = if payload.has_changes() {
                store_update_listing(&store, &id, |l| apply_listing_edit(l, &payload))
            } else {
                None
            };

            spawn_local(async move {
                match commands::edit_listing(&payload).await {
                    Ok(()) => {
                        web_sys::console::log_1(&"[LISTING] Successfully edited listing.".into());
                    }
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[LISTING] Edit of {} failed, reverting: {}", payload.listing_id, e).into(),
                        );
                        if let Some(previous) = previous {
                            store_update_listing(&store, &payload.listing_id, |l| {
                                revert_listing_edit(l, &previous, &payload)
                            });
                        }
                    }
                }
            });
        }
    };

    let request_delete = {
        let id = id.clone();
        move |_| ctx.request_delete(id.clone())
    };

    view! {
        <li id=format!("listing-{}", id) class="listing">
            // Read-only block
            <div
                class="listing-data"
                id=format!("listing-data-{}", id)
                style:display=move || mode.get().data_display()
            >
                <span class="listing-name">
                    <span id=format!("listing-name-{}", id)>{move || shown.get().0}</span>
                </span>
                <span class="listing-score">
                    "Score - "
                    <span id=format!("listing-score-{}", id)>{move || shown.get().1}</span>
                </span>
                <span class="listing-actions">
                    <button class="edit-button" id=format!("action-edit-{}", id) on:click=enter_edit>
                        <i class="fas fa-edit"></i>
                    </button>
                </span>
            </div>

            // Entry block
            <div
                class="listing-entry"
                id=format!("listing-entry-{}", id)
                style:display=move || mode.get().entry_display()
            >
                <span class="listing-name">
                    <input
                        id=format!("entry-name-{}", id)
                        class="entry-listing-name"
                        prop:value=name_input
                        on:input=move |ev| set_name_input.set(event_target_value(&ev))
                    />
                </span>
                <span class="listing-score">
                    <p>"Score -"</p>
                    <span class="input-entry">
                        <input
                            id=format!("entry-score-{}", id)
                            class="entry-listing-score"
                            type="number"
                            prop:value=total_input
                            on:input=move |ev| set_total_input.set(event_target_value(&ev))
                        />
                    </span>
                </span>
                <span class="listing-actions">
                    <button class="delete-button" id=format!("action-delete-{}", id) on:click=request_delete>
                        <i class="fas fa-trash"></i>
                    </button>
                    <button class="done-button" id=format!("action-done-{}", id) on:click=commit_edit>
                        "Done"
                    </button>
                </span>
            </div>
        </li>
    }
}
