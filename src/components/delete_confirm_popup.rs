//! Delete Confirm Popup Component
//!
//! Page-level confirmation dialog shared by every listing's delete button.
//! The target lives in a single slot in [`AppContext`], so confirming always
//! deletes exactly the most recently requested listing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_get_listing, store_remove_listing, use_scoreboard_store};

#[component]
pub fn DeleteConfirmPopup() -> impl IntoView {
    let ctx: AppContext = use_app_context();
    let store = use_scoreboard_store();

    // Name of the listing the popup is asking about
    let target_name = Memo::new(move |_| {
        ctx.pending_delete
            .with(|p| p.target().cloned())
            .and_then(|id| store_get_listing(&store, &id))
            .map(|l| l.name)
            .unwrap_or_else(|| "this listing".to_string())
    });

    let confirm = move |_| {
        let Some(id) = ctx.confirm_delete() else { return };
        spawn_local(async move {
            match commands::delete_listing(&id).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[LISTING] Successfully deleted listing.".into());
                    store_remove_listing(&store, &id);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LISTING] Delete of {} failed: {}", id, e).into());
                }
            }
        });
    };

    view! {
        <div
            id="popup-delete"
            class="popup"
            style:display=move || if ctx.pending_delete.with(|p| p.is_open()) { "block" } else { "none" }
        >
            <div class="popup-content">
                <p>{move || format!("Delete {}?", target_name.get())}</p>
                <button id="action-confirm" class="confirm-button" on:click=confirm>
                    "Delete"
                </button>
                <button id="action-cancel" class="cancel-button" on:click=move |_| ctx.cancel_delete()>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
