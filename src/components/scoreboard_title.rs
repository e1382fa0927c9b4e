//! Scoreboard Title Component
//!
//! Scoreboard name with an inline rename editor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::editing::diff_title;
use crate::models::EditMode;
use crate::store::{use_scoreboard_store, ScoreboardStateStoreFields};

#[component]
pub fn ScoreboardTitle() -> impl IntoView {
    let store = use_scoreboard_store();
    let (mode, set_mode) = signal(EditMode::Display);
    let (title_input, set_title_input) = signal(store.title().get_untracked());

    let rename = move |_| set_mode.set(EditMode::Entry);

    let rename_done = move |_| {
        let input = title_input.get_untracked();
        let payload = diff_title(&store.title().get_untracked(), &input);
        if payload.is_empty() {
            set_mode.set(EditMode::Display);
            return;
        }

        spawn_local(async move {
            match commands::edit_scoreboard(&payload).await {
                Ok(()) => {
                    web_sys::console::log_1(&"[SCOREBOARD] Successfully edited scoreboard.".into());
                    *store.title().write() = input;
                    set_mode.set(EditMode::Display);
                }
                // Editor stays open so the name can be retried
                Err(e) => {
                    web_sys::console::error_1(&format!("[SCOREBOARD] Rename failed: {}", e).into());
                }
            }
        });
    };

    view! {
        <div class="scoreboard-header">
            <h1 id="scoreboard-name" style:display=move || mode.get().data_display()>
                {move || store.title().get()}
            </h1>
            <div id="scoreboard-name-entry" style:display=move || mode.get().entry_display()>
                <input
                    id="entry-scoreboard-name"
                    type="text"
                    prop:value=title_input
                    on:input=move |ev| set_title_input.set(event_target_value(&ev))
                />
                <button id="action-rename-done" class="done-button" on:click=rename_done>
                    "Done"
                </button>
            </div>
            <button id="action-rename" class="edit-button" on:click=rename>
                <i class="fas fa-edit"></i>
            </button>
        </div>
    }
}
