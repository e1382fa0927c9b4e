//! Scoreboard Frontend App
//!
//! Root component; picks the page the server asked for.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap::{PageKind, PageState};
use crate::components::{AddListingButton, DeleteConfirmPopup, ListingList, LoginForm, ScoreboardTitle, ScoreboardView};
use crate::context::AppContext;
use crate::editing::PendingDelete;
use crate::store::ScoreboardState;

#[component]
pub fn App(page: PageState) -> impl IntoView {
    // State
    let store = Store::new(ScoreboardState::from(&page));
    let pending_delete = signal(PendingDelete::default());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(pending_delete));

    web_sys::console::log_1(
        &format!("[APP] Mounting {:?} page with {} listings", page.page, page.listings.len()).into(),
    );

    match page.page {
        PageKind::Index => view! { <ScoreboardView /> }.into_any(),
        PageKind::Edit => view! {
            <div class="scoreboard edit">
                <ScoreboardTitle />
                <ListingList />
                <AddListingButton />
                <DeleteConfirmPopup />
            </div>
        }
        .into_any(),
        PageKind::Login => view! {
            <div class="login">
                <LoginForm />
            </div>
        }
        .into_any(),
    }
}
