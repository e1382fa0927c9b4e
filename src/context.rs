//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::editing::PendingDelete;
use crate::models::ListingId;

/// Page-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Listing awaiting delete confirmation - read
    pub pending_delete: ReadSignal<PendingDelete>,
    /// Listing awaiting delete confirmation - write
    set_pending_delete: WriteSignal<PendingDelete>,
}

impl AppContext {
    pub fn new(pending_delete: (ReadSignal<PendingDelete>, WriteSignal<PendingDelete>)) -> Self {
        Self {
            pending_delete: pending_delete.0,
            set_pending_delete: pending_delete.1,
        }
    }

    /// Open the confirmation popup for `id`, replacing any earlier target
    pub fn request_delete(&self, id: ListingId) {
        self.set_pending_delete.update(|p| p.request(id));
    }

    /// Close the popup and hand back the target, if any
    pub fn confirm_delete(&self) -> Option<ListingId> {
        let mut target = None;
        self.set_pending_delete.update(|p| target = p.confirm());
        target
    }

    pub fn cancel_delete(&self) {
        self.set_pending_delete.update(|p| p.cancel());
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
