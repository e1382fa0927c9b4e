//! Scoreboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap::PageState;
use crate::models::{Listing, ListingId};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ScoreboardState {
    /// Scoreboard title
    pub title: String,
    /// Listings in display order
    pub listings: Vec<Listing>,
}

impl From<&PageState> for ScoreboardState {
    fn from(page: &PageState) -> Self {
        Self {
            title: page.title.clone(),
            listings: page.listings.clone(),
        }
    }
}

/// Type alias for the store
pub type ScoreboardStore = Store<ScoreboardState>;

/// Get the scoreboard store from context
pub fn use_scoreboard_store() -> ScoreboardStore {
    expect_context::<ScoreboardStore>()
}

// ========================
// List Helpers
// ========================

/// Append a listing unless one with the same id is already present
pub fn push_listing(listings: &mut Vec<Listing>, listing: Listing) -> bool {
    if listings.iter().any(|l| l.listing_id == listing.listing_id) {
        return false;
    }
    listings.push(listing);
    true
}

pub fn remove_listing(listings: &mut Vec<Listing>, id: &ListingId) {
    listings.retain(|l| &l.listing_id != id);
}

pub fn find_listing<'a>(listings: &'a mut [Listing], id: &ListingId) -> Option<&'a mut Listing> {
    listings.iter_mut().find(|l| &l.listing_id == id)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_add_listing(store: &ScoreboardStore, listing: Listing) -> bool {
    push_listing(&mut store.listings().write(), listing)
}

pub fn store_remove_listing(store: &ScoreboardStore, id: &ListingId) {
    remove_listing(&mut store.listings().write(), id);
}

/// Run `f` on the listing with `id`, if it still exists
pub fn store_update_listing<R>(
    store: &ScoreboardStore,
    id: &ListingId,
    f: impl FnOnce(&mut Listing) -> R,
) -> Option<R> {
    find_listing(&mut store.listings().write(), id).map(f)
}

/// Snapshot of one listing
pub fn store_get_listing(store: &ScoreboardStore, id: &ListingId) -> Option<Listing> {
    store.listings().read().iter().find(|l| &l.listing_id == id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str) -> Listing {
        Listing::new(ListingId::new(id))
    }

    #[test]
    fn test_push_appends_at_end() {
        let mut listings = vec![listing("1"), listing("2")];
        assert!(push_listing(&mut listings, listing("3")));
        assert_eq!(listings.last().unwrap().listing_id, ListingId::new("3"));
        assert_eq!(listings.len(), 3);
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut listings = vec![listing("1")];
        assert!(!push_listing(&mut listings, listing("1")));
        assert_eq!(listings.len(), 1);
    }

    #[test]
    fn test_remove_listing() {
        let mut listings = vec![listing("41"), listing("42"), listing("43")];
        remove_listing(&mut listings, &ListingId::new("42"));
        let ids: Vec<_> = listings.iter().map(|l| l.listing_id.as_str()).collect();
        assert_eq!(ids, vec!["41", "43"]);
    }

    #[test]
    fn test_find_listing_mut() {
        let mut listings = vec![listing("a")];
        find_listing(&mut listings, &ListingId::new("a")).unwrap().total = "9".to_string();
        assert_eq!(listings[0].total, "9");
        assert!(find_listing(&mut listings, &ListingId::new("b")).is_none());
    }
}
