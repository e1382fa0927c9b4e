//! Edit Helpers
//!
//! Pure state transitions behind the inline editors: field diffing,
//! optimistic updates and the pending delete slot.

use serde::Serialize;

use crate::models::{Listing, ListingId};

/// `edit-listing` body; only changed fields are present
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditListingPayload {
    pub listing_id: ListingId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
}

impl EditListingPayload {
    pub fn has_changes(&self) -> bool {
        self.name.is_some() || self.total.is_some()
    }
}

/// Compare entry inputs against the displayed listing
pub fn diff_listing(current: &Listing, name_input: &str, total_input: &str) -> EditListingPayload {
    EditListingPayload {
        listing_id: current.listing_id.clone(),
        name: (name_input != current.name).then(|| name_input.to_string()),
        total: (total_input != current.total).then(|| total_input.to_string()),
    }
}

/// Apply a payload to a listing, returning the values it replaced
pub fn apply_listing_edit(listing: &mut Listing, payload: &EditListingPayload) -> Listing {
    let previous = listing.clone();
    if let Some(name) = &payload.name {
        listing.name = name.clone();
    }
    if let Some(total) = &payload.total {
        listing.total = total.clone();
    }
    previous
}

/// Undo an optimistic edit. A field is restored only while it still holds the
/// value this payload wrote; anything written since then wins.
pub fn revert_listing_edit(listing: &mut Listing, previous: &Listing, payload: &EditListingPayload) {
    if payload.name.as_ref() == Some(&listing.name) {
        listing.name = previous.name.clone();
    }
    if payload.total.as_ref() == Some(&listing.total) {
        listing.total = previous.total.clone();
    }
}

/// `edit-scoreboard` body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenameScoreboardPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RenameScoreboardPayload {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
    }
}

pub fn diff_title(current: &str, input: &str) -> RenameScoreboardPayload {
    RenameScoreboardPayload {
        title: (input != current).then(|| input.to_string()),
    }
}

/// Delete confirmation slot. Holds at most one target; a new request replaces the old one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingDelete {
    target: Option<ListingId>,
}

impl PendingDelete {
    pub fn request(&mut self, id: ListingId) {
        self.target = Some(id);
    }

    /// Take the target for deletion, leaving the slot empty
    pub fn confirm(&mut self) -> Option<ListingId> {
        self.target.take()
    }

    pub fn cancel(&mut self) {
        self.target = None;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&ListingId> {
        self.target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn unnamed(id: &str) -> Listing {
        Listing::new(ListingId::new(id))
    }

    #[test]
    fn test_unchanged_edit_sends_only_id() {
        let listing = unnamed("1");
        let payload = diff_listing(&listing, "Unnamed", "0");
        assert!(!payload.has_changes());
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "listing_id": "1" }));
    }

    #[test]
    fn test_score_only_edit() {
        let mut listing = unnamed("1");
        let payload = diff_listing(&listing, "Unnamed", "5");
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "listing_id": "1", "total": "5" })
        );

        apply_listing_edit(&mut listing, &payload);
        assert_eq!(listing.name, "Unnamed");
        assert_eq!(listing.total, "5");
    }

    #[test]
    fn test_revert_restores_touched_fields() {
        let mut listing = unnamed("9");
        let payload = diff_listing(&listing, "Blue", "3");
        let previous = apply_listing_edit(&mut listing, &payload);
        assert_eq!(listing.name, "Blue");

        revert_listing_edit(&mut listing, &previous, &payload);
        assert_eq!(listing, unnamed("9"));
    }

    #[test]
    fn test_revert_keeps_untouched_fields() {
        let mut listing = unnamed("9");
        let payload = diff_listing(&listing, "Unnamed", "3");
        let previous = apply_listing_edit(&mut listing, &payload);
        // A later edit to the name lands before the failure comes back
        listing.name = "Green".to_string();

        revert_listing_edit(&mut listing, &previous, &payload);
        assert_eq!(listing.name, "Green");
        assert_eq!(listing.total, "0");
    }

    #[test]
    fn test_revert_keeps_later_edit_of_same_field() {
        let mut listing = unnamed("9");
        let first = diff_listing(&listing, "Unnamed", "5");
        let first_previous = apply_listing_edit(&mut listing, &first);
        let second = diff_listing(&listing, "Unnamed", "7");
        apply_listing_edit(&mut listing, &second);

        // Second edit went through, first one fails afterwards
        revert_listing_edit(&mut listing, &first_previous, &first);
        assert_eq!(listing.total, "7");
    }

    #[test]
    fn test_rename_same_title_is_empty() {
        assert!(diff_title("Finals", "Finals").is_empty());
        let payload = diff_title("Finals", "Semis");
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({ "title": "Semis" }));
    }

    #[test]
    fn test_pending_delete_replaces_target() {
        let mut pending = PendingDelete::default();
        pending.request(ListingId::new("1"));
        pending.request(ListingId::new("2"));

        assert_eq!(pending.confirm(), Some(ListingId::new("2")));
        assert!(!pending.is_open());
        assert_eq!(pending.confirm(), None);
    }

    #[test]
    fn test_pending_delete_cancel_clears() {
        let mut pending = PendingDelete::default();
        pending.request(ListingId::new("42"));
        assert!(pending.is_open());

        pending.cancel();
        assert_eq!(pending.target(), None);
        assert_eq!(pending.confirm(), None);
    }
}
