//! Listing Commands
//!
//! Frontend bindings for listing-related endpoints.

use serde::Serialize;

use super::{decode_body, post_json, ApiError};
use crate::config::Endpoint;
use crate::editing::EditListingPayload;
use crate::models::{ListingId, NewListing};

// ========================
// Argument Structs
// ========================

/// Serializes as `{}`
#[derive(Serialize)]
struct AddListingArgs {}

#[derive(Serialize)]
struct ListingIdArgs<'a> {
    listing_id: &'a ListingId,
}

// ========================
// Commands
// ========================

pub async fn add_listing() -> Result<NewListing, ApiError> {
    let body = post_json(Endpoint::AddListing, &AddListingArgs {}).await?;
    decode_body(&body)
}

/// Success carries no data worth reading
pub async fn edit_listing(payload: &EditListingPayload) -> Result<(), ApiError> {
    post_json(Endpoint::EditListing, payload).await?;
    Ok(())
}

pub async fn delete_listing(listing_id: &ListingId) -> Result<(), ApiError> {
    post_json(Endpoint::DeleteListing, &ListingIdArgs { listing_id }).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_listing_body_is_empty_object() {
        assert_eq!(serde_json::to_string(&AddListingArgs {}).unwrap(), "{}");
    }

    #[test]
    fn test_delete_listing_body() {
        let id = ListingId::new("42");
        assert_eq!(
            serde_json::to_value(ListingIdArgs { listing_id: &id }).unwrap(),
            json!({ "listing_id": "42" })
        );
    }
}
