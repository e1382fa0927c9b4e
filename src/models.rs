//! Frontend Models
//!
//! Data structures matching the scoreboard backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_LISTING_NAME: &str = "Unnamed";
pub const DEFAULT_LISTING_TOTAL: &str = "0";

/// Opaque listing identifier. The backend hands out uuids, older rows may be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ListingId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_text(deserializer).map(ListingId)
    }
}

/// Presentation state of an inline-editable row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Display,
    Entry,
}

impl EditMode {
    /// CSS `display` value of the read-only block
    pub fn data_display(self) -> &'static str {
        match self {
            EditMode::Display => "flex",
            EditMode::Entry => "none",
        }
    }

    /// CSS `display` value of the editable block
    pub fn entry_display(self) -> &'static str {
        match self {
            EditMode::Display => "none",
            EditMode::Entry => "flex",
        }
    }
}

/// Listing data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub listing_id: ListingId,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_total", deserialize_with = "de_text")]
    pub total: String,
    /// Mode the row is first rendered in
    #[serde(skip)]
    pub initial_mode: EditMode,
}

impl Listing {
    pub fn new(listing_id: ListingId) -> Self {
        Self {
            listing_id,
            name: default_name(),
            total: default_total(),
            initial_mode: EditMode::Display,
        }
    }

    /// A freshly added listing, opened straight into entry mode for naming
    pub fn created(created: NewListing) -> Self {
        Self {
            initial_mode: EditMode::Entry,
            ..Listing::from(created)
        }
    }
}

/// `add-listing` response; the backend may echo the initial fields
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewListing {
    pub listing_id: ListingId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub total: Option<String>,
}

impl From<NewListing> for Listing {
    fn from(created: NewListing) -> Self {
        let mut listing = Listing::new(created.listing_id);
        if let Some(name) = created.name {
            listing.name = name;
        }
        if let Some(total) = created.total {
            listing.total = total;
        }
        listing
    }
}

/// Error body returned by the backend on failed requests
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<u32>,
}

fn default_name() -> String {
    DEFAULT_LISTING_NAME.to_string()
}

fn default_total() -> String {
    DEFAULT_LISTING_TOTAL.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<TextOrNumber> for String {
    fn from(value: TextOrNumber) -> Self {
        match value {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Int(n) => n.to_string(),
            TextOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Accept a JSON string or number and keep its text form
pub fn de_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    TextOrNumber::deserialize(deserializer).map(String::from)
}

fn de_opt_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Option::<TextOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_id_from_string_or_number() {
        let id: ListingId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(id.as_str(), "42");
        let id: ListingId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_listing_defaults() {
        let listing: Listing = serde_json::from_str(r#"{"listing_id": "abc"}"#).unwrap();
        assert_eq!(listing.name, "Unnamed");
        assert_eq!(listing.total, "0");
        assert_eq!(listing.initial_mode, EditMode::Display);
    }

    #[test]
    fn test_listing_numeric_total() {
        let listing: Listing =
            serde_json::from_str(r#"{"listing_id": 7, "name": "Reds", "total": 12}"#).unwrap();
        assert_eq!(listing.listing_id, ListingId::new("7"));
        assert_eq!(listing.total, "12");
    }

    #[test]
    fn test_new_listing_into_listing() {
        let created: NewListing = serde_json::from_str(r#"{"listing_id": "x1", "total": 0}"#).unwrap();
        let listing = Listing::from(created);
        assert_eq!(listing.name, "Unnamed");
        assert_eq!(listing.total, "0");
    }

    #[test]
    fn test_created_listing_opens_in_entry_mode() {
        let created: NewListing = serde_json::from_str(r#"{"listing_id": "42"}"#).unwrap();
        let listing = Listing::created(created);
        assert_eq!(listing.listing_id.as_str(), "42");
        assert_eq!(listing.name, "Unnamed");
        assert_eq!(listing.total, "0");
        assert_eq!(listing.initial_mode, EditMode::Entry);
        assert_eq!(listing.initial_mode.data_display(), "none");
        assert_eq!(listing.initial_mode.entry_display(), "flex");
    }

    #[test]
    fn test_edit_mode_never_shows_both_blocks() {
        for mode in [EditMode::Display, EditMode::Entry] {
            let shown = [mode.data_display(), mode.entry_display()]
                .iter()
                .filter(|d| **d != "none")
                .count();
            assert_eq!(shown, 1);
        }
        assert_eq!(EditMode::Entry.entry_display(), "flex");
    }
}
