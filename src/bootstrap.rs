//! Page Bootstrap
//!
//! Initial state embedded by the server in `<script id="scoreboard-state">`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::models::{Listing, ListingId};

pub const STATE_ELEMENT_ID: &str = "scoreboard-state";

/// Which server-rendered page we are mounted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Index,
    #[default]
    Edit,
    Login,
}

/// Scores arrive either keyed by id (storage shape) or as a plain list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scores {
    List(Vec<Listing>),
    Map(KeyedListings),
}

/// Values of an id-keyed object, in document order
#[derive(Debug, Clone)]
struct KeyedListings(Vec<Listing>);

impl<'de> Deserialize<'de> for KeyedListings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedVisitor;

        impl<'de> Visitor<'de> for KeyedVisitor {
            type Value = KeyedListings;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of listings keyed by id")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut listings = Vec::new();
                while let Some((_, listing)) = map.next_entry::<ListingId, Listing>()? {
                    listings.push(listing);
                }
                Ok(KeyedListings(listings))
            }
        }

        deserializer.deserialize_map(KeyedVisitor)
    }
}

impl Default for Scores {
    fn default() -> Self {
        Scores::List(Vec::new())
    }
}

impl From<Scores> for Vec<Listing> {
    fn from(scores: Scores) -> Self {
        match scores {
            Scores::List(list) => list,
            Scores::Map(KeyedListings(listings)) => listings,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawPageState {
    #[serde(default)]
    page: PageKind,
    #[serde(default, alias = "name")]
    title: String,
    #[serde(default)]
    api_base: Option<String>,
    #[serde(default)]
    scores: Scores,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageState {
    pub page: PageKind,
    pub title: String,
    pub api_base: Option<String>,
    pub listings: Vec<Listing>,
}

impl From<RawPageState> for PageState {
    fn from(raw: RawPageState) -> Self {
        Self {
            page: raw.page,
            title: raw.title,
            api_base: raw.api_base,
            listings: raw.scores.into(),
        }
    }
}

pub fn parse_page_state(text: &str) -> Result<PageState, String> {
    if text.trim().is_empty() {
        return Ok(PageState::default());
    }
    serde_json::from_str::<RawPageState>(text)
        .map(PageState::from)
        .map_err(|e| e.to_string())
}

/// Read the embedded state from the document, falling back to defaults
pub fn load_page_state() -> PageState {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(STATE_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .unwrap_or_default();

    match parse_page_state(&text) {
        Ok(state) => state,
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Bad page state: {}", e).into());
            PageState::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_blob_uses_defaults() {
        let state = parse_page_state("").unwrap();
        assert_eq!(state.page, PageKind::Edit);
        assert!(state.listings.is_empty());
        assert_eq!(state.api_base, None);
    }

    #[test]
    fn test_scores_as_map_keeps_document_order() {
        let state = parse_page_state(
            r#"{
                "page": "index",
                "name": "Trivia Night",
                "scores": {
                    "b": { "listing_id": "b", "name": "Owls", "total": 4 },
                    "a": { "listing_id": "a", "total": 0 }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(state.page, PageKind::Index);
        assert_eq!(state.title, "Trivia Night");
        let ids: Vec<_> = state.listings.iter().map(|l| l.listing_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(state.listings[0].total, "4");
        assert_eq!(state.listings[1].name, "Unnamed");
    }

    #[test]
    fn test_scores_as_list_keeps_order() {
        let state = parse_page_state(
            r#"{ "page": "edit", "title": "League", "api_base": "/prod",
                 "scores": [ { "listing_id": 2 }, { "listing_id": 1 } ] }"#,
        )
        .unwrap();
        let ids: Vec<_> = state.listings.iter().map(|l| l.listing_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(state.api_base.as_deref(), Some("/prod"));
    }

    #[test]
    fn test_login_page() {
        let state = parse_page_state(r#"{ "page": "login" }"#).unwrap();
        assert_eq!(state.page, PageKind::Login);
    }

    #[test]
    fn test_malformed_blob_is_error() {
        assert!(parse_page_state("{ not json").is_err());
        assert!(parse_page_state(r#"{ "page": "admin" }"#).is_err());
    }
}
