//! API Configuration
//!
//! Endpoint names and the base they resolve against.

use std::sync::OnceLock;

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Backend endpoints used by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AddListing,
    EditListing,
    DeleteListing,
    EditScoreboard,
    Auth,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::AddListing => "add-listing",
            Endpoint::EditListing => "edit-listing",
            Endpoint::DeleteListing => "delete-listing",
            Endpoint::EditScoreboard => "edit-scoreboard",
            Endpoint::Auth => "auth",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Empty means relative to the current page
    pub base: String,
}

impl ApiConfig {
    pub fn new(base: Option<&str>) -> Self {
        Self {
            base: base.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            endpoint.path().to_string()
        } else {
            format!("{}/{}", base, endpoint.path())
        }
    }
}

/// Install the page-wide config. Only the first call wins.
pub fn init(config: ApiConfig) {
    let _ = API_CONFIG.set(config);
}

pub fn endpoint_url(endpoint: Endpoint) -> String {
    API_CONFIG.get_or_init(ApiConfig::default).url(endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_by_default() {
        let config = ApiConfig::new(None);
        assert_eq!(config.url(Endpoint::AddListing), "add-listing");
        assert_eq!(config.url(Endpoint::Auth), "auth");
    }

    #[test]
    fn test_joins_base_without_double_slash() {
        let config = ApiConfig::new(Some("https://example.com/prod/"));
        assert_eq!(
            config.url(Endpoint::EditScoreboard),
            "https://example.com/prod/edit-scoreboard"
        );
        let config = ApiConfig::new(Some("/api"));
        assert_eq!(config.url(Endpoint::DeleteListing), "/api/delete-listing");
    }

    #[test]
    fn test_blank_base_is_relative() {
        assert_eq!(ApiConfig::new(Some("  ")).url(Endpoint::EditListing), "edit-listing");
    }
}
