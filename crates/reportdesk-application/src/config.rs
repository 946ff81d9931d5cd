//! Application configuration

use serde::{Deserialize, Serialize};

const DEFAULT_PER_PAGE: u32 = 10;
const MAX_PER_PAGE: u32 = 50;

/// Pagination limits for the list use case.
///
/// A request without `per_page` gets `default_per_page`; a request above
/// `max_per_page` is silently clamped to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
    #[serde(default = "max_per_page")]
    pub max_per_page: u32,
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn max_per_page() -> u32 {
    MAX_PER_PAGE
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PaginationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.default_per_page, 10);
        assert_eq!(config.max_per_page, 50);
    }

    #[test]
    fn explicit_fields_override_defaults() {
        let config: PaginationConfig =
            serde_json::from_str(r#"{"default_per_page": 5, "max_per_page": 25}"#).unwrap();
        assert_eq!(config.default_per_page, 5);
        assert_eq!(config.max_per_page, 25);
    }
}
