use serde::{Deserialize, Serialize};

/// Used when `TWOTABLE_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const WAITLIST_PATH: &str = "/api/waitlist";
pub const VENUE_APPLICATION_PATH: &str = "/api/venue-application";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub api_base: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Build from an optional base URL (typically `option_env!("TWOTABLE_API_BASE")`).
    /// Blank values fall back to the default; a trailing slash is dropped.
    pub fn from_api_base(base: Option<&str>) -> Self {
        match base.map(str::trim).filter(|b| !b.is_empty()) {
            Some(b) => Self {
                api_base: b.trim_end_matches('/').to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn waitlist_url(&self) -> String {
        format!("{}{}", self.api_base, WAITLIST_PATH)
    }

    pub fn venue_application_url(&self) -> String {
        format!("{}{}", self.api_base, VENUE_APPLICATION_PATH)
    }
}
