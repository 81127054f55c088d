/// Base URL used when `INCOME_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Frontend settings fixed at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("INCOME_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
