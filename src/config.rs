//! Build-time Configuration
//!
//! Values are baked in by the Trunk build through environment variables.

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the todo API, without trailing slash
    pub api_url: String,
    pub token_key: String,
    pub log_level: log::Level,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("API_URL"), option_env!("LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(log::Level::Info);

        Self {
            api_url,
            token_key: TOKEN_STORAGE_KEY.to_string(),
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
