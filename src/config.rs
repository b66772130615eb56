//! Client Configuration
//!
//! Backend location and browser-side constants.

/// Backend used when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5112/api";

/// `localStorage` key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// How long success messages stay visible
pub const FLASH_DURATION_MS: u32 = 3_000;

/// Name used in log lines
pub const APP_NAME: &str = "ProjectManager";

/// Log lines kept for the in-app log panel
pub const LOG_HISTORY_LINES: usize = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `API_BASE_URL` baked in by the bundler, falling back to localhost
    pub fn from_env() -> Self {
        Self::resolve(option_env!("API_BASE_URL"))
    }

    fn resolve(configured: Option<&str>) -> Self {
        match configured {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_localhost() {
        assert_eq!(ApiConfig::resolve(None).base_url, DEFAULT_API_BASE_URL);
        assert_eq!(ApiConfig::resolve(Some("  ")).base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig::new("https://pm.example.com/api/");
        assert_eq!(config.url("/projects/4"), "https://pm.example.com/api/projects/4");
        assert_eq!(config.url("auth/login"), "https://pm.example.com/api/auth/login");
    }
}
