/// Environment variable holding the public API base URL.
pub const API_URL_ENV: &str = "PUBLIC_API_URL";

/// Where API requests are sent.
///
/// An empty base URL means requests use relative paths, which only resolve
/// when an origin is supplied (see [`crate::page::PageContext`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// A config that sends requests to relative paths.
    pub fn relative() -> Self {
        Self::default()
    }

    /// Read the base URL from `PUBLIC_API_URL`; unset means relative.
    pub fn from_env() -> Self {
        std::env::var(API_URL_ENV)
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_relative(&self) -> bool {
        self.base_url.is_empty()
    }
}
