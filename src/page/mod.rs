pub(crate) mod events;

pub use events::{load_events_page, EventsPageData};

use crate::config::ApiConfig;

/// Per-request context handed to page loaders.
///
/// `fetch` is the client bound to the incoming request, so cookies and
/// headers it was built with are forwarded. `origin` resolves relative API
/// paths when the config has no base URL.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub fetch: reqwest::Client,
    pub origin: Option<reqwest::Url>,
    pub config: ApiConfig,
}

impl PageContext {
    pub fn new(fetch: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            fetch,
            origin: None,
            config,
        }
    }

    pub fn with_origin(mut self, origin: reqwest::Url) -> Self {
        self.origin = Some(origin);
        self
    }

    /// The base URL API requests go to: the configured one, else the
    /// scheme, host and port of `origin`. Any path on `origin` is ignored,
    /// since relative API paths are absolute paths on that host.
    pub fn api_base_url(&self) -> String {
        if !self.config.is_relative() {
            return self.config.base_url().to_string();
        }
        self.origin
            .as_ref()
            .map(|o| o.origin().ascii_serialization())
            .unwrap_or_default()
    }
}
