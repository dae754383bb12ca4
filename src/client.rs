use tracing::instrument;

use crate::api;
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::EventList;

/// The main entry point for talking to the club portal API.
///
/// `ClubClient` wraps a [`reqwest::Client`] together with the [`ApiConfig`]
/// that says where requests go.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> club_events::Result<()> {
/// use club_events::{ApiConfig, ClubClient};
///
/// let client = ClubClient::new(ApiConfig::new("https://portal.example.org"));
/// let record = client.get_events_data().await?;
/// println!("{} events", record.events.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClubClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ClubClient {
    /// Create a new client with a default HTTP client.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this to forward cookies or set default headers.
    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    /// Create a client configured from `PUBLIC_API_URL`.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the signed-in viewer's event list.
    #[instrument(skip(self))]
    pub async fn get_events_data(&self) -> Result<EventList> {
        api::events::get_events_data(&self.http, self.config.base_url()).await
    }
}
