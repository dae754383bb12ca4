use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::EventList;

pub const EVENTS_PATH: &str = "/api/events/";

const FETCH_EVENTS_FAILED: &str = "Failed to fetch events";

/// Fetch the viewer's event list from `{base_url}/api/events/`.
///
/// `client` decides which cookies and default headers travel with the
/// request. A non-success response fails with [`crate::ClubError::Api`],
/// whose message is the server's `message` or `"Failed to fetch events"`.
#[instrument(skip(client))]
pub async fn get_events_data(client: &reqwest::Client, base_url: &str) -> Result<EventList> {
    let url = format!("{}{EVENTS_PATH}", base_url.trim_end_matches('/'));
    let events: EventList = api::get_json(client, &url, FETCH_EVENTS_FAILED).await?;

    debug!(count = events.events.len(), "fetched events");

    Ok(events)
}
