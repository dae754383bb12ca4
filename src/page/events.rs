use serde::Serialize;
use tracing::instrument;

use crate::api::events::get_events_data;
use crate::error::Result;
use crate::model::EventList;
use crate::page::PageContext;

/// Data for the events page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPageData {
    pub events_record: EventList,
}

/// Load the events page. Fetch errors are returned to the caller as is.
#[instrument(skip(ctx))]
pub async fn load_events_page(ctx: &PageContext) -> Result<EventsPageData> {
    let events_record = get_events_data(&ctx.fetch, &ctx.api_base_url()).await?;
    Ok(EventsPageData { events_record })
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::events::EVENTS_PATH;
    use crate::config::ApiConfig;
    use crate::error::ClubError;
    use crate::test_support::EVENT_LIST_JSON;

    async fn server_with(response: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(EVENTS_PATH))
            .respond_with(response)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_load_matches_fetcher() {
        let server = server_with(ResponseTemplate::new(200).set_body_string(EVENT_LIST_JSON)).await;
        let ctx = PageContext::new(reqwest::Client::new(), ApiConfig::new(server.uri()));

        let page = load_events_page(&ctx).await.unwrap();
        let direct = get_events_data(&ctx.fetch, &server.uri()).await.unwrap();
        assert_eq!(page.events_record, direct);

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["eventsRecord"]["graduationYear"], "2026");
    }

    #[tokio::test]
    async fn test_relative_config_uses_origin() {
        let server = server_with(ResponseTemplate::new(200).set_body_string(EVENT_LIST_JSON)).await;
        let origin = reqwest::Url::parse(&server.uri()).unwrap();
        let ctx = PageContext::new(reqwest::Client::new(), ApiConfig::relative()).with_origin(origin);

        let page = load_events_page(&ctx).await.unwrap();
        assert_eq!(page.events_record.events.len(), 2);
    }

    #[tokio::test]
    async fn test_origin_path_is_ignored() {
        let server = server_with(ResponseTemplate::new(200).set_body_string(EVENT_LIST_JSON)).await;
        let origin = reqwest::Url::parse(&format!("{}/portal/events/", server.uri())).unwrap();
        let ctx = PageContext::new(reqwest::Client::new(), ApiConfig::relative()).with_origin(origin);

        let page = load_events_page(&ctx).await.unwrap();
        assert_eq!(page.events_record.events.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates() {
        let server = server_with(
            ResponseTemplate::new(401).set_body_string(r#"{"message":"Session expired"}"#),
        )
        .await;
        let ctx = PageContext::new(reqwest::Client::new(), ApiConfig::new(server.uri()));

        let err = load_events_page(&ctx).await.unwrap_err();
        assert!(matches!(err, ClubError::Api { .. }));
        assert_eq!(err.to_string(), "Session expired");
    }
}
