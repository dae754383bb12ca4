pub(crate) mod events;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{ClubError, Result};

/// Send a JSON `GET` to `url` and decode the success body.
///
/// On a non-success status the body is read as a JSON error payload
/// (anything unreadable counts as `{}`), logged, and turned into
/// [`ClubError::Api`] carrying the payload's `message` or `fallback`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    fallback: &str,
) -> Result<T> {
    reqwest::Url::parse(url).map_err(|e| ClubError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    debug!(url, "fetching json");

    let response = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| ClubError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        let payload = match response.text().await {
            Ok(body) => serde_json::from_str(&body).unwrap_or_else(|_| empty_payload()),
            Err(_) => empty_payload(),
        };
        error!(url, %status, %payload, "request failed");
        return Err(ClubError::Api {
            url: url.to_owned(),
            status,
            message: error_message(&payload, fallback),
        });
    }

    let body = response.text().await.map_err(|e| ClubError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| ClubError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

fn empty_payload() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Pick the `message` of an error payload the way a JavaScript client would
/// show `error.message || fallback`: falsy values (missing, `null`, `false`,
/// `0`, `""`) fall back, anything else is rendered with `String(value)`.
fn error_message(payload: &Value, fallback: &str) -> String {
    match payload.get("message") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => fallback.to_string(),
        Some(Value::String(s)) if s.is_empty() => fallback.to_string(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => fallback.to_string(),
        Some(message) => js_string(message),
    }
}

/// `String(value)` for a JSON value: arrays join their elements with `,`
/// (null elements become empty), objects become `[object Object]`.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
