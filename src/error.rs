/// All errors that can occur while talking to the club portal API or
/// persisting client-side preferences.
#[derive(thiserror::Error, Debug)]
pub enum ClubError {
    /// HTTP request failed (network, DNS, TLS, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server answered with a non-success status. The display text is the
    /// `message` taken from the error body, or a generic fallback.
    #[error("{message}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    /// Failed to read the response body.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The success body did not match the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// The request URL could not be built from the configured base URL.
    #[error("invalid request url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// An event lacks a field needed to answer the question asked of it.
    #[error("event has no {field}")]
    MissingField { field: &'static str },

    /// Failed to parse a date/time field of an event.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// Reading or writing persisted preferences failed.
    #[error("preference storage error at {path}: {source}")]
    Storage {
        path: String,
        source: std::io::Error,
    },

    /// The persisted preference file is not a JSON object of strings.
    #[error("corrupt preference file {path}: {source}")]
    StorageFormat {
        path: String,
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ClubError>;
