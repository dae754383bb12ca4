use serde::{Deserialize, Serialize};

/// The state of an asynchronous load, as handed to a view.
///
/// Serialized with a `state` tag: `pending`, `success` or `failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LoadedData<T> {
    Pending { message: String },
    Success { data: T },
    Failed { message: String },
}

impl<T> LoadedData<T> {
    pub fn pending(message: impl Into<String>) -> Self {
        Self::Pending {
            message: message.into(),
        }
    }

    /// Settle a load from its outcome; errors keep only their display text.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Success { data },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// The status or failure message; `None` on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pending { message } | Self::Failed { message } => Some(message.as_str()),
            Self::Success { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadedData<U> {
        match self {
            Self::Pending { message } => LoadedData::Pending { message },
            Self::Success { data } => LoadedData::Success { data: f(data) },
            Self::Failed { message } => LoadedData::Failed { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClubError;

    #[test]
    fn test_serialized_shape() {
        let pending: LoadedData<u32> = LoadedData::pending("Loading events...");
        assert_eq!(
            serde_json::to_value(&pending).unwrap(),
            serde_json::json!({ "state": "pending", "message": "Loading events..." })
        );

        let success = LoadedData::Success { data: vec![1, 2] };
        assert_eq!(
            serde_json::to_value(&success).unwrap(),
            serde_json::json!({ "state": "success", "data": [1, 2] })
        );

        let failed: LoadedData<u32> =
            serde_json::from_str(r#"{"state":"failed","message":"boom"}"#).unwrap();
        assert_eq!(failed.message(), Some("boom"));
    }

    #[test]
    fn test_from_result() {
        let ok: LoadedData<u32> = LoadedData::from_result(Ok::<_, ClubError>(3));
        assert_eq!(ok.data(), Some(&3));
        assert!(ok.message().is_none());

        let failed: LoadedData<u32> = LoadedData::from_result(Err(ClubError::Api {
            url: "/api/events/".to_string(),
            status: reqwest::StatusCode::FORBIDDEN,
            message: "Not allowed".to_string(),
        }));
        assert_eq!(failed.message(), Some("Not allowed"));
        assert!(!failed.is_pending());
    }

    #[test]
    fn test_map_keeps_state() {
        let pending: LoadedData<u32> = LoadedData::pending("wait");
        assert_eq!(pending.map(|n| n * 2), LoadedData::pending("wait"));
        assert_eq!(
            LoadedData::Success { data: 2 }.map(|n| n * 2),
            LoadedData::Success { data: 4 }
        );
    }
}
