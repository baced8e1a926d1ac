//! JSON shapes served by `GET /api/tweets/{handle}`.

use serde::{Deserialize, Serialize};

/// One post as returned by the upstream timeline endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of a successful feed response: `{ "data": [ ... ] }`.
///
/// `meta` is passed through untouched when the upstream provides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub data: Vec<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl FeedPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keep at most `max` posts, newest first as delivered upstream.
    pub fn truncated(mut self, max: usize) -> Self {
        self.data.truncate(max);
        self
    }
}

/// Body of a failed feed response (HTTP 500).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_upstream_shape_with_meta() {
        let raw = r#"{
            "data": [
                {"id": "1", "text": "first", "created_at": "2024-12-06T10:00:00.000Z"},
                {"id": "2", "text": "second"}
            ],
            "meta": {"result_count": 2}
        }"#;
        let page: FeedPage = serde_json::from_str(raw).expect("valid page");
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].created_at, None);
        assert!(page.meta.is_some());
    }

    #[test]
    fn missing_data_means_empty_page() {
        let page: FeedPage = serde_json::from_str(r#"{"meta": {"result_count": 0}}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn error_body_omits_absent_details() {
        let body = ErrorBody {
            error: "boom".into(),
            details: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"boom"}"#);
    }
}
