//! Proxy error type and its HTTP rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::types::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("no upstream bearer token configured")]
    MissingToken,

    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream responded with status {status}")]
    Upstream {
        status: u16,
        body: Option<serde_json::Value>,
    },

    #[error("unexpected upstream payload: {0}")]
    Decode(String),
}

impl ProxyError {
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ProxyError::Upstream { body, .. } => body.clone(),
            _ => None,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
