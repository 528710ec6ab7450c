//! Gateway error taxonomy and its mapping to transport status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur while serving an employee operation.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Upstream answered 429 and the retry budget is exhausted.
    #[error("upstream rate limited (429)")]
    RateLimited,

    /// Upstream has no record with this id.
    #[error("employee {0} not found")]
    NotFound(String),

    /// The upstream client itself could not be constructed at startup; no
    /// upstream call was made.
    #[error("failed to build upstream client: {0}")]
    ClientInit(String),

    /// Connection-level failure talking to the upstream service.
    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    /// Upstream answered with an unexpected non-success status.
    #[error("unexpected upstream status {0}")]
    UpstreamStatus(u16),

    /// Upstream body did not decode into the expected envelope.
    #[error("malformed upstream response: {0}")]
    Decode(String),

    /// Create input failed field constraints; nothing was sent upstream.
    #[error("invalid employee input: {0}")]
    Validation(String),

    /// An aggregate was requested over an empty record set.
    #[error("no employee records available")]
    EmptyDataset,
}

impl GatewayError {
    /// The retry policy applies to this error and nothing else.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited)
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            GatewayError::NotFound(_) | GatewayError::EmptyDataset => StatusCode::NOT_FOUND,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Unavailable(_)
            | GatewayError::UpstreamStatus(_)
            | GatewayError::Decode(_) => StatusCode::BAD_GATEWAY,
            GatewayError::ClientInit(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
