//! Error taxonomy for the forwarding path.
//!
//! Every failure is converted to a client-facing response at the point
//! of occurrence; nothing propagates past the request-handling call.
//! Streaming failures after the headers are committed are the one
//! exception: the copy stops and the connection closes, handled by the
//! HTTP stack below us.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors arising while relaying a single request.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The outbound request could not be built.
    #[error("Failed to create request: {0}")]
    Construction(#[from] axum::http::Error),

    /// The outbound call could not be completed (connection refused,
    /// DNS failure, timeout).
    #[error("Request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),
}

impl ForwardError {
    /// HTTP status presented to the client for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            ForwardError::Construction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ForwardError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
