//! Request-handling entry point.
//!
//! The handler is a thin adapter: it hands the inbound request to the
//! injected [`Forward`] capability exactly once and returns whatever
//! response the capability produced. It reads and writes nothing
//! itself, which keeps streaming unconstrained and lets tests swap the
//! capability for a double.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::response::Response;

use crate::forward::Forward;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Arc<dyn Forward>,
}

/// Relay handler: pure delegation to the forwarding capability.
pub async fn forward_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response<Body> {
    state.forwarder.forward(request).await
}
