//! The forwarding capability and its production implementation.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::response::IntoResponse;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::forward::error::ForwardError;
use crate::forward::target::UpstreamTarget;

/// The forwarding capability.
///
/// The serving layer depends on this trait rather than on the concrete
/// forwarder, so tests can substitute a double without any HTTP client
/// machinery.
#[async_trait]
pub trait Forward: Send + Sync {
    /// Relay one inbound request and produce the client-facing response.
    ///
    /// Implementations convert their own failures into error responses;
    /// the caller returns whatever comes back, unchanged.
    async fn forward(&self, request: Request<Body>) -> Response<Body>;
}

/// Production forwarder targeting one fixed upstream origin.
///
/// Safe to share across concurrent requests: the target is immutable
/// and the client manages its own connection pool internally.
pub struct UpstreamForwarder {
    target: UpstreamTarget,
    client: Client<HttpConnector, Body>,
}

impl UpstreamForwarder {
    /// Create a forwarder for the given upstream.
    ///
    /// The client is built once and pooled across invocations;
    /// observable behavior is the same as a fresh client per call.
    pub fn new(target: UpstreamTarget) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { target, client }
    }

    async fn proxy(&self, request: Request<Body>) -> Result<Response<Body>, ForwardError> {
        let (parts, body) = request.into_parts();
        let uri = self.target.uri_for(&parts.uri)?;

        tracing::debug!(
            method = %parts.method,
            target = %uri,
            "Forwarding request"
        );

        // The inbound body is handed over as a streaming source; large
        // or unbounded bodies never land in memory.
        let mut outbound = Request::builder()
            .method(parts.method)
            .uri(uri)
            .body(body)?;

        // Move the header multimap wholesale so repeated keys keep
        // their order and count. Host is the exception: the inbound
        // value names this relay, and the client derives the upstream
        // Host from the target URI.
        let mut headers = parts.headers;
        headers.remove(header::HOST);
        *outbound.headers_mut() = headers;

        let response: Response<hyper::body::Incoming> = self.client.request(outbound).await?;

        // Status and headers pass through untouched; the body is
        // re-wrapped as a stream and copied incrementally. Hyper drops
        // the upstream stream on every exit path, including client
        // disconnect mid-copy.
        let (parts, body) = response.into_parts();
        Ok(Response::from_parts(parts, Body::new(body)))
    }
}

#[async_trait]
impl Forward for UpstreamForwarder {
    async fn forward(&self, request: Request<Body>) -> Response<Body> {
        match self.proxy(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    status = %e.status(),
                    "Forwarding failed"
                );
                e.into_response()
            }
        }
    }
}
