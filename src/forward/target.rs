//! Upstream target address handling.
//!
//! The base address is parsed once at startup; each request then derives
//! its outbound URI by reusing the inbound path and query verbatim.

use axum::http::uri::{Authority, Scheme};
use axum::http::Uri;
use thiserror::Error;

/// Error type for base-URL parsing.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("invalid URL: {0}")]
    Invalid(#[from] axum::http::uri::InvalidUri),

    #[error("base URL must include a scheme (e.g. http://)")]
    MissingScheme,

    #[error("base URL must include a host")]
    MissingAuthority,

    #[error("base URL must not carry a path, query, or fragment")]
    UnexpectedPathOrQuery,
}

/// The fixed upstream origin all requests are forwarded to.
///
/// Holds only scheme and authority; the per-request path and query come
/// from the inbound request, untouched.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    scheme: Scheme,
    authority: Authority,
}

impl UpstreamTarget {
    /// Parse a base URL such as `http://localhost:8081`.
    ///
    /// Rejects base URLs carrying a path or query, since joining those
    /// with the inbound path has no single obvious meaning.
    pub fn parse(base_url: &str) -> Result<Self, TargetError> {
        let uri: Uri = base_url.parse()?;

        let scheme = uri.scheme().cloned().ok_or(TargetError::MissingScheme)?;
        let authority = uri
            .authority()
            .cloned()
            .ok_or(TargetError::MissingAuthority)?;

        if uri.path() != "/" && !uri.path().is_empty() {
            return Err(TargetError::UnexpectedPathOrQuery);
        }
        if uri.query().is_some() {
            return Err(TargetError::UnexpectedPathOrQuery);
        }

        Ok(Self { scheme, authority })
    }

    /// Build the outbound URI for one inbound request.
    ///
    /// The inbound path and raw query are reused as-is: no re-encoding,
    /// no parameter reordering, and the query separator appears only
    /// when the caller actually sent a query.
    pub fn uri_for(&self, inbound: &Uri) -> Result<Uri, axum::http::Error> {
        let path_and_query = inbound
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");

        Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(path_and_query)
            .build()
    }
}
