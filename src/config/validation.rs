//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses as a socket address
//! - Check the upstream base URL is a usable forwarding target
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::forward::target::{TargetError, UpstreamTarget};

/// A single semantic validation failure.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {value:?} is not a socket address: {source}")]
    InvalidBindAddress {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("upstream.base_url {value:?} is not a usable upstream: {source}")]
    InvalidUpstream { value: String, source: TargetError },
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(source) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::InvalidBindAddress {
            value: config.listener.bind_address.clone(),
            source,
        });
    }

    if let Err(source) = UpstreamTarget::parse(&config.upstream.base_url) {
        errors.push(ValidationError::InvalidUpstream {
            value: config.upstream.base_url.clone(),
            source,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
