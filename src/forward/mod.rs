//! The forwarding core.
//!
//! # Data Flow
//! ```text
//! inbound Request<Body>
//!     → target.rs (join upstream base + inbound path/query)
//!     → forwarder.rs (build outbound request, copy headers, execute)
//!     → error.rs (construction failure → 500, upstream call → 502)
//!     → Response<Body> streamed back to the client
//! ```
//!
//! # Design Decisions
//! - Bodies are streamed end to end; nothing is buffered
//! - Header multimaps are moved wholesale, preserving order and count
//! - Failures are converted to responses here, never propagated upward

pub mod error;
pub mod forwarder;
pub mod target;

pub use error::ForwardError;
pub use forwarder::{Forward, UpstreamForwarder};
pub use target::{TargetError, UpstreamTarget};
