//! Lifecycle management subsystem.
//!
//! Startup is ordered: config first, then the forwarder, then the
//! listener. Shutdown stops accepting, drains in-flight requests, and
//! exits.

pub mod shutdown;

pub use shutdown::Shutdown;
