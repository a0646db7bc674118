//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handler.rs (thin adapter over the Forward capability)
//!     → forward subsystem (the actual relay)
//! ```

pub mod handler;
pub mod server;

pub use handler::{forward_handler, AppState};
pub use server::HttpServer;
