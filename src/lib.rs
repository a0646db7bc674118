//! Single-upstream HTTP forwarding relay.
//!
//! Accepts inbound HTTP requests on a local port and relays them,
//! unmodified, to one fixed upstream origin, returning the upstream's
//! response verbatim to the original caller.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────┐
//!                     │               HTTP RELAY                  │
//!                     │                                           │
//!  Client Request     │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!  ───────────────────┼─▶│  http   │──▶│ handler │──▶│ forward │──┼──▶ Upstream
//!                     │  │ server  │   │(adapter)│   │  (core) │  │    Origin
//!  Client Response    │  └─────────┘   └─────────┘   └────┬────┘  │
//!  ◀──────────────────┼───────────────────────────────────┘       │
//!                     │                                           │
//!                     │  ┌─────────────────────────────────────┐  │
//!                     │  │        Cross-Cutting Concerns       │  │
//!                     │  │  ┌────────┐ ┌─────────┐ ┌─────────┐ │  │
//!                     │  │  │ config │ │ tracing │ │lifecycle│ │  │
//!                     │  │  └────────┘ └─────────┘ └─────────┘ │  │
//!                     │  └─────────────────────────────────────┘  │
//!                     └───────────────────────────────────────────┘
//! ```
//!
//! The forwarding core is deliberately a single-hop, single-destination
//! pass-through: no retries, no load balancing, no TLS termination, no
//! request rewriting. Multi-valued headers survive the round trip with
//! order and count intact, and request/response bodies are streamed
//! rather than buffered.

// Core subsystems
pub mod config;
pub mod forward;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
