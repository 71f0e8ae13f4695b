//! HTTP API server for the Path Lamps simulator.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /simulate`** -- run one simulation over a JSON
//!   [`SimulationRequest`](pathlamps_types::SimulationRequest) payload
//! - **`GET /`** -- a human-operable HTML form for constructing and
//!   submitting simulation payloads (no simulation logic of its own)
//!
//! # Architecture
//!
//! The simulator core is a pure function, so the server holds no
//! mutable state: [`AppState`] carries only the process-wide report
//! conventions chosen at startup. Every request is parsed into a
//! statically validated payload, handed to
//! [`pathlamps_core::simulate`], and the report (or a `400` error
//! body) is returned. Concurrent requests never interact.
//!
//! [`AppState`]: state::AppState

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
