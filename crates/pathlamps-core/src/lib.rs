//! Lamp timing model and path simulator for the Path Lamps service.
//!
//! This crate owns the deterministic computation at the heart of the
//! service: given lamp duty cycles, a node-to-lamp assignment, and
//! individual speed/delay parameters, decide whether each individual
//! reaches every node while its lamp is lit.
//!
//! # Modules
//!
//! - [`timing`] -- The periodic lamp-state predicate [`is_lit`].
//! - [`simulate`] -- Input validation and the per-individual walk
//!   evaluation, [`simulate`](simulate::simulate).
//! - [`error`] -- The [`SimulationError`] validation taxonomy.
//! - [`config`] -- Configuration loading from `pathlamps.yaml` into
//!   strongly-typed structs.
//!
//! Every invocation is a pure function of its inputs: no shared state,
//! no I/O, no interior mutability. Concurrent callers need no locking.
//!
//! [`is_lit`]: timing::is_lit
//! [`SimulationError`]: error::SimulationError

pub mod config;
pub mod error;
pub mod simulate;
pub mod timing;

pub use config::{AppConfig, ConfigError};
pub use error::SimulationError;
pub use simulate::{SimulateOptions, simulate};
pub use timing::is_lit;
