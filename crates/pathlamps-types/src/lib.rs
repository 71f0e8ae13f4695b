//! Shared type definitions for the Path Lamps simulator.
//!
//! This crate is the single source of truth for the payload types that
//! cross the simulator's request/response boundary. The core crate
//! consumes [`SimulationRequest`] and produces [`SimulationReport`];
//! the server crate moves both over HTTP as JSON.
//!
//! # Modules
//!
//! - [`request`] -- Inbound payload types (`LampSpec`, `IndividualSpec`,
//!   `SimulationRequest`)
//! - [`report`] -- Outbound payload types (`NodeVisit`,
//!   `IndividualResult`, `SimulationReport`)
//! - [`mode`] -- Caller-selectable reporting conventions (`ReportMode`,
//!   `IdBase`)

pub mod mode;
pub mod report;
pub mod request;

// Re-export all public types at crate root for convenience.
pub use mode::{IdBase, ReportMode};
pub use report::{IndividualResult, NodeVisit, SimulationReport};
pub use request::{DEFAULT_EPSILON, IndividualSpec, LampSpec, SimulationRequest};
