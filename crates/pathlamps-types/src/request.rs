//! Inbound payload types for a simulation request.
//!
//! A [`SimulationRequest`] describes one complete puzzle instance: the
//! path, the lamp roster, an optional node-to-lamp assignment, and the
//! individuals walking the path. Requests are self-contained values
//! with no lifecycle beyond a single simulation call.

use serde::{Deserialize, Serialize};

/// Default tolerance applied when comparing a phase against the bright
/// window. Requests that omit `epsilon_check` get this value.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Timing parameters for a single lamp.
///
/// A lamp blinks on a fixed duty cycle: lit for `bright` time units,
/// then unlit for `dark` time units, repeating forever from `t = 0`.
/// A lamp with `bright <= 0` (or a non-positive period) is never lit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LampSpec {
    /// Duration of the lit phase per period.
    pub bright: f64,
    /// Duration of the unlit phase per period.
    pub dark: f64,
}

/// One individual walking the path.
///
/// An individual traverses the unit-length edges between consecutive
/// nodes at constant `speed`, starting after `start_delay` time units.
/// Arrival time at node `k` is `start_delay + k / speed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndividualSpec {
    /// Walking speed in edges per time unit. Must be positive.
    pub speed: f64,
    /// Delay before the walk begins. Defaults to zero.
    #[serde(default)]
    pub start_delay: f64,
}

/// A complete simulation request payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Number of nodes on the path. Arrival times span nodes
    /// `0..path_length`.
    pub path_length: usize,
    /// The lamp roster. Must contain exactly `path_length` entries;
    /// lamps are identified by their 0-based position in this list.
    pub lamps: Vec<LampSpec>,
    /// Optional node-to-lamp mapping of length `path_length`. Entry `k`
    /// names the lamp guarding node `k`. Lamps may be reused or unused;
    /// no permutation invariant is enforced. When omitted, node `k`
    /// uses lamp `k`.
    #[serde(default)]
    pub lamp_assignment: Option<Vec<usize>>,
    /// The individuals to evaluate, in input order. May be empty, in
    /// which case the run is vacuously successful.
    pub individuals: Vec<IndividualSpec>,
    /// Tolerance for the bright-window comparison. Defaults to
    /// [`DEFAULT_EPSILON`].
    #[serde(default = "default_epsilon")]
    pub epsilon_check: f64,
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}
