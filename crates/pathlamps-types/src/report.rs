//! Outbound payload types for a completed simulation.

use serde::{Deserialize, Serialize};

/// One evaluated node on an individual's walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeVisit {
    /// The 0-based node index.
    pub node: usize,
    /// Arrival time at the node, rounded to six decimal places for
    /// display. The lit/unlit evaluation uses the unrounded time.
    pub time: f64,
    /// The lamp guarding this node, as an index into the lamp roster.
    pub lamp_index: usize,
    /// Whether the lamp was in its bright phase at arrival.
    pub lamp_bright: bool,
}

/// Per-individual outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualResult {
    /// Display id for the individual. The base (0 or 1) is chosen by
    /// the caller via [`IdBase`](crate::mode::IdBase).
    pub individual_id: usize,
    /// The individual's walking speed, echoed from the request.
    pub speed: f64,
    /// The individual's start delay, echoed from the request.
    pub start_delay: f64,
    /// True iff the lamp was lit at every evaluated node.
    pub success: bool,
    /// The per-node trace. Complete in full-timeline mode; truncated
    /// at the first unlit node in short-circuit mode.
    pub timeline: Vec<NodeVisit>,
}

/// The aggregate result of one simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Logical AND across all individual successes. Vacuously true
    /// when the request carried no individuals.
    pub success: bool,
    /// The resolved node-to-lamp assignment, including the identity
    /// default when the request omitted one.
    pub lamp_assignment: Vec<usize>,
    /// Per-individual outcomes in request order.
    pub results: Vec<IndividualResult>,
}
