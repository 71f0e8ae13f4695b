//! Error types for the `pathlamps-core` crate.
//!
//! All validation failures in the simulator surface as
//! [`SimulationError`]. Every variant is detected before any node is
//! evaluated, so a failed call never leaves a partial report behind.

/// Request-level validation errors.
///
/// These describe malformed input, not simulation outcomes: an
/// individual that reaches an unlit lamp *fails* its walk but the call
/// still succeeds.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// The lamp roster length disagrees with the path length.
    #[error("lamp count mismatch: {lamps} lamps for path length {path_length}")]
    LampCountMismatch {
        /// Number of lamps supplied.
        lamps: usize,
        /// The declared path length.
        path_length: usize,
    },

    /// A provided assignment has the wrong length.
    #[error("assignment length mismatch: {assignment} entries for path length {path_length}")]
    AssignmentLengthMismatch {
        /// Number of assignment entries supplied.
        assignment: usize,
        /// The declared path length.
        path_length: usize,
    },

    /// An individual's speed is zero or negative.
    #[error("non-positive speed {speed} for individual {individual}")]
    NonPositiveSpeed {
        /// 0-based input position of the offending individual.
        individual: usize,
        /// The rejected speed value.
        speed: f64,
    },

    /// An assignment entry names a lamp outside the roster.
    #[error("lamp index {lamp_index} at node {node} out of range for {lamp_count} lamps")]
    LampIndexOutOfRange {
        /// The node whose assignment entry is invalid.
        node: usize,
        /// The out-of-range lamp index.
        lamp_index: usize,
        /// Size of the lamp roster.
        lamp_count: usize,
    },
}
