//! Caller-selectable reporting conventions.
//!
//! The simulator core computes the same success/failure bits regardless
//! of these settings; they only control how much per-node trace is
//! recorded and how individuals are labeled in the report.

use serde::{Deserialize, Serialize};

/// How much of the per-node trace an [`IndividualResult`] carries.
///
/// Both modes always agree on every individual's final success bit;
/// only the verbosity of the timeline differs.
///
/// [`IndividualResult`]: crate::report::IndividualResult
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// Evaluate and record every node, even after a failure.
    #[default]
    FullTimeline,
    /// Stop at the first unlit node; the timeline ends with the
    /// failing visit and the remaining nodes are never evaluated.
    ShortCircuit,
}

/// Display convention for individual ids in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdBase {
    /// The first individual is labeled 0.
    #[default]
    ZeroBased,
    /// The first individual is labeled 1.
    OneBased,
}
