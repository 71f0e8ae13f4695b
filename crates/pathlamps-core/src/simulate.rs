//! The path simulator.
//!
//! [`simulate`] evaluates every individual's walk along the path:
//! arrival time at node `k` is `start_delay + k / speed`, and the walk
//! succeeds only if the lamp guarding each node is lit at the arrival
//! instant. All validation happens up front; a request that fails
//! validation produces no partial report.

use pathlamps_types::{
    IdBase, IndividualResult, NodeVisit, ReportMode, SimulationReport, SimulationRequest,
};
use tracing::debug;

use crate::error::SimulationError;
use crate::timing::is_lit;

/// Caller-selectable conventions for the produced report.
///
/// These never change which individuals succeed; they control the
/// verbosity of the per-node trace and the id labeling. See the
/// discussion on [`ReportMode`] and [`IdBase`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulateOptions {
    /// Full timeline versus stop-at-first-failure tracing.
    pub mode: ReportMode,
    /// 0-based versus 1-based individual ids in the report.
    pub id_base: IdBase,
}

/// Run one complete simulation over an immutable request.
///
/// Validates the request shape, resolves the node-to-lamp assignment
/// (defaulting to the identity mapping), walks every individual over
/// the path in input order, and aggregates the per-individual outcomes
/// into a [`SimulationReport`]. Deterministic: identical inputs always
/// produce identical reports.
///
/// # Errors
///
/// Returns a [`SimulationError`] when the lamp roster or assignment
/// length disagrees with `path_length`, when any individual has a
/// non-positive speed, or when an assignment entry names a lamp
/// outside the roster. Validation is fail-fast: no node is evaluated
/// and no partial report is produced.
pub fn simulate(
    request: &SimulationRequest,
    options: SimulateOptions,
) -> Result<SimulationReport, SimulationError> {
    let path_length = request.path_length;

    if request.lamps.len() != path_length {
        return Err(SimulationError::LampCountMismatch {
            lamps: request.lamps.len(),
            path_length,
        });
    }

    let assignment: Vec<usize> = match &request.lamp_assignment {
        Some(provided) => {
            if provided.len() != path_length {
                return Err(SimulationError::AssignmentLengthMismatch {
                    assignment: provided.len(),
                    path_length,
                });
            }
            provided.clone()
        }
        None => (0..path_length).collect(),
    };

    for (individual, spec) in request.individuals.iter().enumerate() {
        if spec.speed <= 0.0 {
            return Err(SimulationError::NonPositiveSpeed {
                individual,
                speed: spec.speed,
            });
        }
    }

    for (node, &lamp_index) in assignment.iter().enumerate() {
        if lamp_index >= request.lamps.len() {
            return Err(SimulationError::LampIndexOutOfRange {
                node,
                lamp_index,
                lamp_count: request.lamps.len(),
            });
        }
    }

    let eps = request.epsilon_check;
    let mut overall_success = true;
    let mut results = Vec::with_capacity(request.individuals.len());

    for (individual, spec) in request.individuals.iter().enumerate() {
        let dt_edge = 1.0 / spec.speed;
        let mut success = true;
        let mut timeline = Vec::new();

        for (node, &lamp_index) in assignment.iter().enumerate() {
            // Node indices are tiny relative to f64's 52-bit mantissa.
            #[allow(clippy::cast_precision_loss)]
            let t_node = spec.start_delay + (node as f64) * dt_edge;

            let lamp = request
                .lamps
                .get(lamp_index)
                .ok_or(SimulationError::LampIndexOutOfRange {
                    node,
                    lamp_index,
                    lamp_count: request.lamps.len(),
                })?;

            let lamp_bright = is_lit(t_node, lamp.bright, lamp.dark, eps);
            timeline.push(NodeVisit {
                node,
                time: round_display_time(t_node),
                lamp_index,
                lamp_bright,
            });

            if !lamp_bright {
                success = false;
                if options.mode == ReportMode::ShortCircuit {
                    break;
                }
            }
        }

        debug!(individual, success, nodes_evaluated = timeline.len(), "walk evaluated");

        let individual_id = match options.id_base {
            IdBase::ZeroBased => individual,
            IdBase::OneBased => individual.saturating_add(1),
        };

        overall_success = overall_success && success;
        results.push(IndividualResult {
            individual_id,
            speed: spec.speed,
            start_delay: spec.start_delay,
            success,
            timeline,
        });
    }

    Ok(SimulationReport {
        success: overall_success,
        lamp_assignment: assignment,
        results,
    })
}

/// Round an arrival time to six decimal places for display, matching
/// the report's wire format. Success evaluation never uses the rounded
/// value.
fn round_display_time(t: f64) -> f64 {
    (t * 1e6).round() / 1e6
}
