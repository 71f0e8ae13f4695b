//! Shared application state for the API server.
//!
//! The simulator is stateless, so [`AppState`] carries only the
//! immutable report conventions selected at startup. Nothing here is
//! written after construction; the state is a small `Copy` value
//! cloned into each handler invocation.

use pathlamps_core::SimulateOptions;

/// Process-wide state injected into handlers via Axum's `State`
/// extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    /// Report conventions applied to every simulation call.
    pub options: SimulateOptions,
}

impl AppState {
    /// Create state with the original service's conventions (full
    /// timelines, 0-based ids).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state with explicit report conventions.
    pub const fn with_options(options: SimulateOptions) -> Self {
        Self { options }
    }
}
