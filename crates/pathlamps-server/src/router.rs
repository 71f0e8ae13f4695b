//! Axum router construction for the Path Lamps API.
//!
//! Assembles the form page and the simulation endpoint into a single
//! [`Router`] with CORS middleware enabled so the form can also be
//! hosted elsewhere during development.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// Routes:
/// - `GET /` -- HTML form page
/// - `POST /simulate` -- run one simulation
///
/// CORS allows any origin for development. In production this should
/// be restricted.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/simulate", post(handlers::run_simulation))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
