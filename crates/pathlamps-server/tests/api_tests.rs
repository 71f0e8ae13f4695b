//! Integration tests for the Path Lamps API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use pathlamps_core::SimulateOptions;
use pathlamps_server::router::build_router;
use pathlamps_server::state::AppState;
use pathlamps_types::ReportMode;
use serde_json::{Value, json};
use tower::ServiceExt;

fn sample_payload() -> Value {
    json!({
        "path_length": 5,
        "lamps": [
            {"bright": 1.0, "dark": 1.0},
            {"bright": 0.8, "dark": 1.2},
            {"bright": 1.5, "dark": 0.5},
            {"bright": 1.0, "dark": 1.0},
            {"bright": 0.7, "dark": 1.3}
        ],
        "individuals": [
            {"speed": 1.0, "start_delay": 0.0},
            {"speed": 0.8, "start_delay": 0.3}
        ]
    })
}

fn simulate_request(payload: &Value) -> Request<Body> {
    Request::post("/simulate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn test_index_returns_html_form() {
    let router = build_router(AppState::new());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_simulate_returns_full_report() {
    let router = build_router(AppState::new());

    let response = router.oneshot(simulate_request(&sample_payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_to_json(response.into_body()).await;

    // The unit-speed walker hits node 1 during the dark phase of lamp
    // {0.8, 1.2}, so the overall run fails.
    assert_eq!(report["success"], false);
    assert_eq!(report["lamp_assignment"], json!([0, 1, 2, 3, 4]));
    assert_eq!(report["results"][0]["individual_id"], 0);
    assert_eq!(report["results"][0]["success"], false);
    assert_eq!(report["results"][0]["timeline"][1]["lamp_bright"], false);
    assert_eq!(report["results"][0]["timeline"][1]["time"], 1.0);
    // Full-timeline mode records all five nodes despite the failure.
    assert_eq!(report["results"][0]["timeline"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_simulate_short_circuit_mode() {
    let options = SimulateOptions {
        mode: ReportMode::ShortCircuit,
        ..SimulateOptions::default()
    };
    let router = build_router(AppState::with_options(options));

    let response = router.oneshot(simulate_request(&sample_payload())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_to_json(response.into_body()).await;

    // Same verdict as full-timeline mode, but the trace stops at the
    // failing node.
    assert_eq!(report["success"], false);
    assert_eq!(report["results"][0]["timeline"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_lamp_count_mismatch_is_bad_request() {
    let router = build_router(AppState::new());

    let payload = json!({
        "path_length": 3,
        "lamps": [
            {"bright": 1.0, "dark": 1.0},
            {"bright": 1.0, "dark": 1.0}
        ],
        "individuals": []
    });

    let response = router.oneshot(simulate_request(&payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("lamp count mismatch"));
    assert!(body.get("results").is_none());
}

#[tokio::test]
async fn test_non_positive_speed_is_bad_request() {
    let router = build_router(AppState::new());

    let mut payload = sample_payload();
    payload["individuals"] = json!([{"speed": 0.0}]);

    let response = router.oneshot(simulate_request(&payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_to_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("non-positive speed"));
}

#[tokio::test]
async fn test_omitted_assignment_is_resolved_and_echoed() {
    let router = build_router(AppState::new());

    let payload = json!({
        "path_length": 2,
        "lamps": [
            {"bright": 1.0, "dark": 0.0},
            {"bright": 1.0, "dark": 0.0}
        ],
        "individuals": [{"speed": 2.0}]
    });

    let response = router.oneshot(simulate_request(&payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let report = body_to_json(response.into_body()).await;
    assert_eq!(report["success"], true);
    assert_eq!(report["lamp_assignment"], json!([0, 1]));
}

#[tokio::test]
async fn test_identical_requests_yield_identical_bodies() {
    let payload = sample_payload();

    let first = build_router(AppState::new())
        .oneshot(simulate_request(&payload))
        .await
        .unwrap();
    let second = build_router(AppState::new())
        .oneshot(simulate_request(&payload))
        .await
        .unwrap();

    let first_bytes = axum::body::to_bytes(first.into_body(), usize::MAX).await.unwrap();
    let second_bytes = axum::body::to_bytes(second.into_body(), usize::MAX).await.unwrap();
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = build_router(AppState::new());

    let response = router
        .oneshot(
            Request::post("/simulate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
