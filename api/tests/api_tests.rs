//! Integration tests for the NutriGuard HTTP API.
//!
//! The router is exercised directly with `tower::ServiceExt::oneshot`;
//! the analyzer runs with zero simulated latency.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use nutriguard_api::application::http::server::http_server;
use nutriguard_api::args::{AnalysisArgs, Args, LogArgs, ServerArgs};

fn test_args() -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        analysis: AnalysisArgs { latency_ms: 0 },
        log: LogArgs {
            json: false,
            filter: "info".to_string(),
        },
    }
}

fn setup_app() -> axum::Router {
    let state = http_server::state(Arc::new(test_args()));
    http_server::router(state).expect("router should build")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("should read body");
    serde_json::from_slice(&bytes).expect("should parse JSON")
}

// ---------------------------------------------------------------------------
// /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_healthy_and_model_version() {
    let app = setup_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model_version"], "nutriguard-v1.2.0");
}

// ---------------------------------------------------------------------------
// /analyze
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_returns_result_with_derived_review_flag() {
    let app = setup_app();

    let response = app
        .oneshot(post_json(
            "/analyze",
            &json!({ "food_description": "grilled chicken with rice" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert!(body["food_name"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body["calories"].as_i64().unwrap() >= 0);
    assert_eq!(body["model_version"], "nutriguard-v1.2.0");

    let confidence = body["confidence_score"].as_f64().unwrap();
    assert!((0.70..=0.99).contains(&confidence));
    assert_eq!(
        body["requires_human_review"].as_bool().unwrap(),
        confidence < 0.85
    );
}

#[tokio::test]
async fn analyze_accepts_an_absent_body() {
    let app = setup_app();

    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_rejects_an_oversized_description() {
    let app = setup_app();

    let response = app
        .oneshot(post_json(
            "/analyze",
            &json!({ "food_description": "x".repeat(5001) }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Validation Error");
    assert_eq!(body["details"][0]["field"], "food_description");
}

// ---------------------------------------------------------------------------
// /feed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn feed_returns_all_six_scans_with_consistent_flags() {
    let app = setup_app();

    let response = app.oneshot(get("/feed")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total"], 6);
    assert_eq!(body["model_version"], "nutriguard-v1.2.0");

    let scans = body["scans"].as_array().unwrap();
    assert_eq!(scans.len(), 6);

    let mut flagged = 0;
    for (i, scan) in scans.iter().enumerate() {
        assert_eq!(scan["id"], format!("scan-{}", i + 1));
        let confidence = scan["confidence"].as_f64().unwrap();
        let requires_review = scan["requires_review"].as_bool().unwrap();
        assert_eq!(requires_review, confidence < 0.85);
        assert_eq!(
            scan["status"],
            if requires_review { "flagged" } else { "verified" }
        );
        if requires_review {
            flagged += 1;
        }
    }
    assert_eq!(body["flagged_count"], flagged);
    assert_eq!(scans[0]["timestamp"], "Just now");
    assert_eq!(scans[1]["timestamp"], "2 mins ago");
}

// ---------------------------------------------------------------------------
// /feedback and /metrics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn metrics_without_feedback_report_baseline() {
    let app = setup_app();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["precision"], 0.92);
    assert_eq!(body["sample_size"], 0);
    assert_eq!(body["drift_status"], "Stable");
    assert_eq!(body["drift_threshold"], 0.85);
    assert_eq!(body["model_version"], "nutriguard-v1.2.0");
}

#[tokio::test]
async fn feedback_accumulates_and_drives_drift_detection() {
    let app = setup_app();

    for (i, is_correct) in [true, true, false, true].into_iter().enumerate() {
        let response = app
            .clone()
            .oneshot(post_json(
                "/feedback",
                &json!({
                    "scan_id": format!("scan-{}", i + 1),
                    "is_correct": is_correct,
                    "actual_food": "Quinoa Salad",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = extract_json(response.into_body()).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["total_feedback_count"], i + 1);
    }

    let response = app.oneshot(get("/metrics")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["precision"], 0.75);
    assert_eq!(body["sample_size"], 4);
    assert_eq!(body["drift_status"], "Drift Detected");
}

#[tokio::test]
async fn missing_feedback_field_is_rejected_without_mutating_the_store() {
    let app = setup_app();

    let response = app
        .clone()
        .oneshot(post_json(
            "/feedback",
            &json!({ "scan_id": "scan-1", "actual_food": "Apple" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Missing required field: is_correct");

    // The rejected submission must not have been recorded.
    let response = app.oneshot(get("/metrics")).await.unwrap();
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["sample_size"], 0);
    assert_eq!(body["precision"], 0.92);
}

#[tokio::test]
async fn feedback_without_a_body_is_a_bad_request() {
    let app = setup_app();

    let request = Request::builder()
        .method("POST")
        .uri("/feedback")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_routes_get_a_json_not_found() {
    let app = setup_app();

    let response = app.oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Not Found");
}
