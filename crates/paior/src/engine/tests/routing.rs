use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::engine::router::{create_report_handler, ReportRequest};

#[tokio::test]
async fn create_handler_echoes_target() {
    let request = ReportRequest {
        answers: primary_only(30, 20, 30, 20),
        target: Some("student".to_string()),
    };

    let response = create_report_handler(State(Arc::new(engine())), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["target"], "student");
    assert_eq!(payload["report"]["dominant"]["type_code"], "AI");
    assert_eq!(payload["report"]["dominant"]["factors"], json!(["I", "A"]));
    assert!(payload.get("generated_at").is_some());
}

#[tokio::test]
async fn report_route_accepts_payloads() {
    let body = json!({
        "answers": { "A1": 5, "A2": "5", "I1": 2, "P_싫증_1": 4 }
    });

    let response = router()
        .oneshot(
            Request::post("/api/v1/reports")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).expect("encode")))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["target"], serde_json::Value::Null);
    assert_eq!(payload["report"]["primary"]["A"], 10);
    assert_eq!(payload["report"]["secondary"]["boredom"], 4);
    assert_eq!(payload["report"]["dominant"]["shape"], "low_energy");
    assert_eq!(payload["report"]["primary_grades"]["A"], "low");
}

#[tokio::test]
async fn empty_body_object_still_produces_a_report() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/reports")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["report"]["dominant"]["factors"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/reports")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"answers\": [1, 2"))
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn reference_route_lists_vocabulary() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/reports/reference")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["primary"].as_array().map(Vec::len), Some(4));
    assert_eq!(payload["secondary"][2]["survey_key"], "완벽");
    assert_eq!(payload["secondary"][2]["slot"], "P3");
    assert_eq!(payload["tie_break_order"], json!(["I", "A", "R", "O"]));
    assert_eq!(payload["primary"][2]["tie_break_rank"], 1);
}
