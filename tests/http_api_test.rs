// ABOUTME: Integration tests for the HTTP boundary
// ABOUTME: Drives the assembled router directly and checks status codes and the error envelope

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ZenithFit Studio

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use zenith_booking::config::ServerConfig;
use zenith_booking::database::test_utils::create_test_db;
use zenith_booking::routes;
use zenith_booking::server::ServerResources;

async fn test_router() -> Router {
    let database = create_test_db().await.unwrap();
    let config = ServerConfig {
        http_port: 0,
        database_url: "sqlite::memory:".into(),
        log_level: "info".into(),
    };
    routes::router(Arc::new(ServerResources::new(database, config)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn class_body(name: &str, slots: i64) -> Value {
    json!({
        "name": name,
        "datetime": "2025-07-06T08:00:00",
        "instructor": "Ana",
        "slots": slots,
    })
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_router().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn create_then_get_class() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/classes", &class_body("Yoga", 5)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Yoga");

    let response = app
        .oneshot(get(&format!("/api/classes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["name"], "Yoga");
    assert_eq!(fetched["slots"], 5);
}

#[tokio::test]
async fn unknown_class_maps_to_not_found_envelope() {
    let app = test_router().await;

    let response = app.oneshot(get("/api/classes/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");
    assert_eq!(body["error"]["message"], "Class 999 not found");
}

#[tokio::test]
async fn full_class_maps_to_conflict_envelope() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/classes", &class_body("Pilates", 1)))
        .await
        .unwrap();
    let class_id = body_json(response).await["id"].as_i64().unwrap();

    let booking = json!({
        "class_id": class_id,
        "client_name": "Ana",
        "client_email": "ana@example.com",
    });

    let response = app
        .clone()
        .oneshot(post_json("/api/bookings", &booking))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(post_json("/api/bookings", &booking))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NO_SLOTS_AVAILABLE");
}

#[tokio::test]
async fn invalid_timezone_maps_to_bad_request_envelope() {
    let app = test_router().await;

    let response = app
        .oneshot(get("/api/classes?timezone=Moon/Base"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_TIMEZONE");
    assert_eq!(body["error"]["message"], "Invalid timezone: Moon/Base");
}

#[tokio::test]
async fn malformed_email_maps_to_bad_request_envelope() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/classes", &class_body("Spin", 5)))
        .await
        .unwrap();
    let class_id = body_json(response).await["id"].as_i64().unwrap();

    let booking = json!({
        "class_id": class_id,
        "client_name": "Ana",
        "client_email": "not-an-address",
    });

    let response = app
        .oneshot(post_json("/api/bookings", &booking))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn listing_projects_times_into_the_requested_zone() {
    let app = test_router().await;

    app.clone()
        .oneshot(post_json("/api/classes", &class_body("Sunrise Yoga", 5)))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/classes?timezone=UTC"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body[0]["datetime"], "2025-07-06T02:30:00+00:00");
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(post_json("/api/classes", &class_body("Doomed", 5)))
        .await
        .unwrap();
    let id = body_json(response).await["id"].as_i64().unwrap();

    let delete = |id: i64| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/classes/{id}"))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete(id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(delete(id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
