//! Integration tests for the invoice API.
//!
//! The router is exercised fully in-process, no listening socket needed.
//! Run with: cargo test --test api

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use facturas_api::api::{create_router, AppState};
use facturas_api::invoice::InvoiceStore;

/// Build a router around a fresh store.
fn app() -> Router {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    create_router(AppState::new(InvoiceStore::new(), handle))
}

/// Build a POST /facturas request with a JSON body.
fn create_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/facturas")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_then_get_round_trips_the_record() {
    let app = app();

    let response = app
        .clone()
        .oneshot(create_request(r#"{"cliente": "ACME", "total": 1500}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 32);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(created["cliente"], json!("ACME"));
    assert_eq!(created["total"], json!(1500));

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/facturas/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn string_total_is_preserved_as_supplied() {
    let app = app();

    let response = app
        .oneshot(create_request(r#"{"cliente": "ACME", "total": "1500.50"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["total"], json!("1500.50"));
}

#[tokio::test]
async fn created_identifiers_are_distinct() {
    let app = app();

    let first = app
        .clone()
        .oneshot(create_request(r#"{"cliente": "ACME", "total": 1}"#))
        .await
        .unwrap();
    let second = app
        .oneshot(create_request(r#"{"cliente": "ACME", "total": 1}"#))
        .await
        .unwrap();

    let first = body_json(first).await;
    let second = body_json(second).await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn create_with_missing_field_returns_spanish_error() {
    let app = app();

    for body in [r#"{"cliente": "ACME"}"#, r#"{"total": 1500}"#, "{}"] {
        let response = app.clone().oneshot(create_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error = body_json(response).await;
        assert_eq!(error, json!({"error": "Datos incompletos"}));
    }
}

#[tokio::test]
async fn create_without_json_body_returns_spanish_error() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/facturas")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = body_json(response).await;
    assert_eq!(error, json!({"error": "Datos incompletos"}));
}

#[tokio::test]
async fn unknown_invoice_returns_spanish_not_found() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/facturas/0123456789abcdef0123456789abcdef")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error = body_json(response).await;
    assert_eq!(error, json!({"error": "Factura no encontrada"}));
}

#[tokio::test]
async fn list_returns_entire_mapping_keyed_by_id() {
    let app = app();

    let first = app
        .clone()
        .oneshot(create_request(r#"{"cliente": "ACME", "total": 100}"#))
        .await
        .unwrap();
    let second = app
        .clone()
        .oneshot(create_request(r#"{"cliente": "Globex", "total": "200.00"}"#))
        .await
        .unwrap();

    let first = body_json(first).await;
    let second = body_json(second).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/facturas")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(response).await;
    let map = listing.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map[first["id"].as_str().unwrap()], first);
    assert_eq!(map[second["id"].as_str().unwrap()], second);
}

#[tokio::test]
async fn home_returns_static_info_payload() {
    let app = app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let info = body_json(response).await;
    assert_eq!(info["mensaje"], json!("Microservicio de Facturas activo 🚀"));
    assert_eq!(info["endpoints"]["crear_factura"], json!("POST /facturas"));
    assert_eq!(
        info["endpoints"]["obtener_factura"],
        json!("GET /facturas/<id>")
    );
    assert_eq!(info["endpoints"]["listar_facturas"], json!("GET /facturas"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await;
    assert_eq!(health, json!({"status": "ok"}));
}
