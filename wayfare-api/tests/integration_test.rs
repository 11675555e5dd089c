use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;
use wayfare_api::{app, AppState};
use wayfare_booking::{BookingService, BookingWorkflow};
use wayfare_store::Config;

fn setup() -> axum::Router {
    let service = BookingService::new(Arc::new(BookingWorkflow::with_sample_catalog()));
    app(AppState::new(service, vec!["http://localhost:5173".to_string()]))
}

fn setup_seeded(seed: u64) -> axum::Router {
    let mut config = Config::default();
    config.workflow.seed = Some(seed);
    app(AppState::from_config(&config).unwrap())
}

fn search_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/search")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let response = setup()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["status"], "ok");
}

#[tokio::test]
async fn test_search_books_best_options() {
    let response = setup()
        .oneshot(search_request(serde_json::json!({
            "from_city": "delhi",
            "to_city": "PARIS",
            "seat_preference": "Aisle"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let summary = json["summary"].as_str().unwrap();
    assert!(summary.contains("Vistara"));
    assert!(summary.contains("Hotel Le Grand"));
    assert_eq!(json["booked"], true);

    let transaction_id = json["transaction_id"].as_str().unwrap();
    assert!(transaction_id.starts_with("TXN-"));
    assert_eq!(transaction_id.len(), 10);

    let seat = json["seat_number"].as_str().unwrap();
    assert!(seat.ends_with('C') || seat.ends_with('D'));
}

#[tokio::test]
async fn test_search_without_matching_flight() {
    let response = setup()
        .oneshot(search_request(serde_json::json!({
            "from_city": "Tokyo",
            "to_city": "Paris",
            "seat_preference": "Window"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert!(json["summary"].as_str().unwrap().contains("No flights found"));
    assert_eq!(json["booked"], true);
}

#[tokio::test]
async fn test_search_carries_travel_date() {
    let response = setup()
        .oneshot(search_request(serde_json::json!({
            "from_city": "Mumbai",
            "to_city": "Berlin",
            "seat_preference": "Middle",
            "travel_date": "2025-09-01"
        })))
        .await
        .unwrap();

    let json = json_body(response).await;
    let summary = json["summary"].as_str().unwrap();
    assert!(summary.contains("Travel date: 2025-09-01"));
    assert!(summary.contains("Lufthansa"));
    assert!(summary.contains("Downtown Suites"));
}

#[tokio::test]
async fn test_missing_city_is_bad_request() {
    let response = setup()
        .oneshot(search_request(serde_json::json!({
            "to_city": "Paris",
            "seat_preference": "Window"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].as_str().unwrap().contains("from_city"));
}

#[tokio::test]
async fn test_null_city_is_bad_request() {
    let response = setup()
        .oneshot(search_request(serde_json::json!({
            "from_city": null,
            "to_city": "Paris",
            "seat_preference": "Window"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].as_str().unwrap().contains("from_city"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/search")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"from_city": 42, "to_city": "Paris"}"#))
        .unwrap();

    let response = setup().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
}

#[tokio::test]
async fn test_seeded_server_is_reproducible() {
    let body = serde_json::json!({
        "from_city": "Delhi",
        "to_city": "Paris",
        "seat_preference": "Window"
    });

    let first = json_body(setup_seeded(11).oneshot(search_request(body.clone())).await.unwrap()).await;
    let second = json_body(setup_seeded(11).oneshot(search_request(body)).await.unwrap()).await;

    assert_eq!(first["summary"], second["summary"]);
    assert_eq!(first["transaction_id"], second["transaction_id"]);
}

#[tokio::test]
async fn test_cors_preflight_allows_configured_origin() {
    let response = setup()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/search")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
}
