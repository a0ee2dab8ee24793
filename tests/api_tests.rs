// HTTP route tests for trackmatch

use actix_web::{test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use trackmatch::core::Matcher;
use trackmatch::models::{MatchAlgorithm, Point};
use trackmatch::routes::{configure_routes, AppState};
use trackmatch::services::Catalog;

fn app_state() -> AppState {
    let catalog = Catalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/circuits.json"))
        .expect("sample catalog should load");

    AppState {
        catalog: Arc::new(catalog),
        matcher: Matcher::default(),
        default_algorithm: MatchAlgorithm::Hausdorff,
        default_limit: 3,
        max_limit: 4,
    }
}

fn triangle_points() -> Value {
    json!([
        {"x": 10.0, "y": 10.0},
        {"x": 110.0, "y": 10.0},
        {"x": 60.0, "y": 90.0},
        {"x": 10.0, "y": 10.0}
    ])
}

#[actix_web::test]
async fn test_health() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["circuits"], 5);
}

#[actix_web::test]
async fn test_list_circuits() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/circuits").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let circuits = body.as_array().unwrap();
    assert_eq!(circuits.len(), 5);
    assert_eq!(circuits[0]["id"], "stadium-oval");
}

#[actix_web::test]
async fn test_match_ranks_catalog() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "points": triangle_points(), "algorithm": "frechet" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["algorithm"], "frechet");
    assert_eq!(body["totalCandidates"], 5);

    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0]["id"], "triangle-speedway");
    assert!(matches[0]["score"].as_f64().unwrap() > 95.0);
}

#[actix_web::test]
async fn test_match_limit_is_capped() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "points": triangle_points(), "limit": 50 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["algorithm"], "hausdorff");
    assert_eq!(body["matches"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_unknown_algorithm_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "points": triangle_points(), "algorithm": "procrustes" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid algorithm");
}

#[actix_web::test]
async fn test_malformed_json_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"points\": [{\"x\": 1}")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_compare_single_circuit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/compare")
        .set_json(json!({
            "points": triangle_points(),
            "circuitId": "triangle-speedway",
            "algorithm": "turning_angle"
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["circuitId"], "triangle-speedway");
    assert_eq!(body["algorithm"], "turning_angle");
    assert!(body["score"].as_f64().unwrap() > 95.0);
}

#[actix_web::test]
async fn test_compare_unknown_circuit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/compare")
        .set_json(json!({ "points": triangle_points(), "circuitId": "nurburgring" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_empty_sketch_scores_zero() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let empty: Vec<Point> = Vec::new();
    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({ "points": empty, "algorithm": "turning_angle" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    for m in body["matches"].as_array().unwrap() {
        assert_eq!(m["score"].as_f64().unwrap(), 0.0);
    }
}

#[actix_web::test]
async fn test_overflowing_sketch_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/match")
        .set_json(json!({
            "points": [{"x": -1e308, "y": 0.0}, {"x": 1e308, "y": 0.0}],
            "algorithm": "frechet"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid shape");
}

#[actix_web::test]
async fn test_unknown_route() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v2/nothing").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}
