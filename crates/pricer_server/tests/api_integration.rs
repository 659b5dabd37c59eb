//! In-process API tests through the fully layered router.

use approx::assert_relative_eq;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pricer_server::config::ServerConfig;
use pricer_server::server::Server;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post(server: &Server, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = server
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn contract(steps: usize) -> Value {
    json!({
        "optionType": "put",
        "exerciseStyle": "american",
        "undPrice": 100.0,
        "strike": 100.0,
        "vol": 0.2,
        "intRate": 0.05,
        "timeYears": 1.0,
        "steps": steps
    })
}

#[tokio::test]
async fn test_lattice_models_agree_with_each_other() {
    let server = Server::new(ServerConfig::default());

    let mut prices = Vec::new();
    for model in ["crr", "jarrow_rudd", "leisen_reimer"] {
        let (status, body) = post(
            &server,
            &format!("/api/v1/valuation/lattice/{model}"),
            contract(301),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        prices.push(body["price"].as_f64().unwrap());
    }

    for price in &prices {
        assert_relative_eq!(*price, 6.0896, epsilon = 1e-2);
    }
}

#[tokio::test]
async fn test_tree_payload_shape() {
    let server = Server::new(ServerConfig::default());
    let (status, body) = post(&server, "/api/v1/valuation/lattice/crr", contract(4)).await;
    assert_eq!(status, StatusCode::OK);

    let underlying = body["underlyingTree"].as_array().unwrap();
    let option = body["optionTree"].as_array().unwrap();
    assert_eq!(underlying.len(), 5);
    for (i, (spots, values)) in underlying.iter().zip(option).enumerate() {
        assert_eq!(spots.as_array().unwrap().len(), i + 1);
        assert_eq!(values.as_array().unwrap().len(), i + 1);
    }
    assert_eq!(body["price"], body["optionTree"][0][0]);
}

#[tokio::test]
async fn test_configured_step_bound() {
    let server = Server::new(ServerConfig {
        max_lattice_steps: 100,
        ..Default::default()
    });
    let (status, body) = post(&server, "/api/v1/valuation/lattice/crr", contract(101)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_input");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let server = Server::new(ServerConfig::default());
    let response = server
        .router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/valuation/black-scholes")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}
