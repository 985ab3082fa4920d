//! End-to-end tests for the adder service.
//!
//! Each test binds the real router on an ephemeral local port and talks to
//! it over HTTP.

use std::net::SocketAddr;

use adder_service::api::create_router;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Spawn the server and return its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, create_router())
            .await
            .expect("server error");
    });

    format!("http://{}", addr)
}

async fn get(base: &str, path: &str) -> (StatusCode, Value) {
    let response = reqwest::get(format!("{}{}", base, path))
        .await
        .expect("request failed");
    let status = response.status();
    let body = response.json::<Value>().await.expect("body is not JSON");
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;

    let (status, body) = get(&base, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_add_success() {
    let base = spawn_server().await;

    let (status, body) = get(&base, "/add?a=5&b=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"inputs": {"a": 5.0, "b": 10.0}, "result": {"sum": 15.0}})
    );
}

#[tokio::test]
async fn test_add_with_floats() {
    let base = spawn_server().await;

    let (status, body) = get(&base, "/add?a=2.5&b=-1.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["sum"], json!(1.0));
}

#[tokio::test]
async fn test_add_missing_one_param() {
    let base = spawn_server().await;

    let (status, body) = get(&base, "/add?a=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Missing required query parameters"));
}

#[tokio::test]
async fn test_add_missing_all_params() {
    let base = spawn_server().await;

    let (status, body) = get(&base, "/add").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_add_invalid_param_type() {
    let base = spawn_server().await;

    let (status, body) = get(&base, "/add?a=five&b=10").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Invalid number format"));
}

#[tokio::test]
async fn test_add_sum_matches_double_addition() {
    let base = spawn_server().await;

    for (a, b) in [("0.1", "0.2"), ("-7", "3.5"), ("1e10", "1"), ("0", "-0")] {
        let (status, body) = get(&base, &format!("/add?a={a}&b={b}")).await;
        assert_eq!(status, StatusCode::OK);

        let expected = a.parse::<f64>().unwrap() + b.parse::<f64>().unwrap();
        assert_eq!(body["result"]["sum"].as_f64().unwrap(), expected, "a={a}, b={b}");
    }
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let base = spawn_server().await;

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let base = base.clone();
            tokio::spawn(async move {
                let (status, body) = get(&base, &format!("/add?a={i}&b=1")).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(body["result"]["sum"].as_f64().unwrap(), f64::from(i) + 1.0);
            })
        })
        .collect();

    for task in tasks {
        task.await.expect("task panicked");
    }
}
