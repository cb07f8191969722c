//! Façade tests against live servers on random ports.
//!
//! # Design
//! Happy paths and server rejections run against the real mock server.
//! Pathological behaviors the mock server will never exhibit (a sleeping
//! handler, a 200 with a non-array body) use small inline axum routers.
//! Transport failures use a dropped listener. Every test inspects the
//! uniform `Outcome` the façade returns; nothing here catches errors.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{routing::get, Json, Router};
use polly_core::{Outcome, Page, PollyClient};
use serde_json::{json, Value};

/// Serve `app` on a random port from a background thread. The std
/// listener is bound first so the port is known before the runtime spins
/// up.
fn spawn(app: Router) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            axum::serve(listener, app).await
        })
        .unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> PollyClient {
    PollyClient::new(&format!("http://{addr}"))
}

// --- registration ---

#[test]
fn register_new_user_succeeds_with_201() {
    let addr = spawn(mock_server::app());
    let client = client_for(addr);

    let outcome = client.register_user("john", "pw");
    match outcome {
        Outcome::Success { data, status } => {
            assert_eq!(status, 201);
            assert_eq!(data["username"], "john");
            assert_eq!(data["id"], 1);
        }
        Outcome::Failure { error, .. } => panic!("expected success, got: {error}"),
    }
}

#[test]
fn register_duplicate_surfaces_detail_and_status() {
    let addr = spawn(mock_server::app());
    let client = client_for(addr);

    assert!(client.register_user("jane", "pw").is_success());

    let outcome = client.register_user("jane", "other");
    assert_eq!(
        outcome,
        Outcome::Failure {
            error: "username already registered".to_string(),
            status: Some(400),
        }
    );
    assert!(outcome.data().is_none());
}

// --- poll listing ---

#[test]
fn default_page_returns_first_ten_polls() {
    let addr = spawn(mock_server::app());
    let client = client_for(addr);

    let outcome = client.get_polls(Page::default());
    match outcome {
        Outcome::Success { data, status } => {
            assert_eq!(status, 200);
            assert_eq!(data.pagination.returned_count, 10);
            assert_eq!(data.pagination.skip, 0);
            assert_eq!(data.pagination.limit, 10);
            assert_eq!(data.polls.len(), 10);
            assert!(data.polls[0]["question"].is_string());
            assert!(data.polls[0]["options"].is_array());
        }
        Outcome::Failure { error, .. } => panic!("expected success, got: {error}"),
    }
}

#[test]
fn custom_page_echoes_requested_window() {
    let addr = spawn(mock_server::app());
    let client = client_for(addr);

    let outcome = client.get_polls(Page::new(5, 3));
    let page = outcome.data().expect("expected success");
    assert_eq!(page.pagination.skip, 5);
    assert_eq!(page.pagination.limit, 3);
    assert_eq!(page.pagination.returned_count, 3);
    assert_eq!(page.polls[0]["id"], 6);
}

#[test]
fn page_past_the_end_is_a_success_with_zero_polls() {
    let addr = spawn(mock_server::app());
    let client = client_for(addr);

    let outcome = client.get_polls(Page::new(100, 10));
    let page = outcome.data().expect("expected success");
    assert_eq!(page.pagination.returned_count, 0);
    assert!(page.polls.is_empty());
}

#[test]
fn non_array_200_body_is_a_local_validation_failure() {
    async fn polls_as_object() -> Json<Value> {
        Json(json!({ "polls": [] }))
    }
    let addr = spawn(Router::new().route("/polls", get(polls_as_object)));
    let client = client_for(addr);

    let outcome = client.get_polls(Page::default());
    // Status stays set: a response was received, the failure is local.
    assert_eq!(
        outcome,
        Outcome::Failure {
            error: "invalid response format: expected list of polls".to_string(),
            status: Some(200),
        }
    );
}

// --- transport failures ---

#[test]
fn connection_refused_has_no_status_for_both_operations() {
    // Bind then drop so the port is very likely closed when we dial it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);

    let outcome = client.register_user("john", "pw");
    assert_eq!(outcome.status_code(), None);
    assert!(outcome.error().is_some_and(|e| e.contains("connect")));

    let outcome = client.get_polls(Page::default());
    assert_eq!(outcome.status_code(), None);
    assert!(outcome.error().is_some_and(|e| e.contains("connect")));
}

#[test]
fn slow_server_times_out_with_no_status() {
    async fn slow_polls() -> Json<Vec<Value>> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Json(Vec::new())
    }
    let addr = spawn(Router::new().route("/polls", get(slow_polls)));
    let client = client_for(addr).with_timeout(Duration::from_millis(250));

    let outcome = client.get_polls(Page::default());
    assert_eq!(outcome.status_code(), None);
    assert!(outcome.error().is_some_and(|e| e.contains("timed out")));
}
