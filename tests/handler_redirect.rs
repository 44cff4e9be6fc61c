mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_redirect_sends_301_to_destination() {
    let state = common::create_test_state();
    let link = common::seed_link(&state, "https://example.com/landing").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get(&format!("/{}", link.token)).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/landing"
    );
}

#[tokio::test]
async fn test_redirect_counts_each_visit() {
    let state = common::create_test_state();
    let link = common::seed_link(&state, "https://example.com").await;
    let server = TestServer::new(common::test_router(state)).unwrap();

    for _ in 0..3 {
        server.get(&format!("/{}", link.token)).await;
    }

    let visits = server.get(&format!("/{}/visits", link.token)).await;
    assert_eq!(visits.json::<serde_json::Value>()["visits"], 3);
}

#[tokio::test]
async fn test_redirect_unknown_token_is_not_found() {
    let server = TestServer::new(common::test_router(common::create_test_state())).unwrap();

    let response = server.get("/nosuch").await;

    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["type"], "NOT_FOUND");
    assert_eq!(body["error"]["code"], "url/not-found");
    assert!(
        body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("nosuch")
    );
}

#[tokio::test]
async fn test_shorten_then_redirect_roundtrip() {
    let server = TestServer::new(common::test_router(common::create_test_state())).unwrap();

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/roundtrip" }))
        .await;
    let token = created.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{token}")).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://example.com/roundtrip"
    );
}
