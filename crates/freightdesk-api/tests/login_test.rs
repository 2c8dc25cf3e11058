#![allow(clippy::unwrap_used)]
// Integration tests for `BackofficeClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use freightdesk_api::{BackofficeClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, BackofficeClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = BackofficeClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn secret(s: &str) -> secrecy::SecretString {
    s.to_string().into()
}

// ── Login tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "ada@freight.example",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "email": "ada@freight.example",
            "name": "Ada Lovelace",
            "role": "ops-manager"
        })))
        .mount(&server)
        .await;

    let user = client
        .login("ada@freight.example", &secret("hunter2"))
        .await
        .unwrap();

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "ada@freight.example");
    assert_eq!(user.name, "Ada Lovelace");
    assert_eq!(user.role, "ops-manager");
}

#[tokio::test]
async fn test_login_rejected_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "bad credentials"
        })))
        .mount(&server)
        .await;

    let result = client.login("ada@freight.example", &secret("wrong")).await;

    assert!(
        matches!(result, Err(Error::Unauthorized)),
        "expected Unauthorized, got: {result:?}"
    );
}

#[tokio::test]
async fn test_login_backend_failure() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let result = client.login("ada@freight.example", &secret("hunter2")).await;

    match result {
        Err(Error::Backend { status, ref message }) => {
            assert_eq!(status, 503);
            assert!(
                message.contains("upstream unavailable"),
                "expected body excerpt in message, got: {message}"
            );
        }
        other => panic!("expected Backend error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_malformed_user_document() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let result = client.login("ada@freight.example", &secret("hunter2")).await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("not json"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_login_connection_refused() {
    // No server listening at this address.
    let client = BackofficeClient::with_client(
        reqwest::Client::new(),
        Url::parse("http://127.0.0.1:1").unwrap(),
    );

    let result = client.login("ada@freight.example", &secret("hunter2")).await;

    match result {
        Err(ref e @ Error::Transport(_)) => assert!(e.is_transient()),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}
