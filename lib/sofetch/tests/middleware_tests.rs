//! Built-in interceptors wired into a real client.

use std::sync::{Arc, Mutex};

use assert2::{check, let_assert};
use serde_json::{Value, json};
use sofetch::middleware::{AcceptStatus, ErrorWhen, Logging, RewriteUrl, SetHeader, UnwrapField};
use sofetch::{Client, Envelope, FetchError, RequestOptions};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

#[tokio::test]
async fn bearer_auth_adds_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .with_bearer_auth("test-token")
        .build();

    let envelope = client
        .get("/me", RequestOptions::new())
        .await
        .expect("response");
    check!(envelope.json() == Some(&json!({"id": 1})));
}

#[tokio::test]
async fn refreshed_bearer_token_is_used_per_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer one"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(header("Authorization", "Bearer two"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = Arc::new(Mutex::new("one".to_string()));
    let source = Arc::clone(&token);
    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .with_bearer_auth_fn(move || Some(source.lock().expect("lock").clone()))
        .build();

    client.get("/", RequestOptions::new()).await.expect("first");
    *token.lock().expect("lock") = "two".to_string();
    client
        .get("/", RequestOptions::new())
        .await
        .expect("second");
}

#[cfg(feature = "middleware-basic-auth")]
#[tokio::test]
async fn basic_auth_adds_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .with_basic_auth("user", "pass")
        .build();

    client
        .get("/", RequestOptions::new())
        .await
        .expect("response");
}

#[tokio::test]
async fn rewrite_url_redirects_to_another_host() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url("https://production.invalid")
        .request_interceptor(RewriteUrl::replace_prefix(
            "https://production.invalid",
            mock_server.uri(),
        ))
        .request_interceptor(RewriteUrl::new(|url| url.replace("/v1/", "/v2/")))
        .build();

    let envelope = client
        .get("/v1/items", RequestOptions::new())
        .await
        .expect("response");

    check!(envelope.json() == Some(&json!([1, 2])));
    check!(
        envelope.config().map(|config| config.url().to_string())
            == Some(format!("{}/v2/items", mock_server.uri()))
    );
}

#[tokio::test]
async fn set_header_respects_caller_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("Accept", "text/csv"))
        .and(header("User-Agent", "sofetch-tests"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .request_interceptor(SetHeader::if_absent("Accept", "application/json"))
        .request_interceptor(SetHeader::overriding("User-Agent", "sofetch-tests"))
        .build();

    client
        .get(
            "/export",
            RequestOptions::new()
                .header("Accept", "text/csv")
                .header("User-Agent", "caller"),
        )
        .await
        .expect("response");
}

#[tokio::test]
async fn unwrap_field_and_logging() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}, {"id": 2}],
            "meta": {"total": 2}
        })))
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .request_interceptor(Logging::debug())
        .response_interceptor(Logging::debug())
        .response_interceptor(UnwrapField::new("data"))
        .build();

    let envelope = client
        .get("/users", RequestOptions::new())
        .await
        .expect("response");

    check!(envelope.json() == Some(&json!([{"id": 1}, {"id": 2}])));
}

#[tokio::test]
async fn accept_status_turns_not_found_into_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .response_interceptor(AcceptStatus::new([404]))
        .build();

    let envelope = client
        .get("/maybe", RequestOptions::new())
        .await
        .expect("accepted");
    check!(envelope.status() == 404);
}

#[tokio::test]
async fn error_when_rejects_error_payloads() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": false, "error": "quota"})),
        )
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .response_interceptor(ErrorWhen::new(|envelope: &Envelope<Value>| {
            envelope.json().is_some_and(|b| b["ok"] == json!(false))
        }))
        .build();

    let result = client.post("/send", RequestOptions::new()).await;

    let_assert!(Err(FetchError::Status(envelope)) = result);
    check!(envelope.status() == 200);
    check!(
        envelope.json().map(|body| body["error"].clone()) == Some(json!("quota"))
    );
}

#[cfg(feature = "middleware-metrics")]
#[tokio::test]
async fn metrics_do_not_change_the_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client: Client = Client::builder()
        .root_url(mock_server.uri())
        .with_metrics()
        .build();

    let result = client.get("/", RequestOptions::new()).await;
    check!(result.err().and_then(|err| err.status()) == Some(500));
}
