// End-to-end: remote usecases over the reqwest adapter against a mock API

use client_core::error::DomainError;
use client_core::http::ReqwestHttpClient;
use client_core::usecases::{AddAccount, Authentication, RemoteAddAccount, RemoteAuthentication};
use client_core::{LOGIN_ENDPOINT, SIGNUP_ENDPOINT};

use models::{AccountModel, AddAccountParams, AuthenticationParams};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, endpoint: &str, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

fn authentication(server: &MockServer) -> RemoteAuthentication<ReqwestHttpClient> {
    RemoteAuthentication::new(
        format!("{}{}", server.uri(), LOGIN_ENDPOINT),
        ReqwestHttpClient::new(Duration::from_secs(5)).unwrap(),
    )
}

fn add_account(server: &MockServer) -> RemoteAddAccount<ReqwestHttpClient> {
    RemoteAddAccount::new(
        format!("{}{}", server.uri(), SIGNUP_ENDPOINT),
        ReqwestHttpClient::new(Duration::from_secs(5)).unwrap(),
    )
}

fn signup_params() -> AddAccountParams {
    AddAccountParams {
        name: String::from("Ada Lovelace"),
        email: String::from("ada@example.com"),
        password: "engine1843".into(),
        password_confirmation: "engine1843".into(),
    }
}

/// **VALUE**: Verifies a full login round trip: wire body out, access token back.
///
/// **BUG THIS CATCHES**: Would catch a redacted password reaching the wire ("[REDACTED]")
/// or a case mismatch on `accessToken`.
#[tokio::test]
async fn given_ok_login_response_when_authenticating_then_returns_account() {
    // GIVEN: An API that expects the real credentials
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_ENDPOINT))
        .and(body_json(json!({ "email": "ada@example.com", "password": "engine1843" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "xyz" })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Authenticating
    let account = authentication(&server)
        .auth(AuthenticationParams::new("ada@example.com", "engine1843"))
        .await
        .unwrap();

    // THEN: The payload is returned as-is
    assert_eq!(account, AccountModel::new("xyz"));
}

#[tokio::test]
async fn given_unauthorized_login_response_when_authenticating_then_returns_invalid_credentials() {
    let server = MockServer::start().await;
    mount(
        &server,
        LOGIN_ENDPOINT,
        ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })),
    )
    .await;

    let error = authentication(&server)
        .auth(AuthenticationParams::new("ada@example.com", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(error, DomainError::InvalidCredentials { .. }));
}

#[tokio::test]
async fn given_server_error_login_response_when_authenticating_then_returns_unexpected() {
    let server = MockServer::start().await;
    mount(&server, LOGIN_ENDPOINT, ResponseTemplate::new(500)).await;

    let error = authentication(&server)
        .auth(AuthenticationParams::new("ada@example.com", "engine1843"))
        .await
        .unwrap_err();

    assert!(matches!(error, DomainError::Unexpected { .. }));
}

#[tokio::test]
async fn given_ok_signup_response_when_adding_account_then_returns_account() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SIGNUP_ENDPOINT))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "engine1843",
            "passwordConfirmation": "engine1843"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "abc" })))
        .expect(1)
        .mount(&server)
        .await;

    let account = add_account(&server).add(signup_params()).await.unwrap();

    assert_eq!(account.access_token.expose(), "abc");
}

#[tokio::test]
async fn given_bad_request_signup_response_when_adding_account_then_returns_email_in_use() {
    let server = MockServer::start().await;
    mount(
        &server,
        SIGNUP_ENDPOINT,
        ResponseTemplate::new(400).set_body_json(json!({ "error": "Email in use" })),
    )
    .await;

    let error = add_account(&server).add(signup_params()).await.unwrap_err();

    assert!(matches!(error, DomainError::EmailInUse { .. }));
}
