use authform::commands::{SubmitOutcome, login, signup};
use authform::factory::{
    make_local_save_access_token, make_remote_add_account, make_remote_authentication,
};

use client_core::config::ClientConfig;
use client_core::error::DomainError;
use client_core::storage::FileStorage;
use client_core::usecases::ACCESS_TOKEN_KEY;

use common::RedactedSecret;
use models::AddAccountParams;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, temp_dir: &TempDir) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.api.base_url = format!("{}/api", server.uri());
    config.storage.path = temp_dir.path().join("storage.json");
    config
}

/// **VALUE**: The whole login path works with production adapters.
///
/// **WHY THIS MATTERS**: Unit tests use fakes on both sides. This is the only check
/// that the factories, reqwest adapter and file storage agree on URLs, body shape and
/// the stored key.
///
/// **BUG THIS CATCHES**: Would catch a camelCase mismatch on `accessToken` or a wrong
/// endpoint join.
#[tokio::test]
async fn given_server_accepts_login_when_submitted_then_token_written_to_storage_file() {
    // GIVEN: A server answering /api/login with a token
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"email": "any@mail.com", "password": "12345"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessToken": "abc-123"})))
        .expect(1)
        .mount(&server)
        .await;
    let config = config_for(&server, &temp_dir);

    // WHEN: Submitting the login form
    let authentication = make_remote_authentication(&config).unwrap();
    let save_access_token = make_local_save_access_token(&config);
    let outcome = login(
        &authentication,
        &save_access_token,
        String::from("any@mail.com"),
        RedactedSecret::new("12345"),
    )
    .await
    .unwrap();

    // THEN: Authenticated, and the token is readable from the storage file
    assert!(matches!(outcome, SubmitOutcome::Authenticated));
    let storage = FileStorage::new(&config.storage.path);
    assert_eq!(
        storage.get(ACCESS_TOKEN_KEY).await.unwrap(),
        Some(json!("abc-123"))
    );
}

#[tokio::test]
async fn given_server_answers_401_when_logging_in_then_rejected_and_no_storage_file() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let config = config_for(&server, &temp_dir);

    let authentication = make_remote_authentication(&config).unwrap();
    let save_access_token = make_local_save_access_token(&config);
    let outcome = login(
        &authentication,
        &save_access_token,
        String::from("any@mail.com"),
        RedactedSecret::new("12345"),
    )
    .await
    .unwrap();

    assert!(matches!(
        outcome,
        SubmitOutcome::Rejected(DomainError::InvalidCredentials { .. })
    ));
    assert!(!config.storage.path.exists());
}

#[tokio::test]
async fn given_invalid_login_form_when_submitted_then_server_receives_nothing() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let config = config_for(&server, &temp_dir);

    let authentication = make_remote_authentication(&config).unwrap();
    let save_access_token = make_local_save_access_token(&config);
    let outcome = login(
        &authentication,
        &save_access_token,
        String::from("not-an-email"),
        RedactedSecret::new("123"),
    )
    .await
    .unwrap();

    match outcome {
        SubmitOutcome::Invalid(errors) => assert_eq!(errors.len(), 2),
        other => panic!("Expected Invalid, got {other:?}"),
    }
}

#[tokio::test]
async fn given_server_answers_403_when_signing_up_then_rejected_as_email_in_use() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .and(body_json(json!({
            "name": "Ada Lovelace",
            "email": "ada@mail.com",
            "password": "12345",
            "passwordConfirmation": "12345"
        })))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;
    let config = config_for(&server, &temp_dir);

    let add_account = make_remote_add_account(&config).unwrap();
    let save_access_token = make_local_save_access_token(&config);
    let params = AddAccountParams {
        name: String::from("Ada Lovelace"),
        email: String::from("ada@mail.com"),
        password: RedactedSecret::new("12345"),
        password_confirmation: RedactedSecret::new("12345"),
    };
    let outcome = signup(&add_account, &save_access_token, params)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Rejected(error) => assert_eq!(error.message(), "Email already in use"),
        other => panic!("Expected Rejected, got {other:?}"),
    }
}
