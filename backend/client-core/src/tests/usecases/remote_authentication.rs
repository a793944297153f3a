// Unit tests for RemoteAuthentication status-code dispatch

use crate::error::DomainError;
use crate::tests::mocks::HttpPostClientSpy;
use crate::usecases::{Authentication, RemoteAuthentication};

use models::{AccountModel, AuthenticationParams};

type Spy = HttpPostClientSpy<AuthenticationParams, AccountModel>;

const URL: &str = "http://api.test/login";

fn params() -> AuthenticationParams {
    AuthenticationParams::new("ada@example.com", "engine1843")
}

/// **VALUE**: Verifies the usecase posts its params to its own URL, once.
///
/// **BUG THIS CATCHES**: Would catch a swapped URL, a dropped body, or a retry loop.
#[tokio::test]
async fn given_params_when_auth_called_then_posts_them_to_url_once() {
    // GIVEN: A spy answering 200
    let sut = RemoteAuthentication::new(URL, Spy::responding(200, Some(AccountModel::new("xyz"))));

    // WHEN: Authenticating
    let _ = sut.auth(params()).await;

    // THEN: Exactly one request with the URL and body
    let requests = sut.http_post_client().requests.lock().unwrap();
    assert_eq!(requests.len(), 1, "Should not retry");
    assert_eq!(requests[0].url, URL);
    let body = requests[0].body.as_ref().expect("body should be sent");
    assert_eq!(body.email, "ada@example.com");
    assert_eq!(body.password.expose(), "engine1843");
}

#[tokio::test]
async fn given_ok_with_body_when_auth_called_then_returns_account() {
    let sut = RemoteAuthentication::new(URL, Spy::responding(200, Some(AccountModel::new("xyz"))));

    let account = sut.auth(params()).await.unwrap();

    assert_eq!(account, AccountModel::new("xyz"));
}

/// **VALUE**: Verifies 401 maps to InvalidCredentials.
///
/// **WHY THIS MATTERS**: This is the one failure users can fix themselves. Mapping it to
/// Unexpected would tell them to "try again soon" about a typo.
#[tokio::test]
async fn given_unauthorized_when_auth_called_then_returns_invalid_credentials() {
    let sut = RemoteAuthentication::new(URL, Spy::responding(401, None));

    let error = sut.auth(params()).await.unwrap_err();

    assert!(matches!(error, DomainError::InvalidCredentials { .. }));
    assert_eq!(error.message(), "Invalid credentials");
}

#[tokio::test]
async fn given_other_statuses_when_auth_called_then_returns_unexpected() {
    for status in [204_u16, 400, 404, 500, 503] {
        let sut = RemoteAuthentication::new(URL, Spy::responding(status, None));

        let error = sut.auth(params()).await.unwrap_err();

        assert!(
            matches!(error, DomainError::Unexpected { .. }),
            "HTTP {status} should be Unexpected, got {error}"
        );
    }
}

#[tokio::test]
async fn given_ok_without_body_when_auth_called_then_returns_unexpected() {
    let sut = RemoteAuthentication::new(URL, Spy::responding(200, None));

    let error = sut.auth(params()).await.unwrap_err();

    assert!(matches!(error, DomainError::Unexpected { .. }));
}

/// **VALUE**: Verifies an opaque transport fault surfaces as Unexpected, not a transport error.
///
/// **BUG THIS CATCHES**: Would catch the transport error leaking out of the usecase's
/// error type, which the view has no copy for.
#[tokio::test]
async fn given_transport_fault_when_auth_called_then_returns_unexpected() {
    let sut = RemoteAuthentication::new(URL, Spy::failing());

    let error = sut.auth(params()).await.unwrap_err();

    assert!(matches!(error, DomainError::Unexpected { .. }));
}
