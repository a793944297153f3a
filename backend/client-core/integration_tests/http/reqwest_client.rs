use client_core::error::HttpClientError;
use client_core::http::{HttpPostClient, HttpPostParams, HttpResponse, ReqwestHttpClient};

use common::HttpStatusCode;

use std::net::TcpListener;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize)]
struct Ping {
    value: String,
}

#[derive(Debug, PartialEq, Deserialize)]
struct Echo {
    value: String,
}

fn client() -> ReqwestHttpClient {
    ReqwestHttpClient::new(Duration::from_secs(5)).expect("client should build")
}

async fn post_ping(
    url: String,
    body: Option<Ping>,
) -> Result<HttpResponse<Echo>, HttpClientError> {
    let params = HttpPostParams::new(url, body);

    <ReqwestHttpClient as HttpPostClient<Ping, Echo>>::post(&client(), params).await
}

/// **VALUE**: Verifies the adapter posts the JSON body to the given URL and decodes a 200 payload.
///
/// **WHY THIS MATTERS**: This is the happy path every login and sign-up takes.
#[tokio::test]
async fn given_ok_response_when_posting_then_sends_json_and_decodes_body() {
    // GIVEN: A server expecting the exact JSON body
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(body_json(json!({ "value": "hello" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": "world" })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Posting
    let response = post_ping(
        format!("{}/echo", server.uri()),
        Some(Ping {
            value: String::from("hello"),
        }),
    )
    .await
    .unwrap();

    // THEN: Status and decoded body
    assert_eq!(response.status_code, HttpStatusCode::Ok);
    assert_eq!(
        response.body,
        Some(Echo {
            value: String::from("world")
        })
    );
}

/// **VALUE**: Verifies HTTP error statuses come back as responses, not errors.
///
/// **WHY THIS MATTERS**: The usecases dispatch on the status code. If the adapter
/// raised on 401, the login form could never say "Invalid credentials".
///
/// **BUG THIS CATCHES**: Would catch someone adding `error_for_status()` to the request.
#[tokio::test]
async fn given_error_statuses_when_posting_then_returns_normalized_responses() {
    let server = MockServer::start().await;
    let routes = [
        ("/unauthorized", 401_u16),
        ("/bad", 400),
        ("/boom", 500),
        ("/gone", 410),
    ];
    for (route, status) in routes {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "error": "nope" })),
            )
            .mount(&server)
            .await;
    }

    for (route, expected) in [
        ("/unauthorized", HttpStatusCode::Unauthorized),
        ("/bad", HttpStatusCode::BadRequest),
        ("/boom", HttpStatusCode::ServerError),
        ("/gone", HttpStatusCode::Other(410)),
    ] {
        let response = post_ping(format!("{}{}", server.uri(), route), None)
            .await
            .unwrap_or_else(|e| panic!("{route} should normalize, got {e}"));

        assert_eq!(response.status_code, expected);
        assert_eq!(response.body, None, "Error payload does not match the success shape");
    }
}

#[tokio::test]
async fn given_no_content_when_posting_then_body_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = post_ping(format!("{}/empty", server.uri()), None).await.unwrap();

    assert_eq!(response.status_code, HttpStatusCode::NoContent);
    assert_eq!(response.body, None);
}

/// **VALUE**: Verifies a 200 with an undecodable body is a transport fault.
#[tokio::test]
async fn given_malformed_ok_body_when_posting_then_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/garbled"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = post_ping(format!("{}/garbled", server.uri()), None).await;

    assert!(matches!(result, Err(HttpClientError::Json { .. })));
}

#[tokio::test]
async fn given_refused_connection_when_posting_then_returns_http_error() {
    // GIVEN: A port nothing listens on
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    // WHEN: Posting to it
    let result = post_ping(format!("http://127.0.0.1:{port}/login"), None).await;

    // THEN: Opaque transport failure, categorized as connection
    match result {
        Err(error @ HttpClientError::Http { .. }) => {
            assert_eq!(error.error_category(), "connection");
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unparsable_url_when_posting_then_returns_url_parse_error() {
    let result = post_ping(String::from("not a url"), None).await;

    assert!(matches!(result, Err(HttpClientError::UrlParse { .. })));
}
