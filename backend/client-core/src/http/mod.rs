//! Transport protocol the remote usecases depend on.
//!
//! A usecase never sees the networking library, only [`HttpPostClient`].
//! The contract: one exchange per call, no implicit retry, and ordinary
//! HTTP error statuses come back as an [`HttpResponse`] rather than an
//! `Err`. `Err` is reserved for faults the protocol cannot normalize.

pub mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use crate::error::HttpClientError;

use common::HttpStatusCode;

use std::future::Future;

/// One outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPostParams<Req> {
    pub url: String,
    pub body: Option<Req>,
}

impl<Req> HttpPostParams<Req> {
    pub fn new(url: impl Into<String>, body: Option<Req>) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }
}

/// Outcome of one exchange. `body` is present only when the server sent a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse<Res> {
    pub status_code: HttpStatusCode,
    pub body: Option<Res>,
}

impl<Res> HttpResponse<Res> {
    pub fn new(status_code: impl Into<HttpStatusCode>, body: Option<Res>) -> Self {
        Self {
            status_code: status_code.into(),
            body,
        }
    }
}

pub trait HttpPostClient<Req, Res>: Send + Sync {
    fn post(
        &self,
        params: HttpPostParams<Req>,
    ) -> impl Future<Output = Result<HttpResponse<Res>, HttpClientError>> + Send;
}
