//! Reqwest-backed transport adapter.
//!
//! Owns transport details only: JSON request serialization, the request
//! timeout, and folding every HTTP status into an `HttpResponse`.

use crate::error::HttpClientError;
use crate::http::{HttpPostClient, HttpPostParams, HttpResponse};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(timeout: Duration) -> Result<Self, HttpClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client })
    }
}

impl<Req, Res> HttpPostClient<Req, Res> for ReqwestHttpClient
where
    Req: Serialize + Send + Sync,
    Res: DeserializeOwned + Send,
{
    async fn post(
        &self,
        params: HttpPostParams<Req>,
    ) -> Result<HttpResponse<Res>, HttpClientError> {
        let url = Url::parse(&params.url)?;
        debug!("POST {url}");

        let mut request = self.client.post(url.clone());
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status_code = HttpStatusCode::from(response.status().as_u16());
        let bytes = response.bytes().await?;

        debug!("POST {url} -> {status_code} ({} bytes)", bytes.len());

        if bytes.is_empty() {
            return Ok(HttpResponse::new(status_code, None));
        }

        match serde_json::from_slice::<Res>(&bytes) {
            Ok(body) => Ok(HttpResponse::new(status_code, Some(body))),
            // Error payloads rarely match the success shape; the status code
            // alone carries the outcome there.
            Err(error) if status_code != HttpStatusCode::Ok => {
                debug!("Discarding undecodable {status_code} body from {url}: {error}");
                Ok(HttpResponse::new(status_code, None))
            }
            Err(error) => {
                warn!("Malformed {status_code} body from {url}: {error}");
                Err(HttpClientError::Json {
                    message: error.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
