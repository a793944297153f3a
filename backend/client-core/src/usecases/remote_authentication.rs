use crate::error::DomainError;
use crate::http::{HttpPostClient, HttpPostParams};
use crate::usecases::Authentication;

use common::HttpStatusCode;
use models::{AccountModel, AuthenticationParams};

use log::{debug, info, warn};

/// Logs a user in against one endpoint.
///
/// - `200` returns the account payload
/// - `401` is [`DomainError::InvalidCredentials`]
/// - anything else, a missing body, or a transport fault is [`DomainError::Unexpected`]
#[derive(Debug, Clone)]
pub struct RemoteAuthentication<C> {
    url: String,
    http_post_client: C,
}

impl<C> RemoteAuthentication<C> {
    pub fn new(url: impl Into<String>, http_post_client: C) -> Self {
        Self {
            url: url.into(),
            http_post_client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn http_post_client(&self) -> &C {
        &self.http_post_client
    }
}

impl<C> Authentication for RemoteAuthentication<C>
where
    C: HttpPostClient<AuthenticationParams, AccountModel>,
{
    async fn auth(&self, params: AuthenticationParams) -> Result<AccountModel, DomainError> {
        debug!("Authenticating against {}", self.url);

        let response = self
            .http_post_client
            .post(HttpPostParams::new(&self.url, Some(params)))
            .await
            .map_err(|error| {
                warn!(
                    "Authentication transport fault ({}): {}",
                    error.error_category(),
                    error
                );
                DomainError::unexpected()
            })?;

        match response.status_code {
            HttpStatusCode::Ok => {
                let account = response.body.ok_or_else(|| {
                    warn!("Authentication returned {} without a body", HttpStatusCode::Ok);
                    DomainError::unexpected()
                })?;
                info!("Authentication succeeded");
                Ok(account)
            }
            HttpStatusCode::Unauthorized => Err(DomainError::invalid_credentials()),
            status_code => {
                warn!("Authentication failed with HTTP {status_code}");
                Err(DomainError::unexpected())
            }
        }
    }
}
