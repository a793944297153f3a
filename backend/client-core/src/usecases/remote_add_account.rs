use crate::error::DomainError;
use crate::http::{HttpPostClient, HttpPostParams};
use crate::usecases::AddAccount;

use common::HttpStatusCode;
use models::{AccountModel, AddAccountParams};

use log::{debug, info, warn};

/// Signs a user up against one endpoint.
///
/// The sign-up endpoint documents a single failure mode, so every non-200
/// status is [`DomainError::EmailInUse`]. A 200 without a body and transport
/// faults are [`DomainError::Unexpected`].
#[derive(Debug, Clone)]
pub struct RemoteAddAccount<C> {
    url: String,
    http_post_client: C,
}

impl<C> RemoteAddAccount<C> {
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

impl<C> AddAccount for RemoteAddAccount<C>
where
    C: HttpPostClient<AddAccountParams, AccountModel>,
{
    async fn add(&self, params: AddAccountParams) -> Result<AccountModel, DomainError> {
        debug!("Adding account against {}", self.url);

        let response = self
            .http_post_client
            .post(HttpPostParams::new(&self.url, Some(params)))
            .await
            .map_err(|error| {
                warn!(
                    "Add account transport fault ({}): {}",
                    error.error_category(),
                    error
                );
                DomainError::unexpected()
            })?;

        match response.status_code {
            HttpStatusCode::Ok => {
                let account = response.body.ok_or_else(|| {
                    warn!("Add account returned {} without a body", HttpStatusCode::Ok);
                    DomainError::unexpected()
                })?;
                info!("Account created");
                Ok(account)
            }
            status_code => {
                debug!("Add account rejected with HTTP {status_code}");
                Err(DomainError::email_in_use())
            }
        }
    }
}
