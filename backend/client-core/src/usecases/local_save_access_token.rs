use crate::error::StorageError;
use crate::storage::SetStorage;
use crate::usecases::SaveAccessToken;

use common::RedactedSecret;

use log::info;
use serde_json::Value;

/// Storage key the session token is kept under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Persists the session token through any [`SetStorage`].
#[derive(Debug, Clone)]
pub struct LocalSaveAccessToken<S> {
    set_storage: S,
}

impl<S> LocalSaveAccessToken<S> {
    pub fn new(set_storage: S) -> Self {
        Self { set_storage }
    }

    pub fn set_storage(&self) -> &S {
        &self.set_storage
    }
}

impl<S> SaveAccessToken for LocalSaveAccessToken<S>
where
    S: SetStorage,
{
    async fn save(&self, access_token: &RedactedSecret) -> Result<(), StorageError> {
        self.set_storage
            .set(
                ACCESS_TOKEN_KEY,
                Value::String(access_token.expose().to_owned()),
            )
            .await?;

        info!("Access token saved ({} chars)", access_token.len());
        Ok(())
    }
}
