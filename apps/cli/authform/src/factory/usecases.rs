use crate::error::AuthformError;
use crate::factory::http::{make_api_url, make_http_client};

use client_core::config::ClientConfig;
use client_core::http::ReqwestHttpClient;
use client_core::storage::FileStorage;
use client_core::usecases::{LocalSaveAccessToken, RemoteAddAccount, RemoteAuthentication};
use client_core::{LOGIN_ENDPOINT, SIGNUP_ENDPOINT};

pub fn make_remote_authentication(
    config: &ClientConfig,
) -> Result<RemoteAuthentication<ReqwestHttpClient>, AuthformError> {
    Ok(RemoteAuthentication::new(
        make_api_url(config, LOGIN_ENDPOINT)?,
        make_http_client(config)?,
    ))
}

pub fn make_remote_add_account(
    config: &ClientConfig,
) -> Result<RemoteAddAccount<ReqwestHttpClient>, AuthformError> {
    Ok(RemoteAddAccount::new(
        make_api_url(config, SIGNUP_ENDPOINT)?,
        make_http_client(config)?,
    ))
}

pub fn make_local_save_access_token(config: &ClientConfig) -> LocalSaveAccessToken<FileStorage> {
    LocalSaveAccessToken::new(FileStorage::new(&config.storage.path))
}
