use client_core::config::ClientConfig;
use client_core::error::{ConfigError, HttpClientError};
use client_core::http::ReqwestHttpClient;

/// Absolute URL of `path` under the configured API base.
pub fn make_api_url(config: &ClientConfig, path: &str) -> Result<String, ConfigError> {
    config.api_url(path)
}

pub fn make_http_client(config: &ClientConfig) -> Result<ReqwestHttpClient, HttpClientError> {
    ReqwestHttpClient::new(config.timeout())
}
