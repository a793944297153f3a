use client_core::error::{ConfigError, CoreError, HttpClientError, StorageError};

use common::ErrorLocation;

use thiserror::Error;

/// Errors that stop the front end before or after a submit.
///
/// Business failures (bad credentials, email in use) are not errors at
/// this level: they are a [`crate::commands::SubmitOutcome`].
#[derive(Debug, Error)]
pub enum AuthformError {
    /// Error from this App
    #[error("Authform Error: {message} {location}")]
    Authform {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config, transport setup, storage)
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ConfigError> for AuthformError {
    fn from(error: ConfigError) -> Self {
        Self::Core(CoreError::Config(error))
    }
}

impl From<HttpClientError> for AuthformError {
    fn from(error: HttpClientError) -> Self {
        Self::Core(CoreError::HttpClient(error))
    }
}

impl From<StorageError> for AuthformError {
    fn from(error: StorageError) -> Self {
        Self::Core(CoreError::Storage(error))
    }
}
