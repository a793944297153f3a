//! Transport-level faults.
//!
//! Ordinary HTTP error statuses are NOT represented here: the adapter
//! normalizes them into an `HttpResponse`. These variants cover what the
//! protocol cannot normalize (connection refused, DNS, timeout, a 200 whose
//! body does not decode, an unparsable URL).

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum HttpClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for HttpClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        HttpClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for HttpClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Read the flags before the error is flattened into a string
        HttpClientError::Http {
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for HttpClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        HttpClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl HttpClientError {
    /// Get error category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            HttpClientError::Http {
                is_timeout: true, ..
            } => "timeout",
            HttpClientError::Http {
                is_connection: true,
                ..
            } => "connection",
            HttpClientError::Http { .. } => "http",
            HttpClientError::Json { .. } => "malformed_response",
            HttpClientError::UrlParse { .. } => "url_parse",
        }
    }
}
