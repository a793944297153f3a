//! Business-meaningful failures raised by the remote usecases.
//!
//! Each variant carries a fixed, user-facing message. The view renders
//! [`DomainError::message`] as the form's top-level error; the Display
//! output adds the location for logs.

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";
pub const EMAIL_IN_USE_MESSAGE: &str = "Email already in use";
pub const UNEXPECTED_MESSAGE: &str = "Something went wrong. Please try again soon.";

#[derive(Debug, Clone, ThisError)]
pub enum DomainError {
    #[error(
        "Invalid Credentials Error: {message} {location}",
        message = INVALID_CREDENTIALS_MESSAGE
    )]
    InvalidCredentials { location: ErrorLocation },

    #[error("Email In Use Error: {message} {location}", message = EMAIL_IN_USE_MESSAGE)]
    EmailInUse { location: ErrorLocation },

    #[error("Unexpected Error: {message} {location}", message = UNEXPECTED_MESSAGE)]
    Unexpected { location: ErrorLocation },
}

impl DomainError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        DomainError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_in_use() -> Self {
        DomainError::EmailInUse {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected() -> Self {
        DomainError::Unexpected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The copy shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            DomainError::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE,
            DomainError::EmailInUse { .. } => EMAIL_IN_USE_MESSAGE,
            DomainError::Unexpected { .. } => UNEXPECTED_MESSAGE,
        }
    }

    pub fn location(&self) -> &ErrorLocation {
        match self {
            DomainError::InvalidCredentials { location }
            | DomainError::EmailInUse { location }
            | DomainError::Unexpected { location } => location,
        }
    }
}
