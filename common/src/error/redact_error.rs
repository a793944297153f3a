use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a redacted secret is serialized without being exposed explicitly.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Error: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}
