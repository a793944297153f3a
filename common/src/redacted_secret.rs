//! Secret handling with redacted Debug output.
//!
//! Passwords and access tokens travel through params structs that get
//! logged with `{:?}` from time to time. Wrapping them here keeps the
//! value out of every log line and zeroes it on drop.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use serde::{Deserialize, Deserializer, Serializer};
use zeroize::Zeroize;

/// A secret string that never exposes its value in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedSecret {
    inner: String,
}

impl RedactedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            inner: secret.into(),
        }
    }

    /// Get the actual value for transmission.
    ///
    /// # Security Note
    /// Only call this when the value is about to leave the process
    /// (request body, storage) or is compared by a validator.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Character count (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedSecret([REDACTED])")
    }
}

impl fmt::Display for RedactedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for RedactedSecret {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl From<String> for RedactedSecret {
    fn from(secret: String) -> Self {
        Self::new(secret)
    }
}

impl From<&str> for RedactedSecret {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

// Plain serialization is refused so a secret never ends up in a log dump
// or a config file by accident. Request bodies opt in with `serialize_exposed`.
impl serde::Serialize for RedactedSecret {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from(
                "RedactedSecret cannot be serialized - use serialize_exposed explicitly",
            ),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}

impl<'de> Deserialize<'de> for RedactedSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Serialize the secret's real value.
///
/// Meant for `#[serde(serialize_with = "common::redacted_secret::serialize_exposed")]`
/// on fields that are sent over the wire.
pub fn serialize_exposed<S>(secret: &RedactedSecret, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(secret.expose())
}
