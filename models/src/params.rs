//! Request bodies for the remote usecases.
//!
//! Secret fields opt in to serialization explicitly; their Debug output stays redacted.

use common::RedactedSecret;
use common::redacted_secret::serialize_exposed;

use serde::Serialize;

/// Body posted by the Authenticate usecase.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationParams {
    pub email: String,
    #[serde(serialize_with = "serialize_exposed")]
    pub password: RedactedSecret,
}

impl AuthenticationParams {
    pub fn new(email: impl Into<String>, password: impl Into<RedactedSecret>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body posted by the Add-Account usecase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountParams {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_exposed")]
    pub password: RedactedSecret,
    #[serde(serialize_with = "serialize_exposed")]
    pub password_confirmation: RedactedSecret,
}
