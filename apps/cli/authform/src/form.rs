//! Form model the command layer validates before submitting.

use client_core::validation::{FormInput, Validation};

use common::RedactedSecret;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const PASSWORD_CONFIRMATION_FIELD: &str = "passwordConfirmation";

pub const LOGIN_FIELDS: [&str; 2] = [EMAIL_FIELD, PASSWORD_FIELD];
pub const SIGNUP_FIELDS: [&str; 4] = [
    NAME_FIELD,
    EMAIL_FIELD,
    PASSWORD_FIELD,
    PASSWORD_CONFIRMATION_FIELD,
];

/// A failing field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Runs `validation` for every field in order and keeps the failing ones.
///
/// An empty result means the form may be submitted.
pub fn validate_form<V: Validation>(
    validation: &V,
    fields: &[&str],
    input: &FormInput,
) -> Vec<FieldError> {
    fields
        .iter()
        .filter_map(|field| {
            validation
                .validate(field, input)
                .map(|message| FieldError {
                    field: (*field).to_string(),
                    message,
                })
        })
        .collect()
}

pub fn login_input(email: &str, password: &RedactedSecret) -> FormInput {
    FormInput::new()
        .with(EMAIL_FIELD, email)
        .with(PASSWORD_FIELD, password.expose())
}

pub fn signup_input(
    name: &str,
    email: &str,
    password: &RedactedSecret,
    password_confirmation: &RedactedSecret,
) -> FormInput {
    FormInput::new()
        .with(NAME_FIELD, name)
        .with(EMAIL_FIELD, email)
        .with(PASSWORD_FIELD, password.expose())
        .with(PASSWORD_CONFIRMATION_FIELD, password_confirmation.expose())
}
