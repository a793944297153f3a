//! Email-shaped check.
//!
//! Blank values pass: requiredness is its own rule, so a form composes
//! `required()` and `email()` when it wants both.

use crate::error::ValidationError;
use crate::validation::{FieldValidation, FormInput};

use std::sync::OnceLock;

use regex::Regex;

/// local-part `@` domain, where the domain is either a bracketed IPv4
/// literal or dot-separated labels ending in a 2+ letter TLD.
const EMAIL_PATTERN: &str = r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid regex pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailValidation {
    field: String,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<ValidationError> {
        if input.is_blank(&self.field) {
            return None;
        }

        let text = input.text(&self.field)?;
        if get_email_regex().is_match(&text) {
            None
        } else {
            Some(ValidationError::InvalidField)
        }
    }
}
