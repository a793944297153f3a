use crate::error::ValidationError;
use crate::validation::{FieldValidation, FormInput};

use serde_json::Value;

/// Fails when the field's text is shorter than `min_length` characters.
///
/// Only strings have a length: absent, null, numeric and boolean values
/// pass regardless of the minimum. Length counts Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLengthValidation {
    field: String,
    min_length: usize,
}

impl MinLengthValidation {
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
        }
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<ValidationError> {
        let Some(Value::String(text)) = input.get(&self.field) else {
            return None;
        };

        (text.chars().count() < self.min_length).then_some(ValidationError::InvalidField)
    }
}
