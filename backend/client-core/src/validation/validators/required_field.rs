use crate::error::ValidationError;
use crate::validation::{FieldValidation, FormInput};

/// Fails when the field is absent, null, or the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<ValidationError> {
        input
            .is_blank(&self.field)
            .then_some(ValidationError::RequiredField)
    }
}
