use crate::error::ValidationError;
use crate::validation::{FieldValidation, FormInput};

use serde_json::Value;

/// Fails unless `field` and `field_to_compare` hold the same value.
///
/// Two absent fields compare equal; an absent field never equals a present one.
/// Numbers compare by value (`1` equals `1.0`), everything else structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl FieldValidation for CompareFieldsValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, input: &FormInput) -> Option<ValidationError> {
        let value = input.get(&self.field);
        let value_to_compare = input.get(&self.field_to_compare);

        (!strictly_equal(value, value_to_compare)).then_some(ValidationError::InvalidField)
    }
}

fn strictly_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(Value::Number(left)), Some(Value::Number(right))) => left.as_f64() == right.as_f64(),
        _ => left == right,
    }
}
