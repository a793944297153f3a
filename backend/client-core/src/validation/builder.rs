use crate::validation::validators::{
    CompareFieldsValidation, EmailValidation, FieldRule, MinLengthValidation,
    RequiredFieldValidation,
};

/// Fluent accumulator for the rules of one field.
///
/// Each call appends exactly one rule bound to the captured field name;
/// `build()` hands back the rules in call order. One builder per field:
/// start a fresh [`ValidationBuilder::field`] for the next one.
#[derive(Debug)]
pub struct ValidationBuilder {
    field: String,
    validations: Vec<FieldRule>,
}

impl ValidationBuilder {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            validations: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.validations
            .push(RequiredFieldValidation::new(&self.field).into());
        self
    }

    pub fn email(mut self) -> Self {
        self.validations.push(EmailValidation::new(&self.field).into());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.validations
            .push(MinLengthValidation::new(&self.field, length).into());
        self
    }

    pub fn same_as(mut self, field_to_compare: impl Into<String>) -> Self {
        self.validations
            .push(CompareFieldsValidation::new(&self.field, field_to_compare).into());
        self
    }

    pub fn build(self) -> Vec<FieldRule> {
        self.validations
    }
}
