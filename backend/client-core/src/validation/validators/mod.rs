pub mod compare_fields;
pub mod email;
pub mod min_length;
pub mod required_field;

pub use compare_fields::CompareFieldsValidation;
pub use email::EmailValidation;
pub use min_length::MinLengthValidation;
pub use required_field::RequiredFieldValidation;

use crate::error::ValidationError;
use crate::validation::{FieldValidation, FormInput};

/// The rules the builder knows how to produce.
///
/// Comparable, so a built rule list can be checked against an expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Required(RequiredFieldValidation),
    Email(EmailValidation),
    MinLength(MinLengthValidation),
    CompareFields(CompareFieldsValidation),
}

impl FieldValidation for FieldRule {
    fn field(&self) -> &str {
        match self {
            FieldRule::Required(rule) => rule.field(),
            FieldRule::Email(rule) => rule.field(),
            FieldRule::MinLength(rule) => rule.field(),
            FieldRule::CompareFields(rule) => rule.field(),
        }
    }

    fn validate(&self, input: &FormInput) -> Option<ValidationError> {
        match self {
            FieldRule::Required(rule) => rule.validate(input),
            FieldRule::Email(rule) => rule.validate(input),
            FieldRule::MinLength(rule) => rule.validate(input),
            FieldRule::CompareFields(rule) => rule.validate(input),
        }
    }
}

impl From<RequiredFieldValidation> for FieldRule {
    fn from(rule: RequiredFieldValidation) -> Self {
        FieldRule::Required(rule)
    }
}

impl From<EmailValidation> for FieldRule {
    fn from(rule: EmailValidation) -> Self {
        FieldRule::Email(rule)
    }
}

impl From<MinLengthValidation> for FieldRule {
    fn from(rule: MinLengthValidation) -> Self {
        FieldRule::MinLength(rule)
    }
}

impl From<CompareFieldsValidation> for FieldRule {
    fn from(rule: CompareFieldsValidation) -> Self {
        FieldRule::CompareFields(rule)
    }
}
