use crate::form::{EMAIL_FIELD, NAME_FIELD, PASSWORD_CONFIRMATION_FIELD, PASSWORD_FIELD};

use client_core::validation::{FieldRule, ValidationBuilder, ValidationComposite};

pub const NAME_MIN_LENGTH: usize = 5;
pub const PASSWORD_MIN_LENGTH: usize = 5;

pub fn login_validation_rules() -> Vec<FieldRule> {
    [
        ValidationBuilder::field(EMAIL_FIELD).required().email().build(),
        ValidationBuilder::field(PASSWORD_FIELD)
            .required()
            .min_length(PASSWORD_MIN_LENGTH)
            .build(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn signup_validation_rules() -> Vec<FieldRule> {
    [
        ValidationBuilder::field(NAME_FIELD)
            .required()
            .min_length(NAME_MIN_LENGTH)
            .build(),
        ValidationBuilder::field(EMAIL_FIELD).required().email().build(),
        ValidationBuilder::field(PASSWORD_FIELD)
            .required()
            .min_length(PASSWORD_MIN_LENGTH)
            .build(),
        ValidationBuilder::field(PASSWORD_CONFIRMATION_FIELD)
            .required()
            .same_as(PASSWORD_FIELD)
            .build(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn make_login_validation() -> ValidationComposite {
    ValidationComposite::build(login_validation_rules())
}

pub fn make_signup_validation() -> ValidationComposite {
    ValidationComposite::build(signup_validation_rules())
}
