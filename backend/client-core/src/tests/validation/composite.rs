// Unit tests for ValidationComposite

use crate::error::ValidationError;
use crate::tests::mocks::FieldValidationSpy;
use crate::validation::{
    FieldValidation, FormInput, Validation, ValidationBuilder, ValidationComposite,
};

use std::sync::atomic::Ordering;

fn login_composite() -> ValidationComposite {
    ValidationComposite::build(
        ValidationBuilder::field("email")
            .required()
            .email()
            .build()
            .into_iter()
            .chain(
                ValidationBuilder::field("password")
                    .required()
                    .min_length(5)
                    .build(),
            ),
    )
}

/// **VALUE**: Verifies the composite returns the message of the first failing rule only.
///
/// **WHY THIS MATTERS**: The view shows one message per field. Returning a later rule's
/// message (or a concatenation) would confuse users about what to fix first.
///
/// **BUG THIS CATCHES**: Would catch iteration that keeps going after the first failure
/// and returns the last error instead.
#[test]
fn given_two_failing_rules_for_field_when_validated_then_returns_first_message() {
    // GIVEN: Two failing spies for the same field
    let (first, first_calls) =
        FieldValidationSpy::new("email", Some(ValidationError::RequiredField));
    let (second, second_calls) =
        FieldValidationSpy::new("email", Some(ValidationError::InvalidField));
    let sut = ValidationComposite::from_boxed(vec![Box::new(first), Box::new(second)]);

    // WHEN: Validating the field
    let error = sut.validate("email", &FormInput::new());

    // THEN: First message wins and the second rule never runs
    assert_eq!(error.as_deref(), Some("Required field"));
    assert_eq!(first_calls.load(Ordering::SeqCst), 1);
    assert_eq!(second_calls.load(Ordering::SeqCst), 0, "Should fail fast");
}

#[test]
fn given_passing_then_failing_rule_when_validated_then_returns_failing_message() {
    let (passing, _) = FieldValidationSpy::new("email", None);
    let (failing, _) = FieldValidationSpy::new("email", Some(ValidationError::InvalidField));
    let sut = ValidationComposite::from_boxed(vec![Box::new(passing), Box::new(failing)]);

    let error = sut.validate("email", &FormInput::new());

    assert_eq!(error.as_deref(), Some("Invalid field"));
}

/// **VALUE**: Verifies rules for other fields are never evaluated.
///
/// **BUG THIS CATCHES**: Would catch a composite that runs every rule and then filters,
/// which reports another field's failure under the wrong field.
#[test]
fn given_failing_rule_on_other_field_when_validated_then_returns_none_and_skips_it() {
    let (other, other_calls) =
        FieldValidationSpy::new("password", Some(ValidationError::InvalidField));
    let (own, _) = FieldValidationSpy::new("email", None);
    let sut = ValidationComposite::from_boxed(vec![Box::new(other), Box::new(own)]);

    let error = sut.validate("email", &FormInput::new());

    assert_eq!(error, None);
    assert_eq!(other_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn given_field_without_rules_when_validated_then_returns_none() {
    let sut = login_composite();

    let error = sut.validate("nickname", &FormInput::new());

    assert_eq!(error, None);
}

/// **VALUE**: Verifies builder order decides which message wins for a field.
///
/// **WHY THIS MATTERS**: Reordering rules for the SAME field may change the message,
/// and the composite must follow construction order, not any sorted order.
#[test]
fn given_same_rules_in_different_order_when_validated_then_message_follows_order() {
    // GIVEN: A blank email, which fails both Required and MinLength
    let blank = FormInput::new().with("email", "");
    let required_first = ValidationComposite::build(
        ValidationBuilder::field("email").required().min_length(5).build(),
    );
    let length_then_required = ValidationComposite::build(
        ValidationBuilder::field("email").min_length(5).required().build(),
    );

    // THEN: Each composite reports the rule it was built with first
    assert_eq!(required_first.validate("email", &blank).as_deref(), Some("Required field"));
    assert_eq!(
        length_then_required.validate("email", &blank).as_deref(),
        Some("Invalid field")
    );
}

/// **VALUE**: Verifies interleaving rules of different fields does not change any result.
#[test]
fn given_rules_for_different_fields_reordered_when_validated_then_results_unchanged() {
    let input = FormInput::new().with("email", "bad").with("password", "123");

    let email_rules = ValidationBuilder::field("email").required().email().build();
    let password_rules = ValidationBuilder::field("password").required().min_length(5).build();

    let email_first = ValidationComposite::build(
        email_rules.iter().cloned().chain(password_rules.iter().cloned()),
    );
    let password_first =
        ValidationComposite::build(password_rules.into_iter().chain(email_rules));

    for field in ["email", "password"] {
        assert_eq!(
            email_first.validate(field, &input),
            password_first.validate(field, &input),
            "Result for {field} should not depend on cross-field order"
        );
    }
}

#[test]
fn given_valid_login_input_when_validated_then_every_field_passes() {
    let sut = login_composite();
    let input = FormInput::new()
        .with("email", "ada@example.com")
        .with("password", "engine1843");

    for field in sut.fields() {
        assert_eq!(sut.validate(field, &input), None, "{field} should pass");
    }
    assert_eq!(sut.fields(), vec!["email", "password"]);
    assert_eq!(sut.len(), 4);
}

/// **VALUE**: Verifies validation is idempotent (no hidden state).
#[test]
fn given_same_input_when_validated_twice_then_results_match() {
    let sut = login_composite();
    let input = FormInput::new().with("email", "not-an-email").with("password", "");

    let first = (sut.validate("email", &input), sut.validate("password", &input));
    let second = (sut.validate("email", &input), sut.validate("password", &input));

    assert_eq!(first, second);
    assert_eq!(first.0.as_deref(), Some("Invalid field"));
    assert_eq!(first.1.as_deref(), Some("Required field"));
}

#[test]
fn given_custom_rule_mixed_with_built_rules_when_validated_then_both_participate() {
    let (spy, calls) = FieldValidationSpy::new("email", Some(ValidationError::InvalidField));
    let mut rules: Vec<Box<dyn FieldValidation>> = ValidationBuilder::field("email")
        .required()
        .build()
        .into_iter()
        .map(|rule| Box::new(rule) as Box<dyn FieldValidation>)
        .collect();
    rules.push(Box::new(spy));
    let sut = ValidationComposite::from_boxed(rules);

    let error = sut.validate("email", &FormInput::new().with("email", "x"));

    assert_eq!(error.as_deref(), Some("Invalid field"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
