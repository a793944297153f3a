// Unit tests for the four concrete field rules

use crate::error::ValidationError;
use crate::validation::{
    CompareFieldsValidation, EmailValidation, FieldValidation, FormInput, MinLengthValidation,
    RequiredFieldValidation,
};

use serde_json::{Value, json};

// ============================================
// REQUIRED
// ============================================

/// **VALUE**: Verifies Required fails for every shape of "nothing there".
///
/// **WHY THIS MATTERS**: The form disables submit while any field has an error. If an
/// untouched field (absent key) or an explicit null passed Required, users could submit
/// empty forms.
///
/// **BUG THIS CATCHES**: Would catch a check that only looks at `""` or only at missing keys.
#[test]
fn given_empty_null_or_absent_value_when_required_validates_then_returns_required_error() {
    // GIVEN: A required rule on "email"
    let sut = RequiredFieldValidation::new("email");

    // WHEN/THEN: Each empty shape fails
    let empty = FormInput::new().with("email", "");
    let null = FormInput::new().with("email", Value::Null);
    let absent = FormInput::new().with("password", "secret");

    assert_eq!(sut.validate(&empty), Some(ValidationError::RequiredField));
    assert_eq!(sut.validate(&null), Some(ValidationError::RequiredField));
    assert_eq!(sut.validate(&absent), Some(ValidationError::RequiredField));
}

#[test]
fn given_non_empty_values_when_required_validates_then_returns_none() {
    let sut = RequiredFieldValidation::new("age");

    for value in [json!("x"), json!(" "), json!(0), json!(false), json!([])] {
        let input = FormInput::new().with("age", value.clone());
        assert_eq!(sut.validate(&input), None, "Should accept {value}");
    }
}

// ============================================
// EMAIL
// ============================================

/// **VALUE**: Verifies malformed addresses are flagged as invalid.
///
/// **BUG THIS CATCHES**: Would catch a pattern that only checks for '@' and lets
/// "user@localhost" or "a@b." through.
#[test]
fn given_malformed_email_when_email_validates_then_returns_invalid_field() {
    let sut = EmailValidation::new("email");

    for value in ["plainaddress", "user@localhost", "user@domain.", "@domain.com", "a b@c.com"] {
        let input = FormInput::new().with("email", value);
        assert_eq!(
            sut.validate(&input),
            Some(ValidationError::InvalidField),
            "Should reject {value}"
        );
    }
}

#[test]
fn given_well_formed_email_when_email_validates_then_returns_none() {
    let sut = EmailValidation::new("email");

    for value in ["ada@example.com", "first.last@sub.domain.org", "x@[127.0.0.1]"] {
        let input = FormInput::new().with("email", value);
        assert_eq!(sut.validate(&input), None, "Should accept {value}");
    }
}

/// **VALUE**: Verifies Email stays silent on blank values.
///
/// **WHY THIS MATTERS**: Requiredness is a separate rule. If Email also flagged empty
/// values, an optional email field could never be left blank, and a required one would
/// show "Invalid field" instead of "Required field".
#[test]
fn given_blank_value_when_email_validates_then_returns_none() {
    let sut = EmailValidation::new("email");

    assert_eq!(sut.validate(&FormInput::new()), None);
    assert_eq!(sut.validate(&FormInput::new().with("email", "")), None);
    assert_eq!(sut.validate(&FormInput::new().with("email", Value::Null)), None);
}

#[test]
fn given_non_string_value_when_email_validates_then_returns_invalid_field() {
    let sut = EmailValidation::new("email");

    let input = FormInput::new().with("email", 42);

    assert_eq!(sut.validate(&input), Some(ValidationError::InvalidField));
}

// ============================================
// MIN LENGTH
// ============================================

/// **VALUE**: Verifies the boundary: shorter than min fails, exactly min passes.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one (`<=` instead of `<`).
#[test]
fn given_values_around_minimum_when_min_length_validates_then_boundary_is_inclusive() {
    let sut = MinLengthValidation::new("password", 5);

    let short = FormInput::new().with("password", "abcd");
    let exact = FormInput::new().with("password", "abcde");
    let long = FormInput::new().with("password", "abcdef");

    assert_eq!(sut.validate(&short), Some(ValidationError::InvalidField));
    assert_eq!(sut.validate(&exact), None);
    assert_eq!(sut.validate(&long), None);
}

/// **VALUE**: Verifies an absent field passes whatever the minimum.
///
/// **WHY THIS MATTERS**: Optional fields share the rule. Failing on absence would force
/// every optional field to be filled in.
#[test]
fn given_absent_field_when_min_length_validates_then_returns_none() {
    let sut = MinLengthValidation::new("nickname", 100);

    assert_eq!(sut.validate(&FormInput::new().with("email", "a@b.co")), None);
    assert_eq!(sut.validate(&FormInput::new().with("nickname", Value::Null)), None);
}

#[test]
fn given_present_empty_string_when_min_length_validates_then_returns_invalid_field() {
    let sut = MinLengthValidation::new("name", 1);

    let input = FormInput::new().with("name", "");

    assert_eq!(sut.validate(&input), Some(ValidationError::InvalidField));
}

/// **VALUE**: Verifies only strings are measured.
///
/// **WHY THIS MATTERS**: A number or boolean has no length. Measuring its JSON text would
/// make `123` fail a five-character minimum although no text was entered.
///
/// **BUG THIS CATCHES**: Would catch the rule stringifying non-string values before counting.
#[test]
fn given_non_string_value_when_min_length_validates_then_returns_none() {
    // GIVEN: A minimum longer than the rendered values
    let sut = MinLengthValidation::new("code", 5);

    // WHEN / THEN: Numbers and booleans pass
    assert_eq!(sut.validate(&FormInput::new().with("code", json!(123))), None);
    assert_eq!(sut.validate(&FormInput::new().with("code", json!(false))), None);
}

#[test]
fn given_multibyte_text_when_min_length_validates_then_counts_characters() {
    let sut = MinLengthValidation::new("name", 5);

    // 5 characters, 10 bytes
    let input = FormInput::new().with("name", "ÉÉÉÉÉ");

    assert_eq!(sut.validate(&input), None);
}

// ============================================
// COMPARE FIELDS
// ============================================

/// **VALUE**: Verifies a mismatching confirmation is flagged.
///
/// **WHY THIS MATTERS**: This is what stops a sign-up with a mistyped password confirmation.
#[test]
fn given_different_values_when_compare_validates_then_returns_invalid_field() {
    let sut = CompareFieldsValidation::new("passwordConfirmation", "password");

    let input = FormInput::new()
        .with("password", "secret1")
        .with("passwordConfirmation", "secret2");

    assert_eq!(sut.validate(&input), Some(ValidationError::InvalidField));
}

#[test]
fn given_equal_values_when_compare_validates_then_returns_none() {
    let sut = CompareFieldsValidation::new("passwordConfirmation", "password");

    let matching = FormInput::new()
        .with("password", "secret1")
        .with("passwordConfirmation", "secret1");
    let both_empty = FormInput::new()
        .with("password", "")
        .with("passwordConfirmation", "");
    let both_absent = FormInput::new();

    assert_eq!(sut.validate(&matching), None);
    assert_eq!(sut.validate(&both_empty), None);
    assert_eq!(sut.validate(&both_absent), None);
}

/// **VALUE**: Verifies type matters in the comparison, as with strict equality.
#[test]
fn given_same_text_different_types_when_compare_validates_then_returns_invalid_field() {
    let sut = CompareFieldsValidation::new("a", "b");

    let input = FormInput::new().with("a", "1").with("b", 1);

    assert_eq!(sut.validate(&input), Some(ValidationError::InvalidField));
}

/// **VALUE**: Verifies numbers compare by value, not by their JSON encoding.
///
/// **WHY THIS MATTERS**: A numeric field decoded as `1.0` and one typed as `1` hold the
/// same number. Flagging them would show "Invalid field" on matching input.
///
/// **BUG THIS CATCHES**: Would catch falling back to `serde_json::Value` equality, which
/// keeps integer and float representations apart.
#[test]
fn given_integer_and_float_of_same_number_when_compare_validates_then_returns_none() {
    // GIVEN: The same number stored as integer and as float
    let sut = CompareFieldsValidation::new("a", "b");
    let input = FormInput::new().with("a", json!(1)).with("b", json!(1.0));

    // WHEN: Comparing the fields
    let result = sut.validate(&input);

    // THEN: They are equal
    assert_eq!(result, None);
}

#[test]
fn given_different_numbers_when_compare_validates_then_returns_invalid_field() {
    let sut = CompareFieldsValidation::new("a", "b");

    let input = FormInput::new().with("a", json!(1)).with("b", json!(1.5));

    assert_eq!(sut.validate(&input), Some(ValidationError::InvalidField));
}

#[test]
fn given_one_side_absent_when_compare_validates_then_returns_invalid_field() {
    let sut = CompareFieldsValidation::new("a", "b");

    let input = FormInput::new().with("a", "");

    assert_eq!(sut.validate(&input), Some(ValidationError::InvalidField));
}

/// **VALUE**: Verifies no rule mutates the input it validates.
#[test]
fn given_input_when_all_rules_validate_then_input_is_unchanged() {
    let input: FormInput = [("email", "bad"), ("password", "abc")].into_iter().collect();
    let snapshot = input.clone();

    let rules: Vec<Box<dyn FieldValidation>> = vec![
        Box::new(RequiredFieldValidation::new("email")),
        Box::new(EmailValidation::new("email")),
        Box::new(MinLengthValidation::new("password", 5)),
        Box::new(CompareFieldsValidation::new("password", "email")),
    ];
    for rule in &rules {
        let _ = rule.validate(&input);
    }

    assert_eq!(input, snapshot);
}
