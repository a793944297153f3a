// Unit tests for FormInput construction and blank detection

use crate::validation::FormInput;

use serde_json::{Map, Value, json};

/// **VALUE**: Verifies a JSON object converts into a form input without losing nulls.
///
/// **WHY THIS MATTERS**: Form state often arrives as a decoded JSON object. An explicit
/// `null` must stay distinguishable from a key that was never sent.
///
/// **BUG THIS CATCHES**: Would catch a conversion that drops null entries or stringifies them.
#[test]
fn given_json_map_with_null_when_converted_then_null_and_absent_are_distinct() {
    // GIVEN: An object with a string and an explicit null
    let mut map = Map::new();
    map.insert(String::from("email"), json!("any@mail.com"));
    map.insert(String::from("name"), Value::Null);

    // WHEN: Converting to a FormInput
    let input = FormInput::from(map);

    // THEN: The null is present, the unknown key is absent, and both are blank
    assert_eq!(input.get("email"), Some(&json!("any@mail.com")));
    assert_eq!(input.get("name"), Some(&Value::Null));
    assert_eq!(input.get("password"), None);
    assert!(input.is_blank("name"));
    assert!(input.is_blank("password"));
    assert!(!input.is_blank("email"));
}

#[test]
fn given_pairs_when_collected_then_later_value_for_same_field_wins() {
    let input: FormInput = [
        ("password", json!("first")),
        ("passwordConfirmation", Value::Null),
        ("password", json!("second")),
    ]
    .into_iter()
    .collect();

    assert_eq!(input.get("password"), Some(&json!("second")));
    assert_eq!(input.get("passwordConfirmation"), Some(&Value::Null));
    assert_eq!(input.text("passwordConfirmation"), None);
}

#[test]
fn given_collected_and_fluent_inputs_with_same_values_when_compared_then_equal() {
    let collected: FormInput = [("email", "a@b.co"), ("password", "12345")]
        .into_iter()
        .collect();
    let fluent = FormInput::new()
        .with("email", "a@b.co")
        .with("password", "12345");

    assert_eq!(collected, fluent);
}

#[test]
fn given_non_string_values_when_reading_text_then_uses_json_rendering() {
    let input = FormInput::new().with("age", 42).with("agreed", true);

    assert_eq!(input.text("age").as_deref(), Some("42"));
    assert_eq!(input.text("agreed").as_deref(), Some("true"));
    assert!(!input.is_blank("age"));
}
