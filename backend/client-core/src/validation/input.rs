use serde_json::{Map, Value};

use std::borrow::Cow;

/// Current values of a form, keyed by field name.
///
/// A missing key is an untouched field; `Value::Null` is an explicit null.
/// Both count as blank for the required and email rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    values: Map<String, Value>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// True when the field is absent, null, or the empty string.
    pub fn is_blank(&self, field: &str) -> bool {
        match self.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(text)) => text.is_empty(),
            Some(_) => false,
        }
    }

    /// Textual form of a field value.
    ///
    /// Strings are borrowed as-is; numbers and booleans use their JSON
    /// rendering. Absent and null fields have no text.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.get(field)? {
            Value::Null => None,
            Value::String(text) => Some(Cow::Borrowed(text.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl From<Map<String, Value>> for FormInput {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K, V> FromIterator<(K, V)> for FormInput
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut input = Self::new();
        for (field, value) in iter {
            input.set(field, value);
        }
        input
    }
}
