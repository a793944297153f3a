use crate::validation::{FieldValidation, FormInput, Validation};

/// All rules of one form, queried one field at a time.
///
/// Immutable after construction and free of cached state, so it is safe
/// to share across readers and to call on every keystroke.
#[derive(Debug)]
pub struct ValidationComposite {
    validators: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    /// Build from rules in evaluation order, typically several builder
    /// outputs chained together.
    pub fn build<V>(validators: impl IntoIterator<Item = V>) -> Self
    where
        V: FieldValidation + 'static,
    {
        Self {
            validators: validators
                .into_iter()
                .map(|validator| Box::new(validator) as Box<dyn FieldValidation>)
                .collect(),
        }
    }

    /// Build from already boxed rules, for mixing custom rules with built ones.
    pub fn from_boxed(validators: Vec<Box<dyn FieldValidation>>) -> Self {
        Self { validators }
    }

    /// Distinct field names in first-seen order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for validator in &self.validators {
            if !fields.contains(&validator.field()) {
                fields.push(validator.field());
            }
        }
        fields
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl Validation for ValidationComposite {
    /// First failing rule wins; later rules for the same field are not run.
    fn validate(&self, field_name: &str, input: &FormInput) -> Option<String> {
        self.validators
            .iter()
            .filter(|validator| validator.field() == field_name)
            .find_map(|validator| validator.validate(input))
            .map(|error| error.to_string())
    }
}
