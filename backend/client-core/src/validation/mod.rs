//! Field validation engine.
//!
//! A form describes *what* must hold about its inputs by building rules
//! per field; the [`ValidationComposite`] answers "first failing message for
//! field X" on every keystroke. Rules are pure and synchronous, and
//! failure is always a returned value.
//!
//! ```ignore
//! let composite = ValidationComposite::build(
//!     ValidationBuilder::field("email").required().email().build()
//!         .into_iter()
//!         .chain(ValidationBuilder::field("password").required().min_length(5).build()),
//! );
//! let error = composite.validate("email", &input);
//! ```

pub mod builder;
pub mod composite;
pub mod input;
pub mod validators;

pub use builder::ValidationBuilder;
pub use composite::ValidationComposite;
pub use input::FormInput;
pub use validators::{
    CompareFieldsValidation, EmailValidation, FieldRule, MinLengthValidation,
    RequiredFieldValidation,
};

use crate::error::ValidationError;

use std::fmt::Debug;

/// The capability the form layer consumes.
pub trait Validation {
    /// Message of the first failing rule for `field_name`, or `None`.
    fn validate(&self, field_name: &str, input: &FormInput) -> Option<String>;
}

/// One checkable constraint on one named field.
///
/// Implementations read only their own field (plus, for comparison rules,
/// one other named field) and never mutate the input.
pub trait FieldValidation: Debug + Send + Sync {
    fn field(&self) -> &str;

    fn validate(&self, input: &FormInput) -> Option<ValidationError>;
}
