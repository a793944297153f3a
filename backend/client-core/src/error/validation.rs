use thiserror::Error as ThisError;

/// Failure returned by a field rule.
///
/// Returned, never raised: the composite turns it into the message the
/// view shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("Required field")]
    RequiredField,

    #[error("Invalid field")]
    InvalidField,
}
