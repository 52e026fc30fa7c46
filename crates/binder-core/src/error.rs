//! Error types for the binding engine.
//!
//! Validation failures are *not* errors in this sense: they are accumulated
//! as [`ValidationError`](crate::validation::ValidationError) values. The types
//! here describe control flow out of a converter function and the final verdict
//! of a top-level binding.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Message carried by [`BindError::InvalidState`].
pub const PROPERTY_NOT_VALID: &str = "Property is not valid.";

/// Why a converter function stopped before producing its value.
///
/// Converters return [`BindResult`] and use `?` on
/// [`Binder::assert_has_no_error`](crate::Binder::assert_has_no_error) and on
/// property value accessors. The engine catches both variants at the boundary
/// of the converter invocation that produced them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    /// `assert_has_no_error` found recorded validation errors.
    #[error("Conversion aborted: {error_count} validation error(s) recorded.")]
    Aborted { error_count: usize },

    /// A converter read the value of an outcome that is not valid.
    #[error("Property is not valid.")]
    InvalidState,
}

impl BindError {
    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Aborted { .. } => ErrorCategory::Validation,
            Self::InvalidState => ErrorCategory::Usage,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Aborted { error_count } => vec![format!(
                "{error_count} validation error(s) were reported for this input"
            )],
            Self::InvalidState => vec![
                "A converter read a property value without checking validity".into(),
                "Call `assert_has_no_error()?` before building the target value".into(),
            ],
        }
    }
}

/// Result of a converter function.
pub type BindResult<T> = Result<T, BindError>;

/// Verdict of a top-level [`bind`](crate::bind) call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The input was rejected; carries every error found in the object tree.
    #[error("{0}")]
    Invalid(ValidationErrors),

    /// The root converter misused the engine without any validation error
    /// to explain it.
    #[error("Converter fault: {0}")]
    Converter(#[source] BindError),
}

impl BindingError {
    /// Validation errors, if this is a rejected input.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Converter(_) => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Invalid(_) => ErrorCategory::Validation,
            Self::Converter(e) => e.category(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => errors
                .iter()
                .map(|e| format!("Fix `{}`: {}", e.argument_path(), e.message()))
                .collect(),
            Self::Converter(e) => e.suggestions(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input data was rejected.
    Validation,
    /// A converter function used the engine incorrectly (a bug).
    Usage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn invalid_state_message_is_fixed() {
        assert_eq!(BindError::InvalidState.to_string(), PROPERTY_NOT_VALID);
    }

    #[test]
    fn categories_separate_validation_from_misuse() {
        assert_eq!(
            BindError::Aborted { error_count: 1 }.category(),
            ErrorCategory::Validation
        );
        assert_eq!(BindError::InvalidState.category(), ErrorCategory::Usage);
    }

    #[test]
    fn invalid_binding_suggests_each_field() {
        let err = BindingError::Invalid(ValidationErrors::from(vec![
            ValidationError::required("User"),
            ValidationError::required("Roles"),
        ]));
        let suggestions = err.suggestions();
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("`User`"));
    }

    #[test]
    fn converter_fault_exposes_no_validation_errors() {
        let err = BindingError::Converter(BindError::InvalidState);
        assert!(err.validation_errors().is_none());
        assert_eq!(err.category(), ErrorCategory::Usage);
    }
}
