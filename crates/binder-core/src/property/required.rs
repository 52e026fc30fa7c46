use crate::error::{BindError, BindResult};

use super::Property;

/// Outcome of a property bound with `as_required`.
///
/// The value can only be read when the outcome is valid; reading an invalid
/// outcome fails with [`BindError::InvalidState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredProperty<T> {
    argument_name: String,
    valid: bool,
    value: Option<T>,
}

impl<T> RequiredProperty<T> {
    pub(crate) fn valid(argument_name: impl Into<String>, value: T) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: true,
            value: Some(value),
        }
    }

    pub(crate) fn invalid(argument_name: impl Into<String>) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: false,
            value: None,
        }
    }

    /// Invalid outcome that still remembers what did convert (list elements
    /// that succeeded next to ones that failed).
    pub(crate) fn invalid_with_partial(argument_name: impl Into<String>, partial: T) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: false,
            value: Some(partial),
        }
    }

    /// Borrow the value.
    ///
    /// For an invalid list, see [`partial_value`](Self::partial_value).
    ///
    /// # Errors
    /// [`BindError::InvalidState`] if the property is not valid.
    pub fn value(&self) -> BindResult<&T> {
        match (&self.value, self.valid) {
            (Some(value), true) => Ok(value),
            _ => Err(BindError::InvalidState),
        }
    }

    /// Take the value.
    ///
    /// # Errors
    /// [`BindError::InvalidState`] if the property is not valid.
    pub fn into_value(self) -> BindResult<T> {
        match (self.value, self.valid) {
            (Some(value), true) => Ok(value),
            _ => Err(BindError::InvalidState),
        }
    }

    /// Whatever was converted, regardless of validity.
    pub fn partial_value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Property for RequiredProperty<T> {
    fn argument_name(&self) -> &str {
        &self.argument_name
    }

    fn is_valid(&self) -> bool {
        self.valid
    }
}
