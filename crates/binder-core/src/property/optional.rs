use crate::error::{BindError, BindResult};

use super::Property;

/// Outcome of a property bound with `as_optional`.
///
/// Absence is not an error: a missing property is valid, reports
/// [`is_missing`](Self::is_missing) and yields `None`, except for lists, which
/// resolve to an empty `Vec` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalProperty<T> {
    argument_name: String,
    valid: bool,
    missing: bool,
    value: Option<T>,
}

impl<T> OptionalProperty<T> {
    pub(crate) fn present(argument_name: impl Into<String>, value: T) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: true,
            missing: false,
            value: Some(value),
        }
    }

    pub(crate) fn missing(argument_name: impl Into<String>) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: true,
            missing: true,
            value: None,
        }
    }

    /// Missing, but resolving to a type-appropriate empty value.
    pub(crate) fn missing_as(argument_name: impl Into<String>, empty: T) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: true,
            missing: true,
            value: Some(empty),
        }
    }

    pub(crate) fn invalid(argument_name: impl Into<String>) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: false,
            missing: false,
            value: None,
        }
    }

    pub(crate) fn invalid_with_partial(argument_name: impl Into<String>, partial: T) -> Self {
        Self {
            argument_name: argument_name.into(),
            valid: false,
            missing: false,
            value: Some(partial),
        }
    }

    /// `true` when the source field was absent.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    /// Borrow the value, `None` when missing.
    ///
    /// An invalid list refuses here too; the elements that did convert are
    /// still readable through [`partial_value`](Self::partial_value).
    ///
    /// # Errors
    /// [`BindError::InvalidState`] if the property is not valid.
    pub fn value(&self) -> BindResult<Option<&T>> {
        if !self.valid {
            return Err(BindError::InvalidState);
        }
        Ok(self.value.as_ref())
    }

    /// Take the value, `None` when missing.
    ///
    /// # Errors
    /// [`BindError::InvalidState`] if the property is not valid.
    pub fn into_value(self) -> BindResult<Option<T>> {
        if !self.valid {
            return Err(BindError::InvalidState);
        }
        Ok(self.value)
    }

    /// Take the value, falling back to `T::default()` when missing.
    ///
    /// # Errors
    /// [`BindError::InvalidState`] if the property is not valid.
    pub fn into_value_or_default(self) -> BindResult<T>
    where
        T: Default,
    {
        self.into_value().map(Option::unwrap_or_default)
    }

    /// Whatever was converted, regardless of validity.
    pub fn partial_value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Property for OptionalProperty<T> {
    fn argument_name(&self) -> &str {
        &self.argument_name
    }

    fn is_valid(&self) -> bool {
        self.valid
    }
}
