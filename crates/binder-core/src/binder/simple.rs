use std::fmt::Display;

use tracing::trace;

use crate::{
    property::{OptionalProperty, RequiredProperty},
    validation::{ARGUMENT_REQUIRED, ArgumentPath},
};

use super::Binder;

/// Builder returned by [`Binder::simple_property`].
///
/// Only `None` counts as absent. An empty or blank string is a present value;
/// callers that want to reject blanks can do so with
/// [`as_required_with`](Self::as_required_with).
#[must_use = "call as_required or as_optional to bind the property"]
pub struct SimpleProperty<'b, 's, S, T> {
    binder: &'b mut Binder<'s, S>,
    path: ArgumentPath,
    value: Option<T>,
}

impl<'b, 's, S, T> SimpleProperty<'b, 's, S, T> {
    pub(super) fn new(binder: &'b mut Binder<'s, S>, name: &str, value: Option<T>) -> Self {
        let path = binder.scope().path().field(name);
        Self {
            binder,
            path,
            value,
        }
    }

    /// Absence records "Argument is required." and yields an invalid outcome.
    pub fn as_required(self) -> RequiredProperty<T> {
        match self.value {
            Some(value) => RequiredProperty::valid(self.path.into_string(), value),
            None => {
                trace!(path = %self.path, "required simple property missing");
                self.binder
                    .scope_mut()
                    .record(self.path.clone(), ARGUMENT_REQUIRED);
                RequiredProperty::invalid(self.path.into_string())
            }
        }
    }

    /// Absence is valid and reported through `is_missing`.
    pub fn as_optional(self) -> OptionalProperty<T> {
        match self.value {
            Some(value) => OptionalProperty::present(self.path.into_string(), value),
            None => OptionalProperty::missing(self.path.into_string()),
        }
    }

    /// Like [`as_required`](Self::as_required), then run `parse` on the
    /// present value. A parse failure records the error's text under the
    /// property's path.
    pub fn as_required_with<U, E, P>(self, parse: P) -> RequiredProperty<U>
    where
        P: FnOnce(T) -> Result<U, E>,
        E: Display,
    {
        let Some(value) = self.value else {
            self.binder
                .scope_mut()
                .record(self.path.clone(), ARGUMENT_REQUIRED);
            return RequiredProperty::invalid(self.path.into_string());
        };

        match parse(value) {
            Ok(parsed) => RequiredProperty::valid(self.path.into_string(), parsed),
            Err(e) => {
                trace!(path = %self.path, error = %e, "simple property rejected by parser");
                self.binder
                    .scope_mut()
                    .record(self.path.clone(), e.to_string());
                RequiredProperty::invalid(self.path.into_string())
            }
        }
    }

    /// Like [`as_optional`](Self::as_optional), then run `parse` on a present
    /// value. Absence never reaches the parser.
    pub fn as_optional_with<U, E, P>(self, parse: P) -> OptionalProperty<U>
    where
        P: FnOnce(T) -> Result<U, E>,
        E: Display,
    {
        let Some(value) = self.value else {
            return OptionalProperty::missing(self.path.into_string());
        };

        match parse(value) {
            Ok(parsed) => OptionalProperty::present(self.path.into_string(), parsed),
            Err(e) => {
                self.binder
                    .scope_mut()
                    .record(self.path.clone(), e.to_string());
                OptionalProperty::invalid(self.path.into_string())
            }
        }
    }
}
