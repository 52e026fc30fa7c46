use tracing::trace;

use crate::{
    error::BindResult,
    property::{OptionalProperty, RequiredProperty},
    validation::ARGUMENT_REQUIRED,
};

use super::Binder;

/// Builder returned by [`Binder::complex_property`].
#[must_use = "call as_required or as_optional to bind the property"]
pub struct ComplexProperty<'b, 's, S, N> {
    binder: &'b mut Binder<'s, S>,
    name: String,
    nested: Option<&'s N>,
}

impl<'b, 's, S, N> ComplexProperty<'b, 's, S, N> {
    pub(super) fn new(binder: &'b mut Binder<'s, S>, name: &str, nested: Option<&'s N>) -> Self {
        Self {
            binder,
            name: name.to_owned(),
            nested,
        }
    }

    /// Convert the nested object with `convert`.
    ///
    /// An absent object records "Argument is required." and `convert` is never
    /// called. Otherwise the outcome is valid iff the nested conversion
    /// recorded no error; a value built despite errors is discarded.
    pub fn as_required<T, F>(self, convert: F) -> RequiredProperty<T>
    where
        F: FnOnce(&mut Binder<'s, N>) -> BindResult<T>,
    {
        let path = self.binder.scope().path().field(&self.name);
        let Some(nested) = self.nested else {
            trace!(path = %path, "required complex property missing");
            self.binder.scope_mut().record(path.clone(), ARGUMENT_REQUIRED);
            return RequiredProperty::invalid(path.into_string());
        };

        let scope = self.binder.scope().for_field(&self.name);
        match self.binder.convert_nested(nested, scope, convert) {
            Some(value) => RequiredProperty::valid(path.into_string(), value),
            None => RequiredProperty::invalid(path.into_string()),
        }
    }

    /// Like [`as_required`](Self::as_required), but an absent object is a
    /// valid, missing outcome and records nothing.
    pub fn as_optional<T, F>(self, convert: F) -> OptionalProperty<T>
    where
        F: FnOnce(&mut Binder<'s, N>) -> BindResult<T>,
    {
        let path = self.binder.scope().path().field(&self.name);
        let Some(nested) = self.nested else {
            return OptionalProperty::missing(path.into_string());
        };

        let scope = self.binder.scope().for_field(&self.name);
        match self.binder.convert_nested(nested, scope, convert) {
            Some(value) => OptionalProperty::present(path.into_string(), value),
            None => OptionalProperty::invalid(path.into_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bind, BindError, BindResult, Binder, Property};

    struct Outer {
        inner: Option<Inner>,
    }

    struct Inner {
        code: Option<String>,
    }

    fn convert_inner(bind: &mut Binder<'_, Inner>) -> BindResult<String> {
        let code = bind.simple_property("Code", |i| i.code.clone()).as_required();
        bind.assert_has_no_error()?;
        code.into_value()
    }

    #[test]
    fn nested_errors_are_prefixed_with_field_name() {
        let dto = Outer {
            inner: Some(Inner { code: None }),
        };
        let mut bind = Bind::properties_of(&dto);
        let inner = bind
            .complex_property("Inner", |o| o.inner.as_ref())
            .as_required(convert_inner);

        assert!(!inner.is_valid());
        assert_eq!(inner.argument_name(), "Inner");
        assert_eq!(bind.error_count(), 1);
        assert_eq!(bind.errors()[0].argument_path(), "Inner.Code");
    }

    #[test]
    fn optional_missing_skips_converter() {
        let dto = Outer { inner: None };
        let mut bind = Bind::properties_of(&dto);
        let inner = bind
            .complex_property("Inner", |o| o.inner.as_ref())
            .as_optional(|_: &mut Binder<'_, Inner>| -> BindResult<String> {
                panic!("converter must not run for a missing object")
            });

        assert!(inner.is_valid());
        assert!(inner.is_missing());
        assert!(!bind.has_error());
    }

    #[test]
    fn optional_present_converts() {
        let dto = Outer {
            inner: Some(Inner {
                code: Some("X1".into()),
            }),
        };
        let mut bind = Bind::properties_of(&dto);
        let inner = bind
            .complex_property("Inner", |o| o.inner.as_ref())
            .as_optional(convert_inner);

        assert_eq!(inner.into_value().unwrap().as_deref(), Some("X1"));
    }

    #[test]
    fn value_built_despite_errors_is_discarded() {
        let dto = Outer {
            inner: Some(Inner { code: None }),
        };
        let mut bind = Bind::properties_of(&dto);
        let inner = bind
            .complex_property("Inner", |o| o.inner.as_ref())
            .as_required(|b| {
                let _ = b.simple_property("Code", |i| i.code.clone()).as_required();
                Ok("built anyway".to_string())
            });

        assert!(!inner.is_valid());
        assert_eq!(inner.value(), Err(BindError::InvalidState));
        assert_eq!(bind.error_count(), 1);
    }

    #[test]
    fn invalid_state_in_nested_converter_is_contained() {
        let dto = Outer {
            inner: Some(Inner { code: None }),
        };
        let mut bind = Bind::properties_of(&dto);
        let inner = bind
            .complex_property("Inner", |o| o.inner.as_ref())
            .as_required(|b| {
                let code = b.simple_property("Code", |i| i.code.clone()).as_required();
                // Skips assert_has_no_error on purpose.
                code.into_value()
            });

        assert!(!inner.is_valid());
        assert_eq!(bind.errors()[0].argument_path(), "Inner.Code");
        assert!(bind.fault().is_none());
    }
}
