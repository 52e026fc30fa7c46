//! The binder: extraction, nested conversion and error folding.
//!
//! ```text
//! Created → Extracting (0..n property calls) → Asserted | Aborted → Folded
//! ```
//!
//! A root binder is created with [`Bind::properties_of`]; nested binders are
//! created by the engine for the duration of one converter invocation and
//! folded into their parent when it returns.

mod complex;
mod list;
mod simple;

pub use complex::ComplexProperty;
pub use list::{ComplexListProperty, SimpleListProperty};
pub use simple::SimpleProperty;

use tracing::{debug, error, instrument};

use crate::{
    error::{BindError, BindResult, BindingError},
    validation::{ArgumentPath, ErrorScope, ValidationError, ValidationErrors},
};

/// Entry point for binding a root DTO.
pub struct Bind;

impl Bind {
    /// Start binding the properties of `source`.
    pub fn properties_of<S>(source: &S) -> Binder<'_, S> {
        Binder::new(source, ErrorScope::root())
    }
}

/// Bind `source` with `convert` and return either the fully built value or
/// every validation error found anywhere in the object tree.
///
/// # Errors
/// - [`BindingError::Invalid`] when any validation error was recorded, even if
///   the converter still produced a value.
/// - [`BindingError::Converter`] when a converter anywhere in the tree read
///   an invalid outcome that no validation error explains. This wins over
///   validation errors.
#[instrument(level = "debug", skip_all)]
pub fn bind<'s, S, T, F>(source: &'s S, convert: F) -> Result<T, BindingError>
where
    F: FnOnce(&mut Binder<'s, S>) -> BindResult<T>,
{
    let mut binder = Bind::properties_of(source);
    let result = convert(&mut binder);

    if let Some(fault) = binder.fault.take() {
        error!(error = %fault, "nested converter fault");
        return Err(BindingError::Converter(fault));
    }

    if binder.has_error() {
        debug!(errors = binder.error_count(), "binding rejected");
        return Err(BindingError::Invalid(binder.into_errors()));
    }

    result.map_err(|e| {
        error!(error = %e, "root converter failed without validation errors");
        BindingError::Converter(e)
    })
}

/// Binds the properties of one DTO instance and owns its error scope.
#[derive(Debug)]
pub struct Binder<'s, S> {
    source: &'s S,
    scope: ErrorScope,
    fault: Option<BindError>,
}

impl<'s, S> Binder<'s, S> {
    pub(crate) fn new(source: &'s S, scope: ErrorScope) -> Self {
        Self {
            source,
            scope,
            fault: None,
        }
    }

    /// The DTO being bound.
    pub fn source(&self) -> &'s S {
        self.source
    }

    /// Path prefix of this binder (empty for a root binder).
    pub fn path(&self) -> &ArgumentPath {
        self.scope.path()
    }

    pub fn has_error(&self) -> bool {
        !self.scope.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.scope.len()
    }

    /// Errors recorded so far, in processing order.
    pub fn errors(&self) -> &[ValidationError] {
        self.scope.errors()
    }

    /// Converter fault raised by a nested invocation, if any.
    ///
    /// Set when a nested converter failed with
    /// [`BindError::InvalidState`] without recording any validation error.
    /// Once set it stays set.
    pub fn fault(&self) -> Option<&BindError> {
        self.fault.as_ref()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.scope.into_errors()
    }

    /// Stop the current converter if anything has been recorded so far.
    ///
    /// Use with `?` right before building the target value:
    ///
    /// ```
    /// use binder_core::{Binder, BindResult};
    ///
    /// struct RoleDto { id: Option<String> }
    ///
    /// fn convert(bind: &mut Binder<'_, RoleDto>) -> BindResult<String> {
    ///     let id = bind.simple_property("Id", |r| r.id.clone()).as_required();
    ///     bind.assert_has_no_error()?;
    ///     id.into_value()
    /// }
    /// ```
    ///
    /// # Errors
    /// - the recorded fault, when a nested converter faulted;
    /// - [`BindError::Aborted`] when the scope is non-empty.
    pub fn assert_has_no_error(&self) -> BindResult<()> {
        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }
        if self.scope.is_empty() {
            return Ok(());
        }
        Err(BindError::Aborted {
            error_count: self.scope.len(),
        })
    }

    /// Record a converter-level failure against `field` of this DTO.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.scope.add_error(field, message);
    }

    /// Bind a scalar, string or other value-typed field.
    pub fn simple_property<T>(
        &mut self,
        name: &str,
        select: impl FnOnce(&'s S) -> Option<T>,
    ) -> SimpleProperty<'_, 's, S, T> {
        let value = select(self.source);
        SimpleProperty::new(self, name, value)
    }

    /// Bind a nested object through a converter function.
    pub fn complex_property<N>(
        &mut self,
        name: &str,
        select: impl FnOnce(&'s S) -> Option<&'s N>,
    ) -> ComplexProperty<'_, 's, S, N> {
        let nested = select(self.source);
        ComplexProperty::new(self, name, nested)
    }

    /// Bind a sequence of nested objects, each through the same converter.
    pub fn list_of_complex_properties<N>(
        &mut self,
        name: &str,
        select: impl FnOnce(&'s S) -> Option<&'s [N]>,
    ) -> ComplexListProperty<'_, 's, S, N> {
        let items = select(self.source);
        ComplexListProperty::new(self, name, items)
    }

    /// Bind a sequence of scalar values.
    pub fn list_of_simple_properties<T>(
        &mut self,
        name: &str,
        select: impl FnOnce(&'s S) -> Option<&'s [T]>,
    ) -> SimpleListProperty<'_, 's, S, T> {
        let items = select(self.source);
        SimpleListProperty::new(self, name, items)
    }

    pub(crate) fn scope(&self) -> &ErrorScope {
        &self.scope
    }

    pub(crate) fn scope_mut(&mut self) -> &mut ErrorScope {
        &mut self.scope
    }

    /// Run one converter invocation over `source` in `scope`, then fold its
    /// errors into this binder.
    ///
    /// Returns the converted value only if the nested scope ended empty; an
    /// early exit or a value built despite recorded errors yields `None`.
    /// A [`BindError::InvalidState`] that no recorded error explains, or a
    /// fault already raised deeper down, becomes this binder's fault.
    pub(crate) fn convert_nested<'n, N, T, F>(
        &mut self,
        source: &'n N,
        scope: ErrorScope,
        convert: F,
    ) -> Option<T>
    where
        F: FnOnce(&mut Binder<'n, N>) -> BindResult<T>,
    {
        let mut nested = Binder::new(source, scope);
        let result = convert(&mut nested);
        let clean = !nested.has_error() && nested.fault.is_none();

        let fault = match (&result, nested.fault.take()) {
            (_, Some(inner)) => Some(inner),
            (Err(BindError::InvalidState), None) if !nested.has_error() => {
                Some(BindError::InvalidState)
            }
            _ => None,
        };
        if let Some(fault) = fault {
            self.fault.get_or_insert(fault);
        }

        match &result {
            Err(BindError::Aborted { error_count }) => {
                debug!(scope = %nested.path(), error_count, "nested conversion aborted");
            }
            Err(BindError::InvalidState) => {
                error!(
                    scope = %nested.path(),
                    "converter read an invalid property; call assert_has_no_error first"
                );
            }
            Ok(_) if !clean => {
                debug!(scope = %nested.path(), "discarding value built despite errors");
            }
            Ok(_) => {}
        }

        self.scope.absorb(nested.scope);
        result.ok().filter(|_| clean)
    }
}
