use std::fmt::Display;

use tracing::{debug, trace};

use crate::{
    error::BindResult,
    property::{OptionalProperty, RequiredProperty},
    validation::{ARGUMENT_REQUIRED, ArgumentPath},
};

use super::Binder;

/// Per-element result of a list binding.
struct Collected<T> {
    values: Vec<T>,
    failed: usize,
}

/// Builder returned by [`Binder::list_of_complex_properties`].
///
/// Every element is converted in its own nested binder under `Name[i]`. A
/// failing element never stops the iteration: its errors are folded, it is
/// left out of the resulting value, and the outcome becomes invalid.
#[must_use = "call as_required or as_optional to bind the list"]
pub struct ComplexListProperty<'b, 's, S, N> {
    binder: &'b mut Binder<'s, S>,
    name: String,
    items: Option<&'s [N]>,
}

impl<'b, 's, S, N> ComplexListProperty<'b, 's, S, N> {
    pub(super) fn new(binder: &'b mut Binder<'s, S>, name: &str, items: Option<&'s [N]>) -> Self {
        Self {
            binder,
            name: name.to_owned(),
            items,
        }
    }

    /// An absent list records "Argument is required."; an empty list is valid.
    pub fn as_required<T, F>(self, convert: F) -> RequiredProperty<Vec<T>>
    where
        F: FnMut(&mut Binder<'s, N>) -> BindResult<T>,
    {
        let path = self.binder.scope().path().field(&self.name);
        let Some(items) = self.items else {
            trace!(path = %path, "required list missing");
            self.binder.scope_mut().record(path.clone(), ARGUMENT_REQUIRED);
            return RequiredProperty::invalid(path.into_string());
        };

        let collected = convert_each(self.binder, &self.name, items, convert);
        if collected.failed == 0 {
            RequiredProperty::valid(path.into_string(), collected.values)
        } else {
            RequiredProperty::invalid_with_partial(path.into_string(), collected.values)
        }
    }

    /// An absent list is valid, missing, and resolves to an empty `Vec`.
    pub fn as_optional<T, F>(self, convert: F) -> OptionalProperty<Vec<T>>
    where
        F: FnMut(&mut Binder<'s, N>) -> BindResult<T>,
    {
        let path = self.binder.scope().path().field(&self.name);
        let Some(items) = self.items else {
            return OptionalProperty::missing_as(path.into_string(), Vec::new());
        };

        let collected = convert_each(self.binder, &self.name, items, convert);
        if collected.failed == 0 {
            OptionalProperty::present(path.into_string(), collected.values)
        } else {
            OptionalProperty::invalid_with_partial(path.into_string(), collected.values)
        }
    }
}

fn convert_each<'s, S, N, T, F>(
    binder: &mut Binder<'s, S>,
    name: &str,
    items: &'s [N],
    mut convert: F,
) -> Collected<T>
where
    F: FnMut(&mut Binder<'s, N>) -> BindResult<T>,
{
    let mut values = Vec::with_capacity(items.len());
    let mut failed = 0;

    for (index, item) in items.iter().enumerate() {
        let scope = binder.scope().for_element(name, index);
        match binder.convert_nested(item, scope, &mut convert) {
            Some(value) => values.push(value),
            None => failed += 1,
        }
    }

    if failed > 0 {
        debug!(list = name, total = items.len(), failed, "list elements rejected");
    }
    Collected { values, failed }
}

/// Builder returned by [`Binder::list_of_simple_properties`].
#[must_use = "call as_required or as_optional to bind the list"]
pub struct SimpleListProperty<'b, 's, S, T> {
    binder: &'b mut Binder<'s, S>,
    path: ArgumentPath,
    items: Option<&'s [T]>,
}

impl<'b, 's, S, T> SimpleListProperty<'b, 's, S, T> {
    pub(super) fn new(binder: &'b mut Binder<'s, S>, name: &str, items: Option<&'s [T]>) -> Self {
        let path = binder.scope().path().field(name);
        Self {
            binder,
            path,
            items,
        }
    }

    /// An absent list records "Argument is required."; elements are cloned.
    pub fn as_required(self) -> RequiredProperty<Vec<T>>
    where
        T: Clone,
    {
        match self.items {
            Some(items) => RequiredProperty::valid(self.path.into_string(), items.to_vec()),
            None => {
                self.binder
                    .scope_mut()
                    .record(self.path.clone(), ARGUMENT_REQUIRED);
                RequiredProperty::invalid(self.path.into_string())
            }
        }
    }

    /// An absent list is valid, missing, and resolves to an empty `Vec`.
    pub fn as_optional(self) -> OptionalProperty<Vec<T>>
    where
        T: Clone,
    {
        match self.items {
            Some(items) => OptionalProperty::present(self.path.into_string(), items.to_vec()),
            None => OptionalProperty::missing_as(self.path.into_string(), Vec::new()),
        }
    }

    /// Parse every element with `parse`; failures are recorded at `Name[i]`
    /// and the remaining elements are still parsed.
    pub fn as_required_with<U, E, P>(self, parse: P) -> RequiredProperty<Vec<U>>
    where
        P: FnMut(&T) -> Result<U, E>,
        E: Display,
    {
        let Some(items) = self.items else {
            self.binder
                .scope_mut()
                .record(self.path.clone(), ARGUMENT_REQUIRED);
            return RequiredProperty::invalid(self.path.into_string());
        };

        let (values, failed) = parse_each(self.binder, &self.path, items, parse);
        if failed == 0 {
            RequiredProperty::valid(self.path.into_string(), values)
        } else {
            RequiredProperty::invalid_with_partial(self.path.into_string(), values)
        }
    }

    /// Optional counterpart of [`as_required_with`](Self::as_required_with).
    pub fn as_optional_with<U, E, P>(self, parse: P) -> OptionalProperty<Vec<U>>
    where
        P: FnMut(&T) -> Result<U, E>,
        E: Display,
    {
        let Some(items) = self.items else {
            return OptionalProperty::missing_as(self.path.into_string(), Vec::new());
        };

        let (values, failed) = parse_each(self.binder, &self.path, items, parse);
        if failed == 0 {
            OptionalProperty::present(self.path.into_string(), values)
        } else {
            OptionalProperty::invalid_with_partial(self.path.into_string(), values)
        }
    }
}

fn parse_each<S, T, U, E, P>(
    binder: &mut Binder<'_, S>,
    path: &ArgumentPath,
    items: &[T],
    mut parse: P,
) -> (Vec<U>, usize)
where
    P: FnMut(&T) -> Result<U, E>,
    E: Display,
{
    let mut values = Vec::with_capacity(items.len());
    let mut failed = 0;

    for (index, item) in items.iter().enumerate() {
        match parse(item) {
            Ok(value) => values.push(value),
            Err(e) => {
                binder.scope_mut().record(path.index(index), e.to_string());
                failed += 1;
            }
        }
    }
    (values, failed)
}
