//! Outcomes of binding a single property.
//!
//! A binder never hands out raw field values. Every extraction produces either
//! a [`RequiredProperty`] or an [`OptionalProperty`], which remember the
//! argument path they were bound under and whether validation succeeded.

mod optional;
mod required;

pub use optional::OptionalProperty;
pub use required::RequiredProperty;

/// Behaviour shared by both outcome variants.
pub trait Property {
    /// Full argument path the property was bound under.
    fn argument_name(&self) -> &str;

    /// `false` whenever extraction or any nested conversion recorded an error.
    fn is_valid(&self) -> bool;
}
