//! Binder Core - request-to-domain binding engine
//!
//! Turns an externally supplied DTO, whose fields may be absent or malformed,
//! into a validated domain object. Every validation failure found anywhere in
//! the object tree is collected, with paths that mirror the nested structure
//! (`User.UserName`, `Roles[1].Name`), instead of stopping at the first one.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Converter functions (caller)       │
//! │  fn(&mut Binder<Dto>) -> BindResult<T>  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │                 Binder                  │
//! │  simple / complex / list properties,    │
//! │  nested binders, error folding          │
//! └──────────────────┬──────────────────────┘
//!                    │ produces
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   RequiredProperty / OptionalProperty   │
//! │   ErrorScope → ValidationErrors         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use binder_core::{bind, BindResult, Binder};
//!
//! struct RoleDto { id: Option<String>, name: Option<String> }
//! #[derive(Debug)]
//! struct Role { id: String, name: String }
//!
//! fn convert_role(bind: &mut Binder<'_, RoleDto>) -> BindResult<Role> {
//!     let id = bind.simple_property("Id", |r| r.id.clone()).as_required();
//!     let name = bind.simple_property("Name", |r| r.name.clone()).as_required();
//!     bind.assert_has_no_error()?;
//!
//!     Ok(Role { id: id.into_value()?, name: name.into_value()? })
//! }
//!
//! let dto = RoleDto { id: Some("ADM".into()), name: None };
//! let errors = bind(&dto, convert_role).unwrap_err();
//! assert_eq!(errors.validation_errors().unwrap().len(), 1);
//! ```

pub mod binder;
pub mod error;
pub mod property;
pub mod validation;

pub use binder::{
    Bind, Binder, ComplexListProperty, ComplexProperty, SimpleListProperty, SimpleProperty, bind,
};
pub use error::{BindError, BindResult, BindingError, ErrorCategory, PROPERTY_NOT_VALID};
pub use property::{OptionalProperty, Property, RequiredProperty};
pub use validation::{
    ARGUMENT_REQUIRED, ArgumentPath, ErrorScope, ValidationError, ValidationErrors,
};

// Public API - what converter authors should use
pub mod prelude {
    pub use crate::binder::{Bind, Binder, bind};
    pub use crate::error::{BindError, BindResult, BindingError};
    pub use crate::property::{OptionalProperty, Property, RequiredProperty};
    pub use crate::validation::{ValidationError, ValidationErrors};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
