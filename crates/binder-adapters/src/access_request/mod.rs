//! Sample request schema: a user asking to be granted a set of roles.
//!
//! ```text
//! AccessRequest
//! ├── User (required)
//! │   ├── Id        (required, UUID)
//! │   ├── UserName  (required)
//! │   │   ├── FirstName (required)
//! │   │   └── LastName  (required)
//! │   └── Email     (optional, validated)
//! ├── Roles[]       (required)
//! │   ├── Id        (required, 2-8 uppercase letters)
//! │   └── Name      (required)
//! ├── Tags[]        (optional, kebab-case)
//! └── Justification (optional)
//! ```

pub mod convert;
pub mod dto;
pub mod model;

pub use convert::convert_access_request;
pub use dto::{AccessRequestDto, RoleDto, UserDto, UserNameDto};
pub use model::{AccessRequest, EmailAddress, ModelError, Role, RoleId, Tag, User, UserName};

use binder_core::{BindingError, bind};
use tracing::{debug, instrument};

/// Bind a loaded access-request DTO into the domain model.
///
/// # Errors
/// [`BindingError`] listing every validation error in the request.
#[instrument(skip_all)]
pub fn bind_access_request(dto: &AccessRequestDto) -> Result<AccessRequest, BindingError> {
    let result = bind(dto, convert_access_request);
    if let Ok(request) = &result {
        debug!(
            roles = request.roles.len(),
            tags = request.tags.len(),
            "access request bound"
        );
    }
    result
}
