//! Validation records and the scope that accumulates them.
//!
//! Nothing in here ever fails: validation problems are values that get
//! appended to the nearest [`ErrorScope`] and folded upward.

mod error;
mod path;
mod scope;

pub use error::{ARGUMENT_REQUIRED, ValidationError, ValidationErrors};
pub use path::ArgumentPath;
pub use scope::ErrorScope;
