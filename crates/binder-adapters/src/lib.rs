//! Adapters around the binding engine.
//!
//! `binder-core` is pure: it never reads files and never decides how errors
//! travel over the wire. This crate holds those concerns:
//!
//! - [`loader`]: read a request document (JSON or TOML) into a DTO
//! - [`problem`]: render validation errors as an RFC 7807 problem-details body
//! - [`access_request`]: a sample request schema with its converter functions

pub mod access_request;
pub mod loader;
pub mod problem;

// Re-export commonly used adapters
pub use loader::{LoadError, RequestFormat, load_request, parse_request};
pub use problem::{InvalidParam, ProblemDetails};
