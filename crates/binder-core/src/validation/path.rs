use std::fmt;

use serde::Serialize;

/// A dotted/indexed argument path such as `User.UserName` or `Roles[1].Name`.
///
/// Paths are composed segment by segment as the binder descends into nested
/// objects:
/// - a field name is joined to a non-empty prefix with `.`
/// - an index attaches to the preceding segment with no separator
///
/// The root path is empty, so the first field of a root DTO is just its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArgumentPath(String);

impl ArgumentPath {
    /// The empty path of a root binder.
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// `true` for the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend the path with a field name.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            return Self(name.to_owned());
        }
        Self(format!("{}.{}", self.0, name))
    }

    /// Extend the path with an index on the last segment.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    /// Shorthand for `field(name).index(index)`.
    pub fn element(&self, name: &str, index: usize) -> Self {
        self.field(name).index(index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ArgumentPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArgumentPath {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for ArgumentPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ArgumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
