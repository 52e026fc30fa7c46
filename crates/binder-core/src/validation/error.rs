use std::fmt;

use serde::Serialize;

use super::ArgumentPath;

/// Message recorded when a required value is absent.
pub const ARGUMENT_REQUIRED: &str = "Argument is required.";

/// One validation failure: where it happened and why.
///
/// Immutable once created; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    argument_path: ArgumentPath,
    message: String,
}

impl ValidationError {
    pub fn new(argument_path: impl Into<ArgumentPath>, message: impl Into<String>) -> Self {
        Self {
            argument_path: argument_path.into(),
            message: message.into(),
        }
    }

    /// A "required" failure at `argument_path`.
    pub fn required(argument_path: impl Into<ArgumentPath>) -> Self {
        Self::new(argument_path, ARGUMENT_REQUIRED)
    }

    /// Full path of the offending argument, e.g. `Roles[1].Name`.
    pub fn argument_path(&self) -> &str {
        self.argument_path.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.argument_path, self.message)
    }
}

/// Every validation failure collected during one binding, in the order the
/// fields were processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ValidationError] {
        &self.0
    }

    /// Errors reported for one exact argument path.
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
        self.0.iter().filter(move |e| e.argument_path() == path)
    }

    pub(crate) fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub(crate) fn append(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_path_and_message() {
        let err = ValidationError::required("User.UserName");
        assert_eq!(err.to_string(), "User.UserName: Argument is required.");
    }

    #[test]
    fn equality_is_by_value() {
        let a = ValidationError::new("Roles[1].Name", "Argument is required.");
        let b = ValidationError::required("Roles[1].Name");
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let err = ValidationError::required("User");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "argumentPath": "User", "message": "Argument is required." })
        );
    }

    #[test]
    fn collection_preserves_insertion_order() {
        let errors = ValidationErrors::from(vec![
            ValidationError::required("Z"),
            ValidationError::required("A"),
        ]);
        let paths: Vec<_> = errors.iter().map(ValidationError::argument_path).collect();
        assert_eq!(paths, ["Z", "A"]);
    }

    #[test]
    fn at_filters_by_exact_path() {
        let errors = ValidationErrors::from(vec![
            ValidationError::required("Roles[1].Name"),
            ValidationError::required("Roles[1]"),
            ValidationError::new("Roles[1].Name", "too long"),
        ]);
        assert_eq!(errors.at("Roles[1].Name").count(), 2);
    }

    #[test]
    fn display_lists_every_error() {
        let errors = ValidationErrors::from(vec![
            ValidationError::required("User"),
            ValidationError::required("Roles"),
        ]);
        let text = errors.to_string();
        assert!(text.starts_with("2 validation error(s)"));
        assert!(text.contains("User: Argument is required."));
        assert!(text.contains("Roles: Argument is required."));
    }
}
