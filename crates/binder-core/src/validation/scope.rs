use tracing::{debug, trace};

use super::{ArgumentPath, ValidationError, ValidationErrors};

/// Error accumulator owned by exactly one binder invocation.
///
/// The scope's `path` already encodes every ancestor field name and index, so
/// errors are recorded with their final, fully qualified path. Folding a child
/// scope into its parent is therefore an ordered append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorScope {
    path: ArgumentPath,
    errors: ValidationErrors,
}

impl ErrorScope {
    /// Scope of a root binder: empty prefix, no errors.
    pub fn root() -> Self {
        Self::default()
    }

    /// Child scope for a nested object bound under `name`.
    pub fn for_field(&self, name: &str) -> Self {
        Self {
            path: self.path.field(name),
            errors: ValidationErrors::new(),
        }
    }

    /// Child scope for element `index` of the list bound under `name`.
    pub fn for_element(&self, name: &str, index: usize) -> Self {
        Self {
            path: self.path.element(name, index),
            errors: ValidationErrors::new(),
        }
    }

    /// Prefix shared by every error recorded in this scope.
    pub fn path(&self) -> &ArgumentPath {
        &self.path
    }

    /// Record `message` against `field` of the object this scope covers.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        let path = self.path.field(field);
        self.record(path, message);
    }

    /// Record `message` against an already composed path.
    pub fn record(&mut self, path: ArgumentPath, message: impl Into<String>) {
        let error = ValidationError::new(path, message);
        trace!(%error, "validation error recorded");
        self.errors.push(error);
    }

    /// Fold a finished child scope into this one, preserving order.
    pub fn absorb(&mut self, child: ErrorScope) {
        if child.errors.is_empty() {
            return;
        }
        debug!(
            scope = %child.path,
            count = child.errors.len(),
            "folding nested validation errors"
        );
        self.errors.append(child.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_scope_records_bare_field_names() {
        let mut scope = ErrorScope::root();
        scope.add_error("User", "Argument is required.");

        assert_eq!(scope.len(), 1);
        assert_eq!(scope.errors()[0].argument_path(), "User");
    }

    #[test]
    fn child_scopes_prefix_their_errors() {
        let root = ErrorScope::root();
        let mut user = root.for_field("User");
        user.add_error("UserName", "Argument is required.");

        assert_eq!(user.errors()[0].argument_path(), "User.UserName");
    }

    #[test]
    fn element_scopes_use_brackets() {
        let root = ErrorScope::root();
        let mut role = root.for_element("Roles", 1);
        role.add_error("Name", "Argument is required.");

        assert_eq!(role.errors()[0].argument_path(), "Roles[1].Name");
    }

    #[test]
    fn absorb_appends_in_order() {
        let mut root = ErrorScope::root();
        root.add_error("First", "a");

        let mut child = root.for_field("Child");
        child.add_error("X", "b");
        child.add_error("Y", "c");
        root.absorb(child);
        root.add_error("Last", "d");

        let paths: Vec<_> = root.errors().iter().map(|e| e.argument_path()).collect();
        assert_eq!(paths, ["First", "Child.X", "Child.Y", "Last"]);
    }

    #[test]
    fn deep_nesting_needs_no_special_cases() {
        let root = ErrorScope::root();
        let a = root.for_field("A");
        let b = a.for_element("B", 2);
        let mut c = b.for_field("C");
        c.add_error("D", "missing");

        let mut b = b;
        b.absorb(c);
        let mut a = a;
        a.absorb(b);
        let mut root = root;
        root.absorb(a);

        assert_eq!(root.errors()[0].argument_path(), "A.B[2].C.D");
    }

    #[test]
    fn absorbing_an_empty_child_is_a_no_op() {
        let mut root = ErrorScope::root();
        let child = root.for_field("Nothing");
        root.absorb(child);
        assert!(root.is_empty());
    }
}
