//! RFC 7807 problem-details rendering of validation errors.

use serde::Serialize;

use binder_core::ValidationErrors;

pub const DEFAULT_TYPE_URI: &str = "about:blank";
pub const DEFAULT_TITLE: &str = "One or more validation errors occurred.";

/// One rejected argument, as listed under `invalid-params`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidParam {
    pub name: String,
    pub reason: String,
}

/// Problem-details body for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(rename = "invalid-params")]
    pub invalid_params: Vec<InvalidParam>,
}

impl ProblemDetails {
    /// A `400 Bad Request` problem listing every error in order.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let invalid_params = errors
            .iter()
            .map(|e| InvalidParam {
                name: e.argument_path().to_owned(),
                reason: e.message().to_owned(),
            })
            .collect::<Vec<_>>();

        Self {
            type_uri: DEFAULT_TYPE_URI.into(),
            title: DEFAULT_TITLE.into(),
            status: 400,
            detail: format!("{} argument(s) failed validation.", invalid_params.len()),
            instance: None,
            invalid_params,
        }
    }

    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.type_uri = type_uri.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Pretty-printed JSON body.
    ///
    /// # Errors
    /// Propagates `serde_json` serialisation failures.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
