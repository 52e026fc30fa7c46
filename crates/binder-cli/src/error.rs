//! Error handling for the binder CLI.
//!
//! Every failure is mapped to a message, a list of suggestions and an exit
//! code in one place.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use binder_adapters::LoadError;
use binder_core::{BindError, BindingError, ValidationErrors};

pub use binder_core::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input outside the request document itself.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The request document does not exist.
    #[error("Request file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The request document could not be read or parsed.
    #[error("Could not load request")]
    Load(#[source] LoadError),

    /// The request was parsed but failed binding.
    #[error("Request rejected: {}", summarize(.0))]
    Validation(ValidationErrors),

    /// A converter misused the binding API.
    #[error("Binding failed: {0}")]
    ConverterFault(#[source] BindError),

    // ── Config errors ──────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

fn summarize(errors: &ValidationErrors) -> String {
    match errors.len() {
        1 => "1 validation error".to_owned(),
        n => format!("{n} validation errors"),
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFound { path } => CliError::NotFound { path },
            other => CliError::Load(other),
        }
    }
}

impl From<BindingError> for CliError {
    fn from(err: BindingError) -> Self {
        match err {
            BindingError::Invalid(errors) => CliError::Validation(errors),
            BindingError::Converter(fault) => CliError::ConverterFault(fault),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::NotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Check the path, relative paths resolve from the current directory".into(),
            ],

            Self::Load(LoadError::Json { .. } | LoadError::Toml { .. }) => vec![
                "Fix the syntax error reported above".into(),
                "Pass --format json|toml if the file extension is misleading".into(),
            ],

            Self::Load(_) => vec!["Check file permissions".into()],

            Self::Validation(errors) => errors.iter().map(ToString::to_string).collect(),

            Self::ConverterFault(fault) => fault.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Run 'binder config path' to locate the config file".into(),
                "Use 'binder init --force' to restore the default config".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Render(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::Load(_) | Self::Validation(_) => {
                ErrorCategory::UserError
            }
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::ConverterFault(fault) => match fault.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Usage => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } | Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    fn suggestions_heading(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Errors:",
            _ => "Suggestions:",
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", self.suggestions_heading().yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", self.suggestions_heading()));
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (bad arguments, malformed or invalid request).
    UserError,
    NotFound,
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e}", f().into()),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binder_core::ValidationError;
    use std::io;

    fn validation() -> CliError {
        CliError::Validation(ValidationErrors::from(vec![
            ValidationError::required("User.UserName"),
            ValidationError::required("Roles[1].Name"),
        ]))
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = CliError::from(LoadError::NotFound {
            path: PathBuf::from("req.json"),
        });
        assert!(matches!(err, CliError::NotFound { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn binding_errors_map_by_variant() {
        let invalid = CliError::from(BindingError::Invalid(ValidationErrors::new()));
        assert!(matches!(invalid, CliError::Validation(_)));

        let fault = CliError::from(BindingError::Converter(BindError::InvalidState));
        assert!(matches!(fault, CliError::ConverterFault(_)));
        assert_eq!(fault.exit_code(), 1);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn validation_lists_every_error() {
        let suggestions = validation().suggestions();
        assert_eq!(
            suggestions,
            vec![
                "User.UserName: Argument is required.",
                "Roles[1].Name: Argument is required.",
            ]
        );
    }

    #[test]
    fn validation_message_counts_errors() {
        assert_eq!(validation().to_string(), "Request rejected: 2 validation errors");
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(validation().exit_code(), 2);
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_lists_errors_under_heading() {
        let s = validation().format_plain(false);
        assert!(s.contains("Error: Request rejected"));
        assert!(s.contains("Errors:\n  User.UserName: Argument is required."));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::ConverterFault(BindError::InvalidState);
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: Property is not valid."));
        assert!(!s.contains("--verbose"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
