//! Request document loading.
//!
//! Reads a JSON or TOML document from disk and deserialises it into a DTO.
//! DTO fields are expected to be `Option`s so that absent values reach the
//! binder instead of failing deserialisation; only syntactically broken
//! documents are rejected here.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

/// Supported document formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestFormat {
    #[default]
    Json,
    Toml,
}

impl RequestFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl FromStr for RequestFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            other => Err(format!("unknown request format '{other}'")),
        }
    }
}

impl fmt::Display for RequestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Toml => write!(f, "toml"),
        }
    }
}

/// Failures while reading or parsing a request document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl LoadError {
    /// Path of the document that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Io { path, .. }
            | Self::Json { path, .. }
            | Self::Toml { path, .. } => path,
        }
    }
}

/// Load and deserialise the document at `path`.
///
/// `format` wins over the file extension; with neither, JSON is assumed.
///
/// # Errors
/// [`LoadError`] when the file is missing, unreadable or malformed.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_request<T: DeserializeOwned>(
    path: &Path,
    format: Option<RequestFormat>,
) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = format
        .or_else(|| RequestFormat::from_path(path))
        .unwrap_or_default();
    debug!(%format, bytes = content.len(), "parsing request document");

    parse_request(&content, format, path)
}

/// Deserialise an in-memory document; `origin` is only used in errors.
///
/// # Errors
/// [`LoadError::Json`] or [`LoadError::Toml`] on malformed input.
pub fn parse_request<T: DeserializeOwned>(
    content: &str,
    format: RequestFormat,
    origin: &Path,
) -> Result<T, LoadError> {
    match format {
        RequestFormat::Json => serde_json::from_str(content).map_err(|source| LoadError::Json {
            path: origin.to_path_buf(),
            source,
        }),
        RequestFormat::Toml => toml::from_str(content).map_err(|source| LoadError::Toml {
            path: origin.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "PascalCase")]
    struct Doc {
        name: Option<String>,
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            RequestFormat::from_path(Path::new("a/b.JSON")),
            Some(RequestFormat::Json)
        );
        assert_eq!(
            RequestFormat::from_path(Path::new("req.toml")),
            Some(RequestFormat::Toml)
        );
        assert_eq!(RequestFormat::from_path(Path::new("req.yaml")), None);
        assert_eq!(RequestFormat::from_path(Path::new("req")), None);
    }

    #[test]
    fn format_parses_and_displays() {
        assert_eq!("TOML".parse::<RequestFormat>(), Ok(RequestFormat::Toml));
        assert!("xml".parse::<RequestFormat>().is_err());
        assert_eq!(RequestFormat::Json.to_string(), "json");
    }

    #[test]
    fn loads_json_by_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("req.json");
        fs::write(&path, r#"{ "Name": "Ada" }"#).unwrap();

        let doc: Doc = load_request(&path, None).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn loads_toml_by_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("req.toml");
        fs::write(&path, "Name = \"Grace\"\n").unwrap();

        let doc: Doc = load_request(&path, None).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Grace"));
    }

    #[test]
    fn explicit_format_overrides_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("req.txt");
        fs::write(&path, "Name = \"Linus\"\n").unwrap();

        let doc: Doc = load_request(&path, Some(RequestFormat::Toml)).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Linus"));
    }

    #[test]
    fn absent_fields_deserialize_as_none() {
        let doc: Doc = parse_request("{}", RequestFormat::Json, Path::new("inline")).unwrap();
        assert_eq!(doc, Doc { name: None });
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_request::<Doc>(Path::new("/does/not/exist.json"), None).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.path(), Path::new("/does/not/exist.json"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_request::<Doc>("{ nope", RequestFormat::Json, Path::new("x.json"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
        assert!(err.to_string().contains("x.json"));
    }
}
