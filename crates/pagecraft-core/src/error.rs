//! Error types for the Pagecraft core library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `ConfigError`.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors.
///
/// Raised synchronously while a site is being constructed or loaded. These
/// never describe a partial state: either the configuration is accepted as a
/// whole or construction fails with the first problem found.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A class-list field contains characters outside the allowlist.
    #[error("invalid CSS class string in `{field}`: {value:?}")]
    InvalidClass { field: String, value: String },

    /// Instagram handle with an unexpected shape.
    #[error("invalid instagram handle: {0:?}")]
    InvalidHandle(String),

    /// Email address with an unexpected shape.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// Logo URL that could break out of its attribute.
    #[error("invalid logo URL (must not contain quotes or angle brackets): {0:?}")]
    InvalidLogoUrl(String),

    /// Analytics tag id that is not a `G-`/`GT-` measurement id.
    #[error("invalid Google tag id: {0:?}")]
    InvalidTagId(String),

    /// Numeric setting outside its allowed range.
    #[error("`{field}` must be between {min} and {max}, got {value}")]
    DimensionOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A required builder field was never set.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A required field is present but empty.
    #[error("`{0}` cannot be empty")]
    EmptyField(&'static str),

    /// Two pages write the same output file.
    #[error("duplicate page output filename: {0}")]
    DuplicatePage(String),

    /// Page output filename is absolute or escapes the output directory.
    #[error("page output filename must stay inside the output directory: {0}")]
    UnsafePagePath(String),

    /// Project file does not exist.
    #[error("project file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error from the layered configuration loader.
    #[error("config source error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create an invalid class error for the given field.
    pub fn invalid_class(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidClass {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_class_names_field() {
        let err = ConfigError::invalid_class("body_classes", "<script>");
        let msg = err.to_string();
        assert!(msg.contains("body_classes"));
        assert!(msg.contains("<script>"));
    }

    #[test]
    fn test_dimension_message() {
        let err = ConfigError::DimensionOutOfRange {
            field: "logo.width",
            value: 0,
            min: 1,
            max: 2000,
        };
        assert_eq!(
            err.to_string(),
            "`logo.width` must be between 1 and 2000, got 0"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
