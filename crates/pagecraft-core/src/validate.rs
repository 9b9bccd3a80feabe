//! Validation of user-supplied strings that end up inside HTML attributes.
//!
//! Configuration strings are interpolated straight into attribute values, so
//! anything that could break out of an attribute is rejected at construction
//! time instead of being escaped later.

use std::{
    path::{Component, Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use crate::error::{ConfigError, Result};

static CSS_CLASS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-_:/\[\].%]+$").expect("valid regex"));

static HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._]{1,30}$").expect("valid regex"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

static TAG_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(G|GT)-[A-Z0-9]{7,12}$").expect("valid regex"));

/// Smallest accepted logo dimension in pixels.
pub const MIN_LOGO_DIMENSION: u32 = 1;

/// Largest accepted logo dimension in pixels.
pub const MAX_LOGO_DIMENSION: u32 = 2000;

/// Validate a whitespace-separated list of CSS utility classes.
///
/// The empty string always passes.
pub fn validate_css_class_string(value: &str, field: &str) -> Result<()> {
    if value.is_empty() || CSS_CLASS_RE.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::invalid_class(field, value))
    }
}

/// Validate an Instagram handle.
pub fn validate_handle(value: &str) -> Result<()> {
    if HANDLE_RE.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidHandle(value.to_string()))
    }
}

/// Validate a `local@domain.tld` email address.
pub fn validate_email(value: &str) -> Result<()> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEmail(value.to_string()))
    }
}

/// Validate a logo URL.
pub fn validate_logo_url(value: &str) -> Result<()> {
    if value.contains(['"', '\'', '<', '>']) {
        Err(ConfigError::InvalidLogoUrl(value.to_string()))
    } else {
        Ok(())
    }
}

/// Validate a logo dimension.
pub fn validate_dimension(field: &'static str, value: u32) -> Result<()> {
    if (MIN_LOGO_DIMENSION..=MAX_LOGO_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::DimensionOutOfRange {
            field,
            value,
            min: MIN_LOGO_DIMENSION,
            max: MAX_LOGO_DIMENSION,
        })
    }
}

/// Validate a Google tag measurement id.
pub fn validate_tag_id(value: &str) -> Result<()> {
    if TAG_ID_RE.is_match(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidTagId(value.to_string()))
    }
}

/// Lexically normalize a relative path.
///
/// Returns `None` when the path is absolute or when resolving `..` components
/// would climb above its starting point. `.` components are dropped. The
/// file system is never consulted.
#[must_use]
pub fn normalize_relative(path: &str) -> Option<PathBuf> {
    let mut normalized = PathBuf::new();

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return None,
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    return None;
                }
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    Some(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_accepts_tailwind_tokens() {
        let classes = "bg-white md:px-4 w-[50%] text-gray-600/75 hover:underline p-0.5";
        assert!(validate_css_class_string(classes, "body_classes").is_ok());
        assert!(validate_css_class_string("", "body_classes").is_ok());
    }

    #[test]
    fn test_css_class_rejects_markup() {
        for bad in ["a<b", "x>y", "say \"hi\"", "it's", "a;b", "a=b", "a&b"] {
            let err = validate_css_class_string(bad, "html_classes").unwrap_err();
            assert!(err.to_string().contains("html_classes"), "{bad}");
        }
    }

    #[test]
    fn test_handle() {
        assert!(validate_handle("pagecraft.site_01").is_ok());
        assert!(validate_handle("").is_err());
        assert!(validate_handle("has space").is_err());
        assert!(validate_handle(&"a".repeat(31)).is_err());
        assert!(validate_handle(&"a".repeat(30)).is_ok());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("hello@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.co").is_ok());
        assert!(validate_email("no-at-sign.example.com").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a\"@example.com").is_err());
    }

    #[test]
    fn test_logo_url() {
        assert!(validate_logo_url("https://example.com/logo.png").is_ok());
        assert!(validate_logo_url("logo.png\" onerror=\"x").is_err());
        assert!(validate_logo_url("<svg>").is_err());
        assert!(validate_logo_url("it's.png").is_err());
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(validate_dimension("logo.width", 1).is_ok());
        assert!(validate_dimension("logo.width", 2000).is_ok());
        assert!(validate_dimension("logo.width", 0).is_err());
        assert!(validate_dimension("logo.height", 2001).is_err());
    }

    #[test]
    fn test_tag_id() {
        assert!(validate_tag_id("G-ABC1234").is_ok());
        assert!(validate_tag_id("GT-ABCDEF123456").is_ok());
        assert!(validate_tag_id("G-ABC123").is_err());
        assert!(validate_tag_id("UA-1234567").is_err());
        assert!(validate_tag_id("G-abc12345").is_err());
        assert!(validate_tag_id("G-ABC1234'); alert(1); ('").is_err());
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_relative("css/site.css"), Some(PathBuf::from("css/site.css")));
        assert_eq!(normalize_relative("./a/../b.txt"), Some(PathBuf::from("b.txt")));
        assert_eq!(normalize_relative(""), Some(PathBuf::new()));
        assert_eq!(normalize_relative("../secret"), None);
        assert_eq!(normalize_relative("a/../../secret"), None);
        assert_eq!(normalize_relative("/etc/passwd"), None);
    }
}
