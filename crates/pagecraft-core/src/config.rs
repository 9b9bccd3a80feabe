//! Site configuration.
//!
//! Plain data consumed by the generation pipeline. Every section derives serde
//! traits so a site can be described in a TOML project file as well as in
//! code. Nothing here is trusted until [`SiteConfig::validate`] has run, which
//! [`Site::new`](crate::Site::new) always does.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ConfigError, Result},
    validate::{
        validate_css_class_string, validate_dimension, validate_email, validate_handle,
        validate_logo_url, validate_tag_id,
    },
};

/// Site-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory the generated files are written to.
    pub output_path: PathBuf,

    /// Site title, used in `<title>` unless a page overrides it.
    pub title: String,

    /// Site version string.
    pub version: String,

    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,

    /// Absolute base URL (e.g. `https://example.com`). Enables canonical
    /// links, Open Graph tags, the sitemap and robots.txt.
    pub base_url: Option<String>,

    /// Social preview image used when a page has none.
    pub default_og_image: Option<String>,

    /// `og:site_name` value; falls back to the title.
    pub og_site_name: Option<String>,

    /// Background utility class for `<body>`.
    pub background_color: String,

    /// Classes for `<html>`.
    pub html_classes: String,

    /// Classes for `<body>`, appended after the background color.
    pub body_classes: String,

    /// Classes for the wrapper around page content.
    pub content_classes: String,

    /// Navigation bar, rendered on every page when present.
    pub navigation: Option<NavSettings>,

    /// Stylesheets and static files.
    pub resources: ResourceConfig,

    /// Third-party integrations.
    pub integrations: IntegrationConfig,

    /// Style settings handed to page callbacks.
    pub page_settings: PageSettings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("public"),
            title: String::new(),
            version: "1.0".to_string(),
            lang: "en".to_string(),
            base_url: None,
            default_og_image: None,
            og_site_name: None,
            background_color: "bg-white".to_string(),
            html_classes: String::new(),
            body_classes: "min-h-screen".to_string(),
            content_classes: "mx-auto max-w-5xl px-4 py-8".to_string(),
            navigation: None,
            resources: ResourceConfig::default(),
            integrations: IntegrationConfig::default(),
            page_settings: PageSettings::default(),
        }
    }
}

impl SiteConfig {
    /// Validate every user-supplied string that is interpolated into markup.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(ConfigError::EmptyField("title"));
        }

        validate_css_class_string(&self.background_color, "background_color")?;
        validate_css_class_string(&self.html_classes, "html_classes")?;
        validate_css_class_string(&self.body_classes, "body_classes")?;
        validate_css_class_string(&self.content_classes, "content_classes")?;
        self.page_settings.validate()?;

        if let Some(nav) = &self.navigation {
            nav.validate()?;
        }

        self.integrations.validate()?;

        if self.base_url.as_deref().is_some_and(|url| url.ends_with('/')) {
            tracing::warn!("base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().map(|url| url.trim_end_matches('/'))
    }

    /// Canonical absolute URL for a page output file.
    ///
    /// `index.html` maps to `{base_url}/`, everything else to
    /// `{base_url}/{output_filename}`. Returns `None` without a base URL.
    #[must_use]
    pub fn canonical_url(&self, output_filename: &str) -> Option<String> {
        let base = self.base_url()?;
        if output_filename == "index.html" {
            Some(format!("{base}/"))
        } else {
            Some(format!("{base}/{output_filename}"))
        }
    }

    /// Combined background and body classes.
    #[must_use]
    pub fn body_class_list(&self) -> String {
        join_classes(&[&self.background_color, &self.body_classes])
    }
}

/// Navigation bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
    /// Background utility class of the bar.
    pub nav_background_color: String,

    /// Classes for the item of the page being rendered.
    pub nav_selected_color: String,

    /// Classes for every other item.
    pub nav_default_color: String,

    /// Keep the bar pinned to the top of the viewport.
    pub sticky: bool,

    /// Blur whatever scrolls underneath the bar.
    pub blur: bool,

    /// Instagram handle for the icon link.
    pub instagram: Option<String>,

    /// Address for the mailto icon link.
    pub email: Option<String>,

    /// Logo shown at the start of the bar.
    pub logo: Logo,

    /// Font family utility class.
    pub font_family: String,

    /// Horizontal padding step; the bar uses `px-{n}` and `md:px-{2n}`.
    pub horizontal_margin: u8,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            nav_background_color: "bg-white".to_string(),
            nav_selected_color: "text-black font-bold".to_string(),
            nav_default_color: "text-gray-600".to_string(),
            sticky: true,
            blur: false,
            instagram: None,
            email: None,
            logo: Logo::default(),
            font_family: "font-sans".to_string(),
            horizontal_margin: 4,
        }
    }
}

impl NavSettings {
    /// Validate class lists, contact details and the logo.
    pub fn validate(&self) -> Result<()> {
        validate_css_class_string(&self.nav_background_color, "navigation.nav_background_color")?;
        validate_css_class_string(&self.nav_selected_color, "navigation.nav_selected_color")?;
        validate_css_class_string(&self.nav_default_color, "navigation.nav_default_color")?;
        validate_css_class_string(&self.font_family, "navigation.font_family")?;

        if let Some(handle) = &self.instagram {
            validate_handle(handle)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }

        self.logo.validate()
    }
}

/// Logo image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
    /// Image URL.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Alternative text.
    pub alt: String,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            url: "logo.svg".to_string(),
            width: 40,
            height: 40,
            alt: "Logo".to_string(),
        }
    }
}

impl Logo {
    /// Create a logo.
    pub fn new(url: impl Into<String>, width: u32, height: u32, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width,
            height,
            alt: alt.into(),
        }
    }

    /// Validate the URL and dimensions.
    pub fn validate(&self) -> Result<()> {
        validate_logo_url(&self.url)?;
        validate_dimension("logo.width", self.width)?;
        validate_dimension("logo.height", self.height)
    }
}

/// Stylesheets and static files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directory holding the bundled resources that `static_files` name.
    pub source_dir: PathBuf,

    /// Files copied from the resource store into the output directory.
    pub static_files: Vec<InputOutputPair>,

    /// Local stylesheet paths, linked in order.
    pub stylesheets: Vec<String>,

    /// Stylesheets served from elsewhere, linked after the local ones.
    pub external_stylesheets: Vec<ExternalStylesheet>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("resources"),
            static_files: Vec::new(),
            stylesheets: vec!["styles.css".to_string()],
            external_stylesheets: Vec::new(),
        }
    }
}

/// A stylesheet linked by absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalStylesheet {
    /// Stylesheet URL.
    pub href: String,
    /// Subresource integrity hash.
    #[serde(default)]
    pub integrity: Option<String>,
    /// `crossorigin` attribute value.
    #[serde(default)]
    pub crossorigin: Option<String>,
    /// `referrerpolicy` attribute value.
    #[serde(default)]
    pub referrerpolicy: Option<String>,
}

impl ExternalStylesheet {
    /// Create a stylesheet link without extra attributes.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            integrity: None,
            crossorigin: None,
            referrerpolicy: None,
        }
    }

    /// Set the integrity hash.
    #[must_use]
    pub fn with_integrity(mut self, integrity: impl Into<String>) -> Self {
        self.integrity = Some(integrity.into());
        self
    }

    /// Set the `crossorigin` value.
    #[must_use]
    pub fn with_crossorigin(mut self, crossorigin: impl Into<String>) -> Self {
        self.crossorigin = Some(crossorigin.into());
        self
    }

    /// Set the `referrerpolicy` value.
    #[must_use]
    pub fn with_referrerpolicy(mut self, policy: impl Into<String>) -> Self {
        self.referrerpolicy = Some(policy.into());
        self
    }
}

/// Maps a bundled resource to a location in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOutputPair {
    /// Name of the resource in the store.
    pub input_filename: String,
    /// Directory relative to the output root.
    #[serde(default)]
    pub output_path: String,
    /// File name to write; defaults to `input_filename`.
    #[serde(default)]
    pub output_filename: Option<String>,
}

impl InputOutputPair {
    /// Map `input_filename` into `output_path` under the same name.
    pub fn new(input_filename: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_filename: input_filename.into(),
            output_path: output_path.into(),
            output_filename: None,
        }
    }

    /// Write the resource under a different file name.
    #[must_use]
    pub fn with_output_filename(mut self, filename: impl Into<String>) -> Self {
        self.output_filename = Some(filename.into());
        self
    }

    /// File name written in the output directory.
    #[must_use]
    pub fn target_filename(&self) -> &str {
        self.output_filename
            .as_deref()
            .unwrap_or(&self.input_filename)
    }
}

/// Third-party integrations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Google tag measurement id (`G-XXXXXXX` or `GT-XXXXXXX`).
    pub google_tag_id: Option<String>,
}

impl IntegrationConfig {
    /// Validate the tag id unless it is blank.
    pub fn validate(&self) -> Result<()> {
        match self.google_tag() {
            Some(tag) => validate_tag_id(tag),
            None => Ok(()),
        }
    }

    /// The configured tag id, treating blank values as absent.
    #[must_use]
    pub fn google_tag(&self) -> Option<&str> {
        self.google_tag_id
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Style settings passed to page callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Classes for running text.
    pub text_classes: String,
    /// Classes for headings.
    pub heading_classes: String,
    /// Classes for links.
    pub link_classes: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            text_classes: "text-base leading-relaxed".to_string(),
            heading_classes: "text-2xl font-bold".to_string(),
            link_classes: "underline".to_string(),
        }
    }
}

impl PageSettings {
    /// Validate the class lists.
    pub fn validate(&self) -> Result<()> {
        validate_css_class_string(&self.text_classes, "page_settings.text_classes")?;
        validate_css_class_string(&self.heading_classes, "page_settings.heading_classes")?;
        validate_css_class_string(&self.link_classes, "page_settings.link_classes")
    }
}

/// Join class lists, skipping empty ones.
#[must_use]
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            title: "Test Site".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.lang, "en");
        assert_eq!(config.output_path, PathBuf::from("public"));
        assert_eq!(config.resources.stylesheets, vec!["styles.css"]);
        assert!(config.navigation.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = SiteConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains("title cannot be empty"));
    }

    #[test]
    fn test_class_fields_rejected_with_field_name() {
        let names = [
            "background_color",
            "html_classes",
            "body_classes",
            "content_classes",
        ];

        for name in names {
            for bad in ["<b>", "a>b", "x\"y"] {
                let mut config = test_config();
                match name {
                    "background_color" => config.background_color = bad.to_string(),
                    "html_classes" => config.html_classes = bad.to_string(),
                    "body_classes" => config.body_classes = bad.to_string(),
                    _ => config.content_classes = bad.to_string(),
                }
                let err = config.validate().unwrap_err();
                assert!(
                    matches!(&err, ConfigError::InvalidClass { field, .. } if field == name),
                    "{name}: {err}"
                );
            }
        }
    }

    #[test]
    fn test_page_settings_validated() {
        let mut config = test_config();
        config.page_settings.link_classes = "underline\" onclick=\"x".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("page_settings.link_classes"));
    }

    #[test]
    fn test_nav_validated() {
        let mut config = test_config();
        config.navigation = Some(NavSettings {
            nav_selected_color: "<script>".to_string(),
            ..NavSettings::default()
        });
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("navigation.nav_selected_color"));

        config.navigation = Some(NavSettings {
            instagram: Some("bad handle".to_string()),
            ..NavSettings::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidHandle(_))
        ));

        config.navigation = Some(NavSettings {
            email: Some("nobody".to_string()),
            ..NavSettings::default()
        });
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEmail(_))));

        config.navigation = Some(NavSettings {
            logo: Logo::new("logo.png", 0, 40, "Logo"),
            ..NavSettings::default()
        });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionOutOfRange { field: "logo.width", .. })
        ));
    }

    #[test]
    fn test_tag_id_validation() {
        let mut config = test_config();
        config.integrations.google_tag_id = Some("G-ABCDEFG".to_string());
        assert!(config.validate().is_ok());

        config.integrations.google_tag_id = Some("   ".to_string());
        assert!(config.validate().is_ok());
        assert!(config.integrations.google_tag().is_none());

        config.integrations.google_tag_id = Some("G-123".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTagId(_))));
    }

    #[test]
    fn test_canonical_url() {
        let mut config = test_config();
        assert_eq!(config.canonical_url("index.html"), None);

        config.base_url = Some("https://example.com".to_string());
        assert_eq!(
            config.canonical_url("index.html").as_deref(),
            Some("https://example.com/")
        );
        assert_eq!(
            config.canonical_url("about.html").as_deref(),
            Some("https://example.com/about.html")
        );

        config.base_url = Some("https://example.com/".to_string());
        assert_eq!(
            config.canonical_url("blog/post.html").as_deref(),
            Some("https://example.com/blog/post.html")
        );
    }

    #[test]
    fn test_body_class_list() {
        let mut config = test_config();
        config.background_color = "bg-slate-50".to_string();
        config.body_classes = String::new();
        assert_eq!(config.body_class_list(), "bg-slate-50");

        config.body_classes = "antialiased".to_string();
        assert_eq!(config.body_class_list(), "bg-slate-50 antialiased");
    }

    #[test]
    fn test_target_filename() {
        let pair = InputOutputPair::new("favicon.ico", "");
        assert_eq!(pair.target_filename(), "favicon.ico");

        let renamed = pair.with_output_filename("icon.ico");
        assert_eq!(renamed.target_filename(), "icon.ico");
    }
}
