//! Fluent construction of a [`Site`].
//!
//! The builders only fill in a [`SiteConfig`] and hand it to [`Site::new`];
//! a site built here is indistinguishable from one constructed directly.
//!
//! ```
//! use pagecraft_core::{ContentPage, Logo, Site};
//!
//! let site = Site::builder("My Site", "public")
//!     .base_url("https://example.com")
//!     .navigation(|nav| {
//!         nav.logo(Logo::new("logo.svg", 40, 40, "My Site"))
//!             .instagram("my.site")
//!             .sticky(true)
//!     })
//!     .resources(|res| res.stylesheet("extra.css"))
//!     .page(ContentPage::new("Home", "index.html", |_, m| {
//!         m.text("Hello");
//!         Ok(())
//!     }))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(site.pages().len(), 1);
//! ```

use std::path::PathBuf;

use crate::{
    config::{
        ExternalStylesheet, InputOutputPair, Logo, NavSettings, PageSettings, ResourceConfig,
        SiteConfig,
    },
    error::{ConfigError, Result},
    page::Page,
    site::Site,
};

/// Builder for [`Site`].
#[derive(Default)]
pub struct SiteBuilder {
    title: Option<String>,
    output_path: Option<PathBuf>,
    config: SiteConfig,
    navigation: Option<NavBuilder>,
    pages: Vec<Box<dyn Page>>,
}

impl SiteBuilder {
    /// Create an empty builder. `title` and `output_path` are required.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Site title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Output directory.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Site version string.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = version.into();
        self
    }

    /// Document language.
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.config.lang = lang.into();
        self
    }

    /// Absolute base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Fallback social preview image.
    #[must_use]
    pub fn default_og_image(mut self, url: impl Into<String>) -> Self {
        self.config.default_og_image = Some(url.into());
        self
    }

    /// `og:site_name` value.
    #[must_use]
    pub fn og_site_name(mut self, name: impl Into<String>) -> Self {
        self.config.og_site_name = Some(name.into());
        self
    }

    /// Body background class.
    #[must_use]
    pub fn background_color(mut self, classes: impl Into<String>) -> Self {
        self.config.background_color = classes.into();
        self
    }

    /// Classes for `<html>`.
    #[must_use]
    pub fn html_classes(mut self, classes: impl Into<String>) -> Self {
        self.config.html_classes = classes.into();
        self
    }

    /// Classes for `<body>`.
    #[must_use]
    pub fn body_classes(mut self, classes: impl Into<String>) -> Self {
        self.config.body_classes = classes.into();
        self
    }

    /// Classes for the content wrapper.
    #[must_use]
    pub fn content_classes(mut self, classes: impl Into<String>) -> Self {
        self.config.content_classes = classes.into();
        self
    }

    /// Configure the navigation bar.
    #[must_use]
    pub fn navigation(mut self, configure: impl FnOnce(NavBuilder) -> NavBuilder) -> Self {
        let nav = self.navigation.take().unwrap_or_default();
        self.navigation = Some(configure(nav));
        self
    }

    /// Configure stylesheets and static files.
    #[must_use]
    pub fn resources(
        mut self,
        configure: impl FnOnce(ResourcesBuilder) -> ResourcesBuilder,
    ) -> Self {
        let resources = std::mem::take(&mut self.config.resources);
        self.config.resources = configure(ResourcesBuilder { resources }).resources;
        self
    }

    /// Google tag measurement id.
    #[must_use]
    pub fn google_tag_id(mut self, tag: impl Into<String>) -> Self {
        self.config.integrations.google_tag_id = Some(tag.into());
        self
    }

    /// Style settings handed to page callbacks.
    #[must_use]
    pub fn page_settings(mut self, settings: PageSettings) -> Self {
        self.config.page_settings = settings;
        self
    }

    /// Append a page.
    #[must_use]
    pub fn page(mut self, page: impl Page + 'static) -> Self {
        self.pages.push(Box::new(page));
        self
    }

    /// Append boxed pages.
    #[must_use]
    pub fn pages(mut self, pages: impl IntoIterator<Item = Box<dyn Page>>) -> Self {
        self.pages.extend(pages);
        self
    }

    /// Check required fields and construct the site.
    pub fn build(self) -> Result<Site> {
        let mut config = self.config;
        config.title = self.title.ok_or(ConfigError::MissingField("title"))?;
        config.output_path = self
            .output_path
            .ok_or(ConfigError::MissingField("output_path"))?;
        config.navigation = self.navigation.map(NavBuilder::build).transpose()?;

        Site::new(config, self.pages)
    }
}

/// Builder for [`NavSettings`].
#[derive(Debug, Default)]
pub struct NavBuilder {
    settings: NavSettings,
    logo: Option<Logo>,
}

impl NavBuilder {
    /// Bar background class.
    #[must_use]
    pub fn background_color(mut self, classes: impl Into<String>) -> Self {
        self.settings.nav_background_color = classes.into();
        self
    }

    /// Classes for the active item.
    #[must_use]
    pub fn selected_color(mut self, classes: impl Into<String>) -> Self {
        self.settings.nav_selected_color = classes.into();
        self
    }

    /// Classes for inactive items.
    #[must_use]
    pub fn default_color(mut self, classes: impl Into<String>) -> Self {
        self.settings.nav_default_color = classes.into();
        self
    }

    /// Pin the bar to the top of the viewport.
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.settings.sticky = sticky;
        self
    }

    /// Blur content scrolling under the bar.
    #[must_use]
    pub fn blur(mut self, blur: bool) -> Self {
        self.settings.blur = blur;
        self
    }

    /// Instagram handle.
    #[must_use]
    pub fn instagram(mut self, handle: impl Into<String>) -> Self {
        self.settings.instagram = Some(handle.into());
        self
    }

    /// Contact email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.settings.email = Some(email.into());
        self
    }

    /// Logo image. Required.
    #[must_use]
    pub fn logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }

    /// Font family class.
    #[must_use]
    pub fn font_family(mut self, classes: impl Into<String>) -> Self {
        self.settings.font_family = classes.into();
        self
    }

    /// Horizontal padding step.
    #[must_use]
    pub fn horizontal_margin(mut self, step: u8) -> Self {
        self.settings.horizontal_margin = step;
        self
    }

    /// Check required fields and validate the settings.
    pub fn build(self) -> Result<NavSettings> {
        let mut settings = self.settings;
        settings.logo = self.logo.ok_or(ConfigError::MissingField("navigation.logo"))?;
        settings.validate()?;
        Ok(settings)
    }
}

/// Builder for [`ResourceConfig`].
#[derive(Debug, Default)]
pub struct ResourcesBuilder {
    resources: ResourceConfig,
}

impl ResourcesBuilder {
    /// Directory holding bundled resources.
    #[must_use]
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resources.source_dir = dir.into();
        self
    }

    /// Copy a bundled resource into the output directory.
    #[must_use]
    pub fn static_file(mut self, pair: InputOutputPair) -> Self {
        self.resources.static_files.push(pair);
        self
    }

    /// Link a local stylesheet, after any already configured.
    #[must_use]
    pub fn stylesheet(mut self, path: impl Into<String>) -> Self {
        self.resources.stylesheets.push(path.into());
        self
    }

    /// Replace the local stylesheet list.
    #[must_use]
    pub fn stylesheets(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.resources.stylesheets = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Link an external stylesheet.
    #[must_use]
    pub fn external_stylesheet(mut self, stylesheet: ExternalStylesheet) -> Self {
        self.resources.external_stylesheets.push(stylesheet);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ContentPage;

    fn home() -> ContentPage {
        ContentPage::new("Home", "index.html", |_, _| Ok(()))
    }

    #[test]
    fn test_missing_title() {
        let err = SiteBuilder::new().output_path("out").build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("title")));
    }

    #[test]
    fn test_missing_output_path() {
        let err = SiteBuilder::new().title("T").build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("output_path")));
    }

    #[test]
    fn test_missing_logo() {
        let err = Site::builder("T", "out")
            .navigation(|nav| nav.sticky(false))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("navigation.logo")));
    }

    #[test]
    fn test_builder_matches_direct_construction() {
        let logo = Logo::new("logo.png", 120, 40, "Brand");
        let built = Site::builder("Test Site", "out")
            .base_url("https://example.com")
            .og_site_name("Brand")
            .navigation(|nav| nav.logo(logo.clone()).email("hi@example.com"))
            .resources(|res| {
                res.stylesheet("print.css")
                    .static_file(InputOutputPair::new("robots-extra.txt", "misc"))
            })
            .page(home())
            .build()
            .unwrap();

        let mut direct = SiteConfig {
            title: "Test Site".to_string(),
            output_path: PathBuf::from("out"),
            base_url: Some("https://example.com".to_string()),
            og_site_name: Some("Brand".to_string()),
            navigation: Some(NavSettings {
                logo,
                email: Some("hi@example.com".to_string()),
                ..NavSettings::default()
            }),
            ..SiteConfig::default()
        };
        direct.resources.stylesheets.push("print.css".to_string());
        direct
            .resources
            .static_files
            .push(InputOutputPair::new("robots-extra.txt", "misc"));

        assert_eq!(built.config(), &direct);
    }

    #[test]
    fn test_navigation_validated_on_build() {
        let err = Site::builder("T", "out")
            .navigation(|nav| {
                nav.logo(Logo::default())
                    .selected_color("text-red-500\" onload=\"x")
            })
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("navigation.nav_selected_color"));
    }

    #[test]
    fn test_stylesheets_replace() {
        let site = Site::builder("T", "out")
            .resources(|res| res.stylesheets(["a.css", "b.css"]))
            .build()
            .unwrap();
        assert_eq!(site.config().resources.stylesheets, vec!["a.css", "b.css"]);
    }

    #[test]
    fn test_invalid_tag_rejected() {
        let err = Site::builder("T", "out")
            .google_tag_id("AW-123")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTagId(_)));
    }
}
