//! The page contract.
//!
//! A [`Page`] supplies identity (nav title and output file), a content
//! callback, and optional extras. Every optional capability has a default of
//! "absent", so new optional methods never break existing implementations.

use std::fmt;

use crate::{config::PageSettings, markup::Markup};

/// Error type returned by page callbacks.
pub type PageError = Box<dyn std::error::Error + Send + Sync>;

/// Result of rendering one region of a page.
pub type PageResult = std::result::Result<(), PageError>;

/// A unit of content rendered to one HTML file.
pub trait Page {
    /// Label shown in the navigation bar.
    fn title(&self) -> &str;

    /// Output path relative to the site output directory. `index.html` is the
    /// home page.
    fn output_filename(&self) -> &str;

    /// Render the page body into `markup`.
    fn content(&self, settings: &PageSettings, markup: &mut Markup) -> PageResult;

    /// Render the footer. `None` means the page has no footer region.
    fn footer(&self, _settings: &PageSettings, _markup: &mut Markup) -> Option<PageResult> {
        None
    }

    /// Replaces the site title in `<title>` for this page.
    fn page_title(&self) -> Option<&str> {
        None
    }

    /// Description meta tag content.
    fn meta_description(&self) -> Option<&str> {
        None
    }

    /// Absolute URL of the social preview image.
    fn og_image(&self) -> Option<&str> {
        None
    }

    /// Raw JSON-LD embedded verbatim in a structured-data script block.
    fn structured_data(&self) -> Option<&str> {
        None
    }
}

type RenderFn = Box<dyn Fn(&PageSettings, &mut Markup) -> PageResult>;

/// A page whose regions are rendered by closures.
///
/// ```
/// use pagecraft_core::{ContentPage, Markup, Page, PageSettings};
///
/// let page = ContentPage::new("Home", "index.html", |settings, m| {
///     m.element("h1", &[("class", settings.heading_classes.as_str())], |m| {
///         m.text("Welcome");
///     });
///     Ok(())
/// })
/// .with_meta_description("The home page");
///
/// let mut markup = Markup::new();
/// page.content(&PageSettings::default(), &mut markup).unwrap();
/// assert!(markup.as_str().contains("Welcome"));
/// ```
pub struct ContentPage {
    title: String,
    output_filename: String,
    content: RenderFn,
    footer: Option<RenderFn>,
    page_title: Option<String>,
    meta_description: Option<String>,
    og_image: Option<String>,
    structured_data: Option<String>,
}

impl ContentPage {
    /// Create a page from its nav title, output file and content callback.
    pub fn new(
        title: impl Into<String>,
        output_filename: impl Into<String>,
        content: impl Fn(&PageSettings, &mut Markup) -> PageResult + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            output_filename: output_filename.into(),
            content: Box::new(content),
            footer: None,
            page_title: None,
            meta_description: None,
            og_image: None,
            structured_data: None,
        }
    }

    /// Add a footer callback.
    #[must_use]
    pub fn with_footer(
        mut self,
        footer: impl Fn(&PageSettings, &mut Markup) -> PageResult + 'static,
    ) -> Self {
        self.footer = Some(Box::new(footer));
        self
    }

    /// Override the `<title>` for this page.
    #[must_use]
    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    /// Set the description meta tag.
    #[must_use]
    pub fn with_meta_description(mut self, description: impl Into<String>) -> Self {
        self.meta_description = Some(description.into());
        self
    }

    /// Set the social preview image.
    #[must_use]
    pub fn with_og_image(mut self, url: impl Into<String>) -> Self {
        self.og_image = Some(url.into());
        self
    }

    /// Embed JSON-LD structured data.
    #[must_use]
    pub fn with_structured_data(mut self, json: impl Into<String>) -> Self {
        self.structured_data = Some(json.into());
        self
    }
}

impl fmt::Debug for ContentPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentPage")
            .field("title", &self.title)
            .field("output_filename", &self.output_filename)
            .field("has_footer", &self.footer.is_some())
            .field("page_title", &self.page_title)
            .field("meta_description", &self.meta_description)
            .field("og_image", &self.og_image)
            .field("structured_data", &self.structured_data)
            .finish()
    }
}

impl Page for ContentPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn content(&self, settings: &PageSettings, markup: &mut Markup) -> PageResult {
        (self.content)(settings, markup)
    }

    fn footer(&self, settings: &PageSettings, markup: &mut Markup) -> Option<PageResult> {
        self.footer
            .as_ref()
            .map(|footer| footer(settings, markup))
    }

    fn page_title(&self) -> Option<&str> {
        self.page_title.as_deref()
    }

    fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    fn og_image(&self) -> Option<&str> {
        self.og_image.as_deref()
    }

    fn structured_data(&self) -> Option<&str> {
        self.structured_data.as_deref()
    }
}
