//! Markdown-backed pages.

use std::{
    fs,
    path::{Path, PathBuf},
};

use pulldown_cmark::{Options, Parser, html};

use crate::{
    config::PageSettings,
    markup::Markup,
    page::{Page, PageResult},
};

/// A page whose content is a Markdown file rendered at generation time.
///
/// The file is read on every render, so a missing or unreadable source shows
/// up as a failure of this page only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownPage {
    title: String,
    output_filename: String,
    source: PathBuf,
    footer: Option<String>,
    page_title: Option<String>,
    meta_description: Option<String>,
    og_image: Option<String>,
    structured_data: Option<String>,
}

impl MarkdownPage {
    /// Create a page rendering `source` into `output_filename`.
    pub fn new(
        title: impl Into<String>,
        output_filename: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            title: title.into(),
            output_filename: output_filename.into(),
            source: source.into(),
            footer: None,
            page_title: None,
            meta_description: None,
            og_image: None,
            structured_data: None,
        }
    }

    /// Path of the Markdown source.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Add a plain-text footer.
    #[must_use]
    pub fn with_footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
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

/// Render Markdown to HTML with tables, footnotes, strikethrough and task lists.
#[must_use]
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

impl Page for MarkdownPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn content(&self, settings: &PageSettings, markup: &mut Markup) -> PageResult {
        let source = fs::read_to_string(&self.source)
            .map_err(|e| format!("cannot read {}: {e}", self.source.display()))?;

        markup.element("article", &[("class", settings.text_classes.as_str())], |m| {
            m.raw(&render_markdown(&source));
        });
        Ok(())
    }

    fn footer(&self, settings: &PageSettings, markup: &mut Markup) -> Option<PageResult> {
        let text = self.footer.as_deref()?;
        markup.element("p", &[("class", settings.text_classes.as_str())], |m| {
            m.text(text);
        });
        Some(Ok(()))
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
