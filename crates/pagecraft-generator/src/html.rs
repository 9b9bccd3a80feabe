//! HTML document assembly.
//!
//! Builds one complete document per page from the shared site configuration:
//! head metadata and SEO tags, then the body with navigation, content and
//! footer regions.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

use pagecraft_core::{Markup, Page, PageError, Site};
use tracing::debug;

use crate::{analytics::render_google_tag, nav::render_nav};

/// Result type for document rendering. Errors carry the page callback's cause.
pub type Result<T> = std::result::Result<T, PageError>;

/// Renders page documents for a site.
#[derive(Debug, Clone, Copy)]
pub struct HtmlGenerator<'a> {
    site: &'a Site,
}

impl<'a> HtmlGenerator<'a> {
    /// Create a generator for `site`.
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Render the full document for `page`.
    ///
    /// An error returned by the content or footer callback becomes the error
    /// of this call. A panicking callback is caught and reported the same way.
    pub fn render_page(&self, page: &dyn Page) -> Result<String> {
        debug!(page = page.output_filename(), "rendering page");

        panic::catch_unwind(AssertUnwindSafe(|| self.render_document(page)))
            .unwrap_or_else(|payload| Err(panic_message(payload).into()))
    }

    fn render_document(&self, page: &dyn Page) -> Result<String> {
        let config = self.site.config();
        let mut markup = Markup::new();
        markup.raw("<!DOCTYPE html>");

        let mut html_attrs = vec![("lang", config.lang.as_str())];
        if !config.html_classes.is_empty() {
            html_attrs.push(("class", config.html_classes.as_str()));
        }

        markup.element("html", &html_attrs, |m| {
            m.element("head", &[], |m| self.render_head(m, page));
            self.render_body(m, page)
        })?;

        Ok(markup.into_string())
    }

    fn render_head(&self, m: &mut Markup, page: &dyn Page) {
        let config = self.site.config();
        let title = page.page_title().unwrap_or(config.title.as_str());

        m.element("title", &[], |m| {
            m.text(title);
        });
        m.void("meta", &[("charset", "utf-8")]);
        m.void(
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        );

        if let Some(description) = page.meta_description() {
            m.void("meta", &[("name", "description"), ("content", description)]);
        }

        if let Some(url) = config.canonical_url(page.output_filename()) {
            m.void("link", &[("rel", "canonical"), ("href", url.as_str())]);

            let site_name = config.og_site_name.as_deref().unwrap_or(config.title.as_str());
            og(m, "og:type", "website");
            og(m, "og:site_name", site_name);
            og(m, "og:title", title);
            if let Some(description) = page.meta_description() {
                og(m, "og:description", description);
            }
            og(m, "og:url", &url);
            if let Some(image) = page.og_image().or(config.default_og_image.as_deref()) {
                og(m, "og:image", image);
            }
            m.void(
                "meta",
                &[("name", "twitter:card"), ("content", "summary_large_image")],
            );
        }

        if let Some(json) = page.structured_data() {
            m.element("script", &[("type", "application/ld+json")], |m| {
                m.raw(json);
            });
        }

        for href in &config.resources.stylesheets {
            m.void("link", &[("rel", "stylesheet"), ("href", href.as_str())]);
        }

        for sheet in &config.resources.external_stylesheets {
            let mut attrs = vec![("rel", "stylesheet"), ("href", sheet.href.as_str())];
            if let Some(integrity) = &sheet.integrity {
                attrs.push(("integrity", integrity.as_str()));
            }
            if let Some(crossorigin) = &sheet.crossorigin {
                attrs.push(("crossorigin", crossorigin.as_str()));
            }
            if let Some(policy) = &sheet.referrerpolicy {
                attrs.push(("referrerpolicy", policy.as_str()));
            }
            m.void("link", &attrs);
        }

        render_google_tag(m, &config.integrations);
    }

    fn render_body(&self, m: &mut Markup, page: &dyn Page) -> Result<()> {
        let config = self.site.config();
        let settings = &config.page_settings;
        let body_classes = config.body_class_list();

        m.element("body", &class_attr(&body_classes), |m| {
            if let Some(nav) = &config.navigation {
                render_nav(m, page, self.site.pages(), nav);
            }

            m.element("main", &class_attr(&config.content_classes), |m| {
                page.content(settings, m)
            })?;

            let mut footer = Markup::new();
            if let Some(result) = page.footer(settings, &mut footer) {
                result?;
                m.element("footer", &[], |m| {
                    m.raw(footer.as_str());
                });
            }

            Ok(())
        })
    }
}

fn og(m: &mut Markup, property: &str, content: &str) {
    m.void("meta", &[("property", property), ("content", content)]);
}

fn class_attr(classes: &str) -> Vec<(&'static str, &str)> {
    if classes.is_empty() {
        Vec::new()
    } else {
        vec![("class", classes)]
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };
    format!("page callback panicked: {detail}")
}
