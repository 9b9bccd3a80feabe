//! Sitemap generation.
//!
//! Generates XML sitemaps for search engine optimization.

use chrono::NaiveDate;
use pagecraft_core::Site;
use tracing::debug;

/// Sitemap file name under the output directory.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Sitemap generator.
#[derive(Debug, Clone, Copy)]
pub struct SitemapGenerator<'a> {
    site: &'a Site,
}

impl<'a> SitemapGenerator<'a> {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Generate sitemap XML, one entry per page in page order.
    ///
    /// Every entry carries `lastmod` as the given date. Returns `None` when
    /// the site has no base URL.
    #[must_use]
    pub fn generate(&self, lastmod: NaiveDate) -> Option<String> {
        let config = self.site.config();
        if config.base_url().is_none() {
            return None;
        }

        let pages = self.site.pages();
        debug!(count = pages.len(), "generating sitemap");

        let lastmod = lastmod.format("%Y-%m-%d").to_string();
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for page in pages {
            let Some(loc) = config.canonical_url(page.output_filename()) else {
                continue;
            };
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        Some(xml)
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
