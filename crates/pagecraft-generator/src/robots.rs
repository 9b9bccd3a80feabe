//! Robots.txt generation.
//!
//! Generates the robots.txt file for search engine crawlers.

use pagecraft_core::Site;

use crate::sitemap::SITEMAP_FILE;

/// Robots file name under the output directory.
pub const ROBOTS_FILE: &str = "robots.txt";

/// Robots.txt generator.
#[derive(Debug, Clone, Copy)]
pub struct RobotsGenerator<'a> {
    site: &'a Site,
}

impl<'a> RobotsGenerator<'a> {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Generate robots.txt allowing every crawler and pointing at the sitemap.
    ///
    /// Returns `None` when the site has no base URL.
    #[must_use]
    pub fn generate(&self) -> Option<String> {
        let base_url = self.site.config().base_url()?;

        Some(format!(
            "User-agent: *\nAllow: /\nSitemap: {base_url}/{SITEMAP_FILE}\n"
        ))
    }
}
