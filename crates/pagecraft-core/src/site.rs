//! The site aggregate.

use std::{collections::HashSet, fmt, path::Path};

use crate::{
    builder::SiteBuilder,
    config::SiteConfig,
    error::{ConfigError, Result},
    page::Page,
    validate::normalize_relative,
};

/// A validated site: configuration plus pages in navigation order.
///
/// Construction is the only place invariants are checked; a `Site` is
/// read-only afterwards.
pub struct Site {
    config: SiteConfig,
    pages: Vec<Box<dyn Page>>,
}

impl Site {
    /// Validate `config` and `pages` and assemble a site.
    ///
    /// Fails when any class string, contact detail, logo or tag id is
    /// invalid, when two pages share an output file, or when a page output
    /// file is absolute or leaves the output directory.
    pub fn new(config: SiteConfig, pages: Vec<Box<dyn Page>>) -> Result<Self> {
        config.validate()?;

        let mut seen = HashSet::with_capacity(pages.len());
        for page in &pages {
            let filename = page.output_filename();
            let target = normalize_relative(filename)
                .filter(|path| !path.as_os_str().is_empty())
                .ok_or_else(|| ConfigError::UnsafePagePath(filename.to_string()))?;
            // `./a.html` and `x/../a.html` write the same file as `a.html`
            if !seen.insert(target) {
                return Err(ConfigError::DuplicatePage(filename.to_string()));
            }
        }

        Ok(Self { config, pages })
    }

    /// Start building a site with the given title and output directory.
    pub fn builder(title: impl Into<String>, output_path: impl AsRef<Path>) -> SiteBuilder {
        SiteBuilder::new()
            .title(title)
            .output_path(output_path.as_ref())
    }

    /// Site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Pages in navigation order.
    #[must_use]
    pub fn pages(&self) -> &[Box<dyn Page>] {
        &self.pages
    }

    /// Output directory.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pages: Vec<_> = self.pages.iter().map(|p| p.output_filename()).collect();
        f.debug_struct("Site")
            .field("config", &self.config)
            .field("pages", &pages)
            .finish()
    }
}
