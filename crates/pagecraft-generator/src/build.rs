//! Build orchestration.
//!
//! Coordinates page generation, resource copying, the sitemap and robots.txt.
//! Per-page and per-resource failures are collected and reported together
//! once every item has been attempted; files produced before a failure are
//! kept.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::{NaiveDate, Utc};
use pagecraft_core::Site;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    html::HtmlGenerator,
    resources::{ResourceStore, copy_resource},
    robots::{ROBOTS_FILE, RobotsGenerator},
    sitemap::{SITEMAP_FILE, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The output directory could not be created. Nothing was generated.
    #[error("failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// One or more pages failed to render or write.
    #[error("page generation failed: {0}")]
    Generation(FailureReport),

    /// One or more static resources failed to copy.
    #[error("resource copy failed: {0}")]
    ResourceCopy(FailureReport),

    /// IO error writing the sitemap or robots.txt.
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// One failed item and its cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Page output filename or resource input filename.
    pub name: String,
    /// Rendered cause.
    pub cause: String,
}

/// Failures collected over one pass, in the order they occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    what: &'static str,
    failures: Vec<Failure>,
}

impl FailureReport {
    fn new(what: &'static str) -> Self {
        Self {
            what,
            failures: Vec::new(),
        }
    }

    fn push(&mut self, name: impl Into<String>, cause: impl fmt::Display) {
        self.failures.push(Failure {
            name: name.into(),
            cause: cause.to_string(),
        });
    }

    /// The recorded failures.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Names of the failed items.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.name.as_str())
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Whether nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} failed: ", self.failures.len(), self.what)?;
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", failure.name, failure.cause)?;
        }
        Ok(())
    }
}

/// Build statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Number of pages generated.
    pub pages: usize,

    /// Number of static resources copied.
    pub resources: usize,

    /// Whether sitemap.xml was written.
    pub sitemap: bool,

    /// Whether robots.txt was written.
    pub robots: bool,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Generates a site's files into its output directory.
#[derive(Debug, Clone, Copy)]
pub struct SiteGenerator<'a> {
    site: &'a Site,
}

impl<'a> SiteGenerator<'a> {
    /// Create a generator for `site`.
    #[must_use]
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Run every step: pages, static resources, sitemap, robots.txt.
    pub fn build(&self, store: &dyn ResourceStore) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            title = %self.site.config().title,
            version = %self.site.config().version,
            output = %self.site.output_path().display(),
            "starting build"
        );

        stats.pages = self.generate_files()?;
        stats.resources = self.copy_resources(store)?;
        stats.sitemap = self.generate_sitemap()?;
        stats.robots = self.generate_robots_txt()?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            resources = stats.resources,
            sitemap = stats.sitemap,
            robots = stats.robots,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Render and write every page.
    ///
    /// The output directory is created first; failing that aborts before any
    /// page is attempted. A page that fails does not stop the others. Returns
    /// the number of pages written.
    pub fn generate_files(&self) -> Result<usize> {
        let output = self.ensure_output_dir()?;
        let generator = HtmlGenerator::new(self.site);
        let pages = self.site.pages();

        info!(count = pages.len(), "generating HTML pages");

        let mut report = FailureReport::new("page(s)");
        let mut count = 0;

        for page in pages {
            let filename = page.output_filename();
            let written = generator
                .render_page(page.as_ref())
                .and_then(|html| Ok(write_file(&output.join(filename), &html)?));

            match written {
                Ok(()) => {
                    debug!(page = filename, "wrote page");
                    count += 1;
                }
                Err(e) => {
                    warn!(page = filename, error = %e, "failed to generate page");
                    report.push(filename, e);
                }
            }
        }

        if report.is_empty() {
            Ok(count)
        } else {
            Err(BuildError::Generation(report))
        }
    }

    /// Copy every configured static file out of `store`.
    ///
    /// Every entry is attempted; failures are reported together. Returns the
    /// number of files copied.
    pub fn copy_resources(&self, store: &dyn ResourceStore) -> Result<usize> {
        let files = &self.site.config().resources.static_files;
        if files.is_empty() {
            return Ok(0);
        }

        let output = self.ensure_output_dir()?;
        info!(count = files.len(), "copying static resources");

        let mut report = FailureReport::new("resource(s)");
        let mut count = 0;

        for pair in files {
            match copy_resource(pair, store, output) {
                Ok(_) => count += 1,
                Err(e) => {
                    warn!(resource = %pair.input_filename, error = %e, "failed to copy resource");
                    report.push(pair.input_filename.as_str(), e);
                }
            }
        }

        if report.is_empty() {
            Ok(count)
        } else {
            Err(BuildError::ResourceCopy(report))
        }
    }

    /// Write sitemap.xml dated today. Returns whether a file was written.
    pub fn generate_sitemap(&self) -> Result<bool> {
        self.generate_sitemap_at(Utc::now().date_naive())
    }

    /// Write sitemap.xml with every entry dated `lastmod`.
    ///
    /// Nothing is written when the site has no base URL.
    pub fn generate_sitemap_at(&self, lastmod: NaiveDate) -> Result<bool> {
        let Some(xml) = SitemapGenerator::new(self.site).generate(lastmod) else {
            debug!("no base_url, skipping sitemap");
            return Ok(false);
        };

        let path = self.ensure_output_dir()?.join(SITEMAP_FILE);
        write_file(&path, &xml)?;
        info!(path = %path.display(), "generated sitemap");
        Ok(true)
    }

    /// Write robots.txt. Nothing is written when the site has no base URL.
    pub fn generate_robots_txt(&self) -> Result<bool> {
        let Some(robots) = RobotsGenerator::new(self.site).generate() else {
            debug!("no base_url, skipping robots.txt");
            return Ok(false);
        };

        let path = self.ensure_output_dir()?.join(ROBOTS_FILE);
        write_file(&path, &robots)?;
        info!(path = %path.display(), "generated robots.txt");
        Ok(true)
    }

    fn ensure_output_dir(&self) -> Result<&'a Path> {
        let path = self.site.output_path();
        fs::create_dir_all(path).map_err(|source| BuildError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(path)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pagecraft_core::{ContentPage, InputOutputPair, Page, SiteConfig};
    use tempfile::TempDir;

    use super::*;
    use crate::resources::EmbeddedStore;

    fn config(output: &Path) -> SiteConfig {
        SiteConfig {
            title: "Test Site".to_string(),
            output_path: output.to_path_buf(),
            ..SiteConfig::default()
        }
    }

    fn page(file: &str) -> Box<dyn Page> {
        Box::new(ContentPage::new(file, file, |_, m| {
            m.text("ok");
            Ok(())
        }))
    }

    #[test]
    fn test_failure_report_display() {
        let mut report = FailureReport::new("page(s)");
        report.push("a.html", "boom");
        report.push("b.html", "bang");

        assert_eq!(report.to_string(), "2 page(s) failed: a.html: boom; b.html: bang");
        assert_eq!(report.names().collect::<Vec<_>>(), vec!["a.html", "b.html"]);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_generate_files_writes_nested_pages() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public");
        let site = Site::new(config(&out), vec![page("index.html"), page("docs/guide.html")])
            .unwrap();

        let count = SiteGenerator::new(&site).generate_files().unwrap();

        assert_eq!(count, 2);
        assert!(out.join("index.html").exists());
        let guide = fs::read_to_string(out.join("docs/guide.html")).unwrap();
        assert!(guide.contains("<main class=\"mx-auto max-w-5xl px-4 py-8\">ok</main>"));
    }

    #[test]
    fn test_directory_creation_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let attempted = Rc::new(Cell::new(false));
        let flag = Rc::clone(&attempted);
        let page = ContentPage::new("Home", "index.html", move |_, _| {
            flag.set(true);
            Ok(())
        });
        let site = Site::new(config(&blocker.join("out")), vec![Box::new(page)]).unwrap();

        let err = SiteGenerator::new(&site).generate_files().unwrap_err();

        assert!(matches!(err, BuildError::DirectoryCreation { .. }));
        assert!(!attempted.get());
    }

    #[test]
    fn test_build_stats() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public");
        let mut config = config(&out);
        config.base_url = Some("https://example.com".to_string());
        config.resources.static_files = vec![InputOutputPair::new("favicon.ico", "")];
        let site = Site::new(config, vec![page("index.html"), page("about.html")]).unwrap();
        let store = EmbeddedStore::new().with("favicon.ico", &b"icon"[..]);

        let stats = SiteGenerator::new(&site).build(&store).unwrap();

        assert_eq!(stats.pages, 2);
        assert_eq!(stats.resources, 1);
        assert!(stats.sitemap);
        assert!(stats.robots);
        assert!(out.join("favicon.ico").exists());
        assert!(out.join("sitemap.xml").exists());
        assert!(out.join("robots.txt").exists());
    }

    #[test]
    fn test_build_without_base_url_skips_seo_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public");
        let site = Site::new(config(&out), vec![page("index.html")]).unwrap();

        let stats = SiteGenerator::new(&site)
            .build(&EmbeddedStore::new())
            .unwrap();

        assert_eq!(stats.pages, 1);
        assert!(!stats.sitemap);
        assert!(!stats.robots);
        assert!(!out.join("sitemap.xml").exists());
        assert!(!out.join("robots.txt").exists());
    }

    #[test]
    fn test_sitemap_date() {
        let dir = TempDir::new().unwrap();
        let mut config = config(dir.path());
        config.base_url = Some("https://example.com".to_string());
        let site = Site::new(config, vec![page("index.html")]).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();

        assert!(SiteGenerator::new(&site).generate_sitemap_at(date).unwrap());

        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        assert!(xml.contains("<lastmod>2025-01-31</lastmod>"));
    }
}
