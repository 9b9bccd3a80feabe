//! Project files.
//!
//! A project file describes a site in TOML: a `[site]` table holding a
//! [`SiteConfig`] and a list of Markdown pages.
//!
//! ```toml
//! [site]
//! title = "My Site"
//! base_url = "https://example.com"
//!
//! [[pages]]
//! title = "Home"
//! output = "index.html"
//! source = "content/index.md"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    config::SiteConfig,
    error::{ConfigError, Result},
    markdown::MarkdownPage,
    page::Page,
    site::Site,
};

/// Environment variable prefix for [`Project::load_with_env`].
pub const ENV_PREFIX: &str = "PAGECRAFT";

/// A site described on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Site configuration.
    pub site: SiteConfig,

    /// Markdown pages in navigation order.
    #[serde(default)]
    pub pages: Vec<PageEntry>,

    /// Directory relative paths are resolved against.
    #[serde(skip)]
    pub root: PathBuf,
}

/// A Markdown page entry in a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Navigation label.
    pub title: String,
    /// Output file relative to the output directory.
    pub output: String,
    /// Markdown source relative to the project file.
    pub source: PathBuf,
    /// Plain-text footer.
    #[serde(default)]
    pub footer: Option<String>,
    /// `<title>` override.
    #[serde(default)]
    pub page_title: Option<String>,
    /// Description meta tag.
    #[serde(default)]
    pub description: Option<String>,
    /// Social preview image.
    #[serde(default)]
    pub og_image: Option<String>,
    /// Raw JSON-LD.
    #[serde(default)]
    pub structured_data: Option<String>,
}

impl PageEntry {
    fn into_page(self, root: &Path) -> MarkdownPage {
        let mut page = MarkdownPage::new(self.title, self.output, root.join(self.source));
        if let Some(footer) = self.footer {
            page = page.with_footer(footer);
        }
        if let Some(title) = self.page_title {
            page = page.with_page_title(title);
        }
        if let Some(description) = self.description {
            page = page.with_meta_description(description);
        }
        if let Some(image) = self.og_image {
            page = page.with_og_image(image);
        }
        if let Some(json) = self.structured_data {
            page = page.with_structured_data(json);
        }
        page
    }
}

impl Project {
    /// Load a project from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let mut project: Project = toml::from_str(&content)?;
        project.root = project_root(path);
        project.site.validate()?;
        Ok(project)
    }

    /// Load a project, letting `PAGECRAFT__`-prefixed environment variables
    /// override values from the file (e.g. `PAGECRAFT__SITE__BASE_URL`).
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let mut project: Project = settings.try_deserialize()?;
        project.root = project_root(path);
        project.site.validate()?;
        Ok(project)
    }

    /// Resolve paths against the project directory and build the site.
    ///
    /// A relative `output_path` and `resources.source_dir` are resolved the
    /// same way as page sources.
    pub fn into_site(self) -> Result<Site> {
        let root = self.root;
        let mut config = self.site;
        config.output_path = root.join(&config.output_path);
        config.resources.source_dir = root.join(&config.resources.source_dir);

        let pages: Vec<Box<dyn Page>> = self
            .pages
            .into_iter()
            .map(|entry| Box::new(entry.into_page(&root)) as Box<dyn Page>)
            .collect();

        tracing::debug!(pages = pages.len(), root = %root.display(), "resolved project");
        Site::new(config, pages)
    }
}

fn project_root(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
