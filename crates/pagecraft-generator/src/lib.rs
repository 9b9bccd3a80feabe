//! Pagecraft Generator Library
//!
//! Static site generation pipeline for Pagecraft.
//!
//! # Modules
//!
//! - [`html`] - Page document assembly (head metadata, SEO tags, body regions)
//! - [`nav`] - Navigation bar rendering
//! - [`analytics`] - Google tag snippet
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - robots.txt generation
//! - [`resources`] - Resource stores and static file mapping
//! - [`build`] - Build orchestration and failure aggregation
//!
//! # Example
//!
//! ```no_run
//! use pagecraft_core::{ContentPage, Site};
//! use pagecraft_generator::{EmbeddedStore, SiteGenerator};
//!
//! let site = Site::builder("My Site", "public")
//!     .base_url("https://example.com")
//!     .page(ContentPage::new("Home", "index.html", |_, m| {
//!         m.element("h1", &[], |m| {
//!             m.text("Hello");
//!         });
//!         Ok(())
//!     }))
//!     .build()?;
//!
//! let stats = SiteGenerator::new(&site).build(&EmbeddedStore::new())?;
//! println!("{} pages", stats.pages);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analytics;
pub mod build;
pub mod html;
pub mod nav;
pub mod resources;
pub mod robots;
pub mod sitemap;

pub use build::{BuildError, BuildStats, Failure, FailureReport, SiteGenerator};
pub use html::HtmlGenerator;
pub use resources::{DirectoryStore, EmbeddedStore, ResourceError, ResourceStore, copy_resource};
pub use robots::RobotsGenerator;
pub use sitemap::SitemapGenerator;
