//! Pagecraft Core Library
//!
//! Site model, page contract, markup builder and validation for the Pagecraft
//! static site generator.
//!
//! # Modules
//!
//! - [`config`] - Site-wide settings (layout classes, navigation, resources, integrations)
//! - [`site`] - The validated [`Site`] aggregate
//! - [`builder`] - Fluent construction of a site
//! - [`page`] - The [`Page`] trait and closure-backed pages
//! - [`markdown`] - Markdown-backed pages
//! - [`markup`] - Structured HTML builder handed to page callbacks
//! - [`validate`] - Rejection of unsafe configuration strings
//! - [`project`] - TOML project files

pub mod builder;
pub mod config;
pub mod error;
pub mod markdown;
pub mod markup;
pub mod page;
pub mod project;
pub mod site;
pub mod validate;

pub use builder::{NavBuilder, ResourcesBuilder, SiteBuilder};
pub use config::{
    ExternalStylesheet, InputOutputPair, IntegrationConfig, Logo, NavSettings, PageSettings,
    ResourceConfig, SiteConfig,
};
pub use error::{ConfigError, Result};
pub use markdown::MarkdownPage;
pub use markup::Markup;
pub use page::{ContentPage, Page, PageError, PageResult};
pub use project::{PageEntry, Project};
pub use site::Site;
