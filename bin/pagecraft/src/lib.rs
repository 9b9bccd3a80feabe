//! Pagecraft CLI Library
//!
//! Command implementations behind the `pagecraft` binary, exposed as a
//! library for documentation and integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use pagecraft::cmd;
//!
//! // Build the site described by pagecraft.toml
//! cmd::build::run(Path::new("pagecraft.toml"), None, None).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use pagecraft_core::{Project, Site};
pub use pagecraft_generator::{BuildStats, SiteGenerator};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// pagecraft::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
