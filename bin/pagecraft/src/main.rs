//! Pagecraft CLI
//!
//! Builds a static site described by a TOML project file.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Pagecraft.
#[derive(Parser)]
#[command(
    name = "pagecraft",
    version,
    about = "Generate static HTML sites from a project file"
)]
struct Cli {
    /// Path to the project file
    #[arg(short, long, default_value = "pagecraft.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate pages, static files, sitemap and robots.txt
    Build {
        /// Override the output directory
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
        /// Override the site base URL (e.g., https://example.com)
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate the project file and page sources
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    pagecraft::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output, base_url } => {
            pagecraft::cmd::build::run(&cli.config, output.as_deref(), base_url.as_deref())?;
        }
        Commands::Check { strict } => {
            pagecraft::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
