//! Build command - generates the static site

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use pagecraft_core::Project;
use pagecraft_generator::{BuildStats, DirectoryStore, SiteGenerator};

/// Run the build command.
///
/// Loads the project file (with `PAGECRAFT__` environment overrides), applies
/// command-line overrides and runs the full pipeline.
pub fn run(
    config_path: &Path,
    output: Option<&Path>,
    base_url: Option<&str>,
) -> Result<BuildStats> {
    let start = Instant::now();
    tracing::info!(?config_path, ?output, ?base_url, "Starting build");

    let mut project =
        Project::load_with_env(config_path).wrap_err("Failed to load project file")?;

    // Output given on the command line is relative to the working directory
    if let Some(out) = output {
        let out = std::env::current_dir()
            .wrap_err("Failed to resolve working directory")?
            .join(out);
        tracing::info!(output = %out.display(), "Overriding output directory from CLI");
        project.site.output_path = out;
    }

    if let Some(url) = base_url {
        tracing::info!(base_url = url, "Overriding site base_url from CLI");
        project.site.base_url = Some(url.to_string());
    }

    let site = project.into_site().wrap_err("Invalid site configuration")?;
    tracing::debug!(?site, "Loaded site");

    let store = DirectoryStore::new(&site.config().resources.source_dir);
    let stats = SiteGenerator::new(&site)
        .build(&store)
        .wrap_err("Build failed")?;

    let duration = start.elapsed();

    println!();
    println!("  Build completed successfully!");
    println!();
    println!("  Pages:      {}", stats.pages);
    println!("  Resources:  {}", stats.resources);
    println!("  Sitemap:    {}", if stats.sitemap { "yes" } else { "skipped" });
    println!("  Robots:     {}", if stats.robots { "yes" } else { "skipped" });
    println!();
    println!("  Duration:   {:.2}s", duration.as_secs_f64());
    println!("  Output:     {}", site.output_path().display());
    println!();

    tracing::info!(?stats, ?duration, "Build completed successfully");

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_project(dir: &Path) -> std::path::PathBuf {
        fs::create_dir_all(dir.join("content")).unwrap();
        fs::create_dir_all(dir.join("resources")).unwrap();
        fs::write(dir.join("content/index.md"), "# Home\n").unwrap();
        fs::write(dir.join("resources/favicon.ico"), b"icon").unwrap();

        let path = dir.join("pagecraft.toml");
        fs::write(
            &path,
            r#"
[site]
title = "CLI Site"
output_path = "dist"

[[site.resources.static_files]]
input_filename = "favicon.ico"

[[pages]]
title = "Home"
output = "index.html"
source = "content/index.md"
"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_build_project() {
        let dir = TempDir::new().unwrap();
        let path = write_project(dir.path());

        let stats = run(&path, None, Some("https://example.com")).unwrap();

        assert_eq!(stats.pages, 1);
        assert_eq!(stats.resources, 1);
        assert!(stats.sitemap);
        let dist = dir.path().join("dist");
        assert!(dist.join("index.html").exists());
        assert!(dist.join("favicon.ico").exists());
        assert!(
            fs::read_to_string(dist.join("robots.txt"))
                .unwrap()
                .contains("Sitemap: https://example.com/sitemap.xml")
        );
    }

    #[test]
    fn test_build_output_override() {
        let dir = TempDir::new().unwrap();
        let path = write_project(dir.path());
        let out = dir.path().join("elsewhere");

        let stats = run(&path, Some(out.as_path()), None).unwrap();

        assert!(!stats.sitemap);
        assert!(out.join("index.html").exists());
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_build_missing_project() {
        let dir = TempDir::new().unwrap();
        let err = run(&dir.path().join("nope.toml"), None, None).unwrap_err();
        assert!(err.to_string().contains("Failed to load project file"));
    }
}
