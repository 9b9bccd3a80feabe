//! Check command - validate the project file and page sources

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use pagecraft_core::Project;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the project file, then checks that every Markdown source and the
/// resource directory exist.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking project");

    let mut result = ValidationResult::default();

    println!("Checking project file...");
    let project = match Project::load_with_env(config_path) {
        Ok(p) => {
            println!("  ✓ Project file valid");
            Some(p)
        }
        Err(e) => {
            result.add_error(format!("Project error: {e}"));
            println!("  ✗ Project file invalid: {e}");
            None
        }
    };

    if let Some(project) = project {
        println!("\nChecking pages...");
        check_sources(&project, &mut result);

        println!("\nChecking configuration values...");
        check_config_values(&project, &mut result);

        match project.into_site() {
            Ok(site) => println!("  ✓ {} page(s) ready to build", site.pages().len()),
            Err(e) => {
                result.add_error(format!("Site error: {e}"));
                println!("  ✗ Site invalid: {e}");
            }
        }
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check that every page source file exists.
fn check_sources(project: &Project, result: &mut ValidationResult) {
    let mut missing = 0;

    for entry in &project.pages {
        let source = project.root.join(&entry.source);
        if !source.is_file() {
            result.add_error(format!(
                "{}: source not found: {}",
                entry.output,
                source.display()
            ));
            missing += 1;
        }
    }

    if missing == 0 {
        println!("  ✓ All {} page sources found", project.pages.len());
    } else {
        println!("  ✗ {missing}/{} page sources missing", project.pages.len());
    }
}

/// Check configuration values for common issues.
fn check_config_values(project: &Project, result: &mut ValidationResult) {
    let site = &project.site;

    match site.base_url.as_deref() {
        None => result.add_warning(
            "site.base_url is not set; sitemap.xml and robots.txt will be skipped",
        ),
        Some(url) if !url.starts_with("http") => {
            result.add_warning("site.base_url should start with http:// or https://");
        }
        Some(_) => {}
    }

    if project.pages.is_empty() {
        result.add_warning("no pages configured");
    }

    let resources = project.root.join(&site.resources.source_dir);
    if !site.resources.static_files.is_empty() && !resources.is_dir() {
        result.add_error(format!(
            "Resource directory missing: {}",
            resources.display()
        ));
    }

    let output = project.root.join(&site.output_path);
    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            output.display()
        ));
    }

    println!("  ✓ Configuration values checked");
}
