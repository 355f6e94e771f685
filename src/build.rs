//! Build orchestration.
//!
//! Coordinates the full pipeline a single build runs:
//!
//! ```text
//! build_site()
//!     │
//!     ├── assets::stage() ──► Copy css/js, vendor/img/docs, favicons
//!     │
//!     ├── data::load() ──► Parse the resume data document
//!     │
//!     ├── render::generate_all() ──► index.html, resume-template.html,
//!     │                              site.webmanifest (concurrent writes)
//!     │
//!     └── pdf::render_to_file() ──► ATS PDF from the print document
//!                                   (when [pdf] enable)
//! ```
//!
//! Every stage failure aborts the build with context; nothing is retried.

use crate::{
    assets,
    config::SiteConfig,
    data, log,
    pdf::{self, ChromeEngine},
    render::{self, OutputPaths},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Run one complete build into the output directory.
pub fn build_site(config: &'static SiteConfig) -> Result<()> {
    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    log!("build"; "staging assets...");
    assets::stage(config)?;

    log!("build"; "generating documents...");
    let data = data::load(&config.build.data)?;
    let paths = OutputPaths {
        website: config.website_path(),
        print_document: config.print_template_path(),
        manifest: Some(config.manifest_path()),
    };
    render::generate_all(&data, &paths, config)?;

    if config.pdf.enable {
        log!("pdf"; "rendering...");
        let mut engine = ChromeEngine::launch(config)?;
        pdf::render_to_file(&mut engine, &paths.print_document, &config.pdf_output_path())?;
    }

    log_build_result(output)?;
    Ok(())
}

/// Render only the PDF, skipping asset staging and the website document.
///
/// With an explicit `template` the data file is not read at all; otherwise
/// the print document is regenerated first so the PDF always matches the
/// current data.
pub fn render_pdf_only(
    config: &'static SiteConfig,
    template: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let document = match template {
        Some(path) => path.to_path_buf(),
        None => {
            let data = data::load(&config.build.data)?;
            let document = config.print_template_path();
            render::generate_print(&data, &document, config)?;
            document
        }
    };

    let pdf_output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.pdf_output_path());

    log!("pdf"; "rendering {}...", document.display());
    let mut engine = ChromeEngine::launch(config)?;
    pdf::render_to_file(&mut engine, &document, &pdf_output)?;
    Ok(())
}

/// Log build result based on output directory contents
fn log_build_result(output: &Path) -> Result<()> {
    let file_count = fs::read_dir(output)?.filter_map(Result::ok).count();

    if file_count == 0 {
        log!("warn"; "output is empty, check the project layout");
    } else {
        log!("build"; "done");
    }

    Ok(())
}
