//! PDF rendering through a headless browser.
//!
//! The print document is loaded in Chrome/Chromium over the DevTools
//! protocol and printed to a tagged, US Letter PDF. The browser is a
//! heavyweight external resource, so [`render_to_file`] releases it on
//! every exit path, success or failure, before reporting the result.

use crate::{config::SiteConfig, log};
use anyhow::anyhow;
use headless_chrome::{Browser, LaunchOptions, types::PrintToPdfOptions};
use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// PDF rendering errors.
#[derive(Debug, Error)]
pub enum PdfRenderError {
    #[error("failed to launch headless browser")]
    Launch(#[source] anyhow::Error),

    #[error("failed to render `{0}` to PDF")]
    Render(String, #[source] anyhow::Error),

    #[error("failed to write PDF `{0}`")]
    Write(PathBuf, #[source] io::Error),
}

/// A renderer that turns a document URL into PDF bytes.
///
/// Seam for testing the resource-release contract of [`render_to_file`]
/// without a browser binary.
pub trait PdfEngine {
    fn render(&mut self, url: &str) -> Result<Vec<u8>, PdfRenderError>;

    /// Release the underlying resources. Must be idempotent.
    fn close(&mut self);
}

/// [`PdfEngine`] backed by a local Chrome/Chromium over CDP.
pub struct ChromeEngine {
    browser: Option<Browser>,
}

impl ChromeEngine {
    /// Launch a headless browser using the binary resolved from config.
    pub fn launch(config: &SiteConfig) -> Result<Self, PdfRenderError> {
        let browser_path = config.resolve_browser();
        let options = LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .path(browser_path)
            .args(vec![
                OsStr::new("--disable-dev-shm-usage"),
                OsStr::new("--disable-gpu"),
                OsStr::new("--no-first-run"),
            ])
            .idle_browser_timeout(Duration::from_secs(config.pdf.timeout_secs))
            .build()
            .map_err(|err| PdfRenderError::Launch(anyhow!(err)))?;

        let browser = Browser::new(options).map_err(PdfRenderError::Launch)?;
        Ok(Self {
            browser: Some(browser),
        })
    }

    /// Print settings for machine-readable resumes: US Letter, 0.5in
    /// margins, no backgrounds or browser header/footer, tagged for
    /// text extraction.
    fn print_options() -> PrintToPdfOptions {
        PrintToPdfOptions {
            landscape: Some(false),
            display_header_footer: Some(false),
            print_background: Some(false),
            paper_width: Some(8.5),
            paper_height: Some(11.0),
            margin_top: Some(0.5),
            margin_bottom: Some(0.5),
            margin_left: Some(0.5),
            margin_right: Some(0.5),
            prefer_css_page_size: Some(true),
            generate_tagged_pdf: Some(true),
            generate_document_outline: Some(false),
            ..Default::default()
        }
    }
}

impl PdfEngine for ChromeEngine {
    fn render(&mut self, url: &str) -> Result<Vec<u8>, PdfRenderError> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| PdfRenderError::Launch(anyhow!("browser already closed")))?;

        let render_err = |err| PdfRenderError::Render(url.to_string(), err);

        let tab = browser.new_tab().map_err(render_err)?;
        tab.navigate_to(url).map_err(render_err)?;
        tab.wait_until_navigated().map_err(render_err)?;
        tab.print_to_pdf(Some(Self::print_options())).map_err(render_err)
    }

    fn close(&mut self) {
        // Dropping the handle closes the browser process
        self.browser.take();
    }
}

/// Render `document` to a PDF at `output`.
///
/// The engine is closed exactly once on every path before the result is
/// propagated, so a render failure never leaks a browser process.
pub fn render_to_file<E: PdfEngine>(
    engine: &mut E,
    document: &Path,
    output: &Path,
) -> Result<(), PdfRenderError> {
    let url = file_url(document);
    let result = engine.render(&url);
    engine.close();

    let bytes = result?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|err| PdfRenderError::Write(output.to_path_buf(), err))?;
    }
    fs::write(output, &bytes).map_err(|err| PdfRenderError::Write(output.to_path_buf(), err))?;

    log!("pdf"; "Wrote {} ({} KB)", output.display(), bytes.len() / 1024);
    Ok(())
}

/// `file://` URL for a local document.
fn file_url(path: &Path) -> String {
    let absolute = path
        .canonicalize()
        .unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct MockEngine {
        result: Option<Result<Vec<u8>, PdfRenderError>>,
        close_calls: usize,
    }

    impl MockEngine {
        fn succeeding(bytes: &[u8]) -> Self {
            Self {
                result: Some(Ok(bytes.to_vec())),
                close_calls: 0,
            }
        }

        fn failing() -> Self {
            Self {
                result: Some(Err(PdfRenderError::Render(
                    "file:///doc.html".to_string(),
                    anyhow!("render failed"),
                ))),
                close_calls: 0,
            }
        }
    }

    impl PdfEngine for MockEngine {
        fn render(&mut self, _url: &str) -> Result<Vec<u8>, PdfRenderError> {
            self.result
                .take()
                .unwrap_or_else(|| Err(PdfRenderError::Launch(anyhow!("render called twice"))))
        }

        fn close(&mut self) {
            self.close_calls += 1;
        }
    }

    #[test]
    fn test_render_to_file_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("resume-template.html");
        fs::write(&document, "<html></html>").unwrap();
        let output = dir.path().join("generated-pdf/resume.pdf");

        let mut engine = MockEngine::succeeding(b"%PDF-1.7");
        render_to_file(&mut engine, &document, &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"%PDF-1.7");
        assert_eq!(engine.close_calls, 1);
    }

    #[test]
    fn test_engine_closed_exactly_once_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("resume-template.html");
        let output = dir.path().join("resume.pdf");

        let mut engine = MockEngine::failing();
        let result = render_to_file(&mut engine, &document, &output);

        assert!(matches!(result, Err(PdfRenderError::Render(..))));
        assert_eq!(engine.close_calls, 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_file_url_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let document = dir.path().join("doc.html");
        fs::write(&document, "x").unwrap();

        let url = file_url(&document);
        assert!(url.starts_with("file:///"));
        assert!(url.ends_with("doc.html"));
    }
}
