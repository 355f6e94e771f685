//! Template rendering from resume data.
//!
//! All renderers are pure functions of [`ResumeData`]: the same input
//! produces byte-identical output, and no function here performs I/O
//! except [`generate_all`], which writes the finished documents.
//!
//! Escaping policy (explicit per field): free-form text (names,
//! descriptions, meta fields, link display text) is HTML-escaped at every
//! attribute and text-node position; URL and icon-class fields are
//! interpolated verbatim, since they are markup-safe by construction.

mod manifest;
mod print;
mod website;

pub use manifest::manifest;
pub use print::print_document;
pub use website::website;

use crate::{config::SiteConfig, data::ResumeData, minify::minify};
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use thiserror::Error;

/// Leading-integer pattern for "NN+ years" phrases in the summary text.
static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*years").unwrap()
});

/// Fallback when the summary mentions no experience figure.
const DEFAULT_YEARS: &str = "15+";

/// Errors writing a generated document to disk.
#[derive(Debug, Error)]
#[error("failed to write generated `{0}`")]
pub struct RenderError(pub PathBuf, #[source] pub std::io::Error);

// ============================================================================
// Helpers
// ============================================================================

/// Escape text for HTML attribute and text-node positions.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Initials from a full name: first letter of the first token, plus the
/// first letter of the last token when there is more than one, upper-cased.
pub fn initials(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let last = tokens.next_back();

    let mut out: String = leading_letter(first).collect();
    if let Some(last) = last {
        out.extend(leading_letter(last));
    }
    out
}

fn leading_letter(token: &str) -> impl Iterator<Item = char> + '_ {
    token.chars().next().into_iter().flat_map(char::to_uppercase)
}

/// "First Last" from a full name, dropping middle tokens. Single-token
/// names are returned unchanged.
pub(crate) fn short_name(full_name: &str) -> String {
    let mut tokens = full_name.split_whitespace();
    let first = tokens.next().unwrap_or("");
    match tokens.next_back() {
        Some(last) => format!("{first} {last}"),
        None => first.to_string(),
    }
}

/// Best-effort "years of experience" figure extracted from the summary
/// (e.g. "15+ years" -> "15+"), falling back to a fixed default.
pub(crate) fn years_of_experience(summary: &str) -> String {
    YEARS_RE
        .captures(summary)
        .map(|caps| format!("{}+", &caps[1]))
        .unwrap_or_else(|| DEFAULT_YEARS.to_string())
}

// ============================================================================
// Output generation
// ============================================================================

/// Destination paths for one generation pass.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub website: PathBuf,
    pub print_document: PathBuf,
    /// The manifest is skipped when `None`.
    pub manifest: Option<PathBuf>,
}

/// Render and write the website document, the print document and (when
/// requested) the web manifest.
///
/// The three writes share no mutable state and run concurrently.
pub fn generate_all(
    data: &ResumeData,
    paths: &OutputPaths,
    config: &SiteConfig,
) -> Result<(), RenderError> {
    let (website_result, rest) = rayon::join(
        || write_document(&paths.website, &website(data), config),
        || {
            rayon::join(
                || write_document(&paths.print_document, &print_document(data), config),
                || match &paths.manifest {
                    Some(path) => write_bytes(path, manifest(data).as_bytes()),
                    None => Ok(()),
                },
            )
        },
    );

    website_result?;
    let (print_result, manifest_result) = rest;
    print_result?;
    manifest_result?;
    Ok(())
}

/// Render and write only the print document. Used by the standalone PDF
/// command, which has no use for the website or manifest.
pub fn generate_print(
    data: &ResumeData,
    path: &Path,
    config: &SiteConfig,
) -> Result<(), RenderError> {
    write_document(path, &print_document(data), config)
}

/// Write an HTML document, minifying when enabled.
fn write_document(path: &Path, html: &str, config: &SiteConfig) -> Result<(), RenderError> {
    let bytes = minify(html.as_bytes(), config);
    write_bytes(path, &bytes)
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| RenderError(path.to_path_buf(), err))?;
    }
    fs::write(path, bytes).map_err(|err| RenderError(path.to_path_buf(), err))
}

// ============================================================================
// Tests
// ============================================================================
