//! `[build]` section configuration.
//!
//! Controls input/output paths, asset staging lists and rebuild behavior.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in vitae.toml - build pipeline settings.
///
/// # Example
/// ```toml
/// [build]
/// data = "data/resume-data.json"
/// output = "dist"
/// minify = true
/// volatile = ["css", "js"]
/// stable = ["img", "vendor", "docs"]
/// debounce_ms = 100
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root (set from CLI, not from the config file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Resume data file (JSON), relative to root.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Output directory, relative to root.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Website document name, relative to the output directory.
    #[serde(default = "defaults::build::website")]
    #[educe(Default = defaults::build::website())]
    pub website: PathBuf,

    /// Print-oriented document name, relative to the output directory.
    /// This is the document the PDF renderer rasterizes.
    #[serde(default = "defaults::build::print_template")]
    #[educe(Default = defaults::build::print_template())]
    pub print_template: PathBuf,

    /// Web manifest name, relative to the output directory.
    #[serde(default = "defaults::build::manifest")]
    #[educe(Default = defaults::build::manifest())]
    pub manifest: PathBuf,

    /// PDF output path, relative to the output directory.
    /// Kept under its own subdirectory so staged documents are never clobbered.
    #[serde(default = "defaults::build::pdf_output")]
    #[educe(Default = defaults::build::pdf_output())]
    pub pdf_output: PathBuf,

    /// Minify the generated html documents.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,

    /// Directories re-copied into the output on every build (compiled
    /// stylesheets, scripts). Relative to root.
    #[serde(default = "defaults::build::volatile")]
    #[educe(Default = defaults::build::volatile())]
    pub volatile: Vec<PathBuf>,

    /// Directories copied only when absent from the output (images, vendor
    /// bundles, long-lived documents). Copying these once per session avoids
    /// delete/recreate races while coalesced rebuilds are serving them.
    #[serde(default = "defaults::build::stable")]
    #[educe(Default = defaults::build::stable())]
    pub stable: Vec<PathBuf>,

    /// Individual files copied into the output root on every build
    /// (favicons, robots.txt). Relative to root.
    #[serde(default = "defaults::build::static_files")]
    #[educe(Default = defaults::build::static_files())]
    pub static_files: Vec<PathBuf>,

    /// Delay in milliseconds before the automatic follow-up build that
    /// covers triggers coalesced during a running build.
    #[serde(default = "defaults::build::debounce_ms")]
    #[educe(Default = defaults::build::debounce_ms())]
    pub debounce_ms: u64,
}
