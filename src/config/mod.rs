//! Configuration management for `vitae.toml`.
//!
//! # Sections
//!
//! | Section   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `[build]` | Input/output paths, asset lists, debounce        |
//! | `[serve]` | Development server (port, interface, watch)      |
//! | `[pdf]`   | Headless-browser PDF rendering                   |
//!
//! # Example
//!
//! ```toml
//! [build]
//! data = "data/resume-data.json"
//! output = "dist"
//! minify = true
//!
//! [serve]
//! port = 8000
//!
//! [pdf]
//! enable = true
//! ```
//!
//! The config file is optional: every field has a default matching the
//! conventional project layout, so a bare `vitae build` works in a
//! directory that follows it.

mod build;
mod error;
mod pdf;
mod serve;
pub mod defaults;

use build::BuildConfig;
use error::ConfigError;
use pdf::PdfConfig;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Context, Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Browser binaries probed on PATH when `[pdf] browser` is not set.
const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
    "chrome",
];

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing vitae.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// PDF rendering settings
    #[serde(default)]
    pub pdf: PdfConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Get CLI arguments reference
    pub fn get_cli(&self) -> &'static Cli {
        self.cli.unwrap()
    }

    // ------------------------------------------------------------------------
    // Output path accessors
    // ------------------------------------------------------------------------

    /// Absolute path of the generated website document.
    pub fn website_path(&self) -> PathBuf {
        self.build.output.join(&self.build.website)
    }

    /// Absolute path of the generated print document.
    pub fn print_template_path(&self) -> PathBuf {
        self.build.output.join(&self.build.print_template)
    }

    /// Absolute path of the generated web manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.build.output.join(&self.build.manifest)
    }

    /// Absolute path of the generated PDF.
    pub fn pdf_output_path(&self) -> PathBuf {
        self.build.output.join(&self.build.pdf_output)
    }

    /// Delay before the automatic follow-up build after coalesced triggers.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.build.debounce_ms)
    }

    /// Resolve the headless browser binary: the configured path when set,
    /// otherwise the first candidate found on PATH.
    pub fn resolve_browser(&self) -> Option<PathBuf> {
        if let Some(path) = &self.pdf.browser {
            return Some(path.clone());
        }
        BROWSER_CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
    }

    // ------------------------------------------------------------------------
    // CLI integration
    // ------------------------------------------------------------------------

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        self.set_root(&root);
        self.update_path_with_root(&root);

        if let Some(build_args) = cli.build_args() {
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            Self::update_option(&mut self.pdf.enable, build_args.pdf.as_ref());
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path) {
        let cli = self.get_cli();

        // Apply CLI overrides first
        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize input/output paths. Asset source lists (volatile, stable,
        // static_files) stay relative and are joined against root at staging
        // time; output file names stay relative to the output directory.
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        let cli = self.get_cli();

        // `vitae pdf --template <path>` is the only invocation that does not
        // read the data file.
        let needs_data = !matches!(
            &cli.command,
            Commands::Pdf {
                template: Some(_),
                ..
            }
        );
        if needs_data && !self.build.data.exists() {
            bail!(ConfigError::Validation(format!(
                "[build.data] not found: {}",
                self.build.data.display()
            )));
        }

        if let Commands::Pdf {
            template: Some(template),
            ..
        } = &cli.command
            && !template.exists()
        {
            bail!(ConfigError::Validation(format!(
                "print template not found: {}",
                template.display()
            )));
        }

        let needs_browser = cli.is_pdf() || (self.pdf.enable && !cli.is_serve());
        if needs_browser {
            if let Some(path) = &self.pdf.browser {
                if !path.exists() {
                    bail!(ConfigError::Validation(format!(
                        "[pdf.browser] not found: {}",
                        path.display()
                    )));
                }
            } else {
                self.resolve_browser().with_context(|| {
                    format!(
                        "No Chrome/Chromium binary found on PATH (tried: {}). \
                         Install one or set [pdf.browser] in vitae.toml, \
                         or disable PDF rendering with [pdf] enable = false.",
                        BROWSER_CANDIDATES.join(", ")
                    )
                })?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [build]
            data = "resume.json"
            output = "public"

            [serve]
            port = 3000
        "#;
        let config = SiteConfig::from_str(config_str).unwrap();

        assert_eq!(config.build.data, PathBuf::from("resume.json"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [build
            data = "resume.json"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_output_path_accessors() {
        let mut config = SiteConfig::default();
        config.build.output = PathBuf::from("/project/dist");

        assert_eq!(config.website_path(), PathBuf::from("/project/dist/index.html"));
        assert_eq!(
            config.print_template_path(),
            PathBuf::from("/project/dist/resume-template.html")
        );
        assert_eq!(
            config.manifest_path(),
            PathBuf::from("/project/dist/site.webmanifest")
        );
        assert_eq!(
            config.pdf_output_path(),
            PathBuf::from("/project/dist/generated-pdf/resume.pdf")
        );
    }

    #[test]
    fn test_debounce_from_config() {
        let config = r#"
            [build]
            debounce_ms = 250
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert_eq!(config.debounce(), Duration::from_millis(250));
    }

    #[test]
    fn test_resolve_browser_explicit_path() {
        let mut config = SiteConfig::default();
        config.pdf.browser = Some(PathBuf::from("/opt/chromium/chrome"));

        assert_eq!(
            config.resolve_browser(),
            Some(PathBuf::from("/opt/chromium/chrome"))
        );
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert_eq!(config.serve.port, 8000);
        assert!(config.pdf.enable);
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [build]
            data = "data/resume-data.json"
            output = "dist"
            minify = true
            volatile = ["css", "js"]
            stable = ["img", "vendor", "docs"]
            debounce_ms = 100

            [serve]
            interface = "127.0.0.1"
            port = 8000
            watch = true

            [pdf]
            enable = true
            timeout_secs = 45
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(config.build.minify);
        assert_eq!(config.serve.port, 8000);
        assert!(config.pdf.enable);
        assert_eq!(config.pdf.timeout_secs, 45);
    }
}
