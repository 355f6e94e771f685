//! `[pdf]` section configuration.
//!
//! Controls the headless-browser PDF rendering stage.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[pdf]` section in vitae.toml - PDF rendering settings.
///
/// # Example
/// ```toml
/// [pdf]
/// enable = true
/// browser = "/usr/bin/chromium"   # optional, auto-discovered when omitted
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PdfConfig {
    /// Render the ATS PDF during builds. Disable to speed up watch cycles
    /// on machines where browser startup dominates the rebuild time.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Explicit path to a Chrome/Chromium binary.
    /// When omitted, common binary names are resolved from PATH.
    #[serde(default = "defaults::pdf::browser")]
    #[educe(Default = defaults::pdf::browser())]
    pub browser: Option<PathBuf>,

    /// Navigation/render timeout for the headless browser, in seconds.
    #[serde(default = "defaults::pdf::timeout_secs")]
    #[educe(Default = defaults::pdf::timeout_secs())]
    pub timeout_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_pdf_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert!(config.pdf.enable);
        assert_eq!(config.pdf.browser, None);
        assert_eq!(config.pdf.timeout_secs, 30);
    }

    #[test]
    fn test_pdf_config_override() {
        let config = r#"
            [pdf]
            enable = false
            browser = "/usr/bin/chromium"
            timeout_secs = 60
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert!(!config.pdf.enable);
        assert_eq!(config.pdf.browser, Some(PathBuf::from("/usr/bin/chromium")));
        assert_eq!(config.pdf.timeout_secs, 60);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [pdf]
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
    }
}
