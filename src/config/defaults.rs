//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn data() -> PathBuf {
        "data/resume-data.json".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn website() -> PathBuf {
        "index.html".into()
    }

    pub fn print_template() -> PathBuf {
        "resume-template.html".into()
    }

    pub fn manifest() -> PathBuf {
        "site.webmanifest".into()
    }

    pub fn pdf_output() -> PathBuf {
        "generated-pdf/resume.pdf".into()
    }

    pub fn volatile() -> Vec<PathBuf> {
        vec!["css".into(), "js".into()]
    }

    pub fn stable() -> Vec<PathBuf> {
        vec!["img".into(), "vendor".into(), "docs".into()]
    }

    pub fn static_files() -> Vec<PathBuf> {
        [
            "android-chrome-192x192.png",
            "android-chrome-512x512.png",
            "apple-touch-icon.png",
            "favicon-16x16.png",
            "favicon-32x32.png",
            "favicon.ico",
            "sitemap.xml",
            "robots.txt",
        ]
        .into_iter()
        .map(PathBuf::from)
        .collect()
    }

    pub fn debounce_ms() -> u64 {
        100
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        8000
    }
}

// ============================================================================
// [pdf] Section Defaults
// ============================================================================

pub mod pdf {
    use std::path::PathBuf;

    pub fn browser() -> Option<PathBuf> {
        None
    }

    pub fn timeout_secs() -> u64 {
        30
    }
}
