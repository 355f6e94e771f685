//! Resume data loading.
//!
//! Reads the single JSON data source every build starts from. The document
//! is parsed into typed records ([`types`]) and used as-is: no defaulting
//! beyond the optional fields, no normalization. Load failures are fatal to
//! the build and never retried.

mod types;

pub use types::*;

use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

/// Data loading errors. Both variants abort the current build.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read resume data `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid resume data in `{0}`")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Read and parse the resume data document.
pub fn load(path: &Path) -> Result<ResumeData, DataLoadError> {
    let content =
        fs::read_to_string(path).map_err(|err| DataLoadError::Io(path.to_path_buf(), err))?;
    serde_json::from_str(&content).map_err(|err| DataLoadError::Parse(path.to_path_buf(), err))
}

// ============================================================================
// Test fixtures
// ============================================================================

/// Minimal valid data document (one entry per list field), shared by tests
/// across modules.
#[cfg(test)]
pub(crate) fn sample() -> ResumeData {
    serde_json::from_str(SAMPLE_JSON).unwrap()
}

#[cfg(test)]
pub(crate) const SAMPLE_JSON: &str = r#"{
  "personal": {
    "name": "Alvaro Ruano",
    "location": "Guatemala City, Guatemala",
    "email": "alvaro@example.com",
    "phone": "+502 5555 5555",
    "linkedin": "https://www.linkedin.com/in/aruanoguate/",
    "github": "https://github.com/aruanoguate",
    "profileImage": "img/profile.jpg",
    "resumePdf": "generated-pdf/resume.pdf"
  },
  "summary": {
    "short": "Engineering leader",
    "detailed": "Technology Director with 15+ years of experience in software engineering & cloud architecture."
  },
  "contact": {
    "primary": [
      { "icon": "fa-brands fa-linkedin", "url": "https://www.linkedin.com/in/aruanoguate/", "text": "LinkedIn Profile" }
    ],
    "contact": [
      { "icon": "fa-solid fa-envelope", "url": "mailto:alvaro@example.com", "text": "alvaro@example.com" }
    ],
    "links": [
      { "icon": "fa-brands fa-github", "url": "https://github.com/aruanoguate", "text": "GitHub", "download": "resume.pdf" }
    ]
  },
  "experience": [
    {
      "title": "Director of Engineering",
      "company": "Example Corp",
      "companyUrl": "https://example.com",
      "period": "2020 - Present",
      "detailedDescription": "Leads several product engineering teams."
    }
  ],
  "education": [
    {
      "institution": "Universidad Galileo",
      "degree": "B.S. in Systems Engineering",
      "period": "2008 - 2012",
      "credentialUrl": "https://example.com/credential",
      "achievements": ["Cum laude"]
    }
  ],
  "certifications": [
    {
      "name": "AWS Solutions Architect",
      "issuer": "Amazon Web Services",
      "period": "2021",
      "credentialUrl": "https://example.com/aws"
    }
  ],
  "collaborations": [
    {
      "name": "example-project",
      "url": "https://github.com/example/project",
      "role": "Contributor",
      "description": "Bug fixes and documentation.",
      "versions": [ { "version": "1.2.0", "url": "https://github.com/example/project/releases/1.2.0" } ]
    }
  ],
  "interests": {
    "summary": "Outside of work I enjoy photography and cycling.",
    "detailed": ["Photography", "Cycling"]
  },
  "social": [
    { "platform": "GitHub", "url": "https://github.com/aruanoguate", "icon": "fa-brands fa-github fa-2x" }
  ],
  "skills": {
    "leadership": ["Team Building"],
    "technical": ["Cloud Architecture"]
  },
  "languages": [
    { "language": "Spanish", "proficiency": "Native" }
  ],
  "meta": {
    "description": "Professional resume of Alvaro Ruano",
    "keywords": "software, engineering, leadership",
    "author": "Alvaro Ruano",
    "canonical": "https://alvaroruano.me",
    "analytics": { "googleAnalyticsId": "G-TEST123" }
  }
}"#;

// ============================================================================
// Tests
// ============================================================================
