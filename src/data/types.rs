//! Typed records for the resume data document.
//!
//! Field names map to the camelCase keys of the JSON data file. Fields the
//! source document may omit are `Option` or defaulted collections, so an
//! absent field is a representable state instead of a render-time failure.

use serde::{Deserialize, Serialize};

/// Root of the resume data document, loaded once per build and immutable
/// for the duration of that build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal: Personal,
    pub summary: Summary,
    pub contact: ContactSections,
    /// Display order, assumed reverse-chronological (not enforced).
    pub experience: Vec<Job>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub collaborations: Vec<Collaboration>,
    pub interests: Interests,
    pub social: Vec<SocialLink>,
    pub skills: Skills,
    pub languages: Vec<Language>,
    pub meta: Meta,
}

/// Personal and contact identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    /// Path of the profile image, relative to the site root.
    pub profile_image: String,
    /// Path of the downloadable PDF, relative to the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_pdf: Option<String>,
}

/// Short and detailed biography text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub short: String,
    pub detailed: String,
}

/// The three ordered link groups shown in the about section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSections {
    /// Primary professional links (LinkedIn, resume download).
    pub primary: Vec<ContactLink>,
    /// Direct contact information (phone, email).
    pub contact: Vec<ContactLink>,
    /// Additional links (GitHub, talks, ...).
    pub links: Vec<ContactLink>,
}

/// A single link entry with its icon class and display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLink {
    /// Icon class names, interpolated verbatim (trusted input).
    pub icon: String,
    pub url: String,
    pub text: String,
    /// Suggested filename when the link is a download.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
}

/// One position in the experience section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub company_url: String,
    /// Free-form period string (e.g. "January 2020 - Present").
    pub period: String,
    pub detailed_description: String,
}

/// One entry in the education section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

/// One entry in the certifications section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub period: String,
    pub credential_url: String,
}

/// An open source project the person is credited on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub name: String,
    pub url: String,
    pub role: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<VersionRef>,
}

/// A released version the collaboration appears in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRef {
    pub version: String,
    pub url: String,
}

/// Interests, as a lead paragraph plus a detail list for the PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interests {
    pub summary: String,
    pub detailed: Vec<String>,
}

/// A social media profile with its icon class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

/// Skill lists, split the way the print document groups them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub leadership: Vec<String>,
    pub technical: Vec<String>,
}

/// A spoken language and its proficiency level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

/// SEO metadata and optional analytics wiring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub description: String,
    pub keywords: String,
    pub author: String,
    /// Canonical URL of the deployed site, without trailing slash.
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

/// Analytics identifiers. All optional; absent means no tracking snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
}
