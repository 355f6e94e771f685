//! Web manifest renderer.

use super::{short_name, years_of_experience};
use crate::data::ResumeData;
use serde_json::json;

/// Render `site.webmanifest`. Pure: output depends only on `data`.
pub fn manifest(data: &ResumeData) -> String {
    let short = short_name(&data.personal.name);
    let years = years_of_experience(&data.summary.detailed);
    let headline = data
        .experience
        .first()
        .map(|job| job.title.as_str())
        .unwrap_or("Resume");

    let manifest = json!({
        "name": format!("{short} - {headline}"),
        "short_name": short,
        "description": format!(
            "Professional resume of {} - {headline} with {years} years of experience.",
            data.personal.name
        ),
        "start_url": "/",
        "scope": "/",
        "icons": [
            {
                "src": "/android-chrome-192x192.png",
                "sizes": "192x192",
                "type": "image/png"
            },
            {
                "src": "/android-chrome-512x512.png",
                "sizes": "512x512",
                "type": "image/png"
            }
        ],
        "theme_color": "#2E86AB",
        "background_color": "#ffffff",
        "display": "standalone",
        "categories": ["business", "productivity"],
        "lang": "en"
    });

    // Serializing a Value built above cannot fail
    serde_json::to_string_pretty(&manifest).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_manifest_fields() {
        let parsed: serde_json::Value = serde_json::from_str(&manifest(&data::sample())).unwrap();

        assert_eq!(parsed["name"], "Alvaro Ruano - Director of Engineering");
        assert_eq!(parsed["short_name"], "Alvaro Ruano");
        assert_eq!(parsed["display"], "standalone");
        assert_eq!(parsed["icons"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_manifest_description_uses_extracted_years() {
        let parsed: serde_json::Value = serde_json::from_str(&manifest(&data::sample())).unwrap();
        let description = parsed["description"].as_str().unwrap();

        assert!(description.contains("15+ years of experience"));
    }

    #[test]
    fn test_manifest_single_token_name() {
        let mut data = data::sample();
        data.personal.name = "Madonna".to_string();

        let parsed: serde_json::Value = serde_json::from_str(&manifest(&data)).unwrap();
        assert_eq!(parsed["short_name"], "Madonna");
    }
}
