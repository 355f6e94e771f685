//! Print document renderer.
//!
//! A deliberately plain, machine-readable variant of the resume: system
//! fonts, black on white, semantic headings, no images or icon fonts. This
//! is the page the PDF stage prints, so the styles are inlined and sized in
//! points.

use super::escape;
use crate::data::ResumeData;

/// Inlined stylesheet for the print document.
const PRINT_STYLES: &str = r#"        body {
            font-family: 'Arial', 'Helvetica', sans-serif;
            font-size: 10pt;
            line-height: 1.35;
            color: #000000;
            background: white;
            max-width: 8.5in;
            margin: 0 auto;
            padding: 0.4in;
        }

        h1 {
            font-size: 16pt;
            font-weight: bold;
            margin-bottom: 6pt;
            text-transform: none;
            color: #000000;
        }

        h2 {
            font-size: 12pt;
            font-weight: bold;
            margin-top: 10pt;
            margin-bottom: 4pt;
            border-bottom: 1px solid #000000;
            padding-bottom: 1pt;
            color: #000000;
        }

        h3 {
            font-size: 11pt;
            font-weight: bold;
            margin-top: 6pt;
            margin-bottom: 2pt;
            color: #000000;
        }

        h4 {
            font-size: 10pt;
            font-weight: bold;
            margin-bottom: 1pt;
            color: #000000;
        }

        p {
            margin-bottom: 4pt;
            text-align: justify;
        }

        .contact-info {
            margin-bottom: 12pt;
            text-align: center;
        }

        .contact-info p {
            margin-bottom: 1pt;
            text-align: center;
        }

        .contact-info h1 {
            margin-bottom: 4pt;
        }

        a {
            color: #000000;
            text-decoration: none;
        }

        a:hover {
            text-decoration: underline;
        }

        @media print {
            a {
                color: #000000;
                text-decoration: none;
            }
        }

        .resume-item {
            margin-bottom: 8pt;
            break-inside: avoid;
        }

        .job-header {
            display: flex;
            justify-content: space-between;
            align-items: baseline;
            margin-bottom: 2pt;
        }

        .job-title {
            font-weight: bold;
            font-size: 10pt;
        }

        .company {
            font-weight: normal;
            font-style: italic;
            margin-bottom: 1pt;
            font-size: 9pt;
        }

        .date-range {
            font-weight: normal;
            font-style: italic;
            white-space: nowrap;
            font-size: 9pt;
        }

        ul {
            margin-left: 14pt;
            margin-bottom: 4pt;
        }

        li {
            margin-bottom: 1pt;
            line-height: 1.3;
        }

        .skills-grid {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 6pt;
            margin-bottom: 8pt;
        }

        .skill-category {
            margin-bottom: 4pt;
        }

        .skill-category h4 {
            margin-bottom: 2pt;
        }

        .skill-category ul {
            margin-bottom: 2pt;
        }

        .skill-category li {
            margin-bottom: 0.5pt;
        }

        .cert-item {
            margin-bottom: 3pt;
            font-size: 9pt;
        }

        .cert-name {
            font-weight: bold;
        }

        .cert-issuer {
            font-style: italic;
        }

        .compact-section {
            margin-bottom: 8pt;
        }

        .compact-section h2 {
            margin-top: 8pt;
            margin-bottom: 3pt;
        }

        .compact-section ul {
            margin-bottom: 3pt;
        }

        .compact-section li {
            margin-bottom: 0.5pt;
        }

        .professional-summary {
            margin-bottom: 10pt;
        }

        .professional-summary h2 {
            margin-top: 8pt;
        }

        .professional-summary p {
            margin-bottom: 3pt;
        }

        @media print {
            body {
                padding: 0.25in;
                font-size: 9pt;
            }

            .page-break {
                page-break-before: always;
            }

            .no-break {
                break-inside: avoid;
            }

            h2 {
                font-size: 11pt;
            }

            h3 {
                font-size: 10pt;
            }
        }

        body, p, h1, h2, h3, h4, h5, h6, li, span, div {
            -webkit-user-select: text;
            -moz-user-select: text;
            -ms-user-select: text;
            user-select: text;
        }"#;

/// Render the print document. Pure: output depends only on `data`.
pub fn print_document(data: &ResumeData) -> String {
    let personal = &data.personal;

    let name = escape(&personal.name);
    let location = escape(&personal.location);
    let phone = escape(&personal.phone);
    let email = escape(&personal.email);
    let linkedin = &personal.linkedin;
    let github = &personal.github;
    let linkedin_text = display_url(linkedin);
    let github_text = display_url(github);

    let summary = escape(&data.summary.detailed);
    let leadership_skills = skill_list(&data.skills.leadership);
    let technical_skills = skill_list(&data.skills.technical);
    let experience = experience_items(data);
    let education = education_items(data);
    let certifications = certification_items(data);
    let contributions = contribution_items(data);

    let languages = data
        .languages
        .iter()
        .map(|lang| format!("{} ({})", escape(&lang.language), escape(&lang.proficiency)))
        .collect::<Vec<_>>()
        .join(", ");
    let interests = data
        .interests
        .detailed
        .iter()
        .map(|interest| escape(interest))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{name} - Resume</title>
    <style>
{PRINT_STYLES}
    </style>
</head>

<body>
    <!-- Header -->
    <header class="contact-info">
        <h1>{name}</h1>
        <p>{location} | {phone} | <a href="mailto:{email}">{email}</a></p>
        <p><a href="{linkedin}" target="_blank">LinkedIn: {linkedin_text}</a> | <a href="{github}" target="_blank">GitHub: {github_text}</a></p>
    </header>

    <!-- Professional Summary -->
    <section class="professional-summary">
        <h2>Professional Summary</h2>
        <p>{summary}</p>
    </section>

    <!-- Core Competencies -->
    <section>
        <h2>Core Competencies</h2>
        <div class="skills-grid">
            <div class="skill-category">
                <h4>Leadership &amp; Management</h4>
                <ul>
{leadership_skills}
                </ul>
            </div>
            <div class="skill-category">
                <h4>Technical Expertise</h4>
                <ul>
{technical_skills}
                </ul>
            </div>
        </div>
    </section>

    <!-- Professional Experience -->
    <section>
        <h2>Professional Experience</h2>

{experience}
    </section>

    <!-- Education -->
    <section>
        <h2>Education</h2>

{education}
    </section>

    <!-- Certifications -->
    <section class="compact-section">
        <h2>Certifications</h2>

{certifications}
    </section>

    <!-- Open Source Contributions -->
    <section class="compact-section">
        <h2>Open Source Contributions</h2>
        <ul>
{contributions}
        </ul>
    </section>

    <!-- Additional Information -->
    <section class="compact-section">
        <h2>Additional Information</h2>
        <ul>
            <li><strong>Languages:</strong> {languages}</li>
            <li><strong>Interests:</strong> {interests}</li>
            <li><strong>Location:</strong> {location} (Open to remote work)</li>
        </ul>
    </section>
</body>

</html>
"#
    )
}

/// Short display form of a profile URL ("https://github.com/x/" ->
/// "github.com/x").
fn display_url(url: &str) -> String {
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/');
    escape(trimmed)
}

fn skill_list(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| format!("                    <li>{}</li>", escape(skill)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn experience_items(data: &ResumeData) -> String {
    data.experience
        .iter()
        .map(|job| {
            format!(
                r#"        <div class="resume-item">
            <div class="job-header">
                <div>
                    <h3 class="job-title">{title}</h3>
                    <p class="company">{company}</p>
                </div>
                <span class="date-range">{period}</span>
            </div>
            <p>{description}</p>
        </div>"#,
                title = escape(&job.title),
                company = escape(&job.company),
                period = escape(&job.period),
                description = escape(&job.detailed_description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn education_items(data: &ResumeData) -> String {
    data.education
        .iter()
        .map(|edu| {
            let achievements = if edu.achievements.is_empty() {
                String::new()
            } else {
                let joined = edu
                    .achievements
                    .iter()
                    .map(|achievement| escape(achievement))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("\n            <p><strong>{joined}</strong></p>")
            };
            format!(
                r#"        <div class="resume-item">
            <div class="job-header">
                <div>
                    <h3>{degree}</h3>
                    <p class="company">{institution}</p>
                </div>
                <span class="date-range">{period}</span>
            </div>{achievements}
        </div>"#,
                degree = escape(&edu.degree),
                institution = escape(&edu.institution),
                period = escape(&edu.period),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn certification_items(data: &ResumeData) -> String {
    data.certifications
        .iter()
        .map(|cert| {
            format!(
                r#"        <div class="cert-item">
            <span class="cert-name">{name}</span> |
            <span class="cert-issuer">{issuer}</span> |
            <span class="date-range">{period}</span>
        </div>"#,
                name = escape(&cert.name),
                issuer = escape(&cert.issuer),
                period = escape(&cert.period),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn contribution_items(data: &ResumeData) -> String {
    data.collaborations
        .iter()
        .map(|collab| {
            format!(
                "            <li><strong>{}</strong> - {}</li>",
                escape(&collab.name),
                escape(&collab.description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_print_document_structure() {
        let html = print_document(&data::sample());

        for heading in [
            "Professional Summary",
            "Core Competencies",
            "Professional Experience",
            "Education",
            "Certifications",
            "Open Source Contributions",
            "Additional Information",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_print_document_has_no_images_or_icons() {
        let html = print_document(&data::sample());

        assert!(!html.contains("<img"));
        assert!(!html.contains("fa-li"));
        assert!(!html.contains("fontawesome"));
    }

    #[test]
    fn test_print_document_styles_inlined() {
        let html = print_document(&data::sample());

        assert!(html.contains("<style>"));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_display_url() {
        assert_eq!(
            display_url("https://www.linkedin.com/in/aruanoguate/"),
            "linkedin.com/in/aruanoguate"
        );
        assert_eq!(display_url("https://github.com/aruanoguate"), "github.com/aruanoguate");
    }

    #[test]
    fn test_languages_and_interests_joined() {
        let html = print_document(&data::sample());

        assert!(html.contains("Spanish (Native)"));
        assert!(html.contains("Photography, Cycling"));
    }

    #[test]
    fn test_education_achievements_inline() {
        let html = print_document(&data::sample());
        assert!(html.contains("<p><strong>Cum laude</strong></p>"));

        let mut data = data::sample();
        data.education[0].achievements.clear();
        assert!(!print_document(&data).contains("<p><strong>"));
    }

    #[test]
    fn test_free_text_escaped() {
        let mut data = data::sample();
        data.summary.detailed = "R&D leadership".to_string();

        let html = print_document(&data);
        assert!(html.contains("R&amp;D leadership"));
    }
}
