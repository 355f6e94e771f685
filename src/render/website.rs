//! Website document renderer.
//!
//! Produces the full single-page site as one HTML string: SEO metadata
//! (Open Graph, Twitter cards, JSON-LD), the accessible navigation shell
//! and every content section, in data order.

use super::{escape, initials};
use crate::data::{Certification, Collaboration, ContactLink, Education, Job, Meta, ResumeData, SocialLink};
use serde_json::json;

/// Headline used when the experience list is empty.
const FALLBACK_HEADLINE: &str = "Resume";

/// Render the website document. Pure: output depends only on `data`.
pub fn website(data: &ResumeData) -> String {
    let personal = &data.personal;
    let meta = &data.meta;

    let name = escape(&personal.name);
    let initials = initials(&personal.name);
    let headline = data
        .experience
        .first()
        .map(|job| escape(&job.title))
        .unwrap_or_else(|| FALLBACK_HEADLINE.to_string());
    let title = format!("{name} - {headline}");

    let mut name_tokens = personal.name.split_whitespace();
    let first_name = escape(name_tokens.next().unwrap_or(""));
    let last_name = escape(name_tokens.next_back().unwrap_or(""));

    let description = escape(&meta.description);
    let keywords = escape(&meta.keywords);
    let author = escape(&meta.author);
    let canonical = escape(&meta.canonical);
    let profile_image = &personal.profile_image;
    let og_image = format!("{canonical}/{profile_image}");

    let analytics = analytics_snippet(meta);
    let structured_data = json_ld(data);

    let summary = escape(&data.summary.detailed);
    let interests_summary = escape(&data.interests.summary);

    let primary_links = contact_links(&data.contact.primary);
    let contact_links_html = contact_links(&data.contact.contact);
    let additional_links = contact_links(&data.contact.links);
    let experience_items = experience_items(&data.experience);
    let education_items = education_items(&data.education);
    let certification_items = certification_items(&data.certifications);
    let collaboration_items = collaboration_items(&data.collaborations);
    let social_icons = social_icons(&data.social);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">

<head>
{analytics}  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
  <meta name="description" content="{description}">
  <meta name="keywords" content="{keywords}">
  <meta name="author" content="{author}">
  <link rel="canonical" href="{canonical}" />

  <!-- Open Graph Meta Tags for Social Sharing -->
  <meta property="og:title" content="{title}" />
  <meta property="og:description" content="{description}" />
  <meta property="og:image" content="{og_image}" />
  <meta property="og:url" content="{canonical}" />
  <meta property="og:type" content="profile" />
  <meta property="og:site_name" content="{name} - Professional Resume" />
  <meta property="profile:first_name" content="{first_name}" />
  <meta property="profile:last_name" content="{last_name}" />

  <!-- Twitter Card Meta Tags -->
  <meta name="twitter:card" content="summary_large_image" />
  <meta name="twitter:title" content="{title}" />
  <meta name="twitter:description" content="{description}" />
  <meta name="twitter:image" content="{og_image}" />

  <title>{title}</title>

  <!-- Favicons -->
  <link rel="apple-touch-icon" sizes="180x180" href="/apple-touch-icon.png">
  <link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png">
  <link rel="icon" type="image/png" sizes="16x16" href="/favicon-16x16.png">
  <link rel="manifest" href="/site.webmanifest">

  <!-- Preconnect to external resources for faster loading -->
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link rel="dns-prefetch" href="https://www.googletagmanager.com">

  <!-- Bootstrap core CSS -->
  <link href="vendor/bootstrap/css/bootstrap.min.css" rel="stylesheet">

  <!-- Custom fonts for this template -->
  <link href="https://fonts.googleapis.com/css2?family=Saira+Extra+Condensed:wght@500;700&family=Muli:ital,wght@0,400;0,800;1,400;1,800&display=swap" rel="stylesheet">
  <link href="vendor/fontawesome-free/css/all.min.css" rel="stylesheet">

  <!-- Custom styles for this template -->
  <link href="css/resume.min.css" rel="stylesheet">

  <!-- JSON-LD Structured Data for SEO -->
  <script type="application/ld+json">
{structured_data}
  </script>

</head>

<body id="page-top">

  <!-- Skip Links for Accessibility -->
  <div class="skip-links">
    <a href="#main-content" class="skip-link">Skip to main content</a>
    <a href="#sideNav" class="skip-link">Skip to navigation</a>
  </div>

  <nav class="navbar navbar-expand-lg navbar-dark bg-primary fixed-top" id="sideNav" role="navigation" aria-label="Main navigation">
    <a class="navbar-brand js-scroll-trigger" href="#page-top" aria-label="Go to top of page">
      <!-- Desktop version - full size profile image -->
      <span class="d-none d-lg-block">
        <img class="img-fluid img-profile rounded-circle mx-auto mb-2" src="{profile_image}" alt="Professional headshot of {name}" role="img">
      </span>
      <!-- Mobile version - compact profile with name/initials -->
      <span class="d-lg-none d-flex align-items-center">
        <img class="img-fluid img-profile-mobile rounded-circle me-2" src="{profile_image}" alt="Professional headshot of {name}" role="img">
        <span class="navbar-brand-text" aria-label="Initials: {initials}">{initials}</span>
      </span>
    </a>
    <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarSupportedContent"
      aria-controls="navbarSupportedContent" aria-expanded="false" aria-label="Toggle navigation menu">
      <span class="navbar-toggler-icon" aria-hidden="true"></span>
    </button>
    <div class="collapse navbar-collapse" id="navbarSupportedContent">
      <ul class="navbar-nav" role="menubar">
        <li class="nav-item" role="none">
          <a class="nav-link js-scroll-trigger" href="#about" role="menuitem">About</a>
        </li>
        <li class="nav-item" role="none">
          <a class="nav-link js-scroll-trigger" href="#experience" role="menuitem">Experience</a>
        </li>
        <li class="nav-item" role="none">
          <a class="nav-link js-scroll-trigger" href="#education" role="menuitem">Education</a>
        </li>
        <li class="nav-item" role="none">
          <a class="nav-link js-scroll-trigger" href="#certifications" role="menuitem">Certifications</a>
        </li>
        <li class="nav-item" role="none">
          <a class="nav-link js-scroll-trigger" href="#collaborations" role="menuitem">Collaborations</a>
        </li>
        <li class="nav-item" role="none">
          <a class="nav-link js-scroll-trigger" href="#interests" role="menuitem">Interests</a>
        </li>
      </ul>
    </div>
  </nav>

  <main id="main-content" class="container-fluid p-0" role="main">

    <section class="resume-section p-3 p-lg-5 d-flex align-items-center" id="about" aria-labelledby="about-heading">
      <div class="w-100">
        <h1 id="about-heading" class="mb-0 text-primary">
          {name}
        </h1>
        <br />
        <p class="lead mb-5">{summary}</p>

        <!-- Primary Links -->
        <div class="contact-section-primary mb-4" role="group" aria-label="Primary professional links">
          <ul class="fa-ul mb-0" role="list">
{primary_links}
          </ul>
        </div>

        <!-- Contact Information -->
        <div class="contact-section-info mb-4" role="group" aria-label="Contact information">
          <ul class="fa-ul mb-0" role="list">
{contact_links_html}
          </ul>
        </div>

        <!-- Additional Links -->
        <div class="contact-section-links" role="group" aria-label="Additional professional links">
          <ul class="fa-ul mb-0" role="list">
{additional_links}
          </ul>
        </div>
      </div>
    </section>

    <hr class="m-0">

    <section class="resume-section p-3 p-lg-5 d-flex justify-content-center" id="experience" aria-labelledby="experience-heading">
      <div class="w-100">
        <h2 id="experience-heading" class="mb-5">Experience</h2>

{experience_items}

      </div>
    </section>

    <hr class="m-0">

    <section class="resume-section p-3 p-lg-5 d-flex align-items-center" id="education" aria-labelledby="education-heading">
      <div class="w-100">
        <h2 id="education-heading" class="mb-5">Education</h2>

{education_items}

      </div>
    </section>

    <hr class="m-0">

    <section class="resume-section p-3 p-lg-5 d-flex align-items-center" id="certifications" aria-labelledby="certifications-heading">
      <div class="w-100">
        <h2 id="certifications-heading" class="mb-5">Certifications</h2>

{certification_items}
      </div>
    </section>

    <hr class="m-0">

    <section class="resume-section p-3 p-lg-5 d-flex align-items-center" id="collaborations" aria-labelledby="collaborations-heading">
      <div class="w-100">
        <h2 id="collaborations-heading" class="mb-5">Collaborations</h2>
        <p class="lead mb-5">I've been mentioned as collaborator on the below open source projects:</p>
        <ul class="fa-ul mb-0" role="list" aria-label="Open source collaborations">
{collaboration_items}
        </ul>
      </div>
    </section>

    <hr class="m-0">

    <section class="resume-section p-3 p-lg-5 d-flex align-items-center" id="interests" aria-labelledby="interests-heading">
      <div class="w-100">
        <h2 id="interests-heading" class="mb-5">Interests</h2>

        <div class="row align-items-center">
          <div class="col-12 col-lg-8 col-xl-7">
            <p class="lead fs-4 mb-4 mb-lg-0">{interests_summary}</p>
          </div>

          <div class="col-12 col-lg-4 col-xl-5">
            <div class="social-section text-center text-lg-end mt-3 mt-lg-0" role="group" aria-label="Social media profiles">
              <div class="social-icons" role="list">
{social_icons}
              </div>
            </div>
          </div>
        </div>
      </div>
    </section>

  </main>

  <!-- Bootstrap core JavaScript -->
  <script src="vendor/jquery/jquery.min.js"></script>
  <script src="vendor/bootstrap/js/bootstrap.bundle.min.js"></script>

  <!-- Plugin JavaScript -->
  <script src="vendor/jquery-easing/jquery.easing.min.js"></script>

  <!-- Custom scripts for this template -->
  <script src="js/resume.min.js"></script>

</body>

</html>
"##
    )
}

/// GA4 snippet, emitted only when an analytics ID is configured.
fn analytics_snippet(meta: &Meta) -> String {
    let Some(id) = meta
        .analytics
        .as_ref()
        .and_then(|analytics| analytics.google_analytics_id.as_deref())
    else {
        return String::new();
    };

    format!(
        r#"  <!-- Google Analytics GA4 -->
  <script async src="https://www.googletagmanager.com/gtag/js?id={id}"></script>
  <script>
    window.dataLayer = window.dataLayer || [];
    function gtag(){{dataLayer.push(arguments);}}
    gtag('js', new Date());
    gtag('config', '{id}');
  </script>

"#
    )
}

/// JSON-LD `Person` record. Built as a value so quoting is never manual.
fn json_ld(data: &ResumeData) -> String {
    let personal = &data.personal;
    let canonical = &data.meta.canonical;

    let mut same_as = vec![personal.linkedin.clone(), personal.github.clone()];
    same_as.extend(data.social.iter().map(|link| link.url.clone()));

    let knows_about: Vec<&String> = data
        .skills
        .leadership
        .iter()
        .chain(&data.skills.technical)
        .collect();

    let mut person = json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": personal.name,
        "url": canonical,
        "image": format!("{canonical}/{}", personal.profile_image),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": personal.location,
        },
        "email": personal.email,
        "telephone": personal.phone,
        "sameAs": same_as,
        "knowsAbout": knows_about,
        "alumniOf": data.education.iter().map(|edu| json!({
            "@type": "EducationalOrganization",
            "name": edu.institution,
        })).collect::<Vec<_>>(),
        "hasCredential": data.certifications.iter().map(|cert| json!({
            "@type": "EducationalOccupationalCredential",
            "name": cert.name,
            "credentialCategory": "certification",
            "recognizedBy": {
                "@type": "Organization",
                "name": cert.issuer,
            },
        })).collect::<Vec<_>>(),
    });

    if let Some(job) = data.experience.first() {
        person["jobTitle"] = json!(job.title);
        person["worksFor"] = json!({
            "@type": "Organization",
            "name": job.company,
            "url": job.company_url,
        });
    }

    serde_json::to_string_pretty(&person).unwrap_or_default()
}

fn contact_links(links: &[ContactLink]) -> String {
    links
        .iter()
        .map(|link| {
            let text = escape(&link.text);
            let download_attr = link
                .download
                .as_deref()
                .map(|file| format!(" download=\"{file}\" type=\"application/pdf\""))
                .unwrap_or_default();
            format!(
                "            <li role=\"listitem\">\n              \
                 <i class=\"fa-li {icon}\" aria-hidden=\"true\"></i>\n              \
                 <a href=\"{url}\" target=\"_blank\" rel=\"noopener\"{download_attr} aria-label=\"{text}\">{text}</a>\n            \
                 </li>",
                icon = link.icon,
                url = link.url,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn experience_items(experience: &[Job]) -> String {
    experience
        .iter()
        .enumerate()
        .map(|(index, job)| {
            format!(
                r#"        <article class="resume-item d-flex flex-column flex-md-row justify-content-between mb-5" role="group" aria-labelledby="job-{index}">
          <div class="resume-content">
            <h3 id="job-{index}" class="mb-0">{title}</h3>
            <div class="subheading mb-3"><a href="{company_url}" target="_blank" rel="noopener" aria-label="Visit {company} website">{company}</a></div>
            <div class="resume-date-mobile d-md-none">
              <span class="text-primary" aria-label="Employment period">{period}</span>
            </div>
            <p>{description}</p>
          </div>
          <div class="resume-date text-md-end d-none d-md-block">
            <span class="text-primary" aria-label="Employment period">{period}</span>
          </div>
        </article>"#,
                title = escape(&job.title),
                company_url = job.company_url,
                company = escape(&job.company),
                period = escape(&job.period),
                description = escape(&job.detailed_description),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn education_items(education: &[Education]) -> String {
    education
        .iter()
        .enumerate()
        .map(|(index, edu)| {
            let degree = escape(&edu.degree);
            let credential = edu
                .credential_url
                .as_deref()
                .map(|url| {
                    format!(
                        "\n              <a href=\"{url}\" target=\"_blank\" rel=\"noopener\" \
                         aria-label=\"View credential for {degree}\">(See Credential)</a>"
                    )
                })
                .unwrap_or_default();
            let achievements = if edu.achievements.is_empty() {
                String::new()
            } else {
                let items = edu
                    .achievements
                    .iter()
                    .map(|achievement| {
                        format!(
                            "              <li role=\"listitem\">\n                \
                             <i class=\"fa-li fa fa-trophy text-warning\" aria-hidden=\"true\"></i>\n                \
                             {}\n              </li>",
                            escape(achievement)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "\n            <ul class=\"fa-ul mb-0\" role=\"list\" aria-label=\"Achievements\">\n{items}\n            </ul>"
                )
            };
            format!(
                r#"        <article class="resume-item d-flex flex-column flex-md-row justify-content-between mb-5" role="group" aria-labelledby="edu-{index}">
          <div class="resume-content">
            <h3 id="edu-{index}" class="mb-0">{institution}</h3>
            <div class="mb-3">
              <div class="subheading">{degree}</div>{credential}
            </div>
            <div class="resume-date-mobile d-md-none">
              <span class="text-primary" aria-label="Study period">{period}</span>
            </div>{achievements}
          </div>
          <div class="resume-date text-md-end d-none d-md-block">
            <span class="text-primary" aria-label="Study period">{period}</span>
          </div>
        </article>"#,
                institution = escape(&edu.institution),
                period = escape(&edu.period),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn certification_items(certifications: &[Certification]) -> String {
    certifications
        .iter()
        .enumerate()
        .map(|(index, cert)| {
            format!(
                r#"        <article class="resume-item d-flex flex-column flex-md-row justify-content-between mb-5" role="group" aria-labelledby="cert-{index}">
          <div class="resume-content">
            <h3 id="cert-{index}" class="mb-0">{cert_name}</h3>
            <div class="subheading">{issuer}</div>
            <a href="{credential_url}" target="_blank"
              rel="noopener" aria-label="View credential for {cert_name}">(See Credential)</a>
          </div>
          <div class="resume-date text-md-end">
            <span class="text-primary" aria-label="Certification period">{period}</span>
          </div>
        </article>"#,
                cert_name = escape(&cert.name),
                issuer = escape(&cert.issuer),
                credential_url = cert.credential_url,
                period = escape(&cert.period),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collaboration_items(collaborations: &[Collaboration]) -> String {
    collaborations
        .iter()
        .map(|collab| {
            let name = escape(&collab.name);
            let versions = if collab.versions.is_empty() {
                String::new()
            } else {
                let links = collab
                    .versions
                    .iter()
                    .map(|version| {
                        format!(
                            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener\" class=\"text-muted\" \
                             aria-label=\"Version {v}\">{v}</a>",
                            url = version.url,
                            v = escape(&version.version),
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "\n            <br><small class=\"text-muted mt-1 d-block\">Versions: {links}</small>"
                )
            };
            format!(
                "          <li role=\"listitem\">\n            \
                 <i class=\"fa-li fa fa-check\" aria-hidden=\"true\"></i>\n            \
                 <a href=\"{url}\" target=\"_blank\"\n              \
                 rel=\"noopener\" aria-label=\"Visit {name} project\">{name}</a>: {role}{versions}\n          \
                 </li>",
                url = collab.url,
                role = escape(&collab.role),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn social_icons(social: &[SocialLink]) -> String {
    social
        .iter()
        .map(|link| {
            format!(
                "                <div role=\"listitem\">\n                  \
                 <a href=\"{url}\" target=\"_blank\" rel=\"noopener\" aria-label=\"{platform} profile link\">\n                    \
                 <i class=\"{icon}\" aria-hidden=\"true\"></i>\n                  \
                 </a>\n                </div>",
                url = link.url,
                platform = escape(&link.platform),
                icon = link.icon,
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
    fn test_website_contains_all_sections() {
        let html = website(&data::sample());

        for anchor in [
            "id=\"about\"",
            "id=\"experience\"",
            "id=\"education\"",
            "id=\"certifications\"",
            "id=\"collaborations\"",
            "id=\"interests\"",
        ] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
    }

    #[test]
    fn test_website_title_uses_first_job() {
        let html = website(&data::sample());
        assert!(html.contains("<title>Alvaro Ruano - Director of Engineering</title>"));
    }

    #[test]
    fn test_website_title_fallback_without_experience() {
        let mut data = data::sample();
        data.experience.clear();

        let html = website(&data);
        assert!(html.contains("<title>Alvaro Ruano - Resume</title>"));
    }

    #[test]
    fn test_analytics_present_when_configured() {
        let html = website(&data::sample());
        assert!(html.contains("gtag/js?id=G-TEST123"));
        assert!(html.contains("gtag('config', 'G-TEST123');"));
    }

    #[test]
    fn test_analytics_absent_without_id() {
        let mut data = data::sample();
        data.meta.analytics = None;

        let html = website(&data);
        assert!(!html.contains("googletagmanager"));
        assert!(!html.contains("gtag("));
    }

    #[test]
    fn test_free_text_is_escaped() {
        let mut data = data::sample();
        data.personal.name = "Alvaro <script>alert(1)</script>".to_string();
        data.experience[0].detailed_description = "Shipped A & B".to_string();

        let html = website(&data);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Shipped A &amp; B"));
    }

    #[test]
    fn test_json_ld_is_valid_json() {
        let data = data::sample();
        let parsed: serde_json::Value = serde_json::from_str(&json_ld(&data)).unwrap();

        assert_eq!(parsed["@type"], "Person");
        assert_eq!(parsed["jobTitle"], "Director of Engineering");
        assert_eq!(parsed["worksFor"]["name"], "Example Corp");
        assert!(parsed["sameAs"].as_array().unwrap().len() >= 2);
    }

    #[test]
    fn test_json_ld_without_experience_omits_work() {
        let mut data = data::sample();
        data.experience.clear();

        let parsed: serde_json::Value = serde_json::from_str(&json_ld(&data)).unwrap();
        assert!(parsed.get("jobTitle").is_none());
        assert!(parsed.get("worksFor").is_none());
    }

    #[test]
    fn test_download_attribute_only_when_set() {
        let html = website(&data::sample());
        assert!(html.contains("download=\"resume.pdf\" type=\"application/pdf\""));
    }

    #[test]
    fn test_education_optional_fields_omitted() {
        let mut data = data::sample();
        data.education[0].credential_url = None;
        data.education[0].achievements.clear();

        let html = website(&data);
        assert!(!html.contains("(See Credential)</a>\n            </div>"));
        assert!(!html.contains("aria-label=\"Achievements\""));
    }
}
