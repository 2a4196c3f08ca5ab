//! Section descriptors: the headless form of the rendered page.
//!
//! [`sections`] maps the content model to an ordered list of [`Section`]
//! values in the fixed page order. The HTML templates, the text exporter, and
//! the section manifest all consume this list, so entry order is decided in
//! exactly one place: the model's authored order, verbatim.

use std::path::Path;

use vitae_model::Resume;

/// MIME type advertised on the resume download link.
pub const RESUME_MIME_TYPE: &str = "application/octet-stream";

/// One rendered section of the page.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    /// Photo, name, bio, download button, email, social links
    Hero {
        name: String,
        tagline: String,
        email: String,
        photo: String,
        resume_href: String,
        resume_filename: String,
        mime_type: String,
        social: Vec<SocialLink>,
    },

    Education { entries: Vec<Education> },

    /// The "Experience & Qualifications" summary bullets
    Qualifications { items: Vec<String> },

    Skills { groups: Vec<SkillGroup> },

    Publications { entries: Vec<Publication> },

    WorkHistory { entries: Vec<Experience> },

    Projects { entries: Vec<Project> },
}

impl Section {
    /// Section heading as shown on the page. The hero has none.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Section::Hero { .. } => None,
            Section::Education { .. } => Some("Education"),
            Section::Qualifications { .. } => Some("Experience & Qualifications"),
            Section::Skills { .. } => Some("Hard Skills"),
            Section::Publications { .. } => Some("Publications"),
            Section::WorkHistory { .. } => Some("Work History"),
            Section::Projects { .. } => Some("Projects & Accomplishments"),
        }
    }
}

/// A social link ready for display.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// An education entry ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub highlights: Vec<String>,
}

/// A skill group ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// A publication ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Publication {
    pub title: String,
    pub url: String,
}

/// A work-history entry ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub highlights: Vec<String>,
}

/// A project entry ready for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub details: Vec<String>,
}

/// Map the model to the page's sections, in fixed order:
/// hero, education, qualifications, skills, publications, work history,
/// projects. List sections with no entries are omitted; entry order inside
/// each section is the model's order, untouched.
pub fn sections(resume: &Resume) -> Vec<Section> {
    let profile = resume.profile();

    let mut out = vec![Section::Hero {
        name: profile.name.clone(),
        tagline: profile.tagline.clone(),
        email: profile.email.clone(),
        photo: asset_url(&profile.photo),
        resume_href: asset_url(&profile.resume),
        resume_filename: file_name(&profile.resume),
        mime_type: RESUME_MIME_TYPE.to_string(),
        social: profile
            .social
            .iter()
            .map(|link| SocialLink {
                platform: link.platform.clone(),
                url: link.url.clone(),
            })
            .collect(),
    }];

    if !resume.education().is_empty() {
        out.push(Section::Education {
            entries: resume
                .education()
                .iter()
                .map(|e| Education {
                    institution: e.institution.clone(),
                    degree: e.degree.clone(),
                    period: e.period.label(),
                    highlights: e.highlights.clone(),
                })
                .collect(),
        });
    }

    if !resume.qualifications().is_empty() {
        out.push(Section::Qualifications {
            items: resume.qualifications().to_vec(),
        });
    }

    if !resume.skills().is_empty() {
        out.push(Section::Skills {
            groups: resume
                .skills()
                .iter()
                .map(|g| SkillGroup {
                    category: g.category.clone(),
                    items: g.items.clone(),
                })
                .collect(),
        });
    }

    if !resume.publications().is_empty() {
        out.push(Section::Publications {
            entries: resume
                .publications()
                .iter()
                .map(|p| Publication {
                    title: p.title.clone(),
                    url: p.url.clone(),
                })
                .collect(),
        });
    }

    if !resume.experience().is_empty() {
        out.push(Section::WorkHistory {
            entries: resume
                .experience()
                .iter()
                .map(|e| Experience {
                    role: e.role.clone(),
                    organization: e.organization.clone(),
                    period: e.period.label(),
                    image: e.image.as_deref().map(asset_url),
                    caption: e.caption.clone(),
                    highlights: e.highlights.clone(),
                })
                .collect(),
        });
    }

    if !resume.projects().is_empty() {
        out.push(Section::Projects {
            entries: resume
                .projects()
                .iter()
                .map(|p| Project {
                    title: p.title.clone(),
                    period: p.period.label(),
                    image: p.image.as_deref().map(asset_url),
                    caption: p.caption.clone(),
                    details: p.details.clone(),
                })
                .collect(),
        });
    }

    out
}

/// Output-relative URL for a copied asset.
fn asset_url(path: &Path) -> String {
    format!("assets/{}", file_name(path))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("asset")
        .to_string()
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;
    use vitae_model::Resume;

    use super::*;
    use crate::testutil::{load_fixture, write_fixture_with, FIXTURE};

    #[test]
    fn fixed_section_order() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let kinds: Vec<_> = sections(&resume)
            .iter()
            .map(|s| match s {
                Section::Hero { .. } => "hero",
                Section::Education { .. } => "education",
                Section::Qualifications { .. } => "qualifications",
                Section::Skills { .. } => "skills",
                Section::Publications { .. } => "publications",
                Section::WorkHistory { .. } => "work_history",
                Section::Projects { .. } => "projects",
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "hero",
                "education",
                "qualifications",
                "skills",
                "publications",
                "work_history",
                "projects"
            ]
        );
    }

    #[test]
    fn entries_keep_model_order() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());
        let all = sections(&resume);

        let education = all
            .iter()
            .find_map(|s| match s {
                Section::Education { entries } => Some(entries),
                _ => None,
            })
            .unwrap();
        let degrees: Vec<_> = education.iter().map(|e| e.degree.as_str()).collect();
        assert_eq!(
            degrees,
            vec!["MS in Data Science", "BS in Biomedical Engineering"]
        );

        let projects = all
            .iter()
            .find_map(|s| match s {
                Section::Projects { entries } => Some(entries),
                _ => None,
            })
            .unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Synthetic Image Detection", "Edge Detection"]);
    }

    #[test]
    fn social_links_keep_insertion_order() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let Section::Hero { social, .. } = &sections(&resume)[0] else {
            panic!("first section must be the hero");
        };

        let platforms: Vec<_> = social.iter().map(|l| l.platform.as_str()).collect();
        assert_eq!(platforms, vec!["LinkedIn", "GitHub"]);
    }

    #[test]
    fn hero_carries_download_metadata() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let Section::Hero {
            resume_href,
            resume_filename,
            mime_type,
            ..
        } = &sections(&resume)[0]
        else {
            panic!("first section must be the hero");
        };

        assert_eq!(resume_href, "assets/CV.pdf");
        assert_eq!(resume_filename, "CV.pdf");
        assert_eq!(mime_type, RESUME_MIME_TYPE);
    }

    #[test]
    fn empty_lists_omit_their_section() {
        let temp = tempdir().unwrap();
        let trimmed = FIXTURE
            .replace("[[publications]]", "[[unused]]")
            .replace("url = \"https://doi.org/10.1117/12.2654685\"", "");
        let content_path = write_fixture_with(temp.path(), &trimmed);

        let resume = Resume::load(&content_path).unwrap();
        let all = sections(&resume);

        assert!(!all
            .iter()
            .any(|s| matches!(s, Section::Publications { .. })));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let json = serde_json::to_value(sections(&resume)).unwrap();
        assert_eq!(json[0]["kind"], "hero");
        assert_eq!(json[1]["kind"], "education");
    }
}
