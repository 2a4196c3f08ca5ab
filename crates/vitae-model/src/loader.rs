//! Content loading and validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::content::{
    EducationEntry, ExperienceEntry, Profile, Project, Publication, SkillGroup,
};
use crate::daterange::DateRange;

/// Errors that can occur while loading the content model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Asset not found for {field}: {path}")]
    AssetNotFound { field: String, path: PathBuf },
}

/// The loaded, validated content model.
///
/// Constructed once by [`Resume::load`]; read-only afterwards. Accessors
/// return entries in authored order.
#[derive(Debug, Clone, Deserialize)]
pub struct Resume {
    profile: Profile,

    #[serde(default)]
    education: Vec<EducationEntry>,

    /// Summary bullets for the "Experience & Qualifications" section
    #[serde(default)]
    qualifications: Vec<String>,

    #[serde(default)]
    skills: Vec<SkillGroup>,

    #[serde(default)]
    publications: Vec<Publication>,

    /// Work-history entries
    #[serde(default)]
    experience: Vec<ExperienceEntry>,

    #[serde(default)]
    projects: Vec<Project>,
}

impl Resume {
    /// Load and validate the content file.
    ///
    /// Asset paths are resolved relative to the content file's directory.
    /// Fails if any date range or URL is malformed, or if any referenced
    /// image or document does not exist on disk.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut resume: Resume = toml::from_str(&content).map_err(|e| ModelError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        resume.validate()?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        resume.resolve_assets(base)?;

        Ok(resume)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn education(&self) -> &[EducationEntry] {
        &self.education
    }

    pub fn qualifications(&self) -> &[String] {
        &self.qualifications
    }

    pub fn skills(&self) -> &[SkillGroup] {
        &self.skills
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    pub fn experience(&self) -> &[ExperienceEntry] {
        &self.experience
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Check every date range and URL, naming the offending field on failure.
    fn validate(&self) -> Result<(), ModelError> {
        check_url("profile.email", &format!("mailto:{}", self.profile.email))?;

        for (i, link) in self.profile.social.iter().enumerate() {
            check_http_url(&format!("profile.social[{}].url ({})", i, link.platform), &link.url)?;
        }

        for (i, entry) in self.education.iter().enumerate() {
            check_range(&format!("education[{}] ({})", i, entry.institution), &entry.period)?;
        }

        for (i, publication) in self.publications.iter().enumerate() {
            check_http_url(&format!("publications[{}].url", i), &publication.url)?;
        }

        for (i, entry) in self.experience.iter().enumerate() {
            check_range(&format!("experience[{}] ({})", i, entry.role), &entry.period)?;
        }

        for (i, project) in self.projects.iter().enumerate() {
            check_range(&format!("projects[{}] ({})", i, project.title), &project.period)?;
        }

        Ok(())
    }

    /// Resolve every asset path against `base` and require it to exist.
    fn resolve_assets(&mut self, base: &Path) -> Result<(), ModelError> {
        self.profile.photo = resolve("profile.photo", base, &self.profile.photo)?;
        self.profile.resume = resolve("profile.resume", base, &self.profile.resume)?;

        for (i, entry) in self.experience.iter_mut().enumerate() {
            if let Some(image) = entry.image.take() {
                entry.image = Some(resolve(&format!("experience[{}].image", i), base, &image)?);
            }
        }

        for (i, project) in self.projects.iter_mut().enumerate() {
            if let Some(image) = project.image.take() {
                project.image = Some(resolve(&format!("projects[{}].image", i), base, &image)?);
            }
        }

        Ok(())
    }
}

fn check_range(field: &str, range: &DateRange) -> Result<(), ModelError> {
    range.check_ordered().map_err(|message| ModelError::Validation {
        field: field.to_string(),
        message,
    })
}

fn check_url(field: &str, value: &str) -> Result<(), ModelError> {
    Url::parse(value).map_err(|e| ModelError::Validation {
        field: field.to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

fn check_http_url(field: &str, value: &str) -> Result<(), ModelError> {
    let url = Url::parse(value).map_err(|e| ModelError::Validation {
        field: field.to_string(),
        message: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ModelError::Validation {
            field: field.to_string(),
            message: format!("expected an http(s) URL, got scheme \"{}\"", url.scheme()),
        });
    }

    Ok(())
}

fn resolve(field: &str, base: &Path, path: &Path) -> Result<PathBuf, ModelError> {
    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    if !resolved.is_file() {
        return Err(ModelError::AssetNotFound {
            field: field.to_string(),
            path: resolved,
        });
    }

    Ok(resolved)
}
