//! Content record types.
//!
//! Immutable value records describing everything that appears on the page.
//! They are created once by [`crate::Resume::load`] and never mutated; every
//! list keeps the order the author wrote it in.

use std::path::PathBuf;

use serde::Deserialize;

use crate::daterange::DateRange;

/// The page owner: identity, bio, contacts, and the two hero assets.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// Full display name
    pub name: String,

    /// Short bio shown next to the photo
    pub tagline: String,

    /// Contact email
    pub email: String,

    /// Social links in display order
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Profile photo asset
    pub photo: PathBuf,

    /// Downloadable resume document asset
    pub resume: PathBuf,
}

/// One social link, e.g. platform `"LinkedIn"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// One education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct EducationEntry {
    pub institution: String,

    /// Degree line, e.g. `"MS in Data Science"`
    pub degree: String,

    #[serde(flatten)]
    pub period: DateRange,

    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One work-history entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,

    #[serde(flatten)]
    pub period: DateRange,

    /// Optional illustrative image asset
    pub image: Option<PathBuf>,

    /// Caption shown under the image
    pub caption: Option<String>,

    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One publication: title plus external link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Publication {
    pub title: String,
    pub url: String,
}

/// One showcased project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,

    #[serde(flatten)]
    pub period: DateRange,

    /// Optional illustrative image asset
    pub image: Option<PathBuf>,

    /// Caption shown under the image
    pub caption: Option<String>,

    #[serde(default)]
    pub details: Vec<String>,
}

/// A named group of skills, e.g. category `"Programming"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}
