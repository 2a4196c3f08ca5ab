//! Validated content model for vitae resume sites.
//!
//! This crate holds every piece of page content as typed records, loaded once
//! from a TOML content file and validated before anything is rendered. It has
//! no knowledge of HTML or any other output format, so the same model can
//! drive the static page builder and the plain-text exporter unchanged.

pub mod content;
pub mod daterange;
pub mod loader;

pub use content::{
    EducationEntry, ExperienceEntry, Profile, Project, Publication, SkillGroup, SocialLink,
};
pub use daterange::{DateRange, RangeEnd, YearMonth};
pub use loader::{ModelError, Resume};
