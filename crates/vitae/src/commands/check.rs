//! Content validation command.

use std::path::Path;

use anyhow::{Context, Result};
use vitae_model::Resume;

use crate::config::load_config;

/// Run the check command: load and validate the content model without
/// rendering anything.
pub async fn run(config_path: &Path) -> Result<()> {
    let file_config = load_config(config_path)?;
    let content_path = Path::new(&file_config.site.content);

    let resume = Resume::load(content_path)
        .with_context(|| format!("{} failed validation", content_path.display()))?;

    tracing::info!("{} is valid", content_path.display());
    tracing::info!(
        "{} education, {} qualification, {} skill group, {} publication, {} experience, {} project entries",
        resume.education().len(),
        resume.qualifications().len(),
        resume.skills().len(),
        resume.publications().len(),
        resume.experience().len(),
        resume.projects().len()
    );

    Ok(())
}
