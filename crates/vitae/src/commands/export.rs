//! Plain-text export command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vitae_model::Resume;
use vitae_render::render_text;

use crate::config::load_config;

/// Run the export command.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let resume = Resume::load(Path::new(&file_config.site.content))
        .context("Content validation failed")?;

    let text = render_text(&resume);

    let output = output.unwrap_or_else(|| PathBuf::from("resume.txt"));
    fs::write(&output, text)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Exported {}", output.display());

    Ok(())
}
