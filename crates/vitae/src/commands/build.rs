//! Static page build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vitae_model::Resume;
use vitae_render::{BuildConfig, SiteBuilder};

use crate::config::load_config;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    minify: Option<bool>,
    open_page: bool,
) -> Result<()> {
    tracing::info!("Building resume page...");

    let file_config = load_config(config_path)?;

    // Load and validate the model before any rendering starts.
    let resume = Resume::load(Path::new(&file_config.site.content))
        .context("Content validation failed")?;

    let config = BuildConfig {
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.site.output)),
        stylesheet: file_config.site.stylesheet.map(PathBuf::from),
        minify: minify.unwrap_or(file_config.build.minify),
        title: file_config.site.title,
    };

    let result = SiteBuilder::new(config).build(&resume).await?;

    tracing::info!(
        "Built {} sections with {} assets in {}ms",
        result.sections,
        result.assets,
        result.duration_ms
    );

    let index = result.output_dir.join("index.html");
    tracing::info!("Output: {}", index.display());

    if open_page {
        let _ = open::that(&index);
    }

    Ok(())
}
