//! Static page builder.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use vitae_model::Resume;

use crate::assets::AssetPipeline;
use crate::sections::{sections, Section};
use crate::templates::{PageContext, TemplateEngine};

/// Configuration for building the resume page.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Stylesheet to ship with the page; the built-in theme when `None`
    pub stylesheet: Option<PathBuf>,

    /// Minify the shipped CSS
    pub minify: bool,

    /// Browser tab title; defaults to `"Digital CV | <name>"`
    pub title: Option<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            stylesheet: None,
            minify: true,
            title: None,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of sections rendered
    pub sections: usize,

    /// Number of assets written
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Asset failed to render: {path}: {message}")]
    Asset { path: PathBuf, message: String },

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Static page builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the page: render sections to HTML, write the section manifest,
    /// and run the asset pipeline. The page either builds fully or fails
    /// with the offending path named; no section is silently dropped.
    pub async fn build(&self, resume: &Resume) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let sections = sections(resume);

        let title = self
            .config
            .title
            .clone()
            .unwrap_or_else(|| format!("Digital CV | {}", resume.profile().name));

        let context = PageContext {
            title,
            styles: vec!["assets/main.css".to_string()],
            sections: sections.clone(),
        };

        let html = self
            .templates
            .render_page(&context)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        fs::write(self.config.output_dir.join("index.html"), html)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let assets = self.write_assets(resume, &assets_dir)?;
        self.write_manifest(&sections)?;

        let duration = start.elapsed();

        tracing::info!(
            "Rendered {} sections and {} assets in {}ms",
            sections.len(),
            assets,
            duration.as_millis()
        );

        Ok(BuildResult {
            sections: sections.len(),
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Write the stylesheet, every image, and the resume document.
    fn write_assets(&self, resume: &Resume, assets_dir: &Path) -> Result<usize, BuildError> {
        let mut written: HashSet<String> = HashSet::new();
        let mut count = 0;

        // Stylesheet
        let css = match &self.config.stylesheet {
            Some(path) => fs::read_to_string(path).map_err(|e| BuildError::Read {
                path: path.clone(),
                message: e.to_string(),
            })?,
            None => AssetPipeline::default_css(),
        };

        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).map_err(|message| BuildError::Asset {
                path: self
                    .config
                    .stylesheet
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("<builtin stylesheet>")),
                message,
            })?
        } else {
            css
        };

        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::Write(e.to_string()))?;
        count += 1;

        // Resume document, byte for byte
        let profile = resume.profile();
        count += self.copy_document(&profile.resume, assets_dir, &mut written)?;

        // Images
        count += self.copy_image(&profile.photo, assets_dir, &mut written)?;
        for entry in resume.experience() {
            if let Some(image) = &entry.image {
                count += self.copy_image(image, assets_dir, &mut written)?;
            }
        }
        for project in resume.projects() {
            if let Some(image) = &project.image {
                count += self.copy_image(image, assets_dir, &mut written)?;
            }
        }

        Ok(count)
    }

    /// Copy an image into the assets directory, verifying it is a
    /// displayable raster format first.
    fn copy_image(
        &self,
        source: &Path,
        assets_dir: &Path,
        written: &mut HashSet<String>,
    ) -> Result<usize, BuildError> {
        let bytes = fs::read(source).map_err(|e| BuildError::Asset {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let format = AssetPipeline::sniff_image(&bytes).ok_or_else(|| BuildError::Asset {
            path: source.to_path_buf(),
            message: "not a recognized raster image (PNG, JPEG, GIF, WebP)".to_string(),
        })?;

        let name = file_name(source);
        if !written.insert(name.clone()) {
            tracing::warn!("Duplicate asset name {}, keeping the later copy", name);
        }

        fs::write(assets_dir.join(&name), &bytes)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        tracing::debug!("Copied {} image {}", format, name);
        Ok(1)
    }

    /// Copy the resume document verbatim, preserving its file name.
    fn copy_document(
        &self,
        source: &Path,
        assets_dir: &Path,
        written: &mut HashSet<String>,
    ) -> Result<usize, BuildError> {
        let bytes = fs::read(source).map_err(|e| BuildError::Asset {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;

        let name = file_name(source);
        written.insert(name.clone());

        fs::write(assets_dir.join(&name), &bytes)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        tracing::debug!("Copied document {} ({} bytes)", name, bytes.len());
        Ok(1)
    }

    /// Write the machine-readable section manifest next to the page.
    fn write_manifest(&self, sections: &[Section]) -> Result<(), BuildError> {
        let json = serde_json::to_string_pretty(sections)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(self.config.output_dir.join("sections.json"), json)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("asset")
        .to_string()
}
