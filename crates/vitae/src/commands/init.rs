//! Initialize a resume site in a directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use vitae_render::AssetPipeline;

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing vitae...");

    // Create default config
    let config_path = Path::new("vitae.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write vitae.toml")?;
        tracing::info!("Created vitae.toml");
    }

    // Create starter content
    let content_path = Path::new("resume.toml");
    if !content_path.exists() || yes {
        fs::write(content_path, DEFAULT_CONTENT).context("Failed to write resume.toml")?;
        tracing::info!("Created resume.toml");
    }

    // Create stylesheet from the built-in theme
    let styles_dir = Path::new("styles");
    if !styles_dir.exists() {
        fs::create_dir_all(styles_dir).context("Failed to create styles directory")?;
    }
    let css_path = styles_dir.join("main.css");
    if !css_path.exists() || yes {
        fs::write(&css_path, AssetPipeline::default_css())
            .context("Failed to write styles/main.css")?;
        tracing::info!("Created styles/main.css");
    }

    // Create assets directory; the photo and resume document go here
    let assets_dir = Path::new("assets");
    if !assets_dir.exists() {
        fs::create_dir_all(assets_dir).context("Failed to create assets directory")?;
        tracing::info!("Created assets/");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Add assets/profile-pic.jpg and assets/CV.pdf, then run 'vitae check'.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Vitae Configuration

[site]
# Content file holding the resume model
content = "resume.toml"

# Stylesheet shipped with the page
stylesheet = "styles/main.css"

# Output directory for the built page
output = "dist"

[build]
# Enable CSS minification
minify = true
"#;

const DEFAULT_CONTENT: &str = r#"# Resume content. Every list renders in the order written here.
# Asset paths are relative to this file and must exist before a build.

qualifications = [
    "2+ years of hands-on engineering experience",
    "Strong foundation in statistics and machine learning",
    "Comfortable turning messy datasets into decisions",
]

[profile]
name = "Jordan Reyes"
tagline = "Engineer bridging biology and computation, currently pursuing a Master's in Data Science."
email = "jordan@example.com"
photo = "assets/profile-pic.jpg"
resume = "assets/CV.pdf"

[[profile.social]]
platform = "LinkedIn"
url = "https://www.linkedin.com/in/jordan-reyes"

[[education]]
institution = "Worcester Polytechnic Institute"
degree = "MS in Data Science"
start = "2023"
end = "present"
highlights = [
    "Specializing in machine learning and advanced statistical methods",
    "Coursework includes Data Mining and Big Data Analytics",
]

[[skills]]
category = "Programming"
items = ["Python", "SQL", "R", "Rust"]

[[skills]]
category = "Data Visualization"
items = ["PowerBI", "Plotly", "Tableau"]

[[experience]]
role = "Research Associate"
organization = "Instrumentation Lab"
start = "08/2020"
end = "05/2023"
highlights = [
    "Implemented an image-regression network to improve ultrasound image quality",
    "Directed data collection and analysis for imaging experiments",
]

[[projects]]
title = "Synthetic Image Detection"
start = "11/2023"
end = "present"
details = [
    "Trained a GAN for synthetic face generation and built a detection pipeline",
]
"#;
