//! Asset pipeline for the stylesheet and binary page assets.

use std::fmt;

/// Raster formats the image sniff recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::WebP => "WebP",
        };
        f.write_str(name)
    }
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The built-in stylesheet, used when the project configures none.
    pub fn default_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }

    /// Identify an image by its signature bytes.
    ///
    /// `None` means the bytes are not a raster format the page can display,
    /// which the builder treats as a render failure rather than skipping the
    /// image.
    pub fn sniff_image(bytes: &[u8]) -> Option<ImageFormat> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if bytes.starts_with(b"\xff\xd8\xff") {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::WebP)
        } else {
            None
        }
    }
}

const DEFAULT_CSS: &str = r#"/* vitae default theme */

:root {
  --content-max-width: 860px;
  --accent: #1a73e8;
  --text: #202124;
  --muted: #5f6368;
  --border: #dadce0;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  color: var(--text);
  line-height: 1.6;
  padding: 2rem 1rem;
}

.page {
  max-width: var(--content-max-width);
  margin: 0 auto;
}

/* Hero */
.hero {
  display: flex;
  gap: 2rem;
  align-items: flex-start;
  margin-bottom: 2rem;
}

.hero .photo {
  border-radius: 0.5rem;
  flex-shrink: 0;
  max-width: 330px;
  height: auto;
}

.hero h1 {
  font-size: 2.25rem;
  margin-bottom: 0.5rem;
}

.tagline {
  color: var(--muted);
  margin-bottom: 1rem;
}

.download {
  display: inline-block;
  background: var(--accent);
  color: #fff;
  padding: 0.5rem 1.25rem;
  border-radius: 0.375rem;
  text-decoration: none;
  font-weight: 600;
  margin-bottom: 0.75rem;
}

.download:hover {
  filter: brightness(1.1);
}

.email a {
  color: var(--text);
}

.social {
  list-style: none;
  display: flex;
  gap: 1.5rem;
  margin-top: 0.5rem;
}

.social-link {
  color: var(--accent);
  text-decoration: none;
}

.social-link:hover {
  text-decoration: underline;
}

/* Sections */
section {
  margin-bottom: 2rem;
}

section h2 {
  font-size: 1.5rem;
  border-bottom: 1px solid var(--border);
  padding-bottom: 0.5rem;
  margin-bottom: 1rem;
}

section h3 {
  font-size: 1.125rem;
  margin-bottom: 0.25rem;
}

.entry,
.project {
  margin-bottom: 1.5rem;
}

.period {
  color: var(--muted);
  font-size: 0.9rem;
  margin-bottom: 0.5rem;
}

section ul {
  padding-left: 1.5rem;
}

section li {
  margin-bottom: 0.375rem;
}

figure {
  margin: 0.75rem 0;
}

figure img {
  max-width: 100%;
  height: auto;
  border-radius: 0.375rem;
  border: 1px solid var(--border);
}

figcaption {
  color: var(--muted);
  font-size: 0.85rem;
  margin-top: 0.25rem;
}

.skill-group {
  margin-bottom: 0.5rem;
}

@media (max-width: 700px) {
  .hero {
    flex-direction: column;
  }
}
"#;
