//! Static page renderer for vitae resume sites.
//!
//! Consumes the content model from `vitae-model` and produces outputs from it:
//! the static HTML page with its assets, and a plain-text export. The model is
//! first mapped to an ordered list of section descriptors ([`sections`]), which
//! both renderers and headless tests consume.

pub mod assets;
pub mod builder;
pub mod sections;
pub mod templates;
pub mod text;

#[cfg(test)]
pub(crate) mod testutil;

pub use assets::{AssetPipeline, ImageFormat};
pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use sections::{sections, Section, RESUME_MIME_TYPE};
pub use text::render_text;
