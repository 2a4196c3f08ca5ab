//! Plain-text resume export.
//!
//! A second renderer over the same section descriptors as the HTML page,
//! which is the point: the content model never changes to support a new
//! output format.

use std::fmt::Write;

use vitae_model::Resume;

use crate::sections::{sections, Section};

/// Render the resume as plain text, sections and entries in page order.
pub fn render_text(resume: &Resume) -> String {
    let mut out = String::new();

    for section in sections(resume) {
        if let Some(heading) = section.heading() {
            let _ = writeln!(out, "{}", heading.to_uppercase());
            let _ = writeln!(out, "{}", "-".repeat(heading.len()));
        }

        match section {
            Section::Hero {
                name,
                tagline,
                email,
                social,
                ..
            } => {
                let _ = writeln!(out, "{}", name.to_uppercase());
                let _ = writeln!(out, "{}", "=".repeat(name.len()));
                let _ = writeln!(out, "{}", tagline.trim());
                let _ = writeln!(out);
                let _ = writeln!(out, "Email: {}", email);
                for link in social {
                    let _ = writeln!(out, "{}: {}", link.platform, link.url);
                }
            }
            Section::Education { entries } => {
                for entry in entries {
                    let _ = writeln!(out, "{} | {}", entry.degree, entry.institution);
                    let _ = writeln!(out, "{}", entry.period);
                    for item in entry.highlights {
                        let _ = writeln!(out, "  - {}", item);
                    }
                    let _ = writeln!(out);
                }
            }
            Section::Qualifications { items } => {
                for item in items {
                    let _ = writeln!(out, "  - {}", item);
                }
            }
            Section::Skills { groups } => {
                for group in groups {
                    let _ = writeln!(out, "{}: {}", group.category, group.items.join(", "));
                }
            }
            Section::Publications { entries } => {
                for entry in entries {
                    let _ = writeln!(out, "  - {} <{}>", entry.title, entry.url);
                }
            }
            Section::WorkHistory { entries } => {
                for entry in entries {
                    let _ = writeln!(out, "{} | {}", entry.role, entry.organization);
                    let _ = writeln!(out, "{}", entry.period);
                    for item in entry.highlights {
                        let _ = writeln!(out, "  - {}", item);
                    }
                    let _ = writeln!(out);
                }
            }
            Section::Projects { entries } => {
                for entry in entries {
                    let _ = writeln!(out, "{}", entry.title);
                    let _ = writeln!(out, "{}", entry.period);
                    for item in entry.details {
                        let _ = writeln!(out, "  - {}", item);
                    }
                    let _ = writeln!(out);
                }
            }
        }

        let _ = writeln!(out);
    }

    out
}
