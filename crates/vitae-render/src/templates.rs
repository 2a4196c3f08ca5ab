//! Template engine for rendering the resume page.

use minijinja::{context, Environment};

use crate::sections::Section;

/// Context for rendering the page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Browser tab title
    pub title: String,
    /// Paths to CSS stylesheets to include
    pub styles: Vec<String>,
    /// Page sections, already in display order
    pub sections: Vec<Section>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("page.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add page template");

        Self { env }
    }

    /// Render the resume page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("page.html")?;

        tmpl.render(context! {
            title => &context.title,
            styles => &context.styles,
            sections => &context.sections,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  {% for style in styles %}<link rel="stylesheet" href="{{ style }}">
  {% endfor %}
</head>
<body>
  <main class="page">
    {% block content %}{% endblock %}
  </main>
</body>
</html>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% for section in sections %}
{% if section.kind == "hero" %}
<section class="hero">
  <img class="photo" src="{{ section.photo }}" alt="{{ section.name }}" width="330">
  <div class="intro">
    <h1>{{ section.name }}</h1>
    <p class="tagline">{{ section.tagline }}</p>
    <a class="download" href="{{ section.resume_href }}" download="{{ section.resume_filename }}" type="{{ section.mime_type }}">&#128196; Download Resume</a>
    <p class="email">&#128235; <a href="mailto:{{ section.email }}">{{ section.email }}</a></p>
    <ul class="social">
    {% for link in section.social %}
      <li><a class="social-link" href="{{ link.url }}">&#127760; {{ link.platform }}</a></li>
    {% endfor %}
    </ul>
  </div>
</section>
{% elif section.kind == "education" %}
<section class="education">
  <h2>Education</h2>
  {% for entry in section.entries %}
  <article class="entry">
    <h3>{{ entry.degree }} | {{ entry.institution }}</h3>
    <p class="period">{{ entry.period }}</p>
    <ul>
    {% for item in entry.highlights %}
      <li>{{ item }}</li>
    {% endfor %}
    </ul>
  </article>
  {% endfor %}
</section>
{% elif section.kind == "qualifications" %}
<section class="qualifications">
  <h2>Experience &amp; Qualifications</h2>
  <ul>
  {% for item in section.items %}
    <li>&#10004; {{ item }}</li>
  {% endfor %}
  </ul>
</section>
{% elif section.kind == "skills" %}
<section class="skills">
  <h2>Hard Skills</h2>
  {% for group in section.groups %}
  <p class="skill-group"><strong>{{ group.category }}:</strong> {{ group.items | join(", ") }}</p>
  {% endfor %}
</section>
{% elif section.kind == "publications" %}
<section class="publications">
  <h2>Publications</h2>
  <ul>
  {% for entry in section.entries %}
    <li>{{ entry.title }}: <a href="{{ entry.url }}">Read Here</a></li>
  {% endfor %}
  </ul>
</section>
{% elif section.kind == "work_history" %}
<section class="work-history">
  <h2>Work History</h2>
  {% for entry in section.entries %}
  <article class="entry">
    <h3>&#128679; {{ entry.role }} | {{ entry.organization }}</h3>
    <p class="period">{{ entry.period }}</p>
    {% if entry.image %}
    <figure>
      <img src="{{ entry.image }}" alt="{{ entry.caption or entry.organization }}" width="800">
      {% if entry.caption %}<figcaption>{{ entry.caption }}</figcaption>{% endif %}
    </figure>
    {% endif %}
    <ul>
    {% for item in entry.highlights %}
      <li>{{ item }}</li>
    {% endfor %}
    </ul>
  </article>
  {% endfor %}
</section>
{% elif section.kind == "projects" %}
<section class="projects">
  <h2>Projects &amp; Accomplishments</h2>
  {% for entry in section.entries %}
  <article class="project">
    <h3>&#128300; {{ entry.title }}</h3>
    <p class="period">{{ entry.period }}</p>
    {% if entry.image %}
    <figure>
      <img src="{{ entry.image }}" alt="{{ entry.caption or entry.title }}" width="800">
      {% if entry.caption %}<figcaption>{{ entry.caption }}</figcaption>{% endif %}
    </figure>
    {% endif %}
    <ul>
    {% for item in entry.details %}
      <li>{{ item }}</li>
    {% endfor %}
    </ul>
  </article>
  {% endfor %}
</section>
{% endif %}
{% endfor %}
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::sections::{sections, Project, Section};
    use crate::testutil::load_fixture;

    fn fixture_context(sections: Vec<Section>) -> PageContext {
        PageContext {
            title: "Digital CV | Jordan Reyes".to_string(),
            styles: vec!["assets/main.css".to_string()],
            sections,
        }
    }

    #[test]
    fn renders_hero_with_download_affordance() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let html = TemplateEngine::new()
            .render_page(&fixture_context(sections(&resume)))
            .unwrap();

        assert!(html.contains("<title>Digital CV | Jordan Reyes</title>"));
        assert!(html.contains("<h1>Jordan Reyes</h1>"));
        assert!(html.contains(r#"href="assets/CV.pdf" download="CV.pdf" type="application/octet-stream""#));
    }

    #[test]
    fn renders_one_link_per_social_entry_in_order() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let html = TemplateEngine::new()
            .render_page(&fixture_context(sections(&resume)))
            .unwrap();

        assert_eq!(html.matches(r#"class="social-link""#).count(), 2);
        let linkedin = html.find("LinkedIn").unwrap();
        let github = html.find("GitHub").unwrap();
        assert!(linkedin < github);
    }

    #[test]
    fn renders_sections_in_descriptor_order() {
        let temp = tempdir().unwrap();
        let resume = load_fixture(temp.path());

        let html = TemplateEngine::new()
            .render_page(&fixture_context(sections(&resume)))
            .unwrap();

        let positions: Vec<_> = [
            r#"class="hero""#,
            r#"class="education""#,
            r#"class="qualifications""#,
            r#"class="skills""#,
            r#"class="publications""#,
            r#"class="work-history""#,
            r#"class="projects""#,
        ]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn renders_one_block_per_project() {
        let entries: Vec<Project> = (1..=6)
            .map(|i| Project {
                title: format!("Project {i}"),
                period: "2023 - Present".to_string(),
                image: Some(format!("assets/project{i}.png")),
                caption: None,
                details: vec![format!("Detail for project {i}")],
            })
            .collect();

        let html = TemplateEngine::new()
            .render_page(&fixture_context(vec![Section::Projects { entries }]))
            .unwrap();

        assert_eq!(html.matches(r#"<article class="project">"#).count(), 6);
        for i in 1..=6 {
            assert!(html.contains(&format!("assets/project{i}.png")));
            assert!(html.contains(&format!("Detail for project {i}")));
        }
    }

    #[test]
    fn escapes_html_in_content() {
        let html = TemplateEngine::new()
            .render_page(&fixture_context(vec![Section::Qualifications {
                items: vec!["<script>alert(1)</script>".to_string()],
            }]))
            .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
