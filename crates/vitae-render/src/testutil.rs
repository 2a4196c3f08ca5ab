//! Shared test fixtures.

use std::fs;
use std::path::{Path, PathBuf};

use vitae_model::Resume;

// Minimal PNG signature followed by filler, enough for the format sniff.
pub(crate) const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfiller";

pub(crate) const FIXTURE: &str = r#"
qualifications = ["2+ years of experience", "Strong foundation in statistics"]

[profile]
name = "Jordan Reyes"
tagline = "Engineer bridging biology and computation."
email = "jordan@example.com"
photo = "assets/profile-pic.png"
resume = "assets/CV.pdf"

[[profile.social]]
platform = "LinkedIn"
url = "https://www.linkedin.com/in/jordan-reyes"

[[profile.social]]
platform = "GitHub"
url = "https://github.com/jordanreyes"

[[education]]
institution = "Worcester Polytechnic Institute"
degree = "MS in Data Science"
start = "2023"
end = "present"
highlights = ["Specializing in machine learning"]

[[education]]
institution = "Worcester Polytechnic Institute"
degree = "BS in Biomedical Engineering"
start = "2018"
end = "2023"
highlights = ["Graduated with Honors"]

[[skills]]
category = "Programming"
items = ["Python", "Rust", "SQL"]

[[publications]]
title = "A simulation study"
url = "https://doi.org/10.1117/12.2654685"

[[experience]]
role = "Research Associate"
organization = "FURI Lab"
start = "08/2020"
end = "05/2023"
image = "assets/experience1.png"
caption = "FURI Lab"
highlights = ["Implemented a U-net-based model", "Directed data collection"]

[[projects]]
title = "Synthetic Image Detection"
start = "11/2023"
end = "present"
image = "assets/project1.png"
details = ["Trained a GAN for synthetic faces"]

[[projects]]
title = "Edge Detection"
start = "01/2024"
end = "present"
details = ["DNN approach to edge detection"]
"#;

/// Write the fixture content file plus its assets; returns the content path.
pub(crate) fn write_fixture(dir: &Path) -> PathBuf {
    write_fixture_with(dir, FIXTURE)
}

/// Same, with custom content.
pub(crate) fn write_fixture_with(dir: &Path, content: &str) -> PathBuf {
    fs::create_dir_all(dir.join("assets")).unwrap();
    let content_path = dir.join("resume.toml");
    fs::write(&content_path, content).unwrap();
    for image in ["profile-pic.png", "experience1.png", "project1.png"] {
        fs::write(dir.join("assets").join(image), PNG_BYTES).unwrap();
    }
    fs::write(dir.join("assets/CV.pdf"), b"%PDF-1.4 fake resume body").unwrap();
    content_path
}

pub(crate) fn load_fixture(dir: &Path) -> Resume {
    Resume::load(&write_fixture(dir)).unwrap()
}
