//! Data records rendered by the portfolio page.
//!
//! [`ProjectRecord`] is supplied by the external data feed and never mutated
//! by the view-state core. Timeline entries are static content.

use serde::{Deserialize, Serialize};

/// A single portfolio project as supplied by the data feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Free-form category tag ("web", "app", "ml", ...). Matched exactly
    /// and case-sensitively by the filter.
    pub category: String,
    /// Short glyph shown in place of a thumbnail.
    pub image: String,
    pub tags: Vec<String>,
    pub github_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Display label for a project category. Unknown categories fall back to
/// the raw tag.
pub fn category_label(category: &str) -> &str {
    match category {
        "web" => "Web Development",
        "app" => "Mobile App",
        "ml" => "Machine Learning",
        other => other,
    }
}

/// One entry in the experience or education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub summary: &'static str,
}

/// Work experience, newest first.
pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2024 - Present",
        title: "Full Stack Developer Intern",
        place: "TechStart Labs",
        summary: "Building internal dashboards and REST APIs; shipped a \
                  reporting pipeline that cut weekly manual work in half.",
    },
    TimelineEntry {
        period: "2023 - 2024",
        title: "Open Source Contributor",
        place: "Various projects",
        summary: "Regular contributions to developer tooling: bug fixes, \
                  docs, and a handful of merged features.",
    },
    TimelineEntry {
        period: "2022 - 2023",
        title: "Freelance Web Developer",
        place: "Self-employed",
        summary: "Designed and delivered small-business websites end to \
                  end, from mockups to deployment.",
    },
];

/// Education, newest first.
pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2022 - 2026",
        title: "B.Tech, Computer Science",
        place: "State Technical University",
        summary: "Coursework in algorithms, operating systems, databases, \
                  and machine learning. Member of the programming club.",
    },
    TimelineEntry {
        period: "2020 - 2022",
        title: "Senior Secondary",
        place: "City Public School",
        summary: "Science stream with computer science elective.",
    },
];
