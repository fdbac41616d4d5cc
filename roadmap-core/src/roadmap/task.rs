//! Task records extracted from a roadmap

use std::fmt;

use serde::Serialize;

use super::rules;
use super::text::clean_title;

/// Issue priority, derived from the roadmap section a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, most urgent first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Label attached to issues of this priority (e.g. `priority-high`)
    pub fn label(&self) -> String {
        format!("priority-{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Topic label chosen from keywords in the section name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    #[serde(rename = "code-quality")]
    CodeQuality,
    #[serde(rename = "documentation")]
    Documentation,
    #[serde(rename = "deployment")]
    Deployment,
    #[serde(rename = "enhancement")]
    Enhancement,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::CodeQuality => "code-quality",
            Topic::Documentation => "documentation",
            Topic::Deployment => "deployment",
            Topic::Enhancement => "enhancement",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One open roadmap item, ready to become an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Issue title (bold removed, at most 80 characters)
    pub title: String,
    /// Task text as written in the roadmap, without markers
    pub text: String,
    /// Rendered issue body
    pub body: String,
    /// `roadmap`, topic label, priority label
    pub labels: Vec<String>,
    pub topic: Topic,
    pub priority: Priority,
    /// Enclosing level-2 header
    pub section: String,
    /// Enclosing level-3 header, empty if none seen yet
    pub subsection: String,
    /// Indented sub-items listed directly under the task
    pub details: Vec<String>,
}

/// A task whose detail lines are still being collected
#[derive(Debug, Clone)]
pub(crate) struct TaskDraft {
    pub text: String,
    pub section: String,
    pub subsection: String,
    pub details: Vec<String>,
}

impl TaskDraft {
    pub fn new(text: String, section: &str, subsection: &str) -> Self {
        Self {
            text,
            section: section.to_string(),
            subsection: subsection.to_string(),
            details: Vec::new(),
        }
    }

    /// Freeze the draft into a task; `roadmap_link` is where the body points back to
    pub fn finish(self, roadmap_link: &str) -> Task {
        let priority = rules::priority_for(&self.section);
        let topic = rules::topic_for(&self.section);
        let body = build_body(
            &self.text,
            &self.section,
            &self.subsection,
            &self.details,
            roadmap_link,
        );

        Task {
            title: clean_title(&self.text),
            labels: rules::labels(topic, priority),
            body,
            topic,
            priority,
            text: self.text,
            section: self.section,
            subsection: self.subsection,
            details: self.details,
        }
    }
}

fn build_body(
    text: &str,
    section: &str,
    subsection: &str,
    details: &[String],
    roadmap_link: &str,
) -> String {
    let mut body = String::new();

    body.push_str("## Beschreibung\n\n");
    body.push_str(text);
    body.push_str("\n\n");

    if !subsection.is_empty() {
        body.push_str(&format!("**Bereich:** {}\n", subsection));
    }
    body.push_str(&format!("**Roadmap-Kategorie:** {}\n\n", section));

    if !details.is_empty() {
        body.push_str("## Details\n\n");
        for detail in details {
            body.push_str(&format!("- {}\n", detail));
        }
        body.push('\n');
    }

    body.push_str("## Akzeptanzkriterien\n\n");
    body.push_str("- [ ] Feature/Verbesserung ist implementiert\n");
    body.push_str("- [ ] Tests sind vorhanden (falls anwendbar)\n");
    body.push_str("- [ ] Dokumentation ist aktualisiert\n");
    body.push_str("- [ ] Code Review ist durchgeführt\n\n");

    body.push_str("## Zusätzliche Informationen\n\n");
    body.push_str(&format!(
        "Diese Issue wurde automatisch aus der [Roadmap]({}) generiert.\n\n",
        roadmap_link
    ));
    body.push_str(&format!("Siehe auch: [Vollständige Roadmap]({})", roadmap_link));

    body
}
