//! Section classification rules
//!
//! Which sections produce issues, and how a section maps to a priority and a
//! topic label. Rules are ordered tables: the first rule with a keyword found
//! in the section name (case-insensitive) wins.

use super::task::{Priority, Topic};

/// Sections whose open checklist items become issues
pub const ROADMAP_SECTIONS: [&str; 5] = [
    "Kurzzeitige Ziele",
    "Mittelfristige Ziele",
    "Langfristige Ziele",
    "Technische Schulden",
    "Nächste Schritte",
];

/// Label carried by every generated issue
pub const ROADMAP_LABEL: &str = "roadmap";

const PRIORITY_RULES: &[(&[&str], Priority)] = &[
    (&["Kurzzeitige Ziele"], Priority::High),
    (&["Mittelfristige Ziele", "Technische Schulden"], Priority::Medium),
    (&["Langfristige Ziele"], Priority::Low),
];

const DEFAULT_PRIORITY: Priority = Priority::Medium;

const TOPIC_RULES: &[(&[&str], Topic)] = &[
    (&["code", "qualität", "quality"], Topic::CodeQuality),
    (&["dokumentation", "documentation"], Topic::Documentation),
    (&["deployment"], Topic::Deployment),
];

const DEFAULT_TOPIC: Topic = Topic::Enhancement;

fn contains_any(section: &str, keywords: &[&str]) -> bool {
    let section = section.to_lowercase();
    keywords
        .iter()
        .any(|k| section.contains(&k.to_lowercase()))
}

fn first_match<T: Copy>(section: &str, rules: &[(&[&str], T)], default: T) -> T {
    rules
        .iter()
        .find(|(keywords, _)| contains_any(section, keywords))
        .map(|(_, value)| *value)
        .unwrap_or(default)
}

/// Whether tasks under `section` should be turned into issues
pub fn is_roadmap_section(section: &str) -> bool {
    contains_any(section, &ROADMAP_SECTIONS)
}

pub fn priority_for(section: &str) -> Priority {
    first_match(section, PRIORITY_RULES, DEFAULT_PRIORITY)
}

pub fn topic_for(section: &str) -> Topic {
    first_match(section, TOPIC_RULES, DEFAULT_TOPIC)
}

/// Issue labels in their fixed order: roadmap, topic, priority
pub fn labels(topic: Topic, priority: Priority) -> Vec<String> {
    vec![
        ROADMAP_LABEL.to_string(),
        topic.label().to_string(),
        priority.label(),
    ]
}
