//! SUMMARY.md rendering

use roadmap_core::{Priority, Topic};

use crate::IssueEntry;

/// File name of the summary report
pub const SUMMARY_FILE: &str = "SUMMARY.md";

/// Issue counts per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn from_entries(entries: &[IssueEntry<'_>]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut counts, entry| {
                counts.total += 1;
                match entry.task.priority {
                    Priority::High => counts.high += 1,
                    Priority::Medium => counts.medium += 1,
                    Priority::Low => counts.low += 1,
                }
                counts
            })
    }

    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

fn heading(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// Topics in order of first appearance
fn topics_in_order(entries: &[IssueEntry<'_>]) -> Vec<Topic> {
    let mut topics = Vec::new();
    for entry in entries {
        if !topics.contains(&entry.task.topic) {
            topics.push(entry.task.topic);
        }
    }
    topics
}

fn push_links<'a, 'b: 'a>(
    content: &mut String,
    entries: impl Iterator<Item = &'a IssueEntry<'b>>,
) {
    for (j, entry) in entries.enumerate() {
        content.push_str(&format!(
            "{}. [{}]({})\n",
            j + 1,
            entry.task.title,
            entry.filename
        ));
    }
    content.push('\n');
}

/// Render the summary: counts, links grouped by priority and by topic
pub fn render_summary(entries: &[IssueEntry<'_>], script_file: &str) -> String {
    let counts = PriorityCounts::from_entries(entries);
    let mut content = String::new();

    content.push_str("# GitHub Issues Summary\n\n");
    content.push_str("## Übersicht\n\n");
    content.push_str(&format!("- **Gesamt Issues:** {}\n", counts.total));
    content.push_str(&format!("- **Hohe Priorität:** {}\n", counts.high));
    content.push_str(&format!("- **Mittlere Priorität:** {}\n", counts.medium));
    content.push_str(&format!("- **Niedrige Priorität:** {}\n\n", counts.low));

    for priority in Priority::ALL {
        if counts.get(priority) == 0 {
            continue;
        }
        content.push_str(&format!("## {} Priority Issues\n\n", heading(priority)));
        push_links(
            &mut content,
            entries.iter().filter(|e| e.task.priority == priority),
        );
    }

    let topics = topics_in_order(entries);
    if !topics.is_empty() {
        content.push_str("## Issues nach Kategorie\n\n");
        for topic in topics {
            let count = entries.iter().filter(|e| e.task.topic == topic).count();
            content.push_str(&format!("### {} ({})\n\n", topic, count));
            push_links(&mut content, entries.iter().filter(|e| e.task.topic == topic));
        }
    }

    content.push_str("## GitHub CLI Commands\n\n");
    content.push_str(&format!(
        "Siehe `{}` für automatisierte Issue-Erstellung.\n",
        script_file
    ));

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue_entries;
    use roadmap_core::parse_roadmap;

    const ROADMAP: &str = "\
## Langfristige Ziele
- [ ] Plattformübergreifende Synchronisation
## Kurzzeitige Ziele
- [ ] Implement caching layer for API responses
## Technische Schulden
- [ ] Code-Qualität: Warnings beheben
## Kurzzeitige Ziele: Deployment
- [ ] App Store Release vorbereiten
";

    #[test]
    fn test_counts_sum_to_total() {
        let tasks = parse_roadmap(ROADMAP);
        let entries = issue_entries(&tasks);
        let counts = PriorityCounts::from_entries(&entries);

        assert_eq!(counts.total, 4);
        assert_eq!(counts.high, 2);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.high + counts.medium + counts.low, counts.total);
    }

    #[test]
    fn test_summary_groups_by_priority() {
        let tasks = parse_roadmap(ROADMAP);
        let entries = issue_entries(&tasks);
        let summary = render_summary(&entries, "create-issues.sh");

        assert!(summary.contains("- **Gesamt Issues:** 4\n"));
        assert!(summary.contains("- **Hohe Priorität:** 2\n"));

        let high = summary.find("## High Priority Issues").unwrap();
        let medium = summary.find("## Medium Priority Issues").unwrap();
        let low = summary.find("## Low Priority Issues").unwrap();
        assert!(high < medium && medium < low);

        assert!(summary.contains(
            "## High Priority Issues\n\n1. [Implement caching layer for API responses](issue-002-implement-caching-layer-for-api-responses.md)\n2. [App Store Release vorbereiten](issue-004-app-store-release-vorbereiten.md)\n\n"
        ));
    }

    #[test]
    fn test_summary_groups_by_topic() {
        let tasks = parse_roadmap(ROADMAP);
        let entries = issue_entries(&tasks);
        let summary = render_summary(&entries, "create-issues.sh");

        let enhancement = summary.find("### enhancement (3)").unwrap();
        let deployment = summary.find("### deployment (1)").unwrap();
        assert!(enhancement < deployment);
        // topics come from the section, not the task text
        assert!(!summary.contains("### code-quality"));
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let tasks = parse_roadmap("## Langfristige Ziele\n- [ ] Only a low priority task\n");
        let entries = issue_entries(&tasks);
        let summary = render_summary(&entries, "create-issues.sh");

        assert!(!summary.contains("## High Priority Issues"));
        assert!(summary.contains("## Low Priority Issues"));
        assert!(summary.ends_with("Siehe `create-issues.sh` für automatisierte Issue-Erstellung.\n"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = render_summary(&[], "create-issues.sh");
        assert!(summary.contains("- **Gesamt Issues:** 0\n"));
        assert!(!summary.contains("Priority Issues"));
        assert!(!summary.contains("## Issues nach Kategorie"));
    }
}
