//! Issue file rendering

use roadmap_core::Task;

/// Render the markdown file for one issue
pub fn render_issue(task: &Task) -> String {
    let mut content = String::new();

    content.push_str(&format!("# {}\n\n", task.title));
    content.push_str(&format!("**Labels:** {}\n", task.labels.join(", ")));
    content.push_str(&format!("**Priority:** {}\n\n", task.priority));
    content.push_str("---\n\n");
    content.push_str(&task.body);

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::parse_roadmap;

    #[test]
    fn test_render_issue() {
        let tasks = parse_roadmap(
            "## Kurzzeitige Ziele\n### 1. Performance\n- [ ] Implement caching layer for API responses\n",
        );
        let content = render_issue(&tasks[0]);

        assert!(content.starts_with(
            "# Implement caching layer for API responses\n\n**Labels:** roadmap, enhancement, priority-high\n**Priority:** high\n\n---\n\n## Beschreibung\n\n"
        ));
        assert!(content.contains("**Bereich:** Performance\n"));
        assert!(content.ends_with("Siehe auch: [Vollständige Roadmap](../ROADMAP.md)"));
        assert!(!content.ends_with('\n'));
    }
}
