//! `gh` batch script rendering

use chrono::{DateTime, SecondsFormat, Utc};
use roadmap_core::ScriptConfig;

use crate::IssueEntry;

/// File name of the batch script
pub const SCRIPT_FILE: &str = "create-issues.sh";

/// Options for the batch script
#[derive(Debug, Clone)]
pub struct ScriptOptions {
    /// Passed to `--assignee`
    pub assignee: String,
    /// Pause after every `batch_size` issues
    pub batch_size: usize,
    pub pause_secs: u64,
    /// Written into the header comment
    pub generated_at: DateTime<Utc>,
}

impl ScriptOptions {
    pub fn from_config(config: &ScriptConfig, generated_at: DateTime<Utc>) -> Self {
        Self {
            assignee: config.assignee.clone(),
            batch_size: config.batch_size,
            pause_secs: config.pause_secs,
            generated_at,
        }
    }
}

/// Escape text for use inside a double-quoted shell string
pub fn shell_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Render the script that creates every issue with `gh issue create`
///
/// A failing `gh` call is reported and the script moves on to the next issue.
pub fn render_script(entries: &[IssueEntry<'_>], options: &ScriptOptions) -> String {
    let total = entries.len();
    let assignee = shell_escape(&options.assignee);
    let mut script = String::new();

    script.push_str("#!/bin/bash\n\n");
    script.push_str("# GitHub Issues Auto-Creation Script\n");
    script.push_str(&format!(
        "# Generiert: {}\n\n",
        options
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    script.push_str("set -e\n\n");
    script.push_str("cd \"$(dirname \"$0\")\"\n\n");
    script.push_str("echo \"🚀 Erstelle GitHub Issues aus Roadmap...\"\n\n");

    for entry in entries {
        let title = shell_escape(&entry.task.title);
        let labels = entry.task.labels.join("\",\"");

        script.push_str(&format!(
            "echo \"Creating issue {}/{}: {}\"\n",
            entry.number, total, title
        ));
        script.push_str("gh issue create \\\n");
        script.push_str(&format!("  --title \"{}\" \\\n", title));
        script.push_str(&format!("  --body-file \"{}\" \\\n", entry.filename));
        script.push_str(&format!("  --label \"{}\" \\\n", labels));
        script.push_str(&format!(
            "  --assignee \"{}\" || echo \"Failed to create issue: {}\"\n\n",
            assignee, title
        ));

        if entry.number % options.batch_size.max(1) == 0 {
            script.push_str("echo \"⏸️  Kurze Pause für Rate Limiting...\"\n");
            script.push_str(&format!("sleep {}\n\n", options.pause_secs));
        }
    }

    script.push_str("echo \"✅ Issue-Erstellung abgeschlossen!\"\n");
    script.push_str("echo \"📊 Überprüfe die erstellten Issues: gh issue list\"\n");

    script
}
