//! Roadmap GitHub - GitHub issue artifacts for roadmap-issues
//!
//! This crate renders roadmap tasks into issue markdown files, a summary
//! report, and a `gh` batch script, and writes them to disk.

mod entry;
mod error;
mod issue;
mod script;
mod summary;
mod timestamp;
mod writer;

pub use entry::{issue_entries, issue_filename, IssueEntry};
pub use error::{Error, Result};
pub use issue::render_issue;
pub use script::{render_script, shell_escape, ScriptOptions, SCRIPT_FILE};
pub use summary::{render_summary, PriorityCounts, SUMMARY_FILE};
pub use timestamp::{generated_at, SOURCE_DATE_EPOCH};
pub use writer::{GenerationReport, OutputWriter};

use roadmap_core::Task;
use tracing::info;

/// A rendered file, not yet written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub filename: String,
    pub content: String,
}

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub issues: Vec<RenderedFile>,
    pub summary: RenderedFile,
    pub script: RenderedFile,
    pub counts: PriorityCounts,
}

/// Render issue files, summary and batch script for `tasks`
pub fn render_artifacts(tasks: &[Task], options: &ScriptOptions) -> Artifacts {
    let entries = issue_entries(tasks);

    let issues = entries
        .iter()
        .map(|entry| RenderedFile {
            filename: entry.filename.clone(),
            content: render_issue(entry.task),
        })
        .collect();

    let summary = RenderedFile {
        filename: SUMMARY_FILE.to_string(),
        content: render_summary(&entries, SCRIPT_FILE),
    };

    let script = RenderedFile {
        filename: SCRIPT_FILE.to_string(),
        content: render_script(&entries, options),
    };

    let counts = PriorityCounts::from_entries(&entries);
    info!(
        total = counts.total,
        high = counts.high,
        medium = counts.medium,
        low = counts.low,
        "Rendered issue artifacts"
    );

    Artifacts {
        issues,
        summary,
        script,
        counts,
    }
}
