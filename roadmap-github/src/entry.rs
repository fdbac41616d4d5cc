//! Numbering and filenames for generated issues

use roadmap_core::{slugify, Task};

/// A task paired with its issue number and file name
///
/// Computed once so the summary and the batch script link to exactly the
/// files that were written.
#[derive(Debug, Clone)]
pub struct IssueEntry<'a> {
    /// 1-based position in the roadmap
    pub number: usize,
    pub filename: String,
    pub task: &'a Task,
}

/// `issue-NNN-<slug>.md`
pub fn issue_filename(number: usize, title: &str) -> String {
    format!("issue-{:03}-{}.md", number, slugify(title))
}

/// Number tasks in roadmap order
pub fn issue_entries(tasks: &[Task]) -> Vec<IssueEntry<'_>> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| IssueEntry {
            number: i + 1,
            filename: issue_filename(i + 1, &task.title),
            task,
        })
        .collect()
}
