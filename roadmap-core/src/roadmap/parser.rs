//! ROADMAP.md parser
//!
//! Lines are classified one at a time while a [`ParseState`] carries the
//! current section and subsection forward. Only unchecked items (`- [ ] `)
//! under one of the [`ROADMAP_SECTIONS`](super::ROADMAP_SECTIONS) become tasks.

use tracing::{debug, info};

use super::rules::is_roadmap_section;
use super::task::{Task, TaskDraft};

/// Shortest task text (in characters) worth an issue
pub const MIN_TASK_LEN: usize = 10;

/// Most detail lines kept for one task
pub const MAX_DETAILS: usize = 5;

/// Link used in issue bodies to point back at the roadmap
pub const DEFAULT_ROADMAP_LINK: &str = "../ROADMAP.md";

const SECTION_PREFIX: &str = "## ";
const SUBSECTION_PREFIX: &str = "### ";
const OPEN_TASK_PREFIX: &str = "- [ ] ";

/// Decorative symbols removed from section headers
const SECTION_DECORATIONS: [char; 9] = [
    '🎯', '🚀', '🏗', '\u{FE0F}', '🔧', '📊', '🚦', '📞', '💡',
];

/// Roadmap parser
#[derive(Debug, Clone)]
pub struct RoadmapParser {
    roadmap_link: String,
}

impl Default for RoadmapParser {
    fn default() -> Self {
        Self::new(DEFAULT_ROADMAP_LINK)
    }
}

impl RoadmapParser {
    /// Create a parser whose issue bodies link back to `roadmap_link`
    pub fn new(roadmap_link: impl Into<String>) -> Self {
        Self {
            roadmap_link: roadmap_link.into(),
        }
    }

    /// Extract tasks in document order
    pub fn parse(&self, content: &str) -> Vec<Task> {
        let tasks = content
            .lines()
            .fold(ParseState::default(), |mut state, line| {
                state.advance(line, &self.roadmap_link);
                state
            })
            .finish(&self.roadmap_link);

        info!(count = tasks.len(), "Extracted tasks from roadmap");
        tasks
    }
}

/// Parse a roadmap with the default back-link
pub fn parse_roadmap(content: &str) -> Vec<Task> {
    RoadmapParser::default().parse(content)
}

/// Fold state threaded through the lines of a document
#[derive(Debug, Default)]
struct ParseState {
    section: String,
    subsection: String,
    /// Last task seen, still open for detail lines
    draft: Option<TaskDraft>,
    tasks: Vec<Task>,
}

impl ParseState {
    fn advance(&mut self, raw: &str, roadmap_link: &str) {
        if let Some(draft) = self.draft.as_mut() {
            if let Some(detail) = detail_text(raw) {
                if draft.details.len() < MAX_DETAILS {
                    draft.details.push(detail.to_string());
                }
                return;
            }
        }
        self.close_draft(roadmap_link);

        let line = raw.trim();

        if let Some(rest) = line.strip_prefix(SECTION_PREFIX) {
            self.section = clean_section(rest);
            return;
        }

        if let Some(rest) = line.strip_prefix(SUBSECTION_PREFIX) {
            self.subsection = clean_subsection(rest);
            return;
        }

        if let Some(rest) = line.strip_prefix(OPEN_TASK_PREFIX) {
            let text = rest.replace("**", "").trim().to_string();

            if !is_roadmap_section(&self.section) {
                debug!(section = %self.section, task = %text, "Skipping task outside roadmap sections");
                return;
            }
            if text.chars().count() < MIN_TASK_LEN {
                debug!(task = %text, "Skipping task shorter than minimum length");
                return;
            }

            self.draft = Some(TaskDraft::new(text, &self.section, &self.subsection));
        }
    }

    fn close_draft(&mut self, roadmap_link: &str) {
        if let Some(draft) = self.draft.take() {
            self.tasks.push(draft.finish(roadmap_link));
        }
    }

    fn finish(mut self, roadmap_link: &str) -> Vec<Task> {
        self.close_draft(roadmap_link);
        self.tasks
    }
}

fn clean_section(header: &str) -> String {
    header
        .chars()
        .filter(|c| !SECTION_DECORATIONS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn clean_subsection(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '.')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Text of an indented `- item` line, if `raw` is one
///
/// Indented checklist items (`- [ ]`, `- [x]`) are not details.
fn detail_text(raw: &str) -> Option<&str> {
    if !raw.starts_with(char::is_whitespace) {
        return None;
    }
    let item = raw.trim().strip_prefix("- ")?;
    if item.starts_with('[') {
        return None;
    }
    let item = item.trim();
    (!item.is_empty()).then_some(item)
}
