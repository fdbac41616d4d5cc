//! Roadmap parsing
//!
//! This module turns a ROADMAP.md checklist into [`Task`] records: parsing,
//! priority and topic rules, and title/slug helpers.

mod parser;
mod rules;
mod task;
mod text;

pub use parser::{parse_roadmap, RoadmapParser, DEFAULT_ROADMAP_LINK, MAX_DETAILS, MIN_TASK_LEN};
pub use rules::{
    is_roadmap_section, labels, priority_for, topic_for, ROADMAP_LABEL, ROADMAP_SECTIONS,
};
pub use task::{Priority, Task, Topic};
pub use text::{clean_title, slugify, strip_bold, MAX_SLUG_LEN, MAX_TITLE_LEN};
