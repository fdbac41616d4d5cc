//! Roadmap Core - parsing and task extraction for roadmap-issues
//!
//! This crate loads a ROADMAP.md, extracts the open checklist items from the
//! roadmap sections, and derives titles, labels and priorities for them.

pub mod config;
pub mod error;
pub mod loader;
pub mod roadmap;

pub use config::{Config, InputConfig, OutputConfig, ScriptConfig};
pub use error::{Error, Result};
pub use loader::load_document;
pub use roadmap::{
    clean_title, parse_roadmap, slugify, Priority, RoadmapParser, Task, Topic, ROADMAP_SECTIONS,
};
