//! CLI command implementations

pub mod generate;
pub mod list;

pub use generate::GenerateArgs;
pub use list::ListArgs;

use roadmap_core::{load_document, Config, RoadmapParser, Task};

/// Load and parse the configured roadmap
///
/// Prints nothing, so callers decide what goes to stdout.
pub(crate) fn load_tasks(config: &Config) -> anyhow::Result<Vec<Task>> {
    let content = load_document(&config.input.roadmap)?;
    Ok(RoadmapParser::new(config.roadmap_link()).parse(&content))
}

/// Progress lines shown after the roadmap was read
pub(crate) fn loaded_message(config: &Config, tasks: &[Task]) -> String {
    format!(
        "📖 Roadmap geladen: {}\n📋 {} Tasks aus Roadmap extrahiert",
        config.input.roadmap.display(),
        tasks.len()
    )
}
