//! Task listing command

use std::fmt::Write;

use clap::Args;
use roadmap_core::{Config, Priority, Task};

use super::{load_tasks, loaded_message};

/// List the tasks that would become issues
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print tasks as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let tasks = load_tasks(config)?;

        if self.json {
            println!("{}", render_json(&tasks)?);
        } else {
            println!("{}", loaded_message(config, &tasks));
            print!("{}", render_text(&tasks, verbose));
        }

        Ok(())
    }
}

/// Tasks as a pretty JSON array, nothing else
fn render_json(tasks: &[Task]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Tasks grouped by priority, most urgent first
fn render_text(tasks: &[Task], verbose: bool) -> String {
    let mut out = String::new();

    for priority in Priority::ALL {
        let group: Vec<_> = tasks.iter().filter(|t| t.priority == priority).collect();
        if group.is_empty() {
            continue;
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", priority.label(), group.len());
        for task in group {
            let _ = writeln!(out, "  • {} [{}]", task.title, task.topic);
            if verbose {
                if task.subsection.is_empty() {
                    let _ = writeln!(out, "      {}", task.section);
                } else {
                    let _ = writeln!(out, "      {} / {}", task.section, task.subsection);
                }
                for detail in &task.details {
                    let _ = writeln!(out, "      └─ {}", detail);
                }
            }
        }
    }

    out
}
