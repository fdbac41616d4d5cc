//! roadmap-issues - turn ROADMAP.md checklists into GitHub issue files
//!
//! Reads the open items of a roadmap and writes one markdown file per issue,
//! a SUMMARY.md, and a `gh` batch script to create them.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use roadmap_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{GenerateArgs, ListArgs};

/// Generate GitHub issues from the open tasks in a roadmap
#[derive(Parser, Debug)]
#[command(name = "roadmap-issues")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ~/.config/roadmap-issues/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Roadmap document (overrides config and env)
    #[arg(long, global = true, env = "ROADMAP_FILE")]
    roadmap: Option<PathBuf>,

    /// Output directory (overrides config and env)
    #[arg(short, long, global = true, env = "ROADMAP_OUTPUT_DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Generate issue files, summary and batch script (default)
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// List tasks extracted from the roadmap
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load configuration with overrides
    let config = Config::load_with_overrides(
        cli.config.as_deref(),
        cli.roadmap.clone(),
        cli.output.clone(),
    )?;

    if cli.verbose {
        tracing::info!(
            roadmap = %config.input.roadmap.display(),
            output = %config.output.dir.display(),
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("roadmap-issues {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Generate(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::List(args)) => {
            args.execute(cli.verbose, &config)?;
        }
        Some(Commands::Config) => {
            println!("Roadmap Issues Configuration");
            println!("============================");
            println!();
            println!("Input:");
            println!("  roadmap: {}", config.input.roadmap.display());
            println!();
            println!("Output:");
            println!("  dir: {}", config.output.dir.display());
            println!();
            println!("Script:");
            println!("  assignee: {}", config.script.assignee);
            println!("  batch_size: {}", config.script.batch_size);
            println!("  pause_secs: {}", config.script.pause_secs);
            println!();
            let path = cli.config.clone().or_else(Config::default_config_path);
            if let Some(path) = path {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            GenerateArgs::default().execute(cli.verbose, &config)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "roadmap-issues",
            "--roadmap",
            "docs/ROADMAP.md",
            "-o",
            "out",
            "generate",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.roadmap, Some(PathBuf::from("docs/ROADMAP.md")));
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert!(matches!(cli.command, Some(Commands::Generate(ref a)) if a.dry_run));
    }

    #[test]
    fn test_no_subcommand_defaults_to_generate() {
        let cli = Cli::try_parse_from(["roadmap-issues"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_list_json_flag() {
        let cli = Cli::try_parse_from(["roadmap-issues", "ls", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List(ref a)) if a.json));
    }
}
