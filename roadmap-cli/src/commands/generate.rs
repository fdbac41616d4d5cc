//! Issue file generation command

use clap::Args;
use roadmap_core::Config;
use roadmap_github::{generated_at, render_artifacts, OutputWriter, ScriptOptions, SOURCE_DATE_EPOCH};

use super::{load_tasks, loaded_message};

/// Generate issue files, SUMMARY.md and create-issues.sh
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Render everything but write nothing
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        println!("🚀 Starte GitHub Issue Generierung...");

        let tasks = load_tasks(config)?;
        println!("{}", loaded_message(config, &tasks));

        let source_date_epoch = std::env::var(SOURCE_DATE_EPOCH).ok();
        let stamp = generated_at(source_date_epoch.as_deref(), &config.input.roadmap);
        let options = ScriptOptions::from_config(&config.script, stamp);
        let artifacts = render_artifacts(&tasks, &options);

        if self.dry_run {
            let dir = config.output.dir.display();
            println!();
            println!("Would write to {}:", dir);
            for issue in &artifacts.issues {
                println!("  📝 {}", issue.filename);
                if verbose {
                    if let Some(title) = issue.content.lines().next() {
                        println!("       └─ {}", title.trim_start_matches("# "));
                    }
                }
            }
            println!("  📊 {}", artifacts.summary.filename);
            println!("  🔧 {}", artifacts.script.filename);
            println!();
            println!("Run without --dry-run to write files.");
            return Ok(());
        }

        let writer = OutputWriter::new(&config.output.dir);
        let report = writer.write_all(&artifacts)?;

        println!("📝 {} Issue-Dateien generiert", artifacts.issues.len());
        if verbose {
            for file in &report.files {
                println!("     └─ {}", file.display());
            }
        }
        println!(
            "📊 Summary-Report erstellt: {}",
            writer.dir().join(&artifacts.summary.filename).display()
        );
        println!(
            "🔧 Batch-Script erstellt: {}",
            writer.dir().join(&artifacts.script.filename).display()
        );
        println!();
        println!("✅ {} Issues erfolgreich generiert!", report.counts.total);
        println!("📁 Ausgabeverzeichnis: {}", report.output_dir.display());

        Ok(())
    }
}
