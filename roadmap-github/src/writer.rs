//! Writes generated artifacts to the output directory

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{Artifacts, Error, PriorityCounts, Result};

/// What a generation run produced
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub counts: PriorityCounts,
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
}

/// Writes issue files, the summary and the batch script into one directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write everything in order: issues, summary, script
    ///
    /// Existing files with the same names are overwritten; other files in the
    /// directory are left alone. The first failure stops the run.
    pub fn write_all(&self, artifacts: &Artifacts) -> Result<GenerationReport> {
        std::fs::create_dir_all(&self.dir).map_err(|source| Error::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        debug!(dir = %self.dir.display(), "Output directory ready");

        let mut files = Vec::with_capacity(artifacts.issues.len() + 2);

        for issue in &artifacts.issues {
            files.push(self.write_file(&issue.filename, &issue.content)?);
        }
        info!(count = artifacts.issues.len(), "Wrote issue files");

        files.push(self.write_file(&artifacts.summary.filename, &artifacts.summary.content)?);

        let script = self.write_file(&artifacts.script.filename, &artifacts.script.content)?;
        make_executable(&script)?;
        files.push(script);

        Ok(GenerationReport {
            output_dir: self.dir.clone(),
            counts: artifacts.counts,
            files,
        })
    }

    fn write_file(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        std::fs::write(&path, content).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(path)
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).map_err(|source| {
        Error::Permissions {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_artifacts, ScriptOptions, SCRIPT_FILE, SUMMARY_FILE};
    use chrono::{TimeZone, Utc};
    use roadmap_core::{parse_roadmap, ScriptConfig};
    use tempfile::TempDir;

    const ROADMAP: &str = "\
## 🎯 Kurzzeitige Ziele
### 1.1 Performance
- [ ] Implement caching layer for API responses
- [ ] Fix ä ö ü handling in **parser**
## Mittelfristige Ziele
- [ ] Dokumentation der Architektur erweitern
## Sonstiges
- [ ] Ignored because the section is not listed
";

    fn options() -> ScriptOptions {
        ScriptOptions::from_config(
            &ScriptConfig::default(),
            Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
        )
    }

    fn generate(dir: &Path) -> GenerationReport {
        let tasks = parse_roadmap(ROADMAP);
        let artifacts = render_artifacts(&tasks, &options());
        OutputWriter::new(dir).write_all(&artifacts).unwrap()
    }

    fn read_all(dir: &Path) -> Vec<(String, String)> {
        let mut files: Vec<(String, String)> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| {
                let path = e.unwrap().path();
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                (name, std::fs::read_to_string(&path).unwrap())
            })
            .collect();
        files.sort();
        files
    }

    #[test]
    fn test_writes_all_files() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("generated-issues");
        let report = generate(&out);

        assert_eq!(report.counts.total, 3);
        assert_eq!(report.files.len(), 5);

        let names: Vec<String> = read_all(&out).into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                SUMMARY_FILE.to_string(),
                SCRIPT_FILE.to_string(),
                "issue-001-implement-caching-layer-for-api-responses.md".to_string(),
                "issue-002-fix-ae-oe-ue-handling-in-parser.md".to_string(),
                "issue-003-dokumentation-der-architektur-erweitern.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_issue_file_count_matches_tasks() {
        let temp = TempDir::new().unwrap();
        let report = generate(temp.path());

        let issue_files = read_all(temp.path())
            .into_iter()
            .filter(|(name, _)| name.starts_with("issue-"))
            .count();
        assert_eq!(issue_files, report.counts.total);
    }

    #[cfg(unix)]
    #[test]
    fn test_script_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        generate(temp.path());

        let mode = std::fs::metadata(temp.path().join(SCRIPT_FILE))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        generate(temp.path());
        let first = read_all(temp.path());

        generate(temp.path());
        let second = read_all(temp.path());

        assert_eq!(first, second);
    }

    #[test]
    fn test_stale_files_are_kept() {
        let temp = TempDir::new().unwrap();
        let stale = temp.path().join("issue-099-old-task.md");
        std::fs::write(&stale, "old").unwrap();

        generate(temp.path());
        assert!(stale.exists());
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("generated-issues");
        std::fs::write(&blocker, "not a directory").unwrap();

        let tasks = parse_roadmap(ROADMAP);
        let artifacts = render_artifacts(&tasks, &options());
        let err = OutputWriter::new(&blocker).write_all(&artifacts).unwrap_err();
        assert!(matches!(err, Error::CreateDir { .. }));
    }

    #[test]
    fn test_unwritable_file_reports_its_path() {
        let temp = TempDir::new().unwrap();
        // a directory where the summary should go blocks the write
        let blocker = temp.path().join(SUMMARY_FILE);
        std::fs::create_dir(&blocker).unwrap();

        let tasks = parse_roadmap(ROADMAP);
        let artifacts = render_artifacts(&tasks, &options());
        let err = OutputWriter::new(temp.path())
            .write_all(&artifacts)
            .unwrap_err();

        match err {
            Error::Write { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
        // issue files come first and are already on disk
        assert!(temp
            .path()
            .join("issue-001-implement-caching-layer-for-api-responses.md")
            .exists());
        assert!(!temp.path().join(SCRIPT_FILE).exists());
    }
}
