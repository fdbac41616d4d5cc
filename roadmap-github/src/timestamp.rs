//! Generation timestamp for the batch script header

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::warn;

/// Environment variable used for reproducible output
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Pick the timestamp written into generated files
///
/// `source_date_epoch` (Unix seconds) wins, then the roadmap's modification
/// time, then the current time. Unchanged input thus gives unchanged output.
pub fn generated_at(source_date_epoch: Option<&str>, roadmap: &Path) -> DateTime<Utc> {
    if let Some(raw) = source_date_epoch {
        let parsed = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        match parsed {
            Some(ts) => return ts,
            None => warn!(value = raw, "Ignoring invalid {}", SOURCE_DATE_EPOCH),
        }
    }

    std::fs::metadata(roadmap)
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_source_date_epoch_wins() {
        let ts = generated_at(Some("1700000000"), Path::new("/does/not/exist"));
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_falls_back_to_mtime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ROADMAP.md");
        std::fs::write(&path, "# Roadmap").unwrap();

        let expected: DateTime<Utc> = std::fs::metadata(&path)
            .unwrap()
            .modified()
            .unwrap()
            .into();
        assert_eq!(generated_at(None, &path), expected);
        assert_eq!(generated_at(Some("not-a-number"), &path), expected);
    }

    #[test]
    fn test_falls_back_to_now() {
        let before = Utc::now();
        let ts = generated_at(None, Path::new("/does/not/exist"));
        assert!(ts >= before);
    }
}
