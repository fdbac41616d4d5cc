//! Roadmap document loading

use std::path::Path;

use tracing::info;

use crate::{Error, Result};

/// Read the full text of a roadmap document.
///
/// Fails with [`Error::DocumentNotFound`] when `path` is not an existing file.
/// Read and decoding failures are returned as [`Error::Io`] untouched.
pub fn load_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::DocumentNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    info!(path = %path.display(), bytes = content.len(), "Loaded roadmap document");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_existing_document() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "## Kurzzeitige Ziele").unwrap();

        let content = load_document(file.path()).unwrap();
        assert_eq!(content, "## Kurzzeitige Ziele\n");
    }

    #[test]
    fn test_missing_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ROADMAP.md");

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(p) if p == path));
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let dir = TempDir::new().unwrap();
        let err = load_document(dir.path()).unwrap_err();
        assert!(matches!(err, Error::DocumentNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8_surfaces_as_io() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = load_document(file.path()).unwrap_err();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
            other => panic!("unexpected error: {other}"),
        }
    }
}
