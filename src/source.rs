//! Where design documents come from.
//!
//! The pipeline only ever sees a parsed [`DesignDocument`]; callers pick a
//! source. The CLI reads exported JSON from disk, library users can implement
//! [`DesignSource`] for anything else (an HTTP client, a test fixture, a
//! cache).

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{parse_document, DesignDocument};
use crate::error::{EdsmapError, Result};

/// A provider of design document snapshots.
pub trait DesignSource {
    /// Fetch and parse one document snapshot.
    fn fetch_document(&self) -> Result<DesignDocument>;

    /// Human-readable label for logs and error messages.
    fn describe(&self) -> String;
}

/// Reads a design document exported as JSON from the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DesignSource for FileSource {
    fn fetch_document(&self) -> Result<DesignDocument> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EdsmapError::Config(format!(
                    "design file not found: {}",
                    self.path.display()
                ))
            } else {
                EdsmapError::Io(e)
            }
        })?;
        log::debug!("read {} bytes from {}", raw.len(), self.path.display());
        parse_document(&raw)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_parses_valid_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name":"Doc","nodes":{{"0:1":{{"document":{{"id":"0:1","name":"Page","type":"CANVAS"}}}}}}}}"#
        )
        .unwrap();

        let doc = FileSource::new(file.path()).fetch_document().unwrap();
        assert_eq!(doc.name, "Doc");
    }

    #[test]
    fn missing_file_reports_config_error() {
        let err = FileSource::new("/nonexistent/design.json")
            .fetch_document()
            .unwrap_err();
        assert!(matches!(err, EdsmapError::Config(_)));
    }

    #[test]
    fn invalid_json_reports_serialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = FileSource::new(file.path()).fetch_document().unwrap_err();
        assert!(matches!(err, EdsmapError::Serialization(_)));
    }
}
