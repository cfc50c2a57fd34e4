use crate::ports::outbound::DocumentSink;
use crate::shared::{DigestError, Result};
use std::fs;
use std::path::PathBuf;

/// FileSystemWriter adapter for persisting exported documents to disk.
///
/// Documents land inside the configured directory; the filename is chosen
/// by the export use case.
pub struct FileSystemWriter {
    directory: PathBuf,
}

impl FileSystemWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl DocumentSink for FileSystemWriter {
    fn write(&self, filename: &str, contents: &[u8]) -> Result<PathBuf> {
        let path = self.directory.join(filename);

        fs::write(&path, contents).map_err(|e| DigestError::DocumentWriteError {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file_in_directory() {
        let dir = TempDir::new().unwrap();
        let writer = FileSystemWriter::new(dir.path());

        let path = writer.write("digest.txt", b"contents").unwrap();

        assert_eq!(path, dir.path().join("digest.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "contents");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let writer = FileSystemWriter::new("/nonexistent/release-digest-test-dir");
        let result = writer.write("digest.txt", b"contents");

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to write document"));
    }
}
