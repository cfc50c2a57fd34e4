use crate::shared::Result;
use std::path::PathBuf;

/// DocumentSink port for persisting exported documents.
///
/// Abstracts where finished documents end up (local filesystem in the CLI;
/// in-memory in tests).
pub trait DocumentSink {
    /// Writes the document contents under the given filename.
    ///
    /// # Returns
    /// The full path of the written document.
    fn write(&self, filename: &str, contents: &[u8]) -> Result<PathBuf>;
}
