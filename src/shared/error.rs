use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the release digest client.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("No release note components selected\n\n💡 Hint: pass --component with one or more of: {available}")]
    EmptySelection { available: String },

    #[error("Unknown component id: {id}\n\n💡 Hint: valid component ids are: {available}")]
    UnknownComponent { id: String, available: String },

    #[error("Nothing to export: {reason}\n\n💡 Hint: fetch a successful digest before exporting")]
    ExportPrecondition { reason: String },

    #[error("The summarization service rejected the export request: {message}")]
    ExportRejected { message: String },

    #[error("Failed to write document: {path}\nDetails: {details}\n\n💡 Hint: please verify that the directory exists and you have write permissions")]
    DocumentWriteError { path: PathBuf, details: String },

    #[error("Invalid endpoint URL: {url}\nDetails: {details}\n\n💡 Hint: endpoints must be absolute http(s) URLs")]
    InvalidEndpoint { url: String, details: String },
}
