use crate::digest::domain::ExportDocument;
use crate::shared::Result;

/// DocumentRenderer port for serializing an export document.
///
/// Abstracts the physical format (plain text, Markdown, ...) behind one
/// interface so the export use case stays renderer-agnostic.
pub trait DocumentRenderer {
    /// Renders the document to its serialized form.
    fn render(&self, document: &ExportDocument) -> Result<String>;

    /// File extension (without the dot) for documents in this format.
    fn file_extension(&self) -> &'static str;
}
