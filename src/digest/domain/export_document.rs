use chrono::{DateTime, Local};

/// Fixed top-level title of exported documents.
pub const DOCUMENT_TITLE: &str = "Dynatrace Release Notes Summary";

/// One (title, body) record in an export-ready document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    pub title: String,
    pub body: String,
}

impl DocumentSection {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Renderer-agnostic representation of an exportable digest: an ordered
/// sequence of sections plus the generation timestamp shown in the
/// document header. Physical rendering (text, Markdown, PDF) is left to
/// the renderer adapters.
#[derive(Debug, Clone)]
pub struct ExportDocument {
    pub sections: Vec<DocumentSection>,
    pub generated_at: DateTime<Local>,
}

impl ExportDocument {
    pub fn new(sections: Vec<DocumentSection>) -> Self {
        Self {
            sections,
            generated_at: Local::now(),
        }
    }
}
