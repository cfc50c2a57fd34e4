use crate::digest::domain::{ExportDocument, DOCUMENT_TITLE};
use crate::ports::outbound::DocumentRenderer;
use crate::shared::Result;

/// Markdown document renderer.
///
/// Summary bodies may already contain section markers produced by the
/// normalizer; they are emitted verbatim under a level-2 heading per
/// summary.
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn render(&self, document: &ExportDocument) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", DOCUMENT_TITLE));
        output.push_str(&format!(
            "_Generated on: {}_\n\n",
            document.generated_at.format("%B %d, %Y at %H:%M")
        ));

        for section in &document.sections {
            output.push_str(&format!("## {}\n\n", section.title));
            output.push_str(&section.body);
            output.push_str("\n\n");
        }

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}
