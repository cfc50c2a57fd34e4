use crate::digest::domain::{ExportDocument, DOCUMENT_TITLE};
use crate::ports::outbound::DocumentRenderer;
use crate::shared::Result;

/// Plain-text document renderer.
///
/// Section titles are underlined with dashes; bodies are carried through
/// verbatim below them.
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for TextRenderer {
    fn render(&self, document: &ExportDocument) -> Result<String> {
        let mut output = String::new();

        output.push_str(DOCUMENT_TITLE);
        output.push('\n');
        output.push_str(&"=".repeat(DOCUMENT_TITLE.len()));
        output.push_str("\n\n");
        output.push_str(&format!(
            "Generated on: {}\n\n",
            document.generated_at.format("%B %d, %Y at %H:%M")
        ));

        for section in &document.sections {
            output.push_str(&section.title);
            output.push('\n');
            output.push_str(&"-".repeat(section.title.len()));
            output.push('\n');
            output.push_str(&section.body);
            output.push_str("\n\n");
        }

        Ok(output)
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }
}
