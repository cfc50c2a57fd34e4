use crate::digest::domain::{DocumentSection, ExportDocument, ReleaseSummary};
use crate::shared::{DigestError, Result};

/// Fixed title of the legacy combined document when no version is known.
const GENERIC_COMBINED_TITLE: &str = "Latest Release News";

/// Turns a successful `Ready` state into an export-ready document.
///
/// Export is only valid over a fully successful digest: an empty sequence
/// or one containing a synthetic Error entry is rejected before any
/// rendering or network call happens. Info entries are silently skipped —
/// they are presentation-only and never exported. Bodies are carried
/// through verbatim; the assembler never re-normalizes text.
pub struct ExportAssembler;

impl ExportAssembler {
    /// Checks the export preconditions without building a document.
    pub fn validate(summaries: &[ReleaseSummary]) -> Result<()> {
        if summaries.is_empty() {
            return Err(DigestError::ExportPrecondition {
                reason: "the digest is empty".to_string(),
            }
            .into());
        }
        if summaries.iter().any(ReleaseSummary::is_error) {
            return Err(DigestError::ExportPrecondition {
                reason: "the digest contains an error entry".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The summaries that actually make it into an exported document:
    /// non-synthetic entries with a non-empty body.
    pub fn exportable(summaries: &[ReleaseSummary]) -> Vec<&ReleaseSummary> {
        summaries
            .iter()
            .filter(|summary| !summary.is_synthetic() && !summary.body.trim().is_empty())
            .collect()
    }

    /// Assembles one document section per exportable summary.
    pub fn assemble(summaries: &[ReleaseSummary]) -> Result<ExportDocument> {
        Self::validate(summaries)?;

        let sections: Vec<DocumentSection> = Self::exportable(summaries)
            .into_iter()
            .map(|summary| DocumentSection::new(summary.display_title(), summary.body.clone()))
            .collect();

        if sections.is_empty() {
            return Err(DigestError::ExportPrecondition {
                reason: "no exportable summaries are available".to_string(),
            }
            .into());
        }

        Ok(ExportDocument::new(sections))
    }

    /// Legacy combined mode: a single document built from one summary,
    /// with the title repeated at the top of the body.
    pub fn assemble_combined(summary: &ReleaseSummary) -> Result<ExportDocument> {
        Self::validate(std::slice::from_ref(summary))?;
        if summary.is_synthetic() || summary.body.trim().is_empty() {
            return Err(DigestError::ExportPrecondition {
                reason: "no exportable summaries are available".to_string(),
            }
            .into());
        }

        let title = if summary.version.is_empty() {
            GENERIC_COMBINED_TITLE.to_string()
        } else {
            summary.display_title()
        };
        let body = format!("{}\n\n{}", title, summary.body);

        Ok(ExportDocument::new(vec![DocumentSection::new(title, body)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_rejects_empty_digest() {
        let result = ExportAssembler::assemble(&[]);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Nothing to export"));
        assert!(err.contains("empty"));
    }

    #[test]
    fn test_assemble_rejects_error_entry() {
        let summaries = vec![
            ReleaseSummary::new("OneAgent", "1.2", "fine"),
            ReleaseSummary::error("boom"),
        ];
        let result = ExportAssembler::assemble(&summaries);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("error entry"));
    }

    #[test]
    fn test_assemble_rejects_info_only_digest() {
        let summaries = vec![ReleaseSummary::info("no data")];
        let result = ExportAssembler::assemble(&summaries);
        assert!(result.is_err());
    }

    #[test]
    fn test_assemble_single_summary_title() {
        let summaries = vec![ReleaseSummary::new("ActiveGate", "3.0", "body text")];
        let doc = ExportAssembler::assemble(&summaries).unwrap();

        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Latest ActiveGate Release (3.0)");
        assert_eq!(doc.sections[0].body, "body text");
    }

    #[test]
    fn test_assemble_title_without_version_has_no_suffix() {
        let summaries = vec![ReleaseSummary::new("OneAgent", "", "text")];
        let doc = ExportAssembler::assemble(&summaries).unwrap();
        assert_eq!(doc.sections[0].title, "Latest OneAgent Release");
    }

    #[test]
    fn test_assemble_preserves_summary_order() {
        let summaries = vec![
            ReleaseSummary::new("OneAgent", "1.2", "a"),
            ReleaseSummary::new("Dynatrace Operator", "0.9", "b"),
        ];
        let doc = ExportAssembler::assemble(&summaries).unwrap();

        assert_eq!(doc.sections[0].title, "Latest OneAgent Release (1.2)");
        assert_eq!(
            doc.sections[1].title,
            "Latest Dynatrace Operator Release (0.9)"
        );
    }

    #[test]
    fn test_assemble_carries_body_verbatim() {
        let body = "New Features:\nA\n\nResolved Issues:\nB";
        let summaries = vec![ReleaseSummary::new("OneAgent", "1.2", body)];
        let doc = ExportAssembler::assemble(&summaries).unwrap();
        assert_eq!(doc.sections[0].body, body);
    }

    #[test]
    fn test_combined_mode_with_version() {
        let summary = ReleaseSummary::new("OneAgent", "1.295", "the news");
        let doc = ExportAssembler::assemble_combined(&summary).unwrap();

        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "Latest OneAgent Release (1.295)");
        assert_eq!(
            doc.sections[0].body,
            "Latest OneAgent Release (1.295)\n\nthe news"
        );
    }

    #[test]
    fn test_combined_mode_without_version_uses_generic_title() {
        let summary = ReleaseSummary::new("OneAgent", "", "the news");
        let doc = ExportAssembler::assemble_combined(&summary).unwrap();

        assert_eq!(doc.sections[0].title, "Latest Release News");
        assert_eq!(doc.sections[0].body, "Latest Release News\n\nthe news");
    }

    #[test]
    fn test_combined_mode_rejects_error_entry() {
        let summary = ReleaseSummary::error("boom");
        assert!(ExportAssembler::assemble_combined(&summary).is_err());
    }

    #[test]
    fn test_exportable_skips_synthetic_and_empty() {
        let summaries = vec![
            ReleaseSummary::new("OneAgent", "1.2", "text"),
            ReleaseSummary::info("nothing"),
            ReleaseSummary::new("ActiveGate", "3.0", "   "),
        ];
        let exportable = ExportAssembler::exportable(&summaries);
        assert_eq!(exportable.len(), 1);
        assert_eq!(exportable[0].component, "OneAgent");
    }
}
