use crate::digest::domain::ReleaseSummary;
use crate::digest::services::ExportAssembler;
use crate::ports::outbound::{DocumentRenderer, DocumentSink, ExportTransport, ProgressReporter};
use crate::shared::Result;
use chrono::Local;
use std::path::PathBuf;

/// Default filename stem for multi-component exports; a timestamp is
/// appended, mirroring the backend's own naming.
const DATED_FILENAME_STEM: &str = "Dynatrace_Release_Notes";

/// Fixed filename stem used by the legacy combined mode when no version is
/// known.
const LEGACY_FILENAME_STEM: &str = "Dynatrace_Release_News";

/// ExportDigestUseCase - turns a successful digest into a document on disk.
///
/// Two paths exist behind the same preconditions: local assembly (the
/// assembler builds the document, a renderer serializes it) and
/// backend-assisted export (the summaries are posted and the backend
/// returns rendered bytes plus a filename hint). Either way the export is
/// rejected up front when the digest is empty or contains an Error entry.
///
/// # Type Parameters
/// * `S` - DocumentSink implementation
/// * `PR` - ProgressReporter implementation
pub struct ExportDigestUseCase<S: DocumentSink, PR: ProgressReporter> {
    sink: S,
    progress_reporter: PR,
}

impl<S: DocumentSink, PR: ProgressReporter> ExportDigestUseCase<S, PR> {
    pub fn new(sink: S, progress_reporter: PR) -> Self {
        Self {
            sink,
            progress_reporter,
        }
    }

    /// Assembles and renders the document locally, then writes it.
    pub fn export_local(
        &self,
        summaries: &[ReleaseSummary],
        renderer: &dyn DocumentRenderer,
    ) -> Result<PathBuf> {
        let document = ExportAssembler::assemble(summaries)?;
        let contents = renderer.render(&document)?;

        let filename = Self::derive_filename(summaries, renderer.file_extension());
        let path = self.sink.write(&filename, contents.as_bytes())?;

        self.progress_reporter
            .report_completion(&format!("Document written to {}", path.display()));
        Ok(path)
    }

    /// Legacy combined mode: one summary, title repeated at the top of the
    /// body, fixed fallback filename when no version is known.
    pub fn export_combined(
        &self,
        summary: &ReleaseSummary,
        renderer: &dyn DocumentRenderer,
    ) -> Result<PathBuf> {
        let document = ExportAssembler::assemble_combined(summary)?;
        let contents = renderer.render(&document)?;

        let stem = if summary.version.is_empty() {
            LEGACY_FILENAME_STEM.to_string()
        } else {
            format!(
                "{}_Release_{}",
                sanitize_filename_part(&summary.component),
                sanitize_filename_part(&summary.version)
            )
        };
        let filename = format!("{}.{}", stem, renderer.file_extension());
        let path = self.sink.write(&filename, contents.as_bytes())?;

        self.progress_reporter
            .report_completion(&format!("Document written to {}", path.display()));
        Ok(path)
    }

    /// Posts the summaries to the backend's document endpoint and writes
    /// the returned bytes.
    pub async fn export_remote<T: ExportTransport>(
        &self,
        transport: &T,
        summaries: &[ReleaseSummary],
    ) -> Result<PathBuf> {
        ExportAssembler::validate(summaries)?;
        let exportable: Vec<ReleaseSummary> = ExportAssembler::exportable(summaries)
            .into_iter()
            .cloned()
            .collect();
        if exportable.is_empty() {
            return Err(crate::shared::DigestError::ExportPrecondition {
                reason: "no exportable summaries are available".to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report("📄 Requesting rendered document from the summarization service...");
        let exported = transport.export(&exportable).await?;

        let filename = exported
            .filename
            .unwrap_or_else(|| format!("{}.pdf", dated_filename_stem()));
        let path = self.sink.write(&filename, &exported.bytes)?;

        self.progress_reporter
            .report_completion(&format!("Document written to {}", path.display()));
        Ok(path)
    }

    /// Filename for locally rendered documents: component and version when
    /// the digest holds exactly one summary, a dated default otherwise.
    fn derive_filename(summaries: &[ReleaseSummary], extension: &str) -> String {
        let exportable = ExportAssembler::exportable(summaries);

        let stem = match exportable.as_slice() {
            [only] if !only.version.is_empty() => format!(
                "{}_Release_{}",
                sanitize_filename_part(&only.component),
                sanitize_filename_part(&only.version)
            ),
            _ => dated_filename_stem(),
        };

        format!("{}.{}", stem, extension)
    }
}

fn dated_filename_stem() -> String {
    format!(
        "{}_{}",
        DATED_FILENAME_STEM,
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Replaces whitespace and path-hostile characters so component names and
/// versions are safe in filenames.
fn sanitize_filename_part(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect()
}
