/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod document_renderer;
pub mod document_sink;
pub mod export_transport;
pub mod progress_reporter;
pub mod summary_transport;

pub use document_renderer::DocumentRenderer;
pub use document_sink::DocumentSink;
pub use export_transport::{ExportTransport, ExportedDocument};
pub use progress_reporter::ProgressReporter;
pub use summary_transport::SummaryTransport;
