mod mock_progress_reporter;
mod mock_summary_transport;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_summary_transport::{GatedTransport, ScriptedTransport};
