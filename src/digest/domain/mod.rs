/// Domain model for the release digest pipeline.
pub mod aggregation_state;
pub mod catalog;
pub mod export_document;
pub mod payload;
pub mod release_summary;
pub mod selection;

pub use aggregation_state::AggregationState;
pub use catalog::{derive_id, ComponentCatalog, ComponentDescriptor};
pub use export_document::{DocumentSection, ExportDocument, DOCUMENT_TITLE};
pub use payload::{RequestPayload, SelectedItem};
pub use release_summary::{ReleaseSummary, ERROR_COMPONENT, INFO_COMPONENT};
pub use selection::SelectionState;
