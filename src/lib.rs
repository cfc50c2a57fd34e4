//! release-digest - CLI client for a release-notes summarization service
//!
//! This library fetches summarized release notes for a user-selected set of
//! Dynatrace components, reconciles the backend's two response shapes into
//! one canonical model, and renders or exports the result as a document.
//! It follows hexagonal architecture: the digest pipeline is pure, and all
//! I/O goes through ports implemented by adapters.
//!
//! # Architecture
//!
//! - **Domain Layer** (`digest::domain`): catalog, selection, canonical summaries
//! - **Services** (`digest::services`): request building, response normalization,
//!   export assembly — pure transformations
//! - **Application Layer** (`application`): use cases and the session owning
//!   published aggregation state
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): reqwest clients, filesystem writer, renderers
//! - **Shared** (`shared`): common error and result types
//!
//! # Example
//!
//! ```no_run
//! use release_digest::prelude::*;
//!
//! # async fn demo() -> Result<()> {
//! let catalog = ComponentCatalog::standard();
//! let mut selection = SelectionState::new(catalog.len());
//! selection.toggle(0); // OneAgent
//!
//! let transport = HttpSummaryClient::new(
//!     "http://localhost:8000/api/dynatrace-release-news-summary",
//! )?;
//! let use_case = FetchSummariesUseCase::new(transport, StderrProgressReporter::new());
//!
//! let session = DigestSession::new();
//! let state = use_case.execute(&catalog, &selection, &session).await?;
//!
//! if let Some(summaries) = state.summaries() {
//!     for summary in summaries {
//!         println!("{}\n{}\n", summary.display_title(), summary.body);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod digest;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::network::{HttpExportClient, HttpSummaryClient};
    pub use crate::adapters::outbound::renderers::{MarkdownRenderer, TextRenderer};
    pub use crate::application::session::DigestSession;
    pub use crate::application::use_cases::{ExportDigestUseCase, FetchSummariesUseCase};
    pub use crate::digest::domain::{
        AggregationState, ComponentCatalog, ComponentDescriptor, ReleaseSummary, RequestPayload,
        SelectedItem, SelectionState,
    };
    pub use crate::digest::services::{ExportAssembler, RequestBuilder, ResponseNormalizer};
    pub use crate::ports::outbound::{
        DocumentRenderer, DocumentSink, ExportTransport, ExportedDocument, ProgressReporter,
        SummaryTransport,
    };
    pub use crate::shared::Result;
}
