/// Application use cases orchestrating the digest pipeline.
pub mod export_digest;
pub mod fetch_summaries;

pub use export_digest::ExportDigestUseCase;
pub use fetch_summaries::FetchSummariesUseCase;
