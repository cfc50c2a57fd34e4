/// Network adapters backed by reqwest.
pub mod export_client;
pub mod summary_client;

pub use export_client::HttpExportClient;
pub use summary_client::HttpSummaryClient;
