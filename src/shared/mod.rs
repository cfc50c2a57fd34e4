/// Shared utilities and error types used across all layers.
pub mod error;
pub mod result;

pub use error::DigestError;
pub use result::Result;
