/// Application layer: use cases and the session that owns published state.
pub mod session;
pub mod use_cases;

pub use session::{DigestSession, RunTicket};
