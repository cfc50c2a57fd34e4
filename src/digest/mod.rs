//! Core digest pipeline: domain model plus the pure services that build
//! request payloads, normalize backend responses, and assemble export
//! documents.

pub mod domain;
pub mod services;
