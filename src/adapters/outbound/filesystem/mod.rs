/// File system adapters.
pub mod document_writer;

pub use document_writer::FileSystemWriter;
