/// Pure transformation services over the digest domain model.
pub mod export_assembler;
pub mod request_builder;
pub mod response_normalizer;

pub use export_assembler::ExportAssembler;
pub use request_builder::RequestBuilder;
pub use response_normalizer::ResponseNormalizer;
