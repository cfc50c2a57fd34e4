/// Document renderer adapters.
pub mod markdown_renderer;
pub mod text_renderer;

pub use markdown_renderer::MarkdownRenderer;
pub use text_renderer::TextRenderer;
