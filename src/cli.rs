use clap::Parser;

use crate::adapters::outbound::renderers::{MarkdownRenderer, TextRenderer};
use crate::ports::outbound::DocumentRenderer;

/// Default summarize endpoint of a locally running backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/dynatrace-release-news-summary";

/// Default backend-assisted export endpoint.
pub const DEFAULT_EXPORT_ENDPOINT: &str = "http://localhost:8000/api/download-release-news-pdf";

#[derive(Debug, Clone, Copy)]
pub enum DocumentFormat {
    Text,
    Markdown,
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(DocumentFormat::Text),
            "markdown" | "md" => Ok(DocumentFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'markdown'",
                s
            )),
        }
    }
}

impl DocumentFormat {
    /// Creates a renderer instance for the specified document format
    pub fn create_renderer(&self) -> Box<dyn DocumentRenderer> {
        match self {
            DocumentFormat::Text => Box::new(TextRenderer::new()),
            DocumentFormat::Markdown => Box::new(MarkdownRenderer::new()),
        }
    }
}

/// Fetch and export summarized Dynatrace release notes
#[derive(Parser, Debug)]
#[command(name = "release-digest")]
#[command(version)]
#[command(about = "Fetch summarized release notes for selected Dynatrace components", long_about = None)]
pub struct Args {
    /// Component to include in the digest; repeatable, or 'all'
    /// (valid ids: oneagent, active_gate, dynatrace_api, dynatrace_operator, dynatrace_managed)
    #[arg(short = 'c', long = "component", value_name = "ID")]
    pub components: Vec<String>,

    /// Summarize endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Backend export endpoint URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    pub export_endpoint: Option<String>,

    /// Write the digest to a document in addition to printing it
    #[arg(short = 'x', long)]
    pub export: bool,

    /// Ask the backend to render the export document (PDF) instead of
    /// rendering locally
    #[arg(long, requires = "export")]
    pub remote_export: bool,

    /// Export as a single combined document (requires exactly one summary)
    #[arg(long, requires = "export", conflicts_with = "remote_export")]
    pub combined: bool,

    /// Export document format: text or markdown
    #[arg(short, long, default_value = "text")]
    pub format: DocumentFormat,

    /// Directory exported documents are written into (defaults to the
    /// current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Path to a config file (defaults to ./release-digest.config.yml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
