use owo_colors::OwoColorize;
use release_digest::cli::{Args, DEFAULT_ENDPOINT, DEFAULT_EXPORT_ENDPOINT};
use release_digest::config::{discover_config, load_config_from_path};
use release_digest::prelude::*;
use release_digest::shared::DigestError;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();
    let catalog = ComponentCatalog::standard();

    // Load configuration (explicit path wins over auto-discovery)
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(Path::new(path), &catalog)?),
        None => discover_config(Path::new("."), &catalog)?,
    }
    .unwrap_or_default();

    // Build the selection from CLI components, falling back to the config
    let component_ids: &[String] = if !args.components.is_empty() {
        &args.components
    } else {
        config.components.as_deref().unwrap_or(&[])
    };
    let selection = build_selection(component_ids, &catalog)?;

    // Create adapters (Dependency Injection)
    let endpoint = args
        .endpoint
        .clone()
        .or_else(|| config.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    let transport = HttpSummaryClient::new(&endpoint)?;
    let progress_reporter = StderrProgressReporter::new();

    // Execute the aggregation run
    let fetch_use_case = FetchSummariesUseCase::new(transport, progress_reporter);
    let session = DigestSession::new();
    let state = fetch_use_case.execute(&catalog, &selection, &session).await?;

    let Some(summaries) = state.summaries() else {
        return Ok(());
    };
    print_digest(summaries);

    if args.export {
        let output_dir = args
            .output_dir
            .clone()
            .or_else(|| config.output_dir.clone())
            .unwrap_or_else(|| ".".to_string());
        let sink = FileSystemWriter::new(PathBuf::from(output_dir));
        let export_use_case = ExportDigestUseCase::new(sink, StderrProgressReporter::new());

        if args.remote_export {
            let export_endpoint = args
                .export_endpoint
                .clone()
                .or_else(|| config.export_endpoint.clone())
                .unwrap_or_else(|| DEFAULT_EXPORT_ENDPOINT.to_string());
            let export_transport = HttpExportClient::new(&export_endpoint)?;
            export_use_case
                .export_remote(&export_transport, summaries)
                .await?;
        } else if args.combined {
            let exportable = ExportAssembler::exportable(summaries);
            let [only] = exportable.as_slice() else {
                return Err(DigestError::ExportPrecondition {
                    reason: format!(
                        "combined mode requires exactly one summary, found {}",
                        exportable.len()
                    ),
                }
                .into());
            };
            let renderer = args.format.create_renderer();
            export_use_case.export_combined(only, renderer.as_ref())?;
        } else {
            let renderer = args.format.create_renderer();
            export_use_case.export_local(summaries, renderer.as_ref())?;
        }
    }

    Ok(())
}

/// Turns the requested component ids into a selection state, validating
/// each id against the catalog. The literal `all` selects everything.
fn build_selection(ids: &[String], catalog: &ComponentCatalog) -> Result<SelectionState> {
    let mut selection = SelectionState::new(catalog.len());

    for id in ids {
        if id == "all" {
            for index in 0..catalog.len() {
                if !selection.is_checked(index) {
                    selection.toggle(index);
                }
            }
            continue;
        }

        let index = catalog
            .index_of_id(id)
            .ok_or_else(|| DigestError::UnknownComponent {
                id: id.clone(),
                available: catalog.available_ids(),
            })?;
        if !selection.is_checked(index) {
            selection.toggle(index);
        }
    }

    Ok(selection)
}

/// Renders the digest as a sequence of cards on stdout.
fn print_digest(summaries: &[ReleaseSummary]) {
    for summary in summaries {
        let title = summary.display_title();
        if summary.is_error() {
            println!("{}", title.red().bold());
        } else if summary.is_info() {
            println!("{}", title.yellow().bold());
        } else {
            println!("{}", title.blue().bold());
        }
        println!("{}", "-".repeat(title.len()));
        println!("{}\n", summary.body);
    }
}
