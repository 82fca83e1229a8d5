use std::path::Path;

use anyhow::{Context, Result};

use casetrail_core::{export, TimelinePipeline};

use super::display::{print_empty_notice, print_timeline};
use super::OutputFormat;
use crate::config::Config;

pub async fn run(
    config: &Config,
    document: &Path,
    format: OutputFormat,
    workers: Option<usize>,
) -> Result<()> {
    let path = config.resolve_document(document);
    let pipeline = TimelinePipeline::new().with_workers(workers.unwrap_or(config.workers));
    let output = pipeline
        .process_file(&path)
        .await
        .with_context(|| format!("failed to build timeline for '{}'", path.display()))?;

    tracing::debug!(
        document = %output.file_name(),
        pages = ?output.document.page_count,
        duration_ms = output.duration_ms,
        "timeline ready"
    );

    if output.timeline.is_empty() {
        print_empty_notice();
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_timeline(&output.timeline),
        OutputFormat::Csv => print!("{}", export::to_csv(&output.timeline)?),
        OutputFormat::Json => println!("{}", export::to_json(&output.timeline)?),
    }

    Ok(())
}
