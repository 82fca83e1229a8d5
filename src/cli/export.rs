use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;

use casetrail_core::export::{export, export_file_name};
use casetrail_core::{ExportFormat, TimelinePipeline};

use super::display::print_empty_notice;
use crate::config::Config;

pub async fn run(
    config: &Config,
    document: &Path,
    format: ExportFormat,
    out_dir: Option<&Path>,
) -> Result<()> {
    let path = config.resolve_document(document);
    let output = TimelinePipeline::new()
        .with_workers(config.workers)
        .process_file(&path)
        .await
        .with_context(|| format!("failed to build timeline for '{}'", path.display()))?;

    if output.timeline.is_empty() {
        print_empty_notice();
        return Ok(());
    }

    let body = export(&output.timeline, format)?;
    let dir = out_dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let target = dir.join(export_file_name(&path, format));

    tokio::fs::write(&target, body)
        .await
        .with_context(|| format!("failed to write '{}'", target.display()))?;

    tracing::info!(path = %target.display(), %format, "exported timeline");
    println!("{} {}", style("Exported:").green().bold(), target.display());
    Ok(())
}
