use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use casetrail_core::TimelinePipeline;

use crate::config::Config;

pub async fn run(config: &Config, document: &Path) -> Result<()> {
    let path = config.resolve_document(document);
    let names = TimelinePipeline::new()
        .discover_parties(&path)
        .await
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    if names.is_empty() {
        eprintln!("{}", style("No names found.").dim());
        return Ok(());
    }

    for name in &names {
        println!("{name}");
    }
    Ok(())
}
