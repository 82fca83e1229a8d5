use std::path::Path;

use anyhow::{Context, Result};

use casetrail_core::{TimelinePipeline, TimelineStats};

use super::display::{print_empty_notice, print_stats};
use crate::config::Config;

pub async fn run(config: &Config, document: &Path) -> Result<()> {
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

    print_stats(&TimelineStats::from_timeline(&output.timeline));
    Ok(())
}
