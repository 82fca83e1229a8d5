use anyhow::{bail, Result};
use console::style;

use casetrail_core::ingest::list_documents;
use casetrail_core::DocumentFormat;

use super::display::format_size;
use crate::config::Config;

pub async fn run(config: &Config) -> Result<()> {
    let dir = &config.data_dir;
    if !dir.is_dir() {
        bail!(
            "data folder '{}' does not exist (set CASETRAIL_DATA_DIR or pass --dir)",
            dir.display()
        );
    }

    let documents = list_documents(dir, DocumentFormat::Pdf).await?;
    if documents.is_empty() {
        bail!("no PDF files found in '{}'", dir.display());
    }

    println!(
        "{}",
        style(format!("{} document(s) in {}", documents.len(), dir.display())).bold()
    );
    for path in &documents {
        let size = tokio::fs::metadata(path).await.map(|m| m.len()).unwrap_or(0);
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().to_string());
        println!("  {:>7}  {name}", style(format_size(size)).dim());
    }

    Ok(())
}
