use thiserror::Error;

use crate::export::ExportError;
use crate::ingest::SourceError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Unknown event category: {0}")]
    UnknownCategory(String),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Worker task failed: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, Error>;
