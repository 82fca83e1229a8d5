use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::Timeline;

pub const HEADERS: [&str; 4] = ["Date", "Event", "Description", "Persons"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Encoding(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// The flat four-field form of an event record handed to exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Event")]
    pub event: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Persons")]
    pub persons: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(crate::Error::UnknownFormat(other.to_string())),
        }
    }
}

/// `<stem>_timeline.<ext>` for the document at `document`.
#[must_use]
pub fn export_file_name(document: &Path, format: ExportFormat) -> String {
    let stem = document
        .file_stem()
        .map_or_else(|| "document".to_string(), |s| s.to_string_lossy().to_string());
    format!("{stem}_timeline.{}", format.extension())
}

pub fn to_csv(timeline: &Timeline) -> ExportResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADERS)?;
    for row in timeline.rows() {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| ExportError::Encoding(e.to_string()))
}

pub fn rows_from_csv(text: &str) -> ExportResult<Vec<TimelineRow>> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let rows = reader.deserialize().collect::<Result<Vec<TimelineRow>, _>>()?;
    Ok(rows)
}

pub fn to_json(timeline: &Timeline) -> ExportResult<String> {
    Ok(serde_json::to_string_pretty(&timeline.rows())?)
}

pub fn rows_from_json(text: &str) -> ExportResult<Vec<TimelineRow>> {
    Ok(serde_json::from_str(text)?)
}

pub fn export(timeline: &Timeline, format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Csv => to_csv(timeline),
        ExportFormat::Json => to_json(timeline),
    }
}
