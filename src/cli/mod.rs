pub mod display;
pub mod export;
pub mod list;
pub mod names;
pub mod stats;
pub mod timeline;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use casetrail_core::ExportFormat;

#[derive(Parser)]
#[command(
    name = "casetrail",
    about = "Extract chronological event timelines from legal case documents",
    version
)]
pub struct Cli {
    /// Folder holding case documents (overrides CASETRAIL_DATA_DIR)
    #[arg(short = 'd', long = "dir", global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List PDF case documents in the data folder
    List,
    /// Build and print the timeline of a document
    Timeline {
        /// Document path, or a file name inside the data folder
        document: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Spread sentence processing over this many workers
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Show event statistics for a document
    Stats {
        /// Document path, or a file name inside the data folder
        document: PathBuf,
    },
    /// List capitalized party and person names found anywhere in a document
    Names {
        /// Document path, or a file name inside the data folder
        document: PathBuf,
    },
    /// Write the timeline to <name>_timeline.csv or .json
    Export {
        /// Document path, or a file name inside the data folder
        document: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportArg::Csv)]
        format: ExportArg,
        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportArg {
    Csv,
    Json,
}

impl From<ExportArg> for ExportFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Csv => Self::Csv,
            ExportArg::Json => Self::Json,
        }
    }
}
