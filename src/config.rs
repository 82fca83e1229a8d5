use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_DIR: &str = "NLP_cases";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding the case documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Blocking workers used per document; 1 builds sequentially
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

const fn default_workers() -> usize {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            workers: default_workers(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("CASETRAIL_DATA_DIR")
                .filter(|v| !v.is_empty())
                .map_or_else(default_data_dir, PathBuf::from),
            workers: std::env::var("CASETRAIL_WORKERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or_else(default_workers),
        }
    }

    /// `name` as given when it exists, otherwise relative to the data folder.
    pub fn resolve_document(&self, name: &Path) -> PathBuf {
        if name.exists() || name.is_absolute() {
            name.to_path_buf()
        } else {
            self.data_dir.join(name)
        }
    }
}
