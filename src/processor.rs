use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::util;

/// Working directory used when the caller does not pick one.
pub const DEFAULT_DATA_DIR: &str = ".claude-patterns";
/// Identifier reported in every [`Report::file`].
pub const REPORT_FILE: &str = "predictive_analytics.py";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_READY: &str = "ready";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

#[derive(Debug, Error)]
#[error("creating directory {path}")]
pub struct DirectoryCreationError {
    pub path: Utf8PathBuf,
    #[source]
    pub source: io::Error,
}

/// Snapshot produced by [`Processor::produce_report`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Report {
    pub status: String,
    pub timestamp: String,
    pub file: String,
}

impl Report {
    pub fn summary_line(&self) -> String {
        format!("Processed {}: {}", self.file, self.status)
    }
}

/// Owns the pattern directory; the directory exists for as long as the value does.
#[derive(Debug)]
pub struct Processor {
    data_dir: Utf8PathBuf,
}

impl Processor {
    pub fn new(data_dir: Option<&Utf8Path>) -> Result<Self, DirectoryCreationError> {
        let data_dir = match data_dir {
            None => Utf8PathBuf::from(DEFAULT_DATA_DIR),
            // An empty path names the current directory.
            Some(path) if path.as_str().is_empty() => Utf8PathBuf::from("."),
            Some(path) => path.to_owned(),
        };

        util::fs::ensure_dir(data_dir.as_std_path()).map_err(|source| {
            DirectoryCreationError {
                path: data_dir.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %data_dir, "data directory ready");

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    pub fn produce_report(&self) -> Report {
        Report {
            status: STATUS_COMPLETED.to_owned(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            file: REPORT_FILE.to_owned(),
        }
    }

    pub fn status(&self) -> &'static str {
        STATUS_READY
    }
}
