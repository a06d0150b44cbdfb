//! tdr-save: run log for Three Days to Rescue
//!
//! Every run is appended as one JSON object per line (JSON Lines). Existing
//! lines are never rewritten.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use tdr_core::{RunRecord, RunRecorder};

/// Run log errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Run log line {line} is corrupted: {source}")]
    Corrupted {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Appends run records to a JSON Lines file
#[derive(Debug, Clone)]
pub struct JsonlRecorder {
    path: PathBuf,
}

impl JsonlRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RunRecorder for JsonlRecorder {
    type Error = SaveError;

    fn append(&mut self, record: &RunRecord) -> Result<(), SaveError> {
        append_record(&self.path, record)
    }
}

/// Append one record as a single line, creating the file if needed
pub fn append_record(path: impl AsRef<Path>, record: &RunRecord) -> Result<(), SaveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut line = serde_json::to_string(record)?;
    line.push('\n');

    // One write call per record keeps lines whole.
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())?;
    file.flush()?;

    debug!(path = %path.display(), ending = ?record.ending(), "run record appended");
    Ok(())
}

/// Read every record, oldest first.
///
/// A missing file is an empty log. Blank lines are skipped; the first line
/// that does not parse fails the whole read.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RunRecord>, SaveError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .map_err(|source| SaveError::Corrupted { line: idx + 1, source })?;
        records.push(record);
    }
    Ok(records)
}

/// Read records, skipping lines that do not parse.
///
/// Returns the records and the 1-based numbers of the skipped lines.
pub fn load_records_lossy(path: impl AsRef<Path>) -> Result<(Vec<RunRecord>, Vec<usize>), SaveError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok((Vec::new(), Vec::new()));
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(path = %path.display(), line = idx + 1, %err, "skipping corrupted run record");
                skipped.push(idx + 1);
            }
        }
    }
    Ok((records, skipped))
}

/// The last `count` records, oldest first
pub fn recent_records(path: impl AsRef<Path>, count: usize) -> Result<(Vec<RunRecord>, Vec<usize>), SaveError> {
    let (mut records, skipped) = load_records_lossy(path)?;
    let start = records.len().saturating_sub(count);
    Ok((records.split_off(start), skipped))
}
