//! Run records
//!
//! One [`RunRecord`] is produced per run and handed to a [`RunRecorder`].
//! The engine only ever appends; reading records back is left to tools such
//! as the history view.

use core::convert::Infallible;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::death::Ending;
use crate::state::{ResourceState, StateSnapshot};

/// Persisted summary of one playthrough
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// When the run started, ISO-8601 in UTC
    pub time_utc: String,
    /// Seed the player entered, if any
    pub seed: Option<i64>,
    /// State at the end of the run
    #[serde(rename = "final")]
    pub final_state: StateSnapshot,
    /// Audit log, in order
    pub log: Vec<String>,
}

impl RunRecord {
    pub fn new(started_at: DateTime<Utc>, seed: Option<i64>, state: &ResourceState) -> Self {
        Self {
            time_utc: started_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            seed,
            final_state: state.snapshot(),
            log: state.log().to_vec(),
        }
    }

    pub fn ending(&self) -> Option<Ending> {
        self.final_state.ending
    }

    /// One-line summary for history listings
    pub fn summary(&self) -> String {
        let seed = self
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string());
        let ending = self
            .ending()
            .map_or_else(|| "Abandoned".to_string(), |e| e.to_string());
        format!(
            "{} seed={} day {} water {}/3 food {}/3 weapon {} \u{2192} {}",
            self.time_utc,
            seed,
            self.final_state.day,
            self.final_state.water_thirds,
            self.final_state.food_thirds,
            if self.final_state.weapon { "yes" } else { "no" },
            ending
        )
    }
}

/// What [`crate::play`] hands back after recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub record: RunRecord,
    /// Input closed before the run finished
    pub hangup: bool,
}

/// Durable, append-only sink for run records
pub trait RunRecorder {
    type Error;

    /// Append one record. Never overwrites earlier records.
    fn append(&mut self, record: &RunRecord) -> Result<(), Self::Error>;
}

/// Keeps records in memory. Used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecorder {
    pub records: Vec<RunRecord>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunRecorder for MemoryRecorder {
    type Error = Infallible;

    fn append(&mut self, record: &RunRecord) -> Result<(), Self::Error> {
        self.records.push(record.clone());
        Ok(())
    }
}

impl<R: RunRecorder + ?Sized> RunRecorder for &mut R {
    type Error = R::Error;

    fn append(&mut self, record: &RunRecord) -> Result<(), Self::Error> {
        (**self).append(record)
    }
}
