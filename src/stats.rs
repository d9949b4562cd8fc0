use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_dirs::AppDirs;
use crate::error::GameError;

pub const ROUND_LOG: &str = "rounds.csv";
pub const SESSION_LOG: &str = "sessions.csv";

/// One finished round. Write-once, appended to the round log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub session_id: Uuid,
    pub word: String,
    pub player_name: String,
    pub round_number: usize,
    pub failed_count: usize,
    pub victory: bool,
}

/// One finished session. Write-once, appended to the session log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_id: Uuid,
    pub player_name: String,
    pub start_timestamp: DateTime<Local>,
    pub end_timestamp: DateTime<Local>,
    pub final_score: u32,
}

/// Appends round and session records to two append-only CSV logs, creating
/// each log with a header row the first time it is written.
#[derive(Debug, Clone)]
pub struct StatsRecorder {
    round_log: PathBuf,
    session_log: PathBuf,
}

impl StatsRecorder {
    /// Recorder writing under the platform data directory.
    pub fn new() -> Self {
        let dir = AppDirs::log_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_dir(dir)
    }

    /// Recorder writing under an explicit directory. Used by the `--log-dir`
    /// flag and by tests.
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            round_log: dir.join(ROUND_LOG),
            session_log: dir.join(SESSION_LOG),
        }
    }

    pub fn round_log_path(&self) -> &Path {
        &self.round_log
    }

    pub fn session_log_path(&self) -> &Path {
        &self.session_log
    }

    pub fn append_round(&self, record: &RoundRecord) -> Result<(), GameError> {
        log::debug!(
            "round {} of session {}: '{}' {}",
            record.round_number,
            record.session_id,
            record.word,
            if record.victory { "won" } else { "lost" }
        );
        Self::append(&self.round_log, record)
    }

    pub fn append_session(&self, record: &SessionRecord) -> Result<(), GameError> {
        log::debug!(
            "session {} finished with score {}",
            record.session_id,
            record.final_score
        );
        Self::append(&self.session_log, record)
    }

    fn append<T: Serialize>(path: &Path, record: &T) -> Result<(), GameError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Header presence is keyed off file existence checked before the
        // open below creates it, never off emptiness after creation.
        let needs_header = !path.exists();

        let file = OpenOptions::new().append(true).create(true).open(path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush().map_err(GameError::Io)?;
        Ok(())
    }
}

impl Default for StatsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
