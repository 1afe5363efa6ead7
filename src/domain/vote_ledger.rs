//! Vote Ledger
//!
//! Durable per-token vote counts: an in-memory map loaded once from a JSON
//! snapshot at startup and rewritten in full after every increment.
//!
//! Known hazard, accepted rather than fixed: the snapshot is written outside
//! the map lock, so two increments racing through `increment` may persist out
//! of order and the last writer's snapshot wins on disk until the next
//! mutation. In-memory counts themselves never lose an update. A crash in the
//! middle of the write may leave a torn file; recovery is restart-and-reload.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Failed to read ledger file: {0}")]
    ReadError(String),

    #[error("Failed to write ledger file: {0}")]
    WriteError(String),

    #[error("Failed to serialize ledger: {0}")]
    SerializationError(String),

    #[error("Ledger file is corrupted: {0}")]
    CorruptedFile(String),

    #[error("Failed to create directory: {0}")]
    DirectoryError(String),
}

/// Process-wide vote store with whole-snapshot persistence.
#[derive(Debug)]
pub struct VoteLedger {
    path: PathBuf,
    counts: Mutex<HashMap<String, u64>>,
}

impl VoteLedger {
    /// Open the ledger, loading the snapshot if one exists. A missing or
    /// empty file starts an empty ledger; corrupted JSON is a startup error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let counts = load_snapshot(&path)?;

        tracing::info!(
            "Vote ledger loaded: {} tokens from {}",
            counts.len(),
            path.display()
        );

        Ok(Self {
            path,
            counts: Mutex::new(counts),
        })
    }

    /// Current vote count for a token, zero if never voted.
    pub fn get(&self, address: &str) -> u64 {
        self.counts
            .lock()
            .unwrap()
            .get(address)
            .copied()
            .unwrap_or(0)
    }

    /// Increment a token's count and persist the whole snapshot before
    /// returning the new count.
    pub fn increment(&self, address: &str) -> Result<u64, LedgerError> {
        let (count, snapshot) = {
            let mut counts = self.counts.lock().unwrap();
            let entry = counts.entry(address.to_string()).or_insert(0);
            *entry += 1;
            (*entry, counts.clone())
        };

        // Written outside the lock: racing increments may land on disk out
        // of order (last writer wins until the next mutation).
        self.save_snapshot(&snapshot)?;

        tracing::debug!(%address, votes = count, "vote recorded");
        Ok(count)
    }

    /// Copy of the full ledger, for reporting.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.counts.lock().unwrap().clone()
    }

    /// Snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_snapshot(&self, snapshot: &HashMap<String, u64>) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| LedgerError::DirectoryError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string(snapshot)
            .map_err(|e| LedgerError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| LedgerError::WriteError(e.to_string()))
    }
}

fn load_snapshot(path: &Path) -> Result<HashMap<String, u64>, LedgerError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(path).map_err(|e| LedgerError::ReadError(e.to_string()))?;

    if content.trim().is_empty() {
        return Ok(HashMap::new());
    }

    serde_json::from_str(&content).map_err(|e| LedgerError::CorruptedFile(e.to_string()))
}
