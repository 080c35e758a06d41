//! Event store engine
//!
//! This module contains the long-lived scheduler instance: the chain
//! behind a single lock, loaded from the events file at startup and
//! persisted after every successful mutation.

mod chain;
mod crud;
mod generate;

use std::env;
use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::types::{EventRecord, StoreResult};
use crate::utils::atomic::atomic_write;

pub use chain::{EventChain, Iter, IterRev};

/// Default events file, relative to the working directory.
const DEFAULT_EVENTS_FILE: &str = "events.jsonl";

/// Counter line persisted ahead of the records, so id monotonicity
/// survives restarts even after the highest-id record was deleted.
#[derive(Debug, Serialize, Deserialize)]
struct StoreMeta {
    #[serde(rename = "nextId")]
    next_id: u64,
}

/// Event store with a single-lock concurrency discipline.
///
/// Every operation takes the one mutex for its full duration, and
/// enumeration returns snapshot copies taken under the lock, so a reader
/// can never observe a half-spliced chain. The instance is constructed
/// once and passed by reference (or `Arc`) to every caller; independent
/// instances are fully isolated from each other.
pub struct EventScheduler {
    pub(crate) events_file_path: Option<String>,
    pub(crate) chain: Mutex<EventChain>,
}

impl EventScheduler {
    /// Create a scheduler backed by the default events file.
    ///
    /// The path comes from the `EVENTS_FILE_PATH` environment variable
    /// (relative paths resolve against the current directory), falling
    /// back to `events.jsonl`. Persisted records are loaded immediately.
    pub fn new() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        let default_events_path = current_dir.join(DEFAULT_EVENTS_FILE);

        let events_file_path = match env::var("EVENTS_FILE_PATH") {
            Ok(path) => {
                if Path::new(&path).is_absolute() {
                    path
                } else {
                    current_dir.join(path).to_string_lossy().to_string()
                }
            }
            Err(_) => default_events_path.to_string_lossy().to_string(),
        };

        Self::with_file_path(events_file_path)
    }

    /// Create a scheduler backed by an explicit events file.
    pub fn with_file_path(file_path: String) -> Self {
        let chain = Self::load_chain_from_file(&file_path).unwrap_or_default();
        Self {
            events_file_path: Some(file_path),
            chain: Mutex::new(chain),
        }
    }

    /// Create a scheduler with no persistence (useful for testing).
    pub fn in_memory() -> Self {
        Self {
            events_file_path: None,
            chain: Mutex::new(EventChain::new()),
        }
    }

    /// Load a chain from the events file (static helper for initialization).
    ///
    /// The file is JSON lines: one meta line carrying the id counter and
    /// one object per record, in chain order. Unreadable lines are skipped
    /// with a warning rather than failing the whole load.
    fn load_chain_from_file(file_path: &str) -> StoreResult<EventChain> {
        let mut chain = EventChain::new();
        if !Path::new(file_path).exists() {
            return Ok(chain);
        }

        let content = fs::read_to_string(file_path)?;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Ok(meta) = serde_json::from_str::<StoreMeta>(line) {
                chain.set_next_id_floor(meta.next_id);
                continue;
            }

            match serde_json::from_str::<EventRecord>(line) {
                Ok(record) if !record.name.is_empty() => chain.restore(record),
                Ok(record) => eprintln!(
                    "[scheduler] skipping record {} with empty name in {}",
                    record.id, file_path
                ),
                Err(e) => eprintln!(
                    "[scheduler] skipping unreadable line in {}: {}",
                    file_path, e
                ),
            }
        }

        Ok(chain)
    }

    /// Persist the chain to the events file (caller holds the lock).
    pub(crate) fn persist_to_file(&self, chain: &EventChain) -> StoreResult<()> {
        let Some(path) = &self.events_file_path else {
            return Ok(());
        };

        let mut content = String::new();
        content.push_str(&serde_json::to_string(&StoreMeta {
            next_id: chain.next_id(),
        })?);
        content.push('\n');

        for record in chain.iter() {
            content.push_str(&serde_json::to_string(record)?);
            content.push('\n');
        }

        atomic_write(path, &content)?;
        Ok(())
    }

    /// Path of the events file, if this instance persists.
    pub fn file_path(&self) -> Option<&str> {
        self.events_file_path.as_deref()
    }

    /// Number of live events.
    pub fn len(&self) -> usize {
        self.chain.lock().len()
    }

    /// True when the store holds no live events.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EventScheduler {
    fn default() -> Self {
        Self::new()
    }
}

// Store operations live in submodules; re-exported here as inherent methods.
impl EventScheduler {
    /// Insert a new event and return its assigned id.
    pub fn insert(
        &self,
        name: String,
        date: String,
        time: String,
        seats: u32,
    ) -> StoreResult<u64> {
        crud::insert(self, name, date, time, seats)
    }

    /// Look up a single event by id.
    pub fn find(&self, id: u64) -> StoreResult<EventRecord> {
        crud::find(self, id)
    }

    /// Replace the mutable fields of an existing event.
    pub fn update(
        &self,
        id: u64,
        name: String,
        date: String,
        time: String,
        seats: u32,
    ) -> StoreResult<()> {
        crud::update(self, id, name, date, time, seats)
    }

    /// Remove an event, splicing it out of the chain.
    pub fn remove(&self, id: u64) -> StoreResult<EventRecord> {
        crud::remove(self, id)
    }

    /// Snapshot of all live events in insertion order.
    pub fn events_forward(&self) -> Vec<EventRecord> {
        crud::events_forward(self)
    }

    /// Snapshot of all live events in reverse insertion order.
    pub fn events_reverse(&self) -> Vec<EventRecord> {
        crud::events_reverse(self)
    }

    /// Insert `count` synthetic events drawn from the fixture pools.
    pub fn generate(&self, count: usize) -> StoreResult<Vec<u64>> {
        generate::generate(self, count)
    }

    /// Like [`generate`](Self::generate), with a caller-supplied random source.
    pub fn generate_with<R: rand::Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> StoreResult<Vec<u64>> {
        generate::generate_with(self, count, rng)
    }
}
