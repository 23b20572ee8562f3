//! # Event Store
//!
//! The ordered event collection and the storage it is persisted to.
//!
//! ```text
//! EventCollection  (in memory, sorted by time, earliest first)
//!        │ save / load
//!        ▼
//! Storage trait ── JsonFileStorage  (<app dir>/events.json)
//! ```
//!
//! Writes go through `.tmp` + `rename()` so a crash never leaves a half-written
//! events file behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::core::event::{Event, next_golang_anniversary};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("events file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed events file {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("no event at index {index} (collection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Where the event collection lives between runs.
pub trait Storage {
    /// Read the persisted events. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Event>>, StoreError>;

    /// Replace the persisted events with `events`.
    fn save(&self, events: &[Event]) -> Result<(), StoreError>;
}

/// Events stored as a pretty-printed JSON array.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Event>>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        // An empty file is what an interrupted first run leaves behind.
        if json.trim().is_empty() {
            return Ok(None);
        }
        let events = serde_json::from_str(&json).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(events))
    }

    fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        atomic_write_json(&self.path, &events).map_err(|e| self.io_error(e))?;
        debug!("Saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Events ordered by time, earliest first.
///
/// Events with equal times keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollection {
    events: Vec<Event>,
}

impl EventCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap events as loaded from storage, keeping their stored order.
    pub fn from_stored(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Insert after every event at or before `event.time`. Returns the new index.
    pub fn insert(&mut self, event: Event) -> usize {
        let index = self.events.iter().filter(|e| e.time <= event.time).count();
        self.events.insert(index, event);
        index
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Event, StoreError> {
        if index >= self.events.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.events.len(),
            });
        }
        Ok(self.events.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }
}

/// Load the persisted events, seeding and saving the default event on first run.
pub fn load_or_seed(
    storage: &dyn Storage,
    now: DateTime<Local>,
) -> Result<EventCollection, StoreError> {
    match storage.load()? {
        Some(events) => {
            info!("Loaded {} events", events.len());
            Ok(EventCollection::from_stored(events))
        }
        None => {
            let seed = next_golang_anniversary(now);
            info!("No events stored yet, seeding \"{}\"", seed.name);
            let events = vec![seed];
            storage.save(&events)?;
            Ok(EventCollection::from_stored(events))
        }
    }
}
