//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::{Cell, RefCell};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeZone};

use crate::core::clock::Clock;
use crate::core::event::Event;
use crate::core::state::App;
use crate::core::store::{EventCollection, Storage, StoreError};

/// Wall clock used by test apps: 2025-06-15 around midday, whatever the zone.
pub const TEST_NOW: i64 = 1_750_000_000;

/// A clock that only moves when told to.
pub struct FixedClock {
    now: AtomicI64,
}

impl FixedClock {
    pub fn at(epoch_seconds: i64) -> Self {
        Self {
            now: AtomicI64::new(epoch_seconds),
        }
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        Local
            .timestamp_opt(self.now.load(Ordering::SeqCst), 0)
            .single()
            .unwrap()
    }
}

/// In-memory storage that records what was saved.
#[derive(Default)]
pub struct MemoryStorage {
    stored: RefCell<Option<Vec<Event>>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStorage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            stored: RefCell::new(Some(events)),
            ..Default::default()
        }
    }

    /// Make every following save fail with an I/O error.
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }

    pub fn saved(&self) -> Option<Vec<Event>> {
        self.stored.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Event>>, StoreError> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        if self.fail_saves.get() {
            return Err(StoreError::Io {
                path: "memory".into(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.stored.borrow_mut() = Some(events.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Creates a test App with no events and a clock at `TEST_NOW`.
pub fn test_app() -> App {
    test_app_with(&[])
}

/// Creates a test App holding `(name, time)` events, inserted in order.
pub fn test_app_with(events: &[(&str, i64)]) -> App {
    test_app_with_clock(events, Arc::new(FixedClock::at(TEST_NOW)))
}

pub fn test_app_with_clock(events: &[(&str, i64)], clock: Arc<FixedClock>) -> App {
    let mut collection = EventCollection::new();
    for (name, time) in events {
        collection.insert(Event::new(*name, *time));
    }
    App::new(collection, clock)
}
