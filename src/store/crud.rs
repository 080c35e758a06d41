//! CRUD operations for the event store

use crate::types::{EventRecord, StoreError, StoreResult};

use super::EventScheduler;

/// Insert a new event (holds the store lock for the whole operation).
pub fn insert(
    s: &EventScheduler,
    name: String,
    date: String,
    time: String,
    seats: u32,
) -> StoreResult<u64> {
    let mut chain = s.chain.lock();
    let id = chain.push_back(name, date, time, seats);
    s.persist_to_file(&chain)?;
    Ok(id)
}

/// Look up an event by id; the returned record is a snapshot copy.
pub fn find(s: &EventScheduler, id: u64) -> StoreResult<EventRecord> {
    let chain = s.chain.lock();
    chain.get(id).cloned().ok_or(StoreError::NotFound { id })
}

/// Replace all four mutable fields of an event, or nothing on an unknown id.
pub fn update(
    s: &EventScheduler,
    id: u64,
    name: String,
    date: String,
    time: String,
    seats: u32,
) -> StoreResult<()> {
    let mut chain = s.chain.lock();
    if !chain.update(id, name, date, time, seats) {
        return Err(StoreError::NotFound { id });
    }
    s.persist_to_file(&chain)?;
    Ok(())
}

/// Splice an event out of the chain; the store is untouched on an unknown id.
pub fn remove(s: &EventScheduler, id: u64) -> StoreResult<EventRecord> {
    let mut chain = s.chain.lock();
    let record = chain.remove(id).ok_or(StoreError::NotFound { id })?;
    s.persist_to_file(&chain)?;
    Ok(record)
}

/// Snapshot of the chain in insertion order.
pub fn events_forward(s: &EventScheduler) -> Vec<EventRecord> {
    s.chain.lock().iter().cloned().collect()
}

/// Snapshot of the chain in reverse insertion order.
pub fn events_reverse(s: &EventScheduler) -> Vec<EventRecord> {
    s.chain.lock().iter_rev().cloned().collect()
}
