//! Event record type

use serde::{Deserialize, Serialize};

/// One scheduled event.
///
/// The `id` is assigned by the store at insertion time and never changes;
/// `name`, `date`, `time` and `seats` are replaced wholesale by a
/// successful update. `date` and `time` are opaque caller-supplied strings:
/// the store neither parses nor validates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub seats: u32,
}

impl EventRecord {
    /// Create a record with an already-assigned id.
    pub fn new(id: u64, name: String, date: String, time: String, seats: u32) -> Self {
        Self {
            id,
            name,
            date,
            time,
            seats,
        }
    }
}
