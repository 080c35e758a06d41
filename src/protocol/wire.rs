//! Wire format for the command protocol
//!
//! Record lines are pipe-delimited: `id|name|date|time|seats`. There is no
//! escaping for `|` inside name, date or time; a field containing the
//! separator produces a line consumers cannot split unambiguously. Existing
//! consumers split on `|` positionally, so the format is frozen as-is and
//! this stays a documented limitation.

use crate::types::EventRecord;

/// Token returned when an id has no live record.
pub const NOT_FOUND: &str = "NOTFOUND";

/// Token returned by successful modify, delete and generate commands.
pub const OK: &str = "OK";

/// Line returned by the display commands on an empty store.
pub const NO_EVENTS: &str = "No events.";

/// Render one record as a pipe-delimited line (no trailing newline).
pub fn record_line(record: &EventRecord) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        record.id, record.name, record.date, record.time, record.seats
    )
}

/// Render a record list for the display commands.
///
/// One record per line; an empty list renders as [`NO_EVENTS`] so callers
/// never have to disambiguate empty output.
pub fn render_list(records: &[EventRecord]) -> String {
    if records.is_empty() {
        return NO_EVENTS.to_string();
    }
    records
        .iter()
        .map(record_line)
        .collect::<Vec<_>>()
        .join("\n")
}
