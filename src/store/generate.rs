//! Bulk synthetic event generation

use rand::Rng;

use crate::types::StoreResult;

use super::EventScheduler;

/// Name stems for synthetic events; a numeric suffix keeps them varied.
const SAMPLE_NAMES: [&str; 10] = [
    "Meeting",
    "Workshop",
    "Conference",
    "Training",
    "Seminar",
    "Webinar",
    "Party",
    "Lunch",
    "Dinner",
    "Interview",
];

const SAMPLE_DATES: [&str; 5] = [
    "01/12/2024",
    "05/12/2024",
    "10/12/2024",
    "15/12/2024",
    "20/12/2024",
];

const SAMPLE_TIMES: [&str; 5] = ["09:00", "10:30", "12:00", "14:00", "15:30"];

/// Insert `count` synthetic events using the thread-local random source.
pub fn generate(s: &EventScheduler, count: usize) -> StoreResult<Vec<u64>> {
    generate_with(s, count, &mut rand::rng())
}

/// Insert `count` synthetic events drawn from `rng`.
///
/// Equivalent in effect to `count` sequential inserts: the assigned ids
/// are consecutive and the records are appended in generation order.
/// `count == 0` inserts nothing.
pub fn generate_with<R: Rng>(
    s: &EventScheduler,
    count: usize,
    rng: &mut R,
) -> StoreResult<Vec<u64>> {
    let mut chain = s.chain.lock();
    let mut ids = Vec::with_capacity(count);

    for _ in 0..count {
        let name = format!(
            "{} {}",
            SAMPLE_NAMES[rng.random_range(0..SAMPLE_NAMES.len())],
            rng.random_range(1..=100u32),
        );
        let date = SAMPLE_DATES[rng.random_range(0..SAMPLE_DATES.len())].to_string();
        let time = SAMPLE_TIMES[rng.random_range(0..SAMPLE_TIMES.len())].to_string();
        let seats = rng.random_range(10..=109u32);
        ids.push(chain.push_back(name, date, time, seats));
    }

    if !ids.is_empty() {
        s.persist_to_file(&chain)?;
    }
    Ok(ids)
}
