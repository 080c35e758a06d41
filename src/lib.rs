//! Event Scheduler
//!
//! An event scheduling store over an arena-backed doubly linked chain,
//! driven by a line-oriented command protocol.
//!
//! # Features
//!
//! - **Doubly traversable**: O(1) append, O(1) splice-out, and forward and
//!   reverse enumeration over the same live set
//! - **Stable ids**: monotonic ids assigned at insert, never reused, even
//!   after deletion
//! - **Thread-safe**: a single store lock serializes every operation
//! - **Durable**: JSON-lines persistence with atomic file replacement
//! - **Wire compatible**: pipe-delimited record lines, `NOTFOUND`/`OK`
//!   tokens, `No events.` for the empty store
//!
//! # Modules
//!
//! - `types`: core data structures (`EventRecord`, `StoreError`)
//! - `store`: the chain and the `EventScheduler` facade
//! - `protocol`: command parsing and wire formatting
//! - `server`: the stdio command shell
//! - `utils`: utility functions (atomic file writes)
//!
//! # Example
//!
//! ```
//! use event_scheduler::EventScheduler;
//!
//! let store = EventScheduler::in_memory();
//! let id = store.insert("Standup".into(), "2024-01-01".into(), "10:00".into(), 5)?;
//! assert_eq!(store.find(id)?.name, "Standup");
//! assert_eq!(store.events_reverse().len(), 1);
//! # Ok::<(), event_scheduler::StoreError>(())
//! ```

pub mod protocol;
pub mod server;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use protocol::{Command, CommandError};
pub use server::CommandServer;
pub use store::{EventChain, EventScheduler};
pub use types::{EventRecord, StoreError, StoreResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
