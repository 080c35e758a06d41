//! Command protocol types
//!
//! Parsing and wire formatting for the line-oriented command protocol.

mod command;
pub mod wire;

pub use command::{Command, CommandError};
