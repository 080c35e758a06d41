//! Command dispatch shell
//!
//! The stateless boundary between the wire protocol and the store: it
//! parses commands, invokes the scheduler, and renders replies. One-shot
//! mode serves a single argv command; session mode reads `|`-separated
//! command lines from stdin until EOF.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::sync::Arc;

use crate::protocol::{wire, Command};
use crate::store::EventScheduler;
use crate::types::{StoreError, StoreResult};

const USAGE: &str = "\
usage: scheduler <command> [args]
  insert <name> <date> <time> <seats>
  search <id>
  modify <id> <name> <date> <time> <seats>
  delete <id>
  generate <count>
  display_forward
  display_reverse
  count

With no command, scheduler reads |-separated command lines from stdin.";

/// Line-oriented command server over stdio.
pub struct CommandServer {
    scheduler: Arc<EventScheduler>,
    reader: BufReader<io::Stdin>,
    writer: BufWriter<io::Stdout>,
}

impl CommandServer {
    /// Create a server around an existing scheduler.
    pub fn new(scheduler: Arc<EventScheduler>) -> Self {
        Self {
            scheduler,
            reader: BufReader::new(io::stdin()),
            writer: BufWriter::new(io::stdout()),
        }
    }

    /// Run the session loop (blocking).
    ///
    /// One command per line, fields separated by `|`, blank lines skipped,
    /// reply flushed before the next read.
    pub fn run(&mut self) -> StoreResult<()> {
        let mut line = String::new();
        while self.reader.read_line(&mut line)? > 0 {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                let reply = self.handle_line(trimmed);
                writeln!(self.writer, "{}", reply)?;
                self.writer.flush()?;
            }
            line.clear();
        }
        Ok(())
    }

    /// Handle a single session line.
    fn handle_line(&self, line: &str) -> String {
        let fields: Vec<String> = line.split('|').map(|f| f.trim().to_string()).collect();
        match Command::parse(&fields) {
            Ok(command) => execute(&self.scheduler, &command),
            Err(e) => format!("ERR {}", e),
        }
    }
}

/// Serve a single argv command: parse, execute, print the reply.
///
/// Malformed commands are reported on stderr with a nonzero exit code, so
/// stdout carries only well-formed replies.
pub fn run_once(scheduler: &EventScheduler, args: &[String]) -> u8 {
    match Command::parse(args) {
        Ok(command) => {
            println!("{}", execute(scheduler, &command));
            0
        }
        Err(e) => {
            eprintln!("[scheduler] {}", e);
            eprintln!("{}", USAGE);
            2
        }
    }
}

/// Execute a command against the store and render the wire reply.
pub fn execute(scheduler: &EventScheduler, command: &Command) -> String {
    match command {
        Command::Insert {
            name,
            date,
            time,
            seats,
        } => match scheduler.insert(name.clone(), date.clone(), time.clone(), *seats) {
            Ok(id) => id.to_string(),
            Err(e) => report_store_error(e),
        },
        Command::Search { id } => match scheduler.find(*id) {
            Ok(record) => wire::record_line(&record),
            Err(StoreError::NotFound { .. }) => wire::NOT_FOUND.to_string(),
            Err(e) => report_store_error(e),
        },
        Command::Modify {
            id,
            name,
            date,
            time,
            seats,
        } => match scheduler.update(*id, name.clone(), date.clone(), time.clone(), *seats) {
            Ok(()) => wire::OK.to_string(),
            Err(StoreError::NotFound { .. }) => wire::NOT_FOUND.to_string(),
            Err(e) => report_store_error(e),
        },
        Command::Delete { id } => match scheduler.remove(*id) {
            Ok(_) => wire::OK.to_string(),
            Err(StoreError::NotFound { .. }) => wire::NOT_FOUND.to_string(),
            Err(e) => report_store_error(e),
        },
        Command::Generate { count } => match scheduler.generate(*count) {
            Ok(_) => wire::OK.to_string(),
            Err(e) => report_store_error(e),
        },
        Command::DisplayForward => wire::render_list(&scheduler.events_forward()),
        Command::DisplayReverse => wire::render_list(&scheduler.events_reverse()),
        Command::Count => scheduler.len().to_string(),
    }
}

/// Operational failures (I/O, serialization) are not part of the wire
/// vocabulary; log the detail to stderr and keep the reply line-shaped.
fn report_store_error(e: StoreError) -> String {
    eprintln!("[scheduler] store error: {}", e);
    format!("ERR {}", e)
}
