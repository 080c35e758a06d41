//! Event scheduler binary entry point
//!
//! With arguments, serves one command and exits (the store is loaded from
//! and persisted to the events file around the call). Without arguments,
//! runs the line-oriented session loop over stdin.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use event_scheduler::server::{run_once, CommandServer};
use event_scheduler::store::EventScheduler;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let scheduler = Arc::new(EventScheduler::new());

    if !args.is_empty() {
        return ExitCode::from(run_once(&scheduler, &args));
    }

    // Mutations persist as they happen, so an interrupt loses nothing.
    let events_path = scheduler.file_path().map(str::to_string);
    if let Err(e) = ctrlc::set_handler(move || {
        match &events_path {
            Some(path) => eprintln!("[scheduler] interrupted; events saved in {}", path),
            None => eprintln!("[scheduler] interrupted"),
        }
        std::process::exit(0);
    }) {
        eprintln!("[scheduler] could not install Ctrl+C handler: {}", e);
    }

    let mut server = CommandServer::new(scheduler);
    match server.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[scheduler] session error: {}", e);
            ExitCode::FAILURE
        }
    }
}
