//! Background search worker.
//!
//! A single thread owns the mutable [`CatalogIndex`] and services commands in
//! arrival order, each one to completion, so no command can ever observe a
//! half-built index. There is no cancellation and no timeout: once a command
//! is accepted its scan runs to the end, and slow-caller policy lives with
//! the caller.
//!
//! Correlation is by the `request_id` the caller attaches to each query
//! command; the worker echoes it back unchanged. Callers must match events by
//! that id, not by arrival order.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use crate::filter::{FilterSpec, filter};
use crate::fuzzy::{self, fuzzy_search};
use crate::index::CatalogIndex;
use crate::score::{SearchOptions, search};
use crate::suggest::suggestions;
use crate::types::{FuzzyMatch, ScoredTool, Suggestions, ToolRecord};

/// Opaque token chosen by the caller to correlate a command with its event.
pub type RequestId = u64;

/// Commands accepted by the worker.
#[derive(Debug)]
pub enum Command {
    /// Replace the index wholesale with one built from `tools`.
    Init { tools: Vec<ToolRecord> },
    Search {
        request_id: RequestId,
        query: String,
        options: SearchOptions,
    },
    FuzzySearch {
        request_id: RequestId,
        query: String,
        limit: Option<usize>,
    },
    Filter {
        request_id: RequestId,
        filters: FilterSpec,
    },
    Suggestions {
        request_id: RequestId,
        partial: String,
    },
    /// Discard the index; queries afterwards return empty results.
    Clear,
    /// Exit the worker loop. Emits no event.
    Shutdown,
}

/// Events emitted by the worker.
#[derive(Debug)]
pub enum Event {
    /// Emitted once on startup, before any command is read.
    WorkerReady,
    IndexReady {
        count: usize,
    },
    SearchResults {
        request_id: RequestId,
        results: Vec<ScoredTool>,
    },
    FuzzyResults {
        request_id: RequestId,
        results: Vec<FuzzyMatch>,
    },
    FilterResults {
        request_id: RequestId,
        results: Vec<ToolRecord>,
    },
    SuggestionResults {
        request_id: RequestId,
        results: Suggestions,
    },
    Cleared,
}

/// Start the worker thread and return its command/event channels.
///
/// The worker runs until it receives [`Command::Shutdown`] or the command
/// sender is dropped. Query commands arriving before the first
/// [`Command::Init`] answer with empty result sets.
#[must_use]
pub fn spawn() -> (Sender<Command>, Receiver<Event>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (event_tx, event_rx) = mpsc::channel();

    thread::spawn(move || run(&command_rx, &event_tx));

    (command_tx, event_rx)
}

fn run(command_rx: &Receiver<Command>, event_tx: &Sender<Event>) {
    let mut index: Option<CatalogIndex> = None;

    if event_tx.send(Event::WorkerReady).is_err() {
        return;
    }
    debug!("search worker ready");

    while let Ok(command) = command_rx.recv() {
        let event = match command {
            Command::Init { tools } => {
                let built = CatalogIndex::build(&tools);
                let count = built.len();
                debug!(count, "catalog index rebuilt");
                index = Some(built);
                Event::IndexReady { count }
            }
            Command::Search {
                request_id,
                query,
                options,
            } => {
                let results = match &index {
                    Some(index) => search(index, &query, &options),
                    None => Vec::new(),
                };
                Event::SearchResults {
                    request_id,
                    results,
                }
            }
            Command::FuzzySearch {
                request_id,
                query,
                limit,
            } => {
                let limit = limit.unwrap_or(fuzzy::DEFAULT_LIMIT);
                let results = match &index {
                    Some(index) => fuzzy_search(index, &query, limit),
                    None => Vec::new(),
                };
                Event::FuzzyResults {
                    request_id,
                    results,
                }
            }
            Command::Filter {
                request_id,
                filters,
            } => {
                let results = match &index {
                    Some(index) => filter(index, &filters),
                    None => Vec::new(),
                };
                Event::FilterResults {
                    request_id,
                    results,
                }
            }
            Command::Suggestions {
                request_id,
                partial,
            } => {
                let results = match &index {
                    Some(index) => suggestions(index, &partial),
                    None => Suggestions::default(),
                };
                Event::SuggestionResults {
                    request_id,
                    results,
                }
            }
            Command::Clear => {
                index = None;
                debug!("catalog index cleared");
                Event::Cleared
            }
            Command::Shutdown => break,
        };

        if event_tx.send(event).is_err() {
            break;
        }
    }

    debug!("search worker stopped");
}
