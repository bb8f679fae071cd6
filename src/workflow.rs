use std::sync::mpsc::{Receiver, Sender};

use anyhow::{Context, Result, bail};
use tracing::debug;

use toolscout::worker::{Command, Event, RequestId};
use toolscout::{FilterSpec, FuzzyMatch, ScoredTool, SearchOptions, Suggestions, ToolRecord};

use crate::cli::CliCommand;
use crate::settings::ResolvedConfig;

/// Result payload of one CLI request, ready for rendering.
#[derive(Debug)]
pub(crate) enum RequestOutcome {
    Search(Vec<ScoredTool>),
    Fuzzy(Vec<FuzzyMatch>),
    Filter(Vec<ToolRecord>),
    Suggest(Suggestions),
}

/// Drives one request through the background worker.
pub(crate) struct SearchWorkflow {
    command_tx: Sender<Command>,
    event_rx: Receiver<Event>,
    next_request_id: RequestId,
}

impl SearchWorkflow {
    /// Spawn the worker and index the given catalog.
    pub(crate) fn start(records: Vec<ToolRecord>) -> Result<Self> {
        let (command_tx, event_rx) = toolscout::spawn();

        match event_rx.recv().context("search worker exited on startup")? {
            Event::WorkerReady => {}
            other => bail!("unexpected startup event from search worker: {other:?}"),
        }

        command_tx
            .send(Command::Init { tools: records })
            .context("search worker dropped its command channel")?;
        match event_rx.recv().context("search worker exited during indexing")? {
            Event::IndexReady { count } => debug!(count, "catalog indexed"),
            other => bail!("unexpected indexing event from search worker: {other:?}"),
        }

        Ok(Self {
            command_tx,
            event_rx,
            next_request_id: 0,
        })
    }

    /// Execute the CLI command against the worker and wait for its event.
    pub(crate) fn run(mut self, command: CliCommand, config: &ResolvedConfig) -> Result<RequestOutcome> {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        let command = match command {
            CliCommand::Search { query, limit } => Command::Search {
                request_id,
                query,
                options: SearchOptions {
                    limit: limit.unwrap_or(config.search_limit),
                },
            },
            CliCommand::Fuzzy { query, limit } => Command::FuzzySearch {
                request_id,
                query,
                limit: Some(limit.unwrap_or(config.fuzzy_limit)),
            },
            CliCommand::Filter {
                category,
                complexity,
                featured,
                polished,
                tags,
            } => Command::Filter {
                request_id,
                filters: FilterSpec {
                    category,
                    complexity,
                    featured,
                    polished,
                    tags,
                },
            },
            CliCommand::Suggest { partial } => Command::Suggestions {
                request_id,
                partial,
            },
        };

        self.command_tx
            .send(command)
            .context("search worker dropped its command channel")?;

        let outcome = self.wait_for(request_id)?;
        let _ = self.command_tx.send(Command::Shutdown);
        Ok(outcome)
    }

    /// Receive events until one carries the expected request id.
    ///
    /// Correlation is by id, never by arrival order; unrelated events are
    /// skipped rather than treated as errors.
    fn wait_for(&self, expected: RequestId) -> Result<RequestOutcome> {
        loop {
            let event = self
                .event_rx
                .recv()
                .context("search worker exited before answering")?;
            let outcome = match event {
                Event::SearchResults {
                    request_id,
                    results,
                } if request_id == expected => RequestOutcome::Search(results),
                Event::FuzzyResults {
                    request_id,
                    results,
                } if request_id == expected => RequestOutcome::Fuzzy(results),
                Event::FilterResults {
                    request_id,
                    results,
                } if request_id == expected => RequestOutcome::Filter(results),
                Event::SuggestionResults {
                    request_id,
                    results,
                } if request_id == expected => RequestOutcome::Suggest(results),
                _ => continue,
            };
            return Ok(outcome);
        }
    }
}
