//! Core crate exports for the `toolscout` catalog search worker.
//!
//! The engine runs on a dedicated thread behind a command/event channel pair:
//! build an index with [`Command::Init`], then issue searches, fuzzy lookups,
//! facet filters and autocomplete requests, each tagged with a caller-chosen
//! request id that the matching event echoes back.

pub mod app_dirs;
pub mod catalog;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod logging;
pub mod score;
pub mod suggest;
pub mod types;
pub mod worker;

pub use catalog::{CatalogError, load_catalog};
pub use filter::{FilterSpec, filter};
pub use fuzzy::{fuzzy_search, levenshtein};
pub use index::{CatalogIndex, IndexedEntry};
pub use score::{SearchOptions, search};
pub use suggest::suggestions;
pub use types::{FuzzyMatch, ScoredTool, Suggestions, ToolRecord, ToolSuggestion};
pub use worker::{Command, Event, RequestId, spawn};
