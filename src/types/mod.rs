//! Core data types shared between the index, the engines and the worker
//! protocol.

mod record;
mod results;

pub use record::ToolRecord;
pub use results::{FuzzyMatch, ScoredTool, Suggestions, ToolSuggestion};
