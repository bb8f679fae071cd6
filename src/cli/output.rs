use anyhow::Result;
use serde_json::json;

use crate::workflow::RequestOutcome;

/// Print a plain-text representation of the request outcome.
pub(crate) fn print_plain(outcome: &RequestOutcome) {
    match outcome {
        RequestOutcome::Search(results) => {
            if results.is_empty() {
                println!("No results");
                return;
            }
            for result in results {
                println!("{:>5}  {} ({})", result.score, result.record.title, result.record.id);
            }
        }
        RequestOutcome::Fuzzy(results) => {
            if results.is_empty() {
                println!("No results");
                return;
            }
            for result in results {
                println!("{:>5}  {} ({})", result.distance, result.title, result.id);
            }
        }
        RequestOutcome::Filter(results) => {
            if results.is_empty() {
                println!("No results");
                return;
            }
            for record in results {
                println!("{} ({})", record.title, record.id);
            }
        }
        RequestOutcome::Suggest(suggestions) => {
            if suggestions.is_empty() {
                println!("No suggestions");
                return;
            }
            for tool in &suggestions.tools {
                println!("tool      {} ({})", tool.title, tool.id);
            }
            for tag in &suggestions.tags {
                println!("tag       {tag}");
            }
            for category in &suggestions.categories {
                println!("category  {category}");
            }
        }
    }
}

/// Format the request outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &RequestOutcome) -> Result<String> {
    let payload = match outcome {
        RequestOutcome::Search(results) => json!({ "type": "search", "results": results }),
        RequestOutcome::Fuzzy(results) => json!({ "type": "fuzzy", "results": results }),
        RequestOutcome::Filter(results) => json!({ "type": "filter", "results": results }),
        RequestOutcome::Suggest(suggestions) => json!({ "type": "suggestions", "results": suggestions }),
    };

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the request outcome.
pub(crate) fn print_json(outcome: &RequestOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
