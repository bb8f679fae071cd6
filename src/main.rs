mod cli;
mod settings;
mod workflow;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    toolscout::logging::initialize();

    let cli = parse_cli();
    let config = settings::load(&cli)?;

    let records = toolscout::load_catalog(&config.catalog_path)
        .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;

    let workflow = SearchWorkflow::start(records)?;
    let outcome = workflow.run(cli.command, &config)?;

    match cli.output {
        OutputFormat::Plain => print_plain(&outcome),
        OutputFormat::Json => print_json(&outcome)?,
    }

    Ok(())
}
