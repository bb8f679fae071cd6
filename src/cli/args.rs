use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "toolscout",
    version,
    about = "Search a local-first tool catalog from the command line"
)]
/// Command-line arguments accepted by the `toolscout` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TOOLSCOUT_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'C',
        long,
        value_name = "FILE",
        help = "Catalog JSON file to index (default: taken from configuration)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Output format for results"
    )]
    pub(crate) output: OutputFormat,
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// How results should be rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CliCommand {
    /// Weighted free-text search over titles, tags, categories and body text.
    Search {
        query: String,
        #[arg(short, long, help = "Maximum number of results")]
        limit: Option<usize>,
    },
    /// Edit-distance lookup for near-miss queries.
    Fuzzy {
        query: String,
        #[arg(short, long, help = "Maximum number of results")]
        limit: Option<usize>,
    },
    /// Narrow the catalog by exact-match facets.
    Filter {
        #[arg(long, help = "Keep entries in this category")]
        category: Option<String>,
        #[arg(long, help = "Keep entries with this complexity label")]
        complexity: Option<String>,
        #[arg(long, help = "Keep only featured entries")]
        featured: bool,
        #[arg(long, help = "Keep only polished entries")]
        polished: bool,
        #[arg(long = "tag", value_name = "TAG", help = "Keep entries carrying any of these tags")]
        tags: Vec<String>,
    },
    /// Autocomplete candidates for a partial input.
    Suggest { partial: String },
}
