use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Configuration exactly as it appears in files and the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawConfig {
    catalog: CatalogSection,
    search: SearchSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    limit: Option<usize>,
    fuzzy_limit: Option<usize>,
}

/// Fully resolved configuration consumed by the workflow.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) catalog_path: PathBuf,
    pub(crate) search_limit: usize,
    pub(crate) fuzzy_limit: usize,
}

impl RawConfig {
    /// Fold CLI arguments over whatever the files and environment provided.
    pub(crate) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(catalog) = &cli.catalog {
            self.catalog.path = Some(catalog.clone());
        }
    }

    /// Produce the final configuration, filling defaults where nothing was
    /// specified.
    pub(crate) fn resolve(self) -> Result<ResolvedConfig> {
        let Some(catalog_path) = self.catalog.path else {
            bail!(
                "no catalog file specified; pass --catalog, set TOOLSCOUT_CATALOG, or set catalog.path in the configuration"
            );
        };

        Ok(ResolvedConfig {
            catalog_path,
            search_limit: self
                .search
                .limit
                .unwrap_or_else(|| toolscout::SearchOptions::default().limit),
            fuzzy_limit: self.search.fuzzy_limit.unwrap_or(toolscout::fuzzy::DEFAULT_LIMIT),
        })
    }
}
