//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point: it layers default configuration files,
//! explicit `--config` files, environment variables and CLI overrides into a
//! [`ResolvedConfig`] that the workflow consumes.

mod raw;
mod sources;

use anyhow::{Result, anyhow};

use crate::cli::CliArgs;
use raw::RawConfig;
use sources::build_config;

pub(crate) use raw::ResolvedConfig;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}
