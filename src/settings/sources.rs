use std::env;
use std::path::PathBuf;

use anyhow::Result;
use config::{Config, File};

use toolscout::app_dirs;

use crate::cli::CliArgs;

/// File name looked up inside the platform config directory.
const CONFIG_DIR_FILE: &str = "config.toml";
/// Project-local file names consulted in the working directory, lowest
/// precedence first.
const LOCAL_FILES: [&str; 2] = [".toolscout.toml", "toolscout.toml"];
/// Flat environment shortcut for the catalog path, friendlier than
/// `TOOLSCOUT__CATALOG__PATH` when pointing a shell session at one catalog.
const CATALOG_ENV: &str = "TOOLSCOUT_CATALOG";

/// Build a [`Config`] by layering sources, lowest precedence first: default
/// files, explicit `--config` files, `TOOLSCOUT__`-prefixed variables, then
/// the [`CATALOG_ENV`] shortcut. CLI flags are folded in later, on the
/// deserialized form.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("toolscout")
            .separator("__")
            .try_parsing(true),
    );

    if let Some(catalog) = catalog_from_env() {
        builder = builder.set_override("catalog.path", catalog)?;
    }

    Ok(builder.build()?)
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join(CONFIG_DIR_FILE));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.extend(LOCAL_FILES.iter().map(|name| current_dir.join(name)));
    }

    files
}

/// Read the catalog-path shortcut, treating a blank value as unset.
fn catalog_from_env() -> Option<String> {
    let value = env::var(CATALOG_ENV).ok()?;
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_files_end_with_working_directory_variants() {
        let files = default_config_files();
        let names: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        for local in LOCAL_FILES {
            assert!(names.contains(&local.to_string()));
        }
        // Working-directory files outrank the config-dir file, so they come
        // last in the source list.
        assert_eq!(names.last().map(String::as_str), Some("toolscout.toml"));
    }

    #[test]
    fn catalog_shortcut_ignores_blank_values() {
        // set_var is unsafe in edition 2024; no other test touches this
        // variable.
        unsafe { env::set_var(CATALOG_ENV, "   ") };
        assert_eq!(catalog_from_env(), None);

        unsafe { env::set_var(CATALOG_ENV, "tools.json") };
        assert_eq!(catalog_from_env(), Some("tools.json".to_string()));
        unsafe { env::remove_var(CATALOG_ENV) };
    }
}
