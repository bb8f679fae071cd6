//! Catalog loading for the command-line front end.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::ToolRecord;

/// Errors raised while reading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog file '{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a catalog from a JSON file holding an array of tool records.
///
/// # Errors
///
/// Returns a [`CatalogError`] when the file cannot be read or does not parse
/// as a record array.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<ToolRecord>, CatalogError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
        path: display,
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_a_record_array() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"[{{"id": "a", "title": "Pixel Painter", "tags": ["art"]}}]"#
        )
        .expect("write");

        let records = load_catalog(file.path()).expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Pixel Painter");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_catalog("/no/such/catalog.json").expect_err("should fail");
        assert!(err.to_string().contains("/no/such/catalog.json"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");

        let err = load_catalog(file.path()).expect_err("should fail");
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
