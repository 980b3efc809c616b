use crate::error::ExportError;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_WORKFLOW_FILENAME: &str = "google-zoho-calendar-sync.json";

/// Saves any serializable value as pretty-printed UTF-8 JSON.
///
/// Writes to `path`, or to [`DEFAULT_WORKFLOW_FILENAME`] in the working directory,
/// and returns the path written. Host failures are passed through untouched.
pub fn download<T: Serialize + ?Sized>(
    document: &T,
    path: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_WORKFLOW_FILENAME));
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;
    write_text_file(path, &json)?;
    info!(path = %path.display(), bytes = json.len(), "Saved workflow");
    Ok(path.to_path_buf())
}

/// Creates or truncates `path` and writes `content` to it.
pub fn write_text_file(path: &Path, content: &str) -> Result<(), ExportError> {
    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(path).map_err(io_err)?;
    file.write_all(content.as_bytes()).map_err(io_err)?;
    Ok(())
}
