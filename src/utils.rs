use crate::DppError;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a local JSON file. Both a missing file and malformed content are
/// reported as `ConfigReadError`.
pub(crate) async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, DppError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DppError::ConfigReadError {
            path: path.to_path_buf(),
            source,
        })?;

    let value = serde_json::from_str(&content).map_err(|error| DppError::ConfigReadError {
        path: path.to_path_buf(),
        source: error.into(),
    })?;

    return Ok(value);
}
