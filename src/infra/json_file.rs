// Shared JSON file helpers for the file-backed stores.

use crate::core::like_config::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;

/// `<path>.tmp`, the staging file used by [`write_atomic`].
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Read and parse a JSON file. `Ok(None)` when the file doesn't exist.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let text = match fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(serde_json::from_str(&text)?))
}

/// Write the full value to `<path>.tmp`, then rename it over `path`.
///
/// The rename is atomic on the same filesystem, so readers only ever see
/// the previous file or the complete new one.
pub async fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let text = serde_json::to_string_pretty(value)?;
    let staging = temp_path(path);
    fs::write(&staging, text).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}
