//! # Storage Helpers
//!
//! App-data directory resolution and JSON document read/write.
//!
//! ## Platform-Specific Paths
//! - **macOS**: `~/Library/Application Support/com.cabinetquote.desk/`
//! - **Windows**: `%APPDATA%\cabinetquote\desk\data\`
//! - **Linux**: `~/.local/share/cabinetquote-desk/`
//!
//! ## Development Override
//! Set `CABQUOTE_DATA_DIR` to point the stores at a custom directory, e.g.
//! a scratch folder for manual testing.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Resolves (and creates) the directory holding the local JSON documents.
pub fn data_dir() -> StoreResult<PathBuf> {
    // Check for override
    if let Ok(path) = std::env::var("CABQUOTE_DATA_DIR") {
        let dir = PathBuf::from(path);
        fs::create_dir_all(&dir)?;
        return Ok(dir);
    }

    let proj_dirs = ProjectDirs::from("com", "cabinetquote", "desk").ok_or_else(|| {
        StoreError::Storage("could not determine app data directory".to_string())
    })?;

    let dir = proj_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Loads a JSON document, returning `None` when the file doesn't exist yet.
///
/// A file that exists but fails to parse is a [`StoreError::Corrupt`]; the
/// caller decides whether to fall back to defaults or surface the error.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let text = fs::read_to_string(path)?;
    let value = serde_json::from_str(&text).map_err(|e| StoreError::Corrupt {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    debug!(path = %path.display(), "loaded document");
    Ok(Some(value))
}

/// Writes a JSON document, pretty-printed so hand inspection stays possible.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::Corrupt {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    fs::write(path, json)?;
    debug!(path = %path.display(), "saved document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: u32,
    }

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cabquote-test-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let path = scratch_file("missing.json");
        let loaded: Option<Doc> = load_json(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = scratch_file("doc.json");
        let doc = Doc {
            name: "quotes".to_string(),
            count: 3,
        };
        save_json(&path, &doc).unwrap();
        let loaded: Option<Doc> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn test_garbage_file_is_corrupt_not_panic() {
        let path = scratch_file("garbage.json");
        fs::write(&path, "not json at all {").unwrap();
        let loaded: StoreResult<Option<Doc>> = load_json(&path);
        assert!(matches!(loaded, Err(StoreError::Corrupt { .. })));
    }
}
