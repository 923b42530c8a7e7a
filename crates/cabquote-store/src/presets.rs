//! # Preset Store
//!
//! Externally configurable defaults (tax rate, default dimensions), backed
//! by `presets.json`.
//!
//! ## Staleness Contract
//! The preset tax rate feeds the INTERNAL quote view, and that view must
//! re-fetch it on every render; `get` therefore always returns a fresh clone
//! of the current document. The client-facing document never consults this
//! store at all (its 13% rate is fixed in cabquote-core), so editing the
//! preset here changes staff-visible totals only.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use cabquote_core::types::PresetValues;

use crate::error::StoreResult;
use crate::storage;

/// File name of the presets document inside the data directory.
const PRESETS_FILE: &str = "presets.json";

/// Local store of the single preset-values document.
#[derive(Debug)]
pub struct PresetStore {
    path: Option<PathBuf>,
    values: Mutex<PresetValues>,
}

impl PresetStore {
    /// A non-persistent store with default presets (13% tax).
    pub fn in_memory() -> Self {
        PresetStore {
            path: None,
            values: Mutex::new(PresetValues::default()),
        }
    }

    /// Opens the store backed by `presets.json` in the given directory,
    /// falling back to defaults when no document exists yet.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        let path = dir.join(PRESETS_FILE);
        let values = storage::load_json(&path)?.unwrap_or_default();
        Ok(PresetStore {
            path: Some(path),
            values: Mutex::new(values),
        })
    }

    /// Current preset values, as a fresh clone. Call this per render; do not
    /// hold on to the result across renders.
    pub fn get(&self) -> PresetValues {
        self.values
            .lock()
            .expect("preset store mutex poisoned")
            .clone()
    }

    /// Replaces the preset values and persists the document.
    pub fn update(&self, values: PresetValues) -> StoreResult<()> {
        debug!(tax_rate = values.tax_rate, "updating presets");
        let mut current = self.values.lock().expect("preset store mutex poisoned");
        *current = values;
        match &self.path {
            Some(path) => storage::save_json(path, &*current),
            None => Ok(()),
        }
    }
}

impl Default for PresetStore {
    fn default() -> Self {
        PresetStore::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = PresetStore::in_memory();
        let values = store.get();
        assert_eq!(values.tax_rate, 13.0);
        assert_eq!(values.default_width, 24.0);
    }

    #[test]
    fn test_update_visible_on_next_fetch() {
        let store = PresetStore::in_memory();
        let mut values = store.get();
        values.tax_rate = 5.0;
        store.update(values).unwrap();
        assert_eq!(store.get().tax_rate, 5.0);
    }
}
