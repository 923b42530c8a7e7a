//! # Application State
//!
//! The stores every command works against.
//!
//! ## Why Multiple Focused Stores?
//! Instead of one monolithic state struct with everything behind a single
//! lock, each concern gets its own store:
//!
//! 1. **Better Separation of Concerns**: each store has a single document
//! 2. **Easier Testing**: commands take `&AppState`, which `in_memory()`
//!    builds without touching the file system
//! 3. **Reduced Contention**: independent stores don't block each other

use cabquote_store::{CatalogStore, PresetStore, QuoteStore, StoreResult, TemplateStore};
use tracing::info;

/// Everything the command layer needs.
#[derive(Debug)]
pub struct AppState {
    pub quotes: QuoteStore,
    pub catalog: CatalogStore,
    pub template: TemplateStore,
    pub presets: PresetStore,
}

impl AppState {
    /// Opens all stores against the platform app-data directory
    /// (respecting the `CABQUOTE_DATA_DIR` override).
    pub fn open() -> StoreResult<Self> {
        let dir = cabquote_store::storage::data_dir()?;
        info!(dir = %dir.display(), "opening data stores");
        Ok(AppState {
            quotes: QuoteStore::open(&dir)?,
            catalog: CatalogStore::with_seed(),
            template: TemplateStore::open(&dir)?,
            presets: PresetStore::open(&dir)?,
        })
    }

    /// Non-persistent state with the seeded catalog and stock template.
    /// Used by tests and by the preview when no data directory is usable.
    pub fn in_memory() -> Self {
        AppState {
            quotes: QuoteStore::in_memory(),
            catalog: CatalogStore::with_seed(),
            template: TemplateStore::in_memory(),
            presets: PresetStore::in_memory(),
        }
    }
}
