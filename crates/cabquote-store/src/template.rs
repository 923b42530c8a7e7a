//! # Template Store
//!
//! Holds the template settings that drive client-document assembly, backed
//! by `template.json`.
//!
//! `get` hands out a fresh clone on every call: the renderer is contractually
//! re-configured per render, never from a cached copy.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use cabquote_core::template::TemplateSettings;

use crate::error::StoreResult;
use crate::storage;

/// File name of the template document inside the data directory.
const TEMPLATE_FILE: &str = "template.json";

/// Local store of the single template-settings document.
#[derive(Debug)]
pub struct TemplateStore {
    path: Option<PathBuf>,
    settings: Mutex<TemplateSettings>,
}

impl TemplateStore {
    /// A non-persistent store seeded with the stock template (tests,
    /// previews).
    pub fn in_memory() -> Self {
        TemplateStore {
            path: None,
            settings: Mutex::new(TemplateSettings::default()),
        }
    }

    /// Opens the store backed by `template.json` in the given directory.
    /// Falls back to the stock template when no document exists yet.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        let path = dir.join(TEMPLATE_FILE);
        let settings = storage::load_json(&path)?.unwrap_or_default();
        Ok(TemplateStore {
            path: Some(path),
            settings: Mutex::new(settings),
        })
    }

    /// Current settings, as a fresh clone.
    pub fn get(&self) -> TemplateSettings {
        self.settings
            .lock()
            .expect("template store mutex poisoned")
            .clone()
    }

    /// Replaces the settings and persists the document.
    pub fn update(&self, settings: TemplateSettings) -> StoreResult<()> {
        debug!("updating template settings");
        let mut current = self.settings.lock().expect("template store mutex poisoned");
        *current = settings;
        match &self.path {
            Some(path) => storage::save_json(path, &*current),
            None => Ok(()),
        }
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        TemplateStore::in_memory()
    }
}
