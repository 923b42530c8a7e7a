//! # Quote Store
//!
//! List, fetch, save, and delete quotes against the local `quotes.json`
//! document.
//!
//! ## Store Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Quote Store Operations                              │
//! │                                                                         │
//! │  Frontend Action          Desk Command            Store Change          │
//! │  ───────────────          ────────────            ────────────          │
//! │                                                                         │
//! │  Open quote list ────────► list_quotes() ───────► (read only)          │
//! │                                                                         │
//! │  Open a quote ───────────► get_quote() ─────────► (read only)          │
//! │                                                                         │
//! │  Save from builder ──────► save_quote() ────────► upsert + snapshot    │
//! │                                                    total + write file   │
//! │                                                                         │
//! │  Click Delete ───────────► delete_quote() ──────► remove + write file  │
//! │                                                                         │
//! │  NOTE: Reads serve from memory; every mutation rewrites the document.   │
//! │        This mirrors the local-storage semantics the app started with.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Total
//! `save` recomputes `quote.total` from the line items on every write. The
//! client-facing document renders from this snapshot, so keeping it in sync
//! here is what makes that path honest.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use cabquote_core::pricing;
use cabquote_core::types::{Quote, QuoteStatus};

use crate::error::{StoreError, StoreResult};
use crate::storage;

/// File name of the quotes document inside the data directory.
const QUOTES_FILE: &str = "quotes.json";

/// Local store of all quotes.
///
/// ## Thread Safety
/// The quote list is wrapped in a `Mutex` because a UI shell may invoke
/// commands concurrently and every mutation rewrites the backing document.
/// Operations are short; a `RwLock` would add complexity with minimal
/// benefit.
#[derive(Debug)]
pub struct QuoteStore {
    path: Option<PathBuf>,
    quotes: Mutex<Vec<Quote>>,
}

impl QuoteStore {
    /// Creates an empty, non-persistent store (tests, previews).
    pub fn in_memory() -> Self {
        QuoteStore {
            path: None,
            quotes: Mutex::new(Vec::new()),
        }
    }

    /// Opens the store backed by `quotes.json` in the given directory,
    /// loading any existing document.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        let path = dir.join(QUOTES_FILE);
        let quotes: Vec<Quote> = storage::load_json(&path)?.unwrap_or_default();
        debug!(count = quotes.len(), "quote store opened");
        Ok(QuoteStore {
            path: Some(path),
            quotes: Mutex::new(quotes),
        })
    }

    /// All quotes in stored order, optionally filtered by status.
    pub fn list(&self, status: Option<QuoteStatus>) -> Vec<Quote> {
        let quotes = self.quotes.lock().expect("quote store mutex poisoned");
        quotes
            .iter()
            .filter(|q| status.map_or(true, |s| q.status == s))
            .cloned()
            .collect()
    }

    /// Fetches a quote by id. `None` means the id does not resolve.
    pub fn get_by_id(&self, id: &str) -> Option<Quote> {
        let quotes = self.quotes.lock().expect("quote store mutex poisoned");
        quotes.iter().find(|q| q.id == id).cloned()
    }

    /// Number of stored quotes.
    pub fn count(&self) -> usize {
        self.quotes.lock().expect("quote store mutex poisoned").len()
    }

    /// Inserts or replaces a quote and persists the document.
    ///
    /// ## Behavior
    /// - A blank id means a new quote: a v4 id is assigned and `created_at`
    ///   is stamped now.
    /// - `total` is recomputed from the line items on EVERY save; callers
    ///   never manage the snapshot themselves.
    ///
    /// Returns the stored quote (with id, timestamp, and snapshot filled in).
    pub fn save(&self, mut quote: Quote) -> StoreResult<Quote> {
        if quote.id.is_empty() {
            quote.id = Uuid::new_v4().to_string();
            quote.created_at = Utc::now();
        }

        quote.total = pricing::subtotal(&quote);

        debug!(id = %quote.id, total = quote.total, "saving quote");

        let mut quotes = self.quotes.lock().expect("quote store mutex poisoned");
        match quotes.iter_mut().find(|q| q.id == quote.id) {
            Some(existing) => *existing = quote.clone(),
            None => quotes.push(quote.clone()),
        }
        self.persist(&quotes)?;

        Ok(quote)
    }

    /// Removes a quote by id and persists the document.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut quotes = self.quotes.lock().expect("quote store mutex poisoned");
        let initial_len = quotes.len();
        quotes.retain(|q| q.id != id);

        if quotes.len() == initial_len {
            return Err(StoreError::not_found("Quote", id));
        }

        debug!(id = %id, "deleted quote");
        self.persist(&quotes)
    }

    /// Writes the quotes document when the store is file-backed.
    fn persist(&self, quotes: &[Quote]) -> StoreResult<()> {
        match &self.path {
            Some(path) => storage::save_json(path, &quotes.to_vec()),
            None => Ok(()),
        }
    }
}
