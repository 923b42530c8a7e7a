//! # Store Error Types
//!
//! Error types for local data operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in desk app) ← Serialized for the UI shell                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend displays user-friendly message                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Local data operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - Quote id doesn't exist
    /// - Quote was already deleted
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Reading or writing a local document failed.
    ///
    /// ## When This Occurs
    /// - App-data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Storage failed: {0}")]
    Storage(String),

    /// A stored document exists but doesn't parse.
    ///
    /// ## When This Occurs
    /// - Hand-edited JSON document
    /// - Partial write from a crashed previous run
    #[error("Corrupt document {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
