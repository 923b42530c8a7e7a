//! # Error Types
//!
//! Domain-specific error types for cabquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cabquote-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cabquote-store errors (separate crate)                                │
//! │  └── StoreError       - Local document read/write failures             │
//! │                                                                         │
//! │  Desk API errors (in app)                                              │
//! │  └── ApiError         - What the UI shell sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Frontend  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (quote id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Note that an unresolved catalog reference on a line item is NOT an error
//! anywhere in this crate: the document renderer recovers with a fallback
//! label instead ("Custom Product" / "Default").

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Quote cannot be found.
    ///
    /// ## When This Occurs
    /// - Quote id doesn't exist in the local store
    /// - Quote was deleted
    ///
    /// This is a terminal outcome: the caller is expected to show a
    /// not-found view, never a partial or empty document. It is distinct
    /// from "inputs still loading" (see `DocumentState::Loading`).
    #[error("Quote not found: {0}")]
    QuoteNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when quote input doesn't meet requirements.
/// Used for early validation at quote-creation time, before anything is
/// persisted. The pricing calculator and document renderer never validate;
/// they are total over their declared input domain.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email address).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
