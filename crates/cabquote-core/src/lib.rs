//! # cabquote-core: Pure Business Logic for CabinetQuote
//!
//! This crate is the **heart** of CabinetQuote. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     CabinetQuote Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (browser UI)                        │   │
//! │  │   Quote List ──► Quote View ──► Client Document ──► Template   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command invocation                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Desk Commands (apps/desk)                    │   │
//! │  │    list_quotes, get_quote, client_document, save_quote, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ cabquote-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌────────┐ │   │
//! │  │  │  types  │ │ template │ │ pricing  │ │ document │ │validat.│ │   │
//! │  │  │  Quote  │ │ settings │ │ totals   │ │ sections │ │ rules  │ │   │
//! │  │  │  Space  │ │ columns  │ │ tax math │ │ assembly │ │ checks │ │   │
//! │  │  └─────────┘ └──────────┘ └──────────┘ └──────────┘ └────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE ACCESS • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               cabquote-store (Data Services)                    │   │
//! │  │        Quotes, catalog, template, presets as local JSON         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Quote, Space, LineItem, catalog entities)
//! - [`template`] - Template settings controlling document assembly
//! - [`catalog`] - Indexed product/material lookup with graceful fallbacks
//! - [`pricing`] - Subtotal/tax/total math (both tax paths)
//! - [`document`] - Client-facing document assembly
//! - [`validation`] - Quote-creation input validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, network, and storage access is FORBIDDEN here
//! 3. **Graceful catalog fallback**: a stale product/material reference is
//!    never an error, it renders a fallback label
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cabquote_core::pricing::compute_totals;
//! use cabquote_core::types::{Quote, QuoteStatus};
//! use chrono::Utc;
//!
//! let quote = Quote {
//!     id: "q-1".into(),
//!     client_name: "Dana Reyes".into(),
//!     email: "dana@example.com".into(),
//!     phone: "(416) 555-0100".into(),
//!     project_name: "Kitchen Reno".into(),
//!     installation_address: "12 Elm St".into(),
//!     created_at: Utc::now(),
//!     status: QuoteStatus::Draft,
//!     spaces: vec![],
//!     total: 0.0,
//! };
//!
//! // Empty quote: everything is zero at any rate.
//! let totals = compute_totals(&quote, 13.0);
//! assert_eq!(totals.total, 0.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod document;
pub mod error;
pub mod pricing;
pub mod template;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cabquote_core::Quote` instead of
// `use cabquote_core::types::Quote`

pub use catalog::Catalog;
pub use document::{render_document, DocumentState, QuoteDocument, Section, SectionKind};
pub use error::{CoreError, CoreResult, ValidationError};
pub use pricing::{compute_totals, QuoteTotals, CLIENT_TAX_RATE_PERCENT};
pub use template::TemplateSettings;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Reserved quote id that serves the fixed demo quote in preview mode.
///
/// The client document route treats this id specially: it never hits the
/// quote store and always resolves to the sample quote, so users can preview
/// template changes without exposing real client data.
pub const DEMO_QUOTE_ID: &str = "demo";
