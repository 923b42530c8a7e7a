//! # Domain Types
//!
//! Core domain types used throughout CabinetQuote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Quote       │   │     Space       │   │    LineItem     │       │
//! │  │  ─────────────  │1 *│  ─────────────  │1 *│  ─────────────  │       │
//! │  │  id (UUID)      ├──►│  id             ├──►│  id             │       │
//! │  │  clientName     │   │  name           │   │  productId?     │       │
//! │  │  status         │   │  items          │   │  materialId?    │       │
//! │  │  total (snap)   │   │                 │   │  w × h × d, $   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Material     │   │  PresetValues   │       │
//! │  │  (catalog)      │   │  (catalog)      │   │  taxRate, ...   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why f64 dollars instead of integer cents?
//! Quote totals are contractually `subtotal × (1 + rate/100)` with no
//! rounding during accumulation; only display rounds to two decimals.
//! Rounding to cents mid-computation would change the stored totals, so
//! monetary values here are plain f64 dollar amounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Line Item
// =============================================================================

/// One priced cabinet configuration within a space.
///
/// `product_id` and `material_id` reference catalog entities by id; they are
/// looked up at render time, not embedded. A missing or stale reference is
/// legal and degrades to a fallback label, so quotes survive catalog edits
/// made after their creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Catalog product reference. None means a custom, uncataloged build.
    pub product_id: Option<String>,

    /// Catalog material reference. None means the default material.
    pub material_id: Option<String>,

    /// Width in inches.
    pub width: f64,

    /// Height in inches.
    pub height: f64,

    /// Depth in inches.
    pub depth: f64,

    /// Price in dollars.
    pub price: f64,
}

// =============================================================================
// Space
// =============================================================================

/// A named grouping of line items within a quote (e.g., "Kitchen").
///
/// Item order is display order: the renderer walks items in sequence.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub items: Vec<LineItem>,
}

// =============================================================================
// Quote Status
// =============================================================================

/// The lifecycle status of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Quote is being drafted.
    Draft,
    /// Quote has been sent to the client, awaiting a decision.
    Pending,
    /// Client accepted the quote.
    Approved,
    /// Client declined the quote.
    Rejected,
}

impl QuoteStatus {
    /// Capitalized display label ("draft" → "Draft").
    pub fn label(&self) -> &'static str {
        match self {
            QuoteStatus::Draft => "Draft",
            QuoteStatus::Pending => "Pending",
            QuoteStatus::Approved => "Approved",
            QuoteStatus::Rejected => "Rejected",
        }
    }
}

impl Default for QuoteStatus {
    fn default() -> Self {
        QuoteStatus::Draft
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A priced proposal for cabinetry work, tied to a client.
///
/// ## Snapshot Total
/// `total` is the subtotal snapshot computed from the line items when the
/// quote was last saved. The client-facing document renders from this
/// snapshot; the internal view recomputes from items. Identity is the id;
/// a stored quote only changes through explicit edit operations.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Quote {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Client full name.
    pub client_name: String,

    /// Client email address.
    pub email: String,

    /// Client phone number (free-form, as entered).
    pub phone: String,

    /// Project display name.
    pub project_name: String,

    /// Installation address. May contain embedded line breaks, which the
    /// renderer preserves.
    pub installation_address: String,

    /// When the quote was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Lifecycle status.
    pub status: QuoteStatus,

    /// Spaces in display order.
    pub spaces: Vec<Space>,

    /// Subtotal snapshot in dollars (sum of all item prices at save time).
    pub total: f64,
}

impl Quote {
    /// First 8 characters of the id, used everywhere the UI shows a quote
    /// number ("Quote #3f2b1c9a").
    pub fn short_id(&self) -> String {
        self.id.chars().take(8).collect()
    }

    /// Total number of line items across all spaces.
    pub fn item_count(&self) -> usize {
        self.spaces.iter().map(|s| s.items.len()).sum()
    }
}

// =============================================================================
// Catalog Entities
// =============================================================================

/// A cabinet product available in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier. Stable so quotes can reference it across edits.
    pub id: String,

    /// Display name shown in tables and pickers.
    pub name: String,

    /// Optional description for the catalog page.
    pub description: Option<String>,

    /// Optional grouping (e.g., "Base", "Wall", "Tall").
    pub category: Option<String>,
}

/// A material available in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Material {
    pub id: String,
    pub name: String,

    /// Optional finish note (e.g., "Natural", "Painted").
    pub finish: Option<String>,
}

// =============================================================================
// Preset Values
// =============================================================================

/// Externally configured defaults used by the internal (non-client-facing)
/// rendering path and the quote builder.
///
/// ## Staleness Contract
/// The preset tax rate is externally mutable, so callers must re-fetch these
/// values for every render. Nothing in this crate caches them. The
/// client-facing document deliberately does NOT use this rate (see
/// `pricing::CLIENT_TAX_RATE_PERCENT`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PresetValues {
    /// Tax rate as a percentage (13 means 13%).
    pub tax_rate: f64,

    /// Default cabinet width in inches for new line items.
    pub default_width: f64,

    /// Default cabinet height in inches for new line items.
    pub default_height: f64,

    /// Default cabinet depth in inches for new line items.
    pub default_depth: f64,
}

impl Default for PresetValues {
    fn default() -> Self {
        PresetValues {
            tax_rate: 13.0,
            default_width: 24.0,
            default_height: 30.0,
            default_depth: 24.0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
