//! # Pricing Calculator
//!
//! Subtotal, tax, and grand-total computation for quotes.
//!
//! ## The Two Tax Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tax Calculation Paths                               │
//! │                                                                         │
//! │  INTERNAL VIEW (staff)              CLIENT DOCUMENT (customer)          │
//! │  ─────────────────────              ──────────────────────────          │
//! │  subtotal = Σ item.price            subtotal = quote.total snapshot     │
//! │  rate     = preset tax rate,        rate     = fixed 13%                │
//! │             RE-FETCHED per render              (CLIENT_TAX_RATE_PERCENT)│
//! │      │                                   │                              │
//! │      ▼                                   ▼                              │
//! │  compute_totals(quote, rate)        snapshot_totals(quote)              │
//! │                                                                         │
//! │  The two paths may legitimately disagree. This mirrors the shipped      │
//! │  product behavior and is a candidate inconsistency to confirm with      │
//! │  the product owner before ever unifying.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Arithmetic Contract
//! No rounding during accumulation: `total == subtotal * (1 + rate/100)`
//! holds exactly over the f64 domain. Only display formatting rounds to two
//! decimal places.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Quote;

/// The fixed tax rate (percent) applied on the client-facing document path.
///
/// Deliberately independent of the preset-driven rate used by the internal
/// view; neither path may cache or borrow the other's rate.
pub const CLIENT_TAX_RATE_PERCENT: f64 = 13.0;

// =============================================================================
// Quote Totals
// =============================================================================

/// Computed totals for a quote, in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl QuoteTotals {
    /// All-zero totals (empty quote).
    pub const fn zero() -> Self {
        QuoteTotals {
            subtotal: 0.0,
            tax: 0.0,
            total: 0.0,
        }
    }
}

// =============================================================================
// Calculator
// =============================================================================

/// Sums item prices across all spaces, in order, without rounding.
///
/// Zero spaces or zero items yield 0. Negative prices pass through
/// unchecked; validation happens at quote-creation time, not here.
pub fn subtotal(quote: &Quote) -> f64 {
    quote
        .spaces
        .iter()
        .map(|space| space.items.iter().map(|item| item.price).sum::<f64>())
        .sum()
}

/// Computes subtotal, tax, and total for a quote at the given tax rate.
///
/// ## Arguments
/// * `tax_rate_percent` - Non-negative rate expressed as a percentage
///   (13 means 13%). For the internal view this must be freshly fetched
///   from presets on every render; the preset is externally mutable and
///   caching it across renders is a contract violation.
///
/// ## Example
/// ```rust
/// use cabquote_core::pricing::compute_totals;
/// # use cabquote_core::types::{LineItem, Quote, QuoteStatus, Space};
/// # use chrono::Utc;
/// # let quote = Quote {
/// #     id: "q".into(), client_name: String::new(), email: String::new(),
/// #     phone: String::new(), project_name: String::new(),
/// #     installation_address: String::new(), created_at: Utc::now(),
/// #     status: QuoteStatus::Draft, total: 0.0,
/// #     spaces: vec![Space { id: "s".into(), name: "Kitchen".into(), items: vec![
/// #         LineItem { id: "a".into(), product_id: None, material_id: None,
/// #                    width: 24.0, height: 30.0, depth: 24.0, price: 100.0 },
/// #         LineItem { id: "b".into(), product_id: None, material_id: None,
/// #                    width: 36.0, height: 30.0, depth: 24.0, price: 250.0 },
/// #     ]}],
/// # };
/// let totals = compute_totals(&quote, 13.0);
/// assert_eq!(totals.subtotal, 350.0);
/// assert_eq!(totals.tax, 45.5);
/// assert_eq!(totals.total, 395.5);
/// ```
pub fn compute_totals(quote: &Quote, tax_rate_percent: f64) -> QuoteTotals {
    let subtotal = subtotal(quote);
    let tax = subtotal * (tax_rate_percent / 100.0);
    QuoteTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Client-facing totals: the stored subtotal snapshot taxed at the fixed 13%.
///
/// Unlike [`compute_totals`], the subtotal here is `quote.total` (the
/// snapshot written at save time), NOT a recomputation from line items.
/// This is the shipped client-document behavior, preserved as-is.
pub fn snapshot_totals(quote: &Quote) -> QuoteTotals {
    let subtotal = quote.total;
    let tax = subtotal * (CLIENT_TAX_RATE_PERCENT / 100.0);
    QuoteTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
