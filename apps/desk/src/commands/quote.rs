//! # Quote Commands
//!
//! List, view, save, and delete quotes.
//!
//! ## View Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Internal Quote View Flow                            │
//! │                                                                         │
//! │  User opens /quotes/{id}/view                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('get_quote', { id })                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Fetch quote ── not found? ──► ApiError::NOT_FOUND (shell redirects)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Fetch presets (FRESH - the rate is externally mutable)                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  compute_totals(quote, presets.taxRate) ──► QuoteView DTO              │
//! │                                                                         │
//! │  This is the staff view: totals recompute from line items at the       │
//! │  preset rate. The client document path (commands/document.rs) uses     │
//! │  the snapshot total at a fixed 13% instead, and the two may disagree.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use cabquote_core::pricing::{compute_totals, QuoteTotals};
use cabquote_core::types::{Quote, QuoteStatus};
use cabquote_core::validation::validate_quote;

use crate::error::ApiError;
use crate::state::AppState;

/// One row of the quote list.
///
/// ## Why DTO?
/// - Decouples internal domain model from API contract
/// - Pre-resolves display fields (quote number, status label) so the
///   frontend doesn't re-implement them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummary {
    /// Full id, used for navigation.
    pub id: String,

    /// 8-character display number.
    pub quote_number: String,

    pub client_name: String,
    pub project_name: String,

    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Subtotal snapshot in dollars.
    pub total: f64,

    pub status: QuoteStatus,

    /// Capitalized label for the status badge.
    pub status_label: String,
}

impl From<&Quote> for QuoteSummary {
    fn from(quote: &Quote) -> Self {
        QuoteSummary {
            id: quote.id.clone(),
            quote_number: quote.short_id(),
            client_name: quote.client_name.clone(),
            project_name: quote.project_name.clone(),
            created_at: quote.created_at,
            total: quote.total,
            status: quote.status,
            status_label: quote.status.label().to_string(),
        }
    }
}

/// Full quote plus freshly computed totals, for the internal view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteView {
    pub quote: Quote,

    /// Totals at the preset rate in effect right now.
    pub totals: QuoteTotals,

    /// The rate those totals used, for the "Tax (13.0%)" line.
    pub tax_rate_percent: f64,
}

/// Lists quotes in stored order, optionally filtered by status.
pub fn list_quotes(state: &AppState, status: Option<QuoteStatus>) -> Vec<QuoteSummary> {
    debug!(?status, "list_quotes command");
    state
        .quotes
        .list(status)
        .iter()
        .map(QuoteSummary::from)
        .collect()
}

/// Fetches a quote with totals for the internal view.
///
/// The preset tax rate is fetched fresh on every call - never cached across
/// renders - because presets are externally mutable.
pub fn get_quote(state: &AppState, id: &str) -> Result<QuoteView, ApiError> {
    debug!(id = %id, "get_quote command");

    let quote = state
        .quotes
        .get_by_id(id)
        .ok_or_else(|| ApiError::not_found("Quote", id))?;

    let presets = state.presets.get();
    let totals = compute_totals(&quote, presets.tax_rate);

    Ok(QuoteView {
        quote,
        totals,
        tax_rate_percent: presets.tax_rate,
    })
}

/// Validates and saves a quote (insert or update).
///
/// Returns the stored quote: id and creation timestamp filled in for new
/// quotes, snapshot total recomputed either way.
pub fn save_quote(state: &AppState, quote: Quote) -> Result<Quote, ApiError> {
    debug!(id = %quote.id, "save_quote command");
    validate_quote(&quote).map_err(cabquote_core::CoreError::from)?;
    Ok(state.quotes.save(quote)?)
}

/// Deletes a quote by id.
pub fn delete_quote(state: &AppState, id: &str) -> Result<(), ApiError> {
    debug!(id = %id, "delete_quote command");
    Ok(state.quotes.delete(id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use cabquote_core::types::{LineItem, Space};
    use chrono::Utc;

    fn draft(prices: &[f64], status: QuoteStatus) -> Quote {
        Quote {
            id: String::new(),
            client_name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(416) 555-0100".to_string(),
            project_name: "Kitchen Reno".to_string(),
            installation_address: "12 Elm St".to_string(),
            created_at: Utc::now(),
            status,
            spaces: vec![Space {
                id: "s1".to_string(),
                name: "Kitchen".to_string(),
                items: prices
                    .iter()
                    .enumerate()
                    .map(|(i, price)| LineItem {
                        id: format!("i{}", i),
                        product_id: None,
                        material_id: None,
                        width: 24.0,
                        height: 30.0,
                        depth: 24.0,
                        price: *price,
                    })
                    .collect(),
            }],
            total: 0.0,
        }
    }

    #[test]
    fn test_get_quote_unknown_id_is_not_found() {
        let state = AppState::in_memory();
        let err = get_quote(&state, "no-such-id").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_get_quote_totals_use_preset_rate() {
        let state = AppState::in_memory();
        let saved = save_quote(&state, draft(&[100.0, 250.0], QuoteStatus::Pending)).unwrap();

        // Default preset rate is 13%.
        let view = get_quote(&state, &saved.id).unwrap();
        assert_eq!(view.totals.subtotal, 350.0);
        assert_eq!(view.totals.tax, 45.5);
        assert_eq!(view.totals.total, 395.5);
        assert_eq!(view.tax_rate_percent, 13.0);
    }

    #[test]
    fn test_get_quote_refetches_preset_rate_every_call() {
        let state = AppState::in_memory();
        let saved = save_quote(&state, draft(&[100.0], QuoteStatus::Draft)).unwrap();

        let before = get_quote(&state, &saved.id).unwrap();
        assert_eq!(before.totals.tax, 13.0);

        let mut presets = state.presets.get();
        presets.tax_rate = 5.0;
        state.presets.update(presets).unwrap();

        // The very next view reflects the new rate - no caching.
        let after = get_quote(&state, &saved.id).unwrap();
        assert_eq!(after.totals.tax, 5.0);
        assert_eq!(after.totals.total, 105.0);
        assert_eq!(after.tax_rate_percent, 5.0);
    }

    #[test]
    fn test_list_quotes_filters_by_status() {
        let state = AppState::in_memory();
        save_quote(&state, draft(&[10.0], QuoteStatus::Pending)).unwrap();
        save_quote(&state, draft(&[20.0], QuoteStatus::Approved)).unwrap();

        assert_eq!(list_quotes(&state, None).len(), 2);
        let approved = list_quotes(&state, Some(QuoteStatus::Approved));
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].status_label, "Approved");
        assert_eq!(approved[0].total, 20.0);
    }

    #[test]
    fn test_summary_exposes_short_quote_number() {
        let state = AppState::in_memory();
        let saved = save_quote(&state, draft(&[10.0], QuoteStatus::Draft)).unwrap();
        let rows = list_quotes(&state, None);
        assert_eq!(rows[0].quote_number.len(), 8);
        assert!(saved.id.starts_with(&rows[0].quote_number));
    }

    #[test]
    fn test_save_quote_rejects_invalid_input() {
        let state = AppState::in_memory();
        let mut quote = draft(&[10.0], QuoteStatus::Draft);
        quote.spaces[0].items[0].width = -1.0;
        let err = save_quote(&state, quote).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(state.quotes.count(), 0);
    }

    #[test]
    fn test_delete_quote_unknown_id_is_not_found() {
        let state = AppState::in_memory();
        let err = delete_quote(&state, "no-such-id").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
