//! # Document Commands
//!
//! Client-facing document assembly and the PDF export hook.
//!
//! ## Client Document Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Client Document Flow                                  │
//! │                                                                         │
//! │  Client opens /client/quote/{id}                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('client_document', { id })                                      │
//! │       │                                                                 │
//! │       ├── id == "demo"? ──► demo quote ──► Ready(document)              │
//! │       │                                                                 │
//! │       ├── id resolves? ───► render ──────► Ready(document)              │
//! │       │                                                                 │
//! │       └── else ───────────► NotFound (terminal; shell shows 404)        │
//! │                                                                         │
//! │  "Loading" is never produced here: it is the shell's own state while    │
//! │  this command is in flight.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use cabquote_core::document::DocumentState;
use cabquote_core::{render_document, Catalog, DEMO_QUOTE_ID};
use cabquote_store::demo_quote;

use crate::state::AppState;

/// Assembles the client-facing document for a quote id.
///
/// The reserved id `"demo"` always serves the sample quote so template
/// changes can be previewed without real client data. Any other id that
/// fails to resolve yields the terminal `NotFound` state - never a partial
/// or empty document.
pub fn client_document(state: &AppState, id: &str) -> DocumentState {
    debug!(id = %id, "client_document command");

    let template = state.template.get();
    let catalog = Catalog::new(state.catalog.products(), state.catalog.materials());

    if id == DEMO_QUOTE_ID {
        return DocumentState::Ready(render_document(&demo_quote(), &catalog, &template));
    }

    DocumentState::from_lookup(state.quotes.get_by_id(id).as_ref(), &catalog, &template)
}

/// PDF export hook.
///
/// Document generation belongs to an external collaborator; this records the
/// request and nothing else, exactly like the shipped placeholder.
// TODO: delegate to a document-generation service once one exists.
pub fn download_pdf(quote_id: &str) {
    info!(quote_id = %quote_id, "PDF export requested (not implemented)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::quote::save_quote;
    use cabquote_core::document::{Section, SectionKind};
    use cabquote_core::types::{LineItem, Quote, QuoteStatus, Space};
    use chrono::Utc;

    fn stored_quote(state: &AppState, prices: &[f64]) -> Quote {
        let quote = Quote {
            id: String::new(),
            client_name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(416) 555-0100".to_string(),
            project_name: "Kitchen Reno".to_string(),
            installation_address: "12 Elm St".to_string(),
            created_at: Utc::now(),
            status: QuoteStatus::Pending,
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
        };
        save_quote(state, quote).unwrap()
    }

    #[test]
    fn test_unknown_id_is_terminal_not_found() {
        let state = AppState::in_memory();
        assert_eq!(
            client_document(&state, "no-such-id"),
            DocumentState::NotFound
        );
    }

    #[test]
    fn test_demo_id_always_resolves() {
        let state = AppState::in_memory();
        match client_document(&state, "demo") {
            DocumentState::Ready(doc) => {
                assert_eq!(doc.quote_id, "demo");
                // Two demo spaces → two tables in the section list.
                let tables = doc
                    .sections
                    .iter()
                    .filter(|s| s.kind() == SectionKind::QuoteDetails)
                    .count();
                assert_eq!(tables, 2);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_stored_quote_renders_ready() {
        let state = AppState::in_memory();
        let saved = stored_quote(&state, &[100.0, 250.0]);
        match client_document(&state, &saved.id) {
            DocumentState::Ready(doc) => assert_eq!(doc.quote_id, saved.id),
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_client_totals_ignore_preset_rate() {
        let state = AppState::in_memory();
        let saved = stored_quote(&state, &[100.0, 250.0]);

        // Drop the preset rate to 5%; the client document must stay at 13%.
        let mut presets = state.presets.get();
        presets.tax_rate = 5.0;
        state.presets.update(presets).unwrap();

        let doc = match client_document(&state, &saved.id) {
            DocumentState::Ready(doc) => doc,
            other => panic!("expected Ready, got {:?}", other),
        };
        let totals = doc
            .sections
            .iter()
            .find_map(|s| match s {
                Section::Totals(t) => Some(*t),
                _ => None,
            })
            .unwrap();
        assert_eq!(totals.subtotal, Some(350.0));
        assert_eq!(totals.tax.unwrap().rate_percent, 13.0);
        assert_eq!(totals.tax.unwrap().amount, 45.5);
        assert_eq!(totals.total, Some(395.5));
    }

    #[test]
    fn test_template_changes_apply_on_next_render() {
        let state = AppState::in_memory();
        let saved = stored_quote(&state, &[100.0]);

        let mut settings = state.template.get();
        settings.sections.footer.enabled = false;
        state.template.update(settings).unwrap();

        let doc = match client_document(&state, &saved.id) {
            DocumentState::Ready(doc) => doc,
            other => panic!("expected Ready, got {:?}", other),
        };
        assert!(doc
            .sections
            .iter()
            .all(|s| s.kind() != SectionKind::Footer));
    }
}
