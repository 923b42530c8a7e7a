//! # Demo Quote
//!
//! The fixed sample quote served for the reserved id `"demo"`.
//!
//! Used by the client-document preview so users can see template changes
//! against realistic data without exposing a real client's quote. One item
//! deliberately carries no catalog references, so the preview also shows the
//! fallback labels ("Custom Product" / "Default") a stale catalog produces.

use chrono::Utc;

use cabquote_core::pricing;
use cabquote_core::types::{LineItem, Quote, QuoteStatus, Space};
use cabquote_core::DEMO_QUOTE_ID;

/// Builds the demo quote.
///
/// The id is always [`DEMO_QUOTE_ID`]; the creation timestamp is "now" so
/// the validity window in the preview looks current. Everything else is
/// fixed, and the snapshot total is computed from the items the same way a
/// real save would.
pub fn demo_quote() -> Quote {
    let mut quote = Quote {
        id: DEMO_QUOTE_ID.to_string(),
        client_name: "Jordan Avery".to_string(),
        email: "jordan.avery@example.com".to_string(),
        phone: "(647) 555-0188".to_string(),
        project_name: "Maple Grove Kitchen Refresh".to_string(),
        installation_address: "87 Birchmount Rd\nUnit 12\nScarborough, ON M1N 3K9".to_string(),
        created_at: Utc::now(),
        status: QuoteStatus::Pending,
        spaces: vec![
            Space {
                id: "space-kitchen".to_string(),
                name: "Kitchen".to_string(),
                items: vec![
                    item("item-k1", Some("prd-base"), Some("mat-maple"), 36.0, 34.5, 24.0, 1249.0),
                    item("item-k2", Some("prd-wall"), Some("mat-maple"), 30.0, 30.0, 12.0, 689.5),
                    item(
                        "item-k3",
                        Some("prd-sink"),
                        Some("mat-melamine"),
                        33.0,
                        34.5,
                        24.0,
                        975.0,
                    ),
                    // Custom build: no catalog references on purpose.
                    item("item-k4", None, None, 48.0, 42.0, 26.0, 1580.0),
                ],
            },
            Space {
                id: "space-laundry".to_string(),
                name: "Laundry Room".to_string(),
                items: vec![
                    item("item-l1", Some("prd-tall"), Some("mat-mdf"), 24.0, 84.0, 24.0, 1120.0),
                    item("item-l2", Some("prd-wall"), Some("mat-mdf"), 36.0, 30.0, 12.0, 540.25),
                ],
            },
        ],
        total: 0.0,
    };

    quote.total = pricing::subtotal(&quote);
    quote
}

fn item(
    id: &str,
    product_id: Option<&str>,
    material_id: Option<&str>,
    width: f64,
    height: f64,
    depth: f64,
    price: f64,
) -> LineItem {
    LineItem {
        id: id.to_string(),
        product_id: product_id.map(str::to_string),
        material_id: material_id.map(str::to_string),
        width,
        height,
        depth,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_quote_id_is_reserved() {
        assert_eq!(demo_quote().id, "demo");
    }

    #[test]
    fn test_demo_quote_snapshot_matches_items() {
        let quote = demo_quote();
        assert_eq!(quote.total, pricing::subtotal(&quote));
        assert_eq!(quote.total, 6153.75);
    }

    #[test]
    fn test_demo_quote_has_a_custom_item() {
        // Keeps the fallback-label path visible in the preview.
        let quote = demo_quote();
        assert!(quote
            .spaces
            .iter()
            .flat_map(|s| &s.items)
            .any(|i| i.product_id.is_none() && i.material_id.is_none()));
    }

    #[test]
    fn test_demo_quote_has_two_spaces_in_order() {
        let quote = demo_quote();
        let names: Vec<&str> = quote.spaces.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Kitchen", "Laundry Room"]);
    }
}
