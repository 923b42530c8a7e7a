//! # Template Settings
//!
//! The configuration tree that controls client-facing document assembly.
//!
//! ## Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      TemplateSettings                                   │
//! │                                                                         │
//! │  companyInfo          layout                 sections                   │
//! │  ───────────          ──────                 ────────                   │
//! │  name                 showLogo               header    { enabled }      │
//! │  address (multiline)  showCompanyInfo        clientInfo{ enabled,title }│
//! │  email                showTaxDetails         quoteDetails               │
//! │  phone                showValidityPeriod       { enabled, columns[] }   │
//! │  logo?                showContactButtons     totals    { enabled,       │
//! │                       showFooterNotes          showSubtotal/Tax/Total } │
//! │                       primaryColor           footer    { enabled,       │
//! │                       fontFamily               notes, terms }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each section is independently enabled/disabled; the renderer honors the
//! flags but owns the fixed section ORDER. Column order inside quoteDetails
//! is the one thing the template controls positionally: enabled columns
//! render in exactly the configured sequence.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Company Info
// =============================================================================

/// Company identity shown on client documents.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyInfo {
    pub name: String,

    /// Postal address. Newlines separate display lines.
    pub address: String,

    pub email: String,
    pub phone: String,

    /// Logo image reference (URL or data URI). None hides the logo even
    /// when `layout.show_logo` is set.
    pub logo: Option<String>,
}

// =============================================================================
// Layout Settings
// =============================================================================

/// Document-wide layout flags and styling.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LayoutSettings {
    pub show_logo: bool,
    pub show_company_info: bool,

    /// Gates the tax line in the totals section, on top of the section's own
    /// `show_tax` flag.
    pub show_tax_details: bool,

    /// Shows "Valid until" (creation date + 30 days) in the header.
    pub show_validity_period: bool,

    /// Gates the trailing contact/download actions block.
    pub show_contact_buttons: bool,

    /// Gates the notes line in the footer section.
    pub show_footer_notes: bool,

    /// Accent color (CSS color value).
    pub primary_color: String,

    /// Document font stack (CSS font-family value).
    pub font_family: String,
}

// =============================================================================
// Section Configuration
// =============================================================================

/// Keys a quote-details column can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKey {
    /// Catalog product name, "Custom Product" when unresolved.
    Product,
    /// Catalog material name, "Default" when unresolved.
    Material,
    /// Width in inches.
    Width,
    /// Height in inches.
    Height,
    /// Depth in inches.
    Depth,
    /// Price, currency-formatted to two decimals.
    Price,
}

/// One column of the quote-details tables.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ColumnConfig {
    pub key: ColumnKey,
    pub label: String,
    pub enabled: bool,
}

impl ColumnConfig {
    pub fn new(key: ColumnKey, label: &str) -> Self {
        ColumnConfig {
            key,
            label: label.to_string(),
            enabled: true,
        }
    }
}

/// Header section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeaderConfig {
    pub enabled: bool,
}

/// Client-info section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientInfoConfig {
    pub enabled: bool,

    /// Section heading, e.g. "Client Information".
    pub title: String,
}

/// Quote-details section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteDetailsConfig {
    pub enabled: bool,

    /// Ordered column set. The enabled subset renders in this order; the
    /// renderer never imposes an order of its own.
    pub columns: Vec<ColumnConfig>,
}

/// Totals section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TotalsConfig {
    pub enabled: bool,
    pub show_subtotal: bool,
    pub show_tax: bool,
    pub show_total: bool,
}

/// Footer section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FooterConfig {
    pub enabled: bool,

    /// Free-form closing note, shown when `layout.show_footer_notes` is set.
    pub notes: String,

    /// Terms line, always shown when the footer renders.
    pub terms: String,
}

/// Per-section configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionSettings {
    pub header: HeaderConfig,
    pub client_info: ClientInfoConfig,
    pub quote_details: QuoteDetailsConfig,
    pub totals: TotalsConfig,
    pub footer: FooterConfig,
}

// =============================================================================
// Template Settings
// =============================================================================

/// Complete template configuration for client-facing documents.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TemplateSettings {
    pub company_info: CompanyInfo,
    pub layout: LayoutSettings,
    pub sections: SectionSettings,
}

impl Default for TemplateSettings {
    /// The stock template: everything enabled, six columns in the standard
    /// order, placeholder company identity.
    fn default() -> Self {
        TemplateSettings {
            company_info: CompanyInfo {
                name: "CabinetQuote".to_string(),
                address: "123 Workshop Lane\nUnit 4\nToronto, ON M5V 2T6".to_string(),
                email: "quotes@cabinetquote.example".to_string(),
                phone: "(416) 555-0142".to_string(),
                logo: None,
            },
            layout: LayoutSettings {
                show_logo: true,
                show_company_info: true,
                show_tax_details: true,
                show_validity_period: true,
                show_contact_buttons: true,
                show_footer_notes: true,
                primary_color: "#4F46E5".to_string(),
                font_family: "Inter, sans-serif".to_string(),
            },
            sections: SectionSettings {
                header: HeaderConfig { enabled: true },
                client_info: ClientInfoConfig {
                    enabled: true,
                    title: "Client Information".to_string(),
                },
                quote_details: QuoteDetailsConfig {
                    enabled: true,
                    columns: vec![
                        ColumnConfig::new(ColumnKey::Product, "Product"),
                        ColumnConfig::new(ColumnKey::Material, "Material"),
                        ColumnConfig::new(ColumnKey::Width, "Width"),
                        ColumnConfig::new(ColumnKey::Height, "Height"),
                        ColumnConfig::new(ColumnKey::Depth, "Depth"),
                        ColumnConfig::new(ColumnKey::Price, "Price"),
                    ],
                },
                totals: TotalsConfig {
                    enabled: true,
                    show_subtotal: true,
                    show_tax: true,
                    show_total: true,
                },
                footer: FooterConfig {
                    enabled: true,
                    notes: "Thank you for the opportunity to quote your project.".to_string(),
                    terms: "This quote is an estimate. Final pricing is confirmed on site \
                            measurement and material availability."
                        .to_string(),
                },
            },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_has_all_sections_enabled() {
        let t = TemplateSettings::default();
        assert!(t.sections.header.enabled);
        assert!(t.sections.client_info.enabled);
        assert!(t.sections.quote_details.enabled);
        assert!(t.sections.totals.enabled);
        assert!(t.sections.footer.enabled);
        assert!(t.layout.show_contact_buttons);
    }

    #[test]
    fn test_default_template_column_order() {
        let t = TemplateSettings::default();
        let keys: Vec<ColumnKey> = t
            .sections
            .quote_details
            .columns
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                ColumnKey::Product,
                ColumnKey::Material,
                ColumnKey::Width,
                ColumnKey::Height,
                ColumnKey::Depth,
                ColumnKey::Price,
            ]
        );
    }

    #[test]
    fn test_column_key_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ColumnKey::Product).unwrap(),
            "\"product\""
        );
        let back: ColumnKey = serde_json::from_str("\"width\"").unwrap();
        assert_eq!(back, ColumnKey::Width);
    }

    #[test]
    fn test_template_serde_round_trip() {
        let t = TemplateSettings::default();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"companyInfo\""));
        assert!(json.contains("\"showTaxDetails\""));
        let back: TemplateSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sections.quote_details.columns.len(), 6);
        assert_eq!(back.company_info.name, "CabinetQuote");
    }
}
