//! # Quote Document Renderer
//!
//! Assembles the client-facing quote document from a quote, a catalog, and
//! the template configuration.
//!
//! ## Rendering Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Client Document Assembly                               │
//! │                                                                         │
//! │  Quote ──┐                                                              │
//! │          │                                                              │
//! │  Catalog ┼──► render_document() ──► QuoteDocument                       │
//! │          │         │                  │                                 │
//! │  Template┘         │                  ├── style (color, font)           │
//! │                    │                  └── sections, in FIXED order:     │
//! │                    ▼                                                    │
//! │     for kind in SECTION_ORDER:            1. Header                     │
//! │         if enabled(kind):                 2. ClientInfo                 │
//! │             build(kind)                   3. QuoteDetails (per space)   │
//! │                                           4. Totals                     │
//! │     The template decides WHICH            5. Footer                     │
//! │     sections appear, never WHERE.         6. Actions                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Section order is an explicit invariant: assembly walks [`SECTION_ORDER`]
//! and consults one enabled-predicate per kind, rather than a chain of ad hoc
//! conditionals, so the order is testable and cannot drift.
//!
//! The one ordering the template DOES control is quote-details columns: the
//! enabled subset renders in exactly the configured sequence.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::pricing::{self, CLIENT_TAX_RATE_PERCENT};
use crate::template::{ColumnConfig, ColumnKey, TemplateSettings};
use crate::types::{LineItem, Quote, Space};

// =============================================================================
// Section Kinds & Order
// =============================================================================

/// The kinds of section a client document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Header,
    ClientInfo,
    QuoteDetails,
    Totals,
    Footer,
    Actions,
}

/// Fixed assembly order. Every render walks this list; the template only
/// gates inclusion.
pub const SECTION_ORDER: [SectionKind; 6] = [
    SectionKind::Header,
    SectionKind::ClientInfo,
    SectionKind::QuoteDetails,
    SectionKind::Totals,
    SectionKind::Footer,
    SectionKind::Actions,
];

// =============================================================================
// Section Payloads
// =============================================================================

/// Company contact block in the header (shown when
/// `layout.show_company_info` is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyContact {
    /// Company address, one entry per display line.
    pub address_lines: Vec<String>,
    pub email: String,
    pub phone: String,
}

/// Document header: company identity on the left, quote identity on the
/// right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeaderSection {
    pub company_name: String,

    /// Logo reference; present only when `layout.show_logo` is set AND the
    /// template actually carries a logo value.
    pub logo: Option<String>,

    pub company_contact: Option<CompanyContact>,

    /// 8-character quote number ("Quote #3f2b1c9a").
    pub quote_number: String,

    #[ts(as = "String")]
    pub issued_on: DateTime<Utc>,

    /// Creation date + 30 days; present when `layout.show_validity_period`
    /// is set.
    #[ts(as = "Option<String>")]
    pub valid_until: Option<DateTime<Utc>>,
}

/// Client identity and installation address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientInfoSection {
    /// Heading from `sections.client_info.title`.
    pub title: String,
    pub client_name: String,
    pub email: String,
    pub phone: String,

    /// Verbatim, embedded line breaks preserved.
    pub installation_address: String,
}

/// One column header of a space table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ColumnHeader {
    pub key: ColumnKey,
    pub label: String,
}

/// One line-item table, one per space.
///
/// Cells are pre-resolved display strings; the shell renders them as-is and
/// never needs catalog access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SpaceTable {
    pub space_id: String,
    pub space_name: String,
    pub columns: Vec<ColumnHeader>,

    /// Row-major cells, one inner Vec per line item, aligned with `columns`.
    pub rows: Vec<Vec<String>>,
}

/// Tax line of the totals section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TaxLine {
    /// Always [`CLIENT_TAX_RATE_PERCENT`] on this path.
    pub rate_percent: f64,
    pub amount: f64,
}

/// Totals block. Each line is independently gated; an absent field means the
/// template hid that line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TotalsSection {
    pub subtotal: Option<f64>,
    pub tax: Option<TaxLine>,
    pub total: Option<f64>,
}

/// Closing notes and terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FooterSection {
    /// Present only when `layout.show_footer_notes` is set.
    pub notes: Option<String>,
    pub terms: String,
}

/// Trailing contact/download affordances, gated by
/// `layout.show_contact_buttons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ActionsSection {
    /// `mailto:` link with the full quote id in the subject line.
    pub email_href: String,

    /// `tel:` link, company phone with every non-digit stripped.
    pub phone_href: String,

    /// The PDF affordance carries no link: the shell invokes the export hook
    /// (an external document-generation collaborator) with this quote id.
    pub pdf_quote_id: String,
}

/// A rendered document section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum Section {
    Header(HeaderSection),
    ClientInfo(ClientInfoSection),
    QuoteDetails(SpaceTable),
    Totals(TotalsSection),
    Footer(FooterSection),
    Actions(ActionsSection),
}

impl Section {
    /// The kind tag of this section.
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Header(_) => SectionKind::Header,
            Section::ClientInfo(_) => SectionKind::ClientInfo,
            Section::QuoteDetails(_) => SectionKind::QuoteDetails,
            Section::Totals(_) => SectionKind::Totals,
            Section::Footer(_) => SectionKind::Footer,
            Section::Actions(_) => SectionKind::Actions,
        }
    }
}

// =============================================================================
// Document
// =============================================================================

/// Document-wide styling lifted from the template layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DocumentStyle {
    pub primary_color: String,
    pub font_family: String,
}

/// A fully assembled client-facing quote document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteDocument {
    pub quote_id: String,
    pub style: DocumentStyle,
    pub sections: Vec<Section>,
}

impl QuoteDocument {
    /// Kinds of the included sections, in render order. Handy for tests and
    /// shells that build navigation.
    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(Section::kind).collect()
    }
}

/// View state for a client document request.
///
/// `Loading` is "inputs not resolved yet" (absent but pending); `NotFound`
/// is terminal: the id does not resolve and the shell should redirect to a
/// not-found view. A document is never partially rendered: it is `Ready` in
/// full or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "camelCase")]
#[ts(export)]
pub enum DocumentState {
    Loading,
    NotFound,
    Ready(QuoteDocument),
}

impl DocumentState {
    /// Resolves a quote lookup into a view state.
    ///
    /// A `None` lookup means the id did not resolve: terminal `NotFound`,
    /// never `Loading` (which only a shell awaiting its inputs produces).
    pub fn from_lookup(
        lookup: Option<&Quote>,
        catalog: &Catalog,
        template: &TemplateSettings,
    ) -> DocumentState {
        match lookup {
            Some(quote) => DocumentState::Ready(render_document(quote, catalog, template)),
            None => DocumentState::NotFound,
        }
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// How many days a quote remains valid after creation.
const VALIDITY_DAYS: i64 = 30;

/// Renders the client-facing document for a quote.
///
/// Pure: same inputs, same document. Walks [`SECTION_ORDER`] and includes
/// each kind iff its template predicate holds; `QuoteDetails` contributes
/// one table per space, in space order.
pub fn render_document(
    quote: &Quote,
    catalog: &Catalog,
    template: &TemplateSettings,
) -> QuoteDocument {
    let mut sections = Vec::new();

    for kind in SECTION_ORDER {
        if !section_enabled(kind, template) {
            continue;
        }
        push_sections(kind, quote, catalog, template, &mut sections);
    }

    QuoteDocument {
        quote_id: quote.id.clone(),
        style: DocumentStyle {
            primary_color: template.layout.primary_color.clone(),
            font_family: template.layout.font_family.clone(),
        },
        sections,
    }
}

/// The enabled-predicate for each section kind.
///
/// `Actions` is not a section in the template's config model; it hangs off
/// the `show_contact_buttons` layout flag instead.
fn section_enabled(kind: SectionKind, template: &TemplateSettings) -> bool {
    let sections = &template.sections;
    match kind {
        SectionKind::Header => sections.header.enabled,
        SectionKind::ClientInfo => sections.client_info.enabled,
        SectionKind::QuoteDetails => sections.quote_details.enabled,
        SectionKind::Totals => sections.totals.enabled,
        SectionKind::Footer => sections.footer.enabled,
        SectionKind::Actions => template.layout.show_contact_buttons,
    }
}

/// Builds the section(s) of one kind into the output sequence.
fn push_sections(
    kind: SectionKind,
    quote: &Quote,
    catalog: &Catalog,
    template: &TemplateSettings,
    out: &mut Vec<Section>,
) {
    match kind {
        SectionKind::Header => out.push(Section::Header(build_header(quote, template))),
        SectionKind::ClientInfo => out.push(Section::ClientInfo(build_client_info(quote, template))),
        SectionKind::QuoteDetails => {
            // One table per space, in display order.
            for space in &quote.spaces {
                out.push(Section::QuoteDetails(build_space_table(
                    space, catalog, template,
                )));
            }
        }
        SectionKind::Totals => out.push(Section::Totals(build_totals(quote, template))),
        SectionKind::Footer => out.push(Section::Footer(build_footer(template))),
        SectionKind::Actions => out.push(Section::Actions(build_actions(quote, template))),
    }
}

fn build_header(quote: &Quote, template: &TemplateSettings) -> HeaderSection {
    let company = &template.company_info;
    let layout = &template.layout;

    // Logo requires both the flag and an actual value.
    let logo = if layout.show_logo {
        company.logo.clone()
    } else {
        None
    };

    let company_contact = layout.show_company_info.then(|| CompanyContact {
        address_lines: company.address.split('\n').map(str::to_string).collect(),
        email: company.email.clone(),
        phone: company.phone.clone(),
    });

    HeaderSection {
        company_name: company.name.clone(),
        logo,
        company_contact,
        quote_number: quote.short_id(),
        issued_on: quote.created_at,
        valid_until: layout
            .show_validity_period
            .then(|| quote.created_at + Duration::days(VALIDITY_DAYS)),
    }
}

fn build_client_info(quote: &Quote, template: &TemplateSettings) -> ClientInfoSection {
    ClientInfoSection {
        title: template.sections.client_info.title.clone(),
        client_name: quote.client_name.clone(),
        email: quote.email.clone(),
        phone: quote.phone.clone(),
        installation_address: quote.installation_address.clone(),
    }
}

fn build_space_table(space: &Space, catalog: &Catalog, template: &TemplateSettings) -> SpaceTable {
    // Enabled subset, configured order. The order comes from the template
    // alone; reordering the config reorders every table.
    let columns: Vec<&ColumnConfig> = template
        .sections
        .quote_details
        .columns
        .iter()
        .filter(|c| c.enabled)
        .collect();

    let rows = space
        .items
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|column| resolve_cell(column.key, item, catalog))
                .collect()
        })
        .collect();

    SpaceTable {
        space_id: space.id.clone(),
        space_name: space.name.clone(),
        columns: columns
            .iter()
            .map(|c| ColumnHeader {
                key: c.key,
                label: c.label.clone(),
            })
            .collect(),
        rows,
    }
}

fn build_totals(quote: &Quote, template: &TemplateSettings) -> TotalsSection {
    let config = &template.sections.totals;

    // Client-facing path: stored snapshot subtotal at the fixed 13% rate.
    // The preset-driven rate of the internal view is intentionally not
    // consulted here.
    let totals = pricing::snapshot_totals(quote);

    TotalsSection {
        subtotal: config.show_subtotal.then_some(totals.subtotal),
        tax: (config.show_tax && template.layout.show_tax_details).then_some(TaxLine {
            rate_percent: CLIENT_TAX_RATE_PERCENT,
            amount: totals.tax,
        }),
        total: config.show_total.then_some(totals.total),
    }
}

fn build_footer(template: &TemplateSettings) -> FooterSection {
    let config = &template.sections.footer;
    FooterSection {
        notes: template
            .layout
            .show_footer_notes
            .then(|| config.notes.clone()),
        terms: config.terms.clone(),
    }
}

fn build_actions(quote: &Quote, template: &TemplateSettings) -> ActionsSection {
    let company = &template.company_info;
    ActionsSection {
        email_href: format!(
            "mailto:{}?subject=Quote {} Inquiry",
            company.email, quote.id
        ),
        phone_href: format!("tel:{}", strip_non_digits(&company.phone)),
        pdf_quote_id: quote.id.clone(),
    }
}

// =============================================================================
// Cell Resolution & Formatting
// =============================================================================

/// Resolves one table cell by column key.
fn resolve_cell(key: ColumnKey, item: &LineItem, catalog: &Catalog) -> String {
    match key {
        ColumnKey::Product => catalog.product_label(item.product_id.as_deref()),
        ColumnKey::Material => catalog.material_label(item.material_id.as_deref()),
        ColumnKey::Width => format_inches(item.width),
        ColumnKey::Height => format_inches(item.height),
        ColumnKey::Depth => format_inches(item.depth),
        ColumnKey::Price => format_currency(item.price),
    }
}

/// Dimension followed by an inch mark: 24 → `24"`, 24.5 → `24.5"`.
///
/// f64 Display already prints the shortest round-trip form, matching how the
/// stored numbers have always been shown.
pub fn format_inches(value: f64) -> String {
    format!("{}\"", value)
}

/// Currency-formatted to two decimal places: 350 → `$350.00`.
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// Keeps ASCII digits only, for `tel:` links.
fn strip_non_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::ColumnConfig;
    use crate::types::{Material, Product, QuoteStatus, Space};
    use chrono::TimeZone;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Product {
                id: "prd-base".to_string(),
                name: "Base Cabinet".to_string(),
                description: None,
                category: Some("Base".to_string()),
            }],
            vec![Material {
                id: "mat-maple".to_string(),
                name: "Maple".to_string(),
                finish: None,
            }],
        )
    }

    fn quote() -> Quote {
        Quote {
            id: "3f2b1c9a-77aa-4a24-9d2e-51f0cf3b2a10".to_string(),
            client_name: "Dana Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: "(416) 555-0100".to_string(),
            project_name: "Kitchen Reno".to_string(),
            installation_address: "12 Elm St\nToronto, ON".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            status: QuoteStatus::Pending,
            spaces: vec![Space {
                id: "s1".to_string(),
                name: "Kitchen".to_string(),
                items: vec![
                    LineItem {
                        id: "i1".to_string(),
                        product_id: Some("prd-base".to_string()),
                        material_id: Some("mat-maple".to_string()),
                        width: 24.0,
                        height: 30.0,
                        depth: 24.0,
                        price: 100.0,
                    },
                    LineItem {
                        id: "i2".to_string(),
                        product_id: Some("prd-gone".to_string()),
                        material_id: None,
                        width: 36.5,
                        height: 30.0,
                        depth: 24.0,
                        price: 250.0,
                    },
                ],
            }],
            total: 350.0,
        }
    }

    #[test]
    fn test_full_render_has_fixed_section_order() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        assert_eq!(
            doc.section_kinds(),
            vec![
                SectionKind::Header,
                SectionKind::ClientInfo,
                SectionKind::QuoteDetails,
                SectionKind::Totals,
                SectionKind::Footer,
                SectionKind::Actions,
            ]
        );
    }

    #[test]
    fn test_one_table_per_space_in_space_order() {
        let mut q = quote();
        q.spaces.push(Space {
            id: "s2".to_string(),
            name: "Laundry".to_string(),
            items: vec![],
        });
        let doc = render_document(&q, &catalog(), &TemplateSettings::default());
        let names: Vec<&str> = doc
            .sections
            .iter()
            .filter_map(|s| match s {
                Section::QuoteDetails(t) => Some(t.space_name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["Kitchen", "Laundry"]);
    }

    #[test]
    fn test_disabling_a_section_removes_exactly_that_section() {
        let cases: Vec<(SectionKind, Box<dyn Fn(&mut TemplateSettings)>)> = vec![
            (
                SectionKind::Header,
                Box::new(|t| t.sections.header.enabled = false),
            ),
            (
                SectionKind::ClientInfo,
                Box::new(|t| t.sections.client_info.enabled = false),
            ),
            (
                SectionKind::QuoteDetails,
                Box::new(|t| t.sections.quote_details.enabled = false),
            ),
            (
                SectionKind::Totals,
                Box::new(|t| t.sections.totals.enabled = false),
            ),
            (
                SectionKind::Footer,
                Box::new(|t| t.sections.footer.enabled = false),
            ),
            (
                SectionKind::Actions,
                Box::new(|t| t.layout.show_contact_buttons = false),
            ),
        ];

        for (removed, disable) in cases {
            let mut template = TemplateSettings::default();
            disable(&mut template);
            let doc = render_document(&quote(), &catalog(), &template);
            let expected: Vec<SectionKind> = SECTION_ORDER
                .iter()
                .copied()
                .filter(|k| *k != removed)
                .collect();
            assert_eq!(doc.section_kinds(), expected, "disabling {:?}", removed);
        }
    }

    #[test]
    fn test_header_contents() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        let header = match &doc.sections[0] {
            Section::Header(h) => h,
            other => panic!("expected header, got {:?}", other.kind()),
        };
        assert_eq!(header.company_name, "CabinetQuote");
        // show_logo is on but the stock template has no logo value.
        assert_eq!(header.logo, None);
        assert_eq!(header.quote_number, "3f2b1c9a");
        let contact = header.company_contact.as_ref().unwrap();
        assert_eq!(contact.address_lines.len(), 3);
        assert_eq!(contact.address_lines[0], "123 Workshop Lane");
        // Validity window: created 2024-03-01, valid 30 days.
        let valid_until = header.valid_until.unwrap();
        assert_eq!(
            valid_until,
            Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_header_respects_company_info_and_validity_flags() {
        let mut template = TemplateSettings::default();
        template.layout.show_company_info = false;
        template.layout.show_validity_period = false;
        let doc = render_document(&quote(), &catalog(), &template);
        let header = match &doc.sections[0] {
            Section::Header(h) => h,
            _ => unreachable!(),
        };
        assert!(header.company_contact.is_none());
        assert!(header.valid_until.is_none());
    }

    #[test]
    fn test_logo_needs_flag_and_value() {
        let mut template = TemplateSettings::default();
        template.company_info.logo = Some("logo.png".to_string());
        template.layout.show_logo = false;
        let doc = render_document(&quote(), &catalog(), &template);
        match &doc.sections[0] {
            Section::Header(h) => assert_eq!(h.logo, None),
            _ => unreachable!(),
        }

        template.layout.show_logo = true;
        let doc = render_document(&quote(), &catalog(), &template);
        match &doc.sections[0] {
            Section::Header(h) => assert_eq!(h.logo.as_deref(), Some("logo.png")),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_client_info_preserves_address_line_breaks() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        let client = match &doc.sections[1] {
            Section::ClientInfo(c) => c,
            _ => unreachable!(),
        };
        assert_eq!(client.title, "Client Information");
        assert_eq!(client.installation_address, "12 Elm St\nToronto, ON");
    }

    #[test]
    fn test_cells_resolve_labels_dimensions_and_price() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        let table = doc
            .sections
            .iter()
            .find_map(|s| match s {
                Section::QuoteDetails(t) => Some(t),
                _ => None,
            })
            .unwrap();

        // First item resolves both catalog references.
        assert_eq!(
            table.rows[0],
            vec!["Base Cabinet", "Maple", "24\"", "30\"", "24\"", "$100.00"]
        );
        // Second item: stale product id and absent material fall back.
        assert_eq!(
            table.rows[1],
            vec![
                "Custom Product",
                "Default",
                "36.5\"",
                "30\"",
                "24\"",
                "$250.00"
            ]
        );
    }

    #[test]
    fn test_column_order_follows_configuration_not_a_fixed_order() {
        let mut template = TemplateSettings::default();
        template.sections.quote_details.columns = vec![
            ColumnConfig::new(ColumnKey::Price, "Price"),
            ColumnConfig::new(ColumnKey::Product, "Item"),
            ColumnConfig {
                key: ColumnKey::Material,
                label: "Material".to_string(),
                enabled: false,
            },
            ColumnConfig::new(ColumnKey::Width, "W"),
        ];
        let doc = render_document(&quote(), &catalog(), &template);
        let table = doc
            .sections
            .iter()
            .find_map(|s| match s {
                Section::QuoteDetails(t) => Some(t),
                _ => None,
            })
            .unwrap();

        let keys: Vec<ColumnKey> = table.columns.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![ColumnKey::Price, ColumnKey::Product, ColumnKey::Width]);
        assert_eq!(table.columns[1].label, "Item");
        assert_eq!(table.rows[0], vec!["$100.00", "Base Cabinet", "24\""]);
    }

    #[test]
    fn test_totals_use_snapshot_at_fixed_thirteen_percent() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        let totals = match doc.sections.iter().find(|s| s.kind() == SectionKind::Totals) {
            Some(Section::Totals(t)) => t,
            _ => unreachable!(),
        };
        assert_eq!(totals.subtotal, Some(350.0));
        let tax = totals.tax.unwrap();
        assert_eq!(tax.rate_percent, 13.0);
        assert_eq!(tax.amount, 45.5);
        assert_eq!(totals.total, Some(395.5));
    }

    #[test]
    fn test_tax_line_needs_both_flags() {
        // sections.totals.show_tax alone is not enough; layout.show_tax_details
        // gates it as well.
        let mut template = TemplateSettings::default();
        template.layout.show_tax_details = false;
        let doc = render_document(&quote(), &catalog(), &template);
        match doc.sections.iter().find(|s| s.kind() == SectionKind::Totals) {
            Some(Section::Totals(t)) => {
                assert!(t.tax.is_none());
                assert!(t.subtotal.is_some());
                assert!(t.total.is_some());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_totals_lines_are_independently_gated() {
        let mut template = TemplateSettings::default();
        template.sections.totals.show_subtotal = false;
        template.sections.totals.show_total = false;
        let doc = render_document(&quote(), &catalog(), &template);
        match doc.sections.iter().find(|s| s.kind() == SectionKind::Totals) {
            Some(Section::Totals(t)) => {
                assert!(t.subtotal.is_none());
                assert!(t.tax.is_some());
                assert!(t.total.is_none());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_footer_notes_gated_terms_always_present() {
        let mut template = TemplateSettings::default();
        template.layout.show_footer_notes = false;
        let doc = render_document(&quote(), &catalog(), &template);
        match doc.sections.iter().find(|s| s.kind() == SectionKind::Footer) {
            Some(Section::Footer(f)) => {
                assert!(f.notes.is_none());
                assert!(!f.terms.is_empty());
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_actions_compose_mailto_and_tel() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        let actions = match doc.sections.last() {
            Some(Section::Actions(a)) => a,
            _ => unreachable!(),
        };
        assert_eq!(
            actions.email_href,
            "mailto:quotes@cabinetquote.example?subject=Quote \
             3f2b1c9a-77aa-4a24-9d2e-51f0cf3b2a10 Inquiry"
        );
        assert_eq!(actions.phone_href, "tel:4165550142");
        assert_eq!(actions.pdf_quote_id, quote().id);
    }

    #[test]
    fn test_document_state_from_lookup() {
        let template = TemplateSettings::default();
        let q = quote();
        match DocumentState::from_lookup(Some(&q), &catalog(), &template) {
            DocumentState::Ready(doc) => assert_eq!(doc.quote_id, q.id),
            other => panic!("expected Ready, got {:?}", other),
        }
        // A failed lookup is terminal NotFound, never Loading.
        assert_eq!(
            DocumentState::from_lookup(None, &catalog(), &template),
            DocumentState::NotFound
        );
    }

    #[test]
    fn test_document_state_serde_tags() {
        assert_eq!(
            serde_json::to_string(&DocumentState::Loading).unwrap(),
            "{\"state\":\"loading\"}"
        );
        assert_eq!(
            serde_json::to_string(&DocumentState::NotFound).unwrap(),
            "{\"state\":\"notFound\"}"
        );
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_inches(24.0), "24\"");
        assert_eq!(format_inches(36.5), "36.5\"");
        assert_eq!(format_currency(350.0), "$350.00");
        assert_eq!(format_currency(45.5), "$45.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_style_lifted_from_layout() {
        let doc = render_document(&quote(), &catalog(), &TemplateSettings::default());
        assert_eq!(doc.style.primary_color, "#4F46E5");
        assert_eq!(doc.style.font_family, "Inter, sans-serif");
    }
}
