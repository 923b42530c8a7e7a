//! # Client Document Preview
//!
//! Renders a quote's client-facing document in the terminal, driving exactly
//! the commands a graphical shell would.
//!
//! ## Usage
//! ```bash
//! # Preview the demo quote (default)
//! cargo run -p cabquote-desk --bin cabquote
//!
//! # Preview a stored quote
//! cargo run -p cabquote-desk --bin cabquote -- 3f2b1c9a-77aa-4a24-9d2e-51f0cf3b2a10
//!
//! # List stored quotes
//! cargo run -p cabquote-desk --bin cabquote -- --list
//! ```
//!
//! Stores live in the platform app-data directory; set `CABQUOTE_DATA_DIR`
//! to point at a scratch folder instead.

use std::env;
use std::process::ExitCode;

use tracing::warn;

use cabquote_core::document::{DocumentState, QuoteDocument, Section};
use cabquote_desk::commands::document::client_document;
use cabquote_desk::commands::quote::list_quotes;
use cabquote_desk::state::AppState;

fn main() -> ExitCode {
    cabquote_desk::init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut quote_id = String::from(cabquote_core::DEMO_QUOTE_ID);
    let mut list_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" | "-l" => {
                list_only = true;
            }
            "--help" | "-h" => {
                println!("CabinetQuote Client Document Preview");
                println!();
                println!("Usage: cabquote [OPTIONS] [QUOTE_ID]");
                println!();
                println!("Arguments:");
                println!("  QUOTE_ID           Quote to render (default: demo)");
                println!();
                println!("Options:");
                println!("  -l, --list         List stored quotes instead of rendering");
                println!("  -h, --help         Show this help message");
                return ExitCode::SUCCESS;
            }
            other => {
                quote_id = other.to_string();
            }
        }
        i += 1;
    }

    // File-backed stores when the data directory is usable, scratch state
    // otherwise (the demo quote works either way).
    let state = match AppState::open() {
        Ok(state) => state,
        Err(e) => {
            warn!("falling back to in-memory stores: {}", e);
            AppState::in_memory()
        }
    };

    if list_only {
        print_quote_list(&state);
        return ExitCode::SUCCESS;
    }

    match client_document(&state, &quote_id) {
        DocumentState::Ready(document) => {
            print_document(&document);
            ExitCode::SUCCESS
        }
        DocumentState::NotFound => {
            eprintln!("Quote not found: {}", quote_id);
            eprintln!("Run with --list to see stored quotes, or use 'demo'.");
            ExitCode::FAILURE
        }
        DocumentState::Loading => unreachable!("synchronous command cannot be loading"),
    }
}

fn print_quote_list(state: &AppState) {
    let rows = list_quotes(state, None);
    if rows.is_empty() {
        println!("No stored quotes. Render the demo with: cabquote demo");
        return;
    }

    println!("{} stored quote(s):", rows.len());
    println!();
    for row in rows {
        println!(
            "  {}  {:<24} {:<28} {:>10}  {}",
            row.quote_number,
            row.client_name,
            row.project_name,
            cabquote_core::document::format_currency(row.total),
            row.status_label,
        );
    }
}

fn print_document(document: &QuoteDocument) {
    let rule = "=".repeat(72);

    for section in &document.sections {
        match section {
            Section::Header(header) => {
                println!("{}", rule);
                println!("{}", header.company_name);
                if let Some(contact) = &header.company_contact {
                    for line in &contact.address_lines {
                        println!("{}", line);
                    }
                    println!("{}", contact.email);
                    println!("{}", contact.phone);
                }
                println!();
                println!("Quote #{}", header.quote_number);
                println!("Date: {}", header.issued_on.format("%B %e, %Y"));
                if let Some(valid_until) = header.valid_until {
                    println!("Valid until: {}", valid_until.format("%B %e, %Y"));
                }
                println!("{}", rule);
            }
            Section::ClientInfo(client) => {
                println!();
                println!("{}", client.title);
                println!("  {}", client.client_name);
                println!("  {}", client.email);
                println!("  {}", client.phone);
                for line in client.installation_address.lines() {
                    println!("  {}", line);
                }
            }
            Section::QuoteDetails(table) => {
                println!();
                println!("{}", table.space_name);
                print_table(table);
            }
            Section::Totals(totals) => {
                println!();
                if let Some(subtotal) = totals.subtotal {
                    println!(
                        "  {:<16}{:>12}",
                        "Subtotal",
                        cabquote_core::document::format_currency(subtotal)
                    );
                }
                if let Some(tax) = totals.tax {
                    println!(
                        "  {:<16}{:>12}",
                        format!("Tax ({}%)", tax.rate_percent),
                        cabquote_core::document::format_currency(tax.amount)
                    );
                }
                if let Some(total) = totals.total {
                    println!(
                        "  {:<16}{:>12}",
                        "Total",
                        cabquote_core::document::format_currency(total)
                    );
                }
            }
            Section::Footer(footer) => {
                println!();
                if let Some(notes) = &footer.notes {
                    println!("{}", notes);
                }
                println!("{}", footer.terms);
            }
            Section::Actions(actions) => {
                println!();
                println!("Contact: {}", actions.email_href);
                println!("Call:    {}", actions.phone_href);
            }
        }
    }
}

/// Prints one space table with columns sized to their widest cell.
fn print_table(table: &cabquote_core::document::SpaceTable) {
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.label.len()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header: Vec<String> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:<width$}", c.label, width = widths[i]))
        .collect();
    println!("  {}", header.join("  "));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("  {}", cells.join("  "));
    }
}
