//! # CabinetQuote Desk Library
//!
//! The command layer a UI shell drives, plus application state and the API
//! error type.
//!
//! ## Module Organization
//! ```text
//! cabquote_desk/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── state.rs        ◄─── AppState (quote/catalog/template/preset stores)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── quote.rs    ◄─── List/view/save/delete quotes
//! │   ├── catalog.rs  ◄─── Product/material retrieval
//! │   ├── config.rs   ◄─── Template settings & preset values
//! │   └── document.rs ◄─── Client document assembly + PDF hook
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! A shell (Tauri window, web server, the terminal preview in `main.rs`)
//! constructs an [`state::AppState`] once and forwards user interactions to
//! the command functions. The commands are synchronous: every lookup is a
//! local in-memory read, so there is nothing to await.

pub mod commands;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cabquote=trace` - Show trace for cabquote crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cabquote=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
