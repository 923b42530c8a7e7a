//! # cabquote-store: Local Data Services for CabinetQuote
//!
//! The collaborators the core computes against: quotes, the catalog,
//! template settings, and preset values, all served from local JSON
//! documents.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cabquote-store                                   │
//! │                                                                         │
//! │   app-data dir (directories::ProjectDirs, CABQUOTE_DATA_DIR override)  │
//! │   ├── quotes.json     ◄── QuoteStore    list/get/save/delete           │
//! │   ├── template.json   ◄── TemplateStore get/update                     │
//! │   └── presets.json    ◄── PresetStore   get/update (fresh per render)  │
//! │                                                                         │
//! │   CatalogStore is seeded in code (stable slug ids); the demo quote     │
//! │   lives in `demo` and never touches disk.                              │
//! │                                                                         │
//! │   Reads serve from memory; every mutation rewrites its document.       │
//! │   One JSON document per concern - no query engine, no migrations.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`quotes`] - Quote list/get/save/delete with snapshot-total upkeep
//! - [`catalog`] - Seeded product/material catalog
//! - [`template`] - Template settings document
//! - [`presets`] - Preset values document
//! - [`demo`] - The fixed demo quote
//! - [`storage`] - Data directory + JSON document helpers
//! - [`error`] - Store error types

pub mod catalog;
pub mod demo;
pub mod error;
pub mod presets;
pub mod quotes;
pub mod storage;
pub mod template;

pub use catalog::CatalogStore;
pub use demo::demo_quote;
pub use error::{StoreError, StoreResult};
pub use presets::PresetStore;
pub use quotes::QuoteStore;
pub use template::TemplateStore;
