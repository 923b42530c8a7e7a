//! # Command Modules
//!
//! The functions a UI shell registers and invokes. Each command takes
//! `&AppState` plus its inputs and returns a serializable DTO or
//! `Result<_, ApiError>`; nothing here holds state of its own.

pub mod catalog;
pub mod config;
pub mod document;
pub mod quote;
