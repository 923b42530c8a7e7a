//! # Catalog Commands
//!
//! Product and material retrieval for the quote builder and catalog page.

use tracing::debug;

use cabquote_core::types::{Material, Product};

use crate::state::AppState;

/// All catalog products, in catalog order.
pub fn get_products(state: &AppState) -> Vec<Product> {
    debug!("get_products command");
    state.catalog.products()
}

/// All catalog materials, in catalog order.
pub fn get_materials(state: &AppState) -> Vec<Material> {
    debug!("get_materials command");
    state.catalog.materials()
}
