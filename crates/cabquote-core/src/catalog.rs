//! # Catalog Lookup
//!
//! Indexed product/material lookup for document rendering.
//!
//! Line items reference catalog entities by id rather than embedding them,
//! so a quote tolerates catalog edits made after its creation. The price a
//! client sees never depends on these lookups; only display labels do, and
//! an unresolved reference degrades to a fallback label instead of failing.

use std::collections::HashMap;

use crate::types::{Material, Product};

/// Fallback label for a line item whose product reference is absent or no
/// longer resolves.
pub const CUSTOM_PRODUCT_LABEL: &str = "Custom Product";

/// Fallback label for a line item whose material reference is absent or no
/// longer resolves.
pub const DEFAULT_MATERIAL_LABEL: &str = "Default";

/// Id-indexed view over the catalog, built once per render.
///
/// A direct map lookup is all this needs; there is no caching across
/// renders and no secondary indexing at this scale.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: HashMap<String, Product>,
    materials: HashMap<String, Material>,
}

impl Catalog {
    /// Indexes the given catalog entities by id.
    pub fn new(products: Vec<Product>, materials: Vec<Material>) -> Self {
        Catalog {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
            materials: materials.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    /// An empty catalog. Every lookup resolves to the fallback labels.
    pub fn empty() -> Self {
        Catalog {
            products: HashMap::new(),
            materials: HashMap::new(),
        }
    }

    /// Display label for a product reference.
    ///
    /// `None` references and ids that no longer resolve both yield
    /// [`CUSTOM_PRODUCT_LABEL`]; this is a recovery, not an error.
    pub fn product_label(&self, product_id: Option<&str>) -> String {
        product_id
            .and_then(|id| self.products.get(id))
            .map(|p| p.name.clone())
            .unwrap_or_else(|| CUSTOM_PRODUCT_LABEL.to_string())
    }

    /// Display label for a material reference, falling back to
    /// [`DEFAULT_MATERIAL_LABEL`].
    pub fn material_label(&self, material_id: Option<&str>) -> String {
        material_id
            .and_then(|id| self.materials.get(id))
            .map(|m| m.name.clone())
            .unwrap_or_else(|| DEFAULT_MATERIAL_LABEL.to_string())
    }

    /// Number of products in the index.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Number of materials in the index.
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}
