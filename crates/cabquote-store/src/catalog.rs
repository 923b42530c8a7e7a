//! # Catalog Store
//!
//! The product and material catalog the quote builder picks from and the
//! document renderer resolves against.
//!
//! Ships with a seeded cabinetry catalog so a fresh install (and the demo
//! quote) has something real to show. Ids are stable slugs, not random
//! UUIDs, so stored quotes keep resolving across reinstalls.

use cabquote_core::types::{Material, Product};

/// Seeded products: (id, name, category).
const PRODUCT_SEED: &[(&str, &str, &str)] = &[
    ("prd-base", "Base Cabinet", "Base"),
    ("prd-drawer", "Drawer Base", "Base"),
    ("prd-sink", "Sink Base", "Base"),
    ("prd-corner", "Corner Cabinet", "Base"),
    ("prd-wall", "Wall Cabinet", "Wall"),
    ("prd-wall-glass", "Glass Door Wall Cabinet", "Wall"),
    ("prd-tall", "Tall Pantry Cabinet", "Tall"),
    ("prd-oven", "Oven Housing", "Tall"),
    ("prd-island", "Island Unit", "Island"),
    ("prd-vanity", "Vanity Cabinet", "Bath"),
];

/// Seeded materials: (id, name, finish).
const MATERIAL_SEED: &[(&str, &str, &str)] = &[
    ("mat-maple", "Maple", "Natural"),
    ("mat-oak", "Oak", "Stained"),
    ("mat-walnut", "Walnut", "Natural"),
    ("mat-cherry", "Cherry", "Stained"),
    ("mat-birch", "Birch Plywood", "Clear Coat"),
    ("mat-mdf", "MDF", "Painted"),
    ("mat-melamine", "White Melamine", "Matte"),
    ("mat-thermofoil", "Thermofoil", "Gloss"),
];

/// Read-only catalog of products and materials.
///
/// Read-only after construction, so no mutex is needed. Catalog editing is
/// a future concern; quotes already tolerate it because they reference by id
/// and the renderer falls back on unresolved references.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    materials: Vec<Material>,
}

impl CatalogStore {
    /// The seeded cabinetry catalog.
    pub fn with_seed() -> Self {
        CatalogStore {
            products: PRODUCT_SEED
                .iter()
                .map(|(id, name, category)| Product {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: None,
                    category: Some(category.to_string()),
                })
                .collect(),
            materials: MATERIAL_SEED
                .iter()
                .map(|(id, name, finish)| Material {
                    id: id.to_string(),
                    name: name.to_string(),
                    finish: Some(finish.to_string()),
                })
                .collect(),
        }
    }

    /// A catalog with explicit contents (tests).
    pub fn new(products: Vec<Product>, materials: Vec<Material>) -> Self {
        CatalogStore {
            products,
            materials,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// All materials, in catalog order.
    pub fn materials(&self) -> Vec<Material> {
        self.materials.clone()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::with_seed()
    }
}
