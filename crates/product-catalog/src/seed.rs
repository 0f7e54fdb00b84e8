//! Static startup data: the initial products, the category list, and the color palette.
//!
//! The default seed is compiled in from `data/seed.json`. A different file can be named
//! with `CATALOG_SEED_PATH` (see [`CatalogConfig`](crate::config::CatalogConfig)).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Category, ColorToken, Product};

const EMBEDDED_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Initial collection, listed newest first.
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    /// Swatches offered by the color picker.
    #[serde(default)]
    pub colors: Vec<ColorToken>,
}

impl Seed {
    /// The seed bundled with the crate.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Seed(format!("{}: {e}", path.display())))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let seed: Seed =
            serde_json::from_str(raw).map_err(|e| CatalogError::Seed(e.to_string()))?;
        seed.check()?;
        Ok(seed)
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::Seed("at least one category is required".into()));
        }
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::Seed(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(())
    }
}
