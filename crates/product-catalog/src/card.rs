//! Card view models for the product grid.

use serde::Serialize;

use crate::model::{ColorToken, Product, ProductId};

/// Characters of description shown on a card before it is cut.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;

/// Cuts `text` to `max` characters and appends ` ...` when it is longer.
pub fn txt_slicer(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut} ...")
    } else {
        text.to_string()
    }
}

/// What one grid card displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price_label: String,
    pub colors: Vec<ColorToken>,
    pub category_name: String,
    pub category_image_url: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            description: txt_slicer(&product.description, DESCRIPTION_PREVIEW_CHARS),
            image_url: product.image_url.clone(),
            price_label: format!("${}", product.price),
            colors: product.colors.clone(),
            category_name: product.category.name.clone(),
            category_image_url: product.category.image_url.clone(),
        }
    }
}
