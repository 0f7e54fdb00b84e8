//! Per-field validation messages for the active draft.

use serde::{Deserialize, Serialize};

use super::ProductField;

/// One message slot per validated field. An empty string means "no error".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMap {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
    pub colors: String,
}

impl ErrorMap {
    pub fn get(&self, field: ProductField) -> &str {
        match field {
            ProductField::Title => &self.title,
            ProductField::Description => &self.description,
            ProductField::ImageUrl => &self.image_url,
            ProductField::Price => &self.price,
            ProductField::Colors => &self.colors,
        }
    }

    pub fn set(&mut self, field: ProductField, message: impl Into<String>) {
        *self.slot_mut(field) = message.into();
    }

    pub fn clear(&mut self, field: ProductField) {
        self.slot_mut(field).clear();
    }

    /// `true` when every field is free of errors.
    pub fn is_clean(&self) -> bool {
        ProductField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    /// Fields carrying a message, in form order.
    pub fn invalid_fields(&self) -> Vec<ProductField> {
        ProductField::ALL
            .into_iter()
            .filter(|field| !self.get(*field).is_empty())
            .collect()
    }

    fn slot_mut(&mut self, field: ProductField) -> &mut String {
        match field {
            ProductField::Title => &mut self.title,
            ProductField::Description => &mut self.description,
            ProductField::ImageUrl => &mut self.image_url,
            ProductField::Price => &mut self.price,
            ProductField::Colors => &mut self.colors,
        }
    }
}
