//! The in-progress product behind the "add product" form.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Scratch copy of the product being created. Every field holds raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
}

impl Draft {
    /// Overwrites exactly the field named by `change`.
    pub fn apply(&mut self, change: DraftChange) {
        match change {
            DraftChange::Title(value) => self.title = value,
            DraftChange::Description(value) => self.description = value,
            DraftChange::ImageUrl(value) => self.image_url = value,
            DraftChange::Price(value) => self.price = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A validated form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductField {
    Title,
    Description,
    ImageUrl,
    Price,
    Colors,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Description,
        ProductField::ImageUrl,
        ProductField::Price,
        ProductField::Colors,
    ];

    /// Form input name, as used by the rendering layer.
    pub fn name(&self) -> &'static str {
        match self {
            ProductField::Title => "title",
            ProductField::Description => "description",
            ProductField::ImageUrl => "imageURL",
            ProductField::Price => "price",
            ProductField::Colors => "colors",
        }
    }
}

impl Display for ProductField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One edit to one draft field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftChange {
    Title(String),
    Description(String),
    ImageUrl(String),
    Price(String),
}

impl DraftChange {
    /// The field this change targets.
    pub fn field(&self) -> ProductField {
        match self {
            DraftChange::Title(_) => ProductField::Title,
            DraftChange::Description(_) => ProductField::Description,
            DraftChange::ImageUrl(_) => ProductField::ImageUrl,
            DraftChange::Price(_) => ProductField::Price,
        }
    }
}
