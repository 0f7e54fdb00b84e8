//! # Catalog Session
//!
//! [`CatalogSession`] is the whole state of one catalog screen: the committed collection,
//! the form surface, the draft being edited, its error map, the selected colors and the
//! selected category. Every user interaction is a method on it, and each method runs to
//! completion without blocking.
//!
//! ## Form surface
//!
//! ```text
//!            open
//!   Closed ────────► Open
//!     ▲               │
//!     └───────────────┘
//!    cancel / successful submit
//! ```
//!
//! `open` on an open form changes nothing. Every other form operation on a closed form
//! fails with [`CatalogError::FormClosed`] and leaves the session untouched.
//!
//! ## Submit
//!
//! Submit validates the draft. A failing draft replaces the error map and the collection
//! is left as is. A passing draft becomes a [`Product`] with a fresh id, the selected
//! colors and the selected category, and is placed at the front of the collection; the
//! draft, colors and errors are then reset and the form closes.

use serde::Serialize;

use crate::card::ProductCard;
use crate::colors::ColorSelection;
use crate::error::CatalogError;
use crate::ids::IdGenerator;
use crate::model::{
    Category, ColorToken, Draft, DraftChange, ErrorMap, Product, ProductField, ProductId,
};
use crate::seed::Seed;
use crate::validation::{validate, ValidationRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormState {
    Closed,
    Open,
}

/// Result of a submit that was allowed to run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SubmitOutcome {
    /// The draft passed validation and was added under this id.
    Committed(ProductId),
    /// The draft failed validation; these are the new errors.
    Rejected(ErrorMap),
}

/// Everything a renderer needs to redraw the screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSnapshot {
    pub form: FormState,
    pub draft: Draft,
    pub errors: ErrorMap,
    pub selected_colors: Vec<ColorToken>,
    pub selected_category: Category,
    pub categories: Vec<Category>,
    pub palette: Vec<ColorToken>,
    /// Newest first.
    pub products: Vec<Product>,
}

#[derive(Debug, Clone)]
pub struct CatalogSession {
    rules: ValidationRules,
    categories: Vec<Category>,
    palette: Vec<ColorToken>,
    products: Vec<Product>,
    form: FormState,
    draft: Draft,
    errors: ErrorMap,
    colors: ColorSelection,
    category: Category,
}

impl CatalogSession {
    /// Starts a session from seed data. The first seed category is preselected.
    pub fn new(seed: Seed, rules: ValidationRules) -> Result<Self, CatalogError> {
        let category = seed
            .categories
            .first()
            .cloned()
            .ok_or_else(|| CatalogError::Seed("at least one category is required".into()))?;

        Ok(Self {
            rules,
            categories: seed.categories,
            palette: seed.colors,
            products: seed.products,
            form: FormState::Closed,
            draft: Draft::default(),
            errors: ErrorMap::default(),
            colors: ColorSelection::new(),
            category,
        })
    }

    // --- Transitions ---

    /// Opens the form surface.
    pub fn open(&mut self) {
        self.form = FormState::Open;
    }

    /// Discards the draft and closes the form. Errors and the collection are kept.
    pub fn cancel(&mut self) -> Result<(), CatalogError> {
        self.ensure_open()?;
        self.draft.reset();
        self.form = FormState::Closed;
        Ok(())
    }

    /// Writes one field and clears that field's error without re-validating.
    pub fn change(&mut self, change: DraftChange) -> Result<(), CatalogError> {
        self.ensure_open()?;
        let field = change.field();
        self.draft.apply(change);
        self.errors.clear(field);
        Ok(())
    }

    /// Toggles a color for the draft and clears the colors error, like any field edit.
    /// Returns whether the color is selected afterwards.
    pub fn toggle_color(&mut self, token: ColorToken) -> Result<bool, CatalogError> {
        self.ensure_open()?;
        let selected = self.colors.toggle(token);
        self.errors.clear(ProductField::Colors);
        Ok(selected)
    }

    /// Selects the seed category called `name`.
    pub fn select_category(&mut self, name: &str) -> Result<&Category, CatalogError> {
        self.ensure_open()?;
        let category = self
            .categories
            .iter()
            .find(|category| category.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))?;
        self.category = category;
        Ok(&self.category)
    }

    /// Validates the draft and, if it passes, commits it as a new product.
    pub fn submit(&mut self, ids: &dyn IdGenerator) -> Result<SubmitOutcome, CatalogError> {
        self.ensure_open()?;

        let errors = validate(&self.draft, self.colors.as_slice(), &self.rules);
        if !errors.is_clean() {
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let id = ids.next_id();
        if self.products.iter().any(|product| product.id == id) {
            return Err(CatalogError::DuplicateId(id));
        }

        let product = Product::from_draft(
            id.clone(),
            &self.draft,
            self.colors.as_slice(),
            self.category.clone(),
        );
        self.products.insert(0, product);

        self.draft.reset();
        self.colors.clear();
        self.errors = ErrorMap::default();
        self.form = FormState::Closed;
        Ok(SubmitOutcome::Committed(id))
    }

    fn ensure_open(&self) -> Result<(), CatalogError> {
        match self.form {
            FormState::Open => Ok(()),
            FormState::Closed => Err(CatalogError::FormClosed),
        }
    }

    // --- Reads ---

    pub fn form_state(&self) -> FormState {
        self.form
    }

    pub fn is_open(&self) -> bool {
        self.form == FormState::Open
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn selected_colors(&self) -> &[ColorToken] {
        self.colors.as_slice()
    }

    pub fn selected_category(&self) -> &Category {
        &self.category
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Card view models for the grid, newest first.
    pub fn cards(&self) -> Vec<ProductCard> {
        self.products.iter().map(ProductCard::from).collect()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            form: self.form,
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            selected_colors: self.colors.as_slice().to_vec(),
            selected_category: self.category.clone(),
            categories: self.categories.clone(),
            palette: self.palette.clone(),
            products: self.products.clone(),
        }
    }
}
