//! Events for the catalog session actor.
//!
//! Each [`CatalogEvent`] is one user interaction forwarded by the rendering layer. They are
//! applied by the [`SessionState`](session_framework::SessionState) implementation on
//! [`CatalogSession`](crate::session::CatalogSession).

use crate::model::{Category, ColorToken, DraftChange};
use crate::session::SubmitOutcome;

/// User interactions with the catalog screen.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// Opens the "add product" form.
    Open,
    /// Discards the draft and closes the form.
    Cancel,
    /// Edits one draft field.
    Change(DraftChange),
    /// Toggles a color swatch.
    ToggleColor(ColorToken),
    /// Selects a category by name.
    SelectCategory(String),
    /// Validates and commits the draft.
    Submit,
}

/// Results from CatalogEvents - variants match 1:1 with CatalogEvent
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogOutcome {
    Open(()),
    Cancel(()),
    Change(()),
    /// Whether the color is selected after the toggle.
    ToggleColor(bool),
    SelectCategory(Category),
    Submit(SubmitOutcome),
}
