//! Ordered color selection for the draft being edited.

use serde::{Deserialize, Serialize};

use crate::model::ColorToken;

/// Insertion-ordered set of selected colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorSelection {
    tokens: Vec<ColorToken>,
}

impl ColorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `token` if selected, otherwise appends it.
    ///
    /// Returns whether the token is selected afterwards.
    pub fn toggle(&mut self, token: ColorToken) -> bool {
        if self.contains(&token) {
            self.tokens.retain(|selected| *selected != token);
            false
        } else {
            self.tokens.push(token);
            true
        }
    }

    pub fn contains(&self, token: &ColorToken) -> bool {
        self.tokens.contains(token)
    }

    pub fn as_slice(&self) -> &[ColorToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(tokens: &[&str]) -> ColorSelection {
        let mut selection = ColorSelection::new();
        for token in tokens {
            selection.toggle(ColorToken::from(*token));
        }
        selection
    }

    #[test]
    fn test_toggle_appends_absent_and_removes_present() {
        let mut colors = ColorSelection::new();

        assert!(colors.toggle("#a855f7".into()));
        assert!(colors.toggle("#2563eb".into()));
        assert!(!colors.toggle("#a855f7".into()));

        assert_eq!(colors.as_slice(), &[ColorToken::from("#2563eb")]);
    }

    #[test]
    fn test_double_toggle_moves_token_to_the_end() {
        let mut colors = selection(&["#1", "#2", "#3"]);

        colors.toggle("#1".into());
        colors.toggle("#1".into());

        assert_eq!(colors, selection(&["#2", "#3", "#1"]));
    }

    #[test]
    fn test_double_toggle_of_absent_token_restores_contents() {
        let mut colors = selection(&["#1", "#2"]);
        let before = colors.clone();

        colors.toggle("#9".into());
        colors.toggle("#9".into());

        assert_eq!(colors, before);
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut colors = selection(&["#1"]);
        colors.clear();
        assert!(colors.is_empty());
        assert_eq!(colors.len(), 0);
    }
}
