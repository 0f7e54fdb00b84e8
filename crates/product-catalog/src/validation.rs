//! # Draft Validation
//!
//! [`validate`] maps a draft (plus its selected colors) to an [`ErrorMap`]. It is a pure
//! function: same input, same output, no side effects.
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | title | trimmed length within `rules.title` (default 10..=80) | `Product title must be between 10 and 80 characters!` |
//! | description | trimmed length within `rules.description` (default 10..=900) | `Product description must be between 10 and 900 characters!` |
//! | imageURL | non-empty after trimming | `Valid image URL is required!` |
//! | price | unsigned text that parses as a finite number `>= 0` | `Valid price is required!` |
//! | colors | at least one selected, only when `rules.require_color` | `Select at least one color!` |
//!
//! Lengths are counted in characters, not bytes.

use serde::{Deserialize, Serialize};

use crate::model::{ColorToken, Draft, ErrorMap, ProductField};

pub const IMAGE_URL_MESSAGE: &str = "Valid image URL is required!";
pub const PRICE_MESSAGE: &str = "Valid price is required!";
pub const COLORS_MESSAGE: &str = "Select at least one color!";

/// Inclusive character-count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

pub const TITLE_RANGE: LengthRange = LengthRange::new(10, 80);
pub const DESCRIPTION_RANGE: LengthRange = LengthRange::new(10, 900);

/// Tunable validation bounds. The title and description ranges are independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub title: LengthRange,
    pub description: LengthRange,
    pub require_color: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            title: TITLE_RANGE,
            description: DESCRIPTION_RANGE,
            require_color: false,
        }
    }
}

impl ValidationRules {
    pub fn title_message(&self) -> String {
        format!(
            "Product title must be between {} and {} characters!",
            self.title.min, self.title.max
        )
    }

    pub fn description_message(&self) -> String {
        format!(
            "Product description must be between {} and {} characters!",
            self.description.min, self.description.max
        )
    }
}

/// Validates every field of `draft` and returns the full error map.
pub fn validate(draft: &Draft, colors: &[ColorToken], rules: &ValidationRules) -> ErrorMap {
    let mut errors = ErrorMap::default();

    if !rules.title.contains(trimmed_len(&draft.title)) {
        errors.set(ProductField::Title, rules.title_message());
    }
    if !rules.description.contains(trimmed_len(&draft.description)) {
        errors.set(ProductField::Description, rules.description_message());
    }
    if draft.image_url.trim().is_empty() {
        errors.set(ProductField::ImageUrl, IMAGE_URL_MESSAGE);
    }
    if !is_valid_price(&draft.price) {
        errors.set(ProductField::Price, PRICE_MESSAGE);
    }
    if rules.require_color && colors.is_empty() {
        errors.set(ProductField::Colors, COLORS_MESSAGE);
    }

    errors
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Signed input is rejected outright so `-0` never reaches the collection.
fn is_valid_price(value: &str) -> bool {
    let value = value.trim();
    if value.starts_with('-') {
        return false;
    }
    value
        .parse::<f64>()
        .map(|price| price.is_finite() && price >= 0.0)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Draft {
        Draft {
            title: "Wireless Mouse".into(),
            description: "Ergonomic wireless mouse with USB receiver".into(),
            image_url: "http://x/img.png".into(),
            price: "25".into(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate(&valid_draft(), &[], &ValidationRules::default());
        assert!(errors.is_clean(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_short_title_gets_fixed_message_only() {
        let draft = Draft {
            title: "Ab".into(),
            ..valid_draft()
        };
        let errors = validate(&draft, &[], &ValidationRules::default());

        assert_eq!(
            errors.title,
            "Product title must be between 10 and 80 characters!"
        );
        assert_eq!(errors.invalid_fields(), vec![ProductField::Title]);
    }

    #[test]
    fn test_title_bounds_are_inclusive_and_trimmed() {
        let rules = ValidationRules::default();
        let at_min = Draft {
            title: format!("  {}  ", "a".repeat(10)),
            ..valid_draft()
        };
        let at_max = Draft {
            title: "a".repeat(80),
            ..valid_draft()
        };
        let over_max = Draft {
            title: "a".repeat(81),
            ..valid_draft()
        };
        let padded_short = Draft {
            title: format!("{}{}", "a".repeat(9), " ".repeat(5)),
            ..valid_draft()
        };

        assert!(validate(&at_min, &[], &rules).title.is_empty());
        assert!(validate(&at_max, &[], &rules).title.is_empty());
        assert!(!validate(&over_max, &[], &rules).title.is_empty());
        assert!(!validate(&padded_short, &[], &rules).title.is_empty());
    }

    #[test]
    fn test_description_allows_up_to_900_characters() {
        let rules = ValidationRules::default();
        let long = Draft {
            description: "d".repeat(900),
            ..valid_draft()
        };
        let too_long = Draft {
            description: "d".repeat(901),
            ..valid_draft()
        };

        assert!(validate(&long, &[], &rules).is_clean());
        assert_eq!(
            validate(&too_long, &[], &rules).description,
            "Product description must be between 10 and 900 characters!"
        );
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let draft = Draft {
            title: "é".repeat(10),
            ..valid_draft()
        };
        assert!(validate(&draft, &[], &ValidationRules::default()).is_clean());
    }

    #[test]
    fn test_price_rules() {
        let rules = ValidationRules::default();
        for ok in ["0", "25", " 19.99 ", "1e2"] {
            let draft = Draft {
                price: ok.into(),
                ..valid_draft()
            };
            assert!(validate(&draft, &[], &rules).price.is_empty(), "{ok} should pass");
        }
        for bad in ["", "abc", "-1", "-0", " -0.0", "NaN", "inf", "$5"] {
            let draft = Draft {
                price: bad.into(),
                ..valid_draft()
            };
            assert_eq!(validate(&draft, &[], &rules).price, PRICE_MESSAGE, "{bad} should fail");
        }
    }

    #[test]
    fn test_blank_image_url_is_rejected() {
        let draft = Draft {
            image_url: "   ".into(),
            ..valid_draft()
        };
        let errors = validate(&draft, &[], &ValidationRules::default());
        assert_eq!(errors.image_url, IMAGE_URL_MESSAGE);
    }

    #[test]
    fn test_colors_only_checked_when_required() {
        let mut rules = ValidationRules::default();
        assert!(validate(&valid_draft(), &[], &rules).colors.is_empty());

        rules.require_color = true;
        assert_eq!(validate(&valid_draft(), &[], &rules).colors, COLORS_MESSAGE);
        assert!(validate(&valid_draft(), &[ColorToken::from("#000000")], &rules).is_clean());
    }

    #[test]
    fn test_custom_ranges_change_bounds_and_message() {
        let rules = ValidationRules {
            title: LengthRange::new(2, 4),
            ..ValidationRules::default()
        };
        let draft = Draft {
            title: "Ab".into(),
            ..valid_draft()
        };
        assert!(validate(&draft, &[], &rules).is_clean());

        let draft = Draft {
            title: "Abcde".into(),
            ..valid_draft()
        };
        assert_eq!(
            validate(&draft, &[], &rules).title,
            "Product title must be between 2 and 4 characters!"
        );
    }

    #[test]
    fn test_every_field_invalid_at_once() {
        let rules = ValidationRules {
            require_color: true,
            ..ValidationRules::default()
        };
        let errors = validate(&Draft::default(), &[], &rules);
        assert_eq!(errors.invalid_fields(), ProductField::ALL.to_vec());
    }
}
