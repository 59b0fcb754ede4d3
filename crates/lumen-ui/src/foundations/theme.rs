//! Class-name token tables for themed components.
//!
//! # Design
//! - Tables are plain data; resolution lives in [`crate::foundations::style`].
//! - JSON documents override any subset of the built-in tokens; nested
//!   objects merge key by key instead of replacing whole sections.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundations::error::ThemeError;
use crate::foundations::tokens::{ButtonLayout, ButtonSize};

/// Padding and text classes per size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeTokens {
    /// `larger` size.
    pub larger: String,
    /// `large` size.
    pub large: String,
    /// `regular` size.
    pub regular: String,
    /// `small` size.
    pub small: String,
    /// `pagination` size.
    pub pagination: String,
    /// Square padding used when the button shows only an icon.
    pub icon: IconPaddingTokens,
}

impl SizeTokens {
    /// Class for a button that carries a text label.
    #[must_use]
    pub fn labelled(&self, size: ButtonSize) -> &str {
        match size {
            ButtonSize::Larger => &self.larger,
            ButtonSize::Large => &self.large,
            ButtonSize::Regular => &self.regular,
            ButtonSize::Small => &self.small,
            ButtonSize::Pagination => &self.pagination,
        }
    }

    /// Class for an icon-only button. Pagination reuses the regular padding.
    #[must_use]
    pub fn icon_only(&self, size: ButtonSize) -> &str {
        match size {
            ButtonSize::Larger => &self.icon.larger,
            ButtonSize::Large => &self.icon.large,
            ButtonSize::Regular | ButtonSize::Pagination => &self.icon.regular,
            ButtonSize::Small => &self.icon.small,
        }
    }
}

/// Icon-only padding per size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconPaddingTokens {
    /// `larger` size.
    pub larger: String,
    /// `large` size.
    pub large: String,
    /// `regular` size.
    pub regular: String,
    /// `small` size.
    pub small: String,
}

/// Glyph sizing and spacing modifiers for icons inside a button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconTokens {
    /// `larger` size.
    pub larger: String,
    /// `large` size.
    pub large: String,
    /// `regular` size.
    pub regular: String,
    /// `small` size.
    pub small: String,
    /// Spacing for a leading icon followed by a label.
    pub left: String,
    /// Spacing for a trailing icon preceded by a label.
    pub right: String,
}

impl IconTokens {
    /// Glyph sizing class for the given button size. Pagination glyphs are
    /// left unsized.
    #[must_use]
    pub fn glyph(&self, size: ButtonSize) -> Option<&str> {
        match size {
            ButtonSize::Larger => Some(&self.larger),
            ButtonSize::Large => Some(&self.large),
            ButtonSize::Regular => Some(&self.regular),
            ButtonSize::Small => Some(&self.small),
            ButtonSize::Pagination => None,
        }
    }
}

/// Classes for one layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutTokens {
    /// Always applied.
    pub base: String,
    /// Applied to enabled buttons.
    pub active: String,
    /// Applied to disabled buttons.
    pub disabled: String,
}

/// Classes for buttons rendered as dropdown menu rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DropdownItemTokens {
    /// The only class applied to a menu row.
    pub base: String,
}

/// Every class token the button reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonTheme {
    /// Classes shared by every layout.
    pub base: String,
    /// Full-width modifier.
    pub block: String,
    /// Per-size padding.
    pub size: SizeTokens,
    /// Icon sizing and spacing.
    pub icon: IconTokens,
    /// `primary` layout.
    pub primary: LayoutTokens,
    /// `outline` layout.
    pub outline: LayoutTokens,
    /// `link` layout.
    pub link: LayoutTokens,
    /// Menu row variant.
    pub dropdown_item: DropdownItemTokens,
}

impl ButtonTheme {
    /// Token set for a caller-facing layout.
    #[must_use]
    pub const fn layout(&self, layout: ButtonLayout) -> &LayoutTokens {
        match layout {
            ButtonLayout::Primary => &self.primary,
            ButtonLayout::Outline => &self.outline,
            ButtonLayout::Link => &self.link,
        }
    }
}

fn owned(value: &str) -> String {
    value.to_string()
}

impl Default for ButtonTheme {
    fn default() -> Self {
        Self {
            base: owned(
                "align-bottom inline-flex items-center justify-center cursor-pointer leading-5 transition-colors duration-150 font-medium focus:outline-none",
            ),
            block: owned("w-full"),
            size: SizeTokens {
                larger: owned("px-10 py-4 rounded-lg"),
                large: owned("px-5 py-3 rounded-lg"),
                regular: owned("px-4 py-2 rounded-lg text-sm"),
                small: owned("px-3 py-1 rounded-md text-sm"),
                pagination: owned("px-3 py-1 rounded-md text-xs"),
                icon: IconPaddingTokens {
                    larger: owned("p-4 rounded-lg"),
                    large: owned("p-3 rounded-lg"),
                    regular: owned("p-2 rounded-lg"),
                    small: owned("p-2 rounded-md"),
                },
            },
            icon: IconTokens {
                larger: owned("h-5 w-5"),
                large: owned("h-5 w-5"),
                regular: owned("h-5 w-5"),
                small: owned("h-3 w-3"),
                left: owned("mr-2 -ml-1"),
                right: owned("ml-2 -mr-1"),
            },
            primary: LayoutTokens {
                base: owned("text-white bg-purple-600 border border-transparent"),
                active: owned(
                    "active:bg-purple-600 hover:bg-purple-700 focus:ring focus:ring-purple-300",
                ),
                disabled: owned("opacity-50 cursor-not-allowed"),
            },
            outline: LayoutTokens {
                base: owned("text-gray-600 border-gray-300 border dark:text-gray-400"),
                active: owned(
                    "active:bg-transparent hover:border-gray-500 focus:border-gray-500 active:text-gray-500 focus:ring focus:ring-gray-300",
                ),
                disabled: owned("opacity-50 cursor-not-allowed bg-gray-300"),
            },
            link: LayoutTokens {
                base: owned("text-gray-600 dark:text-gray-400 border border-transparent"),
                active: owned(
                    "active:bg-transparent hover:bg-gray-100 focus:ring focus:ring-gray-300 dark:hover:bg-gray-500 dark:hover:text-gray-300 dark:hover:bg-opacity-10",
                ),
                disabled: owned("opacity-50 cursor-not-allowed"),
            },
            dropdown_item: DropdownItemTokens {
                base: owned(
                    "inline-flex items-center cursor-pointer w-full px-2 py-1 text-sm font-medium transition-colors duration-150 rounded-md hover:bg-gray-100 hover:text-gray-800 dark:hover:bg-gray-800 dark:hover:text-gray-200",
                ),
            },
        }
    }
}

/// Serializable root of a theme document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeTokens {
    /// Button tokens.
    pub button: ButtonTheme,
}

/// Shared, read-only theme handle passed through component context.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    tokens: Rc<ThemeTokens>,
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tokens, &other.tokens) || self.tokens == other.tokens
    }
}

impl Theme {
    /// Wrap an owned token set.
    #[must_use]
    pub fn new(tokens: ThemeTokens) -> Self {
        Self {
            tokens: Rc::new(tokens),
        }
    }

    /// Load a theme whose values override the built-in defaults.
    ///
    /// Nested objects are merged key by key, so `{"button": {"primary":
    /// {"base": "..."}}}` only replaces the primary base class.
    pub fn from_json(document: &str) -> Result<Self, ThemeError> {
        let patch: Value =
            serde_json::from_str(document).map_err(|detail| ThemeError::Syntax { detail })?;
        if !patch.is_object() {
            return Err(ThemeError::NotAnObject);
        }
        let mut merged = serde_json::to_value(ThemeTokens::default())
            .map_err(|detail| ThemeError::Schema { detail })?;
        merge_values(&mut merged, patch);
        let tokens: ThemeTokens =
            serde_json::from_value(merged).map_err(|detail| ThemeError::Schema { detail })?;
        Ok(Self::new(tokens))
    }

    /// Full token set.
    #[must_use]
    pub fn tokens(&self) -> &ThemeTokens {
        &self.tokens
    }

    /// Button tokens.
    #[must_use]
    pub fn button(&self) -> &ButtonTheme {
        &self.tokens.button
    }
}

impl From<ThemeTokens> for Theme {
    fn from(tokens: ThemeTokens) -> Self {
        Self::new(tokens)
    }
}

impl From<ButtonTheme> for Theme {
    fn from(button: ButtonTheme) -> Self {
        Self::new(ThemeTokens { button })
    }
}

/// Recursively overlay `patch` onto `base`; non-object values replace.
fn merge_values(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(target), Value::Object(source)) => merge_maps(target, source),
        (slot, value) => *slot = value,
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_reuses_regular_padding_and_leaves_glyph_unsized() {
        let theme = ButtonTheme::default();
        assert_eq!(theme.size.icon_only(ButtonSize::Small), "p-2 rounded-md");
        assert_eq!(
            theme.size.icon_only(ButtonSize::Pagination),
            theme.size.icon.regular
        );
        assert_eq!(theme.icon.glyph(ButtonSize::Regular), Some("h-5 w-5"));
        assert_eq!(theme.icon.glyph(ButtonSize::Pagination), None);
    }

    #[test]
    fn partial_override_keeps_sibling_tokens() {
        let theme = Theme::from_json(r#"{"button": {"primary": {"base": "bg-brand"}}}"#)
            .expect("theme should load");
        let defaults = ButtonTheme::default();
        assert_eq!(theme.button().primary.base, "bg-brand");
        assert_eq!(theme.button().primary.active, defaults.primary.active);
        assert_eq!(theme.button().outline, defaults.outline);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let theme = Theme::from_json("{}").expect("theme should load");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Theme::from_json(r#"{"button": {"primry": {}}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Schema { .. }));
    }

    #[test]
    fn non_object_roots_are_rejected() {
        assert!(matches!(
            Theme::from_json("[]").unwrap_err(),
            ThemeError::NotAnObject
        ));
        assert!(matches!(
            Theme::from_json("{").unwrap_err(),
            ThemeError::Syntax { .. }
        ));
    }

    #[test]
    fn wrong_value_shape_is_a_schema_error() {
        let err = Theme::from_json(r#"{"button": {"block": 3}}"#).unwrap_err();
        assert!(matches!(err, ThemeError::Schema { .. }));
    }
}
