//! Enumerated style axes shared by the resolver and the component props.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundations::error::TokenError;

/// Relative dimension of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Largest padding step.
    Larger,
    /// Large padding.
    Large,
    /// Default size.
    #[default]
    Regular,
    /// Compact padding.
    Small,
    /// Tight size used by page selectors.
    Pagination,
}

impl ButtonSize {
    /// Every size in ascending declaration order.
    pub const ALL: [Self; 5] = [
        Self::Larger,
        Self::Large,
        Self::Regular,
        Self::Small,
        Self::Pagination,
    ];

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Larger => "larger",
            Self::Large => "large",
            Self::Regular => "regular",
            Self::Small => "small",
            Self::Pagination => "pagination",
        }
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonSize {
    type Err = TokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| TokenError::UnknownSize {
                value: value.to_string(),
            })
    }
}

/// Visual layout a caller may pick for a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonLayout {
    /// Filled call-to-action.
    #[default]
    Primary,
    /// Bordered, transparent background.
    Outline,
    /// Borderless text button.
    Link,
}

impl ButtonLayout {
    /// Every caller-facing layout.
    pub const ALL: [Self; 3] = [Self::Primary, Self::Outline, Self::Link];

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Outline => "outline",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for ButtonLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonLayout {
    type Err = TokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| TokenError::UnknownLayout {
                value: value.to_string(),
            })
    }
}

/// Style family handed to the resolver.
///
/// The dropdown-item variant is only meant for menu rows that reuse the
/// button element, so it lives here rather than on [`ButtonLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleVariant {
    /// One of the caller-facing layouts.
    Layout(ButtonLayout),
    /// Menu row rendering; ignores every other style axis.
    DropdownItem,
}

impl Default for StyleVariant {
    fn default() -> Self {
        Self::Layout(ButtonLayout::default())
    }
}

impl From<ButtonLayout> for StyleVariant {
    fn from(layout: ButtonLayout) -> Self {
        Self::Layout(layout)
    }
}
