//! Button class resolution.
//!
//! Pure functions of the requested style axes and a [`ButtonTheme`]; the
//! component calls these once per render and never caches the result.

use yew::{Classes, classes};

use crate::foundations::theme::ButtonTheme;
use crate::foundations::tokens::{ButtonSize, StyleVariant};

/// Style axes gathered from the props of one render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRequest {
    /// Layout family, or the menu-row variant.
    pub variant: StyleVariant,
    /// Requested size.
    pub size: ButtonSize,
    /// Disabled buttons take the layout's disabled class instead of the active one.
    pub disabled: bool,
    /// Any of the icon slots is filled.
    pub has_icon: bool,
    /// The button renders a label or other child content.
    pub has_children: bool,
    /// Stretch to the container width.
    pub block: bool,
    /// Caller classes, appended last.
    pub class: Classes,
}

/// Side of the label an icon sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSide {
    /// Before the children.
    Left,
    /// After the children.
    Right,
}

/// Classes computed for a single render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyles {
    /// Class attribute of the button element.
    pub button: Classes,
    /// Class attribute of a leading icon.
    pub icon_left: Classes,
    /// Class attribute of a trailing icon.
    pub icon_right: Classes,
}

/// Class list of one theme token; blank tokens contribute nothing.
fn token(value: &str) -> Classes {
    value.split_whitespace().map(str::to_owned).collect()
}

/// Resolve the class list of the button element.
///
/// Order: base, size (icon-only padding when there is an icon and no
/// children), layout base, layout disabled-or-active, block, caller class.
/// The dropdown-item variant yields only its own class plus the caller
/// class.
#[must_use]
pub fn button_class(theme: &ButtonTheme, request: &StyleRequest) -> Classes {
    let layout = match request.variant {
        StyleVariant::DropdownItem => {
            return classes!(token(&theme.dropdown_item.base), request.class.clone());
        }
        StyleVariant::Layout(layout) => theme.layout(layout),
    };

    let size = if request.has_icon && !request.has_children {
        theme.size.icon_only(request.size)
    } else {
        theme.size.labelled(request.size)
    };
    let state = if request.disabled {
        &layout.disabled
    } else {
        &layout.active
    };

    classes!(
        token(&theme.base),
        token(size),
        token(&layout.base),
        token(state),
        request.block.then(|| token(&theme.block)),
        request.class.clone()
    )
}

/// Resolve the class list of an icon on the given side.
///
/// The spacing modifier is only added when the icon sits next to children.
#[must_use]
pub fn icon_class(
    theme: &ButtonTheme,
    size: ButtonSize,
    side: IconSide,
    has_children: bool,
) -> Classes {
    let spacing = match side {
        IconSide::Left => &theme.icon.left,
        IconSide::Right => &theme.icon.right,
    };
    classes!(
        theme.icon.glyph(size).map(token),
        has_children.then(|| token(spacing))
    )
}

/// Resolve every class a button render needs.
#[must_use]
pub fn resolve(theme: &ButtonTheme, request: &StyleRequest) -> ResolvedStyles {
    ResolvedStyles {
        button: button_class(theme, request),
        icon_left: icon_class(theme, request.size, IconSide::Left, request.has_children),
        icon_right: icon_class(theme, request.size, IconSide::Right, request.has_children),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundations::tokens::ButtonLayout;

    fn request(layout: ButtonLayout, size: ButtonSize, disabled: bool) -> StyleRequest {
        StyleRequest {
            variant: layout.into(),
            size,
            disabled,
            has_children: true,
            ..StyleRequest::default()
        }
    }

    #[test]
    fn every_layout_size_and_state_composes_in_order() {
        let theme = ButtonTheme::default();
        for layout in ButtonLayout::ALL {
            for size in ButtonSize::ALL {
                for disabled in [false, true] {
                    let tokens = theme.layout(layout);
                    let state = if disabled {
                        &tokens.disabled
                    } else {
                        &tokens.active
                    };
                    let expected = [
                        theme.base.as_str(),
                        theme.size.labelled(size),
                        tokens.base.as_str(),
                        state.as_str(),
                    ]
                    .join(" ");
                    assert_eq!(
                        button_class(&theme, &request(layout, size, disabled)).to_string(),
                        expected,
                        "{layout} {size} disabled={disabled}"
                    );
                }
            }
        }
    }

    #[test]
    fn every_icon_only_combination_uses_icon_padding() {
        let theme = ButtonTheme::default();
        for layout in ButtonLayout::ALL {
            for size in ButtonSize::ALL {
                let tokens = theme.layout(layout);
                let expected = [
                    theme.base.as_str(),
                    theme.size.icon_only(size),
                    tokens.base.as_str(),
                    tokens.active.as_str(),
                ]
                .join(" ");
                let resolved = button_class(
                    &theme,
                    &StyleRequest {
                        has_icon: true,
                        has_children: false,
                        ..request(layout, size, false)
                    },
                );
                assert_eq!(resolved.to_string(), expected, "{layout} {size}");
            }
        }
    }

    #[test]
    fn outline_small_disabled_matches_documented_sequence() {
        let theme = ButtonTheme::default();
        let resolved = button_class(
            &theme,
            &request(ButtonLayout::Outline, ButtonSize::Small, true),
        );
        let expected = format!(
            "{} {} {} {}",
            theme.base, theme.size.small, theme.outline.base, theme.outline.disabled
        );
        assert_eq!(resolved.to_string(), expected);
    }

    #[test]
    fn block_and_caller_class_are_appended_last() {
        let theme = ButtonTheme::default();
        let resolved = button_class(
            &theme,
            &StyleRequest {
                block: true,
                class: classes!("ml-auto"),
                ..request(ButtonLayout::Link, ButtonSize::Regular, false)
            },
        )
        .to_string();
        assert!(resolved.ends_with(&format!("{} ml-auto", theme.block)));
        assert!(resolved.starts_with(&theme.base));
    }

    #[test]
    fn icon_only_uses_icon_padding() {
        let theme = ButtonTheme::default();
        let resolved = button_class(
            &theme,
            &StyleRequest {
                has_icon: true,
                has_children: false,
                ..request(ButtonLayout::Primary, ButtonSize::Large, false)
            },
        )
        .to_string();
        assert!(resolved.contains(&theme.size.icon.large));
        assert!(!resolved.contains(&theme.size.large));
    }

    #[test]
    fn icon_with_children_uses_labelled_size() {
        let theme = ButtonTheme::default();
        let resolved = button_class(
            &theme,
            &StyleRequest {
                has_icon: true,
                ..request(ButtonLayout::Primary, ButtonSize::Small, false)
            },
        )
        .to_string();
        assert!(resolved.contains(&theme.size.small));
    }

    #[test]
    fn icon_only_pagination_reuses_regular_icon_padding() {
        let theme = ButtonTheme::default();
        let resolved = button_class(
            &theme,
            &StyleRequest {
                has_icon: true,
                has_children: false,
                ..request(ButtonLayout::Outline, ButtonSize::Pagination, false)
            },
        );
        let expected = format!(
            "{} {} {} {}",
            theme.base, theme.size.icon.regular, theme.outline.base, theme.outline.active
        );
        assert_eq!(resolved.to_string(), expected);
    }

    #[test]
    fn pagination_icons_get_spacing_but_no_glyph_size() {
        let theme = ButtonTheme::default();
        assert!(icon_class(&theme, ButtonSize::Pagination, IconSide::Left, false).is_empty());
        assert_eq!(
            icon_class(&theme, ButtonSize::Pagination, IconSide::Right, true).to_string(),
            theme.icon.right
        );
    }

    #[test]
    fn dropdown_item_ignores_other_axes() {
        let theme = ButtonTheme::default();
        let resolved = button_class(
            &theme,
            &StyleRequest {
                variant: StyleVariant::DropdownItem,
                size: ButtonSize::Larger,
                disabled: true,
                has_icon: true,
                has_children: false,
                block: true,
                class: classes!("extra"),
            },
        );
        assert_eq!(
            resolved.to_string(),
            format!("{} extra", theme.dropdown_item.base)
        );
    }

    #[test]
    fn icon_spacing_only_with_children() {
        let theme = ButtonTheme::default();
        assert_eq!(
            icon_class(&theme, ButtonSize::Regular, IconSide::Left, true).to_string(),
            format!("{} {}", theme.icon.regular, theme.icon.left)
        );
        assert_eq!(
            icon_class(&theme, ButtonSize::Small, IconSide::Right, true).to_string(),
            format!("{} {}", theme.icon.small, theme.icon.right)
        );
        assert_eq!(
            icon_class(&theme, ButtonSize::Small, IconSide::Left, false).to_string(),
            theme.icon.small
        );
    }

    #[test]
    fn blank_tokens_contribute_nothing() {
        let mut theme = ButtonTheme::default();
        theme.primary.active = "  ".to_string();
        let resolved = button_class(
            &theme,
            &request(ButtonLayout::Primary, ButtonSize::Regular, false),
        );
        let expected = format!(
            "{} {} {}",
            theme.base, theme.size.regular, theme.primary.base
        );
        assert_eq!(resolved.to_string(), expected);
    }
}
