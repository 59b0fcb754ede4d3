//! Icon slots for buttons.
//!
//! An icon is either a named token or an arbitrary renderer. Whatever the
//! source, the rendered node carries the resolved icon class and is hidden
//! from assistive technology.

use std::fmt;
use std::rc::Rc;

use yew::html::IntoPropValue;
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag};

use crate::foundations::style::IconSide;
use crate::foundations::tokens::ButtonSize;

/// Built-in outline glyphs addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Downward arrow.
    ArrowDown,
    /// Upward arrow.
    ArrowUp,
    /// Check mark.
    Check,
    /// Downward chevron.
    ChevronDown,
    /// Upward chevron.
    ChevronUp,
    /// Tray with downward arrow.
    Download,
    /// Three horizontal bars.
    Menu,
    /// Plus sign.
    Plus,
    /// Magnifying glass.
    Search,
    /// Waste bin.
    Trash,
    /// Tray with upward arrow.
    Upload,
    /// Cross.
    X,
}

impl Glyph {
    /// Every built-in glyph.
    pub const ALL: [Self; 12] = [
        Self::ArrowDown,
        Self::ArrowUp,
        Self::Check,
        Self::ChevronDown,
        Self::ChevronUp,
        Self::Download,
        Self::Menu,
        Self::Plus,
        Self::Search,
        Self::Trash,
        Self::Upload,
        Self::X,
    ];

    /// Token used by [`ButtonIcon::Named`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArrowDown => "arrow-down",
            Self::ArrowUp => "arrow-up",
            Self::Check => "check",
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::Download => "download",
            Self::Menu => "menu",
            Self::Plus => "plus",
            Self::Search => "search",
            Self::Trash => "trash",
            Self::Upload => "upload",
            Self::X => "x",
        }
    }

    /// Look up a built-in glyph by token.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.name() == name)
    }

    fn body(self) -> Html {
        match self {
            Self::ArrowDown => html! { <path d="M12 5v14m7-7l-7 7l-7-7" /> },
            Self::ArrowUp => html! { <path d="m5 12l7-7l7 7m-7 7V5" /> },
            Self::Check => html! { <path d="M20 6L9 17l-5-5" /> },
            Self::ChevronDown => html! { <path d="m6 9l6 6l6-6" /> },
            Self::ChevronUp => html! { <path d="m18 15l-6-6l-6 6" /> },
            Self::Download => html! { <>
                <path d="M12 15V3m9 12v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
                <path d="m7 10l5 5l5-5" />
            </> },
            Self::Menu => html! { <path d="M4 5h16M4 12h16M4 19h16" /> },
            Self::Plus => html! { <path d="M5 12h14m-7-7v14" /> },
            Self::Search => html! { <>
                <path d="m21 21l-4.34-4.34" />
                <circle cx="11" cy="11" r="8" />
            </> },
            Self::Trash => html! {
                <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" />
            },
            Self::Upload => html! {
                <path d="M12 3v12m5-7l-5-5l-5 5m14 7v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
            },
            Self::X => html! { <path d="M18 6L6 18M6 6l12 12" /> },
        }
    }
}

/// Rendering context handed to icon renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct IconSlot {
    /// Resolved icon classes.
    pub class: Classes,
    /// Size of the owning button.
    pub size: ButtonSize,
    /// Which side of the label the icon sits on.
    pub side: IconSide,
}

/// Caller-supplied icon renderer. Compared by identity.
#[derive(Clone)]
pub struct IconRenderer {
    render: Rc<dyn Fn(&IconSlot) -> Html>,
}

impl IconRenderer {
    /// Wrap a render function.
    #[must_use]
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&IconSlot) -> Html + 'static,
    {
        Self {
            render: Rc::new(render),
        }
    }

    fn call(&self, slot: &IconSlot) -> Html {
        (self.render)(slot)
    }
}

impl PartialEq for IconRenderer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for IconRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconRenderer").finish_non_exhaustive()
    }
}

/// Content of one icon slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ButtonIcon {
    /// Slot is empty.
    #[default]
    None,
    /// A built-in glyph name, or otherwise an SVG sprite id.
    Named(AttrValue),
    /// Arbitrary markup.
    Render(IconRenderer),
}

impl ButtonIcon {
    /// Named icon token.
    #[must_use]
    pub fn named(name: impl Into<AttrValue>) -> Self {
        Self::Named(name.into())
    }

    /// Built-in glyph.
    #[must_use]
    pub const fn glyph(glyph: Glyph) -> Self {
        Self::Named(AttrValue::Static(glyph.name()))
    }

    /// Icon produced by a render function.
    #[must_use]
    pub fn render<F>(render: F) -> Self
    where
        F: Fn(&IconSlot) -> Html + 'static,
    {
        Self::Render(IconRenderer::new(render))
    }

    /// Whether the slot holds an icon.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Render the icon decorated for `slot`, or `None` for an empty slot.
    #[must_use]
    pub fn to_html(&self, slot: &IconSlot) -> Option<Html> {
        match self {
            Self::None => None,
            Self::Named(name) => Some(Glyph::from_name(name).map_or_else(
                || sprite_svg(name, slot.class.clone()),
                |glyph| glyph_svg(glyph, slot.class.clone()),
            )),
            Self::Render(renderer) => Some(decorate(renderer.call(slot), slot.class.clone())),
        }
    }
}

impl From<Glyph> for ButtonIcon {
    fn from(glyph: Glyph) -> Self {
        Self::glyph(glyph)
    }
}

impl IntoPropValue<ButtonIcon> for Glyph {
    fn into_prop_value(self) -> ButtonIcon {
        ButtonIcon::glyph(self)
    }
}

/// Inline SVG for a built-in glyph, hidden from assistive technology.
#[must_use]
pub fn glyph_svg(glyph: Glyph, class: Classes) -> Html {
    html! {
        <svg
            class={class}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            aria-hidden="true"
            focusable="false"
        >
            {glyph.body()}
        </svg>
    }
}

fn sprite_svg(id: &str, class: Classes) -> Html {
    let mut reference = VTag::new("use");
    reference.add_attribute("href", format!("#{id}"));
    html! {
        <svg class={class} aria-hidden="true" focusable="false">
            {VNode::from(reference)}
        </svg>
    }
}

/// Apply the icon class and decorative marker to caller markup.
///
/// Elements are decorated in place; anything else (components, text,
/// fragments) is wrapped in a `span`.
fn decorate(node: Html, class: Classes) -> Html {
    match node {
        VNode::VTag(mut tag) => {
            let mut merged = tag
                .attributes
                .iter()
                .find(|(key, _)| *key == "class")
                .map(|(_, value)| {
                    value
                        .split_whitespace()
                        .map(str::to_owned)
                        .collect::<Classes>()
                })
                .unwrap_or_default();
            merged.push(class);
            if !merged.is_empty() {
                tag.add_attribute("class", merged.to_string());
            }
            tag.add_attribute("aria-hidden", "true");
            VNode::VTag(tag)
        }
        other => html! {
            <span class={class} aria-hidden="true">{other}</span>
        },
    }
}
