//! Themed button element.

use std::collections::BTreeMap;

use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag};

use crate::components::icons::{ButtonIcon, IconSlot};
use crate::foundations::a11y::AdvisorHandle;
use crate::foundations::style::{IconSide, ResolvedStyles, StyleRequest, resolve};
use crate::foundations::theme::{ButtonTheme, Theme};
use crate::foundations::tokens::{ButtonLayout, ButtonSize, StyleVariant};

/// Native attributes forwarded verbatim to the rendered element.
pub type PassthroughAttrs = BTreeMap<&'static str, AttrValue>;

/// Attributes the component computes itself; pass-through copies are ignored.
const MANAGED_ATTRIBUTES: [&str; 3] = ["class", "type", "disabled"];

/// Tags that cannot hold children.
const VOID_TAGS: [&str; 1] = ["input"];

/// Tags that submit forms unless told otherwise.
const BUTTON_LIKE_TAGS: [&str; 2] = ["button", "input"];

/// Props for [`Button`].
#[derive(Properties, PartialEq, Clone)]
pub struct ButtonProps {
    /// Label and other content, rendered between the icons.
    #[prop_or_default]
    pub children: Children,
    /// Element to render, e.g. `button`, `input` or `a`.
    #[prop_or(AttrValue::Static("button"))]
    pub tag: AttrValue,
    /// Render the disabled state.
    #[prop_or_default]
    pub disabled: bool,
    /// Padding step.
    #[prop_or_default]
    pub size: ButtonSize,
    /// Visual layout.
    #[prop_or_default]
    pub layout: ButtonLayout,
    /// Stretch to the container width.
    #[prop_or_default]
    pub block: bool,
    /// Leading icon, used when `icon_left` is empty.
    #[prop_or_default]
    pub icon: ButtonIcon,
    /// Leading icon; takes precedence over `icon`.
    #[prop_or_default]
    pub icon_left: ButtonIcon,
    /// Trailing icon.
    #[prop_or_default]
    pub icon_right: ButtonIcon,
    /// Extra classes, applied after every theme class.
    #[prop_or_default]
    pub class: Classes,
    /// Native `type`; defaults to `button` for button-like tags.
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    /// Accessible label, required for icon-only buttons.
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Reference to the rendered element.
    #[prop_or_default]
    pub node_ref: NodeRef,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Double-click handler.
    #[prop_or_default]
    pub ondblclick: Callback<MouseEvent>,
    /// Focus handler.
    #[prop_or_default]
    pub onfocus: Callback<FocusEvent>,
    /// Blur handler.
    #[prop_or_default]
    pub onblur: Callback<FocusEvent>,
    /// Key press handler.
    #[prop_or_default]
    pub onkeydown: Callback<KeyboardEvent>,
    /// Key release handler.
    #[prop_or_default]
    pub onkeyup: Callback<KeyboardEvent>,
    /// Pointer enter handler.
    #[prop_or_default]
    pub onmouseenter: Callback<MouseEvent>,
    /// Pointer leave handler.
    #[prop_or_default]
    pub onmouseleave: Callback<MouseEvent>,
    /// Pointer press handler.
    #[prop_or_default]
    pub onpointerdown: Callback<PointerEvent>,
    /// Pointer release handler.
    #[prop_or_default]
    pub onpointerup: Callback<PointerEvent>,
    /// Theme override; otherwise the context theme, then the built-in one.
    #[prop_or_default]
    pub theme: Option<Theme>,
    /// Extra native attributes.
    #[prop_or_default]
    pub attrs: PassthroughAttrs,
}

impl ButtonProps {
    /// Whether any icon slot is filled.
    #[must_use]
    pub const fn has_icon(&self) -> bool {
        self.icon.is_some() || self.icon_left.is_some() || self.icon_right.is_some()
    }

    /// Whether a non-empty accessible label was supplied, as a prop or
    /// pass-through attribute.
    #[must_use]
    pub fn has_label(&self) -> bool {
        let filled = |label: &AttrValue| !label.trim().is_empty();
        self.aria_label.as_ref().is_some_and(filled)
            || self.attrs.get("aria-label").is_some_and(filled)
    }

    /// The icon rendered before the children.
    #[must_use]
    pub const fn leading_icon(&self) -> &ButtonIcon {
        if self.icon_left.is_some() {
            &self.icon_left
        } else {
            &self.icon
        }
    }

    /// Explicit `type`, from the prop or the pass-through map.
    fn explicit_type(&self) -> Option<AttrValue> {
        self.r#type
            .clone()
            .or_else(|| self.attrs.get("type").cloned())
    }
}

fn tag_in(tag: &str, set: &[&str]) -> bool {
    set.iter().any(|candidate| candidate.eq_ignore_ascii_case(tag))
}

/// `type` to render: the explicit one, else `button` for button-like tags.
#[must_use]
pub fn effective_type(tag: &str, explicit: Option<AttrValue>) -> Option<AttrValue> {
    explicit.or_else(|| tag_in(tag, &BUTTON_LIKE_TAGS).then_some(AttrValue::Static("button")))
}

/// Build the button markup for an already resolved theme and style variant.
///
/// Side-effect free; the [`Button`] component adds the accessibility audit
/// on top. Sibling components rendering menu rows pass
/// [`StyleVariant::DropdownItem`].
#[must_use]
pub fn compose_button(props: &ButtonProps, theme: &ButtonTheme, variant: StyleVariant) -> Html {
    let request = StyleRequest {
        variant,
        size: props.size,
        disabled: props.disabled,
        has_icon: props.has_icon(),
        has_children: !props.children.is_empty(),
        block: props.block,
        class: props.class.clone(),
    };
    let styles = resolve(theme, &request);
    let tag_name = props.tag.to_string();

    let mut node = if tag_in(&tag_name, &VOID_TAGS) {
        html! {
            <@{tag_name}
                ref={props.node_ref.clone()}
                onclick={props.onclick.clone()}
                ondblclick={props.ondblclick.clone()}
                onfocus={props.onfocus.clone()}
                onblur={props.onblur.clone()}
                onkeydown={props.onkeydown.clone()}
                onkeyup={props.onkeyup.clone()}
                onmouseenter={props.onmouseenter.clone()}
                onmouseleave={props.onmouseleave.clone()}
                onpointerdown={props.onpointerdown.clone()}
                onpointerup={props.onpointerup.clone()}
            />
        }
    } else {
        let leading = render_icon(props.leading_icon(), &styles, props.size, IconSide::Left);
        let trailing = render_icon(&props.icon_right, &styles, props.size, IconSide::Right);
        html! {
            <@{tag_name}
                ref={props.node_ref.clone()}
                onclick={props.onclick.clone()}
                ondblclick={props.ondblclick.clone()}
                onfocus={props.onfocus.clone()}
                onblur={props.onblur.clone()}
                onkeydown={props.onkeydown.clone()}
                onkeyup={props.onkeyup.clone()}
                onmouseenter={props.onmouseenter.clone()}
                onmouseleave={props.onmouseleave.clone()}
                onpointerdown={props.onpointerdown.clone()}
                onpointerup={props.onpointerup.clone()}
            >
                {leading}
                { for props.children.iter() }
                {trailing}
            </@>
        }
    };

    if let VNode::VTag(tag) = &mut node {
        apply_attributes(tag, props, &styles.button);
    }
    node
}

fn render_icon(
    icon: &ButtonIcon,
    styles: &ResolvedStyles,
    size: ButtonSize,
    side: IconSide,
) -> Html {
    let class = match side {
        IconSide::Left => styles.icon_left.clone(),
        IconSide::Right => styles.icon_right.clone(),
    };
    let slot = IconSlot {
        class,
        size,
        side,
    };
    icon.to_html(&slot).unwrap_or_default()
}

fn apply_attributes(tag: &mut VTag, props: &ButtonProps, class: &Classes) {
    if !class.is_empty() {
        tag.add_attribute("class", class.to_string());
    }
    if let Some(kind) = effective_type(&props.tag, props.explicit_type()) {
        tag.add_attribute("type", kind);
    }
    if props.disabled {
        tag.add_attribute("disabled", "disabled");
    }
    if let Some(label) = &props.aria_label {
        tag.add_attribute("aria-label", label.clone());
    }
    for (&key, value) in &props.attrs {
        let shadowed = key == "aria-label" && props.aria_label.is_some();
        if shadowed || MANAGED_ATTRIBUTES.contains(&key) {
            continue;
        }
        tag.add_attribute(key, value.clone());
    }
}

/// Themed button with optional leading and trailing icons.
///
/// The theme comes from the `theme` prop, then a [`Theme`] context, then
/// the built-in defaults. Icon buttons without an accessible label are
/// reported to the [`AdvisorHandle`] in context (console logging in debug
/// builds, silent in release builds).
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let context_theme = use_context::<Theme>();
    let advisor = use_context::<AdvisorHandle>().unwrap_or_default();
    let theme = props.theme.clone().or(context_theme).unwrap_or_default();

    advisor.audit_icon_label("Button", props.has_icon(), props.has_label());
    compose_button(props, theme.button(), StyleVariant::Layout(props.layout))
}
