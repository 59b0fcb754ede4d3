#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lumen UI: a themeable Yew button.
//!
//! [`foundations`] holds the DOM-free pieces (style tokens, theme tables, class
//! resolution, accessibility checks) and is usable without rendering.
//! [`components`] wraps them in Yew components.

pub mod components;
pub mod foundations;

pub use components::{
    Button, ButtonIcon, ButtonProps, Glyph, IconRenderer, IconSlot, PassthroughAttrs,
    ThemeProvider, ThemeProviderProps, compose_button,
};
pub use foundations::a11y::{
    AccessibilityAdvisor, AccessibilityWarning, AdvisorHandle, ConsoleAdvisor, SilentAdvisor,
};
pub use foundations::error::{ThemeError, TokenError};
pub use foundations::style::{IconSide, ResolvedStyles, StyleRequest};
pub use foundations::theme::{ButtonTheme, Theme, ThemeTokens};
pub use foundations::tokens::{ButtonLayout, ButtonSize, StyleVariant};
