//! Yew components.

pub mod button;
pub mod icons;
pub mod provider;

pub use button::{Button, ButtonProps, PassthroughAttrs, compose_button};
pub use icons::{ButtonIcon, Glyph, IconRenderer, IconSlot};
pub use provider::{ThemeProvider, ThemeProviderProps};
