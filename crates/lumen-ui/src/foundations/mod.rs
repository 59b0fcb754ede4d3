//! Core, DOM-free primitives: style tokens, themes, class resolution and
//! accessibility checks.
pub mod a11y;
pub mod error;
pub mod style;
pub mod theme;
pub mod tokens;
