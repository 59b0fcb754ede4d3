//! Error types for theme configuration and token parsing.

use thiserror::Error;

/// Failure while turning a string into a style token.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The value does not name a button size.
    #[error("unknown button size")]
    UnknownSize {
        /// Value supplied by the caller.
        value: String,
    },
    /// The value does not name a button layout.
    #[error("unknown button layout")]
    UnknownLayout {
        /// Value supplied by the caller.
        value: String,
    },
}

/// Failure while loading a theme document.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The document is not valid JSON.
    #[error("invalid theme syntax")]
    Syntax {
        /// Parser error detail.
        detail: serde_json::Error,
    },
    /// The document root is not a JSON object.
    #[error("theme document must be an object")]
    NotAnObject,
    /// A known section carried a value of the wrong shape or an unknown key.
    #[error("invalid theme schema")]
    Schema {
        /// Deserializer error detail.
        detail: serde_json::Error,
    },
}
