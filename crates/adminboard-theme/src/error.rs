//! Error primitives for theme construction.

use thiserror::Error;

/// Errors produced while building a [`crate::Theme`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    /// A brand description was supplied as something other than a mapping.
    #[error("brand description must be a mapping")]
    NotAMapping {
        /// JSON type name of the rejected value.
        found: &'static str,
    },
}
