//! Error primitives for asset resolution and vendor management.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by an individual asset provider.
///
/// Provider failures never escape resolution: the registry logs them and
/// moves on to the next provider in the chain.
#[derive(Debug, Error)]
#[error("asset provider failure")]
pub struct ProviderError {
    /// Human-readable reason the provider declined abnormally.
    pub reason: String,
}

impl ProviderError {
    /// Construct a provider failure with the supplied reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the asset helpers that do validate their input.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A stylesheet was requested without a name.
    #[error("stylesheet name is required")]
    EmptyName,
    /// A filesystem operation failed during vendor export.
    #[error("vendor io failure")]
    Io {
        /// Operation that triggered the failure.
        operation: &'static str,
        /// Path involved in the failing operation.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}
