//! Bootswatch stylesheet resolution: vendored copies first, CDN as fallback.

use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::{AssetError, ProviderError};
use crate::registry::{AssetProvider, AssetRegistry, AssetRequest};

/// Registry kind under which Bootswatch providers are chained.
pub const BOOTSWATCH_KIND: &str = "bootswatch";

/// Major version used when the caller does not pin one.
pub const DEFAULT_BOOTSWATCH_VERSION: &str = "5";

/// Environment variable overriding the vendored stylesheet directory.
pub const VENDOR_DIR_ENV: &str = "ADMINBOARD_VENDOR_DIR";

/// Default vendored stylesheet directory, relative to the working directory.
pub const DEFAULT_VENDOR_DIR: &str = "assets/bootswatch";

/// File name every vendored theme directory must contain.
pub const STYLESHEET_FILE: &str = "bootstrap.min.css";

/// CDN reference for a named Bootswatch stylesheet.
#[must_use]
pub fn cdn_url(name: &str, version: &str) -> String {
    format!("https://cdn.jsdelivr.net/npm/bootswatch@{version}/dist/{name}/{STYLESHEET_FILE}")
}

/// Resolve the stylesheet reference for a named Bootswatch theme.
///
/// The registry's [`BOOTSWATCH_KIND`] chain is consulted first; when no
/// provider answers, the CDN reference is returned. `version` defaults to
/// [`DEFAULT_BOOTSWATCH_VERSION`].
///
/// # Errors
///
/// Returns [`AssetError::EmptyName`] when `name` is empty; an asset that
/// cannot be named cannot be resolved, and silently serving a bogus CDN URL
/// would hide the caller's bug.
pub fn stylesheet_href(
    registry: &AssetRegistry,
    name: &str,
    version: Option<&str>,
) -> Result<String, AssetError> {
    if name.is_empty() {
        return Err(AssetError::EmptyName);
    }
    let version = version.unwrap_or(DEFAULT_BOOTSWATCH_VERSION);
    let request = AssetRequest { name, version };
    Ok(registry
        .resolve(BOOTSWATCH_KIND, &request)
        .unwrap_or_else(|| cdn_url(name, version)))
}

/// Provider that answers with a `file://` reference when a vendored copy of
/// the requested theme exists on disk.
#[derive(Debug, Clone)]
pub struct VendoredBootswatch {
    root: PathBuf,
}

impl VendoredBootswatch {
    /// Provider rooted at the given vendored stylesheet directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Provider rooted at [`VENDOR_DIR_ENV`], falling back to
    /// [`DEFAULT_VENDOR_DIR`].
    #[must_use]
    pub fn from_env() -> Self {
        let root = env::var(VENDOR_DIR_ENV).unwrap_or_else(|_| DEFAULT_VENDOR_DIR.to_string());
        Self::new(root)
    }

    /// Directory this provider probes for vendored themes.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl AssetProvider for VendoredBootswatch {
    fn resolve(&self, request: &AssetRequest<'_>) -> Result<Option<String>, ProviderError> {
        let candidate = self.root.join(request.name).join(STYLESHEET_FILE);
        if !candidate.is_file() {
            return Ok(None);
        }
        let absolute = candidate.canonicalize().map_err(|error| {
            ProviderError::new(format!(
                "cannot canonicalize {}: {error}",
                candidate.display()
            ))
        })?;
        let reference = Url::from_file_path(&absolute).map_err(|()| {
            ProviderError::new(format!("not an absolute path: {}", absolute.display()))
        })?;
        Ok(Some(reference.to_string()))
    }
}
