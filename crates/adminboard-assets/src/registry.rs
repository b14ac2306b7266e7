//! Ordered provider chains keyed by asset kind.
//!
//! # Design
//! - Providers are consulted in registration order; the first non-empty
//!   reference wins and short-circuits the chain.
//! - A provider error counts as "no answer" so resolution itself never fails.
//! - The registry is an explicitly constructed value, not process-wide state;
//!   callers that share one across threads are responsible for wrapping it.

use std::collections::HashMap;
use std::sync::Arc;

use crate::bootswatch::{BOOTSWATCH_KIND, VendoredBootswatch};
use crate::error::ProviderError;

/// Lookup parameters handed to each provider in a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetRequest<'a> {
    /// Asset name within the kind (e.g. a Bootswatch theme name).
    pub name: &'a str,
    /// Version hint for providers that build versioned references.
    pub version: &'a str,
}

/// A source that may supply a reference for a named asset, or decline.
///
/// Returning `Ok(None)` declines quietly; returning an error declines loudly
/// (the registry logs it and continues down the chain).
pub trait AssetProvider: Send + Sync {
    /// Attempt to produce a reference for the requested asset.
    ///
    /// # Errors
    ///
    /// Providers may fail for environmental reasons (unreadable disk, bad
    /// configuration); such failures are absorbed by the registry.
    fn resolve(&self, request: &AssetRequest<'_>) -> Result<Option<String>, ProviderError>;
}

impl<F> AssetProvider for F
where
    F: Fn(&AssetRequest<'_>) -> Result<Option<String>, ProviderError> + Send + Sync,
{
    fn resolve(&self, request: &AssetRequest<'_>) -> Result<Option<String>, ProviderError> {
        self(request)
    }
}

/// Ordered provider chains, one per asset kind.
#[derive(Default)]
pub struct AssetRegistry {
    providers: HashMap<String, Vec<Arc<dyn AssetProvider>>>,
}

impl AssetRegistry {
    /// Construct an empty registry with no provider chains.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a registry with the default vendored Bootswatch provider
    /// installed for the [`BOOTSWATCH_KIND`] chain.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BOOTSWATCH_KIND, Arc::new(VendoredBootswatch::from_env()));
        registry
    }

    /// Append a provider to the chain for `kind`.
    pub fn register(&mut self, kind: &str, provider: Arc<dyn AssetProvider>) {
        self.providers
            .entry(kind.to_string())
            .or_default()
            .push(provider);
    }

    /// Insert a provider at the front of the chain for `kind`, so it is
    /// consulted before previously registered providers.
    pub fn register_front(&mut self, kind: &str, provider: Arc<dyn AssetProvider>) {
        self.providers
            .entry(kind.to_string())
            .or_default()
            .insert(0, provider);
    }

    /// Register a plain function or closure, returning the handle needed to
    /// unregister it later.
    pub fn register_fn<F>(&mut self, kind: &str, provider: F) -> Arc<dyn AssetProvider>
    where
        F: Fn(&AssetRequest<'_>) -> Result<Option<String>, ProviderError>
            + Send
            + Sync
            + 'static,
    {
        let handle: Arc<dyn AssetProvider> = Arc::new(provider);
        self.register(kind, Arc::clone(&handle));
        handle
    }

    /// Remove a specific provider from the chain for `kind`.
    ///
    /// Returns `true` when the provider was present. Removing an unknown
    /// provider is a no-op.
    pub fn unregister(&mut self, kind: &str, provider: &Arc<dyn AssetProvider>) -> bool {
        let Some(chain) = self.providers.get_mut(kind) else {
            return false;
        };
        let before = chain.len();
        chain.retain(|candidate| !Arc::ptr_eq(candidate, provider));
        before != chain.len()
    }

    /// Number of providers registered for `kind`.
    #[must_use]
    pub fn provider_count(&self, kind: &str) -> usize {
        self.providers.get(kind).map_or(0, Vec::len)
    }

    /// Resolve a reference for `kind`/`request` through the provider chain.
    ///
    /// Returns `None` when the name is empty, when no chain exists for the
    /// kind, or when every provider declines. Resolution never fails; callers
    /// that need a value supply their own fallback.
    #[must_use]
    pub fn resolve(&self, kind: &str, request: &AssetRequest<'_>) -> Option<String> {
        if request.name.is_empty() {
            tracing::debug!(kind, "asset resolution skipped for empty name");
            return None;
        }
        let chain = self.providers.get(kind)?;
        for provider in chain {
            match provider.resolve(request) {
                Ok(Some(reference)) if !reference.is_empty() => return Some(reference),
                Ok(_) => {}
                Err(error) => {
                    tracing::debug!(
                        kind,
                        name = request.name,
                        reason = %error.reason,
                        "asset provider failed; trying next"
                    );
                }
            }
        }
        None
    }
}
