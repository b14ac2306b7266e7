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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Stylesheet and script reference resolution for Adminboard dashboards.
//!
//! Layout:
//! - `registry.rs`: provider trait plus the ordered per-kind provider chains
//! - `bootswatch.rs`: vendored-or-CDN resolution for Bootswatch stylesheets
//! - `vendor.rs`: vendored theme listing and static-directory export
//! - `error.rs`: error primitives shared by the crate

pub mod bootswatch;
pub mod error;
pub mod registry;
#[cfg(test)]
pub(crate) mod testutil;
pub mod vendor;

pub use bootswatch::{
    BOOTSWATCH_KIND, DEFAULT_BOOTSWATCH_VERSION, DEFAULT_VENDOR_DIR, STYLESHEET_FILE,
    VENDOR_DIR_ENV, VendoredBootswatch, cdn_url, stylesheet_href,
};
pub use error::{AssetError, ProviderError};
pub use registry::{AssetProvider, AssetRegistry, AssetRequest};
pub use vendor::{VendorReport, copy_vendored, list_vendored};
