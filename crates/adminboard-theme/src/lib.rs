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

//! Design tokens and CSS custom-property emission for Adminboard dashboards.
//!
//! Layout:
//! - `theme.rs`: the [`Theme`] value, CSS emission, stylesheet references
//! - `brand.rs`: conversion from foreign flat brand descriptions
//! - `tokens.rs`: the library's well-known token names
//! - `error.rs`: error primitives

pub mod brand;
pub mod error;
pub mod theme;
pub mod tokens;

pub use brand::DEFAULT_PRESET;
pub use error::ThemeError;
pub use theme::{StylesheetRef, Theme};
