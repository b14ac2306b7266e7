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
#![allow(clippy::module_name_repetitions)]

//! AdminLTE-flavoured dashboard components for Yew.
//!
//! Layout:
//! - `foundations.rs`: Bootstrap status colors and class helpers
//! - `menu.rs`: the navigation model (entries, badges, permissive ingestion)
//! - `components/`: tag builders organised with Atomic Design layers
//! - `head.rs`: theme and stylesheet head-element helpers
//! - `handler.rs`: the bundled client-side message handler script

pub mod components;
pub mod foundations;
pub mod handler;
pub mod head;
pub mod menu;

pub use foundations::StatusColor;
pub use menu::{BadgeSpec, MenuEntry, MenuLink, badge_aria_label};
