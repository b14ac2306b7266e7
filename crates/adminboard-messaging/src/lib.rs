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

//! Server-to-client control messages for Adminboard dashboards.
//!
//! Layout:
//! - `messages.rs`: the named message set and payload types
//! - `session.rs`: the delivery capability a host session implements
//! - `dispatch.rs`: sync/async delivery without leaking unawaited futures
//! - `helpers.rs`: one public helper per named message
//!
//! Helpers never fail: a session with no delivery capability yields `false`,
//! every scheduling hiccup is logged and swallowed. No ordering is guaranteed
//! between messages dispatched in quick succession.

#[cfg(not(target_arch = "wasm32"))]
pub mod dispatch;
#[cfg(not(target_arch = "wasm32"))]
pub mod helpers;
pub mod messages;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub use dispatch::dispatch;
#[cfg(not(target_arch = "wasm32"))]
pub use helpers::{
    add_navbar_item, hide_controlbar, remove_navbar_item, set_active_item, show_controlbar,
    toggle_controlbar, update_navbar_badge, update_navbar_items, update_navbar_tabs,
    update_sidebar, update_sidebar_badges, update_tab_content,
};
pub use messages::{
    BadgeUpdate, ControlMessage, NavItemUpdate, PanelAction, SidebarLink, TabUpdate,
};
pub use session::{Delivery, DeliveryFuture, Session};
