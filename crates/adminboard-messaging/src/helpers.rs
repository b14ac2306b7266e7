//! One public helper per named message.
//!
//! Every helper builds its message from typed arguments and hands it to
//! [`dispatch`]; the boolean tells the caller whether some delivery method
//! accepted the message, not whether the client applied it.

use crate::dispatch::dispatch;
use crate::messages::{
    BadgeUpdate, ControlMessage, NavItemUpdate, PanelAction, SidebarLink, TabUpdate,
};
use crate::session::Session;

/// Open the control sidebar in the client.
#[must_use]
pub fn show_controlbar(session: &dyn Session) -> bool {
    dispatch(
        session,
        &ControlMessage::Controlbar {
            action: PanelAction::Show,
        },
    )
}

/// Close the control sidebar in the client.
#[must_use]
pub fn hide_controlbar(session: &dyn Session) -> bool {
    dispatch(
        session,
        &ControlMessage::Controlbar {
            action: PanelAction::Hide,
        },
    )
}

/// Flip the control sidebar's visibility in the client.
#[must_use]
pub fn toggle_controlbar(session: &dyn Session) -> bool {
    dispatch(
        session,
        &ControlMessage::Controlbar {
            action: PanelAction::Toggle,
        },
    )
}

/// Replace the sidebar menu with `items`.
#[must_use]
pub fn update_sidebar(session: &dyn Session, items: Vec<SidebarLink>) -> bool {
    dispatch(session, &ControlMessage::UpdateSidebar { items })
}

/// Apply badge changes to sidebar items.
#[must_use]
pub fn update_sidebar_badges(session: &dyn Session, badges: Vec<BadgeUpdate>) -> bool {
    dispatch(session, &ControlMessage::UpdateSidebarBadges { badges })
}

/// Mark the sidebar item with `href` as the active one.
#[must_use]
pub fn set_active_item(session: &dyn Session, href: impl Into<String>) -> bool {
    dispatch(
        session,
        &ControlMessage::SetActiveItem { href: href.into() },
    )
}

/// Replace the tabs of the navbar tab strip `nav_id`.
#[must_use]
pub fn update_navbar_tabs(
    session: &dyn Session,
    nav_id: impl Into<String>,
    tabs: Vec<TabUpdate>,
) -> bool {
    dispatch(
        session,
        &ControlMessage::UpdateNavTabs {
            nav_id: nav_id.into(),
            tabs,
        },
    )
}

/// Replace the items of the navbar list `nav_id`.
#[must_use]
pub fn update_navbar_items(
    session: &dyn Session,
    nav_id: impl Into<String>,
    items: Vec<NavItemUpdate>,
) -> bool {
    dispatch(
        session,
        &ControlMessage::UpdateNavItems {
            nav_id: nav_id.into(),
            items,
        },
    )
}

/// Append `item` to the navbar list `nav_id`.
#[must_use]
pub fn add_navbar_item(
    session: &dyn Session,
    nav_id: impl Into<String>,
    item: NavItemUpdate,
) -> bool {
    dispatch(
        session,
        &ControlMessage::AddNavItem {
            nav_id: nav_id.into(),
            item,
        },
    )
}

/// Remove the item with `href` from the navbar list `nav_id`.
#[must_use]
pub fn remove_navbar_item(
    session: &dyn Session,
    nav_id: impl Into<String>,
    href: impl Into<String>,
) -> bool {
    dispatch(
        session,
        &ControlMessage::RemoveNavItem {
            nav_id: nav_id.into(),
            href: href.into(),
        },
    )
}

/// Change or clear the badge on one navbar item.
#[must_use]
pub fn update_navbar_badge(
    session: &dyn Session,
    nav_id: impl Into<String>,
    href: impl Into<String>,
    badge: Option<String>,
) -> bool {
    dispatch(
        session,
        &ControlMessage::UpdateNavBadge {
            nav_id: nav_id.into(),
            href: href.into(),
            badge,
        },
    )
}

/// Replace the content of the tab pane `tab_id`.
#[must_use]
pub fn update_tab_content(
    session: &dyn Session,
    tab_id: impl Into<String>,
    content: impl Into<String>,
) -> bool {
    dispatch(
        session,
        &ControlMessage::UpdateTabContent {
            tab_id: tab_id.into(),
            content: content.into(),
        },
    )
}
