//! The named control messages and their payload types.
//!
//! Each message serializes either as a `(name, payload)` pair via
//! [`ControlMessage::name`]/[`ControlMessage::payload`], or as the merged
//! `{"type": name, "data": payload}` form via [`ControlMessage::envelope`]
//! for hosts whose delivery method takes a single value.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Visibility action applied to the control sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelAction {
    /// Open the panel.
    Show,
    /// Close the panel.
    Hide,
    /// Flip the panel's current state.
    Toggle,
}

impl PanelAction {
    /// Wire string for the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Toggle => "toggle",
        }
    }
}

/// A sidebar menu entry in its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarLink {
    /// Visible link text.
    pub text: String,
    /// Link target.
    pub href: String,
}

impl SidebarLink {
    /// Convenience constructor.
    #[must_use]
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// Badge change for the sidebar item identified by `href`.
///
/// A `None` badge removes any existing badge on the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeUpdate {
    /// Href of the item whose badge changes.
    pub href: String,
    /// New badge text, or `None` to clear.
    pub badge: Option<String>,
}

/// A navbar tab in its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabUpdate {
    /// Pane element id the tab points at.
    pub id: String,
    /// Visible tab title.
    pub title: String,
    /// Tab link target.
    pub href: String,
    /// Whether the tab is the active one.
    pub active: bool,
}

/// A navbar item in its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItemUpdate {
    /// Visible item title.
    pub title: String,
    /// Item link target.
    pub href: String,
    /// Optional badge text.
    pub badge: Option<String>,
}

/// The fixed set of named messages understood by the client handler.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlMessage {
    /// Show, hide, or toggle the control sidebar.
    Controlbar {
        /// Visibility action to apply.
        action: PanelAction,
    },
    /// Replace the sidebar menu wholesale.
    UpdateSidebar {
        /// New menu entries, in order.
        items: Vec<SidebarLink>,
    },
    /// Add, update, or remove badges on sidebar items.
    UpdateSidebarBadges {
        /// Badge changes, applied independently.
        badges: Vec<BadgeUpdate>,
    },
    /// Mark the sidebar item with the given href as active.
    SetActiveItem {
        /// Href of the item to activate.
        href: String,
    },
    /// Replace the tabs of a navbar tab strip.
    UpdateNavTabs {
        /// Container element id.
        nav_id: String,
        /// New tabs, in order.
        tabs: Vec<TabUpdate>,
    },
    /// Replace the items of a navbar list.
    UpdateNavItems {
        /// Container element id.
        nav_id: String,
        /// New items, in order.
        items: Vec<NavItemUpdate>,
    },
    /// Append one item to a navbar list.
    AddNavItem {
        /// Container element id.
        nav_id: String,
        /// Item to append.
        item: NavItemUpdate,
    },
    /// Remove the navbar item with the given href.
    RemoveNavItem {
        /// Container element id.
        nav_id: String,
        /// Href of the item to remove.
        href: String,
    },
    /// Change (or clear) the badge on one navbar item.
    UpdateNavBadge {
        /// Container element id.
        nav_id: String,
        /// Href of the item whose badge changes.
        href: String,
        /// New badge text, or `None` to clear.
        badge: Option<String>,
    },
    /// Replace the inner content of a tab pane.
    UpdateTabContent {
        /// Pane element id.
        tab_id: String,
        /// Replacement markup.
        content: String,
    },
}

impl ControlMessage {
    /// Wire name of the message.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Controlbar { .. } => "adminboard_controlbar",
            Self::UpdateSidebar { .. } => "adminboard_update_sidebar",
            Self::UpdateSidebarBadges { .. } => "adminboard_update_sidebar_badges",
            Self::SetActiveItem { .. } => "adminboard_set_active_item",
            Self::UpdateNavTabs { .. } => "adminboard_update_navs",
            Self::UpdateNavItems { .. } => "adminboard_update_nav_items",
            Self::AddNavItem { .. } => "adminboard_add_nav_item",
            Self::RemoveNavItem { .. } => "adminboard_remove_nav_item",
            Self::UpdateNavBadge { .. } => "adminboard_update_nav_badge",
            Self::UpdateTabContent { .. } => "adminboard_update_tab_content",
        }
    }

    /// Payload dictionary for the message.
    #[must_use]
    pub fn payload(&self) -> Value {
        match self {
            Self::Controlbar { action } => json!({ "action": action.as_str() }),
            Self::UpdateSidebar { items } => json!({ "items": items }),
            Self::UpdateSidebarBadges { badges } => json!({ "badges": badges }),
            Self::SetActiveItem { href } => json!({ "href": href }),
            Self::UpdateNavTabs { nav_id, tabs } => json!({ "nav_id": nav_id, "tabs": tabs }),
            Self::UpdateNavItems { nav_id, items } => json!({ "nav_id": nav_id, "items": items }),
            Self::AddNavItem { nav_id, item } => json!({ "nav_id": nav_id, "item": item }),
            Self::RemoveNavItem { nav_id, href } => json!({ "nav_id": nav_id, "href": href }),
            Self::UpdateNavBadge {
                nav_id,
                href,
                badge,
            } => json!({ "nav_id": nav_id, "href": href, "badge": badge }),
            Self::UpdateTabContent { tab_id, content } => {
                json!({ "tab_id": tab_id, "content": content })
            }
        }
    }

    /// Merged single-value form: `{"type": name, "data": payload}`.
    #[must_use]
    pub fn envelope(&self) -> Value {
        json!({ "type": self.name(), "data": self.payload() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlbar_payload_carries_the_action() {
        let message = ControlMessage::Controlbar {
            action: PanelAction::Show,
        };
        assert_eq!(message.name(), "adminboard_controlbar");
        assert_eq!(message.payload(), json!({ "action": "show" }));
    }

    #[test]
    fn sidebar_items_serialize_in_order() {
        let message = ControlMessage::UpdateSidebar {
            items: vec![
                SidebarLink::new("Home", "#"),
                SidebarLink::new("About", "#about"),
            ],
        };
        let payload = message.payload();
        assert_eq!(payload["items"][0]["text"], "Home");
        assert_eq!(payload["items"][1]["href"], "#about");
    }

    #[test]
    fn cleared_badge_serializes_as_null() {
        let message = ControlMessage::UpdateNavBadge {
            nav_id: "demo-nav".to_string(),
            href: "#one".to_string(),
            badge: None,
        };
        assert_eq!(message.payload()["badge"], Value::Null);
    }

    #[test]
    fn envelope_wraps_name_and_payload() {
        let message = ControlMessage::UpdateTabContent {
            tab_id: "t1".to_string(),
            content: "<p>hi</p>".to_string(),
        };
        let envelope = message.envelope();
        assert_eq!(envelope["type"], "adminboard_update_tab_content");
        assert_eq!(envelope["data"]["tab_id"], "t1");
        assert_eq!(envelope["data"]["content"], "<p>hi</p>");
    }

    #[test]
    fn tab_updates_keep_the_active_flag() {
        let message = ControlMessage::UpdateNavTabs {
            nav_id: "navbar1".to_string(),
            tabs: vec![TabUpdate {
                id: "t1".to_string(),
                title: "One".to_string(),
                href: "#t1".to_string(),
                active: true,
            }],
        };
        let payload = message.payload();
        assert_eq!(payload["nav_id"], "navbar1");
        assert_eq!(payload["tabs"][0]["active"], true);
    }
}
