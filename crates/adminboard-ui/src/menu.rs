//! Navigation model shared by the sidebar and navbar components.
//!
//! Entries are an explicit sum type built through constructors; hosts that
//! hand over loosely shaped JSON go through [`MenuEntry::from_value`], which
//! skips malformed entries so rendering stays best-effort.

use serde_json::Value;
use yew::AttrValue;

use crate::foundations::StatusColor;

/// Sentinel string hosts use to request a divider.
pub const DIVIDER_SENTINEL: &str = "---";

/// Accessible label attached to every rendered badge.
#[must_use]
pub fn badge_aria_label(item_text: &str, badge_text: &str) -> String {
    format!("{item_text} badge {badge_text}")
}

/// Badge attached to a navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BadgeSpec {
    /// Badge text with the default informational styling.
    Text(AttrValue),
    /// Badge text with a named status color.
    Colored {
        /// Badge text.
        text: AttrValue,
        /// Status color applied as `badge-<color>`.
        color: StatusColor,
    },
    /// Badge text with a full class override.
    Classed {
        /// Badge text.
        text: AttrValue,
        /// Complete class list for the badge element.
        class: AttrValue,
    },
}

impl BadgeSpec {
    /// Badge with the default informational styling.
    #[must_use]
    pub fn text(text: impl Into<AttrValue>) -> Self {
        Self::Text(text.into())
    }

    /// Badge with a named status color.
    #[must_use]
    pub fn colored(text: impl Into<AttrValue>, color: StatusColor) -> Self {
        Self::Colored {
            text: text.into(),
            color,
        }
    }

    /// Badge with a full class override.
    #[must_use]
    pub fn classed(text: impl Into<AttrValue>, class: impl Into<AttrValue>) -> Self {
        Self::Classed {
            text: text.into(),
            class: class.into(),
        }
    }

    /// The badge's visible text.
    #[must_use]
    pub const fn label(&self) -> &AttrValue {
        match self {
            Self::Text(text) | Self::Colored { text, .. } | Self::Classed { text, .. } => text,
        }
    }

    /// The badge element's class list.
    #[must_use]
    pub fn class(&self) -> String {
        match self {
            Self::Text(_) => "badge badge-info float-right".to_string(),
            Self::Colored { color, .. } => {
                format!("badge badge-{} float-right", color.as_str())
            }
            Self::Classed { class, .. } => class.to_string(),
        }
    }

    /// Parse a badge from its wire shapes: a plain string, or a mapping with
    /// `text` plus either `class` or `color`.
    ///
    /// Empty or null badges mean "no badge"; other shapes are malformed and
    /// also yield `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if !text.is_empty() => Some(Self::text(text.clone())),
            Value::Object(map) => {
                let text = map.get("text")?.as_str()?;
                if text.is_empty() {
                    return None;
                }
                if let Some(class) = map.get("class").and_then(Value::as_str) {
                    return Some(Self::classed(text.to_string(), class.to_string()));
                }
                if let Some(color) = map.get("color").and_then(Value::as_str) {
                    return Some(StatusColor::parse(color).map_or_else(
                        || {
                            Self::classed(
                                text.to_string(),
                                format!("badge badge-{color} float-right"),
                            )
                        },
                        |status| Self::colored(text.to_string(), status),
                    ));
                }
                Some(Self::text(text.to_string()))
            }
            _ => None,
        }
    }
}

/// One navigation link: text, target, and optional badge/icon decoration.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuLink {
    /// Visible link text.
    pub text: AttrValue,
    /// Link target.
    pub href: AttrValue,
    /// Optional badge.
    pub badge: Option<BadgeSpec>,
    /// Optional icon class (e.g. `fas fa-bell`).
    pub icon: Option<AttrValue>,
    /// Whether the link is the active one.
    pub active: bool,
}

impl MenuLink {
    /// A plain link.
    #[must_use]
    pub fn new(text: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            badge: None,
            icon: None,
            active: false,
        }
    }

    /// Attach a badge.
    #[must_use]
    pub fn badge(mut self, badge: BadgeSpec) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Attach an icon class.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<AttrValue>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Mark the link active.
    #[must_use]
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Parse a link from its wire shapes: `[text, href]` optionally extended
    /// with badge and icon elements, or a mapping with named fields.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                if !(2..=4).contains(&items.len()) {
                    return None;
                }
                let text = items[0].as_str()?;
                let href = items[1].as_str()?;
                let mut link = Self::new(text.to_string(), href.to_string());
                if let Some(badge) = items.get(2).and_then(BadgeSpec::from_value) {
                    link = link.badge(badge);
                }
                if let Some(icon) = items.get(3).and_then(Value::as_str) {
                    link = link.icon(icon.to_string());
                }
                Some(link)
            }
            Value::Object(map) => {
                let text = map.get("text")?.as_str()?;
                let href = map.get("href").and_then(Value::as_str).unwrap_or("#");
                let mut link = Self::new(text.to_string(), href.to_string());
                if let Some(badge) = map.get("badge").and_then(BadgeSpec::from_value) {
                    link = link.badge(badge);
                }
                if let Some(icon) = map.get("icon").and_then(Value::as_str) {
                    link = link.icon(icon.to_string());
                }
                if map.get("active").and_then(Value::as_bool) == Some(true) {
                    link = link.active();
                }
                Some(link)
            }
            _ => None,
        }
    }
}

/// One entry of a navigation menu.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuEntry {
    /// A navigable link.
    Link(MenuLink),
    /// A collapsible group of links rendered one level deep.
    Group {
        /// Group label.
        text: AttrValue,
        /// Optional icon class on the group toggle.
        icon: Option<AttrValue>,
        /// Links rendered inside the group.
        children: Vec<MenuLink>,
    },
    /// A non-navigable section header.
    Header(AttrValue),
    /// A visual divider between sections.
    Divider,
}

impl MenuEntry {
    /// A plain link entry.
    #[must_use]
    pub fn link(link: MenuLink) -> Self {
        Self::Link(link)
    }

    /// A group entry with the given children.
    #[must_use]
    pub fn group(text: impl Into<AttrValue>, children: Vec<MenuLink>) -> Self {
        Self::Group {
            text: text.into(),
            icon: None,
            children,
        }
    }

    /// A section header entry.
    #[must_use]
    pub fn header(text: impl Into<AttrValue>) -> Self {
        Self::Header(text.into())
    }

    /// Parse a single entry from its wire shapes.
    ///
    /// Accepted shapes: the divider sentinel string, a one-element array
    /// (header), `[text, [children]]` (group), `[text, href, ...]` (link),
    /// and mappings with named fields. Anything else is malformed and yields
    /// `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) if text == DIVIDER_SENTINEL => Some(Self::Divider),
            Value::Array(items) => match items.as_slice() {
                [Value::String(text)] => Some(Self::header(text.clone())),
                [Value::String(text), Value::Array(children)] => Some(Self::Group {
                    text: AttrValue::from(text.clone()),
                    icon: None,
                    children: children.iter().filter_map(MenuLink::from_value).collect(),
                }),
                _ => MenuLink::from_value(value).map(Self::Link),
            },
            Value::Object(map) => {
                if let Some(text) = map.get("header").and_then(Value::as_str) {
                    return Some(Self::header(text.to_string()));
                }
                if let Some(Value::Array(children)) = map.get("children") {
                    let text = map.get("text")?.as_str()?;
                    let icon = map
                        .get("icon")
                        .and_then(Value::as_str)
                        .map(|icon| AttrValue::from(icon.to_string()));
                    return Some(Self::Group {
                        text: AttrValue::from(text.to_string()),
                        icon,
                        children: children.iter().filter_map(MenuLink::from_value).collect(),
                    });
                }
                MenuLink::from_value(value).map(Self::Link)
            }
            _ => None,
        }
    }

    /// Parse an ordered sequence of entries, skipping malformed ones.
    #[must_use]
    pub fn from_values(values: &[Value]) -> Vec<Self> {
        values.iter().filter_map(Self::from_value).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn badge_shapes_and_classes() {
        let plain = BadgeSpec::text("3");
        assert_eq!(plain.class(), "badge badge-info float-right");

        let colored = BadgeSpec::colored("5", StatusColor::Danger);
        assert_eq!(colored.class(), "badge badge-danger float-right");
        let label: &str = colored.label();
        assert_eq!(label, "5");

        let classed = BadgeSpec::classed("3", "badge badge-warning");
        assert_eq!(classed.class(), "badge badge-warning");
    }

    #[test]
    fn badge_aria_label_combines_item_and_badge_text() {
        assert_eq!(badge_aria_label("Alerts", "5"), "Alerts badge 5");
    }

    #[test]
    fn badge_wire_shapes_parse() {
        assert_eq!(
            BadgeSpec::from_value(&json!("3")),
            Some(BadgeSpec::text("3"))
        );
        assert_eq!(
            BadgeSpec::from_value(&json!({"text": "5", "color": "danger"})),
            Some(BadgeSpec::colored("5", StatusColor::Danger))
        );
        assert_eq!(
            BadgeSpec::from_value(&json!({"text": "3", "class": "badge badge-warning"})),
            Some(BadgeSpec::classed("3", "badge badge-warning"))
        );
        // Unknown color names stay permissive.
        assert_eq!(
            BadgeSpec::from_value(&json!({"text": "1", "color": "teal"})),
            Some(BadgeSpec::classed("1", "badge badge-teal float-right"))
        );
    }

    #[test]
    fn empty_or_null_badges_mean_no_badge() {
        assert_eq!(BadgeSpec::from_value(&json!("")), None);
        assert_eq!(BadgeSpec::from_value(&json!(null)), None);
        assert_eq!(BadgeSpec::from_value(&json!({"text": ""})), None);
    }

    #[test]
    fn heterogeneous_entries_normalize_in_order() {
        let entries = MenuEntry::from_values(&[
            json!(["Home", "#"]),
            json!(["About", "#about", "3"]),
            json!(["Group", [["A", "#a"], ["B", "#b", "2"]]]),
            json!("---"),
            json!(["Main"]),
            json!({"text": "Help", "href": "#help", "icon": "fas fa-question-circle"}),
        ]);

        assert_eq!(entries.len(), 6);
        assert!(matches!(&entries[0], MenuEntry::Link(link) if link.badge.is_none()));
        assert!(matches!(
            &entries[1],
            MenuEntry::Link(link) if link.badge == Some(BadgeSpec::text("3"))
        ));
        match &entries[2] {
            MenuEntry::Group { children, .. } => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[1].badge, Some(BadgeSpec::text("2")));
                assert_eq!(&*children[0].text, "A");
            }
            other => panic!("expected group, got {other:?}"),
        }
        assert_eq!(entries[3], MenuEntry::Divider);
        assert_eq!(entries[4], MenuEntry::Header(AttrValue::from("Main")));
        assert!(matches!(
            &entries[5],
            MenuEntry::Link(link) if link.icon.as_deref() == Some("fas fa-question-circle")
        ));
    }

    #[test]
    fn malformed_entries_are_skipped_not_fatal() {
        let entries = MenuEntry::from_values(&[
            json!(42),
            json!(["only-text-and-no-href-but-five", "#", "1", "fas fa-x", "extra"]),
            json!([1, 2]),
            json!("not-a-divider"),
            json!(["Still", "#works"]),
        ]);

        assert_eq!(entries.len(), 1);
        assert!(matches!(&entries[0], MenuEntry::Link(link) if &*link.text == "Still"));
    }

    #[test]
    fn group_children_skip_malformed_shapes() {
        let entry = MenuEntry::from_value(&json!(["Group", [["A", "#a"], 7, ["B"]]]))
            .expect("group parses");
        match entry {
            MenuEntry::Group { children, .. } => {
                assert_eq!(children.len(), 1);
                assert_eq!(&*children[0].text, "A");
            }
            other => panic!("expected group, got {other:?}"),
        }
    }
}
