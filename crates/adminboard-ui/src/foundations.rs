//! Shared Bootstrap tokens used by multiple components.

use yew::prelude::*;

/// Bootstrap status colors shared by boxes, badges, and brands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusColor {
    /// Primary brand color.
    Primary,
    /// Secondary brand color.
    Secondary,
    /// Success feedback.
    Success,
    /// Informational feedback.
    Info,
    /// Warning feedback.
    Warning,
    /// Danger feedback.
    Danger,
    /// Light neutral.
    Light,
    /// Dark neutral.
    Dark,
}

impl StatusColor {
    /// Returns the class suffix (e.g. `"primary"`) for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Adds a prefix (e.g. `bg`) to the status suffix for class composition.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.as_str())
    }

    /// Parses a status name, declining unknown ones.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "success" => Some(Self::Success),
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "danger" => Some(Self::Danger),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Convenience helper for composing class lists with an optional status.
#[must_use]
pub fn status_class(prefix: &str, status: Option<StatusColor>) -> Option<String> {
    status.map(|color| color.with_prefix(prefix))
}

/// Bootstrap grid column class, clamped to the 1..=12 range.
#[must_use]
pub fn column_class(width: u8) -> String {
    format!("col-{}", width.clamp(1, 12))
}

/// Utility to merge a base class with any consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    if extra.is_empty() {
        Classes::from(base)
    } else {
        let mut classes = Classes::from(base);
        classes.push(extra.clone());
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_compose_with_prefixes() {
        assert_eq!(StatusColor::Danger.with_prefix("bg"), "bg-danger");
        assert_eq!(
            status_class("card", Some(StatusColor::Primary)),
            Some("card-primary".to_string())
        );
        assert_eq!(status_class("card", None), None);
    }

    #[test]
    fn unknown_status_names_decline() {
        assert_eq!(StatusColor::parse("info"), Some(StatusColor::Info));
        assert_eq!(StatusColor::parse("chartreuse"), None);
    }

    #[test]
    fn column_widths_are_clamped() {
        assert_eq!(column_class(3), "col-3");
        assert_eq!(column_class(0), "col-1");
        assert_eq!(column_class(40), "col-12");
    }
}
