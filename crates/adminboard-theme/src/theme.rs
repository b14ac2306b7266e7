//! The [`Theme`] value: an ordered token map plus an optional stylesheet
//! reference resolved through the asset registry.

use adminboard_assets::{AssetError, AssetRegistry, DEFAULT_BOOTSWATCH_VERSION, stylesheet_href};

/// Reference to a named external stylesheet (e.g. a Bootswatch theme).
///
/// The reference is independent of the token map: it is resolved through the
/// asset registry at render time, never embedded in the emitted CSS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetRef {
    /// Stylesheet family name (e.g. `flatly`).
    pub name: String,
    /// Major version used for CDN references.
    pub version: String,
}

/// An immutable-after-construction mapping of design tokens to CSS values.
///
/// Token order is insertion order; setting an existing token replaces its
/// value in place. Names may be stored with or without the leading `--`
/// marker, which is normalized on at emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    variables: Vec<(String, String)>,
    stylesheet: Option<StylesheetRef>,
}

impl Theme {
    /// An empty theme with no tokens and no stylesheet reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a theme from token/value pairs, last write per token winning.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut theme = Self::new();
        for (name, value) in pairs {
            theme.set(name, value);
        }
        theme
    }

    /// A token-free theme referencing the named Bootswatch stylesheet at the
    /// default major version.
    #[must_use]
    pub fn bootswatch(name: impl Into<String>) -> Self {
        Self::bootswatch_with_version(name, DEFAULT_BOOTSWATCH_VERSION)
    }

    /// A token-free theme referencing the named Bootswatch stylesheet at an
    /// explicit version.
    #[must_use]
    pub fn bootswatch_with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            variables: Vec::new(),
            stylesheet: Some(StylesheetRef {
                name: name.into(),
                version: version.into(),
            }),
        }
    }

    /// Set a token, replacing any existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.variables.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.variables.push((name, value));
        }
    }

    /// Builder form of [`Theme::set`].
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Attach a stylesheet reference to an existing theme.
    #[must_use]
    pub fn with_stylesheet(mut self, reference: StylesheetRef) -> Self {
        self.stylesheet = Some(reference);
        self
    }

    /// Tokens in insertion order.
    #[must_use]
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Whether the theme carries no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// The attached stylesheet reference, when any.
    #[must_use]
    pub const fn stylesheet(&self) -> Option<&StylesheetRef> {
        self.stylesheet.as_ref()
    }

    /// Resolve the stylesheet reference through the registry.
    ///
    /// Returns `Ok(None)` when the theme carries no reference.
    ///
    /// # Errors
    ///
    /// Propagates [`AssetError`] from resolution; with the references this
    /// type constructs that only happens for an empty stylesheet name.
    pub fn stylesheet_link(&self, registry: &AssetRegistry) -> Result<Option<String>, AssetError> {
        match &self.stylesheet {
            None => Ok(None),
            Some(reference) => {
                stylesheet_href(registry, &reference.name, Some(&reference.version)).map(Some)
            }
        }
    }

    /// Emit the token map as one `:root` block of CSS custom properties.
    ///
    /// Each token becomes one `  --<name>: <value>;` line; names already
    /// carrying the `--` marker are kept as-is. An empty theme emits an
    /// empty string.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.variables.is_empty() {
            return String::new();
        }
        let mut lines = vec![":root {".to_string()];
        for (name, value) in &self.variables {
            if name.starts_with("--") {
                lines.push(format!("  {name}: {value};"));
            } else {
                lines.push(format!("  --{name}: {value};"));
            }
        }
        lines.push("}".to_string());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens;

    #[test]
    fn empty_theme_emits_nothing() {
        assert_eq!(Theme::new().to_css(), "");
    }

    #[test]
    fn one_declaration_per_token_inside_one_root_block() {
        let theme = Theme::from_pairs([
            (tokens::PRIMARY_BG, "#0b5e2e"),
            (tokens::BADGE_INFO_BG, "#17a2b8"),
        ]);
        let css = theme.to_css();
        assert_eq!(
            css,
            ":root {\n  --adminboard-primary-bg: #0b5e2e;\n  --adminboard-badge-info-bg: #17a2b8;\n}"
        );
        assert_eq!(css.matches(":root {").count(), 1);
        assert_eq!(css.matches(';').count(), 2);
    }

    #[test]
    fn marker_is_not_doubled() {
        let theme = Theme::from_pairs([("--adminboard-nav-bg", "#fff")]);
        let css = theme.to_css();
        assert!(css.contains("  --adminboard-nav-bg: #fff;"));
        assert!(!css.contains("----"));
    }

    #[test]
    fn set_replaces_in_place_keeping_order() {
        let mut theme = Theme::from_pairs([("a", "1"), ("b", "2")]);
        theme.set("a", "3");
        let pairs: Vec<_> = theme.variables().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn bootswatch_reference_is_independent_of_tokens() {
        let theme = Theme::bootswatch("flatly");
        assert!(theme.is_empty());
        assert_eq!(theme.to_css(), "");
        let reference = theme.stylesheet().expect("reference");
        assert_eq!(reference.name, "flatly");
        assert_eq!(reference.version, "5");
    }

    #[test]
    fn stylesheet_link_falls_back_to_cdn() {
        let registry = AssetRegistry::new();
        let theme = Theme::bootswatch_with_version("darkly", "4");
        let href = theme
            .stylesheet_link(&registry)
            .expect("resolution")
            .expect("reference");
        assert_eq!(
            href,
            "https://cdn.jsdelivr.net/npm/bootswatch@4/dist/darkly/bootstrap.min.css"
        );
    }

    #[test]
    fn themes_without_reference_resolve_to_none() {
        let registry = AssetRegistry::new();
        assert_eq!(Theme::new().stylesheet_link(&registry).expect("ok"), None);
    }
}
