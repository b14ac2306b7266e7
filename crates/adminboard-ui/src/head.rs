//! Head-element helpers: stylesheet links and theme style tags.

use adminboard_assets::{AssetError, AssetRegistry};
use adminboard_theme::Theme;
use yew::prelude::*;

/// A stylesheet `<link>` element for the given reference.
#[must_use]
pub fn stylesheet_link(href: impl Into<AttrValue>) -> Html {
    let href = href.into();
    html! { <link rel="stylesheet" href={href} /> }
}

/// A `<style>` element carrying the theme's CSS, or nothing for an empty
/// theme.
///
/// The CSS is injected verbatim; entity-escaping a stylesheet would corrupt
/// it.
#[must_use]
pub fn theme_style_tag(theme: &Theme, id: Option<&str>) -> Html {
    let css = theme.to_css();
    if css.is_empty() {
        return Html::default();
    }
    raw_style(&css, id)
}

/// The pair of head elements a themed page injects: the resolved stylesheet
/// link (when the theme references one) and a style element.
///
/// The style element is emitted even for an empty theme, so runtime
/// replacement always has a target.
///
/// # Errors
///
/// Propagates [`AssetError`] from stylesheet resolution.
pub fn theme_head_elements(
    theme: &Theme,
    registry: &AssetRegistry,
    id: Option<&str>,
) -> Result<(Option<Html>, Html), AssetError> {
    let link = theme.stylesheet_link(registry)?.map(stylesheet_link);
    let style = raw_style(&theme.to_css(), id);
    Ok((link, style))
}

fn raw_style(css: &str, id: Option<&str>) -> Html {
    let markup = id.map_or_else(
        || format!("<style>{css}</style>"),
        |id| format!("<style id=\"{id}\">{css}</style>"),
    );
    Html::from_html_unchecked(AttrValue::from(markup))
}
