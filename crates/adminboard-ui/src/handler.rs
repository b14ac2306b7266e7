//! The bundled client-side message handler.
//!
//! The handler is plain JavaScript shipped as a static asset: it listens for
//! `{type, data}` envelopes (window messages, or direct calls through the
//! `Adminboard.handleMessage` hook a host bridge can invoke) and performs the
//! DOM mutation each named message asks for. Server code never depends on it
//! beyond the message contract.

use yew::prelude::*;

/// The client handler source, bundled at compile time.
pub const CONTROLBAR_JS: &str = include_str!("../static/js/controlbar.js");

/// A `<script>` element inlining the bundled handler.
///
/// Injected raw: script bodies must not be entity-escaped.
#[must_use]
pub fn handler_script_tag() -> Html {
    Html::from_html_unchecked(AttrValue::from(format!("<script>{CONTROLBAR_JS}</script>")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_covers_every_message_name() {
        for name in [
            "adminboard_controlbar",
            "adminboard_update_sidebar",
            "adminboard_update_sidebar_badges",
            "adminboard_set_active_item",
            "adminboard_update_navs",
            "adminboard_update_nav_items",
            "adminboard_add_nav_item",
            "adminboard_remove_nav_item",
            "adminboard_update_nav_badge",
            "adminboard_update_tab_content",
        ] {
            assert!(
                CONTROLBAR_JS.contains(name),
                "handler does not handle {name}"
            );
        }
    }

    #[test]
    fn handler_never_closes_its_own_script_tag() {
        assert!(!CONTROLBAR_JS.contains("</script>"));
    }
}
