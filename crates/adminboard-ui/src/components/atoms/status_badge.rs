use yew::prelude::*;

use crate::menu::{BadgeSpec, badge_aria_label};

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub badge: BadgeSpec,
    /// Text of the item the badge decorates, used for the aria label.
    pub item_text: AttrValue,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let label = badge_aria_label(&props.item_text, props.badge.label());
    html! {
        <span class={props.badge.class()} aria-label={label}>
            {props.badge.label().clone()}
        </span>
    }
}
