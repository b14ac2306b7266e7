use yew::prelude::*;

use crate::components::atoms::{Icon, StatusBadge};
use crate::menu::BadgeSpec;

#[derive(Properties, PartialEq)]
pub struct NavbarItemProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("#"))]
    pub href: AttrValue,
    #[prop_or_default]
    pub badge: Option<BadgeSpec>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub active: bool,
}

#[function_component(NavbarItem)]
pub fn navbar_item(props: &NavbarItemProps) -> Html {
    let classes = classes!("nav-link", props.active.then_some("active"));
    html! {
        <li class="nav-item">
            <a class={classes} href={props.href.clone()}>
                {props.icon.clone().map(|icon| html! {
                    <Icon class={icon} />
                }).unwrap_or_default()}
                {props.text.clone()}
                {props.badge.clone().map(|badge| html! {
                    <StatusBadge badge={badge} item_text={props.text.clone()} />
                }).unwrap_or_default()}
            </a>
        </li>
    }
}
