use yew::prelude::*;

use crate::components::atoms::Avatar;

#[derive(Clone, PartialEq)]
pub struct UserMenuLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

impl UserMenuLink {
    pub fn new(label: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or_default]
    pub items: Vec<UserMenuLink>,
}

#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    html! {
        <li class="nav-item dropdown user-menu">
            <a class="nav-link dropdown-toggle" data-toggle="dropdown" href="#">
                <Avatar name={props.name.clone()} image={props.image.clone()} />
                <span class="d-none d-md-inline">{props.name.clone()}</span>
            </a>
            <div class="dropdown-menu dropdown-menu-right">
                {for props.items.iter().map(|item| html! {
                    <a class="dropdown-item" href={item.href.clone()}>{item.label.clone()}</a>
                })}
            </div>
        </li>
    }
}
