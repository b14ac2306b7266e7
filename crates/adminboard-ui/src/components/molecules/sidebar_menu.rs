use yew::prelude::*;

use crate::components::atoms::{Icon, StatusBadge};
use crate::menu::{MenuEntry, MenuLink};

#[derive(Properties, PartialEq)]
pub struct SidebarMenuProps {
    #[prop_or_default]
    pub entries: Vec<MenuEntry>,
    #[prop_or_default]
    pub class: Classes,
}

fn render_link(link: &MenuLink) -> Html {
    let classes = classes!("nav-link", link.active.then_some("active"));
    html! {
        <li class="nav-item">
            <a class={classes} href={link.href.clone()}>
                {link.icon.clone().map(|icon| html! {
                    <Icon class={AttrValue::from(format!("nav-icon {icon}"))} />
                }).unwrap_or_default()}
                {link.text.clone()}
                {link.badge.clone().map(|badge| html! {
                    <StatusBadge badge={badge} item_text={link.text.clone()} />
                }).unwrap_or_default()}
            </a>
        </li>
    }
}

fn render_entry(entry: &MenuEntry) -> Html {
    match entry {
        MenuEntry::Link(link) => render_link(link),
        MenuEntry::Group {
            text,
            icon,
            children,
        } => html! {
            <li class="nav-item has-treeview">
                <a class="nav-link" href="#">
                    {icon.clone().map(|icon| html! {
                        <Icon class={AttrValue::from(format!("nav-icon {icon}"))} />
                    }).unwrap_or_default()}
                    {text.clone()}
                    <i class="right fas fa-angle-left"></i>
                </a>
                <ul class="nav nav-treeview" role="group">
                    { for children.iter().map(render_link) }
                </ul>
            </li>
        },
        MenuEntry::Header(text) => html! {
            <li class="nav-header">{text.clone()}</li>
        },
        MenuEntry::Divider => html! {
            <li class="sidebar-divider"></li>
        },
    }
}

#[function_component(SidebarMenu)]
pub fn sidebar_menu(props: &SidebarMenuProps) -> Html {
    let classes = classes!(
        "nav",
        "nav-pills",
        "nav-sidebar",
        "flex-column",
        props.class.clone()
    );
    html! {
        <ul class={classes} role="menu">
            { for props.entries.iter().map(render_entry) }
        </ul>
    }
}
