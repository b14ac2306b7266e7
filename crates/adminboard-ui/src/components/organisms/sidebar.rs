use yew::prelude::*;

use crate::components::molecules::SidebarMenu;
use crate::foundations::{StatusColor, status_class};
use crate::menu::MenuEntry;

#[derive(Properties, PartialEq)]
pub struct BrandProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub color: Option<StatusColor>,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub image: Option<AttrValue>,
    #[prop_or(0.8)]
    pub opacity: f64,
}

#[function_component(Brand)]
pub fn brand(props: &BrandProps) -> Html {
    let mut classes = classes!("brand-link");
    if let Some(background) = status_class("bg", props.color) {
        classes.push(background);
    }
    let href = props.href.clone().unwrap_or(AttrValue::Static("#"));
    let target = props.href.is_some().then_some("_blank");
    html! {
        <a class={classes} href={href} target={target}>
            {props.image.clone().map(|src| html! {
                <img
                    src={src}
                    class="brand-image img-circle elevation-3"
                    style={format!("opacity: {}", props.opacity)}
                />
            }).unwrap_or_default()}
            <span class="brand-text font-weight-light">{props.title.clone()}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    #[prop_or(AttrValue::Static("My app"))]
    pub brand_title: AttrValue,
    #[prop_or_default]
    pub brand: Option<Html>,
    #[prop_or_default]
    pub entries: Vec<MenuEntry>,
    #[prop_or(AttrValue::Static("main-sidebar"))]
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let classes = classes!(
        "main-sidebar",
        "sidebar-dark-primary",
        "elevation-4",
        props.class.clone()
    );
    let brand = props.brand.clone().unwrap_or_else(|| {
        html! { <Brand title={props.brand_title.clone()} /> }
    });
    html! {
        <aside class={classes} id={props.id.clone()}>
            {brand}
            <div class="sidebar">
                <nav class="mt-2">
                    <SidebarMenu entries={props.entries.clone()} />
                </nav>
            </div>
        </aside>
    }
}
