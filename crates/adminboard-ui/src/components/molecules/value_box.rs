use yew::prelude::*;

use crate::components::atoms::Icon;
use crate::foundations::{StatusColor, column_class, status_class};

#[derive(Properties, PartialEq)]
pub struct ValueBoxProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub color: Option<StatusColor>,
    #[prop_or(3)]
    pub width: u8,
    #[prop_or_default]
    pub href: Option<AttrValue>,
}

#[function_component(ValueBox)]
pub fn value_box(props: &ValueBoxProps) -> Html {
    let mut box_class = classes!("small-box");
    if let Some(background) = status_class("bg", props.color) {
        box_class.push(background);
    }
    html! {
        <div class={column_class(props.width)}>
            <div class={box_class}>
                <div class="inner">
                    <h3>{props.value.clone()}</h3>
                    {props.title.clone().map(|title| html! { <p>{title}</p> }).unwrap_or_default()}
                </div>
                {props.icon.clone().map(|icon| html! {
                    <div class="icon"><Icon class={icon} /></div>
                }).unwrap_or_default()}
                {props.href.clone().map(|href| html! {
                    <a class="small-box-footer" href={href}>{"More info"}</a>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
