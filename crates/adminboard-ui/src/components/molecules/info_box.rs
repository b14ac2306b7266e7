use yew::prelude::*;

use crate::components::atoms::Icon;
use crate::foundations::{StatusColor, column_class, status_class};

#[derive(Properties, PartialEq)]
pub struct InfoBoxProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub color: Option<StatusColor>,
    #[prop_or(12)]
    pub width: u8,
}

#[function_component(InfoBox)]
pub fn info_box(props: &InfoBoxProps) -> Html {
    let icon_class = classes!(
        "info-box-icon",
        status_class("bg", props.color)
    );
    html! {
        <div class={column_class(props.width)}>
            <div class="info-box">
                {props.icon.clone().map(|icon| html! {
                    <span class={icon_class.clone()}><Icon class={icon} /></span>
                }).unwrap_or_default()}
                <div class="info-box-content">
                    <span class="info-box-text">{props.title.clone()}</span>
                    <span class="info-box-number">{props.value.clone()}</span>
                </div>
            </div>
        </div>
    }
}
