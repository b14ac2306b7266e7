use yew::prelude::*;

use crate::foundations::{StatusColor, column_class, merge_classes, status_class};

#[derive(Properties, PartialEq)]
pub struct CardBoxProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub status: Option<StatusColor>,
    #[prop_or(12)]
    pub width: u8,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CardBox)]
pub fn card_box(props: &CardBoxProps) -> Html {
    let mut card_class = merge_classes("card", &props.class);
    if let Some(status) = status_class("card", props.status) {
        card_class.push(status);
    }
    html! {
        <div class={column_class(props.width)}>
            <div class={card_class}>
                {props.title.clone().map(|title| html! {
                    <div class="card-header">
                        <h3 class="card-title">{title}</h3>
                    </div>
                }).unwrap_or_default()}
                <div class="card-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
