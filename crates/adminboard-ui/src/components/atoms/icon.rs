use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub class: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! { <i class={props.class.to_string()}></i> }
}
