use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentBodyProps {
    #[prop_or(AttrValue::Static("container-fluid"))]
    pub container_class: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ContentBody)]
pub fn content_body(props: &ContentBodyProps) -> Html {
    html! {
        <div class="content-wrapper">
            <div class={props.container_class.to_string()}>
                <div class="content">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
