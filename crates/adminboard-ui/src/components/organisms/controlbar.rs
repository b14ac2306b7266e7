use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ControlbarProps {
    #[prop_or(true)]
    pub dark: bool,
    #[prop_or(AttrValue::Static("controlbar"))]
    pub id: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Controlbar)]
pub fn controlbar(props: &ControlbarProps) -> Html {
    let classes = classes!(
        "control-sidebar",
        if props.dark {
            "control-sidebar-dark"
        } else {
            "control-sidebar-light"
        }
    );
    html! {
        <aside class={classes} id={props.id.clone()}>
            { for props.children.iter() }
        </aside>
    }
}
