use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    #[prop_or_default]
    pub text: Option<AttrValue>,
    #[prop_or_default]
    pub left: Option<Html>,
    #[prop_or_default]
    pub right: Option<Html>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let left = props
        .left
        .clone()
        .unwrap_or_else(|| html! { <div class="float-left d-none d-sm-block"></div> });
    let right = props
        .right
        .clone()
        .unwrap_or_else(|| html! { <div class="float-right d-none d-sm-block"></div> });
    html! {
        <footer class="main-footer">
            {left}
            {props.text.clone().map(|text| html! {
                <div class="text-center">{text}</div>
            }).unwrap_or_default()}
            {right}
        </footer>
    }
}
