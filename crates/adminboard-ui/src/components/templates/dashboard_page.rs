use yew::prelude::*;

use crate::handler::handler_script_tag;
use crate::head::stylesheet_link;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    #[prop_or_default]
    pub navbar: Option<Html>,
    #[prop_or_default]
    pub sidebar: Option<Html>,
    #[prop_or_default]
    pub body: Option<Html>,
    #[prop_or_default]
    pub controlbar: Option<Html>,
    #[prop_or_default]
    pub footer: Option<Html>,
    /// AdminLTE stylesheet reference linked at the top of the fragment.
    #[prop_or_default]
    pub stylesheet_href: Option<AttrValue>,
    /// AdminLTE script reference included at the bottom of the fragment.
    #[prop_or_default]
    pub script_src: Option<AttrValue>,
    /// Theme style element, typically from `head::theme_style_tag`.
    #[prop_or_default]
    pub theme_style: Option<Html>,
    /// Whether to bundle the client-side message handler script.
    #[prop_or(true)]
    pub include_handler: bool,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let navbar = props.navbar.clone().unwrap_or_else(|| {
        html! { <nav class="main-header navbar navbar-expand navbar-light"></nav> }
    });
    let sidebar = props.sidebar.clone().unwrap_or_else(|| {
        html! { <aside class="main-sidebar sidebar-dark-primary elevation-4"></aside> }
    });
    let body = props
        .body
        .clone()
        .unwrap_or_else(|| html! { <div class="content"></div> });
    let footer = props
        .footer
        .clone()
        .unwrap_or_else(|| html! { <footer class="main-footer"></footer> });

    html! {
        <div>
            {props.stylesheet_href.clone().map(stylesheet_link).unwrap_or_default()}
            {props.theme_style.clone().unwrap_or_default()}
            <div class="wrapper">
                {navbar}
                {sidebar}
                <div class="content-wrapper">{body}</div>
                {props.controlbar.clone().unwrap_or_default()}
                {footer}
            </div>
            {props.script_src.clone().map(|src| {
                // html! rejects script tags, so the element is injected raw.
                Html::from_html_unchecked(AttrValue::from(format!(
                    "<script src=\"{src}\"></script>"
                )))
            }).unwrap_or_default()}
            {props.include_handler.then(handler_script_tag).unwrap_or_default()}
        </div>
    }
}
