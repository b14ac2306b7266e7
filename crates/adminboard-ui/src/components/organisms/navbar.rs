use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or(AttrValue::Static("Dashboard"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static("dashboard-navbar"))]
    pub id: AttrValue,
    #[prop_or_default]
    pub right: Children,
    #[prop_or_default]
    pub controlbar_icon: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let classes = classes!(
        "main-header",
        "navbar",
        "navbar-expand",
        props.class.clone()
    );
    html! {
        <nav class={classes} id={props.id.clone()}>
            <ul class="navbar-nav">
                <li class="nav-item">
                    <a class="nav-link" id="pushmenu-toggle" data-widget="pushmenu" href="#">
                        {"\u{2261}"}
                    </a>
                </li>
                <li class="nav-item d-none d-sm-inline-block">
                    <span class="nav-link">{props.title.clone()}</span>
                </li>
            </ul>
            <ul class="navbar-nav ml-auto navbar-right">
                { for props.right.iter() }
                {props.controlbar_icon.clone().map(|icon| html! {
                    <li class="nav-item">
                        <a
                            id="controlbar-toggle"
                            class="nav-link"
                            data-widget="control-sidebar"
                            href="#"
                        >
                            {icon}
                        </a>
                    </li>
                }).unwrap_or_default()}
            </ul>
        </nav>
    }
}
