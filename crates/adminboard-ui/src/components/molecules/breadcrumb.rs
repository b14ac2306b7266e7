use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: AttrValue,
    pub href: Option<AttrValue>,
}

impl Crumb {
    pub fn link(label: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    pub fn current(label: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: None,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BreadcrumbProps {
    #[prop_or_default]
    pub items: Vec<Crumb>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &BreadcrumbProps) -> Html {
    html! {
        <nav aria-label="Breadcrumb">
            <ol class={classes!("breadcrumb", "float-sm-right", props.class.clone())}>
                {for props.items.iter().map(|crumb| {
                    let item_class = classes!(
                        "breadcrumb-item",
                        crumb.href.is_none().then_some("active")
                    );
                    html! {
                        <li class={item_class}>
                            {crumb.href.clone().map(|href| html! {
                                <a href={href}>{crumb.label.clone()}</a>
                            }).unwrap_or_else(|| {
                                html! { <span aria-current="page">{crumb.label.clone()}</span> }
                            })}
                        </li>
                    }
                })}
            </ol>
        </nav>
    }
}
