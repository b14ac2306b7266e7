use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TabSpec {
    pub id: AttrValue,
    pub title: AttrValue,
    pub content: Html,
    pub active: bool,
}

impl TabSpec {
    pub fn new(id: impl Into<AttrValue>, title: impl Into<AttrValue>, content: Html) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            active: false,
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct NavTabsProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub tabs: Vec<TabSpec>,
    #[prop_or(AttrValue::Static("nav nav-tabs"))]
    pub nav_class: AttrValue,
    #[prop_or(AttrValue::Static("tab-content"))]
    pub content_class: AttrValue,
}

#[function_component(NavTabs)]
pub fn nav_tabs(props: &NavTabsProps) -> Html {
    html! {
        <div id={props.id.clone()}>
            <ul class={props.nav_class.to_string()} role="tablist">
                {for props.tabs.iter().map(|tab| {
                    let link_class = classes!("nav-link", tab.active.then_some("active"));
                    html! {
                        <li class="nav-item">
                            <a
                                class={link_class}
                                data-toggle="tab"
                                role="tab"
                                href={format!("#{}", tab.id)}
                            >
                                {tab.title.clone()}
                            </a>
                        </li>
                    }
                })}
            </ul>
            <div class={props.content_class.to_string()}>
                {for props.tabs.iter().map(|tab| html! {
                    <TabPane id={tab.id.clone()} active={tab.active}>
                        {tab.content.clone()}
                    </TabPane>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabPaneProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabPane)]
pub fn tab_pane(props: &TabPaneProps) -> Html {
    let classes = classes!("tab-pane", props.active.then_some("active"));
    html! {
        <div class={classes} id={props.id.clone()} role="tabpanel">
            { for props.children.iter() }
        </div>
    }
}
