//! Server-side rendering checks for the component markup contract.

use adminboard_assets::AssetRegistry;
use adminboard_theme::Theme;
use adminboard_ui::components::{
    Brand, CardBox, Controlbar, DashboardPage, InfoBox, NavTabs, Navbar, NavbarItem, Sidebar,
    SidebarMenu, TabSpec, UserMenu, UserMenuLink, ValueBox,
};
use adminboard_ui::head::{theme_head_elements, theme_style_tag};
use adminboard_ui::menu::{BadgeSpec, MenuEntry, MenuLink};
use adminboard_ui::{StatusColor, badge_aria_label};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct WrapProps {
    inner: Html,
}

#[function_component(Wrap)]
fn wrap(props: &WrapProps) -> Html {
    props.inner.clone()
}

async fn render(inner: Html) -> String {
    yew::LocalServerRenderer::<Wrap>::with_props(WrapProps { inner })
        .hydratable(false)
        .render()
        .await
}

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.match_indices(needle).count()
}

#[tokio::test]
async fn sidebar_menu_renders_every_entry_in_order() {
    let entries = vec![
        MenuEntry::link(MenuLink::new("Home", "#")),
        MenuEntry::link(MenuLink::new("About", "#about").badge(BadgeSpec::text("3"))),
        MenuEntry::group(
            "Group",
            vec![MenuLink::new("A", "#a"), MenuLink::new("B", "#b")],
        ),
        MenuEntry::Divider,
    ];
    let html = render(html! { <SidebarMenu entries={entries} /> }).await;

    // One plain item, one badged item, one group with exactly two children,
    // one divider; nothing lost, nothing invented.
    assert_eq!(occurrences(&html, "<li"), 6, "markup: {html}");
    assert_eq!(occurrences(&html, "sidebar-divider"), 1);
    let tree_start = html.find("nav-treeview").expect("group list rendered");
    let tree = &html[tree_start..];
    let tree_end = tree.find("</ul>").expect("group list closed");
    assert_eq!(occurrences(&tree[..tree_end], "<li"), 2);
    assert!(html.contains("aria-label=\"About badge 3\""));
    assert!(html.contains(">3<"));

    let home = html.find("Home").expect("home rendered");
    let about = html.find("About").expect("about rendered");
    let group = html.find("Group").expect("group rendered");
    let divider = html.find("sidebar-divider").expect("divider rendered");
    assert!(home < about && about < group && group < divider);

    // Nested children live under a different structural role.
    assert!(html.contains("nav nav-treeview"));
    assert!(html.contains("role=\"group\""));
    assert!(html.contains("role=\"menu\""));
}

#[tokio::test]
async fn badge_shapes_all_carry_accessible_labels() {
    for badge in [
        BadgeSpec::text("5"),
        BadgeSpec::colored("5", StatusColor::Danger),
        BadgeSpec::classed("5", "badge badge-warning"),
    ] {
        let html = render(html! {
            <NavbarItem text="Alerts" href="#alerts" badge={badge} icon="fas fa-bell" />
        })
        .await;
        assert!(
            html.contains(&format!("aria-label=\"{}\"", badge_aria_label("Alerts", "5"))),
            "missing label in {html}"
        );
        assert!(html.contains("fas fa-bell"));
    }
}

#[tokio::test]
async fn colored_and_classed_badges_render_their_classes() {
    let colored = render(html! {
        <NavbarItem text="Alerts" badge={BadgeSpec::colored("5", StatusColor::Danger)} />
    })
    .await;
    assert!(colored.contains("badge-danger"));

    let classed = render(html! {
        <NavbarItem text="About" badge={BadgeSpec::classed("3", "badge badge-warning")} />
    })
    .await;
    assert!(classed.contains("badge-warning"));
}

#[tokio::test]
async fn navbar_carries_toggles_and_title() {
    let html = render(html! {
        <Navbar title="Title" controlbar_icon={Some(html! { <i class="fas fa-th"></i> })} />
    })
    .await;
    assert!(html.contains("pushmenu-toggle"));
    assert!(html.contains("Title"));
    assert!(html.contains("controlbar-toggle"));
    assert!(html.contains("data-widget=\"control-sidebar\""));
    assert!(html.contains("fas fa-th"));
}

#[tokio::test]
async fn sidebar_wraps_brand_and_menu() {
    let html = render(html! {
        <Sidebar
            brand_title="X"
            entries={vec![MenuEntry::link(MenuLink::new("Home", "#"))]}
        />
    })
    .await;
    assert!(html.contains("main-sidebar sidebar-dark-primary elevation-4"));
    assert!(html.contains("brand-text font-weight-light"));
    assert!(html.contains("nav nav-pills nav-sidebar flex-column"));
    assert!(html.contains("Home"));
}

#[tokio::test]
async fn brand_background_and_image_opacity() {
    let html = render(html! {
        <Brand
            title="My app"
            color={Some(StatusColor::Primary)}
            image="/img/logo.png"
            href="https://example.org"
        />
    })
    .await;
    assert!(html.contains("brand-link"));
    assert!(html.contains("bg-primary"));
    assert!(html.contains("brand-image img-circle elevation-3"));
    assert!(html.contains("opacity: 0.8"));
    assert!(html.contains("target=\"_blank\""));
}

#[tokio::test]
async fn user_menu_falls_back_to_initials_avatar() {
    let html = render(html! {
        <UserMenu
            name="Bob Jones"
            items={vec![UserMenuLink::new("Profile", "#profile")]}
        />
    })
    .await;
    assert!(html.contains("dropdown"));
    assert!(html.contains("Profile"));
    assert!(html.contains("user-avatar-initials"));
    assert!(html.contains("BJ"));
    assert!(!html.contains("style="));

    let with_image = render(html! {
        <UserMenu name="Alice" image="/img/alice.png" />
    })
    .await;
    assert!(with_image.contains("/img/alice.png"));
    assert!(!with_image.contains("user-avatar-initials"));
}

#[tokio::test]
async fn boxes_render_adminlte_structures() {
    let card = render(html! {
        <CardBox title="Stats" status={Some(StatusColor::Primary)} width={6}>
            <p>{"body"}</p>
        </CardBox>
    })
    .await;
    assert!(card.contains("col-6"));
    assert!(card.contains("card card-primary") || card.contains("card-primary"));
    assert!(card.contains("card-title"));
    assert!(card.contains("card-body"));

    let value = render(html! {
        <ValueBox
            value="150"
            title={Some(AttrValue::from("New orders"))}
            icon="fas fa-cart-plus"
            color={Some(StatusColor::Info)}
            href="#orders"
        />
    })
    .await;
    assert!(value.contains("small-box"));
    assert!(value.contains("bg-info"));
    assert!(value.contains("150"));
    assert!(value.contains("small-box-footer"));
    assert!(value.contains("More info"));

    let info = render(html! {
        <InfoBox title="CPU" value="5%" icon="fas fa-cog" color={Some(StatusColor::Danger)} />
    })
    .await;
    assert!(info.contains("info-box"));
    assert!(info.contains("info-box-icon"));
    assert!(info.contains("bg-danger"));
    assert!(info.contains("info-box-number"));
}

#[tokio::test]
async fn tabs_mark_exactly_the_active_pane() {
    let html = render(html! {
        <NavTabs
            id="demo-tabs"
            tabs={vec![
                TabSpec::new("t1", "One", html! { <p>{"first"}</p> }).active(),
                TabSpec::new("t2", "Two", html! { <p>{"second"}</p> }),
            ]}
        />
    })
    .await;
    assert!(html.contains("id=\"demo-tabs\""));
    assert!(html.contains("href=\"#t1\""));
    assert!(html.contains("href=\"#t2\""));
    assert_eq!(occurrences(&html, "nav-link active"), 1);
    assert_eq!(occurrences(&html, "tab-pane active"), 1);
    assert_eq!(occurrences(&html, "tab-pane"), 2);
}

#[tokio::test]
async fn dashboard_page_fills_in_defaults() {
    let html = render(html! { <DashboardPage /> }).await;
    assert!(html.contains("class=\"wrapper\""));
    assert!(html.contains("main-header navbar navbar-expand navbar-light"));
    assert!(html.contains("main-sidebar sidebar-dark-primary elevation-4"));
    assert!(html.contains("content-wrapper"));
    assert!(html.contains("main-footer"));
    // The client handler ships with the page by default.
    assert!(html.contains("adminboard_controlbar"));
    assert!(html.contains("adminboard_update_tab_content"));
}

#[tokio::test]
async fn dashboard_page_links_assets_and_theme() {
    let theme = Theme::from_pairs([("adminboard-primary-bg", "#0b5e2e")]);
    let html = render(html! {
        <DashboardPage
            stylesheet_href="/static/adminlte.min.css"
            script_src="/static/adminlte.min.js"
            theme_style={Some(theme_style_tag(&theme, Some("theme-styles")))}
            controlbar={Some(html! { <Controlbar>{"settings"}</Controlbar> })}
        />
    })
    .await;
    assert!(html.contains("rel=\"stylesheet\""));
    assert!(html.contains("/static/adminlte.min.css"));
    assert!(html.contains("src=\"/static/adminlte.min.js\""));
    assert!(html.contains("<style id=\"theme-styles\">"));
    assert!(html.contains("--adminboard-primary-bg: #0b5e2e;"));
    assert!(html.contains("control-sidebar control-sidebar-dark"));
}

#[tokio::test]
async fn theme_head_elements_always_give_replacement_a_target() {
    let registry = AssetRegistry::new();
    let (link, style) = theme_head_elements(&Theme::new(), &registry, Some("theme-styles"))
        .expect("resolution");
    assert!(link.is_none());
    let html = render(style).await;
    assert!(html.contains("<style id=\"theme-styles\">"));

    let themed = Theme::bootswatch("flatly");
    let (link, _style) =
        theme_head_elements(&themed, &registry, None).expect("resolution");
    let html = render(link.expect("stylesheet link")).await;
    assert!(html.contains("bootswatch@5/dist/flatly/bootstrap.min.css"));
}
