use web_sys::MouseEvent;
use yew::prelude::*;

use super::hooks::{use_drag_scroll, use_outside_pointer, SectionReveal};
use super::{log, Site};
use crate::content::{DonationKind, DonationOption, Icon};
use crate::donation::{DonationAction, DonationPanel};
use crate::logging::LogLevel;
use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class="icon" aria-hidden="true">{props.icon.glyph()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteLinkProps {
    pub to: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RouteLink)]
pub fn route_link(props: &RouteLinkProps) -> Html {
    let onclick = {
        let to = props.to;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(to);
        })
    };

    html! {
        <a class={props.class.clone()} href={props.to.path()} onclick={onclick}>
            {props.children.clone()}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    html! {
        <nav class="navbar">
            <div class="navbar-content navbar-centered">
                <div class="navbar-links">
                    { for Route::ALL.into_iter().map(|route| html! {
                        <RouteLink
                            to={route}
                            on_navigate={props.on_navigate.clone()}
                            class={classes!(route.link_class(props.current))}
                        >
                            <span aria-hidden="true">{route.glyph()}</span>
                            <span>{route.label()}</span>
                        </RouteLink>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: &'static str,
    pub node: NodeRef,
    pub class: &'static str,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} id={props.id} data-section-id={props.id} class={classes!(props.class)}>
            {props.children.clone()}
        </section>
    }
}

pub fn revealed(reveal: &SectionReveal, id: &'static str, children: Html) -> Html {
    html! {
        <RevealSection id={id} node={reveal.node(id)} class={reveal.class(id)}>
            {children}
        </RevealSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagRowProps {
    pub tags: Vec<String>,
}

#[function_component(TagRow)]
pub fn tag_row(props: &TagRowProps) -> Html {
    let container = use_drag_scroll();

    html! {
        <div class="tag-row" ref={container}>
            { for props.tags.iter().map(|tag| html! {
                <span key={tag.clone()} class="tag">{tag.clone()}</span>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub name: AttrValue,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub home_link: bool,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="footer">
            <div class="footer-content">
                <p>{format!("© {year} {}.", props.name)}</p>
                if props.home_link {
                    <RouteLink
                        to={Route::Home}
                        on_navigate={props.on_navigate.clone()}
                        class={classes!("footer-home-link")}
                    >
                        {"Back to Home"}
                    </RouteLink>
                }
            </div>
        </footer>
    }
}

fn donation_item(
    option: &DonationOption,
    qr_visible: bool,
    on_toggle_qr: &Callback<MouseEvent>,
) -> Html {
    match option.kind {
        DonationKind::Link => html! {
            <a
                class="donation-item"
                href={option.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
            >
                <IconGlyph icon={option.icon} />
                <span class="donation-copy">
                    <strong>{option.name.clone()}</strong>
                    <span class="muted">{option.description.clone()}</span>
                </span>
            </a>
        },
        DonationKind::Qr => html! {
            <div class="donation-item-group">
                <button
                    class="donation-item"
                    type="button"
                    aria-expanded={qr_visible.to_string()}
                    onclick={on_toggle_qr.clone()}
                >
                    <IconGlyph icon={option.icon} />
                    <span class="donation-copy">
                        <strong>{option.name.clone()}</strong>
                        <span class="muted">{option.description.clone()}</span>
                    </span>
                </button>
                if qr_visible {
                    <img
                        class="donation-qr"
                        src={option.url.clone()}
                        alt={format!("{} QR code", option.name)}
                        loading="lazy"
                    />
                }
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct DonationWidgetProps {
    pub site: Site,
}

#[function_component(DonationWidget)]
pub fn donation_widget(props: &DonationWidgetProps) -> Html {
    let panel = use_reducer(DonationPanel::default);
    let widget = use_node_ref();

    {
        let dispatcher = panel.dispatcher();
        use_outside_pointer(
            widget.clone(),
            Callback::from(move |inside_widget: bool| {
                dispatcher.dispatch(DonationAction::PointerDown { inside_widget })
            }),
        );
    }

    {
        let config = props.site.config.clone();
        use_effect_with(panel.is_open(), move |open| {
            log(&config, LogLevel::Debug, "donation_panel", serde_json::json!({ "open": *open }));
            || ()
        });
    }

    let on_toggle = {
        let dispatcher = panel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DonationAction::Toggle))
    };

    let on_toggle_qr = {
        let dispatcher = panel.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DonationAction::ToggleQr))
    };

    let donations = &props.site.content.donations;
    if donations.is_empty() {
        return html! {};
    }

    html! {
        <div class={classes!("donation-widget", panel.is_open().then_some("is-open"))} ref={widget}>
            if panel.is_open() {
                <div class="donation-panel" role="dialog" aria-label="Support my work">
                    <p class="donation-title">{"Support my work"}</p>
                    { for donations.iter().map(|option| donation_item(option, panel.qr_visible(), &on_toggle_qr)) }
                </div>
            }
            <button
                class="donation-toggle"
                type="button"
                aria-label={if panel.is_open() { "Close support panel" } else { "Open support panel" }}
                aria-expanded={panel.is_open().to_string()}
                onclick={on_toggle}
            >
                <IconGlyph icon={Icon::Heart} />
            </button>
        </div>
    }
}
