mod hooks;
mod home;
mod portfolio;
mod widgets;

use serde_json::json;
use std::rc::Rc;
use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::Content;
use crate::logging::{log_event, LogLevel};
use crate::route::Route;
use home::Home;
use hooks::{use_route, use_scroll_progress};
use portfolio::Portfolio;
use widgets::{DonationWidget, Navbar};

#[derive(Clone, PartialEq)]
pub struct Site {
    pub content: Rc<Content>,
    pub config: Rc<SiteConfig>,
}

fn log(config: &SiteConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    log_event(config.log_level, level, event, fields);
}

#[derive(Properties, PartialEq)]
struct AppProps {
    site: Site,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let (route, navigate) = use_route();
    use_scroll_progress();

    {
        let config = props.site.config.clone();
        use_effect_with(route, move |route| {
            if let Some(win) = window() {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }
            log(&config, LogLevel::Info, "route_changed", json!({ "path": route.path() }));
            || ()
        });
    }

    let page = match route {
        Route::Home => html! { <Home site={props.site.clone()} on_navigate={navigate.clone()} /> },
        Route::Portfolio => {
            html! { <Portfolio site={props.site.clone()} on_navigate={navigate.clone()} /> }
        }
    };

    html! {
        <>
            <div class="scroll-progress" aria-hidden="true" />
            <Navbar current={route} on_navigate={navigate} />
            {page}
            <DonationWidget site={props.site.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ContentUnavailableProps {
    reason: AttrValue,
}

#[function_component(ContentUnavailable)]
fn content_unavailable(props: &ContentUnavailableProps) -> Html {
    html! {
        <main class="page content-unavailable">
            <h1>{"This page could not be loaded"}</h1>
            <p class="muted">{props.reason.clone()}</p>
        </main>
    }
}

pub fn run() {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");
    let config = SiteConfig::from_build_env();

    match Content::bundled() {
        Ok(content) => {
            log(
                &config,
                LogLevel::Info,
                "content_loaded",
                json!({
                    "projects": content.projects.len(),
                    "gallery": content.gallery().count(),
                    "skill_categories": content.skills.len(),
                }),
            );
            let site = Site {
                content: Rc::new(content),
                config: Rc::new(config),
            };
            yew::Renderer::<App>::with_root_and_props(root, AppProps { site }).render();
        }
        Err(error) => {
            log(
                &config,
                LogLevel::Warn,
                "content_load_failed",
                json!({ "reason": error.to_string() }),
            );
            let reason = AttrValue::from(error.to_string());
            yew::Renderer::<ContentUnavailable>::with_root_and_props(
                root,
                ContentUnavailableProps { reason },
            )
            .render();
        }
    }
}
