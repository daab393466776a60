use serde_json::json;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::hooks::{use_lightbox_keys, use_scroll_lock, use_section_reveal};
use super::widgets::{revealed, Footer, RouteLink, TagRow};
use super::{log, Site};
use crate::content::Project;
use crate::lightbox::{Lightbox, LightboxAction, LightboxView};
use crate::logging::LogLevel;
use crate::reveal::GALLERY_SECTION;
use crate::route::Route;

const GALLERY_SECTIONS: [&str; 1] = [GALLERY_SECTION];

#[derive(Properties, PartialEq)]
struct LightboxModalProps {
    project: Project,
    image: usize,
    dispatch: Callback<LightboxAction>,
}

#[function_component(LightboxModal)]
fn lightbox_modal(props: &LightboxModalProps) -> Html {
    let project = &props.project;
    let count = project.images.len();
    let Some(src) = project.images.get(props.image) else {
        return html! {};
    };

    let on_action = |action: LightboxAction| {
        let dispatch = props.dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch.emit(action))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div class="lightbox-overlay" onclick={on_action(LightboxAction::Close)}>
            <div class="lightbox-content" onclick={keep_open}>
                <button class="lightbox-close" aria-label="Close" onclick={on_action(LightboxAction::Close)}>
                    {"✕"}
                </button>

                if count > 1 {
                    <>
                        <button
                            class="lightbox-nav lightbox-prev"
                            aria-label="Previous image"
                            onclick={on_action(LightboxAction::Previous)}
                        >
                            {"‹"}
                        </button>
                        <button
                            class="lightbox-nav lightbox-next"
                            aria-label="Next image"
                            onclick={on_action(LightboxAction::Next)}
                        >
                            {"›"}
                        </button>
                    </>
                }

                <div class="lightbox-image-container">
                    <img
                        class="lightbox-image"
                        src={src.clone()}
                        alt={format!("{} - Image {}", project.title, props.image + 1)}
                    />
                    if count > 1 {
                        <div class="lightbox-image-counter">{format!("{} / {count}", props.image + 1)}</div>
                    }
                </div>

                <div class="lightbox-info">
                    <div class="lightbox-header">
                        <h2>{project.title.clone()}</h2>
                        <span class="project-period">{project.period.clone()}</span>
                    </div>
                    <p>{project.description.clone()}</p>
                    <div class="lightbox-tech">
                        <span class="tech-label">{"Technologies:"}</span>
                        <span>{project.tech.clone()}</span>
                    </div>
                    <TagRow tags={project.tags.clone()} />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub site: Site,
    pub on_navigate: Callback<Route>,
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    let content = props.site.content.clone();
    let config = props.site.config.clone();
    let reveal = use_section_reveal(&GALLERY_SECTIONS, config.clone());
    let lightbox = {
        let content = content.clone();
        use_reducer(move || Lightbox::new(content.image_counts()))
    };
    let view = lightbox.view();

    use_lightbox_keys(lightbox.dispatcher());
    use_scroll_lock(view.is_open());

    {
        let config = config.clone();
        use_effect_with(view, move |view| {
            let fields = match *view {
                LightboxView::Open { project, image } => json!({ "project": project, "image": image }),
                LightboxView::Closed => json!({}),
            };
            log(&config, LogLevel::Debug, "lightbox_view", fields);
            || ()
        });
    }

    let dispatch = {
        let dispatcher = lightbox.dispatcher();
        Callback::from(move |action: LightboxAction| dispatcher.dispatch(action))
    };

    let gallery: Vec<_> = content.gallery().collect();
    let gallery_body = if gallery.is_empty() {
        html! {
            <div class="empty-state">
                <p>{"No project images yet. Add images to a project in the content file to showcase it here."}</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="section-header">
                    <h2>{"Project Gallery"}</h2>
                    <span class="eyebrow">{format!("{} projects", gallery.len())}</span>
                </div>
                <div class="portfolio-grid">
                    { for gallery.iter().enumerate().map(|(position, (index, project))| {
                        let index = *index;
                        let onclick = {
                            let dispatch = dispatch.clone();
                            Callback::from(move |_: MouseEvent| dispatch.emit(LightboxAction::Select(index)))
                        };
                        let count = project.images.len();
                        html! {
                            <article
                                key={project.title.clone()}
                                class="portfolio-card"
                                onclick={onclick}
                                style={config.card_delay(position)}
                            >
                                <div class="portfolio-card-image">
                                    <img src={project.images[0].clone()} alt={project.title.clone()} />
                                    <div class="portfolio-card-overlay">
                                        <span aria-hidden="true">{"↗"}</span>
                                        <span>{project.gallery_label()}</span>
                                    </div>
                                    if count > 1 {
                                        <div class="image-count-badge">{count.to_string()}</div>
                                    }
                                </div>
                                <div class="portfolio-card-content">
                                    <div class="portfolio-card-header">
                                        <h3>{project.title.clone()}</h3>
                                        <span class="project-period">{project.period.clone()}</span>
                                    </div>
                                    <p>{project.description.clone()}</p>
                                    <TagRow tags={project.tags.clone()} />
                                </div>
                            </article>
                        }
                    }) }
                </div>
            </>
        }
    };

    let modal = match view {
        LightboxView::Open { project, image } => content
            .projects
            .get(project)
            .map(|project| {
                html! {
                    <LightboxModal project={project.clone()} image={image} dispatch={dispatch.clone()} />
                }
            })
            .unwrap_or_default(),
        LightboxView::Closed => html! {},
    };

    html! {
        <>
            <div class="page portfolio-page">
                <header class="portfolio-header will-animate animate-fade-in-up">
                    <RouteLink
                        to={Route::Home}
                        on_navigate={props.on_navigate.clone()}
                        class={classes!("back-link")}
                    >
                        <span aria-hidden="true">{"←"}</span>
                        <span>{"Back to Home"}</span>
                    </RouteLink>
                    <div class="portfolio-hero">
                        <p class="eyebrow">{"Project Showcase"}</p>
                        <h1>{"My Portfolio"}</h1>
                        <p class="portfolio-subtitle">
                            {"A visual journey through the projects I've built and contributed to. Click on any project to view it in detail."}
                        </p>
                    </div>
                </header>

                {revealed(&reveal, GALLERY_SECTION, gallery_body)}

                <Footer
                    name={content.profile.name.clone()}
                    on_navigate={props.on_navigate.clone()}
                    home_link={true}
                />
            </div>
            {modal}
        </>
    }
}

