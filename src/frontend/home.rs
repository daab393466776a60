use yew::prelude::*;

use super::hooks::use_section_reveal;
use super::widgets::{revealed, Footer, IconGlyph, RouteLink, TagRow};
use super::Site;
use crate::content::SkillCategory;
use crate::reveal::HOME_SECTIONS;
use crate::route::Route;

fn skill_row(categories: &[SkillCategory<'_>]) -> Html {
    html! {
        <div class="skills-row">
            { for categories.iter().map(|(name, items)| html! {
                <div class="skill-card" key={*name}>
                    <h3>{*name}</h3>
                    <div class="skill-list">
                        { for items.iter().map(|item| html! { <span class="skill-pill">{item.clone()}</span> }) }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub site: Site,
    pub on_navigate: Callback<Route>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let reveal = use_section_reveal(&HOME_SECTIONS, props.site.config.clone());
    let content = &props.site.content;
    let profile = &content.profile;
    let (first_row, second_row) = content.skill_rows();

    let hero = html! {
        <header class="hero will-animate animate-fade-in-up">
            <div class="hero-copy">
                <p class="eyebrow">{format!("{} · {}", content.availability.status, content.availability.note)}</p>
                <h1>{profile.name.clone()}</h1>
                <p class="hero-role">{profile.role.clone()}</p>
                <p class="muted">{profile.location.clone()}</p>
                <div class="social-row">
                    { for content.social_links.iter().map(|link| html! {
                        <a
                            class="social-link"
                            href={link.url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label={link.name.clone()}
                        >
                            <IconGlyph icon={link.icon} />
                            <span>{link.name.clone()}</span>
                        </a>
                    }) }
                </div>
                <div class="hero-actions">
                    <a class="button" href={profile.resume.clone()} download="">{"Download resume"}</a>
                    <RouteLink
                        to={Route::Portfolio}
                        on_navigate={props.on_navigate.clone()}
                        class={classes!("button", "button-ghost")}
                    >
                        {"View portfolio"}
                    </RouteLink>
                </div>
            </div>
            <img class="hero-portrait" src={profile.image.clone()} alt={profile.name.clone()} />
        </header>
    };

    let highlights = html! {
        <div class="highlight-grid">
            { for content.highlights.iter().map(|highlight| html! {
                <div class="highlight-card">
                    <p class="highlight-value">{highlight.value.clone()}</p>
                    <p class="highlight-label">{highlight.label.clone()}</p>
                    <p class="muted">{highlight.detail.clone()}</p>
                </div>
            }) }
        </div>
    };

    let about = html! {
        <>
            <h2>{"About"}</h2>
            <p>{profile.objective.clone()}</p>
        </>
    };

    let projects = html! {
        <>
            <div class="section-header">
                <h2>{"Projects"}</h2>
                <span class="eyebrow">{format!("{} projects", content.projects.len())}</span>
            </div>
            <div class="project-grid">
                { for content.projects.iter().map(|project| html! {
                    <article class="project-card" key={project.title.clone()}>
                        <div class="project-card-header">
                            <h3>{project.title.clone()}</h3>
                            <span class="project-period">{project.period.clone()}</span>
                        </div>
                        <p>{project.description.clone()}</p>
                        <p class="muted">{project.tech.clone()}</p>
                        <TagRow tags={project.tags.clone()} />
                    </article>
                }) }
            </div>
        </>
    };

    let experience = html! {
        <>
            <h2>{"Experience"}</h2>
            <ol class="timeline">
                { for content.experience.iter().map(|entry| html! {
                    <li class="timeline-item">
                        <div class="timeline-header">
                            <h3>{format!("{} · {}", entry.role, entry.company)}</h3>
                            <span class="muted">{format!("{} · {}", entry.time, entry.location)}</span>
                        </div>
                        <p>{entry.summary.clone()}</p>
                        if !entry.highlights.is_empty() {
                            <ul class="timeline-highlights">
                                { for entry.highlights.iter().map(|item| html! { <li>{item.clone()}</li> }) }
                            </ul>
                        }
                    </li>
                }) }
            </ol>
        </>
    };

    let skills = html! {
        <>
            <h2>{"Skills"}</h2>
            {skill_row(&first_row)}
            {skill_row(&second_row)}
        </>
    };

    let education = html! {
        <>
            <h2>{"Education"}</h2>
            <div class="education-grid">
                { for content.education.iter().map(|entry| html! {
                    <div class="education-card">
                        <h3>{entry.degree.clone()}</h3>
                        <p>{entry.institution.clone()}</p>
                        <p class="muted">{entry.period.clone()}</p>
                        if !entry.details.is_empty() {
                            <ul>
                                { for entry.details.iter().map(|detail| html! { <li>{detail.clone()}</li> }) }
                            </ul>
                        }
                    </div>
                }) }
            </div>
            if !content.certificates.is_empty() {
                <>
                    <h3>{"Certificates"}</h3>
                    <ul class="inline-list">
                        { for content.certificates.iter().map(|cert| html! {
                            <li>{cert.name.clone()}<span class="muted">{format!(" · {}", cert.year)}</span></li>
                        }) }
                    </ul>
                </>
            }
            if !content.awards.is_empty() {
                <>
                    <h3>{"Awards"}</h3>
                    <ul class="inline-list">
                        { for content.awards.iter().map(|award| html! {
                            <li>
                                {award.title.clone()}
                                <span class="muted">{format!(" · {} · {}", award.organization, award.year)}</span>
                            </li>
                        }) }
                    </ul>
                </>
            }
        </>
    };

    let contact = html! {
        <>
            <h2>{"Contact"}</h2>
            <p>{"Open to conversations about infrastructure, platform engineering, and solution design."}</p>
            <ul class="contact-list">
                <li><a href={format!("mailto:{}", profile.email)}>{profile.email.clone()}</a></li>
                <li><a href={format!("tel:{}", profile.phone)}>{profile.phone.clone()}</a></li>
            </ul>
        </>
    };

    html! {
        <div class="page home-page">
            {hero}
            {revealed(&reveal, "highlights", highlights)}
            {revealed(&reveal, "about", about)}
            {revealed(&reveal, "projects", projects)}
            {revealed(&reveal, "experience", experience)}
            {revealed(&reveal, "skills", skills)}
            {revealed(&reveal, "education", education)}
            {revealed(&reveal, "contact", contact)}
            <Footer name={profile.name.clone()} on_navigate={props.on_navigate.clone()} />
        </div>
    }
}
