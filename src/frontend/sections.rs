use web_sys::{window, Element};
use yew::prelude::*;

use crate::celestial::{HERO_RINGS, HERO_ROCKET_IDLE};
use crate::content::{AFFILIATIONS, EDUCATION, EXPERIENCE, INTERESTS, PERSONAL_INFO, PROJECTS, SKILLS};
use crate::motion::{is_in_view, stagger_delay_secs, ScrollFraction};

use super::anchor_click;

const REVEAL_STAGGER_SECS: f64 = 0.1;
const REVEAL_MARGIN_PX: f64 = 100.0;
const HERO_STAGGER_SECS: f64 = 0.2;

#[derive(Properties, PartialEq)]
pub(crate) struct ExternalLinkProps {
    pub href: AttrValue,
    pub label: AttrValue,
}

#[function_component(ExternalLink)]
pub(crate) fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a class="link" href={props.href.clone()} target="_blank" rel="noopener noreferrer">
            {props.label.clone()}
            <span class="external-mark" aria-hidden="true">{"↗"}</span>
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    index: usize,
    #[prop_or_default]
    class: Classes,
    children: Children,
}

/// Fades its children in the first time they scroll into view and stays
/// revealed afterwards.
#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let fraction = use_context::<ScrollFraction>().unwrap_or_default();
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with(fraction, move |_| {
            if *revealed {
                return;
            }
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let viewport_height = window()
                .and_then(|win| win.inner_height().ok())
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            let rect = element.get_bounding_client_rect();
            if is_in_view(rect.top(), rect.bottom(), viewport_height, REVEAL_MARGIN_PX) {
                revealed.set(true);
            }
        });
    }

    let style = format!(
        "transition-delay: {:.2}s;",
        stagger_delay_secs(props.index, REVEAL_STAGGER_SECS)
    );

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*revealed).then_some("is-revealed"))}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

fn hero_delay(index: usize) -> String {
    format!("animation-delay: {:.1}s;", stagger_delay_secs(index, HERO_STAGGER_SECS))
}

#[function_component(HeroVisual)]
fn hero_visual() -> Html {
    let [outer, inner] = HERO_RINGS;

    html! {
        <div class="hero-visual slide-in" aria-hidden="true">
            <div class="orbit-ring orbit-ring-outer" style={outer.style()} />
            <div class="orbit-ring orbit-ring-inner" style={inner.style()} />
            <div class="hero-rocket body-idle" style={HERO_ROCKET_IDLE.css_vars()}>
                <svg
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="1.5"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" />
                    <path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" />
                    <path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0" />
                    <path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5" />
                </svg>
            </div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero" aria-labelledby="hero-heading">
            <div class="hero-grid">
                <div class="hero-copy">
                    <p class="hero-kicker fade-up" style={hero_delay(0)}>{"Welcome to my universe"}</p>
                    <h1 id="hero-heading" class="hero-title fade-up" style={hero_delay(1)}>
                        <span class="hero-first">{PERSONAL_INFO.first_name()}</span>
                        <span class="hero-rest">{PERSONAL_INFO.rest_of_name()}</span>
                    </h1>
                    <p class="hero-tagline fade-up" style={hero_delay(2)}>{PERSONAL_INFO.tagline}</p>
                    <div class="hero-actions fade-up" style={hero_delay(3)}>
                        <a class="button button-primary" href="#contact" onclick={anchor_click("#contact")}>
                            {"Contact Mission Control"}
                        </a>
                        <a class="button button-ghost" href="#projects" onclick={anchor_click("#projects")}>
                            {"View Missions"}
                        </a>
                    </div>
                </div>
                <HeroVisual />
            </div>
            <a class="scroll-cue" href="#about" aria-label="Scroll to about" onclick={anchor_click("#about")}>
                {"⌄"}
            </a>
        </section>
    }
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section-block" aria-labelledby="about-heading">
            <h2 id="about-heading" class="section-title">{"About Me"}</h2>
            <div class="about-grid">
                <div class="avatar-frame">
                    <img class="avatar" src={PERSONAL_INFO.avatar} alt={PERSONAL_INFO.name} loading="lazy" />
                </div>
                <div class="about-copy">
                    <p>{PERSONAL_INFO.summary}</p>
                    <h3 class="subheading">{"Education"}</h3>
                    <ul class="row-list">
                        { for EDUCATION.iter().map(|entry| html! {
                            <li key={entry.degree} class="education-row">
                                <span class="education-degree">{entry.degree}</span>
                                <span class="muted">{format!("{} · {}", entry.institution, entry.year)}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    html! {
        <section id="experience" class="section-block" aria-labelledby="experience-heading">
            <h2 id="experience-heading" class="section-title">{"Mission Log"}</h2>
            <div class="timeline">
                { for EXPERIENCE.iter().enumerate().map(|(index, entry)| html! {
                    <Reveal key={entry.id} index={index} class={classes!("timeline-card")}>
                        <header class="card-header">
                            <h3>{entry.role}</h3>
                            <span class="muted">{entry.period}</span>
                        </header>
                        <p class="card-company">{entry.company}</p>
                        <ul class="achievement-list">
                            { for entry.achievements.iter().map(|line| html! { <li>{*line}</li> }) }
                        </ul>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    html! {
        <section id="skills" class="section-block" aria-labelledby="skills-heading">
            <h2 id="skills-heading" class="section-title">{"Technical Arsenal"}</h2>
            <div class="card-grid">
                { for SKILLS.iter().map(|category| html! {
                    <div key={category.title} class="card">
                        <h3>{category.title}</h3>
                        <ul class="chip-list">
                            { for category.skills.iter().map(|skill| html! {
                                <li class="chip">{*skill}</li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id="projects" class="section-block" aria-labelledby="projects-heading">
            <h2 id="projects-heading" class="section-title">{"Missions & Projects"}</h2>
            <div class="card-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <article key={project.id} class="card project-card">
                        <p class="card-category">{project.category}</p>
                        <h3>{project.title}</h3>
                        <p>{project.description}</p>
                        <ul class="chip-list">
                            { for project.tools.iter().map(|tool| html! {
                                <li class="chip chip-outline">{*tool}</li>
                            }) }
                        </ul>
                    </article>
                }) }
            </div>
            <p class="section-footnote">
                <ExternalLink href={PERSONAL_INFO.github} label="More on GitHub" />
            </p>
        </section>
    }
}

#[function_component(AffiliationsSection)]
pub fn affiliations_section() -> Html {
    html! {
        <section id="affiliations" class="section-block" aria-labelledby="affiliations-heading">
            <h2 id="affiliations-heading" class="section-title">{"Affiliations & Interests"}</h2>
            <div class="card-grid">
                { for AFFILIATIONS.iter().map(|affiliation| html! {
                    <div key={affiliation.id} class="card affiliation-card">
                        <span class="icon" aria-hidden="true">{affiliation.icon.glyph()}</span>
                        <div>
                            <h3>{affiliation.organization}</h3>
                            <p class="muted">{affiliation.role}</p>
                        </div>
                    </div>
                }) }
            </div>
            <h3 class="subheading">{"Beyond the Cockpit"}</h3>
            <ul class="interest-list">
                { for INTERESTS.iter().map(|interest| html! {
                    <li key={interest.name} class="interest">
                        <span class="icon" aria-hidden="true">{interest.icon.glyph()}</span>
                        {interest.name}
                    </li>
                }) }
            </ul>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <p class="muted">{format!("© {year} {}. All rights reserved.", PERSONAL_INFO.name)}</p>
        </footer>
    }
}
