mod contact;
mod sections;
mod sky;

use gloo_events::EventListener;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::motion::{anchor_scroll_target, ScrollFraction};

use self::contact::ContactSection;
use self::sections::{AboutSection, AffiliationsSection, ExperienceSection, Footer, Hero, ProjectsSection, SkillsSection};
use self::sky::{SolarSystem, StarBackground};

const HEADER_OFFSET_PX: f64 = 80.0;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#experience", "Experience"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

fn read_scroll_fraction() -> ScrollFraction {
    let Some(win) = window() else {
        return ScrollFraction::TOP;
    };

    let scroll_offset = win.scroll_y().unwrap_or(0.0);
    let viewport_height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let document_height = win
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);

    ScrollFraction::from_viewport(scroll_offset, document_height, viewport_height)
}

/// Current page scroll fraction, resampled on every scroll and resize.
#[hook]
fn use_scroll_fraction() -> ScrollFraction {
    let fraction = use_state_eq(read_scroll_fraction);

    {
        let setter = fraction.setter();
        use_effect_with((), move |_| {
            let listeners = window().map(|win| {
                let on_scroll = {
                    let setter = setter.clone();
                    EventListener::new(&win, "scroll", move |_| setter.set(read_scroll_fraction()))
                };
                let on_resize = {
                    let setter = setter.clone();
                    EventListener::new(&win, "resize", move |_| setter.set(read_scroll_fraction()))
                };
                setter.set(read_scroll_fraction());
                (on_scroll, on_resize)
            });

            move || drop(listeners)
        });
    }

    *fraction
}

/// Smooth-scrolls to `#id` so the section clears the fixed header.
pub(crate) fn scroll_to_anchor(href: &str) {
    let target_id = href.trim_start_matches('#');
    let Some(win) = window() else {
        return;
    };
    let Some(element) = win.document().and_then(|d| d.get_element_by_id(target_id)) else {
        return;
    };

    let element_top = element.get_bounding_client_rect().top();
    let scroll_offset = win.scroll_y().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_target(element_top, scroll_offset, HEADER_OFFSET_PX));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub(crate) fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        scroll_to_anchor(href);
    })
}

#[function_component(Navbar)]
fn navbar() -> Html {
    html! {
        <nav class="site-nav" aria-label="Sections">
            <a class="nav-brand" href="#top" onclick={anchor_click("#top")}>{"SD"}</a>
            <ul class="nav-links">
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <li key={*href}>
                        <a href={*href} onclick={anchor_click(*href)}>{*label}</a>
                    </li>
                }) }
            </ul>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let fraction = use_scroll_fraction();

    html! {
        <ContextProvider<ScrollFraction> context={fraction}>
            <div id="top" class="page-shell">
                <StarBackground />
                <SolarSystem />
                <Navbar />
                <main>
                    <Hero />
                    <AboutSection />
                    <ExperienceSection />
                    <SkillsSection />
                    <ProjectsSection />
                    <AffiliationsSection />
                    <ContactSection />
                </main>
                <Footer />
            </div>
        </ContextProvider<ScrollFraction>>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
