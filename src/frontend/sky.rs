use yew::prelude::*;

use crate::celestial::{solar_system, AsteroidBelt, CelestialBody, Planet};
use crate::motion::ScrollFraction;
use crate::starfield::Starfield;
use crate::telemetry::{log_event, LogLevel};

#[function_component(StarBackground)]
pub fn star_background() -> Html {
    let field = use_state(|| Starfield::generate(&mut fastrand::Rng::new()));

    html! {
        <div class="star-layer" aria-hidden="true">
            <div class="star-gradient" />
            { for field.stars().iter().enumerate().map(|(index, star)| html! {
                <span key={index} class="star" style={star.style()} />
            }) }
            <div class="nebula nebula-purple" />
            <div class="nebula nebula-cyan" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BodyProps {
    body: CelestialBody,
    fraction: ScrollFraction,
}

#[function_component(Body)]
fn body(props: &BodyProps) -> Html {
    let frame = props.body.frame(props.fraction);
    let planet = props.body.planet;

    html! {
        <div
            class={classes!("celestial-body", (!frame.is_visible()).then_some("is-hidden"))}
            style={frame.style()}
            data-body={planet.name()}
        >
            <div class="body-idle" style={props.body.idle.css_vars()}>
                { planet_art(planet) }
            </div>
        </div>
    }
}

#[function_component(SolarSystem)]
pub fn solar_system_layer() -> Html {
    let fraction = use_context::<ScrollFraction>().unwrap_or_default();
    let bodies = use_state(|| {
        solar_system().unwrap_or_else(|error| {
            log_event(
                LogLevel::Error,
                "celestial_roster_invalid",
                serde_json::json!({ "detail": error.to_string() }),
            );
            Vec::new()
        })
    });
    let belt = use_state(|| AsteroidBelt::generate(&mut fastrand::Rng::new()).ok());

    html! {
        <div class="sky-layer" aria-hidden="true">
            <Sun />
            { for bodies.iter().map(|body| html! {
                <Body key={body.planet.name()} body={*body} fraction={fraction} />
            }) }
            if let Some(belt) = &*belt {
                <div class="asteroid-belt" style={belt.style(fraction)}>
                    { for belt.rocks.iter().enumerate().map(|(index, rock)| html! {
                        <span key={index} class="asteroid" style={rock.style()} />
                    }) }
                </div>
            }
            { shared_gradients() }
        </div>
    }
}

#[function_component(Sun)]
fn sun() -> Html {
    html! {
        <div class="sun">
            <div class="sun-corona">
                <svg viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r="48" fill="url(#sunGradient)" fill-opacity="0.2" />
                    <path d="M50 0 L55 10 L50 20 L45 10 Z" fill="#FDB813" />
                    <path d="M100 50 L90 55 L80 50 L90 45 Z" fill="#FDB813" />
                    <path d="M50 100 L45 90 L50 80 L55 90 Z" fill="#FDB813" />
                    <path d="M0 50 L10 45 L20 50 L10 55 Z" fill="#FDB813" />
                    <path d="M85 15 L75 22 L78 30 Z" fill="#FDB813" />
                    <path d="M85 85 L78 70 L70 78 Z" fill="#FDB813" />
                    <path d="M15 85 L25 78 L22 70 Z" fill="#FDB813" />
                    <path d="M15 15 L22 25 L30 22 Z" fill="#FDB813" />
                </svg>
            </div>
            <div class="sun-core">
                <svg viewBox="0 0 100 100">
                    <defs>
                        <radialGradient id="sunCore" cx="50%" cy="50%" r="50%" fx="30%" fy="30%">
                            <stop offset="0%" stop-color="#FFF7E6" />
                            <stop offset="20%" stop-color="#FFD700" />
                            <stop offset="90%" stop-color="#FF8C00" />
                            <stop offset="100%" stop-color="#FF4500" />
                        </radialGradient>
                    </defs>
                    <circle cx="50" cy="50" r="45" fill="url(#sunCore)" />
                    <circle class="plasma plasma-a" cx="30" cy="40" r="5" fill="#FFD700" opacity="0.5" />
                    <circle class="plasma plasma-b" cx="70" cy="60" r="8" fill="#FF4500" opacity="0.3" />
                </svg>
            </div>
        </div>
    }
}

fn planet_art(planet: Planet) -> Html {
    match planet {
        Planet::Mercury => html! {
            <svg class="planet planet-sm" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="45" fill="#A5A5A5" />
                <circle cx="50" cy="50" r="45" fill="url(#shadowOverlay)" />
                <circle cx="30" cy="40" r="5" fill="#808080" opacity="0.6" />
                <circle cx="60" cy="70" r="8" fill="#808080" opacity="0.6" />
                <circle cx="70" cy="30" r="4" fill="#808080" opacity="0.6" />
            </svg>
        },
        Planet::Venus => html! {
            <svg class="planet planet-md" viewBox="0 0 100 100">
                <defs>
                    <linearGradient id="venusGrad" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#FFD180" />
                        <stop offset="100%" stop-color="#E65100" />
                    </linearGradient>
                </defs>
                <circle cx="50" cy="50" r="48" fill="url(#venusGrad)" />
                <path d="M10 50 Q 50 20 90 50" fill="none" stroke="#FFAB40" stroke-width="5" opacity="0.5" />
                <path d="M10 70 Q 50 40 90 70" fill="none" stroke="#FFAB40" stroke-width="5" opacity="0.3" />
                <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
            </svg>
        },
        Planet::Earth => html! {
            <div class="earth">
                <div class="moon-orbit">
                    <div class="moon" />
                </div>
                <svg class="planet planet-fill" viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r="48" fill="#2979FF" />
                    <path d="M30 30 Q 50 10 70 30 T 90 50 T 50 80 T 20 60 Z" fill="#4CAF50" opacity="0.9" />
                    <path d="M20 50 Q 10 40 15 30" fill="#4CAF50" opacity="0.8" />
                    <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
                    <circle cx="50" cy="50" r="48" stroke="#80D8FF" stroke-width="2" fill="none" opacity="0.5" />
                </svg>
            </div>
        },
        Planet::Mars => html! {
            <svg class="planet planet-sm" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="48" fill="#D32F2F" />
                <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
                <path d="M30 15 Q 50 5 70 15" stroke="white" stroke-width="6" stroke-linecap="round" opacity="0.8" />
                <circle cx="40" cy="60" r="6" fill="#B71C1C" opacity="0.6" />
            </svg>
        },
        Planet::Jupiter => html! {
            <svg class="planet planet-lg" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="48" fill="#E0C097" />
                <rect x="2" y="25" width="96" height="10" fill="#8D6E63" opacity="0.6" rx="5" />
                <rect x="2" y="45" width="96" height="15" fill="#A1887F" opacity="0.5" rx="5" />
                <rect x="2" y="70" width="96" height="8" fill="#8D6E63" opacity="0.6" rx="5" />
                <ellipse cx="70" cy="55" rx="10" ry="6" fill="#BF360C" opacity="0.8" />
                <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
            </svg>
        },
        Planet::Saturn => html! {
            <div class="saturn">
                <svg class="planet planet-md saturn-body" viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r="48" fill="#FFE082" />
                    <rect x="2" y="30" width="96" height="5" fill="#FFCA28" opacity="0.4" />
                    <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
                </svg>
                <div class="saturn-ring saturn-ring-back" />
                <div class="saturn-ring saturn-ring-front" />
            </div>
        },
        Planet::Uranus => html! {
            <svg class="planet planet-md uranus" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="48" fill="#00E5FF" opacity="0.8" />
                <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
                <path d="M50 0 Q 80 50 50 100" fill="none" stroke="#E0F7FA" stroke-width="2" opacity="0.6" />
            </svg>
        },
        Planet::Neptune => html! {
            <svg class="planet planet-md" viewBox="0 0 100 100">
                <defs>
                    <radialGradient id="neptuneGrad" cx="50%" cy="50%" r="50%">
                        <stop offset="0%" stop-color="#2979FF" />
                        <stop offset="100%" stop-color="#1A237E" />
                    </radialGradient>
                </defs>
                <circle cx="50" cy="50" r="48" fill="url(#neptuneGrad)" />
                <path d="M10 30 Q 50 40 90 20" fill="none" stroke="#82B1FF" stroke-width="3" opacity="0.3" />
                <circle cx="50" cy="50" r="48" fill="url(#shadowOverlay)" />
            </svg>
        },
    }
}

fn shared_gradients() -> Html {
    html! {
        <svg class="svg-defs">
            <defs>
                <radialGradient id="shadowOverlay" cx="30%" cy="30%" r="70%">
                    <stop offset="0%" stop-color="white" stop-opacity="0.1" />
                    <stop offset="60%" stop-color="transparent" stop-opacity="0" />
                    <stop offset="90%" stop-color="black" stop-opacity="0.5" />
                </radialGradient>
                <linearGradient id="sunGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="#FFF176" />
                    <stop offset="100%" stop-color="#FF6F00" />
                </linearGradient>
            </defs>
        </svg>
    }
}
