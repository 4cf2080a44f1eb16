//! Scroll-timed planets and the asteroid belt.
//!
//! Every body owns one [`BodyTimeline`]; the layer samples each of them
//! against the same [`ScrollFraction`] and nothing else.

use crate::motion::{Breakpoints, ScrollFraction, TimelineError};

/// Opacity and scale envelope shared by every planet: invisible at both
/// ends of its window, full size at the peak.
const PLANET_OPACITY: [f64; 3] = [0.0, 1.0, 0.0];
const PLANET_EDGE_SCALE: f64 = 0.8;

pub const PLANET_IDLE: IdleMotion = IdleMotion {
    duration_secs: 6.0,
    easing: "ease-in-out",
    bob_px: -10.0,
    tilt_deg: 2.0,
};

pub const ASTEROID_COUNT: usize = 20;
const ASTEROID_TILT_DEG: f64 = -10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Self::Mercury,
        Self::Venus,
        Self::Earth,
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// `(window, x in vw, y in vh, peak scale)`.
    fn placement(self) -> ([f64; 3], [f64; 3], [f64; 3], f64) {
        match self {
            Self::Mercury => ([0.0, 0.15, 0.25], [80.0, 70.0, 60.0], [80.0, 40.0, -10.0], 0.8),
            Self::Venus => ([0.1, 0.25, 0.4], [10.0, 20.0, 30.0], [90.0, 50.0, 10.0], 1.2),
            Self::Earth => ([0.2, 0.35, 0.5], [85.0, 75.0, 65.0], [90.0, 50.0, 10.0], 1.3),
            Self::Mars => ([0.35, 0.45, 0.6], [5.0, 15.0, 25.0], [90.0, 50.0, 20.0], 1.0),
            Self::Jupiter => ([0.5, 0.65, 0.8], [80.0, 70.0, 60.0], [90.0, 40.0, -10.0], 2.5),
            Self::Saturn => ([0.65, 0.78, 0.9], [10.0, 20.0, 30.0], [90.0, 50.0, 10.0], 2.2),
            Self::Uranus => ([0.75, 0.88, 0.98], [80.0, 75.0, 70.0], [90.0, 50.0, 20.0], 1.5),
            Self::Neptune => ([0.85, 0.95, 1.0], [20.0, 40.0, 50.0], [90.0, 50.0, 30.0], 1.5),
        }
    }
}

/// Perpetual scroll-independent loop layered inside a body's scroll
/// placement: a vertical bob and a slight rotation that return to rest at
/// the end of each cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleMotion {
    pub duration_secs: f64,
    /// CSS timing function.
    pub easing: &'static str,
    pub bob_px: f64,
    pub tilt_deg: f64,
}

impl IdleMotion {
    /// Custom properties consumed by the `body-idle` keyframes.
    pub fn css_vars(&self) -> String {
        format!(
            "--idle-duration: {:.2}s; --idle-easing: {}; --idle-bob: {:.1}px; --idle-tilt: {:.1}deg;",
            self.duration_secs,
            self.easing,
            self.bob_px,
            self.tilt_deg
        )
    }
}

/// Rocket in the hero panel. It rests 10 px above centre, so the bob
/// swings it from -10 px to +10 px and back.
pub const HERO_ROCKET_IDLE: IdleMotion = IdleMotion {
    duration_secs: 4.0,
    easing: "ease-in-out",
    bob_px: 20.0,
    tilt_deg: 0.0,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Dashed ring turning at a constant rate around the hero rocket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitRing {
    pub period_secs: f64,
    pub spin: Spin,
}

/// Outer ring first.
pub const HERO_RINGS: [OrbitRing; 2] = [
    OrbitRing {
        period_secs: 40.0,
        spin: Spin::Clockwise,
    },
    OrbitRing {
        period_secs: 30.0,
        spin: Spin::CounterClockwise,
    },
];

impl OrbitRing {
    /// Overrides for the linear `corona-spin` keyframes.
    pub fn style(&self) -> String {
        let direction = match self.spin {
            Spin::Clockwise => "normal",
            Spin::CounterClockwise => "reverse",
        };
        format!(
            "animation-duration: {:.2}s; animation-direction: {direction};",
            self.period_secs
        )
    }
}

/// Breakpoints plus one output triple per animated property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTimeline {
    pub breakpoints: Breakpoints,
    pub opacity: [f64; 3],
    pub x_vw: [f64; 3],
    pub y_vh: [f64; 3],
    pub scale: [f64; 3],
}

impl BodyTimeline {
    pub fn sample(&self, fraction: ScrollFraction) -> BodyFrame {
        BodyFrame {
            opacity: self.breakpoints.interpolate(fraction, self.opacity),
            x_vw: self.breakpoints.interpolate(fraction, self.x_vw),
            y_vh: self.breakpoints.interpolate(fraction, self.y_vh),
            scale: self.breakpoints.interpolate(fraction, self.scale),
        }
    }
}

/// Scroll-driven placement of one body at one scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFrame {
    pub opacity: f64,
    pub x_vw: f64,
    pub y_vh: f64,
    pub scale: f64,
}

impl BodyFrame {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style for the outer element. Idle motion lives on a child, so
    /// its translation adds to this one and its scale multiplies.
    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate3d({:.2}vw, {:.2}vh, 0) scale({:.3});",
            self.opacity, self.x_vw, self.y_vh, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBody {
    pub planet: Planet,
    pub timeline: BodyTimeline,
    pub idle: IdleMotion,
}

impl CelestialBody {
    pub fn new(planet: Planet) -> Result<Self, TimelineError> {
        let ([start, peak, end], x_vw, y_vh, scale) = planet.placement();

        Ok(Self {
            planet,
            timeline: BodyTimeline {
                breakpoints: Breakpoints::new(start, peak, end)?,
                opacity: PLANET_OPACITY,
                x_vw,
                y_vh,
                scale: [scale * PLANET_EDGE_SCALE, scale, scale * PLANET_EDGE_SCALE],
            },
            idle: PLANET_IDLE,
        })
    }

    pub fn frame(&self, fraction: ScrollFraction) -> BodyFrame {
        self.timeline.sample(fraction)
    }
}

/// Builds the full roster in render order.
pub fn solar_system() -> Result<Vec<CelestialBody>, TimelineError> {
    Planet::ALL.into_iter().map(CelestialBody::new).collect()
}

/// Band of debris that drifts up through the middle of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct AsteroidBelt {
    pub timeline: BodyTimeline,
    pub rocks: Vec<Asteroid>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    pub scale: f64,
    pub dx_px: f64,
    pub dy_px: f64,
}

impl AsteroidBelt {
    pub fn generate(rng: &mut fastrand::Rng) -> Result<Self, TimelineError> {
        let rocks = (0..ASTEROID_COUNT)
            .map(|_| Asteroid {
                scale: rng.f64() + 0.5,
                dx_px: rng.f64() * 20.0,
                dy_px: rng.f64() * 20.0,
            })
            .collect();

        Ok(Self {
            timeline: BodyTimeline {
                breakpoints: Breakpoints::new(0.45, 0.55, 0.65)?,
                opacity: [0.0, 1.0, 0.0],
                x_vw: [0.0; 3],
                y_vh: [20.0, 0.0, -20.0],
                scale: [1.0; 3],
            },
            rocks,
        })
    }

    pub fn style(&self, fraction: ScrollFraction) -> String {
        let frame = self.timeline.sample(fraction);
        format!(
            "opacity: {:.3}; transform: translateY({:.2}vh) rotate({ASTEROID_TILT_DEG}deg);",
            frame.opacity, frame.y_vh
        )
    }
}

impl Asteroid {
    pub fn style(&self) -> String {
        format!(
            "transform: scale({:.3}) translate({:.1}px, {:.1}px);",
            self.scale, self.dx_px, self.dy_px
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: f64) -> ScrollFraction {
        ScrollFraction::new(value)
    }

    #[test]
    fn roster_builds_every_planet_in_order() {
        let bodies = solar_system().expect("planet windows are valid");
        let names: Vec<_> = bodies.iter().map(|body| body.planet.name()).collect();

        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn earth_peaks_fully_visible_at_full_scale() {
        let earth = CelestialBody::new(Planet::Earth).expect("valid window");
        let frame = earth.frame(at(0.35));

        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.x_vw, 75.0);
        assert_eq!(frame.y_vh, 50.0);
        assert_eq!(frame.scale, 1.3);
    }

    #[test]
    fn bodies_rest_in_entry_state_before_their_window() {
        let jupiter = CelestialBody::new(Planet::Jupiter).expect("valid window");
        let frame = jupiter.frame(ScrollFraction::TOP);

        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.x_vw, 80.0);
        assert_eq!(frame.y_vh, 90.0);
        assert_eq!(frame.scale, 2.5 * PLANET_EDGE_SCALE);
        assert!(!frame.is_visible());
    }

    #[test]
    fn windows_overlap_so_several_bodies_share_the_screen() {
        let bodies = solar_system().expect("planet windows are valid");
        let visible: Vec<_> = bodies
            .iter()
            .filter(|body| body.frame(at(0.22)).is_visible())
            .map(|body| body.planet)
            .collect();

        assert_eq!(visible, [Planet::Mercury, Planet::Venus, Planet::Earth]);
    }

    #[test]
    fn neptune_holds_peak_exit_values_at_bottom() {
        let neptune = CelestialBody::new(Planet::Neptune).expect("valid window");
        let frame = neptune.frame(ScrollFraction::new(1.0));

        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.x_vw, 50.0);
        assert_eq!(frame.y_vh, 30.0);
    }

    #[test]
    fn frame_style_combines_translation_and_scale() {
        let frame = BodyFrame {
            opacity: 0.5,
            x_vw: 12.0,
            y_vh: -4.5,
            scale: 1.25,
        };

        assert_eq!(
            frame.style(),
            "opacity: 0.500; transform: translate3d(12.00vw, -4.50vh, 0) scale(1.250);"
        );
    }

    #[test]
    fn idle_motion_exposes_loop_parameters() {
        assert_eq!(
            PLANET_IDLE.css_vars(),
            "--idle-duration: 6.00s; --idle-easing: ease-in-out; --idle-bob: -10.0px; --idle-tilt: 2.0deg;"
        );
    }

    #[test]
    fn asteroid_belt_draws_bounded_rocks_once() {
        let mut rng = fastrand::Rng::with_seed(7);
        let belt = AsteroidBelt::generate(&mut rng).expect("valid belt window");

        assert_eq!(belt.rocks.len(), ASTEROID_COUNT);
        for rock in &belt.rocks {
            assert!((0.5..1.5).contains(&rock.scale));
            assert!((0.0..20.0).contains(&rock.dx_px));
            assert!((0.0..20.0).contains(&rock.dy_px));
        }

        let peak = belt.timeline.sample(at(0.55));
        assert_eq!(peak.opacity, 1.0);
        assert_eq!(peak.y_vh, 0.0);
        assert!((belt.timeline.sample(at(0.5)).y_vh - 10.0).abs() < 1e-9);
    }

    #[test]
    fn hero_rings_counter_rotate_around_a_bobbing_rocket() {
        let [outer, inner] = HERO_RINGS;
        assert_ne!(outer.spin, inner.spin);
        assert_eq!(
            outer.style(),
            "animation-duration: 40.00s; animation-direction: normal;"
        );
        assert_eq!(
            inner.style(),
            "animation-duration: 30.00s; animation-direction: reverse;"
        );

        assert_eq!(
            HERO_ROCKET_IDLE.css_vars(),
            "--idle-duration: 4.00s; --idle-easing: ease-in-out; --idle-bob: 20.0px; --idle-tilt: 0.0deg;"
        );
    }
}
