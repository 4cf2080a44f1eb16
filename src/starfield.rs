//! Twinkling backdrop, drawn once per mount.

pub const STAR_COUNT: usize = 70;
pub const STAR_SIZE_PX: (f64, f64) = (1.0, 3.0);
pub const TWINKLE_SECS: (f64, f64) = (2.0, 5.0);

/// Dim, bright, dim.
pub const TWINKLE_OPACITY: [f64; 3] = [0.2, 1.0, 0.2];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPoint {
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_px: f64,
    pub twinkle_secs: f64,
}

impl StarPoint {
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.2}px; height: {:.2}px; animation-duration: {:.2}s; \
             --twinkle-dim: {}; --twinkle-peak: {};",
            self.x_pct,
            self.y_pct,
            self.size_px,
            self.size_px,
            self.twinkle_secs,
            TWINKLE_OPACITY[0],
            TWINKLE_OPACITY[1]
        )
    }
}

/// Immutable set of stars. Generate it once and hand out references; there
/// is no way to reshuffle an existing field.
#[derive(Clone, Debug, PartialEq)]
pub struct Starfield {
    stars: Vec<StarPoint>,
}

impl Starfield {
    pub fn generate(rng: &mut fastrand::Rng) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| StarPoint {
                x_pct: rng.f64() * 100.0,
                y_pct: rng.f64() * 100.0,
                size_px: uniform(rng, STAR_SIZE_PX),
                twinkle_secs: uniform(rng, TWINKLE_SECS),
            })
            .collect();

        Self { stars }
    }

    pub fn stars(&self) -> &[StarPoint] {
        &self.stars
    }
}

fn uniform(rng: &mut fastrand::Rng, (low, high): (f64, f64)) -> f64 {
    low + rng.f64() * (high - low)
}
