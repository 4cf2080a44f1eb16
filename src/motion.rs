//! Scroll progress signal and the three-breakpoint interpolator every
//! scroll-driven layer samples.

use thiserror::Error;

/// Normalized vertical scroll position, `0.0` at the top and `1.0` at the
/// bottom of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ScrollFraction(f64);

impl ScrollFraction {
    pub const TOP: Self = Self(0.0);

    /// Clamps into `[0, 1]`. NaN collapses to the top.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::TOP;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Derives the fraction from the viewport offset and document geometry.
    ///
    /// A document that is not taller than its viewport has no scrollable
    /// range and always reports `0.0`.
    pub fn from_viewport(scroll_offset: f64, document_height: f64, viewport_height: f64) -> Self {
        let scrollable = document_height - viewport_height;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return Self::TOP;
        }
        Self::new(scroll_offset / scrollable)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimelineError {
    #[error("breakpoint {index} is outside the scroll range: {value}")]
    OutOfRange { index: usize, value: f64 },
    #[error("breakpoint {index} ({value}) precedes the one before it")]
    Decreasing { index: usize, value: f64 },
}

/// Start, peak and end of an element's scroll window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints([f64; 3]);

impl Breakpoints {
    pub fn new(start: f64, peak: f64, end: f64) -> Result<Self, TimelineError> {
        let points = [start, peak, end];

        for (index, value) in points.iter().copied().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(TimelineError::OutOfRange { index, value });
            }
            if index > 0 && value < points[index - 1] {
                return Err(TimelineError::Decreasing { index, value });
            }
        }

        Ok(Self(points))
    }

    /// Maps `fraction` through `outputs`, clamping outside `[start, end]`.
    ///
    /// Zero-width segments step straight to their later value, so a window
    /// with `start == peak` already shows the peak output at `start`.
    pub fn interpolate(&self, fraction: ScrollFraction, outputs: [f64; 3]) -> f64 {
        let f = fraction.get();
        let [b0, b1, b2] = self.0;
        let [v0, v1, v2] = outputs;

        if f < b0 {
            v0
        } else if f <= b1 {
            lerp_segment(f, (b0, v0), (b1, v1))
        } else if f <= b2 {
            lerp_segment(f, (b1, v1), (b2, v2))
        } else {
            v2
        }
    }
}

fn lerp_segment(f: f64, (from_at, from): (f64, f64), (to_at, to): (f64, f64)) -> f64 {
    let width = to_at - from_at;
    if width <= 0.0 {
        return to;
    }
    let t = (f - from_at) / width;
    from * (1.0 - t) + to * t
}

/// Whether an element spanning `[top, bottom]` (viewport coordinates) has
/// entered a viewport of `viewport_height`, less `margin` px at each edge.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin
}

/// Document offset to scroll to so a section lands just below the fixed
/// header.
pub fn anchor_scroll_target(element_top: f64, scroll_offset: f64, header_offset: f64) -> f64 {
    (element_top + scroll_offset - header_offset).max(0.0)
}

/// Entrance delay for the `index`-th item of a staggered list.
pub fn stagger_delay_secs(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}
