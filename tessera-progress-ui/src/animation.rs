//! Timing curves for progress stroke transitions.
//!
//! ## Usage
//!
//! Configure how the progress stroke width eases toward a new target value.

use std::time::Duration;

fn cubic_bezier(t: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    let u = 1.0 - t;
    (u * u * u * a) + (3.0 * u * u * t * b) + (3.0 * u * t * t * c) + (t * t * t * d)
}

fn cubic_bezier_easing(progress: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let x = progress.clamp(0.0, 1.0);
    let mut lo = 0.0;
    let mut hi = 1.0;
    let mut t = x;

    for _ in 0..16 {
        let mid = (lo + hi) * 0.5;
        let mid_x = cubic_bezier(mid, 0.0, x1, x2, 1.0);
        if mid_x < x {
            lo = mid;
        } else {
            hi = mid;
        }
        t = mid;
    }

    cubic_bezier(t, 0.0, y1, y2, 1.0).clamp(0.0, 1.0)
}

pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Timing curve applied to progress stroke transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationCurve {
    /// Slow start and slow end.
    #[default]
    EaseInOut,
    /// Slow start, linear end.
    EaseIn,
    /// Linear start, slow end.
    EaseOut,
    /// Constant speed.
    Linear,
}

impl AnimationCurve {
    /// Maps a linear time fraction in `0.0..=1.0` onto the curve.
    pub fn evaluate(&self, fraction: f32) -> f32 {
        match self {
            Self::EaseInOut => cubic_bezier_easing(fraction, 0.42, 0.0, 0.58, 1.0),
            Self::EaseIn => cubic_bezier_easing(fraction, 0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => cubic_bezier_easing(fraction, 0.0, 0.0, 0.58, 1.0),
            Self::Linear => fraction.clamp(0.0, 1.0),
        }
    }
}

/// Describes how the progress stroke animates toward a new width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAnimation {
    /// Total transition duration.
    pub duration: Duration,
    /// Timing curve applied over the transition.
    pub curve: AnimationCurve,
}

impl Default for RingAnimation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            curve: AnimationCurve::EaseInOut,
        }
    }
}

impl RingAnimation {
    /// Creates an animation description with the provided duration and curve.
    pub fn new(duration: Duration, curve: AnimationCurve) -> Self {
        Self { duration, curve }
    }
}
