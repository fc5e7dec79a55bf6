//! Pure arc geometry for circular progress rings.
//!
//! ## Usage
//!
//! Resolve stroke widths and arc angles from a progress value before
//! rendering. All angles are in degrees, with 0° at 3 o'clock and positive
//! sweeps running clockwise, matching the arc draw command convention.

use tessera_ui::{Color, Dp};

/// Preset ring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingSize {
    /// Compact ring for dense layouts.
    Small,
    /// Default, prominent ring.
    #[default]
    Large,
}

impl RingSize {
    /// Default track stroke width for this preset.
    pub const fn track_width(self) -> Dp {
        match self {
            Self::Small => Dp(15.0),
            Self::Large => Dp(45.0),
        }
    }

    /// Default inner stroke width for this preset.
    pub const fn inner_width(self) -> Dp {
        match self {
            Self::Small => Dp(2.5),
            Self::Large => Dp(5.0),
        }
    }

    /// Default ring bounding box edge when the parent does not impose a size.
    ///
    /// The arc centerline radius is a third of the shorter box edge, so a
    /// large ring gets a 60dp radius and a small ring a 30dp radius.
    pub const fn extent(self) -> Dp {
        match self {
            Self::Small => Dp(90.0),
            Self::Large => Dp(180.0),
        }
    }
}

/// Angle at the top of the ring in the draw command convention.
pub(crate) const TOP_ANGLE_DEGREES: f32 = 270.0;

/// A single arc stroke of the resolved ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: Dp,
    /// Start angle in degrees.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, clockwise.
    pub sweep_angle_degrees: f32,
    /// Whether arc ends are rounded.
    pub rounded: bool,
}

/// Everything the renderer needs for one frame of a ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    /// Full-circle background track.
    pub track: ArcStroke,
    /// Progress arc on top of the track.
    pub progress: ArcStroke,
    /// Optional thin arc drawn over the progress arc.
    pub inner: Option<ArcStroke>,
}

/// Inputs for [`resolve_frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Progress value, nominally in `0.0..=1.0`.
    pub progress: f32,
    /// Accumulated spinner rotation in degrees.
    pub rotation_degrees: f32,
    /// Whether the progress arc sweeps clockwise.
    pub clockwise: bool,
    /// Whether progress and inner arc ends are rounded.
    pub rounded: bool,
    /// Resolved track stroke width.
    pub track_width: Dp,
    /// Resolved progress stroke width.
    pub progress_width: Dp,
    /// Resolved inner stroke width.
    pub inner_width: Dp,
    /// Track color.
    pub track_color: Color,
    /// Progress arc color.
    pub progress_color: Color,
    /// Inner arc color; `None` omits the inner arc entirely.
    pub inner_color: Option<Color>,
}

/// Resolves the track stroke width from an explicit override or the preset.
pub fn resolve_track_width(width_override: Option<Dp>, size: RingSize) -> Dp {
    width_override.unwrap_or_else(|| size.track_width())
}

/// Resolves the inner stroke width from an explicit override or the preset.
pub fn resolve_inner_width(width_override: Option<Dp>, size: RingSize) -> Dp {
    width_override.unwrap_or_else(|| size.inner_width())
}

/// Target width of the progress stroke for the given progress value.
///
/// While progress is below `growth_threshold` the stroke grows linearly with
/// the progress/threshold ratio; at or beyond the threshold it matches the
/// track width. Without a threshold the stroke always matches the track.
pub fn progress_stroke_width(
    track_width: Dp,
    progress: f32,
    growth_threshold: Option<f32>,
) -> Dp {
    let Some(threshold) = growth_threshold else {
        return track_width;
    };
    if threshold <= 0.0 {
        return track_width;
    }
    let ratio = (progress / threshold).clamp(0.0, 1.0);
    Dp(track_width.0 * ratio as f64)
}

/// Start and sweep angles for the progress arc.
///
/// The arc is anchored at the top of the ring, offset by the accumulated
/// rotation. A counter-clockwise arc is expressed as the equivalent clockwise
/// arc that ends at the anchor.
pub fn arc_angles(progress: f32, clockwise: bool, rotation_degrees: f32) -> (f32, f32) {
    let sweep = progress * 360.0;
    let anchor = TOP_ANGLE_DEGREES + rotation_degrees;
    if clockwise {
        (anchor, sweep)
    } else {
        (anchor - sweep, sweep)
    }
}

/// Composes the full frame for one build of the ring.
pub fn resolve_frame(input: &FrameInput) -> RingFrame {
    let (start, sweep) = arc_angles(input.progress, input.clockwise, input.rotation_degrees);

    let track = ArcStroke {
        color: input.track_color,
        width: input.track_width,
        start_angle_degrees: 0.0,
        sweep_angle_degrees: 360.0,
        rounded: false,
    };
    let progress = ArcStroke {
        color: input.progress_color,
        width: input.progress_width,
        start_angle_degrees: start,
        sweep_angle_degrees: sweep,
        rounded: input.rounded,
    };
    let inner = input.inner_color.map(|color| ArcStroke {
        color,
        width: input.inner_width,
        start_angle_degrees: start,
        sweep_angle_degrees: sweep,
        rounded: input.rounded,
    });

    RingFrame {
        track,
        progress,
        inner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_override_beats_preset() {
        assert_eq!(
            resolve_track_width(Some(Dp(20.0)), RingSize::Large),
            Dp(20.0)
        );
        assert_eq!(resolve_track_width(None, RingSize::Large), Dp(45.0));
        assert_eq!(resolve_track_width(None, RingSize::Small), Dp(15.0));
        assert_eq!(resolve_inner_width(Some(Dp(10.0)), RingSize::Small), Dp(10.0));
        assert_eq!(resolve_inner_width(None, RingSize::Large), Dp(5.0));
        assert_eq!(resolve_inner_width(None, RingSize::Small), Dp(2.5));
    }

    #[test]
    fn test_stroke_width_grows_monotonically_below_threshold() {
        let track = Dp(40.0);
        let mut previous = progress_stroke_width(track, 0.0, Some(0.5)).0;
        for step in 1..=20 {
            let progress = step as f32 * 0.05;
            let width = progress_stroke_width(track, progress, Some(0.5)).0;
            assert!(width >= previous, "width shrank at progress {progress}");
            previous = width;
        }
    }

    #[test]
    fn test_stroke_width_saturates_at_track_width() {
        let track = Dp(40.0);
        assert_eq!(progress_stroke_width(track, 0.5, Some(0.5)), track);
        assert_eq!(progress_stroke_width(track, 0.9, Some(0.5)), track);
        assert_eq!(progress_stroke_width(track, 2.0, Some(0.5)), track);
    }

    #[test]
    fn test_stroke_width_is_proportional_below_threshold() {
        let width = progress_stroke_width(Dp(25.0), 0.25, Some(0.5));
        assert!((width.0 - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_threshold_disables_growth() {
        let track = Dp(30.0);
        for progress in [0.0, 0.001, 0.5, 1.0] {
            assert_eq!(progress_stroke_width(track, progress, None), track);
        }
    }

    #[test]
    fn test_negative_progress_yields_zero_width() {
        assert_eq!(progress_stroke_width(Dp(40.0), -0.5, Some(0.5)), Dp(0.0));
    }

    #[test]
    fn test_clockwise_arc_starts_at_top() {
        let (start, sweep) = arc_angles(0.25, true, 0.0);
        assert_eq!(start, 270.0);
        assert_eq!(sweep, 90.0);
    }

    #[test]
    fn test_counter_clockwise_arc_ends_at_top() {
        let (start, sweep) = arc_angles(0.25, false, 0.0);
        assert_eq!(start + sweep, 270.0);
        assert_eq!(sweep, 90.0);
    }

    #[test]
    fn test_rotation_offsets_the_anchor() {
        let (start, _) = arc_angles(0.5, true, 45.0);
        assert_eq!(start, 315.0);
        let (start, sweep) = arc_angles(0.5, false, -45.0);
        assert_eq!(start + sweep, 225.0);
    }

    #[test]
    fn test_frame_omits_inner_arc_without_color() {
        let input = FrameInput {
            progress: 0.3,
            rotation_degrees: 0.0,
            clockwise: true,
            rounded: true,
            track_width: Dp(45.0),
            progress_width: Dp(45.0),
            inner_width: Dp(5.0),
            track_color: Color::BLACK,
            progress_color: Color::GREEN,
            inner_color: None,
        };
        let frame = resolve_frame(&input);
        assert!(frame.inner.is_none());
        assert_eq!(frame.track.sweep_angle_degrees, 360.0);
        assert!(!frame.track.rounded);
        assert_eq!(frame.progress.sweep_angle_degrees, 108.0);
    }

    #[test]
    fn test_frame_inner_arc_follows_progress_arc() {
        let input = FrameInput {
            progress: 0.5,
            rotation_degrees: 30.0,
            clockwise: true,
            rounded: true,
            track_width: Dp(45.0),
            progress_width: Dp(20.0),
            inner_width: Dp(5.0),
            track_color: Color::BLACK,
            progress_color: Color::GREEN,
            inner_color: Some(Color::BLACK.with_alpha(0.2)),
        };
        let frame = resolve_frame(&input);
        let inner = frame.inner.expect("inner arc expected");
        assert_eq!(
            inner.start_angle_degrees,
            frame.progress.start_angle_degrees
        );
        assert_eq!(
            inner.sweep_angle_degrees,
            frame.progress.sweep_angle_degrees
        );
        assert_eq!(inner.width, Dp(5.0));
    }
}
