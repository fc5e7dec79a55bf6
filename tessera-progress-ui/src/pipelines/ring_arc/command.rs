use tessera_ui::{Color, DrawCommand};

/// Stroke cap used for arc ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingArcCap {
    /// Rounded stroke ends.
    Round,
    /// Flat stroke ends.
    Butt,
}

/// One stroked arc within a ring.
///
/// The arc centerline radius is a third of the shorter edge of the ring's
/// bounding box, leaving room for wide strokes on either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
    /// Stroke cap applied to arc ends.
    pub cap: RingArcCap,
}

/// Draw command for a whole progress ring.
///
/// A ring is at most three concentric arcs sharing one bounding box: the
/// full-circle track, the progress arc, and an optional inner arc. The
/// pipeline expands each present arc into its own shader instance, so one
/// command per ring keeps the fragment metadata small.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingArcCommand {
    track: ArcSpec,
    progress: ArcSpec,
    inner: Option<ArcSpec>,
}

impl RingArcCommand {
    /// Creates a ring command from its strokes, back to front.
    pub fn new(track: ArcSpec, progress: ArcSpec, inner: Option<ArcSpec>) -> Self {
        Self {
            track,
            progress,
            inner,
        }
    }

    /// The present strokes in paint order: track, progress, then inner.
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSpec> {
        [Some(&self.track), Some(&self.progress), self.inner.as_ref()]
            .into_iter()
            .flatten()
    }

    /// Number of shader instances this command expands into.
    pub fn arc_count(&self) -> usize {
        if self.inner.is_some() { 3 } else { 2 }
    }
}

impl DrawCommand for RingArcCommand {
    fn apply_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        for arc in [Some(&mut self.track), Some(&mut self.progress), self.inner.as_mut()]
            .into_iter()
            .flatten()
        {
            arc.color = arc.color.with_alpha(arc.color.a * opacity);
        }
    }
}
