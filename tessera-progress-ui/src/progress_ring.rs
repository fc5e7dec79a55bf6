//! A customizable circular progress indicator.
//!
//! ## Usage
//!
//! Show task completion as a ring, optionally with status-derived colors and
//! a spinner rotation for indeterminate phases.
use std::time::{Duration, Instant};

use derive_setters::Setters;
use tessera_ui::{
    Color, ComputedData, Constraint, DimensionValue, Dp, LayoutInput, LayoutOutput, LayoutSpec,
    MeasurementError, Modifier, Px, RenderInput, State, accesskit::Role, receive_frame_nanos,
    remember, tessera,
};

use crate::{
    animation::{RingAnimation, lerp},
    geometry::{self, RingFrame, RingSize},
    modifier::{ModifierExt as _, SemanticsArgs},
    pipelines::ring_arc::command::{ArcSpec, RingArcCap, RingArcCommand},
    spinner::SpinnerClock,
    status::{ProgressStatus, StatusSource},
};

/// Default values for [`progress_ring`].
pub struct ProgressRingDefaults;

impl ProgressRingDefaults {
    /// Track color.
    pub const TRACK_COLOR: Color = Color::BLACK;
    /// Progress arc color.
    pub const PROGRESS_COLOR: Color = Color::GREEN;
    /// Inner arc color.
    pub const INNER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.2);
    /// Progress threshold below which the stroke width grows with progress.
    pub const GROWTH_THRESHOLD: f32 = 0.03;
    /// Duration of one full spinner turn.
    pub const SPINNER_CYCLE: Duration = Duration::from_secs(1);
}

/// Animates the progress stroke width toward its latest target.
#[derive(Clone, PartialEq)]
struct GrowthAnimation {
    current: Option<f32>,
    from: f32,
    target: f32,
    started: Option<Instant>,
}

impl GrowthAnimation {
    fn new() -> Self {
        Self {
            current: None,
            from: 0.0,
            target: 0.0,
            started: None,
        }
    }

    /// Starts a transition when the target changes. The first target is
    /// adopted without animating.
    fn retarget(&mut self, target: f32) {
        match self.current {
            None => {
                self.current = Some(target);
                self.target = target;
            }
            Some(current) => {
                if (target - self.target).abs() > f32::EPSILON {
                    self.from = current;
                    self.target = target;
                    self.started = Some(Instant::now());
                }
            }
        }
    }

    /// Advances the transition based on elapsed time.
    fn update(&mut self, animation: &RingAnimation) {
        if let Some(started) = self.started {
            let fraction = if animation.duration.is_zero() {
                1.0
            } else {
                (started.elapsed().as_secs_f32() / animation.duration.as_secs_f32()).min(1.0)
            };
            let eased = animation.curve.evaluate(fraction);
            self.current = Some(lerp(self.from, self.target, eased));
            if fraction >= 1.0 {
                self.started = None;
            }
        }
    }

    fn value(&self) -> f32 {
        self.current.unwrap_or(self.target)
    }

    fn is_animating(&self) -> bool {
        self.started.is_some()
    }
}

/// Controller for [`progress_ring`] state.
///
/// Holds the live progress value, the stroke growth animation, and the
/// spinner rotation clock. Pass a `State<ProgressRingController>` through
/// [`ProgressRingArgs::controller`] to drive progress from event or frame
/// callbacks; otherwise the ring owns an internal controller mirroring
/// `args.progress`.
#[derive(Clone, PartialEq)]
pub struct ProgressRingController {
    progress: f32,
    growth: GrowthAnimation,
    spinner: SpinnerClock,
}

impl Default for ProgressRingController {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ProgressRingController {
    /// Creates a new controller with the provided initial progress.
    pub fn new(initial_progress: f32) -> Self {
        Self {
            progress: initial_progress,
            growth: GrowthAnimation::new(),
            spinner: SpinnerClock::new(),
        }
    }

    /// Returns the current progress value.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Sets the progress value.
    ///
    /// The value is stored as-is; out-of-range values are not clamped and
    /// propagate into classification and geometry. The last write wins.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    /// Accumulated spinner rotation in degrees.
    pub fn rotation_degrees(&self) -> f64 {
        self.spinner.rotation_degrees()
    }
}

/// Arguments for the `progress_ring` component.
#[derive(PartialEq, Clone, Setters)]
pub struct ProgressRingArgs {
    /// Progress value in `0.0..=1.0`.
    ///
    /// Ignored while an external [`controller`](Self::controller) is
    /// attached; the controller's value wins.
    pub progress: f32,

    /// Optional modifier chain applied to the ring subtree.
    pub modifier: Modifier,

    /// Preset controlling default stroke widths and the fallback size.
    pub size: RingSize,

    /// Color of the full-circle background track.
    pub track_color: Color,

    /// Color of the progress arc.
    ///
    /// Overridden by the classifier color when a
    /// [`status`](Self::status_type) is attached.
    pub progress_color: Color,

    /// Explicit track stroke width, overriding the preset.
    #[setters(into)]
    pub track_width: Option<Dp>,

    /// Progress threshold below which the progress stroke width grows
    /// linearly from zero to the track width. `None` disables growth; the
    /// stroke then always matches the track width.
    #[setters(into)]
    pub growth_threshold: Option<f32>,

    /// Timing of the stroke width transition.
    pub animation: RingAnimation,

    /// Explicit inner arc stroke width, overriding the preset.
    #[setters(into)]
    pub inner_width: Option<Dp>,

    /// Color of the thin arc drawn over the progress arc. `None` omits the
    /// inner arc.
    #[setters(into)]
    pub inner_color: Option<Color>,

    /// Whether progress and inner arc ends are rounded.
    pub rounded: bool,

    /// Whether the progress arc sweeps clockwise.
    pub clockwise: bool,

    /// Whether the ring rotates continuously.
    pub spinner: bool,

    /// Duration of one full spinner turn.
    pub spinner_cycle_duration: Duration,

    /// Optional status classifier deriving colors from the progress value.
    #[setters(skip)]
    pub status: Option<StatusSource>,

    /// Optional accessibility label read by assistive technologies.
    #[setters(strip_option, into)]
    pub accessibility_label: Option<String>,

    /// Optional accessibility description read by assistive technologies.
    #[setters(strip_option, into)]
    pub accessibility_description: Option<String>,

    /// Optional external controller for live progress updates.
    ///
    /// When this is `None`, `progress_ring` creates and owns an internal
    /// controller.
    #[setters(skip)]
    pub controller: Option<State<ProgressRingController>>,
}

impl Default for ProgressRingArgs {
    fn default() -> Self {
        Self {
            progress: 0.0,
            modifier: Modifier::new(),
            size: RingSize::Large,
            track_color: ProgressRingDefaults::TRACK_COLOR,
            progress_color: ProgressRingDefaults::PROGRESS_COLOR,
            track_width: None,
            growth_threshold: Some(ProgressRingDefaults::GROWTH_THRESHOLD),
            animation: RingAnimation::default(),
            inner_width: None,
            inner_color: Some(ProgressRingDefaults::INNER_COLOR),
            rounded: true,
            clockwise: true,
            spinner: false,
            spinner_cycle_duration: ProgressRingDefaults::SPINNER_CYCLE,
            status: None,
            accessibility_label: None,
            accessibility_description: None,
            controller: None,
        }
    }
}

impl ProgressRingArgs {
    /// Derives progress and inner colors from the given status type.
    pub fn status_type<S: ProgressStatus>(mut self) -> Self {
        self.status = Some(StatusSource::of::<S>());
        self
    }

    /// Derives progress and inner colors from an existing status source.
    pub fn status_source(mut self, source: StatusSource) -> Self {
        self.status = Some(source);
        self
    }

    /// Sets an external controller for live progress updates.
    pub fn controller(mut self, controller: State<ProgressRingController>) -> Self {
        self.controller = Some(controller);
        self
    }
}

/// # progress_ring
///
/// Renders a circular progress indicator with a background track, a progress
/// arc, and an optional inner arc.
///
/// ## Usage
///
/// Display a value in `0.0..=1.0` as a ring. Attach a status classifier to
/// derive colors from the value, or enable the spinner for indeterminate
/// phases such as loading.
///
/// ## Parameters
///
/// - `args` — configures the ring's value, appearance, and behavior; see
///   [`ProgressRingArgs`].
///
/// ## Examples
///
/// ```
/// use tessera_progress_ui::progress_ring::{ProgressRingArgs, progress_ring};
/// use tessera_ui::Dp;
///
/// # use tessera_ui::tessera;
/// # #[tessera]
/// # fn component() {
/// // A ring at 30% with a thinner track.
/// progress_ring(&ProgressRingArgs::default().progress(0.3).track_width(Dp(20.0)));
/// # }
/// # component();
/// ```
#[tessera]
pub fn progress_ring(args: &ProgressRingArgs) {
    let mut args = args.clone();
    let controller = match args.controller {
        Some(controller) => controller,
        None => {
            let initial = args.progress;
            let controller = remember(move || ProgressRingController::new(initial));
            let progress = args.progress;
            controller.with_mut(|c| c.set_progress(progress));
            controller
        }
    };
    args.controller = Some(controller);
    progress_ring_node(&args);
}

#[tessera]
fn progress_ring_node(args: &ProgressRingArgs) {
    let args = args.clone();
    let controller = args
        .controller
        .expect("progress_ring_node requires controller to be set");

    if args.spinner {
        let cycle = args.spinner_cycle_duration;
        let clockwise = args.clockwise;
        controller.with_mut(|c| c.spinner.start(cycle, clockwise));
    } else {
        controller.with_mut(|c| c.spinner.cancel());
    }

    let progress = controller.with(|c| c.progress());

    let track_width = geometry::resolve_track_width(args.track_width, args.size);
    let target_width =
        geometry::progress_stroke_width(track_width, progress, args.growth_threshold);
    let animation = args.animation;
    controller.with_mut(|c| {
        c.growth.retarget(target_width.0 as f32);
        c.growth.update(&animation);
        c.spinner.advance();
    });

    if controller.with(|c| c.growth.is_animating() || c.spinner.is_running()) {
        let controller_for_frame = controller;
        receive_frame_nanos(move |_| {
            let busy = controller_for_frame.with_mut(|c| {
                c.growth.update(&animation);
                c.spinner.advance();
                c.growth.is_animating() || c.spinner.is_running()
            });
            if busy {
                tessera_ui::FrameNanosControl::Continue
            } else {
                tessera_ui::FrameNanosControl::Stop
            }
        });
    }

    let status_colors = args.status.as_ref().map(|status| status.resolve(progress));
    let progress_color = status_colors
        .map(|colors| colors.color)
        .unwrap_or(args.progress_color);
    let inner_color = status_colors
        .and_then(|colors| colors.inner_color)
        .or(args.inner_color);

    let frame = geometry::resolve_frame(&geometry::FrameInput {
        progress,
        rotation_degrees: controller.with(|c| c.spinner.rotation_degrees()) as f32,
        clockwise: args.clockwise,
        rounded: args.rounded,
        track_width,
        progress_width: Dp(f64::from(controller.with(|c| c.growth.value()))),
        inner_width: geometry::resolve_inner_width(args.inner_width, args.size),
        track_color: args.track_color,
        progress_color,
        inner_color,
    });

    let mut semantics = SemanticsArgs::new()
        .role(Role::ProgressIndicator)
        .numeric_value(accessible_progress(progress))
        .numeric_range(0.0, 1.0);
    if let Some(label) = args.accessibility_label.clone() {
        semantics = semantics.label(label);
    }
    if let Some(description) = args.accessibility_description.clone() {
        semantics = semantics.description(description);
    }

    let fallback_extent = args.size.extent();
    let modifier = args.modifier.semantics(semantics);
    modifier.run(move || {
        let canvas_args = RingCanvasArgs {
            frame,
            fallback_extent,
        };
        ring_canvas(&canvas_args);
    });
}

/// Progress reported to assistive technologies. Display geometry keeps the
/// raw value; only the announcement is clamped.
fn accessible_progress(progress: f32) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        f64::from(progress.clamp(0.0, 1.0))
    }
}

#[derive(Clone, PartialEq)]
struct RingCanvasArgs {
    frame: RingFrame,
    fallback_extent: Dp,
}

#[tessera]
fn ring_canvas(args: &RingCanvasArgs) {
    layout(RingLayout {
        frame: args.frame,
        fallback_extent: args.fallback_extent,
    });
}

#[derive(Clone, Copy, PartialEq)]
struct RingLayout {
    frame: RingFrame,
    fallback_extent: Dp,
}

fn resolve_extent(dimension: DimensionValue, fallback: Px) -> Px {
    match dimension {
        DimensionValue::Fixed(px) => px,
        DimensionValue::Wrap { min, max } => {
            let mut extent = fallback;
            if let Some(max) = max {
                extent = extent.min(max);
            }
            if let Some(min) = min {
                extent = extent.max(min);
            }
            extent
        }
        DimensionValue::Fill { max, .. } => {
            max.expect("Seems that you are trying to fill an infinite size, which is not allowed")
        }
    }
}

fn arc_spec(stroke: geometry::ArcStroke) -> ArcSpec {
    ArcSpec {
        color: stroke.color,
        stroke_width_px: stroke.width.to_pixels_f32(),
        start_angle_degrees: stroke.start_angle_degrees,
        sweep_angle_degrees: stroke.sweep_angle_degrees,
        cap: if stroke.rounded {
            RingArcCap::Round
        } else {
            RingArcCap::Butt
        },
    }
}

impl LayoutSpec for RingLayout {
    fn measure(
        &self,
        input: &LayoutInput<'_>,
        _output: &mut LayoutOutput<'_>,
    ) -> Result<ComputedData, MeasurementError> {
        let constraint = Constraint::new(
            input.parent_constraint().width(),
            input.parent_constraint().height(),
        );
        let fallback: Px = self.fallback_extent.into();
        Ok(ComputedData {
            width: resolve_extent(constraint.width, fallback),
            height: resolve_extent(constraint.height, fallback),
        })
    }

    fn record(&self, input: &RenderInput<'_>) {
        let drawable = RingArcCommand::new(
            arc_spec(self.frame.track),
            arc_spec(self.frame.progress),
            self.frame.inner.map(arc_spec),
        );
        input
            .metadata_mut()
            .fragment_mut()
            .push_draw_command(drawable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_does_not_clamp_progress() {
        let mut controller = ProgressRingController::new(0.5);
        controller.set_progress(1.7);
        assert_eq!(controller.progress(), 1.7);
        controller.set_progress(-0.3);
        assert_eq!(controller.progress(), -0.3);
    }

    #[test]
    fn test_controller_last_write_wins() {
        let mut controller = ProgressRingController::new(0.0);
        controller.set_progress(0.2);
        controller.set_progress(0.8);
        controller.set_progress(0.4);
        assert_eq!(controller.progress(), 0.4);
    }

    #[test]
    fn test_growth_adopts_first_target_without_animating() {
        let mut growth = GrowthAnimation::new();
        growth.retarget(45.0);
        assert_eq!(growth.value(), 45.0);
        assert!(!growth.is_animating());
    }

    #[test]
    fn test_growth_animates_on_target_change() {
        let mut growth = GrowthAnimation::new();
        growth.retarget(10.0);
        growth.retarget(40.0);
        assert!(growth.is_animating());
        // Until time passes the visible width stays at the previous value.
        assert_eq!(growth.value(), 10.0);
    }

    #[test]
    fn test_growth_zero_duration_snaps_to_target() {
        let mut growth = GrowthAnimation::new();
        growth.retarget(10.0);
        growth.retarget(40.0);
        let animation = RingAnimation::new(Duration::ZERO, crate::animation::AnimationCurve::Linear);
        growth.update(&animation);
        assert_eq!(growth.value(), 40.0);
        assert!(!growth.is_animating());
    }

    #[test]
    fn test_accessible_progress_is_clamped_and_nan_safe() {
        assert_eq!(accessible_progress(0.5), 0.5);
        assert_eq!(accessible_progress(1.5), 1.0);
        assert_eq!(accessible_progress(-0.5), 0.0);
        assert_eq!(accessible_progress(f32::NAN), 0.0);
    }

    #[test]
    fn test_frame_strokes_map_onto_one_ring_command() {
        let frame = geometry::resolve_frame(&geometry::FrameInput {
            progress: 0.25,
            rotation_degrees: 0.0,
            clockwise: true,
            rounded: true,
            track_width: Dp(45.0),
            progress_width: Dp(45.0),
            inner_width: Dp(5.0),
            track_color: Color::BLACK,
            progress_color: Color::GREEN,
            inner_color: Some(ProgressRingDefaults::INNER_COLOR),
        });
        let command = RingArcCommand::new(
            arc_spec(frame.track),
            arc_spec(frame.progress),
            frame.inner.map(arc_spec),
        );
        assert_eq!(command.arc_count(), 3);
        let caps: Vec<RingArcCap> = command.arcs().map(|arc| arc.cap).collect();
        assert_eq!(caps, vec![RingArcCap::Butt, RingArcCap::Round, RingArcCap::Round]);
        let sweeps: Vec<f32> = command.arcs().map(|arc| arc.sweep_angle_degrees).collect();
        assert_eq!(sweeps, vec![360.0, 90.0, 90.0]);
    }

    #[test]
    fn test_resolve_extent_prefers_fixed_then_bounds() {
        let fallback = Px(180);
        assert_eq!(
            resolve_extent(DimensionValue::Fixed(Px(120)), fallback),
            Px(120)
        );
        assert_eq!(
            resolve_extent(
                DimensionValue::Wrap {
                    min: None,
                    max: None
                },
                fallback
            ),
            Px(180)
        );
        assert_eq!(
            resolve_extent(
                DimensionValue::Wrap {
                    min: None,
                    max: Some(Px(100))
                },
                fallback
            ),
            Px(100)
        );
        assert_eq!(
            resolve_extent(
                DimensionValue::Wrap {
                    min: Some(Px(200)),
                    max: None
                },
                fallback
            ),
            Px(200)
        );
    }
}
