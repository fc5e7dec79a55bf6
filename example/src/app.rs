//! Gallery of progress ring configurations.

use std::time::{Duration, Instant};

use tessera_components::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    column::{ColumnArgs, column},
    row::{RowArgs, row},
    spacer::{SpacerArgs, spacer},
    text::{TextArgs, text},
    theme::{MaterialTheme, material_theme},
};
use tessera_progress_ui::{
    geometry::RingSize,
    modifier::ModifierExt as _,
    progress_ring::{ProgressRingArgs, ProgressRingController, progress_ring},
    status::ProgressStatus,
};
use tessera_ui::{
    Color, Dp, FrameNanosControl, Modifier, receive_frame_nanos, remember, tessera,
};

/// Server load buckets from best to worst.
#[derive(Clone, Copy, PartialEq)]
enum LoadStatus {
    Excellent,
    Normal,
    SemiNormal,
    Bad,
    Critical,
    Danger,
}

impl ProgressStatus for LoadStatus {
    const ALL: &'static [Self] = &[
        Self::Excellent,
        Self::Normal,
        Self::SemiNormal,
        Self::Bad,
        Self::Critical,
        Self::Danger,
    ];

    fn color(&self) -> Color {
        match self {
            Self::Excellent => Color::GREEN,
            Self::Normal => Color::new(0.6, 0.85, 0.2, 1.0),
            Self::SemiNormal => Color::new(1.0, 0.85, 0.0, 1.0),
            Self::Bad => Color::new(1.0, 0.6, 0.0, 1.0),
            Self::Critical => Color::new(1.0, 0.35, 0.1, 1.0),
            Self::Danger => Color::RED,
        }
    }
}

#[tessera]
pub fn app() {
    material_theme(MaterialTheme::default, || {
        gallery();
    });
}

#[tessera]
fn gallery() {
    let live = remember(|| ProgressRingController::new(0.35));
    let live_last_step = remember(Instant::now);
    let loading = remember(|| ProgressRingController::new(0.0));
    let loading_last_step = remember(Instant::now);

    receive_frame_nanos(move |_| {
        if live_last_step.with(|at| at.elapsed()) >= Duration::from_secs(1) {
            live_last_step.set(Instant::now());
            live.with_mut(|controller| {
                let next = (controller.progress() + 0.618_034) % 1.0;
                controller.set_progress(next);
                tracing::debug!(progress = next, "stepped server load ring");
            });
        }
        if loading_last_step.with(|at| at.elapsed()) >= Duration::from_millis(700) {
            loading_last_step.set(Instant::now());
            loading.with_mut(|controller| {
                let next = controller.progress() + 0.1;
                controller.set_progress(if next > 1.0 { 0.0 } else { next });
            });
        }
        FrameNanosControl::Continue
    });

    column(
        ColumnArgs::default()
            .modifier(Modifier::new().fill_max_size())
            .main_axis_alignment(MainAxisAlignment::Center)
            .cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(|| {
                row(
                    RowArgs::default()
                        .modifier(Modifier::new().fill_max_width())
                        .main_axis_alignment(MainAxisAlignment::SpaceEvenly),
                    |row_scope| {
                        row_scope.child(|| {
                            ring_cell("Thin track", || {
                                progress_ring(
                                    &ProgressRingArgs::default()
                                        .progress(0.2)
                                        .track_width(Dp(20.0))
                                        .accessibility_label("Thin track ring"),
                                );
                            });
                        });
                        row_scope.child(|| {
                            ring_cell("Small", || {
                                progress_ring(
                                    &ProgressRingArgs::default()
                                        .progress(0.5)
                                        .size(RingSize::Small)
                                        .accessibility_label("Small ring"),
                                );
                            });
                        });
                        row_scope.child(|| {
                            ring_cell("Counter-clockwise", || {
                                progress_ring(
                                    &ProgressRingArgs::default()
                                        .progress(0.3)
                                        .size(RingSize::Small)
                                        .track_color(Color::new(1.0, 0.85, 0.0, 1.0))
                                        .progress_color(Color::RED)
                                        .clockwise(false)
                                        .accessibility_label("Counter-clockwise ring"),
                                );
                            });
                        });
                    },
                );
            });
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(24.0))));
            });
            scope.child(move || {
                row(
                    RowArgs::default()
                        .modifier(Modifier::new().fill_max_width())
                        .main_axis_alignment(MainAxisAlignment::SpaceEvenly),
                    move |row_scope| {
                        row_scope.child(move || {
                            ring_cell("Server load", move || {
                                progress_ring(
                                    &ProgressRingArgs::default()
                                        .modifier(Modifier::new().size(Dp(160.0), Dp(160.0)))
                                        .status_type::<LoadStatus>()
                                        .track_width(Dp(106.0))
                                        .growth_threshold(None)
                                        .controller(live)
                                        .accessibility_label("Server load"),
                                );
                            });
                        });
                        row_scope.child(move || {
                            ring_cell("Loading", move || {
                                progress_ring(
                                    &ProgressRingArgs::default()
                                        .modifier(Modifier::new().size(Dp(160.0), Dp(160.0)))
                                        .status_type::<LoadStatus>()
                                        .spinner(true)
                                        .growth_threshold(0.5)
                                        .track_width(Dp(25.0))
                                        .inner_width(Dp(10.0))
                                        .controller(loading)
                                        .accessibility_label("Loading"),
                                );
                            });
                        });
                        row_scope.child(|| {
                            ring_cell("Slow spinner", || {
                                progress_ring(
                                    &ProgressRingArgs::default()
                                        .progress(0.75)
                                        .size(RingSize::Small)
                                        .spinner(true)
                                        .spinner_cycle_duration(Duration::from_secs(2))
                                        .clockwise(false)
                                        .accessibility_label("Slow spinner"),
                                );
                            });
                        });
                    },
                );
            });
        },
    );
}

#[tessera]
fn ring_cell<F>(label: &'static str, ring: F)
where
    F: FnOnce() + Send + Sync + 'static,
{
    column(
        ColumnArgs::default().cross_axis_alignment(CrossAxisAlignment::Center),
        move |scope| {
            scope.child(ring);
            scope.child(|| {
                spacer(&SpacerArgs::new(Modifier::new().height(Dp(8.0))));
            });
            scope.child(move || {
                text(&TextArgs::default().text(label));
            });
        },
    );
}
