//! Arc rendering pipeline for circular progress rings.
//!
//! ## Usage
//!
//! Use to draw ring tracks, progress arcs, and inner arcs as stroked circles.

pub mod command;
pub mod pipeline;

use tessera_ui::PipelineContext;

use self::pipeline::RingArcPipeline;

pub(super) fn register(context: &mut PipelineContext<'_>) {
    let resources = context.resources();
    let pipeline = RingArcPipeline::new(
        resources.device,
        resources.surface_config,
        resources.pipeline_cache,
        resources.sample_count,
    );
    context.register_draw_pipeline(pipeline);
}
