//! Render pipelines backing the progress ring components.
//!
//! Register these pipelines once during renderer initialization before
//! rendering components.

pub(crate) mod ring_arc;

/// Register all draw pipelines required by this crate.
pub fn register_pipelines(context: &mut tessera_ui::PipelineContext<'_>) {
    ring_arc::register(context);
}
