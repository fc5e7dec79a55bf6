//! Circular progress indicator components for the Tessera UI framework.
//!
//! # Usage
//!
//! First, register the pipelines provided by this crate.
//!
//! ```no_run
//! use tessera_ui::Renderer;
//!
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn app() {}
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     Renderer::run(app, |app| {
//!         tessera_progress_ui::init(app);
//!     })?;
//!     Ok(())
//! }
//! ```
//!
//! Then render a ring anywhere in your UI.
//!
//! ```
//! # use tessera_ui::tessera;
//! # #[tessera]
//! # fn component() {
//! use tessera_progress_ui::progress_ring::{ProgressRingArgs, progress_ring};
//!
//! progress_ring(&ProgressRingArgs::default().progress(0.4));
//! # }
//! # component();
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod geometry;
pub mod modifier;
pub mod pipelines;
pub mod progress_ring;
pub mod spinner;
pub mod status;

use tessera_ui::PipelineContext;

/// Registers pipelines provided by this crate with the renderer.
pub fn init(context: &mut PipelineContext<'_>) {
    pipelines::register_pipelines(context);
}
