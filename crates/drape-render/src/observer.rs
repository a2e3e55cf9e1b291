//! Redraw adapter: any [`Renderer`] as a [`StepObserver`].

use drape_solver::{SimulationContext, StepObserver, StepReport};
use drape_types::{DrapeError, DrapeResult};

use crate::renderer::Renderer;

/// Submits a frame to the wrapped renderer after every step.
///
/// Observer callbacks cannot fail, so the first renderer error is kept
/// and later frames are skipped. Check [`RenderObserver::finish`].
pub struct RenderObserver<R: Renderer> {
    renderer: R,
    error: Option<DrapeError>,
}

impl<R: Renderer> RenderObserver<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            error: None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The first error reported by the renderer, if any.
    pub fn error(&self) -> Option<&DrapeError> {
        self.error.as_ref()
    }

    /// Finalizes the renderer and returns it, or the first error seen.
    pub fn finish(mut self) -> DrapeResult<R> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.renderer.finalize()?;
        Ok(self.renderer)
    }
}

impl<R: Renderer> StepObserver for RenderObserver<R> {
    fn on_step(&mut self, _report: &StepReport, ctx: &SimulationContext) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.renderer.submit_frame(&ctx.frame()) {
            tracing::warn!(renderer = self.renderer.name(), error = %e, "frame submission failed");
            self.error = Some(e);
        }
    }

    fn name(&self) -> &str {
        "render_observer"
    }
}
