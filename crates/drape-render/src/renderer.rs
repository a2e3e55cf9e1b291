//! Renderer trait and HeadlessRenderer stub.
//!
//! The renderer is called once per step to present the current frame.
//! The headless renderer discards all frames, serving as a no-op for
//! benchmarks and CI.

use drape_solver::Frame;
use drape_types::DrapeResult;

use crate::triangulation::ClothTopology;

/// Trait for rendering simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: discards frames (benchmarks, CI)
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): writes every frame to JSON
pub trait Renderer: Send {
    /// Initialize the renderer with the cloth topology.
    fn init(&mut self, topology: &ClothTopology) -> DrapeResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &Frame) -> DrapeResult<()>;

    /// Finalize rendering (flush buffers, close files, etc.).
    fn finalize(&mut self) -> DrapeResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer. Counts frames and discards them.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
    last_timestep: Option<u32>,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestep of the most recent frame, if any.
    pub fn last_timestep(&self) -> Option<u32> {
        self.last_timestep
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _topology: &ClothTopology) -> DrapeResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, frame: &Frame) -> DrapeResult<()> {
        self.frames += 1;
        self.last_timestep = Some(frame.timestep);
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
