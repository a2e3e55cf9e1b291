//! JSON frame exporter: writes per-frame cloth data for visual inspection.
//!
//! Implements the `Renderer` trait. Captures view-space positions, force
//! magnitudes and front-face colors at each frame, then serializes the
//! whole animation to a JSON file on `finalize()`.

use std::path::PathBuf;

use glam::Vec3;
use serde::Serialize;

use drape_solver::Frame;
use drape_types::{DrapeError, DrapeResult};

use crate::renderer::Renderer;
use crate::shading::force_color;
use crate::triangulation::ClothTopology;
use crate::view::{to_view_space, Camera};

/// A single frame of captured cloth data.
#[derive(Serialize)]
struct FrameData {
    timestep: u32,
    positions: Vec<f32>, // interleaved [x0,y0,z0, x1,y1,z1, ...]
    force_magnitudes: Vec<f32>,
    colors: Vec<[f32; 4]>,
}

#[derive(Serialize)]
struct SphereData {
    center: Vec3,
    radius: f32,
}

/// Complete animation data for JSON export.
#[derive(Serialize)]
struct AnimationData {
    grid_size: usize,
    vertex_count: usize,
    triangle_count: usize,
    indices: Vec<u32>,
    camera: Option<Camera>,
    sphere: Option<SphereData>,
    frames: Vec<FrameData>,
}

/// Exports simulation frames to a JSON file.
///
/// Usage:
/// ```text
/// let mut exporter = JsonFrameExporter::new("drape.json");
/// exporter.init(&ClothTopology::new(n))?;
/// // ... submit_frame() after each step ...
/// exporter.finalize()?; // writes the file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    grid_size: usize,
    indices: Vec<u32>,
    camera: Option<Camera>,
    sphere: Option<SphereData>,
    frames: Vec<FrameData>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            grid_size: 0,
            indices: Vec::new(),
            camera: None,
            sphere: None,
            frames: Vec::new(),
            submitted: 0,
        }
    }

    /// Records a camera for the viewer.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, topology: &ClothTopology) -> DrapeResult<()> {
        self.grid_size = topology.grid_size();
        self.indices = topology.indices().to_vec();
        self.frames.clear();
        self.submitted = 0;
        Ok(())
    }

    fn submit_frame(&mut self, frame: &Frame) -> DrapeResult<()> {
        if frame.grid_size != self.grid_size {
            return Err(DrapeError::InvalidGrid(format!(
                "frame is {}x{} but exporter was initialized for {}x{}",
                frame.grid_size, frame.grid_size, self.grid_size, self.grid_size
            )));
        }

        let n = frame.grid_size;
        let mut positions = Vec::with_capacity(frame.positions.len() * 3);
        for p in &frame.positions {
            positions.extend_from_slice(&to_view_space(*p, n).to_array());
        }
        let colors = frame
            .force_magnitudes
            .iter()
            .map(|&f| force_color(f).clamped().front)
            .collect();

        self.sphere.get_or_insert(SphereData {
            center: to_view_space(frame.sphere.center.as_vec3(), n),
            radius: frame.sphere.radius as f32,
        });
        self.frames.push(FrameData {
            timestep: frame.timestep,
            positions,
            force_magnitudes: frame.force_magnitudes.clone(),
            colors,
        });
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        let data = AnimationData {
            grid_size: self.grid_size,
            vertex_count: self.grid_size * self.grid_size,
            triangle_count: self.indices.len() / 3,
            indices: self.indices.clone(),
            camera: self.camera,
            sphere: self.sphere.take(),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| DrapeError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        tracing::info!(
            path = %self.output_path.display(),
            frames = data.frames.len(),
            "animation exported"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        // Frames are drained on finalize, so count submissions separately.
        self.submitted
    }
}
