//! # Rendering Interface
//!
//! The boundary between the scene core and whatever draws it.
//!
//! Each frame the engine state assembles a `FrameData` holding everything a
//! renderer needs: the camera matrices, and one `InstanceRaw` (model
//! transform and color) per object to draw. Instances are laid out so a GPU
//! backend can upload them straight into an instance buffer. The highlighted
//! voxel, if any, is the first instance and uses the highlight color.
//!
//! GPU pipeline setup, mesh construction and command submission live in the
//! `Renderer` implementation, not here. `LogRenderer` is a headless
//! implementation that reports what it would draw.

use cgmath::Matrix4;

use super::{camera_state::camera::CameraUniform, voxels::coordinate::VoxelCoordinate};

/// Per-instance data for drawing one unit cube.
///
/// # Memory Layout
/// - Model matrix: 4x4 f32, column-major (64 bytes)
/// - Color: 4x f32 RGBA (16 bytes)
///
/// Total size: 80 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// Model-to-world transform
    pub model: [[f32; 4]; 4],
    /// RGBA color
    pub color: [f32; 4],
}

impl InstanceRaw {
    /// Creates instance data from a model matrix and a color.
    pub fn new(model: Matrix4<f32>, color: [f32; 4]) -> Self {
        Self {
            model: model.into(),
            color,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug)]
pub struct FrameData {
    /// Camera view and projection for this frame
    pub camera: CameraUniform,
    /// Objects to draw, highlight marker first when present
    pub instances: Vec<InstanceRaw>,
    /// The voxel the cursor is hovering over
    pub highlighted: Option<VoxelCoordinate>,
}

/// A backend that draws frames.
pub trait Renderer {
    /// Called when the drawable area changes size.
    fn resize(&mut self, width: u32, height: u32);

    /// Draws one frame.
    fn render(&mut self, frame: &FrameData);
}

/// A headless renderer that logs frame contents instead of drawing them.
///
/// It reports the instance count on the first frame and after each resize,
/// and every change of the highlighted voxel.
#[derive(Debug)]
pub struct LogRenderer {
    last_highlighted: Option<VoxelCoordinate>,
    frames_rendered: u64,
    report_next_frame: bool,
}

impl LogRenderer {
    /// Creates a new logging renderer.
    pub fn new() -> Self {
        Self {
            last_highlighted: None,
            frames_rendered: 0,
            report_next_frame: true,
        }
    }

    /// Number of frames rendered so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// The highlighted voxel of the most recent frame.
    pub fn last_highlighted(&self) -> Option<VoxelCoordinate> {
        self.last_highlighted
    }
}

impl Default for LogRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Renderer resized to {width}x{height}");
        self.report_next_frame = true;
    }

    fn render(&mut self, frame: &FrameData) {
        if self.report_next_frame {
            log::info!("Drawing {} instances", frame.instances.len());
            self.report_next_frame = false;
        }
        if frame.highlighted != self.last_highlighted {
            match frame.highlighted {
                Some(coordinate) => log::debug!("Highlighting {coordinate:?}"),
                None => log::debug!("Highlight cleared"),
            }
            self.last_highlighted = frame.highlighted;
        }
        self.frames_rendered += 1;
    }
}
