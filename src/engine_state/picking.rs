//! # Picking
//!
//! Finds the voxel under the cursor.
//!
//! A cursor position in pixels is mapped to normalized device coordinates by
//! `Viewport`, turned into a world-space ray by the camera, and tested against
//! every object in the world. The result is the empty voxel next to the face
//! the ray hits first: the slot a new block would be placed into.

use cgmath::{Point2, Vector3};

use super::{
    camera_state::camera::{Camera, Projection},
    voxels::{coordinate::VoxelCoordinate, world::VoxelWorld},
};

/// The size of the drawable area, used to map between pixel positions and
/// normalized device coordinates.
///
/// Pixel positions have their origin at the top-left with y growing down.
/// Normalized device coordinates span -1 to 1 on both axes with y growing up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size in pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Updates the viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Maps a pixel position to normalized device coordinates.
    ///
    /// # Returns
    /// `None` if the viewport has no area or `pixel` lies outside it
    pub fn to_ndc(&self, pixel: Point2<f32>) -> Option<Point2<f32>> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        if !(0.0..=self.width).contains(&pixel.x) || !(0.0..=self.height).contains(&pixel.y) {
            return None;
        }
        Some(Point2::new(
            2.0 * pixel.x / self.width - 1.0,
            2.0 * (self.height - pixel.y) / self.height - 1.0,
        ))
    }

    /// Maps normalized device coordinates back to a pixel position.
    pub fn to_pixel(&self, ndc: Point2<f32>) -> Point2<f32> {
        Point2::new(
            (ndc.x + 1.0) * self.width / 2.0,
            self.height - (ndc.y + 1.0) * self.height / 2.0,
        )
    }
}

/// Finds the empty voxel adjacent to the nearest face under a screen point.
///
/// # Arguments
/// * `ndc` - The cursor in normalized device coordinates, or `None` when the
///   cursor is outside the view
/// * `camera` - The camera the frame is viewed from
/// * `projection` - The projection the frame is drawn with
/// * `world` - The objects to test against
///
/// # Returns
/// The coordinate one step outward from the hit face of the nearest object in
/// front of the camera, or `None` if the cursor is absent or nothing is hit.
///
/// Only hits with `t >= 0` compete for the minimum. A plain minimum over all
/// hits would let a cube behind the camera, whose `t` is negative, win over
/// the one actually under the cursor.
///
/// Every object is tested, so a query is O(n) in the size of the world.
pub fn pick(
    ndc: Option<Point2<f32>>,
    camera: &Camera,
    projection: &Projection,
    world: &VoxelWorld,
) -> Option<VoxelCoordinate> {
    let ray = camera.ray_through(ndc?, projection)?;

    let mut nearest: Option<(f32, VoxelCoordinate, Vector3<f32>)> = None;
    for (coordinate, object) in world.all() {
        let Some(intersection) = object.intersect(&ray) else {
            continue;
        };
        // Hits behind the camera are not under the cursor
        if intersection.t < 0.0 {
            continue;
        }
        if nearest.map_or(true, |(t, _, _)| intersection.t < t) {
            nearest = Some((intersection.t, *coordinate, intersection.normal));
        }
    }

    nearest.map(|(_, coordinate, normal)| {
        VoxelCoordinate::from_rounded(coordinate.center() + normal)
    })
}
