//! # Voxel Object Module
//!
//! The entities placed in the voxel world and the shapes they collide as.

use cgmath::{EuclideanSpace, Matrix4, Point3};

use crate::core::{Cube, Intersection, Ray};

use super::coordinate::VoxelCoordinate;

/// RGBA color with components in `0.0..=1.0`.
pub type Color = [f32; 4];

/// Enumerates the shapes a placed object can have.
///
/// New shapes add a variant here and an arm to every match over it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// A unit cube filling its voxel.
    Cube,
}

/// An object placed in the voxel world.
///
/// Objects are owned by the world and never modified after insertion; placing
/// a new object at an occupied coordinate replaces the old one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoxelObject {
    /// The shape of this object
    pub kind: ObjectKind,
    /// Color the renderer draws this object with
    pub color: Color,
    /// World-space center, cached from the grid coordinate for rendering
    pub location: Point3<f32>,
}

impl VoxelObject {
    /// Creates a cube filling the voxel at `coordinate`.
    pub fn cube(color: Color, coordinate: VoxelCoordinate) -> Self {
        Self {
            kind: ObjectKind::Cube,
            color,
            location: coordinate.center(),
        }
    }

    /// Intersects `ray` with this object's shape.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        match self.kind {
            ObjectKind::Cube => Cube::unit(self.location).intersect(ray),
        }
    }

    /// Returns the model-to-world transform used when drawing this object.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.location.to_vec())
    }
}
