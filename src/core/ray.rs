//! # Ray
//!
//! A half-line in world space, used to find what the cursor is pointing at.

use cgmath::{Point3, Vector3};

/// A ray with an origin and a direction.
///
/// The direction does not have to be normalized, but the parameter `t`
/// returned by intersection tests is measured in multiples of it. Rays built
/// by the camera are always normalized, so there `t` is a world-space distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Where the ray starts in world space
    pub origin: Point3<f32>,
    /// The direction the ray travels in
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Creates a new ray from an origin and a direction.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self { origin, direction }
    }

    /// Returns the point `origin + t * direction`.
    pub fn point_at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}
