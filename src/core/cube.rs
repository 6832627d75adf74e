//! # Cube
//!
//! Axis-aligned cubes and the ray/cube intersection test used for picking.
//!
//! The test runs once per axis rather than as a combined slab test. For each
//! axis it finds where the ray crosses the near face perpendicular to that
//! axis, then accepts the crossing only if the point lies strictly inside the
//! cube on the two remaining axes. The nearest accepted crossing wins, with
//! ties going to the axis checked first (x, then y, then z).

use cgmath::{Point3, Vector3, Zero};

use super::Ray;

/// The result of a successful ray/shape test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter at the hit point
    pub t: f32,
    /// Outward face normal; exactly one component is ±1, the others are 0
    pub normal: Vector3<f32>,
}

/// An axis-aligned cube described by its center and edge length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    /// Center of the cube in world space
    pub center: Point3<f32>,
    /// Edge length
    pub length: f32,
}

impl Cube {
    /// Creates a cube with the given center and edge length.
    pub fn new(center: Point3<f32>, length: f32) -> Self {
        Self { center, length }
    }

    /// Creates the unit cube occupied by a single voxel.
    pub fn unit(center: Point3<f32>) -> Self {
        Self::new(center, 1.0)
    }

    /// Intersects `ray` with this cube.
    ///
    /// A hit with a negative `t` (a cube behind the ray origin) is still
    /// reported; callers that only want hits in front decide for themselves.
    ///
    /// A direction component of zero makes that axis' candidate infinite or
    /// NaN. Such candidates are skipped, so the result is never non-finite.
    pub fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let half_length = self.length / 2.0;
        let mut intersection: Option<Intersection> = None;

        for dimension in 0..3 {
            let d = ray.direction[dimension];
            let o = ray.origin[dimension];
            let to_center = (self.center[dimension] - o) / d;
            let half_extent = self.length / (2.0 * d);
            let t = to_center - half_extent.abs();

            if !t.is_finite() {
                continue;
            }

            let point = ray.point_at(t);
            let inside = (0..3).filter(|&other| other != dimension).all(|other| {
                point[other] < self.center[other] + half_length
                    && point[other] > self.center[other] - half_length
            });
            if !inside {
                continue;
            }

            if intersection.map_or(true, |best| t < best.t) {
                let mut normal = Vector3::zero();
                normal[dimension] = if half_extent > 0.0 { -1.0 } else { 1.0 };
                intersection = Some(Intersection { t, normal });
            }
        }

        intersection
    }
}
