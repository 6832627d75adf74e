//! # Voxel Coordinate Module
//!
//! Integer grid coordinates used as keys in the voxel store.

use cgmath::Point3;

/// An integer position in the voxel grid.
///
/// The grid has no bounds. Each coordinate names the unit cube centered on
/// the same point in world space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VoxelCoordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoordinate {
    /// Creates a coordinate from its three components.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the world-space center of the voxel at this coordinate.
    pub fn center(&self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Returns the coordinate of the voxel containing `point`, rounding each
    /// component to the nearest integer.
    pub fn from_rounded(point: Point3<f32>) -> Self {
        Self {
            x: point.x.round() as i32,
            y: point.y.round() as i32,
            z: point.z.round() as i32,
        }
    }
}

impl From<Point3<i32>> for VoxelCoordinate {
    fn from(point: Point3<i32>) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}

impl From<VoxelCoordinate> for Point3<i32> {
    fn from(coordinate: VoxelCoordinate) -> Self {
        Point3::new(coordinate.x, coordinate.y, coordinate.z)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn center_casts_each_component() {
        let coordinate = VoxelCoordinate::new(-3, 0, 7);
        assert_eq!(coordinate.center(), Point3::new(-3.0, 0.0, 7.0));
    }

    #[test]
    fn from_rounded_picks_nearest_integer() {
        let coordinate = VoxelCoordinate::from_rounded(Point3::new(1.4, -2.6, 0.49));
        assert_eq!(coordinate, VoxelCoordinate::new(1, -3, 0));
    }

    #[test]
    fn equal_coordinates_hash_together() {
        let mut set = HashSet::new();
        set.insert(VoxelCoordinate::new(1, 2, 3));
        set.insert(VoxelCoordinate::from(Point3::new(1, 2, 3)));
        assert_eq!(set.len(), 1);
    }
}
