//! # World Module
//!
//! This module provides the `VoxelWorld` struct, the sparse store of every
//! object placed in the scene.
//!
//! ## Architecture
//!
//! The world uses a sparse storage approach: only occupied coordinates are
//! kept, in a hash map keyed by `VoxelCoordinate`. The grid is effectively
//! infinite and memory grows with the number of placed objects only.
//!
//! ## Performance Considerations
//!
//! - Insertion and lookup are O(1) amortized
//! - Enumeration visits every entry; picking walks the whole store on each
//!   query, which is fine for tens of thousands of entries
//! - The world is populated once at generation time and read afterwards

use std::collections::HashMap;

use super::{
    coordinate::VoxelCoordinate,
    object::{Color, VoxelObject},
};

/// A sparse voxel world mapping grid coordinates to placed objects.
///
/// At most one object lives at each coordinate. Inserting at an occupied
/// coordinate silently replaces the previous object.
///
/// # Examples
///
/// ```
/// use voxel_scene::engine_state::voxels::{coordinate::VoxelCoordinate, world::VoxelWorld};
///
/// let mut world = VoxelWorld::new();
/// world.insert_cube(VoxelCoordinate::new(0, 0, 0), [1.0, 1.0, 1.0, 1.0]);
///
/// assert!(world.get_object_at(VoxelCoordinate::new(0, 0, 0)).is_some());
/// assert_eq!(world.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct VoxelWorld {
    objects: HashMap<VoxelCoordinate, VoxelObject>,
}

impl VoxelWorld {
    /// Creates a new, empty world.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    /// Places `object` at `coordinate`, replacing anything already there.
    ///
    /// The object's location is set to the center of `coordinate`, so an
    /// object always sits where it is keyed.
    pub fn insert(&mut self, coordinate: VoxelCoordinate, mut object: VoxelObject) {
        object.location = coordinate.center();
        self.objects.insert(coordinate, object);
    }

    /// Places a unit cube of the given color at `coordinate`.
    pub fn insert_cube(&mut self, coordinate: VoxelCoordinate, color: Color) {
        self.insert(coordinate, VoxelObject::cube(color, coordinate));
    }

    /// Retrieves the object at `coordinate`, if any.
    pub fn get_object_at(&self, coordinate: VoxelCoordinate) -> Option<&VoxelObject> {
        self.objects.get(&coordinate)
    }

    /// Iterates over every placed object with its coordinate.
    ///
    /// The order is unspecified and may differ between calls.
    pub fn all(&self) -> impl Iterator<Item = (&VoxelCoordinate, &VoxelObject)> {
        self.objects.iter()
    }

    /// Returns the number of placed objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if nothing has been placed.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
