//! # Core Module
//!
//! Geometric primitives shared by the camera, the voxel store and picking.
//!
//! ## Key Components
//! - `Ray`: An origin and a direction in world space
//! - `Cube`: An axis-aligned cube, the collision volume of a voxel
//! - `Intersection`: The hit parameter and face normal of a ray/cube test
//!
//! ## Usage
//! ```rust
//! use cgmath::{Point3, Vector3};
//! use voxel_scene::core::{Cube, Ray};
//!
//! let cube = Cube::unit(Point3::new(0.0, 0.0, 0.0));
//! let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
//!
//! let hit = cube.intersect(&ray).unwrap();
//! assert_eq!(hit.t, 4.5);
//! assert_eq!(hit.normal, Vector3::new(0.0, 0.0, 1.0));
//! ```

pub mod cube;
pub mod ray;

// Re-export types for easier access
pub use cube::{Cube, Intersection};
pub use ray::Ray;
