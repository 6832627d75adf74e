//! # Voxel World
//!
//! This module contains the spatial world model: integer grid coordinates,
//! the objects placed on the grid, and the sparse store holding them.
//!
//! ## Architecture
//!
//! * **Coordinate**: Unbounded integer grid positions used as store keys
//! * **Object**: Placed entities with a shape kind, a color and a cached location
//! * **World**: The sparse coordinate-to-object map
//! * **Generation**: One-time population of the world at startup
//!
//! ## Data Flow
//!
//! 1. The world is generated once when the engine state is created
//! 2. Every frame the renderer receives one transform and color per object
//! 3. Picking walks all objects to find the one under the cursor

pub mod coordinate;
pub mod generation;
pub mod object;
pub mod world;
