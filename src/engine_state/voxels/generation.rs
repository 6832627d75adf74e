//! # World Generation Module
//!
//! Populates a `VoxelWorld` with one column top per (x, z) position in a
//! square around the origin. Columns alternate between two colors in a
//! checkerboard so neighbouring cubes stay distinguishable.
//!
//! Multiple terrain strategies are supported:
//! - `waves`: gentle sine/cosine hills
//! - `flat`: every column at height 0
//! - `perlin`: heights sampled from 2D Perlin noise

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;

use super::{coordinate::VoxelCoordinate, world::VoxelWorld};

/// The method used to pick each column's height.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// `trunc(sin(x / 10) * 3 + cos(z / 10) * 2)`
    Waves,
    /// Height 0 everywhere
    Flat,
    /// 2D Perlin noise scaled by the configured amplitude
    Perlin,
}

/// Generates a world according to `config`.
///
/// Exactly one cube is placed per column, so the result holds
/// `(2 * radius + 1)²` objects (none for a negative radius).
pub fn generate_world(config: &WorldConfig) -> VoxelWorld {
    let mut world = VoxelWorld::new();
    if config.radius < 0 {
        log::warn!("World radius {} is negative, generating nothing", config.radius);
        return world;
    }
    let perlin = Perlin::new(config.perlin_seed);

    for x in -config.radius..=config.radius {
        for z in -config.radius..=config.radius {
            let y = match config.generation {
                GenerationMethod::Waves => wave_height(x, z),
                GenerationMethod::Flat => 0,
                GenerationMethod::Perlin => {
                    let sample = perlin.get([
                        x as f64 * config.perlin_scale,
                        z as f64 * config.perlin_scale,
                    ]);
                    (sample * config.perlin_amplitude) as i32
                }
            };

            let color = if x.rem_euclid(2) == z.rem_euclid(2) {
                config.primary_color
            } else {
                config.secondary_color
            };

            world.insert_cube(VoxelCoordinate::new(x, y, z), color);
        }
    }

    log::info!(
        "Generated {:?} world with {} objects",
        config.generation,
        world.len()
    );

    world
}

/// Height of the `waves` terrain at column (x, z), truncated toward zero.
fn wave_height(x: i32, z: i32) -> i32 {
    ((x as f32 / 10.0).sin() * 3.0 + (z as f32 / 10.0).cos() * 2.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(generation: GenerationMethod, radius: i32) -> WorldConfig {
        WorldConfig {
            generation,
            radius,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn one_object_per_column() {
        let world = generate_world(&config(GenerationMethod::Waves, 5));
        assert_eq!(world.len(), 11 * 11);
    }

    #[test]
    fn default_world_has_ten_thousand_two_hundred_one_objects() {
        let world = generate_world(&WorldConfig::default());
        assert_eq!(world.len(), 101 * 101);
    }

    #[test]
    fn waves_heights_follow_the_formula() {
        let world = generate_world(&config(GenerationMethod::Waves, 20));
        // sin(0) * 3 + cos(0) * 2 = 2
        assert!(world.get_object_at(VoxelCoordinate::new(0, 2, 0)).is_some());
        // sin(1.5) * 3 + cos(0) * 2 ≈ 4.99, truncated to 4
        assert!(world.get_object_at(VoxelCoordinate::new(15, 4, 0)).is_some());
        // sin(-1.5) * 3 + cos(0) * 2 ≈ -0.99, truncated to 0
        assert!(world.get_object_at(VoxelCoordinate::new(-15, 0, 0)).is_some());
    }

    #[test]
    fn flat_world_sits_at_height_zero() {
        let world = generate_world(&config(GenerationMethod::Flat, 4));
        assert!(world.all().all(|(coordinate, _)| coordinate.y == 0));
    }

    #[test]
    fn colors_alternate_in_a_checkerboard() {
        let cfg = config(GenerationMethod::Flat, 2);
        let world = generate_world(&cfg);
        for (coordinate, object) in world.all() {
            let expected = if (coordinate.x + coordinate.z) % 2 == 0 {
                cfg.primary_color
            } else {
                cfg.secondary_color
            };
            assert_eq!(object.color, expected, "at {coordinate:?}");
        }
    }

    #[test]
    fn perlin_heights_stay_within_amplitude() {
        let cfg = config(GenerationMethod::Perlin, 10);
        let world = generate_world(&cfg);
        assert_eq!(world.len(), 21 * 21);
        let bound = cfg.perlin_amplitude.ceil() as i32;
        assert!(world.all().all(|(coordinate, _)| coordinate.y.abs() <= bound));
    }

    #[test]
    fn negative_radius_generates_nothing() {
        assert!(generate_world(&config(GenerationMethod::Waves, -1)).is_empty());
    }

    #[test]
    fn most_negative_radius_generates_nothing() {
        assert!(generate_world(&config(GenerationMethod::Flat, i32::MIN)).is_empty());
    }
}
