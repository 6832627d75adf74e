//! Scene configuration with JSON file support.
//!
//! Every section uses `#[serde(default)]`, so a file that only overrides a
//! few fields (for example just `world.generation`) still loads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    engine_state::voxels::{generation::GenerationMethod, object::Color},
    error::ConfigError,
};

/// Top-level configuration for a scene session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Camera placement, projection and movement.
    pub camera: CameraConfig,
    /// World generation parameters.
    pub world: WorldConfig,
    /// Color of the marker drawn at the highlighted voxel.
    pub highlight_color: Color,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            world: WorldConfig::default(),
            highlight_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl EngineConfig {
    /// Load a config from a JSON file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a config from a JSON string. Missing fields use defaults.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Camera projection and control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fovy_degrees: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial camera location in world space.
    pub position: [f32; 3],
    /// Point the camera initially looks at. Must differ from `position` and
    /// not lie straight above or below it.
    pub look_at: [f32; 3],
    /// Distance moved per frame while a pan key is held.
    pub pan_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fovy_degrees: 30.0,
            znear: 1.0,
            zfar: 100.0,
            position: [40.0, 50.0, 30.0],
            look_at: [0.0, 0.0, 0.0],
            pan_speed: 0.3,
        }
    }
}

/// World generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Terrain shape.
    pub generation: GenerationMethod,
    /// Columns are generated for x and z in `-radius..=radius`.
    pub radius: i32,
    /// Color of columns where `x + z` is even.
    pub primary_color: Color,
    /// Color of columns where `x + z` is odd.
    pub secondary_color: Color,
    /// Seed for `perlin` generation.
    pub perlin_seed: u32,
    /// Horizontal frequency for `perlin` generation.
    pub perlin_scale: f64,
    /// Height range for `perlin` generation.
    pub perlin_amplitude: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            generation: GenerationMethod::Waves,
            radius: 50,
            primary_color: [0.5, 0.25, 0.05, 1.0],
            secondary_color: [0.2, 0.5, 0.3, 1.0],
            perlin_seed: 0,
            perlin_scale: 0.05,
            perlin_amplitude: 6.0,
        }
    }
}
