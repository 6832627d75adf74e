#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Scene
//!
//! A small voxel world with a panning camera and cursor-driven voxel picking.
//!
//! The crate keeps the world model and geometry separate from drawing: each
//! frame it produces camera matrices, one transform and color per placed
//! cube, and the voxel currently under the cursor, and hands them to a
//! `Renderer`.
//!
//! ## Key Modules
//!
//! * `application_state` - Window lifecycle and input handling on winit
//! * `config` - JSON-loadable scene settings
//! * `core` - Rays, cubes and ray/cube intersection
//! * `engine_state` - Camera, voxel world, picking and the per-frame update
//! * `error` - Error types for startup and configuration
//!
//! ## Usage
//!
//! ```no_run
//! fn main() -> Result<(), voxel_scene::error::SceneError> {
//!     voxel_scene::run()
//! }
//! ```
//!
//! A custom backend can be plugged in with `run_with_renderer`.

use std::path::Path;

use application_state::ApplicationState;
use config::EngineConfig;
use engine_state::rendering::{LogRenderer, Renderer};
use error::SceneError;
use log::info;
use winit::event_loop::EventLoop;

#[allow(missing_docs)]
pub mod application_state;
pub mod config;
#[allow(missing_docs)]
pub mod core;
#[allow(missing_docs)]
pub mod engine_state;
pub mod error;

/// Runs the scene with the headless `LogRenderer`.
///
/// The first command-line argument, if present, is the path of a JSON config
/// file; otherwise defaults are used.
pub fn run() -> Result<(), SceneError> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {path}");
            EngineConfig::load(Path::new(&path))?
        }
        None => {
            info!("Using default config");
            EngineConfig::default()
        }
    };

    run_with_renderer(config, Box::new(LogRenderer::new()))
}

/// Runs the scene, handing every frame to `renderer`.
///
/// Blocks until the window is closed.
pub fn run_with_renderer(
    config: EngineConfig,
    renderer: Box<dyn Renderer>,
) -> Result<(), SceneError> {
    let event_loop = EventLoop::new()?;

    let mut state = ApplicationState::new(config, renderer);
    event_loop.run_app(&mut state)?;

    match state.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
