//! # Camera State Management
//!
//! This module handles all camera-related functionality including:
//! - Camera location and orientation tracking
//! - View and projection matrix calculations
//! - Player input processing for camera panning
//!
//! ## Core Components
//! - `Camera`: Represents the camera's location and orientation in 3D space
//! - `CameraController`: Handles player input and updates camera state
//! - `Projection`: Manages the camera's projection matrix
//! - `CameraUniform`: Renderer-facing representation of camera data

use camera::{Camera, CameraController, CameraUniform, Projection};
use cgmath::{Deg, Point3};

use crate::config::CameraConfig;

use super::PlayerAction;

pub mod camera;

/// Manages the complete camera system: the camera itself, its projection,
/// pan input and the uniform data handed to the renderer.
///
/// There is exactly one `CameraState` per running session.
#[derive(Debug)]
pub struct CameraState {
    /// The current camera location and orientation
    pub camera: Camera,
    /// The projection the scene is drawn with
    pub projection: Projection,
    /// Renderer-facing camera data, refreshed every frame
    pub camera_uniform: CameraUniform,
    /// Handles player input and camera movement
    pub camera_controller: CameraController,
}

impl CameraState {
    /// Creates the camera described by `config` for a viewport of the given size.
    ///
    /// The camera is placed at `config.position` and turned to face
    /// `config.look_at`.
    pub fn new(config: &CameraConfig, width: u32, height: u32) -> Self {
        let mut camera = Camera::new(Point3::from(config.position));
        camera.look_at(Point3::from(config.look_at));

        let projection = Projection::new(
            width,
            height,
            Deg(config.fovy_degrees),
            config.znear,
            config.zfar,
        );

        let mut camera_uniform = CameraUniform::new();
        camera_uniform.update_view_proj_and_pos(&camera, &projection);

        CameraState {
            camera,
            projection,
            camera_uniform,
            camera_controller: CameraController::new(config.pan_speed),
        }
    }

    /// Processes player input actions and updates the camera controller state.
    pub fn intake_actions(&mut self, actions: &PlayerAction) {
        self.camera_controller.intake_actions(actions);
    }

    /// Updates the projection for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
        self.camera_uniform
            .update_view_proj_and_pos(&self.camera, &self.projection);
    }

    /// Applies pending movement and refreshes the uniform data.
    ///
    /// This method should be called once per frame, before the frame's
    /// matrices are read.
    ///
    /// # Returns
    /// `true` if the camera moved this frame
    pub fn update(&mut self) -> bool {
        let moved = self.camera_controller.has_updates();
        if moved {
            self.camera
                .apply_controller_updates_and_reset_controller(&mut self.camera_controller);
        }
        self.camera_uniform
            .update_view_proj_and_pos(&self.camera, &self.projection);
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_camera_faces_configured_target() {
        let config = CameraConfig {
            position: [0.0, 0.0, 10.0],
            look_at: [0.0, 0.0, 0.0],
            ..CameraConfig::default()
        };
        let state = CameraState::new(&config, 800, 600);

        assert_eq!(state.camera.location, Point3::new(0.0, 0.0, 10.0));
        assert!((state.camera.get_view_vec().z + 1.0).abs() < 1e-6);
        assert!((state.projection.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn update_moves_only_when_input_is_pending() {
        let mut state = CameraState::new(&CameraConfig::default(), 800, 600);
        let start = state.camera.location;

        assert!(!state.update());
        assert_eq!(state.camera.location, start);

        state.intake_actions(&PlayerAction {
            move_forward: true,
            ..PlayerAction::default()
        });
        assert!(state.update());
        assert_ne!(state.camera.location, start);
        assert_eq!(state.camera.location.y, start.y);

        let uniform_position = state.camera_uniform.position;
        assert_eq!(uniform_position[0], state.camera.location.x);
        assert_eq!(uniform_position[2], state.camera.location.z);
    }
}
