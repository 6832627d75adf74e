//! # Engine State Module
//!
//! The per-session state of the scene and the frame update that drives it.
//!
//! ## Key Components
//!
//! * `EngineState` - The context object owning the camera, world and highlight
//! * `camera_state` - Camera placement, projection and pan input
//! * `picking` - Cursor-to-voxel queries
//! * `rendering` - The interface to whatever draws the frame
//! * `voxels` - Voxel coordinates, objects, the world store and generation
//!
//! ## Frame Order
//!
//! Each tick runs in a fixed order on a single thread:
//! 1. `set_input_commands` records the frame's keys and cursor
//! 2. `process_input` pans the camera, then re-picks the highlighted voxel
//! 3. `render` hands the frame's matrices and instances to the renderer

use cgmath::Point2;
use winit::{dpi::PhysicalPosition, keyboard::KeyCode};

use camera_state::CameraState;
use picking::Viewport;
use rendering::{FrameData, InstanceRaw, Renderer};
use voxels::{
    coordinate::VoxelCoordinate,
    generation::generate_world,
    object::{Color, VoxelObject},
    world::VoxelWorld,
};

use crate::{application_state::input_state::ProcessedInputState, config::EngineConfig};

pub mod camera_state;
pub mod picking;
pub mod rendering;
pub mod voxels;

/// The state of one running scene.
///
/// The engine state is passed by reference to each frame update rather than
/// living in globals; there is one per session.
///
/// # Examples
///
/// ```
/// use voxel_scene::{config::EngineConfig, engine_state::EngineState};
///
/// let mut engine_state = EngineState::new(&EngineConfig::default(), 1280, 720);
///
/// // One frame tick
/// engine_state.process_input();
/// let frame = engine_state.frame_data();
/// assert_eq!(frame.instances.len(), engine_state.world.len());
/// ```
pub struct EngineState {
    /// Camera state managing position, orientation and movement
    pub camera_state: CameraState,
    /// The voxel world containing every placed object
    pub world: VoxelWorld,
    /// Current player actions derived from input
    pub player_actions: PlayerAction,
    /// The voxel under the cursor, recomputed every frame
    pub highlighted: Option<VoxelCoordinate>,
    /// Last cursor position in physical pixels
    cursor_position: Option<PhysicalPosition<f64>>,
    /// Maps cursor pixels to normalized device coordinates
    viewport: Viewport,
    /// Color of the highlight marker
    highlight_color: Color,
}

impl EngineState {
    /// Creates a new engine state, generating the world and placing the camera.
    ///
    /// # Arguments
    ///
    /// * `config` - Camera, world and highlight settings
    /// * `width` - Initial drawable width in pixels
    /// * `height` - Initial drawable height in pixels
    pub fn new(config: &EngineConfig, width: u32, height: u32) -> Self {
        let world = generate_world(&config.world);
        let camera_state = CameraState::new(&config.camera, width, height);

        Self {
            camera_state,
            world,
            player_actions: PlayerAction::default(),
            highlighted: None,
            cursor_position: None,
            viewport: Viewport::new(width, height),
            highlight_color: config.highlight_color,
        }
    }

    /// Resizes the viewport and projection when the drawable size changes.
    ///
    /// Zero-sized surfaces (a minimized window) are ignored.
    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("Ignoring resize to {width}x{height}");
            return;
        }
        log::debug!("Resizing surface to {width}x{height}");
        self.viewport.resize(width, height);
        self.camera_state.resize(width, height);
    }

    /// Sets the input commands for the next frame.
    ///
    /// # Arguments
    /// * `input` - The processed input state to use for setting commands
    pub fn set_input_commands(&mut self, input: ProcessedInputState) {
        self.player_actions = Self::translate_processed_input(&input);
        self.cursor_position = input.get_cursor_position();
    }

    /// Applies this frame's movement and recomputes the highlighted voxel.
    pub fn process_input(&mut self) {
        self.camera_state.intake_actions(&self.player_actions);
        self.camera_state.update();
        self.update_highlight();
    }

    /// Re-picks the voxel under the last known cursor position.
    fn update_highlight(&mut self) {
        let ndc = self.cursor_position.and_then(|position| {
            self.viewport
                .to_ndc(Point2::new(position.x as f32, position.y as f32))
        });

        let highlighted = picking::pick(
            ndc,
            &self.camera_state.camera,
            &self.camera_state.projection,
            &self.world,
        );
        if highlighted != self.highlighted {
            log::debug!("Highlighted voxel changed to {highlighted:?}");
        }
        self.highlighted = highlighted;
    }

    /// Assembles everything the renderer needs for the current frame.
    ///
    /// The highlight marker, when present, is the first instance.
    pub fn frame_data(&self) -> FrameData {
        let marker = self
            .highlighted
            .map(|coordinate| VoxelObject::cube(self.highlight_color, coordinate));

        let instances = marker
            .iter()
            .chain(self.world.all().map(|(_, object)| object))
            .map(|object| InstanceRaw::new(object.model_matrix(), object.color))
            .collect();

        FrameData {
            camera: self.camera_state.camera_uniform,
            instances,
            highlighted: self.highlighted,
        }
    }

    /// Renders the current frame with `renderer`.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(&self.frame_data());
    }

    /// Translates the processed input state into player actions.
    ///
    /// Arrow keys and WASD both pan the camera.
    fn translate_processed_input(input: &ProcessedInputState) -> PlayerAction {
        let active = |keys: [KeyCode; 2]| {
            keys.iter()
                .any(|&key| input.get_key_state(key).is_active())
        };

        PlayerAction {
            move_forward: active([KeyCode::ArrowUp, KeyCode::KeyW]),
            move_backward: active([KeyCode::ArrowDown, KeyCode::KeyS]),
            move_left: active([KeyCode::ArrowLeft, KeyCode::KeyA]),
            move_right: active([KeyCode::ArrowRight, KeyCode::KeyD]),
        }
    }
}

/// Represents player actions derived from input
///
/// Each flag is true while the matching pan key is pressed or held.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerAction {
    move_forward: bool,
    move_backward: bool,
    move_left: bool,
    move_right: bool,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::{application_state::input_state::RawInputState, config::WorldConfig};

    fn flat_config(radius: i32) -> EngineConfig {
        EngineConfig {
            world: WorldConfig {
                generation: voxels::generation::GenerationMethod::Flat,
                radius,
                ..WorldConfig::default()
            },
            ..EngineConfig::default()
        }
    }

    fn input(keys: &[(KeyCode, RawInputState)], cursor: Option<(f64, f64)>) -> ProcessedInputState {
        ProcessedInputState {
            keyboard_states: keys.iter().copied().collect::<HashMap<_, _>>(),
            cursor_position: cursor.map(|(x, y)| PhysicalPosition::new(x, y)),
        }
    }

    #[test]
    fn arrows_and_wasd_map_to_the_same_actions() {
        let arrows = EngineState::translate_processed_input(&input(
            &[
                (KeyCode::ArrowUp, RawInputState::Held),
                (KeyCode::ArrowLeft, RawInputState::Pressed),
            ],
            None,
        ));
        let wasd = EngineState::translate_processed_input(&input(
            &[(KeyCode::KeyW, RawInputState::Pressed), (KeyCode::KeyA, RawInputState::Held)],
            None,
        ));

        assert_eq!(arrows, wasd);
        assert!(arrows.move_forward && arrows.move_left);
        assert!(!arrows.move_backward && !arrows.move_right);
    }

    #[test]
    fn released_keys_do_not_move() {
        let actions = EngineState::translate_processed_input(&input(
            &[(KeyCode::ArrowDown, RawInputState::Released)],
            None,
        ));
        assert_eq!(actions, PlayerAction::default());
    }

    #[test]
    fn cursor_at_screen_center_highlights_above_the_ground() {
        let mut config = flat_config(5);
        config.camera.position = [0.0, 20.0, 0.1];
        config.camera.look_at = [0.0, 0.0, 0.0];
        let mut engine_state = EngineState::new(&config, 800, 600);

        engine_state.set_input_commands(input(&[], Some((400.0, 300.0))));
        engine_state.process_input();

        assert_eq!(engine_state.highlighted, Some(VoxelCoordinate::new(0, 1, 0)));
    }

    #[test]
    fn cursor_leaving_clears_the_highlight() {
        let mut config = flat_config(5);
        config.camera.position = [0.0, 20.0, 0.1];
        let mut engine_state = EngineState::new(&config, 800, 600);

        engine_state.set_input_commands(input(&[], Some((400.0, 300.0))));
        engine_state.process_input();
        assert!(engine_state.highlighted.is_some());

        engine_state.set_input_commands(input(&[], None));
        engine_state.process_input();
        assert_eq!(engine_state.highlighted, None);
    }

    #[test]
    fn frame_data_puts_highlight_marker_first() {
        let mut config = flat_config(2);
        config.camera.position = [0.0, 20.0, 0.1];
        let mut engine_state = EngineState::new(&config, 800, 600);

        let frame = engine_state.frame_data();
        assert_eq!(frame.instances.len(), 25);
        assert_eq!(frame.highlighted, None);

        engine_state.set_input_commands(input(&[], Some((400.0, 300.0))));
        engine_state.process_input();
        let frame = engine_state.frame_data();

        assert_eq!(frame.instances.len(), 26);
        assert_eq!(frame.instances[0].color, config.highlight_color);
        assert_eq!(frame.instances[0].model[3], [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut engine_state = EngineState::new(&flat_config(0), 800, 600);
        let aspect = engine_state.camera_state.projection.aspect();

        engine_state.resize_surface(0, 0);
        assert_eq!(engine_state.camera_state.projection.aspect(), aspect);

        engine_state.resize_surface(600, 600);
        assert_eq!(engine_state.camera_state.projection.aspect(), 1.0);
    }
}
