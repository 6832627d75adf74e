//! # Input Manager
//!
//! This module handles input processing for the application, including:
//! - Keyboard state tracking for the pan keys
//! - Cursor position tracking for picking
//! - Window event processing

use std::collections::HashMap;

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use super::input_state::{ProcessedInputState, RawInputState};

/// Keys whose state is tracked between frames.
pub const KEY_CODES: [KeyCode; 8] = [
    KeyCode::ArrowUp,
    KeyCode::ArrowDown,
    KeyCode::ArrowLeft,
    KeyCode::ArrowRight,
    KeyCode::KeyW,
    KeyCode::KeyS,
    KeyCode::KeyA,
    KeyCode::KeyD,
];

/// Manages the state of the keyboard and cursor and processes input events.
pub struct InputManager {
    /// Previous state of all tracked keyboard keys
    pub keyboard_inputs_old: HashMap<KeyCode, bool>,
    /// Current state of all tracked keyboard keys
    pub keyboard_inputs_new: HashMap<KeyCode, bool>,

    /// Last cursor position inside the window
    pub cursor_position: Option<PhysicalPosition<f64>>,
}

impl InputManager {
    /// Creates a new InputManager with every tracked key released and no
    /// cursor.
    pub fn new() -> Self {
        let mut keyboard_inputs_old = HashMap::new();
        let mut keyboard_inputs_new = HashMap::new();
        for key_code in KEY_CODES {
            keyboard_inputs_old.insert(key_code, false);
            keyboard_inputs_new.insert(key_code, false);
        }

        Self {
            keyboard_inputs_old,
            keyboard_inputs_new,
            cursor_position: None,
        }
    }

    /// Copies the current key states into the old states so the next frame
    /// can detect transitions.
    pub fn move_old_states(&mut self) {
        for (key, new_state) in self.keyboard_inputs_new.iter() {
            if let Some(old_state) = self.keyboard_inputs_old.get_mut(key) {
                *old_state = *new_state;
            }
        }
    }

    /// Processes a window event and updates internal input state.
    pub fn intake_input(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => {
                self.set_key_state(*key, *state == ElementState::Pressed);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.intake_cursor(Some(*position));
            }
            WindowEvent::CursorLeft { .. } => {
                self.intake_cursor(None);
            }
            _ => {}
        }
    }

    /// Records a key as down or up. Untracked keys are ignored.
    pub fn set_key_state(&mut self, key: KeyCode, pressed: bool) {
        if let Some(key_state) = self.keyboard_inputs_new.get_mut(&key) {
            *key_state = pressed;
        }
    }

    /// Records the cursor position, or `None` when it left the window.
    pub fn intake_cursor(&mut self, position: Option<PhysicalPosition<f64>>) {
        self.cursor_position = position;
    }

    /// Creates a processed input state from the current raw boolean states.
    pub fn create_processed_input_state(&self) -> ProcessedInputState {
        let keyboard_states = self
            .keyboard_inputs_new
            .iter()
            .map(|(key, &new_state)| {
                let old_state = self.keyboard_inputs_old.get(key).copied().unwrap_or(false);
                (*key, RawInputState::from_raw_states(old_state, new_state))
            })
            .collect();

        ProcessedInputState {
            keyboard_states,
            cursor_position: self.cursor_position,
        }
    }

    /// Returns the processed input state and prepares for the next frame.
    pub fn get_and_reset_processed_input(&mut self) -> ProcessedInputState {
        let processed_input = self.create_processed_input_state();
        self.move_old_states();
        processed_input
    }

    /// Releases every key.
    ///
    /// This is called when the window loses focus to prevent stuck keys,
    /// since the matching key-up event will never arrive.
    pub fn release_all(&mut self) {
        for key_state in self.keyboard_inputs_new.values_mut() {
            *key_state = false;
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
