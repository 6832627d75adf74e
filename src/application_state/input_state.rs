//! # Input State
//!
//! This module defines the input state types produced by the input manager
//! once per frame.

use std::collections::HashMap;

use winit::{dpi::PhysicalPosition, keyboard::KeyCode};

/// Represents the state of a key over the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawInputState {
    /// Key is not pressed
    #[default]
    NotPressed,
    /// Key was just pressed this frame
    Pressed,
    /// Key has been held down for multiple frames
    Held,
    /// Key was just released this frame
    Released,
}

impl RawInputState {
    /// Determines if the key is actively down (either pressed or held)
    pub fn is_active(&self) -> bool {
        matches!(self, RawInputState::Pressed | RawInputState::Held)
    }

    /// Derives the transition from the previous and current down states
    pub fn from_raw_states(previous: bool, current: bool) -> Self {
        match (previous, current) {
            (false, true) => RawInputState::Pressed,
            (true, true) => RawInputState::Held,
            (true, false) => RawInputState::Released,
            (false, false) => RawInputState::NotPressed,
        }
    }
}

/// A snapshot of the processed input for one frame.
#[derive(Debug, Clone, Default)]
pub struct ProcessedInputState {
    /// Current state of all tracked keyboard keys
    pub keyboard_states: HashMap<KeyCode, RawInputState>,

    /// Last known cursor position in physical pixels, `None` when the cursor
    /// is outside the window
    pub cursor_position: Option<PhysicalPosition<f64>>,
}

impl ProcessedInputState {
    /// Gets the state of a keyboard key
    pub fn get_key_state(&self, key: KeyCode) -> RawInputState {
        self.keyboard_states.get(&key).copied().unwrap_or_default()
    }

    /// Gets the last known cursor position
    pub fn get_cursor_position(&self) -> Option<PhysicalPosition<f64>> {
        self.cursor_position
    }
}
