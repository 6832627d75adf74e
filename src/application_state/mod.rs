//! # Application State Management
//!
//! This module handles the application's state management, including:
//! - Window creation
//! - Input handling
//! - Application lifecycle events
//! - Driving one frame tick per event-loop iteration

pub mod input_manager;
pub mod input_state;

use std::sync::Arc;

use input_manager::InputManager;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    config::EngineConfig,
    engine_state::{rendering::Renderer, EngineState},
    error::SceneError,
};

const WINDOW_TITLE: &str = "Voxel Scene";

/// The main application state container that manages the application's lifecycle.
///
/// It implements `ApplicationHandler` to turn window events into input for the
/// engine state, and runs one frame tick each time the event loop is about to
/// wait.
pub struct ApplicationState {
    /// Settings used to build the engine state once a window exists
    config: EngineConfig,

    /// The backend frames are handed to
    renderer: Box<dyn Renderer>,

    /// The initialized application state, if the application has started
    pub state: Option<InitializedApplicationState>,

    /// The error that stopped the event loop, if any
    error: Option<SceneError>,
}

/// Represents the fully initialized and running state of the application.
pub struct InitializedApplicationState {
    /// The scene state and logic
    pub engine_state: EngineState,

    /// Handle to the application window
    pub window: Arc<Window>,

    /// Manages input state and event processing
    pub input_manager: InputManager,
}

impl ApplicationState {
    /// Creates an application that will draw with `renderer` once resumed.
    pub fn new(config: EngineConfig, renderer: Box<dyn Renderer>) -> Self {
        Self {
            config,
            renderer,
            state: None,
            error: None,
        }
    }

    /// Takes the error that stopped the event loop, if there was one.
    pub fn take_error(&mut self) -> Option<SceneError> {
        self.error.take()
    }

    /// Creates the window and the engine state sized to it.
    fn initialize_application_state(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), SceneError> {
        let window_attrs = Window::default_attributes().with_title(WINDOW_TITLE);
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        log::info!("Window created at {}x{}", size.width, size.height);

        let engine_state = EngineState::new(&self.config, size.width, size.height);
        self.renderer.resize(size.width, size.height);

        self.state = Some(InitializedApplicationState {
            engine_state,
            window,
            input_manager: InputManager::new(),
        });
        Ok(())
    }
}

impl ApplicationHandler for ApplicationState {
    /// Creates the window and engine state the first time the application is
    /// resumed.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        if let Err(e) = self.initialize_application_state(event_loop) {
            log::error!("Failed to start: {e}");
            self.error = Some(e);
            event_loop.exit();
        }
    }

    /// Handles window-related events such as resize, focus changes, and input events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        state.input_manager.intake_input(&event);

        match event {
            WindowEvent::Resized(size) => {
                state.engine_state.resize_surface(size.width, size.height);
                self.renderer.resize(size.width, size.height);
            }
            WindowEvent::Focused(false) => {
                state.input_manager.release_all();
            }
            WindowEvent::RedrawRequested => {
                state.engine_state.render(self.renderer.as_mut());
            }
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            _ => (),
        }
    }

    /// Runs one frame tick: input, movement, picking, then a redraw request.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let processed_input = state.input_manager.get_and_reset_processed_input();
            state.engine_state.set_input_commands(processed_input);
            state.engine_state.process_input();

            state.window.request_redraw();
        }
    }
}
