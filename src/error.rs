//! Crate-level error types.

use std::fmt;

/// Errors produced while loading an `EngineConfig`.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config file is not valid JSON for `EngineConfig`.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Errors that stop the scene from running.
#[derive(Debug)]
pub enum SceneError {
    /// Configuration could not be loaded.
    Config(ConfigError),
    /// The winit event loop failed to start or exited abnormally.
    EventLoop(winit::error::EventLoopError),
    /// The window could not be created.
    Window(winit::error::OsError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::EventLoop(e) => write!(f, "event loop error: {e}"),
            Self::Window(e) => write!(f, "window error: {e}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::EventLoop(e) => Some(e),
            Self::Window(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<winit::error::EventLoopError> for SceneError {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SceneError {
    fn from(e: winit::error::OsError) -> Self {
        Self::Window(e)
    }
}
