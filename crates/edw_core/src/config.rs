// crates/edw_core/src/config.rs

use std::fs;
use std::path::Path;

use edw_shared::{JoystickId, Position, Size};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WindowError};

/// Centralized defaults for window creation.
///
/// Every field falls back to its default when missing, so an empty TOML file
/// produces the stock 600x600 window at (50, 50) with vsync and a depth buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub position: Position,
    pub size: Size,
    /// Present in lock-step with the display refresh.
    pub vsync: bool,
    /// Attach a 24-bit depth buffer to every frame.
    pub depth_buffer: bool,
    /// Joysticks registered at construction time. Empty disables polling.
    pub joysticks: Vec<JoystickId>,
    /// RGBA colour the frame is cleared to before presenting.
    pub clear_color: [f64; 4],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            position: Position::default(),
            size: Size::default(),
            vsync: true,
            depth_buffer: true,
            joysticks: vec![JoystickId::FIRST],
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl WindowConfig {
    pub fn from_toml_str(source: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|source| WindowError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}
