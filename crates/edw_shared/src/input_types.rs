// crates/edw_shared/src/input_types.rs
//! Small input vocabulary used by the registry and by backends.

use serde::{Deserialize, Serialize};

/// Edge carried by a raw platform event.
///
/// `Repeat` comes from key auto-repeat and never dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Press,
    Release,
    Repeat,
}

impl Action {
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Action::Press
        } else {
            Action::Release
        }
    }
}

/// Joystick slot. Slot N is the N-th connected device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoystickId(pub u32);

impl JoystickId {
    /// The joystick every window listens to by default.
    pub const FIRST: JoystickId = JoystickId(0);

    pub fn slot(self) -> usize {
        self.0 as usize
    }
}
