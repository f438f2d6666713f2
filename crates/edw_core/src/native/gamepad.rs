// crates/edw_core/src/native/gamepad.rs

use edw_shared::{Action, JoystickId};
use gilrs::{Axis, Button, EventType, Gilrs};
use tracing::info;

use crate::input::JoystickSnapshot;

/// Button index order reported to the registry (standard gamepad layout).
const BUTTONS: [Button; 15] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadRight,
    Button::DPadDown,
    Button::DPadLeft,
];

const AXES: [Axis; 6] = [
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::LeftZ,
    Axis::RightZ,
];

/// gilrs only updates gamepad state while its event queue is drained.
pub(crate) fn drain_events(gilrs: &mut Gilrs) {
    while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
        match event {
            EventType::Connected => {
                info!(gamepad = %id, name = gilrs.gamepad(id).name(), "gamepad connected")
            }
            EventType::Disconnected => info!(gamepad = %id, "gamepad disconnected"),
            _ => {}
        }
    }
}

/// State of the gamepad in slot `id`, i.e. the `id`-th connected device.
pub(crate) fn snapshot(gilrs: &Gilrs, id: JoystickId) -> Option<JoystickSnapshot> {
    let (_, gamepad) = gilrs.gamepads().nth(id.slot())?;

    let buttons = BUTTONS
        .iter()
        .map(|&button| Action::from_pressed(gamepad.is_pressed(button)))
        .collect();
    let axes = AXES.iter().map(|&axis| gamepad.value(axis)).collect();

    Some(JoystickSnapshot::new(buttons, axes))
}
