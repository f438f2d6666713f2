// crates/edw_core/src/native/events.rs

use edw_shared::Action;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use crate::backend::InputEvent;

/// Translate a winit window event into the registry's vocabulary.
/// Events the registry doesn't care about map to `None`.
pub(crate) fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::CloseRequested),
        WindowEvent::KeyboardInput { event, .. } => translate_key(event),
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::MouseButton {
            button: *button,
            action: element_action(*state),
        }),
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = match *delta {
                MouseScrollDelta::LineDelta(x, y) => (x as f64, y as f64),
                MouseScrollDelta::PixelDelta(p) => (p.x, p.y),
            };
            Some(InputEvent::Scroll { dx, dy })
        }
        _ => None,
    }
}

fn translate_key(event: &KeyEvent) -> Option<InputEvent> {
    let PhysicalKey::Code(key) = event.physical_key else {
        return None;
    };
    let action = if event.repeat {
        Action::Repeat
    } else {
        element_action(event.state)
    };
    Some(InputEvent::Key { key, action })
}

fn element_action(state: ElementState) -> Action {
    Action::from_pressed(state == ElementState::Pressed)
}
