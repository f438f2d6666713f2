// crates/edw_core/src/backend.rs
//! The seam between `Window` and the native windowing library.
//!
//! `Window` never talks to winit/wgpu directly. It drives a `Backend`, which
//! hands typed `InputEvent`s to a listener during `poll_events` instead of
//! calling back through an opaque user pointer.

use edw_shared::{Action, Position, Size};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::error::Result;
use crate::input::JoystickSource;

/// One low-level event produced while polling the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: KeyCode, action: Action },
    MouseButton { button: MouseButton, action: Action },
    /// Absolute cursor position in window coordinates.
    CursorMoved { x: f64, y: f64 },
    Scroll { dx: f64, dy: f64 },
    /// The user asked the window to close (title bar button, Alt+F4, ...).
    CloseRequested,
}

pub trait Backend: JoystickSource {
    /// Present the frame rendered since the last swap.
    fn swap_buffers(&mut self) -> Result<()>;

    /// Process pending platform events, handing each one to `listener`.
    /// Must not block.
    fn poll_events(&mut self, listener: &mut dyn FnMut(InputEvent));

    fn position(&self) -> Position;
    fn size(&self) -> Size;
    fn set_position(&mut self, position: Position);
    fn set_size(&mut self, size: Size);

    /// Switch to the primary monitor at its current video mode.
    fn enter_fullscreen(&mut self);
    /// Leave fullscreen and place the window at the given geometry.
    fn exit_fullscreen(&mut self, position: Position, size: Size);

    fn is_decorated(&self) -> bool;
    fn set_decorated(&mut self, decorated: bool);

    fn set_title(&mut self, title: &str);
}
