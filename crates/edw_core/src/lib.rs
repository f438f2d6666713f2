// crates/edw_core/src/lib.rs

// Logic Modules
pub mod backend;
pub mod config;
pub mod error;
pub mod frame_timer;
pub mod input;
pub mod window;

// Native implementation (winit + wgpu + gilrs)
pub mod native;

pub use backend::{Backend, InputEvent};
pub use config::WindowConfig;
pub use error::{Result, WindowError};
pub use input::{Input, JoystickSnapshot, JoystickSource};
pub use native::{NativeBackend, NativeWindow, Platform};
pub use window::{Behavior, Window, WindowControl};

pub use edw_shared::{Action, JoystickId, Position, Size};

// Re-export the key/button vocabulary so callers don't need a direct winit dependency.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;
