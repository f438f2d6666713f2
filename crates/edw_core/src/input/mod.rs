// crates/edw_core/src/input/mod.rs
pub mod joystick;
pub mod registry;

// Re-export core types to keep the API at `crate::input::Input`
pub use joystick::{JoystickSnapshot, JoystickSource};
pub use registry::{AnalogCallback, Callback, Input, PointerCallback};
