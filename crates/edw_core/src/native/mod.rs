// crates/edw_core/src/native/mod.rs
//! winit + wgpu + gilrs implementation of `Backend`.

pub mod context;
mod events;
mod gamepad;
pub mod platform;
mod window;

pub use context::GraphicsContext;
pub use platform::Platform;
pub use window::{NativeBackend, NativeWindow};
