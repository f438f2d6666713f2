// crates/edw_core/src/error.rs
//! Error type for window construction and presentation.
//!
//! Only two things are fatal: bringing up the platform and creating the
//! window (including its graphics surface). Everything else the window layer
//! does is absorbed silently, so this enum stays small.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindowError {
    /// `Platform::init` was called more than once in this process.
    #[error("windowing platform is already initialized")]
    AlreadyInitialized,

    #[error("failed to initialize the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create the native window: {0}")]
    Os(#[from] winit::error::OsError),

    #[error("failed to create a rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no graphics adapter is compatible with the window surface")]
    NoAdapter,

    #[error("failed to open the graphics device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("out of GPU memory while presenting a frame")]
    SurfaceOutOfMemory,

    #[error("invalid window configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WindowError>;
