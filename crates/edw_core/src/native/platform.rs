// crates/edw_core/src/native/platform.rs

use std::sync::atomic::{AtomicBool, Ordering};

use gilrs::Gilrs;
use tracing::{info, warn};
use winit::event_loop::EventLoop;

use crate::error::{Result, WindowError};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Process-wide windowing state: the winit event loop and the gamepad context.
///
/// Acquired once per process and shared by every window opened from it, so
/// closing a window never tears down the platform underneath other windows.
pub struct Platform {
    pub(crate) event_loop: EventLoop<()>,
    pub(crate) gamepads: Option<Gilrs>,
}

impl Platform {
    /// Bring up the windowing library. Only one `Platform` may exist per
    /// process; later calls fail with `WindowError::AlreadyInitialized`.
    pub fn init() -> Result<Self> {
        if INITIALIZED.swap(true, Ordering::SeqCst) {
            return Err(WindowError::AlreadyInitialized);
        }

        let event_loop = EventLoop::new()?;

        // Joysticks are optional: without a gamepad backend every slot reads as absent.
        let gamepads = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(err) => {
                warn!(%err, "gamepad support unavailable");
                None
            }
        };

        info!(gamepads = gamepads.is_some(), "windowing platform initialized");
        Ok(Self {
            event_loop,
            gamepads,
        })
    }

    pub fn has_gamepad_support(&self) -> bool {
        self.gamepads.is_some()
    }
}

impl Drop for Platform {
    fn drop(&mut self) {
        info!("windowing platform shut down");
    }
}
