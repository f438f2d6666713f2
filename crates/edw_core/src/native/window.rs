// crates/edw_core/src/native/window.rs

use std::sync::Arc;
use std::time::Duration;

use edw_shared::{JoystickId, Position, Size};
use tracing::{debug, info};
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, WindowBuilder};

use super::context::GraphicsContext;
use super::platform::Platform;
use super::{events, gamepad};
use crate::backend::{Backend, InputEvent};
use crate::config::WindowConfig;
use crate::error::Result;
use crate::input::{JoystickSnapshot, JoystickSource};
use crate::window::Window;

/// A window on the desktop, backed by winit and presented with wgpu.
pub type NativeWindow<'p> = Window<NativeBackend<'p>>;

/// Owns the winit window and its graphics context. Borrows the platform for
/// event pumping and gamepad polling.
pub struct NativeBackend<'p> {
    platform: &'p mut Platform,
    window: Arc<winit::window::Window>,
    gfx: GraphicsContext,
    /// Last known outer position, for platforms that can't report it.
    last_position: Position,
}

impl<'p> NativeBackend<'p> {
    pub fn new(platform: &'p mut Platform, config: &WindowConfig) -> Result<Self> {
        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.size.width, config.size.height))
            .with_position(PhysicalPosition::new(config.position.x, config.position.y))
            .build(&platform.event_loop)?;
        let window = Arc::new(window);

        let gfx = pollster::block_on(GraphicsContext::new(window.clone(), config))?;

        info!(
            title = %config.title,
            width = config.size.width,
            height = config.size.height,
            vsync = config.vsync,
            "window opened"
        );

        Ok(Self {
            platform,
            window,
            gfx,
            last_position: config.position,
        })
    }

    pub fn graphics(&self) -> &GraphicsContext {
        &self.gfx
    }

    pub fn winit_window(&self) -> &winit::window::Window {
        &self.window
    }
}

impl Drop for NativeBackend<'_> {
    fn drop(&mut self) {
        info!("window closed");
    }
}

impl JoystickSource for NativeBackend<'_> {
    fn joystick(&mut self, id: JoystickId) -> Option<JoystickSnapshot> {
        let gilrs = self.platform.gamepads.as_ref()?;
        gamepad::snapshot(gilrs, id)
    }
}

impl Backend for NativeBackend<'_> {
    fn swap_buffers(&mut self) -> Result<()> {
        self.gfx.present()
    }

    fn poll_events(&mut self, listener: &mut dyn FnMut(InputEvent)) {
        if let Some(gilrs) = self.platform.gamepads.as_mut() {
            gamepad::drain_events(gilrs);
        }

        let window_id = self.window.id();
        let gfx = &mut self.gfx;
        let last_position = &mut self.last_position;

        let status = self
            .platform
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _| {
                let Event::WindowEvent { window_id: id, event } = event else {
                    return;
                };
                if id != window_id {
                    return;
                }

                match event {
                    WindowEvent::Resized(size) => gfx.resize(size),
                    WindowEvent::Moved(p) => *last_position = Position::new(p.x, p.y),
                    other => {
                        if let Some(input_event) = events::translate(&other) {
                            listener(input_event);
                        }
                    }
                }
            });

        if let PumpStatus::Exit(code) = status {
            debug!(code, "event loop exited");
            listener(InputEvent::CloseRequested);
        }
    }

    fn position(&self) -> Position {
        self.window
            .outer_position()
            .map(|p| Position::new(p.x, p.y))
            .unwrap_or(self.last_position)
    }

    fn size(&self) -> Size {
        let size = self.window.inner_size();
        Size::new(size.width, size.height)
    }

    fn set_position(&mut self, position: Position) {
        self.window.set_outer_position(PhysicalPosition::new(position.x, position.y));
        self.last_position = position;
    }

    fn set_size(&mut self, size: Size) {
        // Some platforms apply the size immediately; others report it later via `Resized`.
        if let Some(applied) = self
            .window
            .request_inner_size(PhysicalSize::new(size.width, size.height))
        {
            self.gfx.resize(applied);
        }
    }

    fn enter_fullscreen(&mut self) {
        let monitor = self.window.primary_monitor();
        self.window.set_fullscreen(Some(Fullscreen::Borderless(monitor)));
    }

    fn exit_fullscreen(&mut self, position: Position, size: Size) {
        self.window.set_fullscreen(None);
        self.set_position(position);
        self.set_size(size);
    }

    fn is_decorated(&self) -> bool {
        self.window.is_decorated()
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.window.set_decorations(decorated);
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}

impl<'p> Window<NativeBackend<'p>> {
    /// Open a desktop window on `platform` and register the configured joysticks.
    pub fn open(platform: &'p mut Platform, config: &WindowConfig) -> Result<Self> {
        let backend = NativeBackend::new(platform, config)?;
        Ok(Window::with_backend(backend, config))
    }
}
