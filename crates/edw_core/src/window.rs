// crates/edw_core/src/window.rs

use std::cell::Cell;
use std::rc::Rc;

use edw_shared::{JoystickId, Position, Size};
use tracing::{debug, info};

use crate::backend::{Backend, InputEvent};
use crate::config::WindowConfig;
use crate::error::Result;
use crate::frame_timer::FrameTimer;
use crate::input::Input;

/// A zero-argument unit of work run at show-time or once per frame.
pub type Behavior = Box<dyn FnMut()>;

#[derive(Default)]
struct ControlState {
    close_requested: Cell<bool>,
    delta_time: Cell<f32>,
    full_screen_request: Cell<Option<bool>>,
}

/// Cloneable handle to the bits of a window that behaviors and input
/// callbacks need while the window itself is busy running the loop.
#[derive(Clone, Default)]
pub struct WindowControl {
    state: Rc<ControlState>,
}

impl WindowControl {
    /// Stop the frame loop at its next iteration check.
    pub fn close(&self) {
        self.state.close_requested.set(true);
    }

    pub fn is_close_requested(&self) -> bool {
        self.state.close_requested.get()
    }

    /// Seconds elapsed between the previous frame and the current one.
    pub fn delta_time(&self) -> f32 {
        self.state.delta_time.get()
    }

    /// Ask for fullscreen on or off. Applied at the start of the next frame.
    pub fn set_full_screen(&self, full_screen: bool) {
        self.state.full_screen_request.set(Some(full_screen));
    }

    fn set_delta_time(&self, dt: f32) {
        self.state.delta_time.set(dt);
    }

    fn take_full_screen_request(&self) -> Option<bool> {
        self.state.full_screen_request.take()
    }
}

/// Owns a native window, its input registry and the behaviors it runs.
pub struct Window<B: Backend> {
    backend: B,
    position: Position,
    size: Size,
    full_screen: bool,

    init_behaviors: Vec<Behavior>,
    frame_behaviors: Vec<Behavior>,

    input: Input,
    control: WindowControl,
    timer: FrameTimer,
}

impl<B: Backend> Window<B> {
    /// Wrap an already created backend. The backend is expected to sit at
    /// the configured geometry.
    pub fn with_backend(backend: B, config: &WindowConfig) -> Self {
        let mut window = Self {
            backend,
            position: config.position,
            size: config.size,
            full_screen: false,
            init_behaviors: Vec::new(),
            frame_behaviors: Vec::new(),
            input: Input::new(),
            control: WindowControl::default(),
            timer: FrameTimer::new(),
        };

        for &id in &config.joysticks {
            window.add_joystick(id);
        }
        window
    }

    pub fn add_init_behavior(&mut self, behavior: impl FnMut() + 'static) {
        self.init_behaviors.push(Box::new(behavior));
    }

    pub fn add_frame_behavior(&mut self, behavior: impl FnMut() + 'static) {
        self.frame_behaviors.push(Box::new(behavior));
    }

    pub fn add_joystick(&mut self, id: JoystickId) {
        self.input.add_joystick_from(id, &mut self.backend);
    }

    /// Run init behaviors once, then frames until a close is requested.
    ///
    /// Each frame: frame behaviors, joystick polling, buffer swap, event polling.
    pub fn show(&mut self) -> Result<()> {
        for behavior in self.init_behaviors.iter_mut() {
            behavior();
        }

        self.timer.reset();
        while !self.control.is_close_requested() {
            self.control.set_delta_time(self.timer.tick());
            if let Some(full_screen) = self.control.take_full_screen_request() {
                self.set_full_screen(full_screen);
            }

            for behavior in self.frame_behaviors.iter_mut() {
                behavior();
            }

            self.input.process_joysticks(&mut self.backend);

            self.backend.swap_buffers()?;

            let input = &mut self.input;
            let control = &self.control;
            self.backend.poll_events(&mut |event| match event {
                InputEvent::CloseRequested => control.close(),
                other => input.handle_event(&other),
            });
        }

        info!("window loop finished");
        Ok(())
    }

    pub fn close(&self) {
        self.control.close();
    }

    pub fn control(&self) -> WindowControl {
        self.control.clone()
    }

    pub fn delta_time(&self) -> f32 {
        self.control.delta_time()
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut Input {
        &mut self.input
    }

    /// Read-only access to the native backend, e.g. for issuing rendering
    /// calls against its graphics context.
    pub fn handle(&self) -> &B {
        &self.backend
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    /// Apply a new client size. Leaves fullscreen first so windowed and
    /// fullscreen geometry are never active together.
    pub fn resize(&mut self, size: Size) {
        if self.is_full_screen() {
            self.set_full_screen(false);
        }
        debug!(width = size.width, height = size.height, "resizing window");
        self.backend.set_size(size);
        self.size = size;
    }

    pub fn move_to(&mut self, position: Position) {
        self.backend.set_position(position);
        self.position = position;
    }

    /// Enter or leave fullscreen on the primary monitor. No-op if already in
    /// the requested state. Entering remembers the windowed geometry; leaving
    /// restores exactly that one snapshot.
    pub fn set_full_screen(&mut self, full_screen: bool) {
        if full_screen == self.is_full_screen() {
            return;
        }

        if full_screen {
            self.position = self.backend.position();
            self.size = self.backend.size();
            info!(position = ?self.position, size = ?self.size, "entering fullscreen");
            self.backend.enter_fullscreen();
        } else {
            info!(position = ?self.position, size = ?self.size, "leaving fullscreen");
            self.backend.exit_fullscreen(self.position, self.size);
        }

        self.full_screen = full_screen;
    }

    /// Hide or show the title bar. Only touches the native attribute when it
    /// differs from the requested state.
    pub fn set_title_bar_hidden(&mut self, hidden: bool) {
        let decorated = !hidden;
        if self.backend.is_decorated() != decorated {
            self.backend.set_decorated(decorated);
        }
    }

    pub fn set_title_bar_shown(&mut self, shown: bool) {
        self.set_title_bar_hidden(!shown);
    }

    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }
}

impl<B: Backend> Drop for Window<B> {
    fn drop(&mut self) {
        self.close();
    }
}
