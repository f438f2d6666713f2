// crates/edw_core/src/input/registry.rs
//! Publish/subscribe registry for keyboard, mouse, cursor and joystick input.
//!
//! Callbacks are appended per identifier and fired in registration order.
//! There is no removal API; an identifier nobody registered simply never fires.

use std::collections::HashMap;
use std::hash::Hash;

use edw_shared::{Action, JoystickId};
use glam::DVec2;
use tracing::debug;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::joystick::{JoystickSource, JoystickState};
use crate::backend::InputEvent;

pub type Callback = Box<dyn FnMut()>;
pub type AnalogCallback = Box<dyn FnMut(f32)>;
pub type PointerCallback = Box<dyn FnMut(f64, f64)>;

#[derive(Default)]
pub struct Input {
    joysticks: Vec<JoystickId>,
    joystick_states: HashMap<JoystickId, JoystickState>,

    key_press: HashMap<KeyCode, Vec<Callback>>,
    key_release: HashMap<KeyCode, Vec<Callback>>,
    mouse_press: HashMap<MouseButton, Vec<Callback>>,
    mouse_release: HashMap<MouseButton, Vec<Callback>>,
    joystick_press: HashMap<usize, Vec<Callback>>,
    joystick_release: HashMap<usize, Vec<Callback>>,
    analog: HashMap<usize, Vec<AnalogCallback>>,
    cursor: Vec<PointerCallback>,
    scroll: Vec<PointerCallback>,

    cursor_position: DVec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Registration ---

    pub fn on_key_press(&mut self, key: KeyCode, callback: impl FnMut() + 'static) {
        self.key_press.entry(key).or_default().push(Box::new(callback));
    }

    pub fn on_key_release(&mut self, key: KeyCode, callback: impl FnMut() + 'static) {
        self.key_release.entry(key).or_default().push(Box::new(callback));
    }

    pub fn on_mouse_press(&mut self, button: MouseButton, callback: impl FnMut() + 'static) {
        self.mouse_press.entry(button).or_default().push(Box::new(callback));
    }

    pub fn on_mouse_release(&mut self, button: MouseButton, callback: impl FnMut() + 'static) {
        self.mouse_release.entry(button).or_default().push(Box::new(callback));
    }

    pub fn on_joystick_button_press(&mut self, button: usize, callback: impl FnMut() + 'static) {
        self.joystick_press.entry(button).or_default().push(Box::new(callback));
    }

    pub fn on_joystick_button_release(&mut self, button: usize, callback: impl FnMut() + 'static) {
        self.joystick_release.entry(button).or_default().push(Box::new(callback));
    }

    /// Called every poll with the raw value of `axis`, changed or not.
    pub fn on_joystick_analog_move(&mut self, axis: usize, callback: impl FnMut(f32) + 'static) {
        self.analog.entry(axis).or_default().push(Box::new(callback));
    }

    /// Called with the absolute cursor position on every motion event.
    pub fn on_cursor_position_change(&mut self, callback: impl FnMut(f64, f64) + 'static) {
        self.cursor.push(Box::new(callback));
    }

    /// Called with the scroll offsets on every wheel/trackpad event.
    pub fn on_scroll(&mut self, callback: impl FnMut(f64, f64) + 'static) {
        self.scroll.push(Box::new(callback));
    }

    /// Start polling `id`. Its state buffers size themselves to whatever the
    /// device reports.
    pub fn add_joystick(&mut self, id: JoystickId) {
        self.add_joystick_with_layout(id, 0, 0);
    }

    /// Start polling `id`, pre-sizing its state buffers from the device
    /// currently in that slot, if any.
    pub fn add_joystick_from(&mut self, id: JoystickId, source: &mut dyn JoystickSource) {
        let (buttons, axes) = source
            .joystick(id)
            .map(|s| (s.buttons.len(), s.axes.len()))
            .unwrap_or((0, 0));
        self.add_joystick_with_layout(id, buttons, axes);
    }

    fn add_joystick_with_layout(&mut self, id: JoystickId, buttons: usize, axes: usize) {
        if self.joysticks.contains(&id) {
            return;
        }
        debug!(joystick = id.0, buttons, axes, "registering joystick");
        self.joysticks.push(id);
        self.joystick_states.insert(id, JoystickState::with_layout(buttons, axes));
    }

    pub fn joysticks(&self) -> &[JoystickId] {
        &self.joysticks
    }

    /// Last absolute cursor position seen.
    pub fn cursor_position(&self) -> DVec2 {
        self.cursor_position
    }

    // --- Dispatch ---

    /// Route one platform event to the matching callbacks.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { key, action } => match action {
                Action::Press => fire(&mut self.key_press, &key),
                Action::Release => fire(&mut self.key_release, &key),
                Action::Repeat => {}
            },
            InputEvent::MouseButton { button, action } => match action {
                Action::Press => fire(&mut self.mouse_press, &button),
                Action::Release => fire(&mut self.mouse_release, &button),
                Action::Repeat => {}
            },
            InputEvent::CursorMoved { x, y } => {
                self.cursor_position = DVec2::new(x, y);
                for callback in self.cursor.iter_mut() {
                    callback(x, y);
                }
            }
            InputEvent::Scroll { dx, dy } => {
                for callback in self.scroll.iter_mut() {
                    callback(dx, dy);
                }
            }
            InputEvent::CloseRequested => {}
        }
    }

    /// Poll every registered joystick: analog axes fire unconditionally,
    /// buttons fire only on a change since the previous poll.
    /// Slots with no device are skipped.
    pub fn process_joysticks(&mut self, source: &mut dyn JoystickSource) {
        for &id in &self.joysticks {
            let Some(snapshot) = source.joystick(id) else {
                continue;
            };
            let state = self.joystick_states.entry(id).or_default();

            for (axis, &value) in snapshot.axes.iter().enumerate() {
                if let Some(callbacks) = self.analog.get_mut(&axis) {
                    for callback in callbacks.iter_mut() {
                        callback(value);
                    }
                }
            }
            state.store_axes(&snapshot.axes);

            let press = &mut self.joystick_press;
            let release = &mut self.joystick_release;
            state.for_each_button_edge(&snapshot.buttons, |index, action| match action {
                Action::Press => fire(press, &index),
                Action::Release => fire(release, &index),
                Action::Repeat => {}
            });
        }
    }
}

fn fire<K: Eq + Hash>(callbacks: &mut HashMap<K, Vec<Callback>>, id: &K) {
    if let Some(list) = callbacks.get_mut(id) {
        for callback in list.iter_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::JoystickSnapshot;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    fn logger(log: &Log, tag: &str) -> impl FnMut() + 'static {
        let log = log.clone();
        let tag = tag.to_string();
        move || log.borrow_mut().push(tag.clone())
    }

    fn key(key: KeyCode, action: Action) -> InputEvent {
        InputEvent::Key { key, action }
    }

    fn mouse(button: MouseButton, action: Action) -> InputEvent {
        InputEvent::MouseButton { button, action }
    }

    /// Scripted joystick: each poll pops the next frame.
    #[derive(Default)]
    struct FakeJoysticks {
        frames: HashMap<JoystickId, Vec<JoystickSnapshot>>,
    }

    impl FakeJoysticks {
        fn script(&mut self, id: JoystickId, frames: Vec<JoystickSnapshot>) {
            let mut frames = frames;
            frames.reverse();
            self.frames.insert(id, frames);
        }
    }

    impl JoystickSource for FakeJoysticks {
        fn joystick(&mut self, id: JoystickId) -> Option<JoystickSnapshot> {
            let frames = self.frames.get_mut(&id)?;
            if frames.len() > 1 {
                frames.pop()
            } else {
                frames.last().cloned()
            }
        }
    }

    fn buttons(pressed: &[bool]) -> JoystickSnapshot {
        JoystickSnapshot::new(
            pressed.iter().map(|&p| Action::from_pressed(p)).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn key_press_fires_only_press_callbacks_in_order() {
        let log = Log::default();
        let mut input = Input::new();
        input.on_key_press(KeyCode::KeyW, logger(&log, "w1"));
        input.on_key_press(KeyCode::KeyW, logger(&log, "w2"));
        input.on_key_press(KeyCode::KeyW, logger(&log, "w3"));
        input.on_key_release(KeyCode::KeyW, logger(&log, "w-up"));
        input.on_key_press(KeyCode::KeyS, logger(&log, "s"));

        input.handle_event(&key(KeyCode::KeyW, Action::Press));

        assert_eq!(*log.borrow(), vec!["w1", "w2", "w3"]);
    }

    #[test]
    fn key_release_and_repeat() {
        let log = Log::default();
        let mut input = Input::new();
        input.on_key_press(KeyCode::Space, logger(&log, "down"));
        input.on_key_release(KeyCode::Space, logger(&log, "up"));

        input.handle_event(&key(KeyCode::Space, Action::Repeat));
        assert!(log.borrow().is_empty());

        input.handle_event(&key(KeyCode::Space, Action::Release));
        assert_eq!(*log.borrow(), vec!["up"]);
    }

    #[test]
    fn unregistered_identifiers_are_ignored() {
        let mut input = Input::new();
        input.handle_event(&key(KeyCode::F12, Action::Press));
        input.handle_event(&mouse(MouseButton::Other(42), Action::Release));
        input.handle_event(&InputEvent::Scroll { dx: 0.0, dy: 1.0 });
    }

    #[test]
    fn mouse_release_fires_even_with_press_callbacks_registered() {
        let log = Log::default();
        let mut input = Input::new();
        input.on_mouse_press(MouseButton::Left, logger(&log, "press"));
        input.on_mouse_release(MouseButton::Left, logger(&log, "release"));

        input.handle_event(&mouse(MouseButton::Left, Action::Press));
        input.handle_event(&mouse(MouseButton::Left, Action::Release));

        assert_eq!(*log.borrow(), vec!["press", "release"]);
    }

    #[test]
    fn mouse_press_does_not_fire_release_callbacks() {
        let log = Log::default();
        let mut input = Input::new();
        input.on_mouse_release(MouseButton::Right, logger(&log, "release"));

        input.handle_event(&mouse(MouseButton::Right, Action::Press));

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn cursor_broadcasts_to_every_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut input = Input::new();
        for tag in 0..2 {
            let seen = seen.clone();
            input.on_cursor_position_change(move |x, y| seen.borrow_mut().push((tag, x, y)));
        }

        input.handle_event(&InputEvent::CursorMoved { x: 12.5, y: 300.0 });

        assert_eq!(*seen.borrow(), vec![(0, 12.5, 300.0), (1, 12.5, 300.0)]);
        assert_eq!(input.cursor_position(), DVec2::new(12.5, 300.0));
    }

    #[test]
    fn scroll_reaches_scroll_listeners() {
        let total = Rc::new(RefCell::new(0.0));
        let mut input = Input::new();
        let t = total.clone();
        input.on_scroll(move |_, dy| *t.borrow_mut() += dy);

        input.handle_event(&InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        input.handle_event(&InputEvent::Scroll { dx: 0.0, dy: -3.0 });

        assert_eq!(*total.borrow(), -2.0);
    }

    #[test]
    fn joystick_buttons_fire_on_edges_only() {
        let log = Log::default();
        let mut input = Input::new();
        input.add_joystick(JoystickId::FIRST);
        input.on_joystick_button_press(0, logger(&log, "press"));
        input.on_joystick_button_release(0, logger(&log, "release"));

        let mut source = FakeJoysticks::default();
        source.script(
            JoystickId::FIRST,
            vec![
                buttons(&[false]),
                buttons(&[true]),
                buttons(&[true]),
                buttons(&[false]),
                buttons(&[false]),
            ],
        );

        input.process_joysticks(&mut source);
        assert!(log.borrow().is_empty(), "released at start is not an edge");

        input.process_joysticks(&mut source);
        assert_eq!(*log.borrow(), vec!["press"]);

        input.process_joysticks(&mut source);
        assert_eq!(log.borrow().len(), 1, "held button fires nothing");

        input.process_joysticks(&mut source);
        input.process_joysticks(&mut source);
        assert_eq!(*log.borrow(), vec!["press", "release"]);
    }

    #[test]
    fn joystick_with_many_buttons_is_handled() {
        let log = Log::default();
        let mut input = Input::new();
        input.add_joystick(JoystickId::FIRST);
        input.on_joystick_button_press(23, logger(&log, "b23"));

        let mut pressed = vec![false; 24];
        pressed[23] = true;
        let mut source = FakeJoysticks::default();
        source.script(JoystickId::FIRST, vec![buttons(&pressed)]);

        input.process_joysticks(&mut source);
        assert_eq!(*log.borrow(), vec!["b23"]);
    }

    #[test]
    fn analog_fires_every_poll_with_raw_value() {
        let values = Rc::new(RefCell::new(Vec::new()));
        let mut input = Input::new();
        input.add_joystick(JoystickId::FIRST);
        let v = values.clone();
        input.on_joystick_analog_move(1, move |value| v.borrow_mut().push(value));

        let frame = JoystickSnapshot::new(Vec::new(), vec![0.0, 0.42, -1.0]);
        let mut source = FakeJoysticks::default();
        source.script(JoystickId::FIRST, vec![frame.clone(), frame.clone(), frame]);

        for _ in 0..3 {
            input.process_joysticks(&mut source);
        }

        assert_eq!(*values.borrow(), vec![0.42, 0.42, 0.42]);
    }

    #[test]
    fn joysticks_poll_in_registration_order_axes_before_buttons() {
        let log = Log::default();
        let mut input = Input::new();
        input.add_joystick(JoystickId(1));
        input.add_joystick(JoystickId(0));

        let l = log.clone();
        input.on_joystick_analog_move(0, move |value| l.borrow_mut().push(format!("axis{value}")));
        input.on_joystick_button_press(0, logger(&log, "btn"));

        let mut source = FakeJoysticks::default();
        source.script(
            JoystickId(1),
            vec![JoystickSnapshot::new(vec![Action::Press], vec![1.0])],
        );
        source.script(
            JoystickId(0),
            vec![JoystickSnapshot::new(vec![Action::Press], vec![0.0])],
        );

        input.process_joysticks(&mut source);

        assert_eq!(*log.borrow(), vec!["axis1", "btn", "axis0", "btn"]);
    }

    #[test]
    fn absent_joystick_is_skipped() {
        let log = Log::default();
        let mut input = Input::new();
        input.add_joystick(JoystickId(3));
        input.on_joystick_button_press(0, logger(&log, "press"));

        let mut source = FakeJoysticks::default();
        input.process_joysticks(&mut source);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn add_joystick_twice_registers_once() {
        let mut input = Input::new();
        input.add_joystick(JoystickId::FIRST);
        input.add_joystick(JoystickId::FIRST);
        assert_eq!(input.joysticks(), &[JoystickId::FIRST]);
    }

    #[test]
    fn add_joystick_from_presizes_state() {
        let mut source = FakeJoysticks::default();
        source.script(
            JoystickId::FIRST,
            vec![JoystickSnapshot::new(vec![Action::Release; 15], vec![0.0; 6])],
        );
        let mut input = Input::new();
        input.add_joystick_from(JoystickId::FIRST, &mut source);

        let state = &input.joystick_states[&JoystickId::FIRST];
        assert_eq!(state.previous_buttons().len(), 15);
        assert_eq!(state.previous_axes().len(), 6);
    }
}
