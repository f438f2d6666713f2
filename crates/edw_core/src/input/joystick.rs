// crates/edw_core/src/input/joystick.rs
//! Joystick polling: level-to-edge conversion for buttons.
//!
//! Platforms report joystick buttons as a state array, not as events, so the
//! registry keeps the previous frame's array and diffs against it.

use edw_shared::{Action, JoystickId};

/// Current state of one joystick as read from the device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoystickSnapshot {
    /// `Action::Press` or `Action::Release` per button index.
    pub buttons: Vec<Action>,
    /// Raw axis values, usually in `[-1.0, 1.0]`.
    pub axes: Vec<f32>,
}

impl JoystickSnapshot {
    pub fn new(buttons: Vec<Action>, axes: Vec<f32>) -> Self {
        Self { buttons, axes }
    }
}

/// Anything that can report joystick state. Returns `None` when no device
/// occupies the slot.
pub trait JoystickSource {
    fn joystick(&mut self, id: JoystickId) -> Option<JoystickSnapshot>;
}

/// Per-device state remembered between polls.
#[derive(Debug, Clone, Default)]
pub(crate) struct JoystickState {
    previous_buttons: Vec<Action>,
    previous_axes: Vec<f32>,
}

impl JoystickState {
    pub(crate) fn with_layout(button_count: usize, axis_count: usize) -> Self {
        Self {
            previous_buttons: vec![Action::Release; button_count],
            previous_axes: vec![0.0; axis_count],
        }
    }

    /// Compare `current` against the previous poll, report every changed
    /// button as an edge, then remember `current`.
    ///
    /// The stored buffer follows the device layout; buttons appearing for the
    /// first time start out released.
    pub(crate) fn for_each_button_edge(
        &mut self,
        current: &[Action],
        mut on_edge: impl FnMut(usize, Action),
    ) {
        if self.previous_buttons.len() != current.len() {
            self.previous_buttons.resize(current.len(), Action::Release);
        }

        for (index, (&now, previous)) in current
            .iter()
            .zip(self.previous_buttons.iter_mut())
            .enumerate()
        {
            if now != *previous {
                if matches!(now, Action::Press | Action::Release) {
                    on_edge(index, now);
                }
                *previous = now;
            }
        }
    }

    pub(crate) fn store_axes(&mut self, current: &[f32]) {
        self.previous_axes.clear();
        self.previous_axes.extend_from_slice(current);
    }

    #[cfg(test)]
    pub(crate) fn previous_buttons(&self) -> &[Action] {
        &self.previous_buttons
    }

    #[cfg(test)]
    pub(crate) fn previous_axes(&self) -> &[f32] {
        &self.previous_axes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(state: &mut JoystickState, current: &[Action]) -> Vec<(usize, Action)> {
        let mut out = Vec::new();
        state.for_each_button_edge(current, |i, a| out.push((i, a)));
        out
    }

    #[test]
    fn press_then_hold_then_release() {
        let mut state = JoystickState::with_layout(2, 0);
        use Action::*;

        assert_eq!(edges(&mut state, &[Press, Release]), vec![(0, Press)]);
        assert!(edges(&mut state, &[Press, Release]).is_empty());
        assert_eq!(edges(&mut state, &[Release, Release]), vec![(0, Release)]);
    }

    #[test]
    fn buffer_grows_to_device_layout() {
        let mut state = JoystickState::default();
        let mut current = vec![Action::Release; 20];
        current[19] = Action::Press;

        assert_eq!(edges(&mut state, &current), vec![(19, Action::Press)]);
        assert_eq!(state.previous_buttons().len(), 20);
    }

    #[test]
    fn buffer_shrinks_when_device_reports_fewer_buttons() {
        let mut state = JoystickState::with_layout(16, 4);
        assert!(edges(&mut state, &[Action::Release; 4]).is_empty());
        assert_eq!(state.previous_buttons().len(), 4);
    }

    #[test]
    fn axes_are_stored_verbatim() {
        let mut state = JoystickState::with_layout(0, 4);
        state.store_axes(&[0.5, -0.25, 0.0, 1.0, 0.75, -1.0]);
        assert_eq!(state.previous_axes(), &[0.5, -0.25, 0.0, 1.0, 0.75, -1.0]);
    }
}
