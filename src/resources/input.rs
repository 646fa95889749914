//! Per-frame input resource.
//!
//! [`FrameInput`] holds the events polled by the backend since the previous
//! frame, plus the pointer position sampled once per frame. Input systems
//! read it; nothing in the pipeline writes it.
use bevy_ecs::prelude::*;

use crate::events::input::InputEvent;

#[derive(Resource, Debug, Clone, Default)]
pub struct FrameInput {
    /// Events in the order the backend reported them.
    pub events: Vec<InputEvent>,
    /// Pointer position in screen coordinates.
    pub pointer: (f32, f32),
}

impl FrameInput {
    /// Replace the previous frame's input.
    pub fn set(&mut self, events: Vec<InputEvent>, pointer: (f32, f32)) {
        self.events = events;
        self.pointer = pointer;
    }

    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::input::Key;

    #[test]
    fn test_frameinput_default_is_empty() {
        let input = FrameInput::default();
        assert!(input.events.is_empty());
        assert_eq!(input.pointer, (0.0, 0.0));
        assert!(!input.quit_requested());
    }

    #[test]
    fn test_set_replaces_previous_frame() {
        let mut input = FrameInput::default();
        input.set(vec![InputEvent::key_down(Key::W)], (1.0, 2.0));
        input.set(vec![InputEvent::Quit], (3.0, 4.0));
        assert_eq!(input.events, vec![InputEvent::Quit]);
        assert_eq!(input.pointer, (3.0, 4.0));
        assert!(input.quit_requested());
    }
}
