//! Backend-neutral input events.
//!
//! The windowing backend translates its raw events into [`InputEvent`]s and
//! hands them to [`Simulation::advance`](crate::game::Simulation::advance)
//! once per frame. Keys the simulation does not care about are reported as
//! [`Key::Other`] and ignored by every system.

/// Physical keys the simulation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Space,
    LeftShift,
    /// Any key without a binding.
    Other,
}

impl Key {
    /// Unit impulse this key applies to a controller axis on key-down.
    ///
    /// Up/W decrement y, Down/S increment it, Left/A decrement x and
    /// Right/D increment it. Non-directional keys return `None`.
    pub fn axis(self) -> Option<(f32, f32)> {
        match self {
            Key::Up | Key::W => Some((0.0, -1.0)),
            Key::Down | Key::S => Some((0.0, 1.0)),
            Key::Left | Key::A => Some((-1.0, 0.0)),
            Key::Right | Key::D => Some((1.0, 0.0)),
            _ => None,
        }
    }
}

/// One raw event from the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key, repeat: bool },
}

impl InputEvent {
    pub fn key_down(key: Key) -> Self {
        InputEvent::KeyDown { key, repeat: false }
    }

    pub fn key_up(key: Key) -> Self {
        InputEvent::KeyUp { key, repeat: false }
    }

    /// Controller impulse for this event: the key's axis on key-down, its
    /// exact inverse on key-up. Auto-repeat events carry no impulse.
    pub fn impulse(&self) -> Option<(f32, f32)> {
        match *self {
            InputEvent::KeyDown { key, repeat: false } => key.axis(),
            InputEvent::KeyUp { key, repeat: false } => key.axis().map(|(x, y)| (-x, -y)),
            _ => None,
        }
    }
}
