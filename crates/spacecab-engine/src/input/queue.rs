/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed (DOM `keyCode`).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The drawing surface changed size.
    Resize { width: f32, height: f32 },
}

/// Logical keys the simulation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Thrust,
    RotateLeft,
    RotateRight,
    /// Reserved; nothing reacts to it yet.
    Down,
}

impl Key {
    pub const COUNT: usize = 4;

    /// Map an arrow-key `keyCode` to a logical key.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            38 => Some(Self::Thrust),
            37 => Some(Self::RotateLeft),
            39 => Some(Self::RotateRight),
            40 => Some(Self::Down),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Anything that can answer "is this key held right now?".
pub trait KeySource {
    fn is_key_down(&self, key: Key) -> bool;
}

/// Held-key state folded from key events.
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    held: [bool; Key::COUNT],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    /// Apply a key event; other events and unmapped keys are ignored.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key_code } => {
                if let Some(key) = Key::from_key_code(key_code) {
                    self.press(key);
                }
            }
            InputEvent::KeyUp { key_code } => {
                if let Some(key) = Key::from_key_code(key_code) {
                    self.release(key);
                }
            }
            InputEvent::Resize { .. } => {}
        }
    }
}

impl KeySource for Keyboard {
    fn is_key_down(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// A queue of input events.
/// The host writes events into the queue; the simulation drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 38 });
        q.push(InputEvent::Resize { width: 640.0, height: 480.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn arrow_keys_map_to_logical_keys() {
        assert_eq!(Key::from_key_code(38), Some(Key::Thrust));
        assert_eq!(Key::from_key_code(37), Some(Key::RotateLeft));
        assert_eq!(Key::from_key_code(39), Some(Key::RotateRight));
        assert_eq!(Key::from_key_code(40), Some(Key::Down));
        assert_eq!(Key::from_key_code(32), None);
    }

    #[test]
    fn keyboard_tracks_held_keys() {
        let mut kb = Keyboard::new();
        kb.apply(&InputEvent::KeyDown { key_code: 38 });
        kb.apply(&InputEvent::KeyDown { key_code: 37 });
        assert!(kb.is_key_down(Key::Thrust));
        assert!(kb.is_key_down(Key::RotateLeft));
        kb.apply(&InputEvent::KeyUp { key_code: 38 });
        assert!(!kb.is_key_down(Key::Thrust));
        assert!(kb.is_key_down(Key::RotateLeft));
        assert!(!kb.is_key_down(Key::RotateRight));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut kb = Keyboard::new();
        kb.apply(&InputEvent::KeyDown { key_code: 65 });
        assert!(!kb.is_key_down(Key::Thrust));
    }
}
