// Live keyboard state: pressed keys and held modifiers

use super::bindings::{Key, Modifiers};
use std::collections::HashMap;

/// Raw key and modifier state as reported by the event source
#[derive(Debug, Default)]
pub struct LiveState {
    /// Last known state of every key seen so far (absent = released)
    keys: HashMap<Key, bool>,

    /// Currently held modifiers
    modifiers: Modifiers,
}

impl LiveState {
    /// Create a state with every key released and no modifiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press or release
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        self.keys.insert(key, pressed);
    }

    /// Replace the modifier mask
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Return to the baseline: all keys released, no modifiers
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.modifiers = Modifiers::empty();
    }

    /// All keys currently held
    pub fn pressed_keys(&self) -> Vec<Key> {
        self.keys
            .iter()
            .filter(|(_, down)| **down)
            .map(|(key, _)| *key)
            .collect()
    }
}
