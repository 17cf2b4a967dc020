// Binding definitions - named actions and axes mapped to key chords

use std::collections::HashMap;
use winit::keyboard::{KeyCode, ModifiersState};

/// Physical key identifier
pub type Key = KeyCode;

/// Bitmask of held modifier keys (`Modifiers::empty()` means none)
pub type Modifiers = ModifiersState;

/// Errors raised while assembling a binding set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("Action already bound: {0}")]
    DuplicateAction(String),

    #[error("Axis already bound: {0}")]
    DuplicateAxis(String),
}

/// A key together with the modifiers that must be held alongside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyChord {
    /// Create a chord with no modifiers
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a chord requiring the given modifiers
    pub fn with(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyChord {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// A named boolean input, pressed when any of its chords is held
#[derive(Debug, Clone, PartialEq)]
pub struct ActionBinding {
    pub name: String,
    pub keys: Vec<KeyChord>,
}

impl ActionBinding {
    pub fn new(name: impl Into<String>, keys: impl IntoIterator<Item = KeyChord>) -> Self {
        Self {
            name: name.into(),
            keys: keys.into_iter().collect(),
        }
    }
}

/// A named signed input driven by separate positive and negative chords
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBinding {
    pub name: String,
    pub positive: Vec<KeyChord>,
    pub negative: Vec<KeyChord>,
}

impl AxisBinding {
    pub fn new(
        name: impl Into<String>,
        positive: impl IntoIterator<Item = KeyChord>,
        negative: impl IntoIterator<Item = KeyChord>,
    ) -> Self {
        Self {
            name: name.into(),
            positive: positive.into_iter().collect(),
            negative: negative.into_iter().collect(),
        }
    }
}

/// Every action and axis bound for one player
///
/// Actions and axes live in separate namespaces, so an action and an axis
/// may share a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputBindings {
    actions: HashMap<String, ActionBinding>,
    axes: HashMap<String, AxisBinding>,
}

impl InputBindings {
    /// Create an empty binding set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action, rejecting a name that is already taken
    pub fn add_action(&mut self, binding: ActionBinding) -> Result<&mut Self, BindingError> {
        if self.actions.contains_key(&binding.name) {
            return Err(BindingError::DuplicateAction(binding.name));
        }
        self.actions.insert(binding.name.clone(), binding);
        Ok(self)
    }

    /// Add an axis, rejecting a name that is already taken
    pub fn add_axis(&mut self, binding: AxisBinding) -> Result<&mut Self, BindingError> {
        if self.axes.contains_key(&binding.name) {
            return Err(BindingError::DuplicateAxis(binding.name));
        }
        self.axes.insert(binding.name.clone(), binding);
        Ok(self)
    }

    /// Builder-style action insert; replaces an existing action of the same name
    pub fn with_action(
        mut self,
        name: impl Into<String>,
        keys: impl IntoIterator<Item = KeyChord>,
    ) -> Self {
        let binding = ActionBinding::new(name, keys);
        self.actions.insert(binding.name.clone(), binding);
        self
    }

    /// Builder-style axis insert; replaces an existing axis of the same name
    pub fn with_axis(
        mut self,
        name: impl Into<String>,
        positive: impl IntoIterator<Item = KeyChord>,
        negative: impl IntoIterator<Item = KeyChord>,
    ) -> Self {
        let binding = AxisBinding::new(name, positive, negative);
        self.axes.insert(binding.name.clone(), binding);
        self
    }

    pub fn action(&self, name: &str) -> Option<&ActionBinding> {
        self.actions.get(name)
    }

    pub fn axis(&self, name: &str) -> Option<&AxisBinding> {
        self.axes.get(name)
    }

    pub fn actions(&self) -> impl Iterator<Item = &ActionBinding> {
        self.actions.values()
    }

    pub fn axes(&self) -> impl Iterator<Item = &AxisBinding> {
        self.axes.values()
    }

    /// True when neither actions nor axes are bound
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.axes.is_empty()
    }

    /// Default keyboard layout for the first local player (WASD + Space)
    pub fn default_keyboard() -> Self {
        Self::new()
            .with_axis(
                "Horizontal",
                [KeyChord::new(KeyCode::KeyD)],
                [KeyChord::new(KeyCode::KeyA)],
            )
            .with_axis(
                "Vertical",
                [KeyChord::new(KeyCode::KeyW)],
                [KeyChord::new(KeyCode::KeyS)],
            )
            .with_action("Jump", [KeyChord::new(KeyCode::Space)])
            .with_action("Pause", [KeyChord::new(KeyCode::Escape)])
    }

    /// Arrow-key layout for a second player sharing the keyboard
    pub fn default_arrows() -> Self {
        Self::new()
            .with_axis(
                "Horizontal",
                [KeyChord::new(KeyCode::ArrowRight)],
                [KeyChord::new(KeyCode::ArrowLeft)],
            )
            .with_axis(
                "Vertical",
                [KeyChord::new(KeyCode::ArrowUp)],
                [KeyChord::new(KeyCode::ArrowDown)],
            )
            .with_action(
                "Jump",
                [
                    KeyChord::new(KeyCode::Enter),
                    KeyChord::new(KeyCode::NumpadEnter),
                ],
            )
    }
}
