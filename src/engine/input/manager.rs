// Input manager - binds players, ingests events and answers per-frame queries

use super::bindings::{InputBindings, Key, KeyChord, Modifiers};
use super::event::InputEvent;
use super::index::{BindingIndexEntry, ReverseIndex};
use super::state::LiveState;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Player addressed by callers that only have one local player
pub const DEFAULT_PLAYER: usize = 0;

/// How a chord's required modifiers are compared against the held ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModifierMatch {
    /// Required modifiers must all be held; extra held modifiers are allowed
    #[default]
    Subset,
    /// Held modifiers must equal the required ones exactly
    Exact,
}

impl ModifierMatch {
    fn matches(self, required: Modifiers, held: Modifiers) -> bool {
        match self {
            ModifierMatch::Subset => held.contains(required),
            ModifierMatch::Exact => held == required,
        }
    }
}

/// Per-player input bindings plus the live keyboard state they observe
#[derive(Debug, Default)]
pub struct Input {
    /// Binding sets keyed by player
    bindings: HashMap<usize, InputBindings>,

    /// Key -> actions it drives
    bound_actions: ReverseIndex,

    /// Key -> axes it drives
    bound_axes: ReverseIndex,

    /// Raw key/modifier state, kept across rebinds
    state: LiveState,

    /// Actions that were pressed when the previous frame ended, per player
    previous_actions: HashMap<usize, HashSet<String>>,

    modifier_match: ModifierMatch,
}

impl Input {
    /// Create an input system with no players bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style modifier policy selection
    pub fn with_modifier_match(mut self, policy: ModifierMatch) -> Self {
        self.modifier_match = policy;
        self
    }

    pub fn set_modifier_match(&mut self, policy: ModifierMatch) {
        self.modifier_match = policy;
    }

    pub fn modifier_match(&self) -> ModifierMatch {
        self.modifier_match
    }

    /// Replace all bindings of `player`
    pub fn bind(&mut self, bindings: InputBindings, player: usize) {
        self.bound_actions.remove_player(player);
        self.bound_axes.remove_player(player);

        for action in bindings.actions() {
            for chord in &action.keys {
                self.bound_actions.insert(
                    chord.key,
                    BindingIndexEntry::new(action.name.as_str(), player, false),
                );
            }
        }

        for axis in bindings.axes() {
            for chord in &axis.positive {
                self.bound_axes.insert(
                    chord.key,
                    BindingIndexEntry::new(axis.name.as_str(), player, false),
                );
            }
            for chord in &axis.negative {
                self.bound_axes.insert(
                    chord.key,
                    BindingIndexEntry::new(axis.name.as_str(), player, true),
                );
            }
        }

        debug!(
            "Bound player {}: {} actions, {} axes ({} index entries)",
            player,
            bindings.actions().count(),
            bindings.axes().count(),
            self.bound_actions.entry_count() + self.bound_axes.entry_count()
        );
        if let Some(old) = self.bindings.insert(player, bindings) {
            self.debug_assert_no_stale_entries(player, &old);
        }
    }

    /// Remove every player's bindings; key state is kept
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.bound_actions.clear();
        self.bound_axes.clear();
        self.previous_actions.clear();
        debug!("Cleared all input bindings");
    }

    /// Remove one player's bindings; other players sharing keys are unaffected
    pub fn clear_player(&mut self, player: usize) {
        let removed = self.bindings.remove(&player);
        self.bound_actions.remove_player(player);
        self.bound_axes.remove_player(player);
        self.previous_actions.remove(&player);

        if let Some(old) = removed {
            self.debug_assert_no_stale_entries(player, &old);
            debug!("Cleared input bindings for player {}", player);
        }
    }

    /// All bound players and their binding sets
    pub fn bindings(&self) -> &HashMap<usize, InputBindings> {
        &self.bindings
    }

    /// Ids of all bound players
    pub fn players(&self) -> impl Iterator<Item = usize> + '_ {
        self.bindings.keys().copied()
    }

    /// Actions that `key` contributes to, across all players
    pub fn actions_for(&self, key: Key) -> &[BindingIndexEntry] {
        self.bound_actions.entries(key)
    }

    /// Axes that `key` contributes to, across all players
    pub fn axes_for(&self, key: Key) -> &[BindingIndexEntry] {
        self.bound_axes.entries(key)
    }

    /// Apply an event to the live state; unrelated events are ignored
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key(key_event) => {
                trace!("Key {:?} pressed={}", key_event.key, key_event.pressed);
                self.state.set_key(key_event.key, key_event.pressed);
            }
            InputEvent::Modifiers(modifiers_event) => {
                trace!("Modifiers {:?}", modifiers_event.modifiers);
                self.state.set_modifiers(modifiers_event.modifiers);
            }
            InputEvent::Other => {}
        }
    }

    /// Check if `key` is held together with `modifiers`
    pub fn key_pressed(&self, key: Key, modifiers: Modifiers) -> bool {
        self.state.is_down(key) && self.modifiers_held(modifiers)
    }

    /// Check if an action of `player` is pressed
    ///
    /// Unknown players and actions are never pressed.
    pub fn pressed(&self, action_name: &str, player: usize) -> bool {
        self.bindings
            .get(&player)
            .and_then(|bindings| bindings.action(action_name))
            .is_some_and(|action| self.any_pressed(&action.keys))
    }

    /// Value of an axis of `player`: 1.0, -1.0, or 0.0 when neither or both sides are held
    pub fn axis(&self, axis_name: &str, player: usize) -> f32 {
        let Some(axis) = self
            .bindings
            .get(&player)
            .and_then(|bindings| bindings.axis(axis_name))
        else {
            return 0.0;
        };

        let positive = self.any_pressed(&axis.positive);
        let negative = self.any_pressed(&axis.negative);
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Check if an action of `player` became pressed since the previous frame ended
    pub fn just_pressed(&self, action_name: &str, player: usize) -> bool {
        self.pressed(action_name, player) && !self.was_pressed(action_name, player)
    }

    /// Check if an action of `player` stopped being pressed since the previous frame ended
    pub fn just_released(&self, action_name: &str, player: usize) -> bool {
        let bound = self
            .bindings
            .get(&player)
            .is_some_and(|bindings| bindings.action(action_name).is_some());

        bound && !self.pressed(action_name, player) && self.was_pressed(action_name, player)
    }

    /// Finish the frame: remembers which actions are pressed for edge queries
    /// Call this once per frame after all queries
    pub fn end_frame(&mut self) {
        let mut held: HashMap<usize, HashSet<String>> = HashMap::new();
        for (player, bindings) in &self.bindings {
            for action in bindings.actions() {
                if self.any_pressed(&action.keys) {
                    held.entry(*player).or_default().insert(action.name.clone());
                }
            }
        }
        self.previous_actions = held;
    }

    /// Release every key and modifier, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        debug!("Releasing {} held keys", self.state.pressed_keys().len());
        self.state.release_all();
    }

    /// Raw key/modifier state
    pub fn state(&self) -> &LiveState {
        &self.state
    }

    fn was_pressed(&self, action_name: &str, player: usize) -> bool {
        self.previous_actions
            .get(&player)
            .is_some_and(|names| names.contains(action_name))
    }

    /// No key may still point at a name `player` no longer binds
    fn debug_assert_no_stale_entries(&self, player: usize, old: &InputBindings) {
        let current = self.bindings.get(&player);
        for action in old.actions() {
            if current.and_then(|b| b.action(&action.name)).is_none() {
                debug_assert!(
                    !self.bound_actions.references(player, &action.name),
                    "stale action entry {} for player {}",
                    action.name,
                    player
                );
            }
        }
        for axis in old.axes() {
            if current.and_then(|b| b.axis(&axis.name)).is_none() {
                debug_assert!(
                    !self.bound_axes.references(player, &axis.name),
                    "stale axis entry {} for player {}",
                    axis.name,
                    player
                );
            }
        }
    }

    fn modifiers_held(&self, required: Modifiers) -> bool {
        self.modifier_match.matches(required, self.state.modifiers())
    }

    fn any_pressed(&self, chords: &[KeyChord]) -> bool {
        chords
            .iter()
            .any(|chord| self.key_pressed(chord.key, chord.modifiers))
    }
}
