// Input handling system
//
// This module turns raw keyboard events into named, per-player actions and
// axes that gameplay code queries once per frame.
//
// ## Architecture
//
// - `bindings`: Keys, modifier chords and the per-player binding sets
// - `event`: Events accepted by the system, including winit conversion
// - `index`: Reverse index from keys to the actions/axes they drive
// - `state`: Live key and modifier state
// - `manager`: `Input`, which owns all of the above and tracks per-frame action edges
//
// ## Usage Example
//
// ```rust
// use rusted_input::engine::input::{Input, InputBindings, InputEvent, DEFAULT_PLAYER};
//
// let mut input = Input::new();
// input.bind(InputBindings::default_keyboard(), DEFAULT_PLAYER);
// input.bind(InputBindings::default_arrows(), 1);
//
// // In your event loop, forward every window event
// input.handle(&InputEvent::from_window_event(&window_event));
//
// // Query once per frame
// let horizontal = input.axis("Horizontal", DEFAULT_PLAYER);
// if input.just_pressed("Jump", 1) {
//     // Player 2 just jumped!
// }
//
// // At the end of each frame
// input.end_frame();
// ```

pub mod bindings;
pub mod event;
pub mod index;
pub mod manager;
pub mod state;

// Re-export commonly used types
pub use bindings::{
    ActionBinding, AxisBinding, BindingError, InputBindings, Key, KeyChord, Modifiers,
};
pub use event::{InputEvent, KeyEvent, ModifiersEvent};
pub use index::{BindingIndexEntry, ReverseIndex};
pub use manager::{Input, ModifierMatch, DEFAULT_PLAYER};
pub use state::LiveState;
