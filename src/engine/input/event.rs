// Input events consumed by the input system

use super::bindings::{Key, Modifiers};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::PhysicalKey;

/// A physical key changed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

/// The set of held modifiers changed; carries the new absolute mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifiersEvent {
    pub modifiers: Modifiers,
}

/// Every event the input system accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Modifiers(ModifiersEvent),
    /// Any other window event; accepted and ignored
    Other,
}

impl InputEvent {
    pub fn key(key: Key, pressed: bool) -> Self {
        Self::Key(KeyEvent { key, pressed })
    }

    pub fn modifiers(modifiers: Modifiers) -> Self {
        Self::Modifiers(ModifiersEvent { modifiers })
    }

    /// Convert a winit window event
    ///
    /// Keys without a physical key code and all non-keyboard events map to `Other`.
    pub fn from_window_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                Self::from_physical_key(event.physical_key, event.state)
            }
            WindowEvent::ModifiersChanged(modifiers) => Self::modifiers(modifiers.state()),
            _ => Self::Other,
        }
    }

    /// Convert the physical key and element state of a winit key event
    pub fn from_physical_key(physical_key: PhysicalKey, state: ElementState) -> Self {
        match physical_key {
            PhysicalKey::Code(code) => Self::key(code, state == ElementState::Pressed),
            PhysicalKey::Unidentified(_) => Self::Other,
        }
    }
}

impl From<&WindowEvent> for InputEvent {
    fn from(event: &WindowEvent) -> Self {
        Self::from_window_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{KeyCode, NativeKeyCode};

    #[test]
    fn test_physical_key_pressed() {
        let event =
            InputEvent::from_physical_key(PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed);
        assert_eq!(event, InputEvent::key(KeyCode::KeyW, true));
    }

    #[test]
    fn test_physical_key_released() {
        let event = InputEvent::from_physical_key(
            PhysicalKey::Code(KeyCode::KeyW),
            ElementState::Released,
        );
        assert_eq!(
            event,
            InputEvent::Key(KeyEvent {
                key: KeyCode::KeyW,
                pressed: false
            })
        );
    }

    #[test]
    fn test_unidentified_key_is_other() {
        let event = InputEvent::from_physical_key(
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            ElementState::Pressed,
        );
        assert_eq!(event, InputEvent::Other);
    }

    #[test]
    fn test_unrelated_window_event_is_other() {
        assert_eq!(
            InputEvent::from(&WindowEvent::Focused(false)),
            InputEvent::Other
        );
        assert_eq!(
            InputEvent::from_window_event(&WindowEvent::CloseRequested),
            InputEvent::Other
        );
    }

    #[test]
    fn test_modifiers_event() {
        let event = InputEvent::modifiers(Modifiers::CONTROL);
        assert_eq!(
            event,
            InputEvent::Modifiers(ModifiersEvent {
                modifiers: Modifiers::CONTROL
            })
        );
    }
}
