//! Discrete user commands and the keys bound to them.

use winit::event::{ElementState, KeyboardInput, VirtualKeyCode};

use crate::viewport::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Pan(Direction),
    ZoomIn,
    ZoomOut,
    Reset,
    Quit,
}

impl Command {
    /// `W`/`A`/`S`/`D` pan, `Up`/`Down` zoom in/out, `R` resets, `Escape` quits.
    pub fn from_key(key: VirtualKeyCode) -> Option<Self> {
        match key {
            VirtualKeyCode::W => Some(Command::Pan(Direction::Up)),
            VirtualKeyCode::S => Some(Command::Pan(Direction::Down)),
            VirtualKeyCode::A => Some(Command::Pan(Direction::Left)),
            VirtualKeyCode::D => Some(Command::Pan(Direction::Right)),
            VirtualKeyCode::Up => Some(Command::ZoomIn),
            VirtualKeyCode::Down => Some(Command::ZoomOut),
            VirtualKeyCode::R => Some(Command::Reset),
            VirtualKeyCode::Escape => Some(Command::Quit),
            _ => None,
        }
    }

    /// Only presses count; a held key repeats as further presses.
    pub fn from_keyboard_input(input: &KeyboardInput) -> Option<Self> {
        match (input.state, input.virtual_keycode) {
            (ElementState::Pressed, Some(key)) => Self::from_key(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use winit::event::{ElementState, KeyboardInput, ModifiersState, VirtualKeyCode};

    use super::Command;
    use crate::viewport::Direction;

    #[test]
    fn bindings() {
        assert_eq!(
            Command::from_key(VirtualKeyCode::W),
            Some(Command::Pan(Direction::Up))
        );
        assert_eq!(
            Command::from_key(VirtualKeyCode::D),
            Some(Command::Pan(Direction::Right))
        );
        assert_eq!(Command::from_key(VirtualKeyCode::Up), Some(Command::ZoomIn));
        assert_eq!(Command::from_key(VirtualKeyCode::Down), Some(Command::ZoomOut));
        assert_eq!(Command::from_key(VirtualKeyCode::Escape), Some(Command::Quit));
        assert_eq!(Command::from_key(VirtualKeyCode::R), Some(Command::Reset));
        assert_eq!(Command::from_key(VirtualKeyCode::Left), None);
    }

    #[allow(deprecated)]
    fn key(state: ElementState, key: VirtualKeyCode) -> KeyboardInput {
        KeyboardInput {
            scancode: 0,
            state,
            virtual_keycode: Some(key),
            modifiers: ModifiersState::empty(),
        }
    }

    #[test]
    fn only_presses_produce_commands() {
        let released = key(ElementState::Released, VirtualKeyCode::Up);
        assert_eq!(Command::from_keyboard_input(&released), None);

        let pressed = key(ElementState::Pressed, VirtualKeyCode::Up);
        assert_eq!(Command::from_keyboard_input(&pressed), Some(Command::ZoomIn));

        let reset = key(ElementState::Pressed, VirtualKeyCode::R);
        assert_eq!(Command::from_keyboard_input(&reset), Some(Command::Reset));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let pressed = key(ElementState::Pressed, VirtualKeyCode::Space);
        assert_eq!(Command::from_keyboard_input(&pressed), None);
    }
}
