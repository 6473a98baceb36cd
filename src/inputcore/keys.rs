//! `inputcore::keys` submodule lists keys and mouse buttons that `ggui` recognizes.
//!

use bitflags::bitflags;
use sdl2::{keyboard::Keycode as SdlKeycode, mouse::MouseButton as SdlMouseButton};

/// [`Key`] enum lists keyboard keys which have special meaning for `ggui`.
///
/// Printable characters are not listed here - they come through text input
/// (see [`InputState::last_pressed_char`](super::system::InputState::last_pressed_char)).
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// `Esc` key.
    ///
    Escape,
    /// `Enter` key (and keypad enter).
    ///
    Enter,
    /// `Backspace` key.
    ///
    Backspace,
    /// `Delete` key.
    ///
    Delete,
    /// Left arrow.
    ///
    Left,
    /// Right arrow.
    ///
    Right,
    /// Up arrow.
    ///
    Up,
    /// Down arrow.
    ///
    Down,
    /// `Home` key.
    ///
    Home,
    /// `End` key.
    ///
    End,
    /// `Tab` key.
    ///
    Tab,
    /// Backquote (tilde) key that usually toggles the console.
    ///
    Backquote,
}
impl Key {
    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` keycode to [`Key`].
    ///
    /// Returns `None` if key has no special meaning for `ggui`.
    ///
    pub(crate) fn from_sdl_keycode(keycode: SdlKeycode) -> Option<Key> {
        Some(match keycode {
            SdlKeycode::Escape => Key::Escape,
            SdlKeycode::Return | SdlKeycode::KpEnter => Key::Enter,
            SdlKeycode::Backspace => Key::Backspace,
            SdlKeycode::Delete => Key::Delete,
            SdlKeycode::Left => Key::Left,
            SdlKeycode::Right => Key::Right,
            SdlKeycode::Up => Key::Up,
            SdlKeycode::Down => Key::Down,
            SdlKeycode::Home => Key::Home,
            SdlKeycode::End => Key::End,
            SdlKeycode::Tab => Key::Tab,
            SdlKeycode::Backquote => Key::Backquote,
            _ => return None,
        })
    }
}

/// [`MouseButton`] enum lists mouse buttons that `ggui` tracks.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    ///
    Left,
    /// Middle mouse button (wheel).
    ///
    Middle,
    /// Right mouse button.
    ///
    Right,
}
impl MouseButton {
    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` mouse button to [`MouseButton`].
    ///
    pub(crate) fn from_sdl_mouse_button(button: SdlMouseButton) -> Option<MouseButton> {
        match button {
            SdlMouseButton::Left => Some(MouseButton::Left),
            SdlMouseButton::Middle => Some(MouseButton::Middle),
            SdlMouseButton::Right => Some(MouseButton::Right),
            _ => None,
        }
    }
}
bitflags!(
    /// [`MouseButtons`] bitflag struct stores a set of mouse buttons.
    ///
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseButtons : u8 {
        /// Left mouse button.
        ///
        const LEFT = 1 << 0;
        /// Middle mouse button.
        ///
        const MIDDLE = 1 << 1;
        /// Right mouse button.
        ///
        const RIGHT = 1 << 2;
    }
);
impl From<MouseButton> for MouseButtons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => MouseButtons::LEFT,
            MouseButton::Middle => MouseButtons::MIDDLE,
            MouseButton::Right => MouseButtons::RIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn sdl_conversions() {
        use super::{Key, MouseButton, MouseButtons};
        use sdl2::{keyboard::Keycode, mouse::MouseButton as SdlMouseButton};

        assert_eq!(Key::from_sdl_keycode(Keycode::Return), Some(Key::Enter));
        assert_eq!(Key::from_sdl_keycode(Keycode::KpEnter), Some(Key::Enter));
        assert_eq!(Key::from_sdl_keycode(Keycode::Backquote), Some(Key::Backquote));
        assert_eq!(Key::from_sdl_keycode(Keycode::A), None);

        assert_eq!(
            MouseButton::from_sdl_mouse_button(SdlMouseButton::Right),
            Some(MouseButton::Right)
        );
        assert_eq!(MouseButton::from_sdl_mouse_button(SdlMouseButton::X1), None);

        let buttons: MouseButtons = MouseButton::Left.into();
        assert!(buttons.contains(MouseButtons::LEFT));
        assert!(!buttons.contains(MouseButtons::RIGHT));
    }
}
