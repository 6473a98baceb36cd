//! `inputcore::devices` submodule implements raw input devices - the lowest level of input
//! handling that just remembers what hardware reported during the frame.
//!

use crate::{
    inputcore::keys::{Key, MouseButton, MouseButtons},
    mathcore::vectors::Vector2Int,
};
use std::collections::HashSet;

/// [`KeyboardDevice`] struct tracks state of keys and characters that were typed.
///
/// # Example
/// ```rust
/// # use ggui::inputcore::{devices::KeyboardDevice, keys::Key};
/// let mut keyboard: KeyboardDevice = KeyboardDevice::default();
/// keyboard.set_key(Key::Enter, true);
/// keyboard.push_char('a');
/// assert!(keyboard.was_key_just_pressed(Key::Enter));
/// assert_eq!(keyboard.last_pressed_char(), Some('a'));
///
/// keyboard.begin_frame();
/// assert!(keyboard.is_key_down(Key::Enter));
/// assert!(!keyboard.was_key_just_pressed(Key::Enter));
/// assert_eq!(keyboard.last_pressed_char(), None);
/// ```
///
#[derive(Clone, Debug, Default)]
pub struct KeyboardDevice {
    /// Keys that are held.
    ///
    down: HashSet<Key>,
    /// Keys that went down during current frame.
    ///
    just_pressed: HashSet<Key>,
    /// Characters that were typed during current frame.
    ///
    typed: Vec<char>,
}
impl KeyboardDevice {
    /// Forgets everything that happened during previous frame, keeping held keys.
    ///
    pub fn begin_frame(&mut self) {
        self.just_pressed.clear();
        self.typed.clear();
    }

    /// Sets state of the key.
    ///
    /// OS key repeat produces multiple 'down' reports for held key;
    /// every one of them counts as new press, which allows holding `Backspace` in the console.
    ///
    pub fn set_key(&mut self, key: Key, is_down: bool) {
        if is_down {
            let _ = self.down.insert(key);
            let _ = self.just_pressed.insert(key);
        } else {
            let _ = self.down.remove(&key);
        }
    }
    /// Remembers typed character.
    ///
    pub fn push_char(&mut self, character: char) {
        self.typed.push(character);
    }

    /// Returns whether the key is held.
    ///
    pub fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
    /// Returns whether the key went down during current frame.
    ///
    pub fn was_key_just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }
    /// Returns the last character that was typed during current frame.
    ///
    pub fn last_pressed_char(&self) -> Option<char> {
        self.typed.last().copied()
    }
    /// Returns all characters that were typed during current frame, in order.
    ///
    pub fn typed_chars(&self) -> &[char] {
        &self.typed
    }
}

/// [`MouseDevice`] struct tracks state of mouse buttons and cursor.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct MouseDevice {
    /// Buttons that are held.
    ///
    down: MouseButtons,
    /// Buttons that went down during current frame.
    ///
    just_pressed: MouseButtons,
    /// Buttons that went up during current frame.
    ///
    just_released: MouseButtons,
    /// Cursor position in window coordinates.
    ///
    position: Vector2Int,
    /// Cursor movement during current frame.
    ///
    delta: Vector2Int,
}
impl MouseDevice {
    /// Forgets everything that happened during previous frame, keeping held buttons and position.
    ///
    pub fn begin_frame(&mut self) {
        self.just_pressed = MouseButtons::empty();
        self.just_released = MouseButtons::empty();
        self.delta = Vector2Int::zero();
    }

    /// Sets state of the button.
    ///
    pub fn set_button(&mut self, button: MouseButton, is_down: bool) {
        let flag: MouseButtons = button.into();
        if is_down {
            self.down.insert(flag);
            self.just_pressed.insert(flag);
        } else {
            self.down.remove(flag);
            self.just_released.insert(flag);
        }
    }
    /// Moves cursor to new position.
    ///
    pub fn set_position(&mut self, position: Vector2Int) {
        self.delta += position - self.position;
        self.position = position;
    }

    /// Returns whether the button is held.
    ///
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.down.contains(button.into())
    }
    /// Returns whether the button went down during current frame.
    ///
    pub fn was_button_just_pressed(&self, button: MouseButton) -> bool {
        self.just_pressed.contains(button.into())
    }
    /// Returns whether the button went up during current frame.
    ///
    pub fn was_button_just_released(&self, button: MouseButton) -> bool {
        self.just_released.contains(button.into())
    }
    /// Returns cursor position.
    ///
    pub fn position(&self) -> Vector2Int {
        self.position
    }
    /// Returns how far cursor moved during current frame.
    ///
    pub fn delta(&self) -> Vector2Int {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        inputcore::keys::{Key, MouseButton},
        mathcore::vectors::Vector2Int,
    };

    #[test]
    fn keyboard() {
        use super::KeyboardDevice;

        let mut keyboard: KeyboardDevice = KeyboardDevice::default();
        keyboard.push_char('h');
        keyboard.push_char('i');
        keyboard.set_key(Key::Left, true);
        assert_eq!(keyboard.last_pressed_char(), Some('i'));
        assert!(keyboard.was_key_just_pressed(Key::Left));

        keyboard.begin_frame();
        keyboard.set_key(Key::Left, false);
        assert!(!keyboard.is_key_down(Key::Left));
        assert!(!keyboard.was_key_just_pressed(Key::Left));
    }

    #[test]
    fn mouse() {
        use super::MouseDevice;

        let mut mouse: MouseDevice = MouseDevice::default();
        mouse.set_position(Vector2Int::from([10, 20]));
        mouse.set_button(MouseButton::Left, true);
        assert!(mouse.was_button_just_pressed(MouseButton::Left));
        assert!(mouse.is_button_down(MouseButton::Left));
        assert_eq!(mouse.delta(), Vector2Int::from([10, 20]));

        mouse.begin_frame();
        mouse.set_position(Vector2Int::from([15, 20]));
        mouse.set_button(MouseButton::Left, false);
        assert!(!mouse.was_button_just_pressed(MouseButton::Left));
        assert!(mouse.was_button_just_released(MouseButton::Left));
        assert!(!mouse.is_button_down(MouseButton::Left));
        assert_eq!(mouse.position(), Vector2Int::from([15, 20]));
        assert_eq!(mouse.delta(), Vector2Int::from([5, 0]));
    }
}
