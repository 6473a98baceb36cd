//! `inputcore::system` submodule implements [`InputSystem`] - collection of input devices
//! that is fed by platform events and queried through [`InputState`] trait.
//!

use crate::{
    inputcore::{
        devices::{KeyboardDevice, MouseDevice},
        keys::{Key, MouseButton},
    },
    mathcore::vectors::{Point, Vector2, Vector2Int},
};
use sdl2::event::Event as SdlEvent;

/// [`InputState`] trait defines queries that `ggui` parts perform on input.
///
/// Console and UI are written against this trait, so any source of input
/// (e.g. scripted input in tests) can drive them.
///
pub trait InputState {
    /// Returns whether the key is held.
    ///
    fn is_key_down(&self, key: Key) -> bool;
    /// Returns whether the key went down during current frame.
    ///
    fn was_key_just_pressed(&self, key: Key) -> bool;
    /// Returns the last printable character that was typed during current frame.
    ///
    fn last_pressed_char(&self) -> Option<char>;
    /// Returns all characters that were typed during current frame, in order.
    ///
    /// Single platform event (e.g. IME commit or paste) can produce several characters.
    ///
    fn typed_chars(&self) -> &[char];

    /// Returns whether the mouse button went down during current frame.
    ///
    fn was_mouse_button_just_pressed(&self, button: MouseButton) -> bool;
    /// Returns whether the mouse button went up during current frame.
    ///
    fn was_mouse_button_just_released(&self, button: MouseButton) -> bool;
    /// Returns cursor position.
    ///
    fn cursor_position(&self) -> Point;
}

/// [`InputSystem`] struct owns keyboard and mouse devices.
///
/// # Example
/// ```rust
/// # use ggui::inputcore::{keys::{Key, MouseButton}, system::{InputState, InputSystem}};
/// # use ggui::mathcore::vectors::{Point, Vector2Int};
/// let mut input: InputSystem = InputSystem::new();
/// input.begin_frame();
/// input.keyboard_mut().set_key(Key::Escape, true);
/// input.mouse_mut().set_position(Vector2Int::from([40, 30]));
///
/// assert!(input.was_key_just_pressed(Key::Escape));
/// assert_eq!(input.cursor_position(), Point::new(40.0, 30.0));
/// assert!(!input.was_mouse_button_just_pressed(MouseButton::Left));
/// ```
///
#[derive(Clone, Debug, Default)]
pub struct InputSystem {
    /// Keyboard device.
    ///
    keyboard: KeyboardDevice,
    /// Mouse device.
    ///
    mouse: MouseDevice,
}
impl InputSystem {
    /// Initializes new [`InputSystem`] with nothing pressed.
    ///
    pub fn new() -> Self {
        InputSystem::default()
    }

    /// Starts new frame.
    ///
    /// Should be called before feeding events of the frame.
    ///
    pub fn begin_frame(&mut self) {
        self.keyboard.begin_frame();
        self.mouse.begin_frame();
    }

    /// Returns keyboard device.
    ///
    pub fn keyboard(&self) -> &KeyboardDevice {
        &self.keyboard
    }
    /// Returns mutable reference to keyboard device.
    ///
    pub fn keyboard_mut(&mut self) -> &mut KeyboardDevice {
        &mut self.keyboard
    }
    /// Returns mouse device.
    ///
    pub fn mouse(&self) -> &MouseDevice {
        &self.mouse
    }
    /// Returns mutable reference to mouse device.
    ///
    pub fn mouse_mut(&mut self) -> &mut MouseDevice {
        &mut self.mouse
    }

    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Feeds `sdl2` event to devices.
    ///
    /// Events that are not related to input are ignored.
    ///
    pub(crate) fn handle_sdl_event(&mut self, event: &SdlEvent) {
        match *event {
            SdlEvent::KeyDown {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = Key::from_sdl_keycode(keycode) {
                    self.keyboard.set_key(key, true);
                }
            }
            SdlEvent::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = Key::from_sdl_keycode(keycode) {
                    self.keyboard.set_key(key, false);
                }
            }
            SdlEvent::TextInput { ref text, .. } => {
                text.chars().for_each(|character| self.keyboard.push_char(character));
            }
            SdlEvent::MouseButtonDown {
                mouse_btn, x, y, ..
            } => {
                self.mouse.set_position(Vector2Int::from([x, y]));
                if let Some(button) = MouseButton::from_sdl_mouse_button(mouse_btn) {
                    self.mouse.set_button(button, true);
                }
            }
            SdlEvent::MouseButtonUp {
                mouse_btn, x, y, ..
            } => {
                self.mouse.set_position(Vector2Int::from([x, y]));
                if let Some(button) = MouseButton::from_sdl_mouse_button(mouse_btn) {
                    self.mouse.set_button(button, false);
                }
            }
            SdlEvent::MouseMotion { x, y, .. } => {
                self.mouse.set_position(Vector2Int::from([x, y]));
            }
            _ => {}
        }
    }
}
impl InputState for InputSystem {
    fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }
    fn was_key_just_pressed(&self, key: Key) -> bool {
        self.keyboard.was_key_just_pressed(key)
    }
    fn last_pressed_char(&self) -> Option<char> {
        self.keyboard.last_pressed_char()
    }
    fn typed_chars(&self) -> &[char] {
        self.keyboard.typed_chars()
    }

    fn was_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse.was_button_just_pressed(button)
    }
    fn was_mouse_button_just_released(&self, button: MouseButton) -> bool {
        self.mouse.was_button_just_released(button)
    }
    fn cursor_position(&self) -> Point {
        Vector2::from(self.mouse.position())
    }
}
