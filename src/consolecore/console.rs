//! `consolecore::console` submodule implements [`Console`] - in-game console overlay
//! with line editor, scrollback and command history.
//!

use crate::{
    consolecore::{line_editor::LineEditor, registry::CommandRegistry},
    datacore::{
        assets::{AssetManager, ConfigAssetFormat},
        fonts::FontCatalog,
    },
    graphicscore::drawing::Renderer,
    inputcore::{keys::Key, system::InputState},
    mathcore::{
        shapes::Aabb2,
        vectors::{Point, Vector2},
        Color,
    },
};
use serde::{Deserialize, Serialize};
use std::{fmt, io::Error};

/// [`ConsoleSettings`] struct is a configuration of [`Console`].
///
/// It can be stored in `configs` folder of the asset directory.
///
/// # Example
/// ```rust
/// # use ggui::consolecore::console::ConsoleSettings;
/// let settings: ConsoleSettings = ConsoleSettings {
///     max_lines: 20,
///     ..Default::default()
/// };
/// assert_eq!(settings.max_line_length, 128);
/// assert_eq!(settings.font, "FixedSys");
/// ```
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConsoleSettings {
    /// Maximum number of characters in edited line.
    ///
    pub max_line_length: usize,
    /// Maximum number of scrollback lines that are rendered.
    ///
    pub max_lines: usize,
    /// Seconds between cursor blinks.
    ///
    pub cursor_blink_interval: f32,
    /// Glyph that is shown at the cursor.
    ///
    pub cursor_glyph: char,
    /// Name of the font that console starts with.
    ///
    pub font: String,
    /// Virtual resolution of console overlay.
    ///
    pub ortho_extents: Vector2,
    /// Color of the overlay that is drawn under console text.
    ///
    pub overlay_color: Color,
    /// Distance between text and edges of the overlay.
    ///
    pub margin: f32,
}
impl ConsoleSettings {
    /// Loads settings from `configs` folder of the asset directory.
    ///
    pub fn load(manager: &AssetManager, name: &str) -> Result<Self, Error> {
        manager.load_asset(name, ConfigAssetFormat)
    }
    /// Saves settings to `configs` folder of the asset directory.
    ///
    pub fn save(&self, manager: &AssetManager, name: &str) -> Result<(), Error> {
        manager.save_asset(name, ConfigAssetFormat, self)
    }
}
impl Default for ConsoleSettings {
    fn default() -> Self {
        ConsoleSettings {
            max_line_length: 128,
            max_lines: 40,
            cursor_blink_interval: 0.5,
            cursor_glyph: '|',
            font: String::from("FixedSys"),
            ortho_extents: Vector2::new(1600.0, 900.0),
            overlay_color: Color::from_packed(0x00000088),
            margin: 10.0,
        }
    }
}

/// [`ColoredText`] struct is a single line of console scrollback.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColoredText {
    /// Text of the line.
    ///
    pub text: String,
    /// Color of the line.
    ///
    pub color: Color,
}
impl ColoredText {
    /// Creates line of given text and color.
    ///
    pub fn new(text: &str, color: Color) -> Self {
        ColoredText {
            text: text.to_string(),
            color,
        }
    }
}

/// [`DynamicLine`] struct is a handle to scrollback line that can be changed after it was printed.
///
/// Handle becomes stale when scrollback is cleared.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynamicLine {
    /// Index of the line in scrollback.
    ///
    index: usize,
    /// Scrollback generation in which the line was printed.
    ///
    generation: u64,
}

/// [`Console`] struct is an in-game console.
///
/// Console does nothing while it is inactive.
/// When it is active, it reads typed characters and editing keys each frame,
/// runs entered lines through [`CommandRegistry`] and renders itself as an overlay
/// where current line is at the bottom and scrollback goes upwards from it.
///
/// # Example
/// ```rust
/// # use ggui::consolecore::{console::{Console, ConsoleSettings}, registry::CommandRegistry};
/// # use ggui::inputcore::{keys::Key, system::InputSystem};
/// let registry: CommandRegistry = CommandRegistry::with_builtins();
/// let mut console: Console = Console::new(ConsoleSettings::default());
/// let mut input: InputSystem = InputSystem::new();
/// console.activate();
///
/// for character in "quit".chars() {
///     input.begin_frame();
///     input.keyboard_mut().push_char(character);
///     console.update(0.016, &registry, &input);
/// }
/// input.begin_frame();
/// input.keyboard_mut().set_key(Key::Enter, true);
/// console.update(0.016, &registry, &input);
///
/// assert!(console.is_quitting());
/// assert_eq!(console.history().len(), 2);
/// ```
///
pub struct Console {
    /// Configuration.
    ///
    settings: ConsoleSettings,
    /// Edited line.
    ///
    editor: LineEditor,
    /// Whether console is shown and reads input.
    ///
    is_active: bool,

    /// Whether cursor glyph is currently shown.
    ///
    is_cursor_showing: bool,
    /// Time since last cursor blink.
    ///
    time_since_blink: f32,

    /// Current font.
    ///
    font: String,
    /// Catalog that is asked before changing font.
    ///
    font_catalog: Option<Box<dyn FontCatalog>>,

    /// Printed lines.
    ///
    scrollback: Vec<ColoredText>,
    /// Incremented on every scrollback clear.
    ///
    generation: u64,
    /// Number of scrollback clears.
    ///
    clear_count: usize,

    /// Lines that were run.
    ///
    command_history: Vec<String>,
    /// Position in command history that Up/Down navigate from.
    ///
    history_index: usize,

    /// Whether application was asked to quit.
    ///
    is_quitting: bool,
}
impl Console {
    /// Creates inactive console with given settings.
    ///
    pub fn new(settings: ConsoleSettings) -> Self {
        Console {
            editor: LineEditor::new(settings.max_line_length),
            is_active: false,

            is_cursor_showing: false,
            time_since_blink: 0.0,

            font: settings.font.clone(),
            font_catalog: None,

            scrollback: Vec::new(),
            generation: 0,
            clear_count: 0,

            command_history: Vec::new(),
            history_index: 0,

            is_quitting: false,

            settings,
        }
    }
    /// Returns settings of console.
    ///
    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    /// Returns whether console is active.
    ///
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    /// Activates console.
    ///
    pub fn activate(&mut self) {
        self.is_active = true;
    }
    /// Deactivates console.
    ///
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
    /// Activates inactive console and deactivates active one.
    ///
    pub fn toggle(&mut self) {
        if self.is_active {
            self.deactivate()
        } else {
            self.activate()
        }
    }

    /// Returns current font.
    ///
    pub fn font(&self) -> &str {
        &self.font
    }
    /// Sets current font without asking catalog.
    ///
    pub fn set_font(&mut self, font: &str) {
        self.font = font.to_string();
    }
    /// Sets catalog that is asked whether font exists.
    ///
    pub fn set_font_catalog(&mut self, catalog: Box<dyn FontCatalog>) {
        self.font_catalog = Some(catalog);
    }
    /// Returns whether font catalog knows the font (always `false` without catalog).
    ///
    pub fn has_font(&self, font: &str) -> bool {
        self.font_catalog
            .as_ref()
            .map_or(false, |catalog| catalog.has_font(font))
    }

    /// Returns edited line.
    ///
    pub fn current_line(&self) -> String {
        self.editor.text()
    }
    /// Returns line editor.
    ///
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }
    /// Returns edited line as it is displayed (with blinking cursor glyph).
    ///
    pub fn display_line(&self) -> String {
        self.editor
            .display_text(self.is_cursor_showing.then_some(self.settings.cursor_glyph))
    }

    /// Appends line to scrollback.
    ///
    pub fn print_line(&mut self, text: &str, color: Color) {
        self.scrollback.push(ColoredText::new(text, color));
    }
    /// Appends line to scrollback and returns handle that allows changing it later.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::consolecore::console::{Console, ConsoleSettings};
    /// # use ggui::mathcore::Color;
    /// let mut console: Console = Console::new(ConsoleSettings::default());
    /// let progress = console.print_dynamic_line("Loading: 0%", Color::WHITE);
    /// assert!(console.update_dynamic_line(progress, "Loading: 100%", Color::GREEN));
    /// assert_eq!(console.history()[0].text, "Loading: 100%");
    ///
    /// console.clear_history();
    /// assert!(!console.update_dynamic_line(progress, "Loading: 100%", Color::GREEN));
    /// ```
    ///
    pub fn print_dynamic_line(&mut self, text: &str, color: Color) -> DynamicLine {
        self.print_line(text, color);
        DynamicLine {
            index: self.scrollback.len() - 1,
            generation: self.generation,
        }
    }
    /// Returns line that is referenced by handle (if it was not cleared).
    ///
    pub fn dynamic_line(&self, line: DynamicLine) -> Option<&ColoredText> {
        if line.generation != self.generation {
            return None;
        }
        self.scrollback.get(line.index)
    }
    /// Changes line that is referenced by handle. Returns whether line still exists.
    ///
    pub fn update_dynamic_line(&mut self, line: DynamicLine, text: &str, color: Color) -> bool {
        if line.generation != self.generation {
            return false;
        }
        match self.scrollback.get_mut(line.index) {
            Some(entry) => {
                *entry = ColoredText::new(text, color);
                true
            }
            None => false,
        }
    }
    /// Removes all lines from scrollback.
    ///
    pub fn clear_history(&mut self) {
        self.scrollback.clear();
        self.generation += 1;
        self.clear_count += 1;
    }
    /// Returns scrollback, oldest line first.
    ///
    pub fn history(&self) -> &[ColoredText] {
        &self.scrollback
    }
    /// Returns how many times scrollback was cleared.
    ///
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    /// Appends line to command history and resets navigation position to its end.
    ///
    pub fn record_command(&mut self, line: &str) {
        self.command_history.push(line.to_string());
        self.history_index = self.command_history.len();
    }
    /// Returns lines that were run, oldest first.
    ///
    pub fn command_history(&self) -> &[String] {
        &self.command_history
    }

    /// Asks application to quit.
    ///
    pub fn request_quit(&mut self) {
        self.is_quitting = true;
    }
    /// Returns whether application was asked to quit.
    ///
    pub fn is_quitting(&self) -> bool {
        self.is_quitting
    }

    /// Handles input of the frame and advances cursor blinking.
    ///
    /// Does nothing while console is inactive.
    ///
    pub fn update(&mut self, delta_seconds: f32, registry: &CommandRegistry, input: &impl InputState) {
        if !self.is_active {
            return;
        }
        self.parse_key(registry, input);

        self.time_since_blink += delta_seconds;
        if self.time_since_blink >= self.settings.cursor_blink_interval {
            self.time_since_blink = 0.0;
            self.is_cursor_showing = !self.is_cursor_showing;
        }
    }
    /// Applies input of the frame to the edited line.
    ///
    /// `Escape` is handled first: it closes console on empty line and clears the line otherwise.
    /// Then every printable character typed during the frame is inserted in order,
    /// or (if nothing was inserted) the first pressed editing key is applied.
    ///
    pub fn parse_key(&mut self, registry: &CommandRegistry, input: &impl InputState) {
        if input.was_key_just_pressed(Key::Escape) {
            if self.editor.is_empty() {
                self.deactivate();
                return;
            }
            self.editor.clear();
        }

        let mut inserted: bool = false;
        for character in input.typed_chars() {
            if u32::from(*character) > 0x1F {
                inserted |= self.editor.insert(*character);
            }
        }
        if inserted {
            return;
        }

        if input.was_key_just_pressed(Key::Backspace) {
            let _ = self.editor.backspace();
        } else if input.was_key_just_pressed(Key::Enter) {
            self.submit_line(registry);
        } else if input.was_key_just_pressed(Key::Left) {
            let _ = self.editor.move_left();
        } else if input.was_key_just_pressed(Key::Right) {
            let _ = self.editor.move_right();
        } else if input.was_key_just_pressed(Key::Up) {
            if self.history_index > 0 {
                self.history_index -= 1;
                self.load_history_entry();
            }
        } else if input.was_key_just_pressed(Key::Down) {
            if self.history_index + 1 < self.command_history.len() {
                self.history_index += 1;
                self.load_history_entry();
            }
        } else if input.was_key_just_pressed(Key::Home) {
            self.editor.move_home();
        } else if input.was_key_just_pressed(Key::End) {
            self.editor.move_end();
        } else if input.was_key_just_pressed(Key::Delete) {
            let _ = self.editor.delete();
        }
    }
    /// Echoes and runs edited line, closes console if line is empty.
    ///
    fn submit_line(&mut self, registry: &CommandRegistry) {
        if self.editor.is_empty() {
            self.deactivate();
            return;
        }
        let line: String = self.editor.text();
        self.print_line(&line, Color::GRAY);
        if !registry.run_command(self, &line) {
            self.print_line("Invalid Command.", Color::MAROON);
        }
        self.editor.clear();
    }
    /// Replaces edited line with current command history entry.
    ///
    fn load_history_entry(&mut self) {
        if let Some(line) = self.command_history.get(self.history_index) {
            self.editor.set_text(line);
        }
    }

    /// Renders console overlay: edited line at the bottom and up to `max_lines`
    /// scrollback lines above it, the most recent one being the lowest.
    ///
    pub fn render(&self, renderer: &mut dyn Renderer) {
        if !self.is_active {
            return;
        }
        let extents: Vector2 = self.settings.ortho_extents;
        let margin: f32 = self.settings.margin;
        renderer.begin_ortho(Point::zero(), extents);
        renderer.draw_aabb(Aabb2::new(Point::zero(), extents), self.settings.overlay_color);

        let line_height: f32 = renderer.line_height(&self.font);
        let mut baseline: Point = Point::new(margin, extents.y - margin - line_height);
        let display_line: String = self.display_line();
        if !display_line.is_empty() {
            renderer.draw_text(baseline, &display_line, Color::WHITE, &self.font);
        }
        for entry in self.scrollback.iter().rev().take(self.settings.max_lines) {
            baseline.y -= line_height;
            renderer.draw_text(baseline, &entry.text, entry.color, &self.font);
        }
        renderer.end_ortho();
    }
}
impl Default for Console {
    fn default() -> Self {
        Console::new(ConsoleSettings::default())
    }
}
impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("is_active", &self.is_active)
            .field("current_line", &self.editor.text())
            .field("font", &self.font)
            .field("scrollback", &self.scrollback.len())
            .field("is_quitting", &self.is_quitting)
            .finish()
    }
}
