//! `ggui` hidden submodule implements [`GGUI`] struct that owns every part of `ggui`
//! and drives them frame by frame.
//!

use crate::{
    consolecore::{
        console::{Console, ConsoleSettings},
        registry::CommandRegistry,
    },
    gamecore::storages::EventStorage,
    graphicscore::drawing::Renderer,
    inputcore::{keys::Key, system::InputState},
    uicore::system::UiSystem,
};
use std::fmt;

/// [`GGUI`] struct is a context that holds command registry, console, UI and events.
///
/// Each frame game should call [`GGUI::update`] with the input of that frame and then [`GGUI::render`].
/// Backquote key toggles the console. While console is open, it captures input
/// and UI does not react to clicks.
/// Widget click events are accumulated in [`GGUI::events_mut`] until the game drains them.
///
/// # Example
/// ```rust
/// # use ggui::{GGUI, consolecore::console::ConsoleSettings};
/// # use ggui::inputcore::{keys::Key, system::InputSystem};
/// # use ggui::graphicscore::drawing::RecordingRenderer;
/// let mut gui: GGUI = GGUI::new(ConsoleSettings::default());
/// let mut input: InputSystem = InputSystem::new();
/// let mut renderer: RecordingRenderer = RecordingRenderer::new();
///
/// input.keyboard_mut().set_key(Key::Backquote, true);
/// gui.update(0.016, &input);
/// gui.render(&mut renderer);
/// assert!(gui.console().is_active());
///
/// assert!(gui.run_command("quit"));
/// assert!(gui.is_quitting());
/// ```
///
pub struct GGUI {
    /// Console commands.
    ///
    registry: CommandRegistry,
    /// In-game console.
    ///
    console: Console,
    /// Widget tree driver.
    ///
    ui: UiSystem,
    /// Fired events.
    ///
    events: EventStorage,
}
impl GGUI {
    /// Creates context with built-in console commands and empty UI.
    ///
    /// UI uses the same font as console.
    ///
    pub fn new(settings: ConsoleSettings) -> GGUI {
        let ui: UiSystem = UiSystem::new(&settings.font);
        let registry: CommandRegistry = CommandRegistry::with_builtins();
        info!("GGUI was initialized with {} console commands", registry.len());
        GGUI {
            registry,
            console: Console::new(settings),
            ui,
            events: EventStorage::new(),
        }
    }

    /// Returns command registry.
    ///
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
    /// Returns mutable reference to command registry, so game can register its commands.
    ///
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }
    /// Returns console.
    ///
    pub fn console(&self) -> &Console {
        &self.console
    }
    /// Returns mutable reference to console.
    ///
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }
    /// Returns UI system.
    ///
    pub fn ui(&self) -> &UiSystem {
        &self.ui
    }
    /// Returns mutable reference to UI system.
    ///
    pub fn ui_mut(&mut self) -> &mut UiSystem {
        &mut self.ui
    }
    /// Returns events that were fired.
    ///
    pub fn events(&self) -> &EventStorage {
        &self.events
    }
    /// Returns mutable reference to fired events, so game can drain them.
    ///
    pub fn events_mut(&mut self) -> &mut EventStorage {
        &mut self.events
    }

    /// Runs console line as if it was entered, returns whether command was found.
    ///
    pub fn run_command(&mut self, line: &str) -> bool {
        self.registry.run_command(&mut self.console, line)
    }
    /// Returns whether `quit` command was run.
    ///
    pub fn is_quitting(&self) -> bool {
        self.console.is_quitting()
    }
    /// Informs UI about new window size.
    ///
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.ui.set_viewport_size(width, height);
    }

    /// Handles input of the frame.
    ///
    /// Frame where console is toggled is not passed to the console, so backquote is never typed into it.
    ///
    pub fn update(&mut self, delta_seconds: f32, input: &impl InputState) {
        if input.was_key_just_pressed(Key::Backquote) {
            self.console.toggle();
        } else {
            self.console.update(delta_seconds, &self.registry, input);
        }
        if !self.console.is_active() {
            self.ui.update(delta_seconds, input, &mut self.events);
        }
    }
    /// Renders UI and console over it.
    ///
    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.ui.render(renderer);
        self.console.render(renderer);
    }
}
impl fmt::Debug for GGUI {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GGUI")
            .field("registry", &self.registry)
            .field("console", &self.console)
            .field("ui", &self.ui)
            .finish()
    }
}
