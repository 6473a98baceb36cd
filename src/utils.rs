//! `utils` module defines several constructs that are essential to the
//! application powered by `ggui`: platform initialization, windows and event pumping.
//!
//! This module can be thought of as a collection of abstractions over OS.
//!

use crate::{inputcore::system::InputSystem, mathcore::vectors::Vector2Int};
use sdl2::{
    event::Event as SdlEvent,
    init as sdl_initialization,
    video::{
        FullscreenType as SdlFullscreenType, Window as SdlWindow,
        WindowBuilder as SdlWindowBuilder,
    },
    EventPump as SdlEventPump, Sdl, VideoSubsystem as SdlVideoSubsystem,
};
use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

/// [`PlatformError`] struct is returned when underlying platform layer fails.
///
/// It carries the message that was reported by the platform.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformError {
    /// Message of the platform.
    ///
    message: String,
}
impl PlatformError {
    /// Creates [`PlatformError`] with given message.
    ///
    pub(crate) fn new(message: impl Into<String>) -> Self {
        PlatformError {
            message: message.into(),
        }
    }

    /// Returns message of the platform.
    ///
    pub fn message(&self) -> &str {
        &self.message
    }
}
impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "platform error: {}", self.message)
    }
}
impl Error for PlatformError {}

/// [`Position`] enum encapsulates possible position settings.
///
/// Example of usage is shown in [`WindowSettings`] docs.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    /// Exact position that is given by coordinate (left top corner is `(0, 0)`).
    ///
    Exact(Vector2Int),
    /// Centered position.
    ///
    Centered,
}
/// [`FullscreenType`] lists types of fullscreen that are applicable to window.
///
/// Example of usage is shown in [`WindowSettings`] docs.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FullscreenType {
    /// Fullscreen is a real fullscreen mode - OS changes video mode for your application, but
    /// tabbing to another program might switch video mode back.
    ///
    Fullscreen,
    /// Desktop fullscreen is a 'fake' fullscreen - the actual video mode would not change.
    ///
    DesktopFullscreen,
}
impl FullscreenType {
    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Converts `sdl2` SdlFullscreenType to [`FullscreenType`].
    ///
    /// `None` corresponds to fullscreen not being enabled.
    ///
    pub(crate) fn from_sdl_fullscreen_type(
        fullscreen_type: SdlFullscreenType,
    ) -> Option<FullscreenType> {
        match fullscreen_type {
            SdlFullscreenType::Off => None,
            SdlFullscreenType::True => Some(FullscreenType::Fullscreen),
            SdlFullscreenType::Desktop => Some(FullscreenType::DesktopFullscreen),
        }
    }
    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Returns `sdl2` representation of this enum.
    ///
    pub(crate) fn to_sdl_fullscreen_type(this: Option<FullscreenType>) -> SdlFullscreenType {
        match this {
            Some(FullscreenType::Fullscreen) => SdlFullscreenType::True,
            Some(FullscreenType::DesktopFullscreen) => SdlFullscreenType::Desktop,
            None => SdlFullscreenType::Off,
        }
    }
}
/// [`InitialSizing`] enum lists possible states for window initial sizing.
///
/// Size that was given to window will be preserved, but window itself can be minimized or maximized.
///
/// Example of usage is shown in [`WindowSettings`] docs.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InitialSizing {
    /// Window will be minimized upon initialization.
    ///
    Minimized,
    /// Window will be maximized upon initialization.
    ///
    Maximized,
}
/// [`WindowSettings`] struct carries data that is needed for window configuration.
///
/// If you do not want to tweak settings, just pass `..Default::default()` to fill up remaining options.
/// Settings are serializable, so they can be stored as config asset next to
/// [`ConsoleSettings`](crate::consolecore::console::ConsoleSettings).
///
/// # Examples
/// ```rust
/// # use ggui::utils::{WindowSettings, Position, FullscreenType, InitialSizing};
/// let window: WindowSettings = WindowSettings {
///     position: Some(Position::Centered),
///     initial_fullscreen: Some(FullscreenType::Fullscreen),
///     initial_sizing: Some(InitialSizing::Maximized),
///     ..WindowSettings::default()
/// };
/// ```
///
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    /// Initial window position.
    ///
    pub position: Option<Position>,

    /// Fullscreen mode of the window.
    ///
    pub initial_fullscreen: Option<FullscreenType>,
    /// Decides whether the window will always be on top or not.
    ///
    pub always_on_top: bool,

    /// Decides whether the window will be resizable or not.
    ///
    pub is_resizable: bool,
    /// Initial sizing of the window.
    ///
    pub initial_sizing: Option<InitialSizing>,

    /// Decides whether the window will be hidden or not.
    ///
    pub is_hidden: bool,
    /// Decides whether the window will be borderless or not.
    ///
    pub is_borderless: bool,
    /// Decides whether the window will allow high dpi or not.
    ///
    pub allow_high_dpi: bool,
}
impl WindowSettings {
    /// Applies settings to `sdl2` WindowBuilder.
    ///
    fn apply_to_builder(self, window_builder: &mut SdlWindowBuilder) -> &mut SdlWindowBuilder {
        if let Some(position) = self.position {
            let _ = match position {
                Position::Exact(Vector2Int { x, y }) => window_builder.position(x, y),
                Position::Centered => window_builder.position_centered(),
            };
        }
        if let Some(fullscreen_type) = self.initial_fullscreen {
            let _ = match fullscreen_type {
                FullscreenType::Fullscreen => window_builder.fullscreen(),
                FullscreenType::DesktopFullscreen => window_builder.fullscreen_desktop(),
            };
        }
        if self.always_on_top {
            let _ = window_builder.always_on_top();
        }
        if self.is_resizable {
            let _ = window_builder.resizable();
        }
        if let Some(initial_size) = self.initial_sizing {
            let _ = match initial_size {
                InitialSizing::Minimized => window_builder.minimized(),
                InitialSizing::Maximized => window_builder.maximized(),
            };
        }
        if self.is_hidden {
            let _ = window_builder.hidden();
        }
        if self.is_borderless {
            let _ = window_builder.borderless();
        }
        if self.allow_high_dpi {
            let _ = window_builder.allow_highdpi();
        }
        window_builder
    }
}
impl Default for WindowSettings {
    fn default() -> Self {
        WindowSettings {
            position: None,

            initial_fullscreen: None,
            always_on_top: false,

            is_resizable: true,
            initial_sizing: None,

            is_hidden: false,
            is_borderless: false,
            allow_high_dpi: true,
        }
    }
}

/// [`Platform`] struct handles global context for `ggui` applications.
///
/// This struct uses underlying handler that is local to the main thread, so
/// event handling is bound to the thread where [`Platform`] was initialized.
///
/// [`Platform`] initializes **ONLY** subsystems that are needed for `ggui` work -
/// video system with text input and event system; fonts should be initialized with
/// [`FontSystem::init`](crate::datacore::fonts::FontSystem::init).
///
/// # Example
/// ```rust, no_run
/// # use ggui::utils::{Platform, Window};
/// let platform: Platform = Platform::init().expect("SDL should be available");
/// let window: Window = platform
///     .build_window("GGUI", 1600, 900, Default::default())
///     .expect("Window should be buildable");
/// ```
///
pub struct Platform {
    /// Underlying `sdl2` context handler.
    ///
    _sdl: Sdl,
    /// Underlying video subsystem.
    ///
    video: SdlVideoSubsystem,
    /// Underlying event pump.
    ///
    event_pump: SdlEventPump,
}
impl Platform {
    /// Initializes `sdl2` context, video subsystem and event pump, and starts text input.
    ///
    pub fn init() -> Result<Platform, PlatformError> {
        let sdl: Sdl = sdl_initialization().map_err(PlatformError::new)?;
        let video: SdlVideoSubsystem = sdl.video().map_err(PlatformError::new)?;
        let event_pump: SdlEventPump = sdl.event_pump().map_err(PlatformError::new)?;
        video.text_input().start();
        info!("Platform was initialized (video driver: {})", video.current_video_driver());
        Ok(Platform {
            _sdl: sdl,
            video,
            event_pump,
        })
    }

    /// Builds window with given settings.
    ///
    pub fn build_window(
        &self,
        title: &str,
        width: u32,
        height: u32,
        window_settings: WindowSettings,
    ) -> Result<Window, PlatformError> {
        let window: SdlWindow = window_settings
            .apply_to_builder(&mut self.video.window(title, width, height))
            .build()
            .map_err(|error| PlatformError::new(error.to_string()))?;
        debug!("Window '{}' ({}x{}) was built", title, width, height);
        Ok(Window { window })
    }

    /// Starts new input frame and feeds all pending platform events to the input system.
    ///
    /// Returns `false` if the user requested to close the application.
    ///
    pub fn pump_events(&mut self, input: &mut InputSystem) -> bool {
        input.begin_frame();
        let mut is_running: bool = true;
        for event in self.event_pump.poll_iter() {
            if let SdlEvent::Quit { .. } = event {
                is_running = false;
            }
            input.handle_sdl_event(&event);
        }
        is_running
    }
}
impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").finish()
    }
}

/// [`Window`] struct represents the shell of OS window.
///
/// To use window for drawing you should turn it into
/// [`WindowCanvas`](crate::graphicscore::drawing::WindowCanvas).
///
pub struct Window {
    /// Underlying `sdl2` window.
    ///
    window: SdlWindow,
}
impl Window {
    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Destructures itself by consuming [`Window`].
    ///
    pub(crate) fn destructure(self) -> SdlWindow {
        self.window
    }

    /// Returns id of the window.
    ///
    pub fn id(&self) -> u32 {
        self.window.id()
    }

    /// Sets new title for the window.
    ///
    pub fn set_title(&mut self, title: &str) -> Result<(), PlatformError> {
        self.window
            .set_title(title)
            .map_err(|error| PlatformError::new(error.to_string()))
    }
    /// Returns window's title.
    ///
    pub fn title(&self) -> &str {
        self.window.title()
    }

    /// Returns current window size.
    ///
    pub fn size(&self) -> (u32, u32) {
        self.window.size()
    }
    /// Returns current window fullscreen type.
    ///
    /// `None` corresponds to fullscreen not being enabled.
    ///
    pub fn fullscreen_type(&self) -> Option<FullscreenType> {
        FullscreenType::from_sdl_fullscreen_type(self.window.fullscreen_state())
    }
    /// Switches window fullscreen type.
    ///
    /// `None` returns window to windowed mode.
    ///
    pub fn set_fullscreen_type(
        &mut self,
        fullscreen_type: Option<FullscreenType>,
    ) -> Result<(), PlatformError> {
        self.window
            .set_fullscreen(FullscreenType::to_sdl_fullscreen_type(fullscreen_type))
            .map_err(PlatformError::new)
    }
}
impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(&format!("Window {id}", id = self.id()))
            .finish()
    }
}
