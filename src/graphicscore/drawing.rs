//! `graphicscore::drawing` submodule defines [`Renderer`] trait that `ggui` draws with,
//! [`WindowCanvas`] struct that implements it on top of `sdl2`,
//! and [`RecordingRenderer`] that only remembers draw calls.
//!
//! # Coordinates
//! Everything is drawn in orthographic projection that is set up by `begin_ortho`:
//! `mins` corresponds to the top left corner of the window and `maxs` corresponds to the bottom right one,
//! so `ggui` can lay widgets and console out in virtual resolution regardless of window size.
//!

use crate::{
    datacore::fonts::FontLibrary,
    mathcore::{
        shapes::Aabb2,
        vectors::{Point, Vector2},
        Color,
    },
    utils::{PlatformError, Window},
};
use sdl2::{
    rect::FRect as SdlFRect,
    render::{
        BlendMode as SdlBlendMode, TextureCreator as SdlTextureCreator,
        WindowCanvas as SdlWindowCanvas,
    },
    video::WindowContext as SdlWindowContext,
};
use std::{collections::HashSet, fmt};

/// [`Renderer`] trait defines drawing methods that `ggui` needs.
///
/// # Example
/// ```rust
/// # use ggui::graphicscore::drawing::{DrawCall, RecordingRenderer, Renderer};
/// # use ggui::mathcore::{Color, shapes::Aabb2, vectors::Point};
/// let mut renderer: RecordingRenderer = RecordingRenderer::new();
/// renderer.begin_ortho(Point::zero(), Point::new(1600.0, 900.0));
/// renderer.draw_aabb(Aabb2::new(Point::zero(), Point::new(10.0, 10.0)), Color::RED);
/// renderer.end_ortho();
/// assert_eq!(renderer.calls().len(), 3);
/// ```
///
pub trait Renderer {
    /// Starts orthographic projection that maps `mins..maxs` onto the whole render target.
    ///
    /// Projections can be nested, `end_ortho` restores the previous one.
    ///
    fn begin_ortho(&mut self, mins: Point, maxs: Point);
    /// Ends orthographic projection.
    ///
    fn end_ortho(&mut self);

    /// Fills axis-aligned box with given color (alpha-blended).
    ///
    fn draw_aabb(&mut self, bounds: Aabb2, color: Color);
    /// Draws single line of text with its top left corner at `position`.
    ///
    fn draw_text(&mut self, position: Point, text: &str, color: Color, font: &str);
    /// Returns height of a line of text that is drawn with given font.
    ///
    fn line_height(&mut self, font: &str) -> f32;
}

/// [`DrawCall`] enum lists calls that were issued to [`RecordingRenderer`].
///
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// `begin_ortho` call.
    ///
    BeginOrtho {
        /// Top left corner of the projection.
        ///
        mins: Point,
        /// Bottom right corner of the projection.
        ///
        maxs: Point,
    },
    /// `end_ortho` call.
    ///
    EndOrtho,
    /// `draw_aabb` call.
    ///
    Aabb {
        /// Box that was filled.
        ///
        bounds: Aabb2,
        /// Fill color.
        ///
        color: Color,
    },
    /// `draw_text` call.
    ///
    Text {
        /// Top left corner of the text.
        ///
        position: Point,
        /// Drawn text.
        ///
        text: String,
        /// Text color.
        ///
        color: Color,
        /// Font name.
        ///
        font: String,
    },
}

/// [`RecordingRenderer`] struct implements [`Renderer`] by recording calls instead of drawing.
///
/// It is useful for running `ggui` headless and for inspecting what was drawn.
///
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    /// Recorded calls.
    ///
    calls: Vec<DrawCall>,
    /// Height that is reported for every font.
    ///
    line_height: f32,
}
impl RecordingRenderer {
    /// Line height that is reported by default.
    ///
    pub const DEFAULT_LINE_HEIGHT: f32 = 20.0;

    /// Initializes empty [`RecordingRenderer`].
    ///
    pub fn new() -> Self {
        RecordingRenderer::with_line_height(RecordingRenderer::DEFAULT_LINE_HEIGHT)
    }
    /// Initializes empty [`RecordingRenderer`] that reports given line height.
    ///
    pub fn with_line_height(line_height: f32) -> Self {
        RecordingRenderer {
            calls: Vec::new(),
            line_height,
        }
    }

    /// Returns recorded calls.
    ///
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }
    /// Returns texts that were drawn, in drawing order.
    ///
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
    /// Returns boxes that were filled, in drawing order.
    ///
    pub fn boxes(&self) -> Vec<(Aabb2, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match *call {
                DrawCall::Aabb { bounds, color } => Some((bounds, color)),
                _ => None,
            })
            .collect()
    }
    /// Forgets recorded calls.
    ///
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}
impl Default for RecordingRenderer {
    fn default() -> Self {
        RecordingRenderer::new()
    }
}
impl Renderer for RecordingRenderer {
    fn begin_ortho(&mut self, mins: Point, maxs: Point) {
        self.calls.push(DrawCall::BeginOrtho { mins, maxs });
    }
    fn end_ortho(&mut self) {
        self.calls.push(DrawCall::EndOrtho);
    }

    fn draw_aabb(&mut self, bounds: Aabb2, color: Color) {
        self.calls.push(DrawCall::Aabb { bounds, color });
    }
    fn draw_text(&mut self, position: Point, text: &str, color: Color, font: &str) {
        self.calls.push(DrawCall::Text {
            position,
            text: text.to_string(),
            color,
            font: font.to_string(),
        });
    }
    fn line_height(&mut self, _font: &str) -> f32 {
        self.line_height
    }
}

/// [`Projection`] struct stores origin and scale of orthographic projection.
///
#[derive(Copy, Clone, Debug)]
struct Projection {
    /// Point that is mapped to the top left corner of the window.
    ///
    origin: Point,
    /// Scale from virtual units to pixels.
    ///
    scale: Vector2,
}
impl Default for Projection {
    fn default() -> Self {
        Projection {
            origin: Point::zero(),
            scale: Vector2::one(),
        }
    }
}

/// [`WindowCanvas`] struct represents canvas that allows drawing on a [`Window`].
///
/// [`WindowCanvas`] is instantiated from [`Window`] struct by consuming it (OS shell of window is not destroyed).
/// It owns [`FontLibrary`] from which fonts for text drawing are taken.
///
/// # Example
/// ```rust, no_run
/// # use ggui::{utils::{Platform, Window}, datacore::fonts::FontLibrary};
/// # use ggui::graphicscore::drawing::WindowCanvas;
/// let platform: Platform = Platform::init().expect("SDL should be available");
/// let window: Window = platform
///     .build_window("ggui", 1600, 900, Default::default())
///     .expect("Window should be buildable");
/// let canvas: WindowCanvas = WindowCanvas::from_window(window, true, FontLibrary::new("assets/fonts", 16))
///     .expect("Canvas should be buildable");
/// ```
///
pub struct WindowCanvas {
    /// Underlying `sdl2` canvas.
    ///
    canvas: SdlWindowCanvas,
    /// Texture creator that is used for text rendering.
    ///
    texture_creator: SdlTextureCreator<SdlWindowContext>,
    /// Fonts.
    ///
    fonts: FontLibrary,
    /// Names of fonts that failed to load (reported once).
    ///
    missing_fonts: HashSet<String>,
    /// Stack of active projections.
    ///
    projections: Vec<Projection>,
}
impl WindowCanvas {
    /// Line height that is reported when font could not be loaded.
    ///
    pub const FALLBACK_LINE_HEIGHT: f32 = 20.0;

    /// Constructs [`WindowCanvas`] from the [`Window`] by consuming it.
    ///
    pub fn from_window(window: Window, vsync: bool, fonts: FontLibrary) -> Result<Self, PlatformError> {
        let builder = {
            let builder = window.destructure().into_canvas().accelerated();
            if vsync {
                builder.present_vsync()
            } else {
                builder
            }
        };
        let mut canvas: SdlWindowCanvas = builder
            .build()
            .map_err(|error| PlatformError::new(error.to_string()))?;
        canvas.set_blend_mode(SdlBlendMode::Blend);
        let texture_creator = canvas.texture_creator();
        Ok(WindowCanvas {
            canvas,
            texture_creator,
            fonts,
            missing_fonts: HashSet::new(),
            projections: Vec::new(),
        })
    }

    /// Returns font library of the canvas.
    ///
    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Clears the whole canvas with given color.
    ///
    pub fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color.to_rgba());
        self.canvas.clear();
    }
    /// Shows everything that was drawn since the last call.
    ///
    pub fn present(&mut self) {
        self.canvas.present();
    }

    /// Returns current projection.
    ///
    fn projection(&self) -> Projection {
        self.projections.last().copied().unwrap_or_default()
    }
    /// Applies scale of the projection to the `sdl2` canvas.
    ///
    fn apply_projection(&mut self, projection: Projection) {
        if let Err(message) = self
            .canvas
            .set_scale(projection.scale.x, projection.scale.y)
        {
            warn!("Projection could not be applied: {}", message);
        }
    }
}
impl Renderer for WindowCanvas {
    fn begin_ortho(&mut self, mins: Point, maxs: Point) {
        let extents: Vector2 = maxs - mins;
        let scale: Vector2 = match self.canvas.output_size() {
            Ok((width, height)) if extents.x > 0.0 && extents.y > 0.0 => {
                Vector2::new(width as f32 / extents.x, height as f32 / extents.y)
            }
            _ => Vector2::one(),
        };
        let projection: Projection = Projection {
            origin: mins,
            scale,
        };
        self.projections.push(projection);
        self.apply_projection(projection);
    }
    fn end_ortho(&mut self) {
        let _ = self.projections.pop();
        let projection: Projection = self.projection();
        self.apply_projection(projection);
    }

    fn draw_aabb(&mut self, bounds: Aabb2, color: Color) {
        let origin: Point = bounds.mins - self.projection().origin;
        self.canvas.set_draw_color(color.to_rgba());
        if let Err(message) = self.canvas.fill_frect(SdlFRect::new(
            origin.x,
            origin.y,
            bounds.width(),
            bounds.height(),
        )) {
            warn!("Box could not be drawn: {}", message);
        }
    }
    fn draw_text(&mut self, position: Point, text: &str, color: Color, font: &str) {
        if text.is_empty() {
            return;
        }
        let surface = match self.fonts.get_or_load(font) {
            Ok(font) => font.render_blended(text, color),
            Err(error) => {
                if self.missing_fonts.insert(font.to_string()) {
                    warn!("Font '{}' could not be loaded: {}", font, error);
                }
                return;
            }
        };
        let surface = match surface {
            Ok(surface) => surface,
            Err(error) => {
                warn!("Text '{}' could not be rendered: {}", text, error);
                return;
            }
        };
        let texture = match self.texture_creator.create_texture_from_surface(&surface) {
            Ok(texture) => texture,
            Err(error) => {
                warn!("Text texture could not be created: {}", error);
                return;
            }
        };
        let origin: Point = position - self.projection().origin;
        if let Err(message) = self.canvas.copy_f(
            &texture,
            None,
            SdlFRect::new(
                origin.x,
                origin.y,
                surface.width() as f32,
                surface.height() as f32,
            ),
        ) {
            warn!("Text could not be drawn: {}", message);
        }
    }
    fn line_height(&mut self, font: &str) -> f32 {
        self.fonts
            .get_or_load(font)
            .map(|font| font.height() as f32)
            .unwrap_or(WindowCanvas::FALLBACK_LINE_HEIGHT)
    }
}
impl fmt::Debug for WindowCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowCanvas")
            .field("fonts", &self.fonts)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn recording_renderer() {
        use super::{DrawCall, RecordingRenderer, Renderer};
        use crate::mathcore::{shapes::Aabb2, vectors::Point, Color};

        let mut renderer: RecordingRenderer = RecordingRenderer::with_line_height(16.0);
        assert_eq!(renderer.line_height("FixedSys"), 16.0);

        let bounds: Aabb2 = Aabb2::new(Point::zero(), Point::new(4.0, 4.0));
        renderer.draw_aabb(bounds, Color::BLUE);
        renderer.draw_text(Point::new(1.0, 2.0), "hello", Color::WHITE, "FixedSys");
        renderer.draw_text(Point::new(1.0, 22.0), "world", Color::GRAY, "FixedSys");

        assert_eq!(renderer.boxes(), vec![(bounds, Color::BLUE)]);
        assert_eq!(renderer.texts(), vec!["hello", "world"]);
        assert_eq!(
            renderer.calls()[1],
            DrawCall::Text {
                position: Point::new(1.0, 2.0),
                text: String::from("hello"),
                color: Color::WHITE,
                font: String::from("FixedSys"),
            }
        );

        renderer.clear();
        assert!(renderer.calls().is_empty());
    }
}
