//! `datacore::fonts` submodule supplies instruments that help in work with truetype fonts.
//!
//! Fonts are addressed by name: font with the name `FixedSys` is the file `FixedSys.ttf`
//! in the `fonts` folder of the asset directory.
//! [`FontCatalog`] trait is what the console asks when the user wants to change the font,
//! and [`FontLibrary`] is its implementation over the filesystem.
//!
//! ## Important
//! This module works **ONLY** with truetype fonts.
//!

use crate::{
    datacore::assets::{AssetManager, FontAssetFormat},
    mathcore::Color,
};
use sdl2::{
    surface::Surface as SdlSurface,
    ttf::{init as ttf_init, Font as TTFont, FontError as TTFontError, Sdl2TtfContext},
};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
    sync::OnceLock,
};

/// [`Font`] struct handles loaded font data.
///
pub struct Font {
    /// Name of file from which font was loaded.
    ///
    filename: PathBuf,
    /// Point size of font.
    ///
    point_size: u16,
    /// Underlying sdl font.
    ///
    font: TTFont<'static, 'static>,
}
impl Font {
    /// Returns name of file from which [`Font`] was initialized.
    ///
    pub fn filename(&self) -> &Path {
        self.filename.as_path()
    }
    /// Returns this font's size in points.
    ///
    pub fn point_size(&self) -> u16 {
        self.point_size
    }
    /// Returns this font's maximum total height.
    ///
    pub fn height(&self) -> u32 {
        self.font.height().unsigned_abs()
    }
    /// Returns the width and height of the given UTF-8 text when rendered using this font.
    ///
    pub fn size_of_text(&self, text: &str) -> Option<(u32, u32)> {
        self.font.size_of(text).ok()
    }

    // All functions that are providing gate between `ggui` and `sdl2` extend their API to `crate` visibility.
    /// Renders anti-aliased single line of text on a transparent surface.
    ///
    pub(crate) fn render_blended(
        &self,
        text: &str,
        color: Color,
    ) -> Result<SdlSurface<'static>, Error> {
        self.font
            .render(text)
            .blended(color.to_rgba())
            .map_err(|error| {
                let message: String = match error {
                    TTFontError::InvalidLatin1Text(_) => String::from("Invalid Latin-1 text"),
                    TTFontError::SdlError(message) => message,
                };
                Error::new(ErrorKind::InvalidData, message)
            })
    }
}
impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("filename", &self.filename)
            .field("point_size", &self.point_size)
            .finish()
    }
}

/// [`TTF_CONTEXT`] global static variable handles `sdl2::ttf` context.
///
static TTF_CONTEXT: OnceLock<Sdl2TtfContext> = OnceLock::new();
/// [`FontSystem`] is a global handler for truetype fonts.
///
/// ### `FontSystem::init` should be called before loading any font.
///
#[derive(Copy, Clone, Debug)]
pub enum FontSystem {}
impl FontSystem {
    /// Initializes truetype font system.
    ///
    /// Repeated calls are no-op.
    ///
    pub fn init() -> Result<(), Error> {
        if TTF_CONTEXT.get().is_some() {
            return Ok(());
        }
        let context: Sdl2TtfContext =
            ttf_init().map_err(|error| Error::new(ErrorKind::Other, error.to_string()))?;
        let _ = TTF_CONTEXT.set(context);
        Ok(())
    }

    /// Loads truetype font from path with given size in points.
    ///
    /// # Examples
    /// ```rust, no_run
    /// # use ggui::datacore::fonts::FontSystem;
    /// FontSystem::init().expect("Font driver should be available");
    /// let font = FontSystem::load_font("fonts/FixedSys.ttf", 14)
    ///     .expect("Filename should be correct");
    /// ```
    ///
    pub fn load_font(path: impl AsRef<Path>, point_size: u16) -> Result<Font, Error> {
        let context: &'static Sdl2TtfContext = TTF_CONTEXT.get().ok_or_else(|| {
            Error::new(
                ErrorKind::Other,
                "`FontSystem::init` should be called before loading fonts",
            )
        })?;
        Ok(Font {
            filename: path.as_ref().to_path_buf(),
            point_size,
            font: context
                .load_font(path.as_ref(), point_size)
                .map_err(|message| Error::new(ErrorKind::NotFound, message))?,
        })
    }
}

/// [`FontCatalog`] trait answers whether font with given name can be used.
///
/// Console asks its catalog before switching fonts, so it never ends up with a font
/// that the renderer cannot find.
///
pub trait FontCatalog {
    /// Returns whether font with given name is available.
    ///
    fn has_font(&self, name: &str) -> bool;
}
impl FontCatalog for HashSet<String> {
    fn has_font(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// [`FontLibrary`] struct loads fonts by their names from a directory and caches them.
///
/// # Example
/// ```rust
/// # use ggui::datacore::fonts::{FontCatalog, FontLibrary};
/// let library: FontLibrary = FontLibrary::new("assets/fonts", 16);
/// assert_eq!(
///     library.font_path("FixedSys"),
///     std::path::Path::new("assets/fonts/FixedSys.ttf")
/// );
/// assert!(!library.has_font("NoSuchFont"));
/// ```
///
#[derive(Debug)]
pub struct FontLibrary {
    /// Directory with `.ttf` files.
    ///
    directory: PathBuf,
    /// Point size with which fonts are loaded.
    ///
    point_size: u16,
    /// Fonts that were already loaded.
    ///
    loaded: HashMap<String, Font>,
}
impl FontLibrary {
    /// Extension of font files.
    ///
    pub const EXTENSION: &'static str = "ttf";

    /// Initializes [`FontLibrary`] over given directory.
    ///
    pub fn new(directory: impl AsRef<Path>, point_size: u16) -> Self {
        FontLibrary {
            directory: directory.as_ref().to_path_buf(),
            point_size,
            loaded: HashMap::new(),
        }
    }
    /// Initializes [`FontLibrary`] over fonts folder of the asset directory.
    ///
    pub fn from_assets(manager: &AssetManager, point_size: u16) -> Self {
        FontLibrary::new(manager.format_directory(FontAssetFormat), point_size)
    }

    /// Returns path at which font with given name is expected.
    ///
    pub fn font_path(&self, name: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", name, FontLibrary::EXTENSION))
    }
    /// Returns font with given name, loading it on first use.
    ///
    pub fn get_or_load(&mut self, name: &str) -> Result<&Font, Error> {
        if !self.loaded.contains_key(name) {
            let font: Font = FontSystem::load_font(self.font_path(name), self.point_size)?;
            info!("Font '{}' was loaded from '{}'", name, font.filename().display());
            let _ = self.loaded.insert(name.to_string(), font);
        }
        self.loaded
            .get(name)
            .ok_or_else(|| Error::new(ErrorKind::NotFound, name.to_string()))
    }
}
impl FontCatalog for FontLibrary {
    fn has_font(&self, name: &str) -> bool {
        self.loaded.contains_key(name) || self.font_path(name).is_file()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn font_library() {
        use super::{FontCatalog, FontLibrary};
        use std::fs::{create_dir_all, remove_dir_all, File};

        let directory = std::env::temp_dir().join("ggui_font_library_test");
        create_dir_all(&directory).expect("Temporary directory is writable");
        let _ = File::create(directory.join("Mono.ttf")).expect("Temporary directory is writable");

        let library: FontLibrary = FontLibrary::new(&directory, 12);
        assert!(library.has_font("Mono"));
        assert!(!library.has_font("Serif"));
        assert_eq!(library.font_path("Serif"), directory.join("Serif.ttf"));

        remove_dir_all(&directory).expect("Temporary directory is removable");
    }
}
