//! `datacore::assets` submodule provides traits and structs that encapsulate work with assets.
//!
//! It defines traits like [`FromFile`] and [`ToFile`] that are implemented on structs which are
//! either serializable or deserializable.
//! You can find more about data formats that `ggui` provides in [`AssetFormat`] trait implementors.
//!
//! `ggui` serializes `Rust`-side data (console settings, widget layouts) by using
//! Concise Binary Object Representation format.
//!

use serde::{Deserialize, Serialize};
use std::{
    fs::{create_dir_all, File},
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

/// [`FromFile`] trait is implemented on objects that can be restored from file data (deserialized).
///
/// There is an auto implementation on all types that implement `serde::Deserialize`.
///
pub trait FromFile {
    /// Deserializes object from file.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error>
    where
        Self: Sized;
}
impl<T: for<'a> Deserialize<'a>> FromFile for T {
    /// Restores data from given file.
    ///
    /// This function returns an error if file does not exist or if data is not recoverable.
    ///
    fn from_file(filename: impl AsRef<Path>) -> Result<Self, Error> {
        let file = File::open(filename)?;
        serde_cbor::from_reader(file)
            .map_err(|error| Error::new(ErrorKind::InvalidData, error.to_string()))
    }
}
/// [`ToFile`] trait is implemented on objects that can be saved to file (serialized).
///
/// There is an auto implementation on all types that implement `serde::Serialize`.
///
pub trait ToFile {
    /// Serializes object to file.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error>;
}
impl<T: Serialize> ToFile for T {
    /// Saves data to file.
    ///
    /// This implementation will create a file if it does not exist, and will truncate it if it does.
    ///
    /// This function fails if file creation or truncation fails or if data is not
    /// serializable by CBOR.
    ///
    fn to_file(&self, filename: impl AsRef<Path>) -> Result<(), Error> {
        let file = File::create(filename)?;
        serde_cbor::to_writer(file, self)
            .map_err(|error| Error::new(ErrorKind::InvalidInput, error.to_string()))
    }
}

/// [`AssetFormat`] trait registers types of assets by reserving a folder for them.
///
/// Implementation of [`AssetFormat`] on [`FontAssetFormat`] means that
/// `ggui` will look for fonts in the folder with the name 'fonts'.
///
pub trait AssetFormat {
    /// Name of folder in which assets of this format will be stored.
    ///
    fn format_folder(&self) -> &'static str;
}
/// [`FontAssetFormat`] represents truetype fonts.
/// Its folder is 'fonts'.
///
#[derive(Debug, Clone, Copy)]
pub struct FontAssetFormat;
impl AssetFormat for FontAssetFormat {
    fn format_folder(&self) -> &'static str {
        "fonts"
    }
}
/// [`ConfigAssetFormat`] represents config data (e.g. console settings).
/// Its folder is 'configs'.
///
#[derive(Debug, Clone, Copy)]
pub struct ConfigAssetFormat;
impl AssetFormat for ConfigAssetFormat {
    fn format_folder(&self) -> &'static str {
        "configs"
    }
}
/// [`LayoutAssetFormat`] represents widget layouts (markup trees).
/// Its folder is 'layouts'.
///
#[derive(Debug, Clone, Copy)]
pub struct LayoutAssetFormat;
impl AssetFormat for LayoutAssetFormat {
    fn format_folder(&self) -> &'static str {
        "layouts"
    }
}

/// [`AssetManager`] struct manages directory by converting it to (or treating it as) a nice storage for game assets.
///
/// Initializing [`AssetManager`] in a directory creates folders for given formats (if they are not present).
/// Assets with corresponding [`AssetFormat`]s will be saved in those directories.
///
/// # Example
/// ```rust, no_run
/// # use ggui::datacore::assets::{AssetManager, AssetFormat, ConfigAssetFormat, FontAssetFormat, LayoutAssetFormat};
/// let manager: AssetManager = AssetManager::initialize_at(
///     "assets",
///     &[
///         FontAssetFormat.format_folder(),
///         ConfigAssetFormat.format_folder(),
///         LayoutAssetFormat.format_folder(),
///     ]
/// ).expect("Filename should be correct");
/// ```
///
#[derive(Debug)]
pub struct AssetManager {
    /// Directory that is being handled by [`AssetManager`].
    ///
    root_directory: PathBuf,
}
impl AssetManager {
    /// Initializes [`AssetManager`] in a directory.
    ///
    pub fn initialize_at(path: impl AsRef<Path>, formats: &[&'static str]) -> Result<Self, Error> {
        for format in formats {
            create_dir_all(path.as_ref().join(format).as_path())?;
        }
        if !path.as_ref().is_dir() {
            create_dir_all(&path)?;
        }
        debug!("Asset directory '{}' is ready", path.as_ref().display());

        Ok(AssetManager {
            root_directory: path.as_ref().to_path_buf(),
        })
    }

    /// Returns directory that is being handled by [`AssetManager`].
    ///
    pub fn root_directory(&self) -> &Path {
        self.root_directory.as_path()
    }
    /// Returns folder that is reserved for given format.
    ///
    pub fn format_directory(&self, format: impl AssetFormat) -> PathBuf {
        self.root_directory.join(format.format_folder())
    }
    /// Constructs full path for asset using its metadata.
    ///
    pub fn full_path(&self, filename: impl AsRef<Path>, format: impl AssetFormat) -> PathBuf {
        self.format_directory(format).join(filename)
    }

    /// Saves asset using its metadata.
    ///
    /// ```rust, no_run
    /// # use ggui::datacore::assets::{AssetManager, AssetFormat, ConfigAssetFormat};
    /// let manager: AssetManager = AssetManager::initialize_at(
    ///     "assets",
    ///     &[ConfigAssetFormat.format_folder()]
    /// ).expect("Filename should be correct");
    ///
    /// let asset: String = String::from("data");
    /// manager.save_asset("asset.data", ConfigAssetFormat, &asset)
    ///     .expect("Metadata should be correct");
    /// ```
    ///
    pub fn save_asset<T: ToFile>(
        &self,
        filename: impl AsRef<Path>,
        format: impl AssetFormat,
        asset: &T,
    ) -> Result<(), Error> {
        asset.to_file(self.full_path(filename, format).as_path())
    }
    /// Loads asset using its metadata.
    ///
    pub fn load_asset<T: FromFile>(
        &self,
        filename: impl AsRef<Path>,
        format: impl AssetFormat,
    ) -> Result<T, Error> {
        T::from_file(self.full_path(filename, format).as_path())
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn asset_manager() {
        use super::{AssetFormat, AssetManager, ConfigAssetFormat, LayoutAssetFormat};
        use std::{collections::BTreeMap, fs::remove_dir_all, io::ErrorKind};

        let root = std::env::temp_dir().join("ggui_asset_manager_test");
        let formats: [&'static str; 2] = [
            ConfigAssetFormat.format_folder(),
            LayoutAssetFormat.format_folder(),
        ];
        let manager: AssetManager =
            AssetManager::initialize_at(&root, &formats).expect("Temporary directory is writable");
        assert!(manager.format_directory(ConfigAssetFormat).is_dir());
        assert!(manager.format_directory(LayoutAssetFormat).is_dir());
        // Initializing twice reuses existing folders.
        let manager: AssetManager =
            AssetManager::initialize_at(&root, &formats).expect("Folders already exist");

        let mut config: BTreeMap<String, f32> = BTreeMap::new();
        let _ = config.insert(String::from("blink"), 0.5);
        manager
            .save_asset("console.cfg", ConfigAssetFormat, &config)
            .expect("Temporary directory is writable");
        let loaded: BTreeMap<String, f32> = manager
            .load_asset("console.cfg", ConfigAssetFormat)
            .expect("Asset was saved");
        assert_eq!(loaded, config);

        let missing = manager.load_asset::<BTreeMap<String, f32>>("missing.cfg", ConfigAssetFormat);
        assert_eq!(missing.map_err(|error| error.kind()), Err(ErrorKind::NotFound));

        remove_dir_all(&root).expect("Temporary directory is removable");
    }
}
