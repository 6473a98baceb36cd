//! `ggui::datacore` module is a core that supplies structs and functions
//! that are needed to work with external data: configs, layouts and fonts.
//!
//! # Prelude
//! `ggui::datacore` prelude can be imported with `use ggui::datacore::prelude::*`.
//!
//! # Usage
//! `datacore` module implements `AssetManager` that encapsulates work with filesystem,
//! and `FontLibrary` that loads truetype fonts by their names from the asset directory.
//!

// submodules and public re-exports
pub mod assets;
pub mod fonts;

// prelude
pub mod prelude;
