//! Prelude module: `datacore::prelude` re-exports all `ggui::datacore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggui::datacore::prelude::*;
//! ```
//!

// re-exports
pub use crate::datacore::assets::*;
pub use crate::datacore::fonts::*;
