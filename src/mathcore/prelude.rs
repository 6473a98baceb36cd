//! Prelude module: `mathcore::prelude` re-exports all `ggui::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggui::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::floats::*;
pub use crate::mathcore::shapes::*;
pub use crate::mathcore::vectors::*;
pub use crate::mathcore::*;
