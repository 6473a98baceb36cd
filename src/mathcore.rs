//! `ggui::mathcore` module is a core that implements math primitives used by the rest of `ggui`.
//!
//! # Prelude
//! `ggui::mathcore` prelude can be imported with `use ggui::mathcore::prelude::*`.
//!
//! # Model
//! Widgets are laid out on a plane: their offsets, sizes and paddings are [`Vector2`](vectors::Vector2)s,
//! their bounds are axis-aligned boxes ([`Aabb2`](shapes::Aabb2)) and their appearance is described by [`Color`]s.
//! All of those can be parsed from strings, since widget layouts are usually written by hand.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod floats;
pub mod shapes;
pub mod vectors;

// prelude
pub mod prelude;
