//! # GGUI
//!
//! **GGUI** - widget tree and in-game console core for 2d game engines written in pure Rust.
//!
//! [`GGUI`] context owns [`UiSystem`](uicore::system::UiSystem), that builds widget trees from markup
//! and turns clicks into events, and [`Console`](consolecore::console::Console) with its
//! [`CommandRegistry`](consolecore::registry::CommandRegistry).
//! Both are drawn through [`Renderer`](graphicscore::drawing::Renderer) trait and read input through
//! [`InputState`](inputcore::system::InputState) trait, so they can be run on top of `sdl2` ([`utils::Platform`])
//! or headless.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate bitflags;

extern crate sdl2;

extern crate serde;
extern crate serde_cbor;

#[macro_use]
extern crate log;

// utils
mod ggui;
pub use crate::ggui::*;

pub mod utils;

// cores
pub mod consolecore;
pub mod datacore;
pub mod gamecore;
pub mod graphicscore;
pub mod inputcore;
pub mod mathcore;
pub mod uicore;
