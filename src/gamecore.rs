//! `ggui::gamecore` module is a core that supplies game-side plumbing for `ggui`:
//! ids that identify widgets and commands, events that are used for communication between
//! `ggui` parts and the game, and storages for them.
//!

// submodules and public re-exports
pub mod events;
pub mod identifiers;
pub mod storages;
