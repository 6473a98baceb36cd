//! `ggui::inputcore` module is a core that tracks keyboard and mouse state between frames
//! and exposes it to `ggui` parts through [`InputState`](system::InputState) trait.
//!
//! # Model
//! Input is gathered in frames. At the start of the frame [`InputSystem`](system::InputSystem)
//! forgets everything that was 'just' pressed or released, then it is fed with platform events
//! (or directly by the devices in tests), and then `ggui` parts query it during update.
//!

// submodules and public re-exports
pub mod devices;
pub mod keys;
pub mod system;
