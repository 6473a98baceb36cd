//! `ggui::graphicscore` module is a core that provides rendering interface for `ggui`.
//!
//! `ggui` never owns pixel output - widgets and console only issue draw calls through
//! [`Renderer`](drawing::Renderer) trait, which is implemented for the window canvas.
//!

// submodules and public re-exports
pub mod drawing;
