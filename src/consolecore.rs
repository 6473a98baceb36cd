//! `ggui::consolecore` module is a core that implements in-game developer console.
//!
//! # Flow
//! [`Console`](console::Console) collects typed characters into its line editor.
//! When `Enter` is pressed, the line is echoed to the scrollback and passed to
//! [`CommandRegistry`](registry::CommandRegistry), which tokenizes it into
//! [`Command`](commands::Command) and calls the handler that is registered under its name.
//!
//! Registry is created explicitly (usually by [`GGUI`](crate::GGUI)) and is passed to the console
//! on every update, so there is no global command table.
//!

// submodules and public re-exports
pub mod builtins;
pub mod commands;
pub mod console;
pub mod line_editor;
pub mod registry;
