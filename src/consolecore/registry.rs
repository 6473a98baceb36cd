//! `consolecore::registry` submodule implements [`CommandRegistry`] - table of console commands.
//!

use crate::{
    consolecore::{builtins, commands::Command, console::Console},
    gamecore::{
        identifiers::CommandId,
        storages::{IdMap, NoOpHasherState},
    },
};
use std::{collections::BTreeMap, fmt};

/// Type alias for functions that handle console commands.
///
/// Handler receives the registry it was called from (so it can dispatch other commands),
/// the console it should print to, and the tokenized command.
///
pub type CommandHandler = fn(&CommandRegistry, &mut Console, &Command);

/// [`CommandRegistry`] struct maps command names to their handlers and help texts.
///
/// Handlers are stored by [`CommandId`] (hash of lower-cased name), help texts are stored by name,
/// so registered commands can be listed in alphabetical order.
///
/// # Example
/// ```rust
/// # use ggui::consolecore::{commands::Command, console::{Console, ConsoleSettings}, registry::CommandRegistry};
/// # use ggui::mathcore::Color;
/// fn greet(_: &CommandRegistry, console: &mut Console, command: &Command) {
///     console.print_line(&format!("Hello, {}!", command.args_string()), Color::WHITE);
/// }
///
/// let mut registry: CommandRegistry = CommandRegistry::new();
/// registry.register_with_help("Greet", "greet: Greets whoever you name.", greet);
/// let mut console: Console = Console::new(ConsoleSettings::default());
///
/// assert!(registry.run_command(&mut console, "greet dear player"));
/// assert_eq!(console.history().last().map(|line| line.text.as_str()), Some("Hello, dear player!"));
/// assert!(!registry.run_command(&mut console, "wave"));
/// ```
///
#[derive(Clone, Default)]
pub struct CommandRegistry {
    /// Handlers by name hash.
    ///
    handlers: IdMap<CommandId, CommandHandler>,
    /// Help texts by name.
    ///
    help: BTreeMap<String, String>,
}
impl CommandRegistry {
    /// Help text of commands that were registered without one.
    ///
    pub const DEFAULT_HELP: &'static str = "Write help text for this command! <3";

    /// Creates empty registry.
    ///
    pub fn new() -> Self {
        CommandRegistry {
            handlers: IdMap::with_hasher(NoOpHasherState),
            help: BTreeMap::new(),
        }
    }
    /// Creates registry with built-in commands (`help`, `clear`, `quit`, `runfor`, `changefont`, `echo`).
    ///
    pub fn with_builtins() -> Self {
        let mut registry: CommandRegistry = CommandRegistry::new();
        builtins::register_builtins(&mut registry);
        registry
    }

    /// Registers command with default help text.
    ///
    pub fn register(&mut self, name: &str, handler: CommandHandler) {
        self.register_with_help(name, CommandRegistry::DEFAULT_HELP, handler);
    }
    /// Registers command with given help text.
    ///
    /// Name is lower-cased, so commands are case-insensitive.
    /// Registering the same name again replaces previous command.
    ///
    pub fn register_with_help(&mut self, name: &str, help: &str, handler: CommandHandler) {
        let name: String = name.to_lowercase();
        if self.handlers.insert(CommandId::of(&name), handler).is_some() {
            warn!("Console command '{}' was replaced", name);
        } else {
            debug!("Console command '{}' was registered", name);
        }
        let _ = self.help.insert(name, help.to_string());
    }
    /// Removes command. Returns whether it was registered.
    ///
    pub fn unregister(&mut self, name: &str) -> bool {
        let name: String = name.to_lowercase();
        let _ = self.help.remove(&name);
        self.handlers.remove(&CommandId::of(&name)).is_some()
    }

    /// Returns whether command is registered.
    ///
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(&CommandId::of(&name.to_lowercase()))
    }
    /// Returns help text of command.
    ///
    pub fn help_text(&self, name: &str) -> Option<&str> {
        self.help.get(&name.to_lowercase()).map(String::as_str)
    }
    /// Returns names of registered commands in alphabetical order.
    ///
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.help.keys().map(String::as_str)
    }
    /// Returns number of registered commands.
    ///
    pub fn len(&self) -> usize {
        self.handlers.len()
    }
    /// Returns whether no commands are registered.
    ///
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Records line into console command history and dispatches it.
    ///
    /// Returns whether handler was found and ran.
    ///
    pub fn run_command(&self, console: &mut Console, line: &str) -> bool {
        console.record_command(line);
        self.dispatch(console, line)
    }
    /// Tokenizes line and calls handler that is registered under its name.
    ///
    /// Unlike [`CommandRegistry::run_command`], line is not recorded into history,
    /// so commands that run other commands use this function.
    ///
    pub fn dispatch(&self, console: &mut Console, line: &str) -> bool {
        let command: Command = Command::parse(line);
        if !command.is_valid() {
            return false;
        }
        match self.handlers.get(&CommandId::of(command.name())) {
            Some(handler) => {
                handler(self, console, &command);
                true
            }
            None => {
                debug!("Console command '{}' is not registered", command.name());
                false
            }
        }
    }
}
impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.help.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::CommandRegistry;
    use crate::{
        consolecore::{
            commands::Command,
            console::{Console, ConsoleSettings},
        },
        mathcore::Color,
    };

    fn shout(_: &CommandRegistry, console: &mut Console, command: &Command) {
        console.print_line(&command.args_string().to_uppercase(), Color::YELLOW);
    }
    fn whisper(_: &CommandRegistry, console: &mut Console, command: &Command) {
        console.print_line(&command.args_string().to_lowercase(), Color::GRAY);
    }

    #[test]
    fn registration() {
        let mut registry: CommandRegistry = CommandRegistry::new();
        assert!(registry.is_empty());

        registry.register("Shout", shout);
        assert!(registry.contains("shout"));
        assert!(registry.contains("SHOUT"));
        assert_eq!(registry.help_text("shout"), Some(CommandRegistry::DEFAULT_HELP));

        registry.register_with_help("shout", "shout: Shouts.", whisper);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.help_text("shout"), Some("shout: Shouts."));

        let mut console: Console = Console::new(ConsoleSettings::default());
        assert!(registry.dispatch(&mut console, "shout Hey"));
        assert_eq!(console.history().last().map(|line| line.text.as_str()), Some("hey"));

        assert!(registry.unregister("shout"));
        assert!(!registry.unregister("shout"));
        assert!(!registry.dispatch(&mut console, "shout Hey"));
    }

    #[test]
    fn dispatching() {
        let mut registry: CommandRegistry = CommandRegistry::new();
        registry.register("shout", shout);
        registry.register("invalid_command", shout);
        let mut console: Console = Console::new(ConsoleSettings::default());

        assert!(registry.dispatch(&mut console, "ShOuT hi there"));
        assert_eq!(console.history().last().map(|line| line.text.as_str()), Some("HI THERE"));
        assert!(console.command_history().is_empty());

        assert!(!registry.dispatch(&mut console, ""));
        assert!(!registry.dispatch(&mut console, "whisper"));

        assert!(registry.run_command(&mut console, "shout again"));
        assert!(!registry.run_command(&mut console, "nothing"));
        assert_eq!(console.command_history(), ["shout again", "nothing"]);
    }

    #[test]
    fn builtins() {
        let registry: CommandRegistry = CommandRegistry::with_builtins();
        let names: Vec<&str> = registry.command_names().collect();
        assert_eq!(names, vec!["changefont", "clear", "echo", "help", "quit", "runfor"]);
        assert!(registry
            .help_text("runfor")
            .map_or(false, |help| help.starts_with("runfor:")));
    }
}
