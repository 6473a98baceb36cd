//! `consolecore::builtins` submodule implements commands that every console has.
//!

use crate::{
    consolecore::{commands::Command, console::Console, registry::CommandRegistry},
    mathcore::Color,
};
use std::f32::consts::TAU;

/// Registers `help`, `clear`, `quit`, `runfor`, `changefont` and `echo` commands.
///
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register_with_help(
        "help",
        "help: A command (that you just used) to find more info on other commands! Success! :D",
        help,
    );
    registry.register_with_help(
        "clear",
        "clear: Clears the command history for the console",
        clear,
    );
    registry.register_with_help(
        "quit",
        "quit: Quits the application after saving any data.",
        quit,
    );
    registry.register_with_help(
        "runfor",
        "runfor: Runs a no-arg command for the specified number of times. Only used for sillyness.",
        runfor,
    );
    registry.register_with_help(
        "changefont",
        "changefont: Changes the console's default font to a named font from the font folder.",
        changefont,
    );
    registry.register_with_help(
        "echo",
        "echo: Prints everything that follows the command name.",
        echo,
    );
}

/// Lines that describe console controls.
///
const CONTROLS: [&str; 6] = [
    "Enter ~ Run command / Close console (if line empty)",
    "Escape ~ Clear line / Close console (if line empty)",
    "Left, Right, Home, End ~ Move cursor",
    "Backspace, Delete ~ Erase character",
    "Up, Down ~ Browse previously run commands",
    "` ~ Toggle console",
];

/// Returns color of `index`-th entry out of `count` so that entries form a rainbow.
///
/// # Example
/// ```rust
/// # use ggui::consolecore::builtins::rainbow_color;
/// # use ggui::mathcore::Color;
/// assert_eq!(rainbow_color(0, 4), Color::from_unit_rgb(0.9455, 0.5, 0.1292));
/// ```
///
pub fn rainbow_color(index: usize, count: usize) -> Color {
    let frequency: f32 = TAU / count.max(1) as f32;
    let phase: f32 = frequency * index as f32;
    let channel = |shift: f32| (phase + shift).sin() * 0.49 + 0.5;
    Color::from_unit_rgb(channel(2.0), channel(0.0), channel(4.0))
}

/// `help` - lists controls and commands, or prints help text of one command.
///
fn help(registry: &CommandRegistry, console: &mut Console, command: &Command) {
    if command.has_args(0) {
        console.print_line("Console Controls:", Color::WHITE);
        for line in CONTROLS {
            console.print_line(line, Color::GRAY);
        }
        console.print_line("All registered commands:", Color::WHITE);
        let count: usize = registry.len();
        for (index, name) in registry.command_names().enumerate() {
            console.print_line(name, rainbow_color(index, count));
        }
        return;
    }
    match command.arg(0) {
        Some(name) if command.has_args(1) => match registry.help_text(name) {
            Some(help) => console.print_line(help, Color::GRAY),
            None => console.print_line("Undocumented or Unknown command", Color::GRAY),
        },
        _ => console.print_line("help <string>", Color::GRAY),
    }
}

/// `clear` - empties scrollback.
///
fn clear(_: &CommandRegistry, console: &mut Console, _: &Command) {
    console.clear_history();
}

/// `quit` - asks application to shut down.
///
fn quit(_: &CommandRegistry, console: &mut Console, _: &Command) {
    console.print_line("Saving and shutting down...", Color::RED);
    console.request_quit();
}

/// Largest repetition count that `runfor` accepts.
///
pub const RUNFOR_MAX_TIMES: u32 = 1000;

/// `runfor <n> <command>` - runs no-arg command `n` times.
///
/// `n` above [`RUNFOR_MAX_TIMES`] is rejected with usage line.
///
fn runfor(registry: &CommandRegistry, console: &mut Console, command: &Command) {
    let (times, name) = match (command.has_args(2), command.parse_arg::<u32>(0), command.arg(1)) {
        (true, Some(times), Some(name)) if times <= RUNFOR_MAX_TIMES => (times, name),
        _ => {
            console.print_line("runfor <# of Times to Run> <command name>", Color::GRAY);
            return;
        }
    };
    for _ in 0..times {
        if !registry.dispatch(console, name) {
            console.print_line("Invalid Command.", Color::MAROON);
            return;
        }
    }
}

/// `changefont <name>` - switches console font if catalog knows it.
///
fn changefont(_: &CommandRegistry, console: &mut Console, command: &Command) {
    let name: &str = match command.arg(0) {
        Some(name) if command.has_args(1) => name,
        _ => {
            console.print_line("changefont <fontName>", Color::GRAY);
            return;
        }
    };
    if console.has_font(name) {
        console.set_font(name);
        info!("Console font was changed to '{}'", name);
        console.print_line(&format!("{} successfully loaded!", name), Color::FOREST_GREEN);
    } else {
        console.print_line("Font not found", Color::MAROON);
    }
}

/// `echo <text>` - prints text verbatim.
///
fn echo(_: &CommandRegistry, console: &mut Console, command: &Command) {
    console.print_line(command.args_string(), Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::rainbow_color;
    use crate::{
        consolecore::{
            console::{ColoredText, Console, ConsoleSettings},
            registry::CommandRegistry,
        },
        mathcore::Color,
    };
    use std::collections::HashSet;

    fn setup() -> (CommandRegistry, Console) {
        (
            CommandRegistry::with_builtins(),
            Console::new(ConsoleSettings::default()),
        )
    }

    fn texts(console: &Console) -> Vec<&str> {
        console.history().iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn help() {
        let (registry, mut console) = setup();
        assert!(registry.dispatch(&mut console, "help"));
        let printed: Vec<&str> = texts(&console);
        assert_eq!(printed.first(), Some(&"Console Controls:"));
        assert!(printed.contains(&"All registered commands:"));
        assert_eq!(
            printed[printed.len() - registry.len()..],
            ["changefont", "clear", "echo", "help", "quit", "runfor"]
        );
        assert_eq!(
            console.history().last().map(|line| line.color),
            Some(rainbow_color(5, 6))
        );

        console.clear_history();
        assert!(registry.dispatch(&mut console, "help QUIT"));
        assert!(registry.dispatch(&mut console, "help dance"));
        assert!(registry.dispatch(&mut console, "help me please"));
        assert_eq!(
            texts(&console),
            vec![
                "quit: Quits the application after saving any data.",
                "Undocumented or Unknown command",
                "help <string>",
            ]
        );
    }

    #[test]
    fn quit() {
        let (registry, mut console) = setup();
        assert!(!console.is_quitting());
        assert!(registry.dispatch(&mut console, "quit"));
        assert!(console.is_quitting());
        assert_eq!(
            console.history(),
            [ColoredText::new("Saving and shutting down...", Color::RED)]
        );
    }

    #[test]
    fn runfor() {
        let (registry, mut console) = setup();
        console.print_line("something", Color::WHITE);
        assert!(registry.dispatch(&mut console, "runfor 3 clear"));
        assert_eq!(console.clear_count(), 3);
        assert!(console.history().is_empty());

        assert!(registry.dispatch(&mut console, "runfor 2 echo"));
        assert_eq!(texts(&console), vec!["", ""]);
        console.clear_history();

        for line in [
            "runfor 3",
            "runfor three clear",
            "runfor -1 clear",
            "runfor 1 2 3",
            "runfor 1001 clear",
            "runfor 4294967295 help",
        ] {
            assert!(registry.dispatch(&mut console, line));
        }
        assert_eq!(
            texts(&console),
            vec!["runfor <# of Times to Run> <command name>"; 6]
        );
        console.clear_history();

        let clears: usize = console.clear_count();
        assert!(registry.dispatch(&mut console, "runfor 1000 clear"));
        assert_eq!(console.clear_count(), clears + 1000);

        assert!(registry.dispatch(&mut console, "runfor 5 dance"));
        assert_eq!(texts(&console), vec!["Invalid Command."]);
        assert!(registry.dispatch(&mut console, "runfor 0 dance"));
        assert_eq!(texts(&console).len(), 1);
        assert!(console.command_history().is_empty());
    }

    #[test]
    fn changefont() {
        let (registry, mut console) = setup();
        let default_font: String = console.font().to_string();
        assert!(registry.dispatch(&mut console, "changefont Arial"));
        assert_eq!(console.font(), default_font);
        assert_eq!(
            console.history().last(),
            Some(&ColoredText::new("Font not found", Color::MAROON))
        );

        console.set_font_catalog(Box::new(HashSet::from([String::from("Arial")])));
        assert!(registry.dispatch(&mut console, "changefont Arial"));
        assert_eq!(console.font(), "Arial");
        assert_eq!(
            console.history().last(),
            Some(&ColoredText::new("Arial successfully loaded!", Color::FOREST_GREEN))
        );

        assert!(registry.dispatch(&mut console, "changefont"));
        assert_eq!(
            console.history().last().map(|line| line.text.as_str()),
            Some("changefont <fontName>")
        );
    }

    #[test]
    fn echo() {
        let (registry, mut console) = setup();
        assert!(registry.dispatch(&mut console, "echo Hello,   World!"));
        assert_eq!(texts(&console), vec!["Hello,   World!"]);
    }

    #[test]
    fn rainbow() {
        let colors: Vec<Color> = (0..6).map(|index| rainbow_color(index, 6)).collect();
        let distinct: HashSet<Color> = colors.iter().copied().collect();
        assert_eq!(distinct.len(), 6);
        assert_eq!(rainbow_color(0, 0), rainbow_color(0, 1));
    }
}
