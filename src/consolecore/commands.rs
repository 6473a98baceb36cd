//! `consolecore::commands` submodule implements [`Command`] - tokenized console line.
//!

use std::{fmt, str::FromStr};

/// [`Command`] struct is a console line that is split into command name and its arguments.
///
/// Line is split on whitespace; first token is the name of the command (lower-cased),
/// the rest are arguments. Text after the name is also kept verbatim, so commands
/// can forward it as is.
/// Line without tokens produces [`Command::INVALID_COMMAND`] name, which never matches any handler.
///
/// # Example
/// ```rust
/// # use ggui::consolecore::commands::Command;
/// let command: Command = Command::parse("SAY hello  world");
/// assert_eq!(command.name(), "say");
/// assert_eq!(command.args(), ["hello", "world"]);
/// assert_eq!(command.args_string(), "hello  world");
///
/// assert_eq!(Command::parse("   ").name(), Command::INVALID_COMMAND);
/// ```
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Command {
    /// Line that command was parsed from.
    ///
    full_line: String,
    /// Lower-cased name.
    ///
    name: String,
    /// Arguments in order.
    ///
    args: Vec<String>,
    /// Everything after the name.
    ///
    args_string: String,
}
impl Command {
    /// Name that is given to command parsed from an empty line.
    ///
    pub const INVALID_COMMAND: &'static str = "INVALID_COMMAND";

    /// Tokenizes console line.
    ///
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let name: String = match tokens.next() {
            Some(name) => name.to_lowercase(),
            None => {
                return Command {
                    full_line: line.to_string(),
                    name: Command::INVALID_COMMAND.to_string(),
                    args: Vec::new(),
                    args_string: String::new(),
                }
            }
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let args_string: String = if args.is_empty() {
            String::new()
        } else {
            let after_indent: &str = line.trim_start();
            after_indent
                .find(char::is_whitespace)
                .and_then(|index| {
                    let separator_length: usize =
                        after_indent[index..].chars().next().map_or(0, char::len_utf8);
                    after_indent.get(index + separator_length..)
                })
                .unwrap_or_default()
                .to_string()
        };

        Command {
            full_line: line.to_string(),
            name,
            args,
            args_string,
        }
    }

    /// Returns line that command was parsed from.
    ///
    pub fn full_line(&self) -> &str {
        &self.full_line
    }
    /// Returns lower-cased name of command.
    ///
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns whether line had any tokens.
    ///
    pub fn is_valid(&self) -> bool {
        self.name != Command::INVALID_COMMAND
    }

    /// Returns arguments of command.
    ///
    pub fn args(&self) -> &[String] {
        &self.args
    }
    /// Returns verbatim text that follows command name.
    ///
    pub fn args_string(&self) -> &str {
        &self.args_string
    }
    /// Returns whether command has exactly `count` arguments.
    ///
    pub fn has_args(&self, count: usize) -> bool {
        self.args.len() == count
    }
    /// Returns argument at given position.
    ///
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
    /// Parses argument at given position.
    ///
    /// # Example
    /// ```rust
    /// # use ggui::consolecore::commands::Command;
    /// let command: Command = Command::parse("runfor 3 clear");
    /// assert_eq!(command.parse_arg::<u32>(0), Some(3));
    /// assert_eq!(command.parse_arg::<u32>(1), None);
    /// assert_eq!(command.parse_arg::<u32>(2), None);
    /// ```
    ///
    pub fn parse_arg<T: FromStr>(&self, index: usize) -> Option<T> {
        self.arg(index)?.parse::<T>().ok()
    }
}
impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Command::parse(s))
    }
}
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in self.args.iter() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
