use std::str::FromStr;

use bazaar::{SizeFilter, UnknownSizeFilter};

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Show,
    Select { slot: usize },
    Cancel,
    List,
    Size(SizeFilter),
    Search(String),
    Reset,
    /// Add an item to the selected slot.
    Add { item: String },
    /// Add an item at a given slot, without selecting it first.
    Place { slot: usize, item: String },
    Remove { slot: usize },
    /// Show the tooltip of a catalog item.
    Inspect { item: String },
    /// Show the tooltip of the item covering a slot.
    Hover { slot: usize },
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  show                 Show the board
  select <slot>        Choose an empty slot to add an item to
  add <item>           Add an item (id or name) to the selected slot
  cancel               Stop choosing an item
  place <slot> <item>  Add an item at a slot directly
  remove <slot>        Remove the item covering a slot
  list                 List the items that pass the filters and fit
  size <size>          Filter by size: all, small, medium or large
  search [text]        Filter by name or description (empty clears)
  reset                Reset the size and search filters
  inspect <item>       Show details of a catalog item
  hover <slot>         Show details of the item covering a slot
  help                 Show this help
  quit                 Leave the planner";

#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    Empty,
    UnknownCommand(String),
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    InvalidSlot(String),
    InvalidSize(UnknownSizeFilter),
}

impl std::error::Error for CommandParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandParseError::InvalidSize(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandParseError::Empty => write!(f, "No command given, try 'help'"),
            CommandParseError::UnknownCommand(cmd) => {
                write!(f, "Unknown command '{}', try 'help'", cmd)
            }
            CommandParseError::MissingArgument { command, argument } => {
                write!(f, "'{}' needs a {} argument", command, argument)
            }
            CommandParseError::InvalidSlot(raw) => {
                write!(f, "'{}' is not a slot number", raw)
            }
            CommandParseError::InvalidSize(err) => write!(f, "{}", err),
        }
    }
}

fn parse_slot(raw: Option<&str>, command: &'static str) -> Result<usize, CommandParseError> {
    let raw = raw.ok_or(CommandParseError::MissingArgument {
        command,
        argument: "slot",
    })?;
    raw.parse()
        .map_err(|_| CommandParseError::InvalidSlot(raw.to_string()))
}

fn required_text(rest: &str, command: &'static str) -> Result<String, CommandParseError> {
    if rest.is_empty() {
        Err(CommandParseError::MissingArgument {
            command,
            argument: "item",
        })
    } else {
        Ok(rest.to_string())
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let first_arg = rest.split_whitespace().next();
        let cmd = match word.to_lowercase().as_str() {
            "" => return Err(CommandParseError::Empty),
            "show" | "board" => Command::Show,
            "select" => Command::Select {
                slot: parse_slot(first_arg, "select")?,
            },
            "cancel" => Command::Cancel,
            "list" | "ls" => Command::List,
            "size" => {
                let raw = first_arg.ok_or(CommandParseError::MissingArgument {
                    command: "size",
                    argument: "size",
                })?;
                Command::Size(raw.parse().map_err(CommandParseError::InvalidSize)?)
            }
            "search" => Command::Search(rest.to_string()),
            "reset" => Command::Reset,
            "add" => Command::Add {
                item: required_text(rest, "add")?,
            },
            "place" => {
                let slot = parse_slot(first_arg, "place")?;
                let item = rest
                    .split_once(char::is_whitespace)
                    .map(|(_, item)| item.trim())
                    .unwrap_or("");
                Command::Place {
                    slot,
                    item: required_text(item, "place")?,
                }
            }
            "remove" | "rm" => Command::Remove {
                slot: parse_slot(first_arg, "remove")?,
            },
            "inspect" => Command::Inspect {
                item: required_text(rest, "inspect")?,
            },
            "hover" => Command::Hover {
                slot: parse_slot(first_arg, "hover")?,
            },
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandParseError::UnknownCommand(other.to_string())),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use bazaar::Size;

    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!("show".parse::<Command>(), Ok(Command::Show));
        assert_eq!("  SELECT 3 ".parse::<Command>(), Ok(Command::Select { slot: 3 }));
        assert_eq!(
            "add Agility Boots".parse::<Command>(),
            Ok(Command::Add {
                item: "Agility Boots".to_string()
            })
        );
        assert_eq!(
            "place 4 Agility  Boots".parse::<Command>(),
            Ok(Command::Place {
                slot: 4,
                item: "Agility  Boots".to_string()
            })
        );
        assert_eq!("size Medium".parse::<Command>(), Ok(Command::Size(SizeFilter::Only(Size::Medium))));
        assert_eq!("search".parse::<Command>(), Ok(Command::Search(String::new())));
        assert_eq!("rm 2".parse::<Command>(), Ok(Command::Remove { slot: 2 }));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Command>(), Err(CommandParseError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(CommandParseError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(
            "select".parse::<Command>(),
            Err(CommandParseError::MissingArgument {
                command: "select",
                argument: "slot"
            })
        );
        assert_eq!(
            "remove -1".parse::<Command>(),
            Err(CommandParseError::InvalidSlot("-1".to_string()))
        );
        assert_eq!(
            "place 3".parse::<Command>(),
            Err(CommandParseError::MissingArgument {
                command: "place",
                argument: "item"
            })
        );
        assert!(matches!(
            "size huge".parse::<Command>(),
            Err(CommandParseError::InvalidSize(_))
        ));
    }
}
