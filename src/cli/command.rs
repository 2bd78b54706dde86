//! Command definitions and input parsing
//!
//! Each input line is a command word followed by whitespace-separated
//! arguments. The command word is case-insensitive; arguments are kept as
//! typed.

use thiserror::Error;

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command word (what the user types)
    pub name: &'static str,
    /// Usage line shown in help
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Exact number of arguments required
    pub arity: usize,
    /// Message shown when the argument count is wrong
    pub guidance: &'static str,
}

/// All available commands
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        usage: "hello",
        description: "Greet the assistant",
        arity: 0,
        guidance: "",
    },
    CommandSpec {
        name: "add",
        usage: "add <name> <phone>",
        description: "Add a contact or a phone to an existing contact",
        arity: 2,
        guidance: "Give me name and phone.",
    },
    CommandSpec {
        name: "change",
        usage: "change <name> <old_phone> <new_phone>",
        description: "Replace one of a contact's phones",
        arity: 3,
        guidance: "Give me name, old phone and new phone.",
    },
    CommandSpec {
        name: "phone",
        usage: "phone <name>",
        description: "Show a contact's phones",
        arity: 1,
        guidance: "Give me a contact name.",
    },
    CommandSpec {
        name: "all",
        usage: "all",
        description: "Show all contacts",
        arity: 0,
        guidance: "",
    },
    CommandSpec {
        name: "add-birthday",
        usage: "add-birthday <name> <DD.MM.YYYY>",
        description: "Set a contact's birthday",
        arity: 2,
        guidance: "Give me name and birthday (DD.MM.YYYY).",
    },
    CommandSpec {
        name: "show-birthday",
        usage: "show-birthday <name>",
        description: "Show a contact's birthday",
        arity: 1,
        guidance: "Give me a contact name.",
    },
    CommandSpec {
        name: "birthdays",
        usage: "birthdays",
        description: "Show birthdays in the current week",
        arity: 0,
        guidance: "",
    },
    CommandSpec {
        name: "remove-phone",
        usage: "remove-phone <name> <phone>",
        description: "Remove a phone from a contact",
        arity: 2,
        guidance: "Missing arguments. Provide name and phone number to remove.",
    },
    CommandSpec {
        name: "delete",
        usage: "delete <name>",
        description: "Delete a contact",
        arity: 1,
        guidance: "Give me a contact name.",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        description: "Show this command list",
        arity: 0,
        guidance: "",
    },
    CommandSpec {
        name: "exit",
        usage: "close | exit",
        description: "Leave the assistant",
        arity: 0,
        guidance: "",
    },
];

/// A parsed command with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    Help,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was blank
    #[error("empty input")]
    Empty,

    /// The command word is not known
    #[error("Invalid command.")]
    Unknown(String),

    /// The argument count does not match the command
    #[error("{guidance}")]
    WrongArguments {
        command: &'static str,
        guidance: &'static str,
    },
}

/// Look up a command by the word the user typed
pub fn find_command(word: &str) -> Option<&'static CommandSpec> {
    let word = match word {
        "close" => "exit",
        other => other,
    };
    COMMANDS.iter().find(|c| c.name == word)
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let word = tokens.next().ok_or(ParseError::Empty)?.to_lowercase();
        let spec = find_command(&word).ok_or_else(|| ParseError::Unknown(word.clone()))?;

        let args: Vec<String> = tokens.map(str::to_string).collect();
        // Commands without arguments tolerate trailing words.
        if spec.arity > 0 && args.len() != spec.arity {
            return Err(ParseError::WrongArguments {
                command: spec.name,
                guidance: spec.guidance,
            });
        }

        let mut args = args.into_iter();
        let mut next = || args.next().unwrap_or_default();

        let command = match spec.name {
            "hello" => Self::Hello,
            "add" => Self::Add {
                name: next(),
                phone: next(),
            },
            "change" => Self::Change {
                name: next(),
                old: next(),
                new: next(),
            },
            "phone" => Self::Phone { name: next() },
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday {
                name: next(),
                date: next(),
            },
            "show-birthday" => Self::ShowBirthday { name: next() },
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone {
                name: next(),
                phone: next(),
            },
            "delete" => Self::Delete { name: next() },
            "help" => Self::Help,
            "exit" => Self::Exit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}
