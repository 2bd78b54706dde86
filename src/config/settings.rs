//! User-facing session settings
//!
//! Prompt and greeting texts plus the birthday display format. Settings are
//! built in code; the contact book reads no configuration files.

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prompt printed before each command is read
    pub prompt: String,

    /// Message printed when the session starts
    pub greeting: String,

    /// Message printed when the session ends
    pub farewell: String,

    /// strftime format for birthdays in the upcoming-birthdays list
    pub birthday_list_format: String,
}

fn default_prompt() -> String {
    "Enter a command: ".to_string()
}

fn default_greeting() -> String {
    "Welcome to the assistant bot!".to_string()
}

fn default_farewell() -> String {
    "Good bye!".to_string()
}

fn default_birthday_list_format() -> String {
    "%d.%m".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            greeting: default_greeting(),
            farewell: default_farewell(),
            birthday_list_format: default_birthday_list_format(),
        }
    }
}
