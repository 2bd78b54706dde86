//! Contact display formatting
//!
//! Formats records for terminal output.

use crate::cli::command::COMMANDS;
use crate::models::Record;

/// Format the full contact list, one record per line
pub fn format_contact_list(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No contacts found".to_string();
    }

    records
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the upcoming birthdays list
///
/// `date_format` is a strftime pattern applied to each birthday.
pub fn format_birthday_list(records: &[&Record], date_format: &str) -> String {
    let lines: Vec<String> = records
        .iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!(" {}: {}", record.name(), birthday.format(date_format)))
        })
        .collect();

    if lines.is_empty() {
        return "No upcoming birthdays this week.".to_string();
    }

    format!("Upcoming birthdays this week:\n{}", lines.join("\n"))
}

/// Format the command reference
pub fn format_help() -> String {
    let usage_width = COMMANDS
        .iter()
        .map(|c| c.usage.len())
        .max()
        .unwrap_or(7)
        .max(7);

    let mut output = format!("{:<usage_width$}  {}\n", "Command", "Description");
    output.push_str(&format!("{:-<usage_width$}  {:-<11}\n", "", ""));

    for command in COMMANDS {
        output.push_str(&format!(
            "{:<usage_width$}  {}\n",
            command.usage, command.description
        ));
    }

    output.trim_end().to_string()
}
