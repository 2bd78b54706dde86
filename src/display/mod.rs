//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts for the prompt session.

pub mod contact;

pub use contact::{format_birthday_list, format_contact_list, format_help};
