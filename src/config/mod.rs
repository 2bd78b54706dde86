//! Configuration module for the contact book
//!
//! Session texts and display preferences.

pub mod settings;

pub use settings::Settings;
