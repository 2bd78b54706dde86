//! Contacts - Terminal-based contact book assistant
//!
//! This library provides the core functionality for the contact book: an
//! in-memory address book of names, phone numbers, and birthdays driven by
//! commands typed at a prompt.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings
//! - `error`: Custom error types
//! - `models`: Validated fields and the contact record
//! - `book`: The in-memory address book and birthday-week queries
//! - `services`: Command-level business logic
//! - `display`: Terminal formatting
//! - `cli`: Command parsing and the prompt session
//!
//! # Example
//!
//! ```rust
//! use contacts::book::AddressBook;
//! use contacts::services::ContactService;
//!
//! let mut book = AddressBook::new();
//! let mut service = ContactService::new(&mut book);
//! service.add_contact("John", "1234567890").unwrap();
//! assert!(book.find("John").is_some());
//! ```

pub mod book;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ContactError, ContactResult};
