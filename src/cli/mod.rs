//! Command-line front end
//!
//! This module turns typed lines into commands and runs them against the
//! address book, bridging console I/O with the service layer.

pub mod command;
pub mod session;

pub use command::{Command, CommandSpec, ParseError, COMMANDS};
pub use session::{validation_message, Reply, Session};
