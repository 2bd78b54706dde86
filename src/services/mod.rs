//! Service layer for the contact book
//!
//! The service layer provides command-level business logic on top of the
//! address book, handling validation and lookups.

pub mod contact;

pub use contact::{AddOutcome, ContactService};
