//! Core data models for the contact book
//!
//! Validated field types (name, phone, birthday) and the contact record that
//! owns them.

pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use name::Name;
pub use phone::Phone;
pub use record::Record;
