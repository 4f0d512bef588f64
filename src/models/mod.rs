//! Data models for the address book.

pub mod book;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday, WeekendPolicy};
pub use record::Record;
