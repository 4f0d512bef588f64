//! rolo - an interactive command-line address book with birthday reminders.
//!
//! This library provides an in-memory contact store with validated names,
//! phone numbers, and birthdays, an upcoming-birthday query, fuzzy contact
//! search, and the command loop that drives it all from stdin.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: Record and AddressBook data structures
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **matching**: fuzzy matching and lookup utilities
//! - **repl**: the interactive command loop and its handlers

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repl;

pub use config::Config;
pub use error::{BookError, BookResult, ConfigError, ConfigResult};
pub use matching::{ContactMatcher, MatchResult, MatchType};
pub use models::{AddressBook, Record, UpcomingBirthday, WeekendPolicy};
