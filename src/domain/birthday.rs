//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format for birthdays, e.g. `05.11.1990`.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays.
///
/// Parsed from `DD.MM.YYYY` text at construction time; non-calendar dates
/// are rejected. Displays back in the same format.
///
/// # Example
///
/// ```
/// use rolo::domain::Birthday;
///
/// let birthday = Birthday::new("05.11.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.11.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text is malformed or
    /// does not name a real calendar date.
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        let text = text.as_ref();
        NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(text.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Next calendar occurrence of this birthday on or after `today`.
    ///
    /// Uses this year's occurrence if it hasn't passed yet, otherwise next
    /// year's. A Feb 29 birthday is observed on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }

    /// The occurrence of this birthday's month/day in the given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()) {
            Some(date) => date,
            // Only Feb 29 can fail; Mar 1 exists in every year.
            None => NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"),
        }
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
