//! Record model representing a single contact.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown when a record has no birthday.
const NO_BIRTHDAY: &str = "—";

/// A contact in the address book.
///
/// Owns one immutable name, an ordered list of phone numbers (duplicates
/// permitted, insertion order preserved), and at most one birthday. A
/// Record is mutated in place; it only exists inside an `AddressBook`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list. No dedup.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `raw` does not match the phone format.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone whose text equals `raw`. Silent when absent.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the list is searched, so a bad new number
    /// reports its format error even when `old` is absent.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed `new`, or
    /// `BookError::PhoneNotFound` if no phone equals `old` (the list is
    /// left unchanged).
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;
        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Parse `raw` as a `DD.MM.YYYY` date and set it as the birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::BirthdayAlreadySet` if a birthday exists (the
    /// original is unchanged), or a validation error for malformed text.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<()> {
        if self.birthday.is_some() {
            return Err(BookError::BirthdayAlreadySet(self.name().to_string()));
        }
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Whole days from `today` to the next occurrence of the birthday.
    ///
    /// 0 on the birthday itself. `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|b| (b.next_occurrence(today) - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = match &self.birthday {
            Some(b) => b.to_string(),
            None => NO_BIRTHDAY.to_string(),
        };
        write!(f, "{}: {}; Birthday: {}", self.name, phones, birthday)
    }
}
