//! AddressBook model: the owning collection of Records.

use crate::domain::birthday::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// How to treat a birthday occurrence that lands on a weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendPolicy {
    /// No adjustment; `days_left` is the raw day difference.
    #[default]
    Exact,

    /// Observe Saturday/Sunday occurrences on the following Monday. The
    /// shifted date is displayed and used for the window filter, so a shift
    /// can push an entry past the window.
    ShiftToMonday,
}

/// One row of the upcoming-birthdays report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The occurrence date, rendered DD.MM.YYYY (shifted under
    /// `WeekendPolicy::ShiftToMonday`)
    pub birthday: String,

    /// Whole days from the query date to the occurrence
    pub days_left: i64,
}

/// The address book: a mapping from contact name to Record.
///
/// Keys are unique and always equal the name of the associated Record.
/// Iteration follows insertion order, which a plain `HashMap` does not
/// give, so the key order is tracked separately.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, overwriting any existing entry under the same name.
    ///
    /// An overwrite keeps the name's original position in the iteration
    /// order.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        debug!(name = %name, "adding record");
        if self.records.insert(name.clone(), record).is_none() {
            self.order.push(name);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry under `name` if present; no-op otherwise.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            debug!(name = %name, "deleted record");
            self.order.retain(|n| n != name);
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Records whose next birthday occurrence falls within `window_days`
    /// of `today`, inclusive on both ends.
    ///
    /// A linear scan in insertion order: for every record with a birthday,
    /// the next occurrence of its month/day on or after `today` is computed
    /// (this year's if not yet passed, else next year's), the weekend
    /// policy applied, and the record kept when
    /// `0 <= days_left <= window_days`.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: i64,
        policy: WeekendPolicy,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = birthday.next_occurrence(today);
            if policy == WeekendPolicy::ShiftToMonday {
                occurrence = shift_weekend_to_monday(occurrence);
            }

            let days_left = (occurrence - today).num_days();
            if days_left >= 0 && days_left <= window_days {
                upcoming.push(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday: occurrence.format(DATE_FORMAT).to_string(),
                    days_left,
                });
            }
        }

        upcoming
    }
}

/// Move a Saturday or Sunday date forward to the following Monday.
fn shift_weekend_to_monday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
