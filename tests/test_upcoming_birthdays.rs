//! Integration tests for the upcoming-birthdays query.
//!
//! The baseline contract is the exact (no weekend adjustment) rule with an
//! inclusive [0, 7] window; the Monday-shift variant is exercised
//! separately.

use chrono::NaiveDate;
use rolo::{AddressBook, Record, WeekendPolicy};

fn book_with_birthdays(entries: &[(&str, &str)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        let mut record = Record::new(*name).unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_birthday(birthday).unwrap();
        book.add_record(record);
    }
    book
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_birthday_today_has_zero_days_left() {
    let book = book_with_birthdays(&[("John", "05.11.1990")]);

    let upcoming = book.upcoming_birthdays(date(2024, 11, 5), 7, WeekendPolicy::Exact);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "John");
    assert_eq!(upcoming[0].days_left, 0);
}

#[test]
fn test_window_bounds_are_inclusive() {
    // 12.11.2024 is exactly 7 days after 05.11.2024
    let book = book_with_birthdays(&[("Edge", "12.11.1985"), ("Past", "13.11.1985")]);

    let upcoming = book.upcoming_birthdays(date(2024, 11, 5), 7, WeekendPolicy::Exact);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Edge");
    assert_eq!(upcoming[0].days_left, 7);
}

#[test]
fn test_same_year_birthday_beyond_window_excluded() {
    let book = book_with_birthdays(&[("John", "20.11.1990")]);

    let upcoming = book.upcoming_birthdays(date(2024, 11, 5), 7, WeekendPolicy::Exact);
    assert!(upcoming.is_empty());
}

#[test]
fn test_year_wraparound() {
    let book = book_with_birthdays(&[("John", "01.01.1990")]);

    // Dec 30 -> Jan 1 is two days into next year
    let upcoming = book.upcoming_birthdays(date(2024, 12, 30), 7, WeekendPolicy::Exact);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "01.01.2025");
    assert_eq!(upcoming[0].days_left, 2);

    // In mid-November the same birthday is months away
    let upcoming = book.upcoming_birthdays(date(2024, 11, 5), 7, WeekendPolicy::Exact);
    assert!(upcoming.is_empty());
}

#[test]
fn test_results_follow_insertion_order() {
    let book = book_with_birthdays(&[
        ("Zoe", "07.11.1993"),
        ("Adam", "06.11.1991"),
        ("Mia", "08.11.1992"),
    ]);

    let names: Vec<_> = book
        .upcoming_birthdays(date(2024, 11, 5), 7, WeekendPolicy::Exact)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
}

#[test]
fn test_weekend_shift_observes_on_monday() {
    // 09.11.2024 is a Saturday, 10.11.2024 a Sunday
    let book = book_with_birthdays(&[("Sat", "09.11.1990"), ("Sun", "10.11.1990")]);

    let upcoming = book.upcoming_birthdays(date(2024, 11, 5), 7, WeekendPolicy::ShiftToMonday);
    assert_eq!(upcoming.len(), 2);
    // Both observed on Monday 11.11
    assert_eq!(upcoming[0].birthday, "11.11.2024");
    assert_eq!(upcoming[1].birthday, "11.11.2024");
    assert_eq!(upcoming[0].days_left, 6);
}

#[test]
fn test_weekend_shift_can_exclude_late_saturday() {
    // Saturday 16.11.2024 is within 7 days of Sunday 10.11.2024, but its
    // observed Monday (18.11) is not
    let book = book_with_birthdays(&[("John", "16.11.1990")]);

    let exact = book.upcoming_birthdays(date(2024, 11, 10), 7, WeekendPolicy::Exact);
    assert_eq!(exact.len(), 1);

    let shifted = book.upcoming_birthdays(date(2024, 11, 10), 7, WeekendPolicy::ShiftToMonday);
    assert!(shifted.is_empty());
}

#[test]
fn test_feb_29_observed_on_march_1_in_non_leap_years() {
    let book = book_with_birthdays(&[("Leap", "29.02.2000")]);

    let upcoming = book.upcoming_birthdays(date(2025, 2, 26), 7, WeekendPolicy::Exact);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].birthday, "01.03.2025");
    assert_eq!(upcoming[0].days_left, 3);
}

#[test]
fn test_custom_window_days() {
    let book = book_with_birthdays(&[("John", "20.11.1990")]);

    let upcoming = book.upcoming_birthdays(date(2024, 11, 5), 30, WeekendPolicy::Exact);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].days_left, 15);
}
