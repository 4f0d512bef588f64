//! Command handlers for the interactive loop.
//!
//! One function per command. Handlers receive the raw argument tokens plus
//! the book, mutate or query it, and assemble the human-readable reply.
//! Every validation error raised below propagates out of the handler
//! untouched; the dispatcher turns it into a message.

use crate::config::Config;
use crate::error::{BookError, BookResult};
use crate::matching::ContactMatcher;
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::debug;

/// Fetch a required positional argument.
fn arg<'a>(args: &'a [String], index: usize, name: &'static str) -> BookResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(BookError::MissingArgument(name))
}

/// `add NAME PHONE`: fetch-or-create the record, then append the phone.
///
/// Adding a phone to an existing name updates that record rather than
/// replacing it; the reply distinguishes the two cases.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;
    let phone = arg(args, 1, "PHONE")?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        debug!(name = %name, "contact updated");
        return Ok("Contact updated.".to_string());
    }

    // Validate the phone before the record is inserted, so a bad number
    // doesn't leave an empty contact behind.
    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    debug!(name = %name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change NAME OLD NEW`: replace a phone on the named record.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;
    let old_phone = arg(args, 1, "OLD_PHONE")?;
    let new_phone = arg(args, 2, "NEW_PHONE")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Phone updated.".to_string())
}

/// `phone NAME`: list the record's phone numbers.
pub fn show_phone(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    let phones = record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("{}: {}", name, phones))
}

/// `remove-phone NAME PHONE`: drop every matching phone from the record.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;
    let phone = arg(args, 1, "PHONE")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

/// `delete NAME`: remove the contact entirely.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;

    if book.find(name).is_none() {
        return Err(BookError::ContactNotFound(name.to_string()));
    }
    book.delete(name);
    Ok("Contact deleted.".to_string())
}

/// `all`: every record, one per line, in insertion order.
pub fn show_all(book: &AddressBook) -> BookResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday NAME DATE`: set the record's birthday (once).
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;
    let date = arg(args, 1, "DATE")?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.add_birthday(date)?;
    Ok(format!("Birthday added for {}.", name))
}

/// `show-birthday NAME`: the record's birthday, if set.
pub fn show_birthday(args: &[String], book: &AddressBook) -> BookResult<String> {
    let name = arg(args, 0, "NAME")?;

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("{} has no birthday set.", name)),
    }
}

/// `birthdays`: contacts whose next birthday falls within the window.
pub fn birthdays(book: &AddressBook, today: NaiveDate, config: &Config) -> BookResult<String> {
    let upcoming =
        book.upcoming_birthdays(today, config.birthday_window_days, config.weekend_policy);
    if upcoming.is_empty() {
        return Ok("No birthdays this week.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(|u| format!("{}: {} (in {} days)", u.name, u.birthday, u.days_left))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `search QUERY`: fuzzy name / exact phone lookup.
pub fn search_contacts(
    args: &[String],
    book: &AddressBook,
    config: &Config,
) -> BookResult<String> {
    if args.is_empty() {
        return Err(BookError::MissingArgument("QUERY"));
    }
    let query = args.join(" ");

    let matcher = ContactMatcher::new();
    let matches = matcher.find_matches(
        &query,
        book,
        config.max_match_results,
        config.match_confidence_threshold,
    );
    if matches.is_empty() {
        return Ok("No matches found.".to_string());
    }
    Ok(matches
        .iter()
        .map(|m| format!("{} ({}%)", m.name, m.confidence))
        .collect::<Vec<_>>()
        .join("\n"))
}
