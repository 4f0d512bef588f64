//! The interactive command loop.
//!
//! Reads a line at a time from stdin, tokenizes it into a command plus
//! arguments, dispatches to a handler, and prints the reply. Errors from
//! the layers below are formatted here and never crash the loop; stdout
//! carries only replies (logs go to stderr).

pub mod handlers;

use crate::config::Config;
use crate::error::BookResult;
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// What the loop should do after one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next line.
    Reply(String),

    /// Print the farewell and stop.
    Exit(String),
}

/// Split an input line into a lowercased command and its argument tokens.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Execute one input line against the book.
///
/// Returns `None` for blank input. Handler errors are rendered as
/// `Error: <message>` replies; an unrecognized command gets the fixed
/// "Invalid command." reply.
pub fn execute(
    line: &str,
    book: &mut AddressBook,
    today: NaiveDate,
    config: &Config,
) -> Option<Outcome> {
    let (command, args) = parse_input(line)?;
    debug!(command = %command, args = args.len(), "dispatching");

    let outcome = match command.as_str() {
        "exit" | "close" => Outcome::Exit("Good bye!".to_string()),
        "hello" => Outcome::Reply("How can I help you?".to_string()),
        "add" => reply(handlers::add_contact(&args, book)),
        "change" => reply(handlers::change_contact(&args, book)),
        "phone" => reply(handlers::show_phone(&args, book)),
        "remove-phone" => reply(handlers::remove_phone(&args, book)),
        "delete" => reply(handlers::delete_contact(&args, book)),
        "all" => reply(handlers::show_all(book)),
        "add-birthday" => reply(handlers::add_birthday(&args, book)),
        "show-birthday" => reply(handlers::show_birthday(&args, book)),
        "birthdays" => reply(handlers::birthdays(book, today, config)),
        "search" => reply(handlers::search_contacts(&args, book, config)),
        _ => Outcome::Reply("Invalid command.".to_string()),
    };
    Some(outcome)
}

/// Convert a handler result into a printable outcome.
fn reply(result: BookResult<String>) -> Outcome {
    match result {
        Ok(message) => Outcome::Reply(message),
        Err(e) => Outcome::Reply(format!("Error: {}", e)),
    }
}

/// Run the loop until `exit`/`close` or end of input.
pub fn run(book: &mut AddressBook, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as a quiet exit
            break;
        }

        let today = Local::now().date_naive();
        match execute(&line, book, today, config) {
            Some(Outcome::Reply(message)) => writeln!(stdout, "{}", message)?,
            Some(Outcome::Exit(message)) => {
                writeln!(stdout, "{}", message)?;
                break;
            }
            None => {}
        }
    }

    Ok(())
}
