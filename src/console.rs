//! Interactive front end.
//!
//! Every presenter talks to the user through a [`Terminal`] and to the rest
//! of the system through the service traits only.

use crate::domain::{Email, ValidationError};
use crate::service::ServiceError;
use colored::Colorize;
use rustyline::error::ReadlineError;
use std::fmt::Display;
use std::io;
use std::str::FromStr;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};
use thiserror::Error;

mod auth;
mod integration;
mod personnel;
mod reservation;
mod terminal;

#[cfg(test)]
mod tests;

pub use auth::{AuthConsole, AuthPresenter};
pub use integration::Integration;
pub use personnel::{PersonnelConsole, PersonnelPresenter};
pub use reservation::{ReservationConsole, ReservationPresenter};
pub use terminal::{RustylineTerminal, Terminal};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("line editor failed: {0}")]
    Readline(#[from] ReadlineError),

    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Why a form stopped before reaching the service call.
#[derive(Debug, Error)]
enum FormError {
    #[error("cancelled")]
    Closed,

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{email} is a {kind}")]
    WrongKind { email: Email, kind: &'static str },

    #[error("{0}")]
    Refused(&'static str),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

type FormResult<T> = Result<T, FormError>;

/// Prints the outcome of a form. Only a terminal failure escapes.
fn report(term: &mut dyn Terminal, outcome: FormResult<String>) -> Result<(), ConsoleError> {
    match outcome {
        Ok(message) => term.print(&message.green().to_string()),
        Err(FormError::Console(err)) => return Err(err),
        Err(FormError::Closed) => term.print(&"cancelled".yellow().to_string()),
        Err(err) => term.print(&format!("{} {}", "error:".red().bold(), err)),
    }
    Ok(())
}

fn read(term: &mut dyn Terminal, prompt: &str) -> FormResult<String> {
    term.read_line(prompt)?
        .map(|line| line.trim().to_string())
        .ok_or(FormError::Closed)
}

/// Parses the argument of a command, e.g. the key in `hotel show <code>`.
fn argument<T>(arg: Option<&String>, usage: &'static str) -> FormResult<T>
where
    T: FromStr<Err = ValidationError>,
{
    let arg = arg.ok_or(FormError::Usage(usage))?;
    Ok(arg.parse()?)
}

/// Asks for one value and parses it.
fn prompt<T>(term: &mut dyn Terminal, label: &str) -> FormResult<T>
where
    T: FromStr<Err = ValidationError>,
{
    let line = read(term, &format!("{label}: "))?;
    Ok(line.parse()?)
}

/// Asks for one value showing the current one; an empty answer keeps it.
fn prompt_or_keep<T>(term: &mut dyn Terminal, label: &str, current: &T) -> FormResult<T>
where
    T: FromStr<Err = ValidationError> + Display + Clone,
{
    let line = read(term, &format!("{label} [{current}]: "))?;
    if line.is_empty() {
        return Ok(current.clone());
    }
    Ok(line.parse()?)
}

fn show_rows<T: Tabled>(term: &mut dyn Terminal, rows: &[T], empty: &str) -> Result<(), ConsoleError> {
    if rows.is_empty() {
        term.print(empty);
        return Ok(());
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    term.show_table(table.to_string(), rows.len())
}

fn print_help(term: &mut dyn Terminal, lines: &[(&str, &str)]) {
    let width = lines.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut text = String::from("\nAvailable Commands:\n");
    for (usage, what) in lines {
        text.push_str(&format!("  {usage:<width$} - {what}\n"));
    }
    term.print(&text);
}

/// Next command split into words, `None` once the input is closed.
fn read_command(term: &mut dyn Terminal, prompt: &str) -> Result<Option<Vec<String>>, ConsoleError> {
    Ok(term
        .read_line(prompt)?
        .map(|line| line.split_whitespace().map(str::to_string).collect()))
}
