//! Time-window queries over a user's messages.
//!
//! Window bounds are written as `"HH:MM DD-MM-YYYY"` (e.g. `"16:00 10-12-2021"`)
//! and read as UTC with zero seconds.

use super::{messages, users};
use crate::error::{CheeperError, Result};
use crate::model::Message;
use crate::store::backend::StorageBackend;
use crate::store::DocumentStore;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Hour, minute, day and month take one or two digits; the year takes
/// exactly four.
pub const WINDOW_FORMAT: &str = "%H:%M %d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let malformed =
        |why: String| CheeperError::MalformedTime(format!("{:?}: {}", input, why));

    let (time, date) = trimmed
        .split_once(' ')
        .ok_or_else(|| malformed("expected \"HH:MM DD-MM-YYYY\"".to_string()))?;
    if numeric_parts(time, ':', 2).is_none() {
        return Err(malformed("time must be HH:MM".to_string()));
    }
    match numeric_parts(date, '-', 3) {
        Some(parts) if parts[2].len() == 4 => {}
        Some(_) => return Err(malformed("year must have four digits".to_string())),
        None => return Err(malformed("date must be DD-MM-YYYY".to_string())),
    }

    NaiveDateTime::parse_from_str(trimmed, WINDOW_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| malformed(e.to_string()))
}

fn numeric_parts(s: &str, sep: char, expected: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = s.split(sep).collect();
    let numeric = parts
        .iter()
        .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    (parts.len() == expected && numeric).then_some(parts)
}

pub fn parse_window(start: &str, end: &str) -> Result<Window> {
    let window = Window {
        start: parse_timestamp(start)?,
        end: parse_timestamp(end)?,
    };
    if window.start > window.end {
        return Err(CheeperError::MalformedTime(format!(
            "window starts ({}) after it ends ({})",
            start, end
        )));
    }
    Ok(window)
}

/// Messages `login` posted inside the window, both ends included.
pub fn messages_in_window<B: StorageBackend>(
    store: &DocumentStore<B>,
    login: &str,
    start: &str,
    end: &str,
) -> Result<Vec<Message>> {
    let user = users::find_by_login(store, login)?;
    let window = parse_window(start, end)?;
    messages::find_in_range(store, &user.id, window.start, window.end)
}
