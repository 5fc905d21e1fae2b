// File: ./src/parser/time_range.rs
//! Start/end time and free-text comment from the time cell.
//!
//! Ideally "hh:mm - hh:mm comment", but authors abbreviate freely ("7 - 9",
//! "7:30 Potluck"). Values are taken verbatim, "7:61" included.
use crate::model::ClockTime;
use crate::parser::scanner::{Scan, find_positive_integer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    /// `None` when the cell holds no number at all.
    pub start: Option<ClockTime>,
    pub end: ClockTime,
    pub comment: String,
}

/// Reads "h" or "h:m" at or after `start`.
///
/// A colon directly after the hour introduces the minute; a colon with no
/// digits after it leaves the minute at 0.
pub fn parse_clock(text: &str, start: usize) -> Scan<ClockTime> {
    let hour = find_positive_integer(text, start);
    let Some(h) = hour.value else {
        return Scan::missing(hour.next);
    };

    if text.as_bytes().get(hour.next) != Some(&b':') {
        return Scan::found(ClockTime::new(h, 0), hour.next);
    }

    let minute = find_positive_integer(text, hour.next);
    Scan::found(ClockTime::new(h, minute.value.unwrap_or(0)), minute.next)
}

/// Splits the time cell into start, end and the trailing comment.
///
/// The end time is only looked for when the cell has a dash somewhere; it
/// defaults to 0:00. The comment is whatever follows the last character
/// scanned, untrimmed. A cell without any number is all comment.
pub fn parse_time_range(cell: &str) -> TimeRange {
    let start = parse_clock(cell, 0);
    let Some(start_time) = start.value else {
        return TimeRange {
            start: None,
            end: ClockTime::default(),
            comment: cell.to_string(),
        };
    };

    let mut ix = start.next;
    let mut end_time = ClockTime::default();
    if cell.contains('-') {
        let end = parse_clock(cell, ix);
        ix = end.next;
        if let Some(t) = end.value {
            end_time = t;
        }
    }

    TimeRange {
        start: Some(start_time),
        end: end_time,
        comment: cell.get(ix..).unwrap_or_default().to_string(),
    }
}
