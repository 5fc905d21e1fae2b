// File: ./src/parser/classify.rs
//! Row classification and the carried-forward dance date.
//!
//! The sheet announces a date once ("SATURDAY, , April 12") and every dance
//! row below it happens on that date until the next announcement.
use crate::model::EventDate;
use crate::parser::scanner::find_positive_integer;
use chrono::Datelike;

const WEEKDAYS: [&str; 7] = ["FRI", "SAT", "SUN", "MON", "TUE", "WED", "THU"];

const WEEKDAY_NAMES: [&str; 7] = [
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
];

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Letters a month abbreviation can start with.
const MONTH_INITIALS: &str = "JFMASOND";

/// Fewer raw segments than this and a row can be neither a date nor a dance.
pub const MIN_SEGMENTS: usize = 4;

/// Year, month and day most recently announced by a date row.
///
/// Owned by a single parse; a fresh one must be created for every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateContext {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateContext {
    /// January 1st of `year`.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    /// January 1st of the current local year.
    pub fn current_year() -> Self {
        Self::new(chrono::Local::now().year())
    }

    pub fn apply(&mut self, update: DateUpdate) {
        self.month = update.month;
        self.day = update.day;
        if let Some(year) = update.year {
            self.year = year;
        }
    }

    pub fn date(&self) -> EventDate {
        EventDate::new(self.year, self.month, self.day)
    }
}

impl Default for DateContext {
    fn default() -> Self {
        Self::current_year()
    }
}

/// What a recognized date row announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateUpdate {
    pub month: u32,
    pub day: u32,
    /// Only set when the row names a year after 2000.
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooShort,
    /// First cell empty: separators, headings, notes.
    LeadingEmptyCell,
    /// Names a weekday but the day or month could not be read.
    MalformedDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind<'a> {
    Date(DateUpdate),
    Skip(SkipReason),
    Event(&'a str),
}

/// Tries to read a date announcement from a row's raw comma segments.
pub fn parse_date_segments(segments: &[&str]) -> Option<DateUpdate> {
    if segments.len() < MIN_SEGMENTS || !starts_with_weekday(segments[1]) {
        return None;
    }
    parse_day_and_month(segments[3])
}

fn starts_with_weekday(segment: &str) -> bool {
    if segment.trim().is_empty() {
        return false;
    }
    let prefix: String = segment.chars().take(3).collect::<String>().to_uppercase();
    WEEKDAYS.contains(&prefix.as_str())
}

/// True when the whole cell is a weekday ("Sat", "SATURDAY", "Sat."), as
/// opposed to a club name that merely starts like one ("Sunflower Squares").
fn is_weekday_word(segment: &str) -> bool {
    let word = segment.trim().trim_end_matches('.').to_uppercase();
    WEEKDAYS.contains(&word.as_str()) || WEEKDAY_NAMES.contains(&word.as_str())
}

fn parse_day_and_month(segment: &str) -> Option<DateUpdate> {
    let upper = segment.to_uppercase();

    let day = find_positive_integer(&upper, 0).value?;
    if !(1..=31).contains(&day) {
        return None;
    }

    let month_at = upper.find(|c: char| MONTH_INITIALS.contains(c))?;
    let abbreviation = upper.get(month_at..month_at + 3)?;
    let month = MONTHS.iter().position(|m| *m == abbreviation)? as u32 + 1;

    let year = find_positive_integer(&upper, month_at)
        .value
        .filter(|y| *y > 2000)
        .and_then(|y| i32::try_from(y).ok());

    Some(DateUpdate { month, day, year })
}

/// Decides what to do with one line of the sheet.
///
/// With `keep_malformed_dates` set, a row that names a weekday but carries
/// no readable date is treated like any other row instead of being dropped.
pub fn classify_row(row: &str, keep_malformed_dates: bool) -> RowKind<'_> {
    let segments: Vec<&str> = row.split(',').collect();
    if segments.len() < MIN_SEGMENTS {
        return RowKind::Skip(SkipReason::TooShort);
    }

    if let Some(update) = parse_date_segments(&segments) {
        return RowKind::Date(update);
    }

    if !keep_malformed_dates && is_weekday_word(segments[1]) {
        return RowKind::Skip(SkipReason::MalformedDate);
    }

    if row.starts_with(',') {
        return RowKind::Skip(SkipReason::LeadingEmptyCell);
    }

    RowKind::Event(row)
}
