// File: ./src/parser/mod.rs
//! Turns the schedule spreadsheet export into dance events.
//!
//! Rows are either date announcements, rows to ignore, or dances. Each
//! dance row is expanded to a fixed set of logical fields and assembled
//! into an [`Event`] stamped with the most recently announced date.
//! Nothing here fails: bad rows are dropped or produce sparse events, and
//! an unreadable source becomes a single diagnostic event.
pub mod address;
pub mod classify;
pub mod scanner;
pub mod schema;
pub mod talent;
pub mod time_range;
pub mod tokenizer;

use crate::model::{Event, EventDate};
use crate::source::{LineSource, SourceFailure, SourceLines};
use address::resolve_address;
use classify::{RowKind, SkipReason, classify_row};
use schema::{Column, RowFields, normalize_row};
use talent::split_talent;
use time_range::parse_time_range;

pub use classify::DateContext;

pub const DEFAULT_SUPPORT_CONTACT: &str = "Please email iowasquaredance@proton.me";

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Treat rows that name a weekday but carry no readable date as
    /// ordinary rows instead of dropping them.
    pub keep_malformed_date_rows: bool,
    /// Contact text for the diagnostic event.
    pub support_contact: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            keep_malformed_date_rows: false,
            support_contact: DEFAULT_SUPPORT_CONTACT.to_string(),
        }
    }
}

/// Builds one event from a normalized dance row.
pub fn assemble_event(fields: &RowFields, date: EventDate) -> Event {
    let mut event = Event::on(date);
    event.federation = fields.get(Column::Federation).to_string();
    event.club_name = fields.get(Column::ClubName).to_string();
    event.levels_code = fields.get(Column::Levels).to_string();
    event.club_logo = fields.get(Column::ClubLogo).to_string();
    event.geo = format!(
        "{},{}",
        fields.nth(Column::Geo, 0),
        fields.nth(Column::Geo, 1)
    );
    event.directions = fields.get(Column::Directions).to_string();
    event.caller_photo = fields.get(Column::CallerPhoto).to_string();
    event.cuer_photo = fields.get(Column::CuerPhoto).to_string();
    event.contact = fields.get(Column::Contact).to_string();
    event.cost = fields.get(Column::Cost).to_string();

    event.address1 = fields.nth(Column::Address, 0).to_string();
    let tail = resolve_address(
        fields.nth(Column::Address, 1),
        fields.nth(Column::Address, 2),
        fields.nth(Column::Address, 3),
    );
    if let Some(a2) = tail.address2 {
        event.address2 = a2;
    }
    if let Some(a3) = tail.address3 {
        event.address3 = a3;
    }
    if let Some(city) = tail.city {
        event.city = city;
    }

    let times = parse_time_range(fields.get(Column::TimeAndComment));
    if let Some(start) = times.start {
        event.start = start;
        event.end = times.end;
    }
    event.comment = times.comment;

    let (caller, cuer) = split_talent(fields.get(Column::Talent));
    event.caller = caller;
    event.cuer = cuer;

    event
}

/// Parses lines in order, threading `context` through date rows.
pub fn parse_lines<S: AsRef<str>>(
    lines: &[S],
    context: &mut DateContext,
    options: &ParseOptions,
) -> Vec<Event> {
    let mut events = Vec::new();

    for (ix, line) in lines.iter().enumerate() {
        let line_no = ix + 1;
        match classify_row(line.as_ref(), options.keep_malformed_date_rows) {
            RowKind::Date(update) => {
                context.apply(update);
                log::debug!(
                    "Line {}: date row -> {}-{:02}-{:02}",
                    line_no,
                    context.year,
                    context.month,
                    context.day
                );
            }
            RowKind::Skip(SkipReason::MalformedDate) => {
                log::warn!(
                    "Line {}: looks like a date row but the date is unreadable, skipped",
                    line_no
                );
            }
            RowKind::Skip(reason) => {
                log::debug!("Line {}: skipped ({:?})", line_no, reason);
            }
            RowKind::Event(row) => {
                let fields = normalize_row(row);
                let mut event = assemble_event(&fields, context.date());
                event.key = u32::try_from(line_no).ok();
                log::debug!("Line {}: dance '{}'", line_no, event.club_name);
                events.push(event);
            }
        }
    }

    events
}

/// Parses a source result with the given date context.
///
/// A failure, or a source with no lines, yields exactly one diagnostic
/// event and nothing else.
pub fn parse_schedule(
    source: Result<SourceLines, SourceFailure>,
    mut context: DateContext,
    options: &ParseOptions,
) -> Vec<Event> {
    let lines = match source {
        Ok(src) if src.lines.is_empty() => Err(SourceFailure::empty(src.source_id)),
        other => other,
    };

    match lines {
        Ok(src) => {
            let events = parse_lines(&src.lines, &mut context, options);
            log::info!(
                "Loaded {} dances from {} lines of {}",
                events.len(),
                src.lines.len(),
                src.source_id
            );
            events
        }
        Err(failure) => {
            log::warn!("Schedule unavailable: {}", failure);
            vec![Event::load_error(
                &failure.source_id,
                &failure.cause,
                &options.support_contact,
                chrono::Local::now().naive_local(),
            )]
        }
    }
}

/// Reads `source` and parses it with a fresh date context for this year.
pub fn load_schedule(source: &dyn LineSource, options: &ParseOptions) -> Vec<Event> {
    parse_schedule(source.read_lines(), DateContext::current_year(), options)
}
