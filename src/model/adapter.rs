// File: src/model/adapter.rs
//! iCalendar and JSON export of parsed events.
use crate::model::display::EventDisplay;
use crate::model::item::{ClockTime, Event};
use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime, Utc};
use icalendar::{Calendar, Component};

const ICS_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Sheet times are written on a 12-hour clock and are all afternoon or
/// evening: "7:00" is 19:00. Hours from 12 up are already unambiguous.
pub fn assume_pm(hour: u32) -> u32 {
    if hour < 12 { hour + 12 } else { hour }
}

fn to_naive(event: &Event, time: ClockTime) -> Option<NaiveDateTime> {
    let date = event.date.to_naive()?;
    let time = NaiveTime::from_hms_opt(assume_pm(time.hour), time.minute, 0)?;
    Some(date.and_time(time))
}

fn slug(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Event {
    /// Stable identifier: same date, row and club give the same UID.
    pub fn ical_uid(&self) -> String {
        format!(
            "{:04}{:02}{:02}-{}-{}@dancecal",
            self.date.year,
            self.date.month,
            self.date.day,
            self.key.unwrap_or(0),
            slug(&self.club_name)
        )
    }

    fn description_text(&self) -> String {
        let mut lines = Vec::new();
        if !self.caller.is_empty() {
            if self.cuer.is_empty() {
                lines.push(format!("Caller: {}", self.caller));
            } else {
                lines.push(format!("Caller: {} / Cuer: {}", self.caller, self.cuer));
            }
        }
        let levels = self.levels_display();
        if !levels.is_empty() {
            lines.push(format!("Levels: {}", levels));
        }
        if !self.cost.is_empty() {
            lines.push(format!("Cost: {}", self.cost));
        }
        if !self.contact.is_empty() {
            lines.push(format!("Contact: {}", self.contact));
        }
        if !self.comment.trim().is_empty() {
            lines.push(self.comment.trim().to_string());
        }
        lines.join("\n")
    }

    /// Latitude and longitude, when the geo text holds two numbers.
    pub fn geo_coordinates(&self) -> Option<(f64, f64)> {
        let (lat, lon) = self.geo.split_once(',')?;
        Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
    }

    /// A VEVENT for this dance, or `None` when it cannot be placed on a
    /// calendar (diagnostic events, impossible dates or times).
    pub fn to_ical_event(&self) -> Option<icalendar::Event> {
        if self.appearance.is_error() {
            return None;
        }
        let start = to_naive(self, self.start)?;

        let mut ev = icalendar::Event::new();
        ev.uid(&self.ical_uid());
        ev.summary(&self.club_name);
        ev.timestamp(Utc::now());
        ev.add_property("DTSTART", start.format(ICS_STAMP_FORMAT).to_string());

        if !self.end.is_midnight()
            && let Some(end) = to_naive(self, self.end)
            && end > start
        {
            ev.add_property("DTEND", end.format(ICS_STAMP_FORMAT).to_string());
        }

        let location = self
            .location_parts()
            .iter()
            .map(|p| p.trim())
            .collect::<Vec<_>>()
            .join(", ");
        if !location.is_empty() {
            ev.add_property("LOCATION", location);
        }

        let description = self.description_text();
        if !description.is_empty() {
            ev.description(&description);
        }

        if let Some((lat, lon)) = self.geo_coordinates() {
            ev.add_property("GEO", format!("{};{}", lat, lon));
        }

        if self.appearance.is_cancelled() {
            ev.add_property("STATUS", "CANCELLED");
        }

        Some(ev)
    }
}

/// All events as one VCALENDAR document. Events that cannot be placed on
/// a calendar are left out.
pub fn to_ics_string(events: &[Event]) -> String {
    let mut calendar = Calendar::new();
    for event in events {
        match event.to_ical_event() {
            Some(ev) => {
                calendar.push(ev);
            }
            None if event.appearance.is_error() => {}
            None => log::warn!(
                "Not exporting '{}': {}-{}-{} {}:{} is not a real date/time",
                event.club_name,
                event.date.year,
                event.date.month,
                event.date.day,
                event.start.hour,
                event.start.minute
            ),
        }
    }
    calendar.to_string()
}

pub fn to_json_string(events: &[Event]) -> Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}
