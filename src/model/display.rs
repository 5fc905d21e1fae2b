// File: ./src/model/display.rs
use crate::model::item::{Appearance, ChangedField, Event};
use chrono::{Datelike, NaiveDate, Weekday};

/// Shown instead of a weekday when the event date is not a real day.
pub const UNKNOWN_WEEKDAY: &str = "???";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Indexed by a bit set: M = 1, P = 2, R = 4.
const LEVEL_NAMES: [&str; 8] = [
    "",
    "Mainstream",
    "Plus",
    "Mainstream, Plus",
    "Rounds",
    "Mainstream, Rounds",
    "Plus, Rounds",
    "Mainstream, Plus, Rounds",
];

/// Level names spelled by the M, P and R letters of a levels code, in any
/// case and order. Other letters are ignored.
pub fn decode_levels(code: &str) -> &'static str {
    let upper = code.to_uppercase();
    let mut selector = 0;
    if upper.contains('M') {
        selector |= 0x1;
    }
    if upper.contains('P') {
        selector |= 0x2;
    }
    if upper.contains('R') {
        selector |= 0x4;
    }
    LEVEL_NAMES[selector]
}

pub trait EventDisplay {
    fn day_of_week(&self) -> String;
    fn month_text(&self) -> String;
    fn time_range_text(&self) -> String;
    fn date_as_numbers(&self) -> String;
    /// Decoded level names, or the raw code upper-cased when it holds no
    /// M, P or R.
    fn levels_display(&self) -> String;
    fn is_in_the_past(&self, today: NaiveDate) -> bool;
    fn status_label(&self) -> Option<String>;
    fn to_line(&self, today: NaiveDate) -> String;
}

fn weekday_name(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl EventDisplay for Event {
    fn day_of_week(&self) -> String {
        match self.date.to_naive() {
            Some(d) => weekday_name(d.weekday()).to_string(),
            None => UNKNOWN_WEEKDAY.to_string(),
        }
    }

    fn month_text(&self) -> String {
        match self.date.month {
            m @ 1..=12 => MONTHS[(m - 1) as usize].to_string(),
            m => format!("! Invalid month = {} ?", m),
        }
    }

    fn time_range_text(&self) -> String {
        format!(
            "{}:{:02} to {}:{:02}",
            self.start.hour, self.start.minute, self.end.hour, self.end.minute
        )
    }

    fn date_as_numbers(&self) -> String {
        format!("{}/{}/{}", self.date.month, self.date.day, self.date.year)
    }

    fn levels_display(&self) -> String {
        match decode_levels(&self.levels_code) {
            "" => self.levels_code.trim().to_uppercase(),
            names => names.to_string(),
        }
    }

    fn is_in_the_past(&self, today: NaiveDate) -> bool {
        self.date.to_naive().is_some_and(|d| d < today)
    }

    fn status_label(&self) -> Option<String> {
        match self.appearance {
            Appearance::Default => None,
            Appearance::Notice => Some("CHANGED".to_string()),
            Appearance::Changed(field) => Some(match field {
                ChangedField::Place => "NEW PLACE".to_string(),
                other => format!("NEW {}", other.to_string().to_uppercase()),
            }),
            Appearance::Cancel => Some("CANCELLED".to_string()),
            Appearance::Error => Some("ERROR".to_string()),
        }
    }

    fn to_line(&self, today: NaiveDate) -> String {
        if self.appearance.is_error() {
            return format!(
                "[ERROR] {} ({}) - {} - {}",
                self.club_name, self.city, self.caller, self.contact
            );
        }

        let weekday = self.day_of_week();
        let mut s = format!(
            "{} {} {} {}  {}  {}",
            &weekday[..weekday.len().min(3)],
            self.month_text(),
            self.date.day,
            self.date.year,
            self.time_range_text(),
            self.club_name
        );
        if !self.city.is_empty() {
            s.push_str(&format!(" @ {}", self.city));
        }
        if !self.caller.is_empty() {
            s.push_str(&format!(" | {}", self.caller));
            if !self.cuer.is_empty() {
                s.push_str(&format!(" / {}", self.cuer));
            }
        }
        let levels = self.levels_display();
        if !levels.is_empty() {
            s.push_str(&format!(" [{}]", levels));
        }
        if !self.comment.trim().is_empty() {
            s.push_str(&format!(" -{}", self.comment));
        }
        if self.is_in_the_past(today) {
            s.push_str(" (past)");
        }
        if let Some(label) = self.status_label() {
            s = format!("{} {}", label, s);
        }
        s
    }
}

/// One-line overview such as "12 dances from 4/12/2025 to 9/6/2025".
pub fn schedule_summary(events: &[Event]) -> String {
    match (events.first(), events.last()) {
        (Some(first), Some(last)) => format!(
            "{} dances from {} to {}",
            events.len(),
            first.date_as_numbers(),
            last.date_as_numbers()
        ),
        _ => "0 dances".to_string(),
    }
}
