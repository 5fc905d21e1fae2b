// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Logo shown on the diagnostic event when the schedule could not be loaded.
pub const ERROR_LOGO: &str = "sickface";
/// Instruction placed in the caller slot of the diagnostic event.
pub const ERROR_INSTRUCTION: &str = "Touch this for details";

/// Which part of a dance an announced change concerns.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum ChangedField {
    Date,
    Time,
    Place,
    Caller,
    Cuer,
    Comment,
    Level,
    Cost,
}

/// Rendering intent attached to every event.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field")]
pub enum Appearance {
    /// The event as originally posted.
    #[default]
    Default,
    /// General change notice, possibly covering several fields.
    Notice,
    /// A change to one specific field.
    Changed(ChangedField),
    Cancel,
    /// Not a dance: the schedule failed to load.
    Error,
}

impl Appearance {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancel)
    }
}

/// Wall-clock hour and minute as written in the spreadsheet.
///
/// Values are not range checked: "7:61" is kept as hour 7, minute 61.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn is_midnight(&self) -> bool {
        self.hour == 0 && self.minute == 0
    }
}

/// Year, month and day stamped onto an event.
///
/// May describe a day that does not exist (April 31st); consumers must cope.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl EventDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn to_naive(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// One square dance, as read from a single spreadsheet row.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Line number of the source row. Not unique across loads.
    pub key: Option<u32>,
    pub date: EventDate,
    pub start: ClockTime,
    pub end: ClockTime,
    pub federation: String,
    pub club_name: String,
    pub club_logo: String,
    pub levels_code: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    /// Can include a state.
    pub city: String,
    pub directions: String,
    /// "latitude,longitude" verbatim from the sheet.
    pub geo: String,
    pub caller: String,
    pub caller_photo: String,
    pub cuer: String,
    pub cuer_photo: String,
    pub comment: String,
    pub cost: String,
    pub contact: String,
    pub appearance: Appearance,
}

impl Event {
    /// An empty event on the given date; the assembler fills in the rest.
    pub fn on(date: EventDate) -> Self {
        Self {
            key: None,
            date,
            start: ClockTime::default(),
            end: ClockTime::default(),
            federation: String::new(),
            club_name: String::new(),
            club_logo: String::new(),
            levels_code: String::new(),
            address1: String::new(),
            address2: String::new(),
            address3: String::new(),
            city: String::new(),
            directions: String::new(),
            geo: String::new(),
            caller: String::new(),
            caller_photo: String::new(),
            cuer: String::new(),
            cuer_photo: String::new(),
            comment: String::new(),
            cost: String::new(),
            contact: String::new(),
            appearance: Appearance::Default,
        }
    }

    /// The sentinel record that replaces the whole schedule when it cannot be read.
    pub fn load_error(
        source_id: &str,
        cause: &str,
        support_contact: &str,
        now: chrono::NaiveDateTime,
    ) -> Self {
        use chrono::{Datelike, Timelike};

        let date = EventDate::new(now.year(), now.month(), now.day());
        let clock = ClockTime::new(now.hour(), now.minute());
        Self {
            start: clock,
            end: clock,
            club_name: cause.to_string(),
            club_logo: ERROR_LOGO.to_string(),
            city: source_id.to_string(),
            caller: ERROR_INSTRUCTION.to_string(),
            contact: support_contact.to_string(),
            appearance: Appearance::Error,
            ..Self::on(date)
        }
    }

    /// Address lines and city that carry text, in display order.
    pub fn location_parts(&self) -> Vec<&str> {
        [
            self.address1.as_str(),
            self.address2.as_str(),
            self.address3.as_str(),
            self.city.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn load_error_carries_diagnostics() {
        let now = NaiveDate::from_ymd_opt(2025, 6, 7)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        let e = Event::load_error("summer2025.csv", "file not found", "mail us", now);

        assert_eq!(e.appearance, Appearance::Error);
        assert_eq!(e.club_name, "file not found");
        assert_eq!(e.city, "summer2025.csv");
        assert_eq!(e.caller, ERROR_INSTRUCTION);
        assert_eq!(e.contact, "mail us");
        assert_eq!(e.date, EventDate::new(2025, 6, 7));
        assert_eq!(e.start, ClockTime::new(19, 30));
    }

    #[test]
    fn appearance_predicates() {
        assert!(Appearance::Cancel.is_cancelled());
        assert!(!Appearance::Cancel.is_error());
        assert!(Appearance::Error.is_error());
        assert!(!Appearance::Changed(ChangedField::Time).is_cancelled());
    }

    #[test]
    fn location_parts_skip_blanks() {
        let mut e = Event::on(EventDate::new(2025, 1, 1));
        e.address1 = "IOOF Hall".into();
        e.address2 = "  ".into();
        e.city = "Wever".into();
        assert_eq!(e.location_parts(), vec!["IOOF Hall", "Wever"]);
    }

    #[test]
    fn appearance_serializes_with_field() {
        let json = serde_json::to_string(&Appearance::Changed(ChangedField::Caller)).unwrap();
        assert_eq!(json, r#"{"kind":"Changed","field":"Caller"}"#);
        let back: Appearance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Appearance::Changed(ChangedField::Caller));
    }

    #[test]
    fn every_changed_field_round_trips() {
        use strum::IntoEnumIterator;
        let fields: Vec<ChangedField> = ChangedField::iter().collect();
        assert_eq!(fields.len(), 8);
        for field in fields {
            let tag = Appearance::Changed(field);
            let back: Appearance = serde_json::from_str(&serde_json::to_string(&tag).unwrap()).unwrap();
            assert_eq!(back, tag);
            assert!(!field.to_string().is_empty());
        }
    }
}
