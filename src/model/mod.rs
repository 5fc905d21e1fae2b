// File: ./src/model/mod.rs
pub mod adapter;
pub mod display;
pub mod item;

pub use display::{EventDisplay, decode_levels, schedule_summary};
pub use item::{Appearance, ChangedField, ClockTime, Event, EventDate};
