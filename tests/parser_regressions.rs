// Regression tests for rows seen in real schedule exports.
use dancecal::model::{ClockTime, EventDate};
use dancecal::parser::classify::{RowKind, SkipReason, classify_row};
use dancecal::parser::schema::{Column, FIELD_COUNT, normalize_row};
use dancecal::parser::tokenizer::first_cell;
use dancecal::{DateContext, ParseOptions, parse_schedule};
use dancecal::{SourceFailure, SourceLines};

fn source(rows: &[&str]) -> Result<SourceLines, SourceFailure> {
    Ok(SourceLines {
        source_id: "regressions.csv".to_string(),
        lines: rows.iter().map(|r| r.to_string()).collect(),
    })
}

#[test]
fn quoted_cell_mid_row_keeps_later_columns_aligned() {
    let row = "ISDF,Club,MP,\"Hall, Town\",Caller/Cuer,8:00,logo.png,,,,,,$6";
    let fields = normalize_row(row);
    assert_eq!(fields.len(), FIELD_COUNT);
    assert_eq!(fields.get(Column::Talent), "Caller/Cuer");
    assert_eq!(fields.get(Column::TimeAndComment), "8:00");
    assert_eq!(fields.get(Column::ClubLogo), "logo.png");
    assert_eq!(fields.get(Column::Cost), "$6");
}

#[test]
fn quoted_tokenizer_count_stops_at_closing_quote() {
    let cell = first_cell("\"a, b, c\",rest");
    assert_eq!(cell.fields, vec!["a", " b", " c"]);
    assert_eq!(cell.consumed, 9);
}

#[test]
fn rows_with_leading_comma_never_become_dances() {
    // Column A empty marks notes and separators, even when the rest looks like a dance.
    let rows = [
        ",SATURDAY,,April 12,,,,,,,,,,,,,",
        ",Ankeny Squares,MP,IOOF Hall,,,Wever,Jane/John,7:00 - 9:00 Potluck,logo.webp,41.5,-93.6,map.txt,j.jpg,k.jpg,c@x.com,$5",
    ];
    let events = parse_schedule(source(&rows), DateContext::new(2025), &ParseOptions::default());
    assert!(events.is_empty());
    assert_eq!(
        classify_row(rows[1], false),
        RowKind::Skip(SkipReason::LeadingEmptyCell)
    );
}

#[test]
fn malformed_date_row_is_dropped_by_default() {
    let rows = [
        "NOTE,Saturday,,(date to be announced),,,",
        "ISDF,Club,MP,Hall,Pat,7,,,,,,,",
    ];
    let events = parse_schedule(source(&rows), DateContext::new(2025), &ParseOptions::default());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].club_name, "Club");
}

#[test]
fn malformed_date_row_can_be_kept() {
    let rows = ["NOTE,Saturday,,(date to be announced),,,"];
    let options = ParseOptions {
        keep_malformed_date_rows: true,
        ..ParseOptions::default()
    };
    let events = parse_schedule(source(&rows), DateContext::new(2025), &options);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].federation, "NOTE");
    assert_eq!(events[0].club_name, "Saturday");
}

#[test]
fn impossible_calendar_dates_are_still_dances() {
    let rows = [",MONDAY,,31 April,,,", "ISDF,Club,MP,Hall,Pat,7,,,,,,,"];
    let events = parse_schedule(source(&rows), DateContext::new(2025), &ParseOptions::default());
    assert_eq!(events[0].date, EventDate::new(2025, 4, 31));
}

#[test]
fn minute_sixty_one_is_accepted() {
    let rows = ["ISDF,Club,MP,Hall,Pat,7:61 - 9:99 odd,,,,,,,"];
    let events = parse_schedule(source(&rows), DateContext::new(2025), &ParseOptions::default());
    assert_eq!(events[0].start, ClockTime::new(7, 61));
    assert_eq!(events[0].end, ClockTime::new(9, 99));
    assert_eq!(events[0].comment, " odd");
}

#[test]
fn unterminated_quote_swallows_the_rest_of_the_row() {
    let rows = ["ISDF,Club,MP,\"Hall, Town,Pat,7:00,,,,,,,"];
    let events = parse_schedule(source(&rows), DateContext::new(2025), &ParseOptions::default());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].address1, "Hall");
    assert_eq!(events[0].address2, " Town");
    assert_eq!(events[0].address3, "Pat");
    assert_eq!(events[0].city, "7:00");
    assert_eq!(events[0].caller, "");
}

#[test]
fn replacement_characters_do_not_abort_the_load() {
    let rows = ["\u{FFFD}\u{FFFD},junk,\u{FFFD},x", "ISDF,Club,MP,Hall,Pat,7,,,,,,,"];
    let events = parse_schedule(source(&rows), DateContext::new(2025), &ParseOptions::default());
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].club_name, "Club");
}
