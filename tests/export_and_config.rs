// Export and configuration tests against a temporary data directory.
use dancecal::config::Config;
use dancecal::context::{AppContext, TestContext};
use dancecal::model::adapter::{to_ics_string, to_json_string};
use dancecal::storage::LocalStorage;
use dancecal::{Appearance, Event, FileSource, LineSource, ParseOptions, load_schedule};
use std::fs;

const SCHEDULE: &str = "\
,SATURDAY,,12 April 2025,,,
ISDF,Ankeny Squares,MP,\"IOOF Hall, Wever\",Jane/John,7:00 - 9:00 Potluck,ankeny.webp,\"41.5,-93.6\",ankeny.txt,,,c@x.com,$5
ISDF,Prairie Promenaders,A1,Barn,Pat,19:30 - 22:00,,,,,,,
";

fn write_schedule(ctx: &TestContext, contents: &str) -> FileSource {
    let path = ctx.resolve_schedule_path(None).unwrap();
    LocalStorage::write_locked(&path, contents).unwrap();
    FileSource::new(path)
}

#[test]
fn file_schedule_exports_to_ics() {
    let ctx = TestContext::new();
    let source = write_schedule(&ctx, SCHEDULE);
    let events = load_schedule(&source, &ParseOptions::default());
    assert_eq!(events.len(), 2);

    let ics = to_ics_string(&events);
    assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
    // "7:00 - 9:00" on the sheet is an evening dance.
    assert!(ics.contains("DTSTART:20250412T190000"));
    assert!(ics.contains("DTEND:20250412T210000"));
    assert!(ics.contains("DTSTART:20250412T193000"));
    assert!(ics.contains("DTEND:20250412T220000"));
    assert!(ics.contains("SUMMARY:Prairie Promenaders"));
}

#[test]
fn afternoon_dance_keeps_noon_and_shifts_the_rest() {
    let ctx = TestContext::new();
    let source = write_schedule(
        &ctx,
        ",SUNDAY,,13 April 2025,,,\nISDF,Noon Squares,MP,Hall,Pat,12:00 - 3:00 Picnic,,,,,,,\n",
    );
    let events = load_schedule(&source, &ParseOptions::default());
    let ics = to_ics_string(&events);
    assert!(ics.contains("DTSTART:20250413T120000"));
    assert!(ics.contains("DTEND:20250413T150000"));
}

#[test]
fn diagnostic_event_is_not_exported_as_a_dance() {
    let ctx = TestContext::new();
    let missing = FileSource::new(ctx.root.join("nowhere.csv"));
    let events = load_schedule(&missing, &ParseOptions::default());
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].appearance, Appearance::Error);

    let ics = to_ics_string(&events);
    assert!(!ics.contains("BEGIN:VEVENT"));

    // JSON keeps it so other tools can show the problem.
    let json = to_json_string(&events).unwrap();
    let back: Vec<Event> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, events);
}

#[test]
fn export_file_is_written_atomically() {
    let ctx = TestContext::new();
    let source = write_schedule(&ctx, SCHEDULE);
    let events = load_schedule(&source, &ParseOptions::default());

    let out = ctx.get_data_dir().unwrap().join("exports").join("dances.json");
    LocalStorage::write_locked(&out, to_json_string(&events).unwrap()).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.contains("Ankeny Squares"));
    assert!(!out.with_file_name("dances.json.tmp").exists());
}

#[test]
fn missing_config_gives_defaults() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));
    assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
}

#[test]
fn config_round_trip() {
    let ctx = TestContext::new();
    let config = Config {
        schedule_file: Some("fall2025.csv".to_string()),
        support_contact: "Call Pat".to_string(),
        keep_malformed_date_rows: true,
        log_level: "debug".to_string(),
    };
    config.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.log_level_filter(), log::LevelFilter::Debug);

    let options = loaded.parse_options();
    assert!(options.keep_malformed_date_rows);
    assert_eq!(options.support_contact, "Call Pat");
    assert_eq!(
        ctx.resolve_schedule_path(loaded.schedule_file.as_deref()).unwrap(),
        ctx.get_data_dir().unwrap().join("fall2025.csv")
    );
}

#[test]
fn partial_config_fills_in_defaults() {
    let ctx = TestContext::new();
    fs::write(ctx.get_config_file_path().unwrap(), "log_level = \"nonsense\"\n").unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.schedule_file, None);
    assert!(!loaded.keep_malformed_date_rows);
    assert_eq!(loaded.support_contact, Config::default().support_contact);
    assert_eq!(loaded.log_level_filter(), log::LevelFilter::Warn);
}

#[test]
fn broken_config_is_reported() {
    let ctx = TestContext::new();
    fs::write(ctx.get_config_file_path().unwrap(), "keep_malformed_date_rows = maybe").unwrap();
    let err = Config::load(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(Config::load_or_default(&ctx).is_err());
}

#[test]
fn configured_source_id_names_the_file() {
    let ctx = TestContext::new();
    let source = write_schedule(&ctx, SCHEDULE);
    assert!(source.id().ends_with("summer2025.csv"));
}
