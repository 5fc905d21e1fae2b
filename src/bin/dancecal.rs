use anyhow::Result;
use dancecal::cli::{self, CliArgs, Command, ExportFormat};
use dancecal::config::Config;
use dancecal::context::{AppContext, StandardContext};
use dancecal::model::adapter::{to_ics_string, to_json_string};
use dancecal::model::{EventDisplay, schedule_summary};
use dancecal::parser::load_schedule;
use dancecal::source::FileSource;
use dancecal::storage::LocalStorage;
use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;

fn init_logging(level: LevelFilter) {
    // A second init (tests, embedding) is harmless; keep the first logger.
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() -> Result<()> {
    let args = CliArgs::parse(env::args().skip(1))?;
    if args.command == Command::Help {
        cli::print_help("dancecal");
        return Ok(());
    }

    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        config.log_level_filter()
    });

    if args.command == Command::InitConfig {
        config.save(&ctx)?;
        println!("{}", Config::get_path_string(&ctx)?);
        return Ok(());
    }

    let path = match &args.file {
        Some(p) => p.clone(),
        None => ctx.resolve_schedule_path(config.schedule_file.as_deref())?,
    };
    let source = FileSource::new(path);
    log::debug!("Reading schedule from {}", source.path().display());
    let events = load_schedule(&source, &config.parse_options());

    match args.command {
        Command::Export => {
            let text = match args.format {
                ExportFormat::Ics => to_ics_string(&events),
                ExportFormat::Json => to_json_string(&events)?,
            };
            match &args.output {
                Some(out) => {
                    LocalStorage::write_locked(out, text)?;
                    log::info!("Wrote {} dances to {}", events.len(), out.display());
                }
                None => println!("{}", text),
            }
        }
        _ => {
            if !events.iter().any(|e| e.appearance.is_error()) {
                println!("{}", schedule_summary(&events));
            }
            let today = chrono::Local::now().date_naive();
            for event in &events {
                println!("{}", event.to_line(today));
            }
        }
    }

    Ok(())
}
