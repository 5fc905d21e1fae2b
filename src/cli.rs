// File: ./src/cli.rs
//! Command-line argument handling and help text.
use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    #[default]
    List,
    Export,
    InitConfig,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Ics,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub command: Command,
    pub root: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub verbose: bool,
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.starts_with('-') => Ok(v),
        _ => bail!("Missing value for {}", flag),
    }
}

impl CliArgs {
    /// Parses arguments, excluding the binary name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = CliArgs::default();
        let mut command: Option<Command> = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" | "help" => return Ok(CliArgs {
                    command: Command::Help,
                    ..parsed
                }),
                "-v" | "--verbose" => parsed.verbose = true,
                "-r" | "--root" => parsed.root = Some(value_for(&arg, args.next())?.into()),
                "-f" | "--file" => parsed.file = Some(value_for(&arg, args.next())?.into()),
                "-o" | "--output" => parsed.output = Some(value_for(&arg, args.next())?.into()),
                "--format" => {
                    parsed.format = match value_for(&arg, args.next())?.as_str() {
                        "ics" | "ical" => ExportFormat::Ics,
                        "json" => ExportFormat::Json,
                        other => bail!("Unknown export format '{}' (expected ics or json)", other),
                    }
                }
                cmd if command.is_none() && !cmd.starts_with('-') => {
                    command = Some(match cmd {
                        "list" => Command::List,
                        "export" => Command::Export,
                        "init-config" => Command::InitConfig,
                        other => bail!("Unknown command '{}'", other),
                    });
                }
                other => bail!("Unexpected argument '{}'", other),
            }
        }

        parsed.command = command.unwrap_or_default();
        Ok(parsed)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "dancecal v{} - Square dance schedule reader",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [list] [--file <schedule.csv>]", binary_name);
    println!(
        "    {} export [--format ics|json] [--output <file>]",
        binary_name
    );
    println!("    {} init-config", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -f, --file <path>     Read this spreadsheet export instead of the configured one.");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -o, --output <path>   Write the export to a file instead of stdout.");
    println!("        --format <fmt>    Export format: ics (default) or json.");
    println!("    -v, --verbose         Log every row decision to stderr.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXPORT COMMAND:");
    println!(
        "    {} export > dances.ics                 Save dances as a calendar",
        binary_name
    );
    println!(
        "    {} export --format json -o dances.json Save dances as JSON",
        binary_name
    );
    println!();
    println!("SPREADSHEET LAYOUT:");
    println!("    Date rows:  ,SATURDAY,,April 12   (weekday in B, date in D)");
    println!("    Dance rows: federation, club, levels, \"venue, street, line 3, city\",");
    println!("                caller/cuer, 7:30 - 10:00 comment, logo, \"lat,long\", map,");
    println!("                caller photo, cuer photo, contact, cost");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_to_list() {
        let a = parse(&[]).unwrap();
        assert_eq!(a.command, Command::List);
        assert!(!a.verbose);
    }

    #[test]
    fn export_with_options() {
        let a = parse(&["export", "--format", "json", "-o", "out.json", "--root", "/tmp/x"]).unwrap();
        assert_eq!(a.command, Command::Export);
        assert_eq!(a.format, ExportFormat::Json);
        assert_eq!(a.output, Some(PathBuf::from("out.json")));
        assert_eq!(a.root, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["list", "--help"]).unwrap().command, Command::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(&["--file"]).is_err());
        assert!(parse(&["--format", "xml"]).is_err());
        assert!(parse(&["frobnicate"]).is_err());
        assert!(parse(&["list", "export"]).is_err());
    }
}
