// File: ./src/cli.rs
//! Command-line parsing shared by the binary, plus the help text.
use crate::config::Config;
use crate::context::AppContext;
use crate::error::ValidationError;
use crate::timetable::Timetable;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive grid.
    Interactive,
    /// Render the given courses to stdout and exit.
    Print {
        json: bool,
        no_weekend: bool,
        no_evening: bool,
        courses: Vec<String>,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: Option<PathBuf>,
    pub command: Command,
}

/// Parses arguments (without the binary name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut root = None;
    let mut rest = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-r" | "--root" => match iter.next() {
                Some(path) => root = Some(PathBuf::from(path)),
                None => bail!("{} requires a path", arg),
            },
            "-h" | "--help" | "help" => {
                return Ok(CliArgs {
                    root,
                    command: Command::Help,
                });
            }
            _ => rest.push(arg.clone()),
        }
    }

    let command = match rest.first().map(String::as_str) {
        None => Command::Interactive,
        Some("print") => {
            let mut json = false;
            let mut no_weekend = false;
            let mut no_evening = false;
            let mut courses = Vec::new();
            for a in &rest[1..] {
                match a.as_str() {
                    "--json" => json = true,
                    "--no-weekend" => no_weekend = true,
                    "--no-evening" => no_evening = true,
                    flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                    _ => courses.push(a.clone()),
                }
            }
            Command::Print {
                json,
                no_weekend,
                no_evening,
                courses,
            }
        }
        Some(other) => bail!("Unknown command: {} (see --help)", other),
    };

    Ok(CliArgs { root, command })
}

/// Adds one `name|timecode[|location[|instructor]]` argument to the timetable.
pub fn add_course_arg(timetable: &mut Timetable, arg: &str) -> Result<(), ValidationError> {
    let mut parts = arg.splitn(4, '|');
    let name = parts.next().unwrap_or("");
    let time = parts.next().unwrap_or("");
    let location = parts.next();
    let instructor = parts.next();
    timetable
        .add_course(name, time, location, instructor)
        .map(|_| ())
}

/// Builds the timetable for `print`; the first rejected argument aborts the run.
pub fn build_timetable(courses: &[String]) -> Result<Timetable> {
    let mut timetable = Timetable::new();
    for arg in courses {
        add_course_arg(&mut timetable, arg)
            .with_context(|| format!("Rejected '{}'", arg))?;
    }
    Ok(timetable)
}

pub fn print_help(binary_name: &str, ctx: &dyn AppContext) {
    println!(
        "Timegrid v{} - Weekly course timetable from compact time codes",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!(
        "    {} print [--json] [--no-weekend] [--no-evening] <course>...",
        binary_name
    );
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and log.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("PRINT COMMAND:");
    println!("    <course> is name|timecode[|location[|instructor]]");
    println!(
        "    {} print \"Calculus|T3T4R3R4|Room 101|Dr. Chen\"",
        binary_name
    );
    println!(
        "    {} print --json \"Physics|M1M2\" \"Lab|F7F8F9\"",
        binary_name
    );
    println!();
    println!("TIME CODES:");
    println!("    Day letters:   M Mon  T Tue  W Wed  R Thu  F Fri  S Sat  U Sun");
    println!("    Periods:       1 8:00   2 9:00   3 10:10  4 11:10  n 12:10");
    println!("                   5 13:20  6 14:20  7 15:30  8 16:30  9 17:30");
    println!("                   a 18:30  b 19:30  c 20:30  d 21:30");
    println!("    Example:       T3T4R3R4 = Tue 3-4, Thu 3-4 (case-insensitive)");
    println!();
    println!("KEYBINDINGS:");
    println!("    Press '?' inside the app for full interactive help");
    println!();
    match Config::get_path_string(ctx) {
        Ok(path) => println!("CONFIG FILE:\n    {}", path),
        Err(e) => println!("CONFIG FILE:\n    unavailable ({})", e),
    }
}
