//! # parcelindex
//! Indexes shipment records ("parcels") by destination country for fast
//! per-country lookups and aggregate queries.
//!
//! ## Features
//! - Fixed 127-slot hash table keyed by a djb2 hash of the country name
//! - Each slot roots an unbalanced binary search tree ordered by weight
//! - Per-country listing, weight filters, totals, and min/max searches
//! - Flat-file loader with field validation
//! - Line-oriented menu over any reader/writer pair
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which loads the data file and runs the menu. All reusable logic and
//! unit tests live here so the project can be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Project: parcelindex
// Date: Oct 18, 2026
//
//   This module implements the interactive menu that accepts the
//   following commands (case-insensitive, countries may contain spaces):
//
//     `LIST <country>`                       -> All parcels, lightest first
//     `FILTER <country> <weight> HEAVIER|LIGHTER`
//                                            -> Parcels strictly above/below weight
//     `TOTAL <country>`                      -> Total weight and value
//     `VALUE <country>`                      -> Cheapest and most expensive parcel
//     `WEIGHT <country>`                     -> Lightest and heaviest parcel
//     `ADD <country> <weight> <value>`       -> Validate and insert one parcel
//     `STATS`                                -> Index shape summary
//     `HELP`                                 -> Show the command list
//     `EXIT` / `QUIT`                        -> Terminate the program
// =====================================================================
pub mod config;
pub mod error;
pub mod index;
pub mod ingest;
pub mod record;
pub mod session;

pub use error::{CommandError, IngestError, ParseError};
pub use index::{BucketTree, ParcelIndex, WeightFilter};
pub use ingest::{DEFAULT_DATA_FILE, LoadReport};
pub use record::{MAX_COUNTRY_LEN, Parcel, normalize_country};
pub use session::Session;

use std::io::{self, BufRead, Write};

use index::{BUCKET_COUNT, Extremes};

/// Command list printed by `HELP` and after unknown commands.
pub const USAGE: &str = "\
Commands:
  LIST <country>
  FILTER <country> <weight> HEAVIER|LIGHTER
  TOTAL <country>
  VALUE <country>
  WEIGHT <country>
  ADD <country> <weight> <value>
  STATS
  HELP
  EXIT";

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    Exit,
}


/// Read–Evaluate–Print Loop (REPL) over any line source.
///
/// Reads commands from `input` until `EXIT`/`QUIT` or end of input,
/// runs each against `session`, and writes responses to `out`.
///
/// # Example
/// ```
/// use parcelindex::{Session, repl_loop};
///
/// let mut session = Session::new();
/// let input = "ADD Canada 500 100\nTOTAL canada\nEXIT\n";
/// let mut out = Vec::new();
/// repl_loop(&mut session, input.as_bytes(), &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("total weight 500.00"));
/// ```
pub fn repl_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    for input_line in input.lines() {
        let full_command = input_line?;
        let (cmd, args) = parse_command(&full_command);

        if handle_command(&cmd, &args, session, out)? == CommandResult::Exit {
            break;
        }
        out.flush()?;
    }
    Ok(())
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut command_segments = line.split_whitespace();
    let cmd = command_segments.next().unwrap_or("").to_uppercase();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();

    (cmd, args)
}


/// Handles a single user command and returns whether the REPL should
/// continue or exit.
///
/// Argument problems are reported to `out` as `ERR: ...` and never end
/// the loop; only a failed write does.
///
/// # Arguments
///
/// * `cmd` - Uppercased command word (empty for a blank line).
/// * `args` - Remaining whitespace-separated tokens.
/// * `session` - Session holding the index to query or extend.
/// * `out` - Destination for the response text.
///
/// # Returns
///
/// `CommandResult::Exit` for `EXIT`/`QUIT`, otherwise
/// `CommandResult::Continue`. Only I/O errors from `out` are returned.
pub fn handle_command<W: Write>(
    cmd: &str,
    args: &[String],
    session: &mut Session,
    out: &mut W,
) -> io::Result<CommandResult> {
    let outcome = match cmd {
        "LIST" => list_command(args, session),
        "FILTER" => filter_command(args, session),
        "TOTAL" => total_command(args, session),
        "VALUE" => value_command(args, session),
        "WEIGHT" => weight_command(args, session),
        "ADD" => add_command(args, session),
        "STATS" => stats_command(args, session),
        "HELP" => Ok(USAGE.lines().map(str::to_string).collect()),

        "EXIT" | "QUIT" => {
            writeln!(out, "Exiting...")?;
            return Ok(CommandResult::Exit);
        }

        // Empty input
        "" => Ok(vec!["Enter a command.".to_string()]),

        // Unrecognized commands
        _ => {
            writeln!(out, "ERR: command '{}' not handled", cmd)?;
            writeln!(out, "{}", USAGE)?;
            return Ok(CommandResult::Continue);
        }
    };

    match outcome {
        Ok(lines) => {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
        Err(e) => writeln!(out, "ERR: {}", e)?,
    }
    Ok(CommandResult::Continue)
}


// =========================
// Command helpers
// =========================

type CommandOutput = Result<Vec<String>, CommandError>;

/// Joins the remaining tokens into one normalized country name.
fn country_arg(args: &[String], command: &'static str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::usage(command, "a country"));
    }
    Ok(normalize_country(&args.join(" ")))
}

fn no_parcels(country: &str) -> Vec<String> {
    vec![format!("No parcels found for {}.", country)]
}

fn format_parcel(parcel: &Parcel) -> String {
    format!(
        "{:<20}  weight: {:>9.2}  value: {:>8.2}",
        parcel.country(),
        parcel.weight(),
        parcel.value()
    )
}

fn format_extremes(extremes: Extremes<'_>, low_label: &str, high_label: &str) -> Vec<String> {
    vec![
        format!("{:<15} {}", low_label, format_parcel(extremes.lowest)),
        format!("{:<15} {}", high_label, format_parcel(extremes.highest)),
    ]
}

// LIST <country>
fn list_command(args: &[String], session: &Session) -> CommandOutput {
    let country = country_arg(args, "LIST")?;
    let Some(parcels) = session.index.list_all(&country) else {
        return Ok(no_parcels(&country));
    };

    let mut lines = vec![format!("Parcels for {}:", country)];
    lines.extend(parcels.map(format_parcel));
    Ok(lines)
}

// FILTER <country> <weight> HEAVIER|LIGHTER
fn filter_command(args: &[String], session: &Session) -> CommandOutput {
    let [country @ .., threshold, mode] = args else {
        return Err(CommandError::usage("FILTER", "a country, a weight and HEAVIER or LIGHTER"));
    };
    if country.is_empty() {
        return Err(CommandError::usage("FILTER", "a country, a weight and HEAVIER or LIGHTER"));
    }

    let country = normalize_country(&country.join(" "));
    let threshold_value = threshold
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| CommandError::InvalidThreshold(threshold.clone()))?;
    let filter = match mode.to_uppercase().as_str() {
        "HEAVIER" | "H" => WeightFilter::Heavier,
        "LIGHTER" | "L" => WeightFilter::Lighter,
        _ => return Err(CommandError::InvalidFilter(mode.clone())),
    };

    let Some(parcels) = session.index.list_by_weight(&country, threshold_value, filter) else {
        return Ok(no_parcels(&country));
    };

    let direction = match filter {
        WeightFilter::Heavier => "heavier",
        WeightFilter::Lighter => "lighter",
    };
    let lines: Vec<String> = parcels.map(format_parcel).collect();
    if lines.is_empty() {
        return Ok(vec![format!(
            "No parcels {} than {:.2} for {}.",
            direction, threshold_value, country
        )]);
    }

    let mut out = vec![format!(
        "Parcels for {} {} than {:.2}:",
        country, direction, threshold_value
    )];
    out.extend(lines);
    Ok(out)
}

// TOTAL <country>
fn total_command(args: &[String], session: &Session) -> CommandOutput {
    let country = country_arg(args, "TOTAL")?;
    let Some(totals) = session.index.totals(&country) else {
        return Ok(no_parcels(&country));
    };

    Ok(vec![format!(
        "{}: {} parcel(s), total weight {:.2}, total value {:.2}",
        country, totals.count, totals.weight, totals.value
    )])
}

// VALUE <country>
fn value_command(args: &[String], session: &Session) -> CommandOutput {
    let country = country_arg(args, "VALUE")?;
    Ok(match session.index.value_extremes(&country) {
        Some(extremes) => format_extremes(extremes, "Cheapest:", "Most expensive:"),
        None => no_parcels(&country),
    })
}

// WEIGHT <country>
fn weight_command(args: &[String], session: &Session) -> CommandOutput {
    let country = country_arg(args, "WEIGHT")?;
    Ok(match session.index.weight_extremes(&country) {
        Some(extremes) => format_extremes(extremes, "Lightest:", "Heaviest:"),
        None => no_parcels(&country),
    })
}

// ADD <country> <weight> <value>
fn add_command(args: &[String], session: &mut Session) -> CommandOutput {
    let [country @ .., weight, value] = args else {
        return Err(CommandError::usage("ADD", "a country, a weight and a value"));
    };
    if country.is_empty() {
        return Err(CommandError::usage("ADD", "a country, a weight and a value"));
    }

    session.add_parcel(&country.join(" "), weight, value)?;
    Ok(vec!["OK".to_string()])
}

// STATS
fn stats_command(args: &[String], session: &Session) -> CommandOutput {
    if !args.is_empty() {
        return Err(CommandError::UnexpectedArguments { command: "STATS" });
    }

    let stats = session.index.stats();
    let deepest = match stats.deepest_bucket {
        Some((slot, depth)) => format!("slot {} (depth {})", slot, depth),
        None => "none".to_string(),
    };
    Ok(vec![
        format!("records: {}", stats.records),
        format!("occupied buckets: {}/{}", stats.occupied_buckets, BUCKET_COUNT),
        format!("deepest bucket: {}", deepest),
    ])
}



// =================================================================
// lib.rs Unit tests
// =================================================================
