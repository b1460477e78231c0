// SPDX-License-Identifier: MIT

//!
//! *Part of the wider TimelineGrid project*
//!
//! Lay a timeline out from the command line
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use timeline_grid_core::{EventInterval, TimelineWindow};
use timeline_grid_layout::{Config, LargeWindow, LayoutEngine};

#[macro_use]
extern crate log;
extern crate simplelog;

/// TimelineGrid entry point
///
/// One of:
/// - Lay out the events in a timeline document
/// - List the axis labels for a timeline document's window
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("timeline_grid")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]) {
        eprintln!("Error: unable to set up logging: {error}");
    }

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Carry out the command, printing its JSON output
fn run(args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(args.config.as_deref())?;
    let data = fs::read_to_string(&args.input)?;
    let document: TimelineDocument = serde_json::from_str(&data)?;
    info!(
        "{} events on {}",
        document.events.len(),
        document.window.date_range_label()
    );

    // Both commands work per column, so large windows are checked for either
    let assume_yes = args.yes;
    let engine = LayoutEngine::new(move |large| assume_yes || confirm_large_window(large))
        .with_params(config.layout_params());

    let output = match args.command {
        Command::Layout => {
            let result = engine.layout(&document.window, &document.events)?;
            to_json(&result, args.pretty)?
        }
        Command::Axis => to_json(&engine.axis_ticks(&document.window)?, args.pretty)?,
    };
    println!("{output}");
    Ok(())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Ask on stdin whether to lay out a large window.  Anything other than a yes
/// (including no answer at all) declines.
fn confirm_large_window(large: LargeWindow) -> bool {
    eprintln!(
        "This timeline is {} columns wide (more than {}) and may be slow to draw.",
        large.total_columns, large.threshold
    );
    eprint!("Load the timeline anyway? [y/N] ");
    if io::stderr().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(error) => {
            warn!("Could not read an answer: {error}");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// The input file: a window and the events to lay out on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    pub window: TimelineWindow,

    #[serde(default)]
    pub events: Vec<EventInterval>,
}

/// TimelineGrid CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "TimelineGrid layout tool",
    after_help = "Output is JSON on stdout, logs go to stderr"
)]
pub struct Cli {
    /// What to compute
    #[arg(value_enum)]
    pub command: Command,

    /// Path to the timeline document (JSON)
    pub input: PathBuf,

    /// Path to the config (defaults to the platform config file, if any)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lay out large timelines without asking
    #[arg(long)]
    pub yes: bool,

    /// Pretty print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Log debug messages
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Layout,
    Axis,
}

impl ValueEnum for Command {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Layout, Self::Axis]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Command::Layout => Some(
                PossibleValue::new("layout").help("Print the columns and row of every visible event"),
            ),
            Command::Axis => {
                Some(PossibleValue::new("axis").help("Print the labels along the timeline's axis"))
            }
        }
    }
}
