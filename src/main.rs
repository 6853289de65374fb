#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::{OutputHandler, RunOptions};
use clap::{ArgAction, Parser};
use tracing::Level;

mod solutions;

/// Advent of Code 2025 puzzle solver.
#[derive(Parser, Debug)]
struct Cli {
    /// The day's solution to run (e.g. 4, 7).
    day: u8,

    /// Sets an alternative input file to use over default input.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Measure and print the durations of parsing and solving parts.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Minimum duration (in milliseconds) required to print timing.
    /// 0 = always print.
    #[arg(long, value_name = "NUMBER", default_value_t)]
    min_timing_ms: u64,

    /// Log debug details, like intermediate grids, to stderr.
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    /// The input file to read, falling back to the day's default input.
    fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| {
            PathBuf::from("inputs").join(format!("day{:02}.txt", self.day))
        })
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Read an input file to a string.
fn read_input(path: &Path, is_default: bool) -> Result<String> {
    fs::read_to_string(path).with_context(|| {
        if is_default {
            format!(
                "default input file missing: {}\n\n\
                please create the file or provide the input file argument",
                path.display()
            )
        } else {
            format!("could not read input file at: {}", path.display())
        }
    })
}

struct CliOutputHandler {
    /// A minimum duration to filter any outputs of duration by.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn new(min_duration: Duration) -> Self {
        Self { min_duration }
    }

    fn format_duration(duration: Duration) -> String {
        const DECIMAL_PLACES: usize = 3;
        const UNITS: [(Duration, f64, &str); 3] = [
            (Duration::from_secs(1), 1.0, "seconds"),
            (Duration::from_millis(1), 1e3, "milliseconds"),
            (Duration::from_micros(1), 1e6, "microseconds"),
        ];

        UNITS
            .iter()
            .find(|(threshold, _, _)| duration >= *threshold)
            .map_or_else(
                || format!("{} nanoseconds", duration.as_nanos()),
                |(_, per_second, unit)| {
                    format!(
                        "{:.*} {unit}",
                        DECIMAL_PLACES,
                        duration.as_secs_f64() * per_second
                    )
                },
            )
    }

    /// Format a duration if there is one and it's not shorter than the minimum duration.
    fn format_optional_duration_above_min(&self, duration: Option<Duration>) -> Option<String> {
        duration
            .filter(|d| *d >= self.min_duration)
            .map(Self::format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {
        // do nothing
    }

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("Input parsed in {formatted_duration}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        if let Some(formatted_duration) = self.format_optional_duration_above_min(duration_opt) {
            println!("{output} ({formatted_duration})");
        } else {
            println!("{output}");
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let input_path = args.input_path();
    let input_str = read_input(&input_path, args.input.is_none())?;
    tracing::debug!(path = %input_path.display(), bytes = input_str.len(), "read input");

    let mut handler = CliOutputHandler::new(Duration::from_millis(args.min_timing_ms));
    let options = RunOptions { timed: args.timed };
    solutions::run_day(args.day, &input_str, &mut handler, options).map_err(|dyn_error| {
        let anyhow_error = Error::from_boxed(dyn_error);
        anyhow_error.context("failed to run solution")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_picks_largest_unit() {
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_millis(1500)),
            "1.500 seconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_micros(2500)),
            "2.500 milliseconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_nanos(1250)),
            "1.250 microseconds"
        );
        assert_eq!(
            CliOutputHandler::format_duration(Duration::from_nanos(999)),
            "999 nanoseconds"
        );
    }

    #[test]
    fn durations_below_minimum_are_hidden() {
        let handler = CliOutputHandler::new(Duration::from_millis(5));
        assert_eq!(
            handler.format_optional_duration_above_min(Some(Duration::from_millis(1))),
            None
        );
        assert_eq!(handler.format_optional_duration_above_min(None), None);
        assert!(
            handler
                .format_optional_duration_above_min(Some(Duration::from_millis(5)))
                .is_some()
        );
    }

    #[test]
    fn cli_defaults_input_path_by_day() {
        let args = Cli::parse_from(["aoc-2025", "7", "--verbose"]);
        assert_eq!(args.input_path(), PathBuf::from("inputs").join("day07.txt"));
        assert_eq!(args.log_level(), Level::DEBUG);

        let args = Cli::parse_from(["aoc-2025", "4", "-i", "example.txt"]);
        assert_eq!(args.input_path(), PathBuf::from("example.txt"));
        assert_eq!(args.log_level(), Level::INFO);
    }
}
