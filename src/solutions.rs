//! Solutions implemented for Advent of Code 2025.
//!
//! This module provides [`run_day`] to dynamically run a solution by its day.
//!
//! Steps to make a solution available to run:
//! 1. Make a submodule to hold the solution implementation.
//! 2. Have the submodule implement [`AdventOfCode2025<DAY>`] for its day as a [`SolutionRunner`].
//! 3. Import the submodule below `IMPORT SUBMODULES HERE`
//! 4. Add a match case to run [`AdventOfCode2025<DAY>`] for a day, below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! // matching for day 4
//! 4 => AdventOfCode2025::<4>::run(input, handler, options),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, RunOptions, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day04;
mod day07;

/// A structure collecting solutions by day.
///
/// In a submodule, implement this as a [`SolutionRunner`] for the day with
/// [`#[solution_runner]`][aoc_framework::runner::solution_runner]:
///
/// ```ignore
/// #[solution_runner(name = "Day 4", parsed = PaperGrid, part_one = Day04, part_two = Day04)]
/// impl super::AdventOfCode2025<4> {}
/// ```
struct AdventOfCode2025<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// Run a solution based on the day.
///
/// # Errors
///
/// If the solution for the given day is not available, a [`DayNotAvailable`] error is returned.
///
/// Any dynamically dispatched error from running the solution is propagated.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    options: RunOptions,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        4 => AdventOfCode2025::<4>::run(input, handler, options),
        7 => AdventOfCode2025::<7>::run(input, handler, options),
        _ => Err(DayNotAvailable(day).into()),
    }
}
